use anyhow::{Context, Result};

use super::catalog::catalog_scenarios;
use super::{ScenarioCtx, TestScenario};

pub fn smoke_scenario() -> TestScenario {
    TestScenario::new("smoke", "Smoke Test", run_smoke)
}

/// Every fixed-outcome check in one pass.
fn run_smoke(ctx: &mut ScenarioCtx) -> Result<()> {
    for scenario in catalog_scenarios() {
        scenario
            .run(ctx)
            .with_context(|| format!("smoke step {}", scenario.key))?;
    }
    Ok(())
}
