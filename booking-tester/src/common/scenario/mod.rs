use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod catalog;
pub mod smoke;
pub mod sweeps;

/// Per-iteration state handed to a scenario check.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub seed: u64,
    pub rng: ChaCha8Rng,
    pub verbose: bool,
}

impl ScenarioCtx {
    #[must_use]
    pub fn new(seed: u64, verbose: bool) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            verbose,
        }
    }
}

pub type ScenarioCheck = fn(&mut ScenarioCtx) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub check: ScenarioCheck,
}

impl TestScenario {
    #[must_use]
    pub const fn new(key: &'static str, name: &'static str, check: ScenarioCheck) -> Self {
        Self { key, name, check }
    }

    /// Run the check once against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the first failed expectation.
    pub fn run(&self, ctx: &mut ScenarioCtx) -> Result<()> {
        (self.check)(ctx)
    }
}

/// Every registered scenario, smoke first.
pub fn all_scenarios() -> Vec<TestScenario> {
    let mut scenarios = vec![smoke::smoke_scenario()];
    scenarios.extend(catalog::catalog_scenarios());
    scenarios.extend(sweeps::sweep_scenarios());
    scenarios
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = name.to_lowercase();
    all_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}
