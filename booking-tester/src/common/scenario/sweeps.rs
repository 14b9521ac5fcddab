//! Randomized invariant sweeps over generated catalogs and delta sequences.
use anyhow::{Context, Result, ensure};
use booking_core::{
    Calculator, Catalog, CatalogItem, FeePolicy, PER_ORDER_MAX, Selection, change_quantity,
    compute_summary,
};
use rand::Rng;
use rust_decimal::Decimal;

use super::{ScenarioCtx, TestScenario};

const MAX_ITEMS: usize = 6;
const MAX_PRICE_CENTS: i64 = 50_000;
const MAX_AVAILABLE: u32 = 30;
const MAX_STEPS: usize = 40;
const DELTA_RANGE: std::ops::RangeInclusive<i64> = -15..=15;

pub fn sweep_scenarios() -> Vec<TestScenario> {
    vec![
        TestScenario::new("clamp-sweep", "Quantity Clamp Sweep", clamp_sweep),
        TestScenario::new("subtotal-sweep", "Subtotal Sum Sweep", subtotal_sweep),
        TestScenario::new("monotonic-sweep", "Delta Monotonicity Sweep", monotonic_sweep),
    ]
}

fn random_catalog(ctx: &mut ScenarioCtx) -> Result<Catalog> {
    let count = ctx.rng.gen_range(1..=MAX_ITEMS);
    let items = (0..count)
        .map(|i| {
            let cents = ctx.rng.gen_range(0..=MAX_PRICE_CENTS);
            let available = ctx.rng.gen_range(0..=MAX_AVAILABLE);
            CatalogItem::new(
                format!("item-{i}"),
                format!("Item {i}"),
                Decimal::new(cents, 2),
                available,
            )
        })
        .collect();
    Catalog::new(items).with_context(|| format!("generated catalog for seed {}", ctx.seed))
}

fn pick_item<'a>(ctx: &mut ScenarioCtx, catalog: &'a Catalog) -> &'a CatalogItem {
    let index = ctx.rng.gen_range(0..catalog.len());
    &catalog.items()[index]
}

fn random_selection(ctx: &mut ScenarioCtx, catalog: &Catalog) -> Selection {
    let steps = ctx.rng.gen_range(0..=MAX_STEPS);
    (0..steps).fold(Selection::new(), |selection, _| {
        let id = pick_item(ctx, catalog).id.clone();
        let delta = ctx.rng.gen_range(DELTA_RANGE);
        change_quantity(&selection, id.as_str(), delta, catalog)
    })
}

fn clamp_sweep(ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = random_catalog(ctx)?;
    let calculator = Calculator::default();
    let mut selection = Selection::new();
    let steps = ctx.rng.gen_range(1..=MAX_STEPS);

    for step in 0..steps {
        let item = pick_item(ctx, &catalog);
        let delta = ctx.rng.gen_range(DELTA_RANGE);
        selection = change_quantity(&selection, item.id.as_str(), delta, &catalog);

        for item in catalog.iter() {
            let quantity = selection.quantity(item.id.as_str());
            let cap = calculator.quantity_cap(item);
            ensure!(
                quantity <= cap && cap <= PER_ORDER_MAX,
                "step {step}: {} at {quantity} exceeds cap {cap}",
                item.id
            );
        }
        if ctx.verbose {
            println!("     step {step}: {} {delta:+}", item.id);
        }
    }

    for item in catalog.iter() {
        let cap = calculator.quantity_cap(item);
        let full = calculator.set_quantity(&selection, item.id.as_str(), i64::from(cap), &catalog);
        let again = change_quantity(&full, item.id.as_str(), 1, &catalog);
        ensure!(again == full, "increment at cap moved {}", item.id);
    }
    Ok(())
}

fn subtotal_sweep(ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = random_catalog(ctx)?;
    let selection = random_selection(ctx, &catalog);
    let rate = Decimal::new(ctx.rng.gen_range(0..=25), 2);
    let summary = compute_summary(&selection, &catalog, &FeePolicy::proportional("Fee", rate));

    let expected: Decimal = catalog
        .iter()
        .map(|item| item.unit_price * Decimal::from(selection.quantity(item.id.as_str())))
        .sum();
    ensure!(
        summary.subtotal == expected,
        "subtotal {} != sum of lines {expected}",
        summary.subtotal
    );
    ensure!(
        summary.grand_total == summary.subtotal + summary.service_fee,
        "grand total {} != subtotal {} + fee {}",
        summary.grand_total,
        summary.subtotal,
        summary.service_fee
    );
    if !summary.is_empty() {
        ensure!(
            summary.service_fee == summary.subtotal * rate,
            "fee {} at rate {rate}",
            summary.service_fee
        );
    }
    Ok(())
}

fn monotonic_sweep(ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = random_catalog(ctx)?;
    let calculator = Calculator::default();
    let base = random_selection(ctx, &catalog);
    let item = pick_item(ctx, &catalog);
    let id = item.id.as_str();
    let cap = calculator.quantity_cap(item);

    let a = ctx.rng.gen_range(DELTA_RANGE);
    let b = ctx.rng.gen_range(DELTA_RANGE);
    let (smaller, larger) = if a <= b { (a, b) } else { (b, a) };
    let low = change_quantity(&base, id, smaller, &catalog).quantity(id);
    let high = change_quantity(&base, id, larger, &catalog).quantity(id);

    ensure!(
        low <= high,
        "delta {smaller} gave {low} but delta {larger} gave {high}"
    );
    ensure!(high <= cap, "delta {larger} exceeded cap {cap}");

    let untouched = change_quantity(&base, "not-in-catalog", larger, &catalog);
    ensure!(untouched == base, "unknown id changed the selection");
    Ok(())
}
