use anyhow::{Context, Result, ensure};
use booking_core::{
    Catalog, CatalogLoader, EmbeddedCatalogs, FeePolicy, REGISTRATION_TYPES, Selection,
    TICKET_TIERS, can_increment, change_quantity, compute_summary,
};
use booking_ui::{Navigator, PaymentMethod, PaymentPage, Screen, TicketModal};
use rust_decimal::Decimal;

use super::{ScenarioCtx, TestScenario};

pub fn catalog_scenarios() -> Vec<TestScenario> {
    vec![
        TestScenario::new("modal-totals", "Ticket Modal Totals", modal_totals),
        TestScenario::new("single-ticket-fee", "Single Ticket Service Fee", single_ticket_fee),
        TestScenario::new("per-order-cap", "Per-Order Quantity Cap", per_order_cap),
        TestScenario::new("availability-cap", "Availability Cap", availability_cap),
        TestScenario::new("sold-out", "Sold-Out Items Stay Empty", sold_out_stays_empty),
        TestScenario::new("unknown-item", "Unknown Item Is Ignored", unknown_item_is_ignored),
        TestScenario::new("registration-fees", "Registration Fixed Fees", registration_fees),
        TestScenario::new("checkout-flow", "Modal To Payment Flow", checkout_flow),
    ]
}

fn tiers() -> Result<Catalog> {
    EmbeddedCatalogs
        .load_catalog(TICKET_TIERS)
        .context("loading ticket tiers")
}

fn registration_types() -> Result<Catalog> {
    EmbeddedCatalogs
        .load_catalog(REGISTRATION_TYPES)
        .context("loading registration types")
}

fn repeat_change(catalog: &Catalog, item_id: &str, delta: i64, times: usize) -> Selection {
    (0..times).fold(Selection::new(), |selection, _| {
        change_quantity(&selection, item_id, delta, catalog)
    })
}

fn modal_totals(_ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = tiers()?;
    let selection = Selection::from_raw([("general", 2)]);
    let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());
    ensure!(
        summary.subtotal == Decimal::new(170, 0),
        "subtotal was {}",
        summary.subtotal
    );
    ensure!(
        summary.service_fee == Decimal::new(17, 0),
        "service fee was {}",
        summary.service_fee
    );
    ensure!(
        summary.grand_total == Decimal::new(187, 0),
        "grand total was {}",
        summary.grand_total
    );
    let display = summary.display();
    ensure!(display.grand_total == "$187.00", "displayed {}", display.grand_total);
    Ok(())
}

fn single_ticket_fee(_ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = tiers()?;
    let selection = change_quantity(&Selection::new(), "general", 1, &catalog);
    let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());
    ensure!(
        summary.service_fee == Decimal::new(850, 2),
        "service fee was {}",
        summary.service_fee
    );
    ensure!(
        summary.grand_total == Decimal::new(9350, 2),
        "grand total was {}",
        summary.grand_total
    );
    Ok(())
}

fn per_order_cap(_ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = tiers()?;
    let selection = repeat_change(&catalog, "vip", 1, 11);
    ensure!(
        selection.quantity("vip") == 10,
        "eleven increments left {} vip tickets",
        selection.quantity("vip")
    );
    ensure!(
        !can_increment(&selection, "vip", &catalog),
        "increment still offered at the cap"
    );
    let again = change_quantity(&selection, "vip", 1, &catalog);
    ensure!(again == selection, "increment at the cap changed the selection");
    Ok(())
}

fn availability_cap(_ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = registration_types()?;
    let selection = repeat_change(&catalog, "4", 1, 9);
    ensure!(
        selection.quantity("4") == 6,
        "workshop bundle reached {} with 6 available",
        selection.quantity("4")
    );
    Ok(())
}

fn sold_out_stays_empty(_ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = registration_types()?;
    let selection = repeat_change(&catalog, "1", 1, 5);
    ensure!(
        selection.quantity("1") == 0,
        "sold-out item rose to {}",
        selection.quantity("1")
    );
    ensure!(
        !can_increment(&selection, "1", &catalog),
        "increment offered on a sold-out item"
    );
    Ok(())
}

fn unknown_item_is_ignored(_ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = tiers()?;
    let selection = Selection::from_raw([("general", 3)]);
    let next = change_quantity(&selection, "backstage", 2, &catalog);
    ensure!(next == selection, "unknown id changed the selection");
    Ok(())
}

fn registration_fees(_ctx: &mut ScenarioCtx) -> Result<()> {
    let catalog = registration_types()?;
    let policy = FeePolicy::registration();
    let empty = compute_summary(&Selection::new(), &catalog, &policy);
    ensure!(
        empty.grand_total == Decimal::ZERO,
        "empty order totals {}",
        empty.grand_total
    );

    let selection = Selection::from_raw([("2", 1), ("3", 2)]);
    let summary = compute_summary(&selection, &catalog, &policy);
    ensure!(
        summary.subtotal == Decimal::new(157, 0),
        "subtotal was {}",
        summary.subtotal
    );
    ensure!(
        summary.grand_total == Decimal::new(16075, 2),
        "grand total was {}",
        summary.grand_total
    );
    ensure!(summary.fees.len() == 2, "expected two fee lines");
    Ok(())
}

fn checkout_flow(_ctx: &mut ScenarioCtx) -> Result<()> {
    let mut nav = Navigator::new(Screen::TicketModal);
    let mut modal = TicketModal::new(tiers()?);
    modal.open();
    ensure!(modal.select_tier("general"), "general tier not selectable");
    modal.increment();
    ensure!(modal.proceed(), "modal did not reach checkout");
    let request = modal.checkout().context("checkout request missing")?;

    ensure!(nav.go(Screen::Payment), "payment screen unreachable");
    let mut payment = PaymentPage::new(request);
    payment.select_method(PaymentMethod::Card);
    let confirmation = payment.submit().context("payment not submitted")?;
    ensure!(
        confirmation.amount == Decimal::new(187, 0),
        "confirmed {}",
        confirmation.amount
    );
    ensure!(
        nav.back() == Some(Screen::TicketModal),
        "payment did not return to the modal"
    );
    Ok(())
}
