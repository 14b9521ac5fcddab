use booking_core::{
    CatalogLoader, EmbeddedCatalogs, FeePolicy, PER_ORDER_MAX, REGISTRATION_TYPES, Selection,
    TICKET_TIERS, can_increment, change_quantity, compute_summary,
};
use rust_decimal_macros::dec;

#[test]
fn modal_order_for_two_general_tickets() {
    let catalog = EmbeddedCatalogs.load_catalog(TICKET_TIERS).unwrap();
    let mut selection = Selection::new();
    selection = change_quantity(&selection, "general", 1, &catalog);
    selection = change_quantity(&selection, "general", 1, &catalog);

    let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());
    let display = summary.display();
    assert_eq!(display.subtotal, "$170.00");
    assert_eq!(display.fees[0].amount, "$17.00");
    assert_eq!(display.grand_total, "$187.00");
}

#[test]
fn registration_order_skips_sold_out_types() {
    let catalog = EmbeddedCatalogs.load_catalog(REGISTRATION_TYPES).unwrap();
    let mut selection = Selection::new();
    selection = change_quantity(&selection, "1", 2, &catalog);
    selection = change_quantity(&selection, "3", 2, &catalog);
    selection = change_quantity(&selection, "2", 1, &catalog);

    let summary = compute_summary(&selection, &catalog, &FeePolicy::registration());
    let names: Vec<&str> = summary
        .line_items
        .iter()
        .map(|line| line.name.as_str())
        .collect();
    assert_eq!(names, vec!["Standard Pass", "Student Pass"]);
    assert_eq!(summary.subtotal, dec!(157));
    assert_eq!(summary.grand_total, dec!(160.75));
}

#[test]
fn summary_serializes_for_handoff() {
    let catalog = EmbeddedCatalogs.load_catalog(TICKET_TIERS).unwrap();
    let selection = change_quantity(&Selection::new(), "vip", 1, &catalog);
    let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["line_items"][0]["item_id"], "vip");
    assert_eq!(value["fees"][0]["label"], "Service fee");

    let selection_json = serde_json::to_value(&selection).unwrap();
    assert_eq!(selection_json["vip"], 1);
}

#[test]
fn modal_order_stops_at_the_per_order_max() {
    let catalog = EmbeddedCatalogs.load_catalog(TICKET_TIERS).unwrap();
    let selection = change_quantity(&Selection::new(), "general", 25, &catalog);
    assert_eq!(selection.quantity("general"), PER_ORDER_MAX);
    assert!(!can_increment(&selection, "general", &catalog));

    let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());
    let display = summary.display();
    assert_eq!(display.fees[0].label, "Service fee (10%)");
    assert_eq!(display.grand_total, "$935.00");
}
