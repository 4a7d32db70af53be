//! End-to-end flows through the configurator controller.

use std::time::Instant;

use plan_configurator::app::{Configurator, Controls, DisplaySlot, PlanSummary};
use plan_configurator::board::CardLocation;
use plan_configurator::config::TimingConfig;
use plan_configurator::models::{Money, PlanCatalog, Tier};

mod fixtures;
use fixtures::*;

fn header(configurator: &Configurator, tier: Tier) -> String {
    configurator
        .displays()
        .get(tier, DisplaySlot::Header)
        .map(|display| display.text.clone())
        .unwrap_or_default()
}

#[test]
fn test_initial_payments() {
    let configurator = builtin_configurator();
    assert_eq!(header(&configurator, Tier::Platinum), "$595.67");
    assert_eq!(header(&configurator, Tier::Gold), "$581.67");
    assert_eq!(header(&configurator, Tier::Silver), "$563.67");
    assert_eq!(header(&configurator, Tier::Bronze), "$551.67");
}

#[test]
fn test_move_then_reset() {
    let mut configurator = builtin_configurator();
    let now = Instant::now();

    let glasscoat = configurator
        .board()
        .find_feature(Tier::Silver, "glasscoat")
        .unwrap();
    let end = configurator.board().zone(Tier::Bronze).len();
    configurator
        .move_card(glasscoat, CardLocation::new(Tier::Bronze, end), now)
        .unwrap();

    assert_eq!(header(&configurator, Tier::Bronze), "$563.67");
    assert_eq!(header(&configurator, Tier::Silver), "$551.67");
    assert_eq!(
        configurator.configuration().features(Tier::Bronze),
        ["arc", "gap", "glasscoat"]
    );

    assert!(configurator.request_reset());
    assert!(configurator.confirm_reset(now));
    assert_eq!(header(&configurator, Tier::Bronze), "$551.67");
    assert_eq!(
        configurator.configuration(),
        configurator.catalog().default_plan()
    );
    assert_eq!(configurator.toasts().len(), 1);
}

#[test]
fn test_transfer_preserves_total() {
    let mut configurator = builtin_configurator();
    let now = Instant::now();
    let before: Money = Tier::ALL.iter().map(|&t| configurator.price(t)).sum();

    configurator
        .move_card(
            CardLocation::new(Tier::Platinum, 4),
            CardLocation::new(Tier::Bronze, 0),
            now,
        )
        .unwrap();

    let after: Money = Tier::ALL.iter().map(|&t| configurator.price(t)).sum();
    assert_eq!(before, after);
    assert_eq!(
        configurator.price(Tier::Bronze) - Money::from_decimal(551.67).unwrap(),
        Money::from_decimal(14.00).unwrap()
    );
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut configurator = builtin_configurator();
    let first = configurator.rebuild_configuration().clone();
    let second = configurator.rebuild_configuration().clone();
    assert_eq!(first, second);
    assert_eq!(&first, configurator.catalog().default_plan());
}

#[test]
fn test_unknown_feature_prices_at_zero() {
    let mut configurator = builtin_configurator();
    configurator.place_card(Tier::Bronze, "mystery", Instant::now());

    assert!(configurator
        .configuration()
        .contains(Tier::Bronze, "mystery"));
    assert_eq!(header(&configurator, Tier::Bronze), "$551.67");
}

#[test]
fn test_save_shows_summary_after_delay() {
    let mut configurator = builtin_configurator();
    let now = Instant::now();
    assert!(configurator.request_save(now));
    assert!(!configurator.request_save(now));
    assert!(configurator.save_flow().unwrap().summary().is_none());

    configurator.tick(now + configurator.timing().save_delay());
    let summary = configurator.save_flow().unwrap().summary().unwrap();
    assert_eq!(summary, &configurator.summary());
    assert_eq!(
        configurator
            .displays()
            .get(Tier::Gold, DisplaySlot::Summary)
            .unwrap()
            .text,
        "$581.67"
    );
}

#[test]
fn test_custom_catalog() {
    let catalog = PlanCatalog::from_toml_str(SMALL_CATALOG).unwrap();
    let configurator = Configurator::new(catalog, Controls::default(), TimingConfig::default());
    assert_eq!(configurator.price_string(Tier::Gold), "$112.50");
    assert_eq!(configurator.price_string(Tier::Bronze), "$102.50");
    assert_eq!(configurator.price_string(Tier::Platinum), "$100.00");

    let summary = PlanSummary::new(configurator.configuration(), configurator.catalog());
    assert!(summary.to_text().contains("Gold: $112.50/month"));
}

#[test]
fn test_controls_absent() {
    let controls = Controls {
        footer_totals: false,
        save: false,
        reset: false,
    };
    let mut configurator = Configurator::new(
        PlanCatalog::builtin().unwrap(),
        controls,
        TimingConfig::default(),
    );
    let now = Instant::now();
    assert!(!configurator.request_save(now));
    assert!(!configurator.request_reset());
    assert!(configurator
        .displays()
        .get(Tier::Gold, DisplaySlot::Footer)
        .is_none());

    configurator
        .move_card(
            CardLocation::new(Tier::Gold, 0),
            CardLocation::new(Tier::Silver, 0),
            now,
        )
        .unwrap();
    assert_eq!(header(&configurator, Tier::Silver), "$588.67");
}
