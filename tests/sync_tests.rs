//! Host synchronization bridge tests.
//!
//! Covers the controlled-prop reconciliation protocol through the deck:
//!
//! - Outbound reports reflect post-mutation state
//! - The compact tabs-data list is emitted only when the bound-tab content
//!   signature moves
//! - Inbound changes arm a one-shot guard that swallows exactly one
//!   outbound cycle
//! - Initial-mount suppression under persistence
//! - Controlled active-tab references resolve by layout id

mod common;

use common::{sample_deck, sample_registry};
use tabdeck::tab::Tab;
use tabdeck::{DeckConfig, TabAction, TabDeck};

// ============================================================================
// Outbound reporting
// ============================================================================

#[test]
fn report_reflects_state_after_the_mutation() {
    let mut deck = sample_deck();
    deck.report();

    deck.handle_action(TabAction::ChooseLayout("home".to_string()));
    let report = deck.report().unwrap();
    assert_eq!(report.active_tab.as_deref(), Some("home"));
    let data = report.active_tab_data.unwrap();
    assert_eq!(data.layout_id, "home");
    assert_eq!(data.name, "Home");
    assert_eq!(report.tabs.len(), 1);
}

#[test]
fn tabs_data_only_emitted_when_content_set_changes() {
    let mut deck = sample_deck();
    // First report establishes the (empty) content set.
    assert!(deck.report().unwrap().tabs_data.is_some());

    // Renaming the selector tab changes tabs but not content.
    let id = deck.manager().active_tab_id();
    deck.handle_action(TabAction::Rename(id, "Scratch".to_string()));
    assert!(deck.report().unwrap().tabs_data.is_none());

    // Binding a layout changes the content set.
    deck.handle_action(TabAction::ChooseLayout("home".to_string()));
    let report = deck.report().unwrap();
    let records = report.tabs_data.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].layout_id, "home");

    // Pinning afterwards does not.
    deck.handle_action(TabAction::Pin(id, true));
    assert!(deck.report().unwrap().tabs_data.is_none());
}

#[test]
fn unbound_active_tab_reports_no_active_layout() {
    let mut deck = sample_deck();
    let report = deck.report().unwrap();
    assert_eq!(report.active_tab, None);
    assert!(report.active_tab_data.is_none());
}

// ============================================================================
// Inbound reconciliation
// ============================================================================

#[test]
fn controlled_snapshot_replaces_state_and_swallows_one_report() {
    let mut deck = sample_deck();
    deck.report();

    let restored = vec![
        Tab::new_bound("home".to_string(), "Home", None, None),
        Tab::new_unbound(),
    ];
    let first_id = restored[0].id;
    deck.apply_controlled_tabs(restored);

    assert_eq!(deck.manager().tab_count(), 2);
    assert_eq!(deck.manager().active_tab_id(), first_id);
    // Restored bound tabs await host content.
    assert!(deck.loading_tabs().contains(&first_id));

    // The reflecting cycle pushes nothing back.
    assert!(deck.report().is_none());

    // The guard is one-shot: the next real mutation reports again.
    deck.handle_action(TabAction::Rename(first_id, "Back".to_string()));
    assert!(deck.report().is_some());
}

#[test]
fn identical_controlled_snapshot_changes_nothing() {
    let mut deck = sample_deck();
    deck.report();

    let same = deck.manager().tabs().to_vec();
    let active = deck.manager().active_tab_id();
    deck.apply_controlled_tabs(same);

    assert_eq!(deck.manager().active_tab_id(), active);
    // No inbound change, so the next cycle still reports.
    assert!(deck.report().is_some());
}

#[test]
fn controlled_snapshot_with_vanished_active_falls_back_to_first() {
    let mut deck = sample_deck();
    deck.handle_action(TabAction::NewTab);
    deck.report();

    let replacement = vec![Tab::new_unbound(), Tab::new_unbound()];
    let first = replacement[0].id;
    deck.apply_controlled_tabs(replacement);
    assert_eq!(deck.manager().active_tab_id(), first);
}

#[test]
fn controlled_tabs_json_round_trips_through_the_wire() {
    let mut deck = sample_deck();
    deck.handle_action(TabAction::ChooseLayout("home".to_string()));
    deck.report();

    // Serialize the reported tabs as the host would persist them, then feed
    // them back in as a controlled snapshot.
    let wire = serde_json::to_string(deck.manager().tabs()).unwrap();
    deck.apply_controlled_tabs_json(&wire).unwrap();
    // Identical state: no inbound change, next cycle still reports.
    assert!(deck.report().is_some());

    assert!(deck.apply_controlled_tabs_json("{broken").is_err());
}

#[test]
fn controlled_active_resolves_by_layout_id() {
    let mut deck = sample_deck();
    deck.handle_action(TabAction::ChooseLayout("home".to_string()));
    let home_tab = deck.manager().active_tab_id();

    deck.handle_action(TabAction::NewTab);
    assert_ne!(deck.manager().active_tab_id(), home_tab);
    deck.report();

    deck.apply_controlled_active("home");
    assert_eq!(deck.manager().active_tab_id(), home_tab);
    assert!(deck.report().is_none());

    // Unknown layout id is ignored.
    deck.apply_controlled_active("nope");
    assert_eq!(deck.manager().active_tab_id(), home_tab);
}

// ============================================================================
// Initial-mount suppression
// ============================================================================

#[test]
fn persistence_suppresses_only_the_first_push() {
    let config = DeckConfig {
        persistence: true,
        ..DeckConfig::default()
    };
    let mut deck = TabDeck::new(config, sample_registry());

    assert!(deck.report().is_none());
    assert!(deck.report().is_some());
}

#[test]
fn no_suppression_without_persistence() {
    let mut deck = sample_deck();
    assert!(deck.report().is_some());
}

#[test]
fn persisted_state_arriving_first_takes_over() {
    let config = DeckConfig {
        persistence: true,
        initial_tab: Some("home".to_string()),
        ..DeckConfig::default()
    };
    let mut deck = TabDeck::new(config, sample_registry());
    // Seeded from initial_tab pending persisted state.
    assert_eq!(deck.manager().active_tab().layout_id.as_deref(), Some("home"));

    let restored = vec![Tab::new_bound(
        "analysis".to_string(),
        "Analysis",
        None,
        Some("fast".to_string()),
    )];
    deck.apply_controlled_tabs(restored);
    assert_eq!(
        deck.manager().active_tab().layout_id.as_deref(),
        Some("analysis")
    );
    // Inbound guard swallows the reflecting cycle.
    assert!(deck.report().is_none());
    assert!(deck.report().is_some());
}
