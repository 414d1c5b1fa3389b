//! Shared fixtures for tabdeck integration tests.

use std::collections::BTreeMap;

use tabdeck::registry::{LayoutMeta, LayoutParameter, ParameterPreset, RegistryView};
use tabdeck::{DeckConfig, TabDeck};

/// Registry with the fixture layouts used across the integration suites:
///
/// - `home`: zero-input, multi-instance
/// - `report`: `year` (default "2024") + `region` (required), multi-instance
/// - `dashboard`: single-instance, zero-input
/// - `analysis`: single-instance with parameter presets
pub fn sample_registry() -> RegistryView {
    let mut layouts = BTreeMap::new();

    let mut home = LayoutMeta::new("Home");
    home.description = "Welcome page".to_string();
    home.keywords = vec!["start".to_string(), "intro".to_string()];
    home.allow_multiple = true;
    layouts.insert("home".to_string(), home);

    let mut report = LayoutMeta::new("Report");
    report.description = "Yearly numbers".to_string();
    report.allow_multiple = true;
    report.parameters = vec![
        LayoutParameter::with_default("year", "2024"),
        LayoutParameter::required("region"),
    ];
    layouts.insert("report".to_string(), report);

    let dashboard = LayoutMeta::new("Dashboard");
    layouts.insert("dashboard".to_string(), dashboard);

    let mut analysis = LayoutMeta::new("Analysis");
    analysis.parameter_options.insert(
        "fast".to_string(),
        ParameterPreset {
            description: "Quick analysis".to_string(),
            params: [("depth".to_string(), "1".to_string())].into(),
        },
    );
    analysis.parameter_options.insert(
        "deep".to_string(),
        ParameterPreset {
            description: "Thorough analysis".to_string(),
            params: [("depth".to_string(), "10".to_string())].into(),
        },
    );
    layouts.insert("analysis".to_string(), analysis);

    RegistryView::from_layouts(layouts)
}

/// A deck over the sample registry with default props.
pub fn sample_deck() -> TabDeck {
    TabDeck::new(DeckConfig::default(), sample_registry())
}

/// A deck with a specific tab limit.
pub fn deck_with_max_tabs(max_tabs: i32) -> TabDeck {
    let config = DeckConfig {
        max_tabs,
        ..DeckConfig::default()
    };
    TabDeck::new(config, sample_registry())
}
