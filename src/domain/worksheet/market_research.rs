//! Problem stage - weighted list of research items.

use serde::{Deserialize, Serialize};

/// Slider default when an item has no submitted weight.
const DEFAULT_WEIGHT: u8 = 5;
/// Upper slider bound for importance.
const MAX_WEIGHT: u8 = 10;

/// Inputs for the research-priority panel.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketResearchInput {
    /// One research item per line.
    #[serde(default = "default_items_text")]
    pub items_text: String,
    /// Importance per parsed line, 0-10; short lists are padded with the
    /// slider default, extra entries are ignored.
    #[serde(default)]
    pub weights: Vec<u8>,
}

fn default_items_text() -> String {
    "市場規模\n成長率\n競合数\n検索ボリューム".to_string()
}

impl Default for MarketResearchInput {
    fn default() -> Self {
        Self {
            items_text: default_items_text(),
            weights: Vec::new(),
        }
    }
}

/// One row of the importance table and bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedItem {
    pub item: String,
    pub weight: u8,
}

/// The rendered research-priority panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketResearchOutput {
    pub rows: Vec<WeightedItem>,
}

/// Parses the item list and pairs each line with its weight.
///
/// Lines are trimmed and empty lines dropped; that is the only validation
/// free text receives.
pub fn render_market_research(input: &MarketResearchInput) -> MarketResearchOutput {
    let rows = input
        .items_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, item)| WeightedItem {
            item: item.to_string(),
            weight: input
                .weights
                .get(i)
                .copied()
                .unwrap_or(DEFAULT_WEIGHT)
                .min(MAX_WEIGHT),
        })
        .collect();
    MarketResearchOutput { rows }
}
