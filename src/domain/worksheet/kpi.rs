//! First Action stage - KPI candidate listing.

use serde::{Deserialize, Serialize};

/// Inputs for the KPI panel.
#[derive(Debug, Clone, Deserialize)]
pub struct KpiInput {
    /// One KPI candidate per line.
    #[serde(default = "default_kpi_text")]
    pub kpi_text: String,
}

fn default_kpi_text() -> String {
    "月間アクティブユーザー\n新規登録数\n継続率".to_string()
}

impl Default for KpiInput {
    fn default() -> Self {
        Self {
            kpi_text: default_kpi_text(),
        }
    }
}

/// The rendered KPI panel: the leaf candidates of the KPI tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiOutput {
    pub candidates: Vec<String>,
}

/// Parses the KPI list: lines trimmed, empty lines dropped.
pub fn render_kpi(input: &KpiInput) -> KpiOutput {
    KpiOutput {
        candidates: input
            .kpi_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    }
}
