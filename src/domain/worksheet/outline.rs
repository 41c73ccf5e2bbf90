//! Closing stage - the static proposal outline.

use serde::Serialize;

/// The proposal outline, one entry per worksheet stage.
static OUTLINE: &[&str] = &[
    "1. Problem：市場の不確実性と背景",
    "2. Affinity：ターゲット像と顧客インサイト",
    "3. Solution：データ基盤と記録設計",
    "4. Offer：競合比較とポジショニング",
    "5. Narrowing Down：施策効果と学び",
    "6. Action：成長シナリオとKGI/KPI",
    "7. First Action：直近3ヶ月の実行プラン",
    "8. Closing：まとめとNext Action / 依頼事項",
];

/// The rendered closing panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineOutput {
    pub lines: Vec<&'static str>,
}

/// Returns the sample proposal outline.
pub fn render_outline() -> OutlineOutput {
    OutlineOutput {
        lines: OUTLINE.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_has_one_line_per_stage() {
        assert_eq!(render_outline().lines.len(), 8);
    }

    #[test]
    fn outline_opens_with_problem_and_ends_with_closing() {
        let output = render_outline();
        assert!(output.lines[0].starts_with("1. Problem"));
        assert!(output.lines[7].starts_with("8. Closing"));
    }
}
