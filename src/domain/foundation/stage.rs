//! Stage enum representing the 8 worksheet stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 8 worksheet stages, in the order they are presented as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Problem,
    Affinity,
    Solution,
    Offer,
    NarrowingDown,
    Action,
    FirstAction,
    Closing,
}

impl Stage {
    /// Returns all stages in canonical order.
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Problem,
            Stage::Affinity,
            Stage::Solution,
            Stage::Offer,
            Stage::NarrowingDown,
            Stage::Action,
            Stage::FirstAction,
            Stage::Closing,
        ]
    }

    /// Returns the 0-based index of this stage in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .expect("Stage must be in all() array")
    }

    /// Returns the 1-based tab number shown to the user.
    pub fn number(&self) -> usize {
        self.order_index() + 1
    }

    /// Returns the next stage in order, if any.
    pub fn next(&self) -> Option<Stage> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the previous stage in order, if any.
    pub fn previous(&self) -> Option<Stage> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::all().get(idx - 1).copied()
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Problem => "Problem",
            Stage::Affinity => "Affinity",
            Stage::Solution => "Solution",
            Stage::Offer => "Offer",
            Stage::NarrowingDown => "Narrowing Down",
            Stage::Action => "Action",
            Stage::FirstAction => "First Action",
            Stage::Closing => "Closing",
        }
    }

    /// Returns the Japanese subtitle used in the tab label.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Stage::Problem => "外部分析",
            Stage::Affinity => "顧客分析",
            Stage::Solution => "データ基盤",
            Stage::Offer => "競合分析",
            Stage::NarrowingDown => "効果分析",
            Stage::Action => "成長戦略",
            Stage::FirstAction => "KPI設計",
            Stage::Closing => "統合レポート",
        }
    }

    /// Returns the tab label, e.g. "1. Problem（外部分析）".
    pub fn tab_label(&self) -> String {
        format!("{}. {}（{}）", self.number(), self.display_name(), self.subtitle())
    }

    /// Returns the full stage header shown above the panel.
    pub fn header(&self) -> &'static str {
        match self {
            Stage::Problem => "1. Problem｜外部分析（市場・環境の“不確実性”）",
            Stage::Affinity => "2. Affinity｜顧客分析（“誰”の“どんな悩み”か）",
            Stage::Solution => "3. Solution｜データ基盤（GIGOを防ぐ設計）",
            Stage::Offer => "4. Offer｜競合分析（差別化提案の根拠）",
            Stage::NarrowingDown => "5. Narrowing Down｜効果分析（施策の“効き”を絞り込む）",
            Stage::Action => "6. Action｜成長戦略（KGI/KPIと時系列）",
            Stage::FirstAction => "7. First Action｜KPI設計（最初の一歩を数値に落とす）",
            Stage::Closing => "8. Closing｜統合レポート（企画書としてまとめる）",
        }
    }

    /// Returns the role-play prompt introducing the stage, if it has one.
    pub fn role_play(&self) -> Option<&'static str> {
        match self {
            Stage::Problem => Some(
                "総務省/厚生労働省/Googleトレンドで市場調査しといて〜、と急に振られた。",
            ),
            Stage::Affinity => Some(
                "新規サービスの顧客シミュレーションで、想定ベネフィット作っておいて〜と言われた。",
            ),
            Stage::Solution => Some(
                "新規アンケートと既存データ、フォームとデータを整理してと言われた。",
            ),
            Stage::Offer => Some(
                "新規サービスのポジションを決めたいから、競合比較してと言われた。",
            ),
            Stage::NarrowingDown => Some("イベント施策、本当に効いたのか検証したいと言われた。"),
            Stage::Action => Some("新規サービスの成長戦略を描いてと言われた。"),
            Stage::FirstAction => Some(
                "KPI出して、と言われたけれど何から決めればいいか分からない。",
            ),
            Stage::Closing => None,
        }
    }

    /// Returns the worry line shown under the role-play prompt, if any.
    pub fn concern(&self) -> Option<&'static str> {
        match self {
            Stage::Problem => Some("優先順位がつかない！どこまでどのくらい調べたらいいの？"),
            Stage::Affinity => Some(
                "このデータほんとにあってる？“どんな人がどれくらい”いるのか、感覚じゃなくて分布で見たい！",
            ),
            Stage::Solution => Some("型がバラバラ＆抜けだらけで集計できない…"),
            _ => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_8_stages() {
        assert_eq!(Stage::all().len(), 8);
    }

    #[test]
    fn all_returns_stages_in_order() {
        let all = Stage::all();
        assert_eq!(all[0], Stage::Problem);
        assert_eq!(all[7], Stage::Closing);
    }

    #[test]
    fn order_index_is_position_in_all() {
        for (i, stage) in Stage::all().iter().enumerate() {
            assert_eq!(stage.order_index(), i);
        }
    }

    #[test]
    fn number_is_one_based() {
        assert_eq!(Stage::Problem.number(), 1);
        assert_eq!(Stage::Closing.number(), 8);
    }

    #[test]
    fn next_walks_the_canonical_order() {
        assert_eq!(Stage::Problem.next(), Some(Stage::Affinity));
        assert_eq!(Stage::Closing.next(), None);
    }

    #[test]
    fn previous_is_inverse_of_next() {
        for stage in Stage::all() {
            if let Some(next) = stage.next() {
                assert_eq!(next.previous(), Some(*stage));
            }
        }
    }

    #[test]
    fn tab_label_includes_number_and_subtitle() {
        assert_eq!(Stage::Problem.tab_label(), "1. Problem（外部分析）");
        assert_eq!(Stage::NarrowingDown.tab_label(), "5. Narrowing Down（効果分析）");
    }

    #[test]
    fn closing_has_no_role_play() {
        assert!(Stage::Closing.role_play().is_none());
        assert!(Stage::Offer.role_play().is_some());
    }
}
