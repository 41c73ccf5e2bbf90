//! Static industry/service tables and total lookup functions.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

use super::Category;

/// Sentinel shown when an industry has no configured example services.
pub const NO_SERVICE_EXAMPLE: &str = "サービス例なし";

/// Single-element domain returned for unconfigured industries.
static SENTINEL_DOMAIN: &[&str] = &[NO_SERVICE_EXAMPLE];

static BTOC_INDUSTRIES: &[&str] = &[
    "教育業界（予備校・塾・オンライン学習）",
    "飲食業界（レストラン・カフェ）",
    "美容・コスメ業界",
    "アパレル・ファッション業界",
    "旅行・観光業界",
    "エンタメ・ゲーム業界",
    "フィットネス・ヘルスケア（個人向け）",
];

static BTOB_INDUSTRIES: &[&str] = &[
    "IT・SaaS業界（法人向けツール）",
    "人材・採用支援業界",
    "コンサルティング業界",
    "物流・サプライチェーン業界",
    "製造業（部品・機械など）",
    "法人向け教育・研修業界",
];

static BTOG_INDUSTRIES: &[&str] = &[
    "公共教育（学校・自治体向けサービス）",
    "医療・福祉（病院・行政向け）",
    "インフラ（電気・ガス・交通）",
    "行政DX・自治体向けIT",
];

/// Service examples keyed by industry value alone. Industries are not
/// assumed unique across categories, so category never enters this lookup.
static SERVICES_BY_INDUSTRY: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert(
            "教育業界（予備校・塾・オンライン学習）",
            &[
                "オンライン自習室",
                "動画学習サブスク",
                "英会話アプリ",
                "資格対策プラットフォーム",
            ][..],
        );
        map.insert(
            "飲食業界（レストラン・カフェ）",
            &[
                "モバイルオーダーアプリ",
                "予約管理システム",
                "テイクアウト注文アプリ",
            ][..],
        );
        map.insert(
            "美容・コスメ業界",
            &[
                "美容予約アプリ",
                "コスメサブスクBOX",
                "オンライン肌診断サービス",
            ][..],
        );
        map.insert(
            "アパレル・ファッション業界",
            &[
                "ECサイト（ファッション通販）",
                "コーディネート提案アプリ",
                "サブスクレンタルサービス",
            ][..],
        );
        map.insert(
            "旅行・観光業界",
            &["旅行予約プラットフォーム", "観光ガイドアプリ"][..],
        );
        map.insert(
            "エンタメ・ゲーム業界",
            &[
                "動画配信サービス",
                "音楽ストリーミング",
                "ゲーム課金プラットフォーム",
            ][..],
        );
        map.insert(
            "フィットネス・ヘルスケア（個人向け）",
            &["オンラインフィットネス", "ヘルスケア記録アプリ"][..],
        );
        map.insert(
            "IT・SaaS業界（法人向けツール）",
            &[
                "営業支援SaaS（SFA）",
                "顧客管理システム（CRM）",
                "社内チャットツール",
            ][..],
        );
        map.insert(
            "人材・採用支援業界",
            &["求人掲載プラットフォーム", "採用管理システム（ATS）"][..],
        );
        map.insert(
            "コンサルティング業界",
            &["オンライン診断フォーム", "研修管理プラットフォーム"][..],
        );
        map.insert(
            "物流・サプライチェーン業界",
            &["在庫管理システム", "配送ルート最適化ツール"][..],
        );
        map.insert(
            "製造業（部品・機械など）",
            &["生産管理システム", "IoT機器モニタリング"][..],
        );
        map.insert(
            "法人向け教育・研修業界",
            &["eラーニングプラットフォーム", "社内研修管理システム"][..],
        );
        map.insert(
            "公共教育（学校・自治体向けサービス）",
            &["学習eポータル", "校務支援システム", "保護者連絡アプリ"][..],
        );
        map.insert(
            "医療・福祉（病院・行政向け）",
            &[
                "電子カルテ連携システム",
                "オンライン診療基盤",
                "福祉サービス管理システム",
            ][..],
        );
        map.insert(
            "インフラ（電気・ガス・交通）",
            &[
                "利用者ポータルサイト",
                "スマートメーター管理",
                "交通運行管理システム",
            ][..],
        );
        map.insert(
            "行政DX・自治体向けIT",
            &[
                "オンライン申請システム",
                "住民ポータル",
                "庁内文書管理システム",
            ][..],
        );
        map
    });

/// Errors detected by startup validation of the static tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("category {0} has no industries configured")]
    EmptyCategory(Category),

    #[error("industry has no configured service list: {0}")]
    MissingServiceList(String),
}

/// Returns the ordered industries for a category. Total and never empty.
pub fn industries_of(category: Category) -> &'static [&'static str] {
    match category {
        Category::BtoC => BTOC_INDUSTRIES,
        Category::BtoB => BTOB_INDUSTRIES,
        Category::BtoG => BTOG_INDUSTRIES,
    }
}

/// Returns the ordered example services for an industry.
///
/// Total: an unknown industry, or one configured with an empty list,
/// resolves to the sentinel domain rather than failing, so the resolver
/// stays total even against stale stored values.
pub fn services_of(industry: &str) -> &'static [&'static str] {
    match SERVICES_BY_INDUSTRY.get(industry) {
        Some(services) if !services.is_empty() => services,
        _ => SENTINEL_DOMAIN,
    }
}

/// Returns true if the industry has an explicitly configured service list.
pub fn is_configured_industry(industry: &str) -> bool {
    SERVICES_BY_INDUSTRY.contains_key(industry)
}

/// Validates the static tables at startup.
///
/// Every category must list at least one industry, and every listed
/// industry must have a configured service list. The sentinel fallback in
/// [`services_of`] covers stale runtime values; configuration gaps are
/// surfaced here instead of silently degrading every lookup.
pub fn validate() -> Result<(), TaxonomyError> {
    for category in Category::all() {
        let industries = industries_of(*category);
        if industries.is_empty() {
            return Err(TaxonomyError::EmptyCategory(*category));
        }
        for industry in industries {
            if !is_configured_industry(industry) {
                return Err(TaxonomyError::MissingServiceList(industry.to_string()));
            }
        }
    }
    Ok(())
}
