//! Worksheet module - Pure stage renderers for the eight tabs.
//!
//! Each renderer is a stateless function from its own widget inputs to a
//! typed output the UI can table or chart. Renderers read the resolved
//! selection for display only and never write shared state; dummy data is
//! drawn from seeded generators so identical inputs always reproduce
//! identical panels.
//!
//! # Components
//!
//! - `market_research` - weighted research-item list (Problem)
//! - `persona` - simulated age distribution (Affinity)
//! - `data_cleaning` - type-coercion and missing-value illustration (Solution)
//! - `competitor` - quality-score variance comparison (Offer)
//! - `ab_effect` - campaign mean comparison (Narrowing Down)
//! - `growth` - noisy linear sales trend (Action)
//! - `kpi` - KPI candidate listing (First Action)
//! - `outline` - static proposal outline (Closing)

mod ab_effect;
mod competitor;
mod data_cleaning;
mod growth;
mod kpi;
mod market_research;
mod outline;
mod persona;
mod stats;

pub use ab_effect::{render_ab_effect, AbEffectInput, AbEffectOutput, SalesPair};
pub use competitor::{render_competitor, CompetitorInput, CompetitorOutput, ScorePair};
pub use data_cleaning::{
    render_data_cleaning, CellValue, CleanRecord, DataCleaningOutput, RawRecord,
};
pub use growth::{render_growth, GrowthInput, GrowthOutput, MonthlyIndex};
pub use kpi::{render_kpi, KpiInput, KpiOutput};
pub use market_research::{
    render_market_research, MarketResearchInput, MarketResearchOutput, WeightedItem,
};
pub use outline::{render_outline, OutlineOutput};
pub use persona::{render_persona, AgeBucket, PersonaInput, PersonaOutput};
pub use stats::{linspace, mean, sample_variance, NormalSampler};
