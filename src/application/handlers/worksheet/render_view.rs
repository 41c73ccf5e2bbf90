//! RenderViewHandler - Recomputes the entire worksheet for one interaction.
//!
//! This is the systems-language rendition of the original whole-view
//! re-execution model: the client submits an immutable inputs snapshot, the
//! selection is reconciled first (the only store write), and every tab is
//! then rendered from its own local inputs in a fixed order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::handlers::selection::{state, SelectionFlowError, SelectionView};
use crate::domain::foundation::{SessionId, Stage};
use crate::domain::selection::{self, SelectionInput};
use crate::domain::worksheet::{
    render_ab_effect, render_competitor, render_data_cleaning, render_growth, render_kpi,
    render_market_research, render_outline, render_persona, AbEffectInput, AbEffectOutput,
    CompetitorInput, CompetitorOutput, DataCleaningOutput, GrowthInput, GrowthOutput, KpiInput,
    KpiOutput, MarketResearchInput, MarketResearchOutput, OutlineOutput, PersonaInput,
    PersonaOutput,
};
use crate::ports::StateStore;

/// Per-tab widget inputs; every field falls back to the widget defaults so
/// a partial snapshot renders the same panels an untouched page would.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TabInputs {
    pub market_research: MarketResearchInput,
    pub persona: PersonaInput,
    pub competitor: CompetitorInput,
    pub ab_effect: AbEffectInput,
    pub growth: GrowthInput,
    pub kpi: KpiInput,
}

/// The inputs snapshot for one interaction.
#[derive(Debug, Clone)]
pub struct RenderViewCommand {
    pub session_id: SessionId,
    pub category: String,
    pub industry: Option<String>,
    pub service: Option<String>,
    pub tabs: TabInputs,
}

/// One rendered tab panel with its stage chrome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagePanel<T> {
    pub stage: Stage,
    pub tab_label: String,
    pub header: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_play: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concern: Option<&'static str>,
    pub body: T,
}

impl<T> StagePanel<T> {
    fn new(stage: Stage, body: T) -> Self {
        Self {
            stage,
            tab_label: stage.tab_label(),
            header: stage.header(),
            role_play: stage.role_play(),
            concern: stage.concern(),
            body,
        }
    }
}

/// The eight rendered panels in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabPanels {
    pub problem: StagePanel<MarketResearchOutput>,
    pub affinity: StagePanel<PersonaOutput>,
    pub solution: StagePanel<DataCleaningOutput>,
    pub offer: StagePanel<CompetitorOutput>,
    pub narrowing_down: StagePanel<AbEffectOutput>,
    pub action: StagePanel<GrowthOutput>,
    pub first_action: StagePanel<KpiOutput>,
    pub closing: StagePanel<OutlineOutput>,
}

/// The whole recomputed view returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorksheetView {
    pub session_id: SessionId,
    pub selection: SelectionView,
    pub tabs: TabPanels,
}

/// Handler recomputing the whole worksheet view.
pub struct RenderViewHandler {
    store: Arc<dyn StateStore>,
}

impl RenderViewHandler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RenderViewCommand,
    ) -> Result<WorksheetView, SelectionFlowError> {
        // Selection first: the tabs read the resolved triple, never raw
        // widget values.
        let (_, stored) = state::load_stored(self.store.as_ref(), &cmd.session_id).await?;
        let input = SelectionInput {
            category: &cmd.category,
            industry: cmd.industry.as_deref(),
            service: cmd.service.as_deref(),
        };
        let resolved = selection::resolve(&input, &stored)?;
        state::write_selection(self.store.as_ref(), &cmd.session_id, &resolved).await?;

        let tabs = TabPanels {
            problem: StagePanel::new(
                Stage::Problem,
                render_market_research(&cmd.tabs.market_research),
            ),
            affinity: StagePanel::new(Stage::Affinity, render_persona(&cmd.tabs.persona)),
            solution: StagePanel::new(Stage::Solution, render_data_cleaning()),
            offer: StagePanel::new(Stage::Offer, render_competitor(&cmd.tabs.competitor)),
            narrowing_down: StagePanel::new(
                Stage::NarrowingDown,
                render_ab_effect(&cmd.tabs.ab_effect),
            ),
            action: StagePanel::new(Stage::Action, render_growth(&cmd.tabs.growth)),
            first_action: StagePanel::new(Stage::FirstAction, render_kpi(&cmd.tabs.kpi)),
            closing: StagePanel::new(Stage::Closing, render_outline()),
        };

        Ok(WorksheetView {
            session_id: cmd.session_id,
            selection: SelectionView::from_selection(resolved),
            tabs,
        })
    }
}
