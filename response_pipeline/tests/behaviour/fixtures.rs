//! Shared fixtures for the pipeline scenarios.

use response_pipeline::Pipeline;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state holding the pipeline under construction.
#[derive(Debug, Default, ScenarioState)]
pub struct PipelineState {
    pub numeric: Slot<Pipeline<i32>>,
    pub textual: Slot<Pipeline<String>>,
}

/// Creates an empty state for each scenario.
#[fixture]
pub fn pipeline_state() -> PipelineState {
    PipelineState::default()
}
