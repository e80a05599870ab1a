//! Behavioural tests for `response_pipeline` using `rstest-bdd`.
//!
//! Step implementations live in [`steps`]; [`fixtures`] provides the shared
//! scenario state and the `scenarios!` binding below ties them to the
//! feature file.

mod fixtures;
mod steps;

use fixtures::{PipelineState, pipeline_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/pipeline.feature",
    fixtures = [pipeline_state: PipelineState]
);
