//! Step definitions for the pipeline scenarios.

use anyhow::{Result, anyhow, ensure};
use response_pipeline::{ErrorSet, Outcome, Pipeline};
use rstest_bdd_macros::{given, then, when};

use crate::fixtures::PipelineState;

#[given("a pipeline seeded with {seed:i32}")]
fn seeded(pipeline_state: &PipelineState, seed: i32) {
    pipeline_state.numeric.set(Pipeline::of(|| seed));
}

#[given("a fresh pipeline")]
fn fresh(pipeline_state: &PipelineState) {
    pipeline_state
        .textual
        .set(Pipeline::start().map(|()| String::new()));
}

#[when("the value is doubled")]
fn doubled(pipeline_state: &PipelineState) -> Result<()> {
    let pipeline = pipeline_state
        .numeric
        .take()
        .ok_or_else(|| anyhow!("numeric pipeline not seeded"))?;
    pipeline_state.numeric.set(pipeline.map(|x| x * 2));
    Ok(())
}

#[when("values not greater than {limit:i32} are halted")]
fn halt_below(pipeline_state: &PipelineState, limit: i32) -> Result<()> {
    let pipeline = pipeline_state
        .numeric
        .take()
        .ok_or_else(|| anyhow!("numeric pipeline not seeded"))?;
    pipeline_state
        .numeric
        .set(pipeline.filter_or_halt(|x| *x > limit));
    Ok(())
}

#[when("a service returns \"{value}\" with error code \"{code}\" for request \"{id}\"")]
fn service_returns(
    pipeline_state: &PipelineState,
    value: String,
    code: String,
    id: String,
) -> Result<()> {
    let pipeline = pipeline_state
        .textual
        .take()
        .ok_or_else(|| anyhow!("textual pipeline not started"))?;
    let outcome = Outcome::with_errors(value, ErrorSet::with_codes(id, [code]));
    pipeline_state.textual.set(pipeline.execute_service(outcome));
    Ok(())
}

#[when("the service value is rejected")]
fn reject(pipeline_state: &PipelineState) -> Result<()> {
    let pipeline = pipeline_state
        .textual
        .take()
        .ok_or_else(|| anyhow!("textual pipeline not started"))?;
    pipeline_state.textual.set(pipeline.filter_or_halt(|_| false));
    Ok(())
}

#[then("the result is {expected:i32}")]
fn result_is(pipeline_state: &PipelineState, expected: i32) -> Result<()> {
    let pipeline = pipeline_state
        .numeric
        .take()
        .ok_or_else(|| anyhow!("numeric pipeline missing"))?;
    ensure!(
        pipeline.apply() == Some(expected),
        "expected pipeline to yield {expected}"
    );
    Ok(())
}

#[then("the pipeline is halted")]
fn is_halted(pipeline_state: &PipelineState) -> Result<()> {
    let numeric = pipeline_state.numeric.with_ref(Pipeline::is_halted);
    let textual = pipeline_state.textual.with_ref(Pipeline::is_halted);
    let halted = numeric.or(textual).ok_or_else(|| anyhow!("no pipeline present"))?;
    ensure!(halted, "expected the pipeline to be halted");
    Ok(())
}

#[then("the accumulated error codes are \"{codes}\"")]
fn codes_are(pipeline_state: &PipelineState, codes: String) -> Result<()> {
    let expected: Vec<String> = codes.split(',').map(str::to_owned).collect();
    let actual = pipeline_state
        .textual
        .with_ref(|p| p.errors().map(|e| e.codes().to_vec()))
        .ok_or_else(|| anyhow!("textual pipeline missing"))?;
    ensure!(
        actual.as_ref() == Some(&expected),
        "expected codes {expected:?}, got {actual:?}"
    );
    Ok(())
}

#[then("the service value is \"{value}\"")]
fn service_value(pipeline_state: &PipelineState, value: String) -> Result<()> {
    let pipeline = pipeline_state
        .textual
        .take()
        .ok_or_else(|| anyhow!("textual pipeline missing"))?;
    ensure!(
        pipeline.apply().as_deref() == Some(value.as_str()),
        "expected service value {value}"
    );
    Ok(())
}
