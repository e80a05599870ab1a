//! Unit tests for error construction and classification.

use std::error::Error as _;

use rstest::rstest;

use super::{NullStage, PipelineError};

#[rstest]
#[case(NullStage::Supplier, "pipeline supplier produced no value")]
#[case(NullStage::Input, "pipeline input produced no value")]
fn null_result_names_the_entry_point(#[case] stage: NullStage, #[case] expected: &str) {
    assert_eq!(PipelineError::null_result(stage).to_string(), expected);
}

#[rstest]
#[case(PipelineError::transform("bad"), true)]
#[case(PipelineError::service("down"), true)]
#[case(PipelineError::null_result(NullStage::Input), false)]
#[case(PipelineError::config(figment::Error::from("boom")), false)]
fn classifies_caller_failures(#[case] err: PipelineError, #[case] expected: bool) {
    assert_eq!(err.is_caller_failure(), expected);
}

#[test]
fn transform_keeps_source_chain() {
    let err = PipelineError::transform(std::io::Error::other("disk gone"));
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("disk gone"));
    assert_eq!(err.to_string(), "transformation failed");
}

#[test]
fn serde_json_errors_become_serialization_failures() {
    let Err(json_err) = serde_json::from_str::<u8>("nope") else {
        panic!("expected invalid JSON to fail");
    };
    let err = PipelineError::from(json_err);
    assert!(matches!(err, PipelineError::Serialization { .. }));
}

#[test]
fn figment_errors_become_config_failures() {
    let err: PipelineError = figment::Error::from("missing key").into();
    match err {
        PipelineError::Config(inner) => assert!(inner.to_string().contains("missing key")),
        other => panic!("expected Config, got {other:?}"),
    }
}

#[rstest]
#[case(PipelineError::transform("cause text"))]
#[case(PipelineError::service("cause text"))]
#[case(PipelineError::config(figment::Error::from("cause text")))]
fn display_leaves_the_cause_to_source(#[case] err: PipelineError) {
    assert!(!err.to_string().contains("cause text"));
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("cause text")
    );
}
