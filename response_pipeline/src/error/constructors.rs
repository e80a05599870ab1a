//! Constructors for `PipelineError`.

use figment::Error as FigmentError;

use super::{BoxedSource, NullStage, PipelineError};

impl PipelineError {
    /// Construct the error raised when a seed value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_pipeline::{NullStage, PipelineError};
    /// let e = PipelineError::null_result(NullStage::Input);
    /// assert_eq!(e.to_string(), "pipeline input produced no value");
    /// ```
    #[must_use]
    pub const fn null_result(stage: NullStage) -> Self {
        Self::NullResult { stage }
    }

    /// Construct a transformation error from any boxable error.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_pipeline::PipelineError;
    /// let e = PipelineError::transform("bad shape");
    /// assert!(matches!(e, PipelineError::Transform { .. }));
    /// ```
    #[must_use]
    pub fn transform(source: impl Into<BoxedSource>) -> Self {
        Self::Transform {
            source: source.into(),
        }
    }

    /// Construct a service error from any boxable error.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_pipeline::PipelineError;
    /// let e = PipelineError::service("connection reset");
    /// assert!(matches!(e, PipelineError::Service { .. }));
    /// ```
    #[must_use]
    pub fn service(source: impl Into<BoxedSource>) -> Self {
        Self::Service {
            source: source.into(),
        }
    }

    /// Construct a serialization error.
    #[must_use]
    pub const fn serialization(source: serde_json::Error) -> Self {
        Self::Serialization { source }
    }

    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use response_pipeline::PipelineError;
    /// let e = PipelineError::config(figment::Error::from("boom"));
    /// assert!(matches!(e, PipelineError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }

    /// Returns `true` for failures raised by user-supplied code (mapping
    /// functions or backing operations) rather than by the pipeline itself.
    #[must_use]
    pub const fn is_caller_failure(&self) -> bool {
        matches!(self, Self::Transform { .. } | Self::Service { .. })
    }
}
