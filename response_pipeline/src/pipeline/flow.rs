//! Explicit continuing/halted state carried by a pipeline.

use crate::ErrorSet;

/// State of a pipeline between two stages.
///
/// A pipeline either still carries a value or was halted by
/// [`Pipeline::filter_or_halt`](crate::Pipeline::filter_or_halt). Both
/// states keep the accumulated [`ErrorSet`], so a halt never loses business
/// errors recorded before it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Flow<T> {
    /// The chain is still running.
    Continuing {
        /// Current value.
        value: T,
        /// Accumulated business errors.
        errors: Option<ErrorSet>,
    },
    /// A validation step rejected the value.
    Halted {
        /// Business errors accumulated up to and after the halt.
        errors: Option<ErrorSet>,
    },
}

impl<T> Flow<T> {
    /// Borrow the current value, or `None` when halted.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Continuing { value, .. } => Some(value),
            Self::Halted { .. } => None,
        }
    }

    /// Borrow the accumulated errors.
    #[must_use]
    pub const fn errors(&self) -> Option<&ErrorSet> {
        match self {
            Self::Continuing { errors, .. } | Self::Halted { errors } => errors.as_ref(),
        }
    }

    /// Returns `true` when a validation step halted the chain.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        matches!(self, Self::Halted { .. })
    }

    /// Split into the optional value and the accumulated errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<ErrorSet>) {
        match self {
            Self::Continuing { value, errors } => (Some(value), errors),
            Self::Halted { errors } => (None, errors),
        }
    }

    /// Consume the flow, keeping only the value.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.into_parts().0
    }

    /// Apply `f` to a continuing value; halted flows stay halted.
    pub(crate) fn map<R>(self, f: impl FnOnce(T, Option<&ErrorSet>) -> R) -> Flow<R> {
        match self {
            Self::Continuing { value, errors } => {
                let next = f(value, errors.as_ref());
                Flow::Continuing {
                    value: next,
                    errors,
                }
            }
            Self::Halted { errors } => Flow::Halted { errors },
        }
    }

    /// Fallible counterpart of [`Flow::map`].
    pub(crate) fn try_map<R, E>(
        self,
        f: impl FnOnce(T, Option<&ErrorSet>) -> Result<R, E>,
    ) -> Result<Flow<R>, E> {
        match self {
            Self::Continuing { value, errors } => {
                let next = f(value, errors.as_ref())?;
                Ok(Flow::Continuing {
                    value: next,
                    errors,
                })
            }
            Self::Halted { errors } => Ok(Flow::Halted { errors }),
        }
    }

    /// Merge `incoming` into the accumulated errors and install `value` when
    /// still continuing.
    pub(crate) fn absorb<R>(self, value: R, incoming: Option<ErrorSet>) -> Flow<R> {
        match self {
            Self::Continuing { errors, .. } => Flow::Continuing {
                value,
                errors: ErrorSet::merge(errors, incoming),
            },
            Self::Halted { errors } => Flow::Halted {
                errors: ErrorSet::merge(errors, incoming),
            },
        }
    }
}
