//! Errors reported when building homomorphisms.
//!
//! Evaluation itself never fails: an unsatisfiable or ill-ordered combination
//! of homomorphism and diagram evaluates to [`DddId::ZERO`][crate::reference::DddId::ZERO].

use std::fmt;

/// Error type for homomorphism construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A coefficient vector does not have one entry per variable.
    InvalidArgument {
        /// Which vector was rejected, e.g. `"condition 2"`.
        context: String,
        /// Number of variables of the action.
        expected: usize,
        /// Length of the rejected vector.
        found: usize,
    },
}

impl Error {
    pub(crate) fn coefficient_length(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Error::InvalidArgument {
            context: context.into(),
            expected,
            found,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument {
                context,
                expected,
                found,
            } => write!(
                f,
                "Invalid argument: {} has {} coefficients, expected one per variable ({})",
                context, found, expected
            ),
        }
    }
}

impl std::error::Error for Error {}
