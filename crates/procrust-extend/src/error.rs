//! Candidate validation errors.

use procrust_core::Obs;
use std::error::Error;
use std::fmt;

/// A candidate's sequence contains a symbol outside the bound
/// filter's alphabet.
///
/// Raised by [`ExtensionCandidate::check`]; the operations that call
/// `check` internally degrade instead of propagating —
/// [`is_extension_of`] to `false`, [`extend_by_one`] to an empty
/// result — so a search loop can discard the candidate and continue.
///
/// [`ExtensionCandidate::check`]: crate::ExtensionCandidate::check
/// [`is_extension_of`]: crate::ExtensionCandidate::is_extension_of
/// [`extend_by_one`]: crate::ExtensionCandidate::extend_by_one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidObservationError {
    /// The symbol not in the filter's alphabet.
    pub obs: Obs,
}

impl fmt::Display for InvalidObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "observation '{}' is not in the bound filter's alphabet",
            self.obs
        )
    }
}

impl Error for InvalidObservationError {}
