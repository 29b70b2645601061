use crate::{Candidate, LocateError};

/// Tracks the lowest-residual candidate recorded so far.
///
/// Ties keep the earlier candidate, so the result depends only on the order
/// candidates are recorded in.
pub(super) struct Best {
    candidate: Option<Candidate>,
}

impl Best {
    pub(super) fn empty() -> Self {
        Self { candidate: None }
    }

    /// Records `candidate` if it beats the current best.
    pub(super) fn update(&mut self, candidate: Candidate) {
        if let Some(best) = self.candidate.as_ref()
            && candidate.residual >= best.residual
        {
            return;
        }
        self.candidate = Some(candidate);
    }

    /// Returns the best candidate.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::NoConvergence`] if nothing was recorded.
    pub(super) fn finish(self, seeds: usize) -> Result<Candidate, LocateError> {
        self.candidate.ok_or(LocateError::NoConvergence { seeds })
    }
}
