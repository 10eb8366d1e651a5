//! Bulk delete outcome reporting.

use serde::Deserialize;

use crate::Error;

/// What to do when the server rejects a bulk delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BulkDeletePolicy {
    /// Return the remote failure as `Err`.
    #[default]
    Strict,
    /// Return `Ok` with the failure in [`BulkDeleteResult::remote_error`].
    /// Transport failures are still returned as `Err`.
    Lenient,
}

/// Outcome of a bulk delete.
///
/// The API answers with the ids it deleted (`{"id": [69, 70]}`). Ids that were
/// requested but not echoed back are reported by [`unconfirmed`](Self::unconfirmed).
#[derive(Debug, Default)]
pub struct BulkDeleteResult {
    pub requested: Vec<u64>,
    pub deleted: Vec<u64>,
    /// Remote failure, only set under [`BulkDeletePolicy::Lenient`].
    pub remote_error: Option<Error>,
}

impl BulkDeleteResult {
    /// Requested ids the server did not confirm.
    pub fn unconfirmed(&self) -> Vec<u64> {
        self.requested
            .iter()
            .copied()
            .filter(|id| !self.deleted.contains(id))
            .collect()
    }

    /// True when every requested id was confirmed and nothing failed.
    pub fn is_complete(&self) -> bool {
        self.remote_error.is_none() && self.unconfirmed().is_empty()
    }
}

/// `data` of a bulk delete response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BulkDeleteData {
    #[serde(default)]
    pub id: Vec<u64>,
}
