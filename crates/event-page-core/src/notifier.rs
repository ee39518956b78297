//! Event Status Notifier
//!
//! Compares the server's current event status with the last one seen in
//! the store. A change is persisted and reported once so the caller can
//! alert the user.

use crate::api::{PageApi, StatusResponse};
use crate::error::GlueResult;
use crate::storage::KeyValueStore;

const DASHBOARD_PATH: &str = "/dashboard";

/// Whether polling should start for the given location path.
///
/// True when `/dashboard` is absent or found at the very start of the path.
pub fn should_poll(path: &str) -> bool {
    matches!(path.find(DASHBOARD_PATH), None | Some(0))
}

/// Result of one status check
#[derive(Debug, Clone, PartialEq)]
pub enum StatusChange {
    /// Server returned no status
    Missing,
    /// Same as the stored status
    Unchanged,
    /// New status, already persisted
    Changed(String),
}

impl StatusChange {
    /// Message to alert, if any
    pub fn alert_message(&self) -> Option<&str> {
        match self {
            StatusChange::Changed(status) => Some(status),
            _ => None,
        }
    }
}

/// Reconcile a fetched status against the store
pub fn reconcile_status<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    response: &StatusResponse,
) -> GlueResult<StatusChange> {
    let Some(status) = response.current() else {
        return Ok(StatusChange::Missing);
    };
    if store.get(key)?.as_deref() == Some(status) {
        return Ok(StatusChange::Unchanged);
    }
    store.set(key, status)?;
    Ok(StatusChange::Changed(status.to_string()))
}

/// Fetch the current status and reconcile it
pub async fn poll_status<A, S>(api: &A, store: &mut S, key: &str) -> GlueResult<StatusChange>
where
    A: PageApi + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let response = api.event_status().await?;
    let change = reconcile_status(store, key, &response)?;
    log::debug!("[notify] status check: {:?}", change);
    Ok(change)
}
