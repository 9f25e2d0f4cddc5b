//! Per-organization serialization of structural tree changes.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use folderhub_core::types::OrganizationId;

/// One async mutex per organization.
///
/// Creates, moves and deletes hold the organization's guard for the whole
/// read-check-write sequence, so two concurrent moves cannot each pass the
/// cycle check against a tree the other is about to change.
#[derive(Debug, Default)]
pub struct OrganizationLocks {
    locks: DashMap<OrganizationId, Arc<Mutex<()>>>,
}

impl OrganizationLocks {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for and take the lock of `organization_id`.
    pub async fn acquire(&self, organization_id: OrganizationId) -> OwnedMutexGuard<()> {
        // The map shard guard must be released before awaiting.
        let lock = self.locks.entry(organization_id).or_default().value().clone();
        lock.lock_owned().await
    }

    /// Number of organizations that have taken a lock so far.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether no lock has been taken yet.
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
