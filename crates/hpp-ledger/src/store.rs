//! The revision store boundary, and an in-process reference store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use hpp_model::{PackageId, RevisionId, StateCode, clock};

use crate::error::{LedgerError, Result};
use crate::revision::{Package, Revision, RevisionMetadata};

/// Storage boundary the ledger drives.
///
/// Contract: `allocate_state_number` is a single atomic
/// increment-and-read — a number issued once for a state code is never
/// issued again, and there is no read-then-write race window.
/// `write_revision` and `append_revision` are each atomic from the
/// ledger's perspective; a failed write never leaves a package with two
/// unsubmitted revisions. Implementations return connection-class errors
/// for transport failures and `Conflict` for contract violations; the
/// ledger never retries either.
pub trait RevisionStore {
    /// Create an empty package row and return its identifier.
    fn create_package(&self, state_code: &StateCode) -> Result<PackageId>;

    /// Fetch a package with its revisions ordered newest first.
    fn get_package(&self, id: &PackageId) -> Result<Package>;

    /// Atomically increment and return the per-state package counter.
    fn allocate_state_number(&self, state_code: &StateCode) -> Result<u64>;

    /// Rewrite an existing revision's bytes and merge in metadata.
    ///
    /// Must refuse with `Conflict` if the revision already carries submit
    /// metadata: frozen bytes are never rewritten.
    fn write_revision(
        &self,
        package_id: &PackageId,
        revision_id: &RevisionId,
        bytes: Vec<u8>,
        metadata: RevisionMetadata,
    ) -> Result<()>;

    /// Append a new revision and return its identifier.
    ///
    /// Must refuse with `Conflict` if the package already has an
    /// unsubmitted revision: at most one live draft exists per package.
    fn append_revision(
        &self,
        package_id: &PackageId,
        bytes: Vec<u8>,
        metadata: RevisionMetadata,
    ) -> Result<RevisionId>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    packages: BTreeMap<String, Package>,
    counters: BTreeMap<String, u64>,
    next_package: u64,
    next_revision: u64,
    next_sequence: u64,
}

/// In-process revision store backed by a mutex.
///
/// Every trait method runs under one lock acquisition, which is what
/// makes each operation a single atomic unit. Useful as the test double
/// and as a reference for what a relational implementation must uphold.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryInner>> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::connection("memory store mutex poisoned"))
    }
}

impl RevisionStore for MemoryStore {
    fn create_package(&self, state_code: &StateCode) -> Result<PackageId> {
        let mut inner = self.lock()?;
        inner.next_package += 1;
        let id = PackageId::new(format!("pkg-{:06}", inner.next_package))?;
        inner.packages.insert(
            id.as_str().to_string(),
            Package {
                id: id.clone(),
                state_code: state_code.clone(),
                revisions: Vec::new(),
            },
        );
        Ok(id)
    }

    fn get_package(&self, id: &PackageId) -> Result<Package> {
        let inner = self.lock()?;
        let Some(package) = inner.packages.get(id.as_str()) else {
            return Err(LedgerError::NotFound {
                package_id: id.clone(),
            });
        };
        let mut package = package.clone();
        package.sort_revisions();
        Ok(package)
    }

    fn allocate_state_number(&self, state_code: &StateCode) -> Result<u64> {
        let mut inner = self.lock()?;
        let counter = inner
            .counters
            .entry(state_code.as_str().to_string())
            .or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    fn write_revision(
        &self,
        package_id: &PackageId,
        revision_id: &RevisionId,
        bytes: Vec<u8>,
        metadata: RevisionMetadata,
    ) -> Result<()> {
        let mut inner = self.lock()?;
        let Some(package) = inner.packages.get_mut(package_id.as_str()) else {
            return Err(LedgerError::NotFound {
                package_id: package_id.clone(),
            });
        };
        let Some(revision) = package.revisions.iter_mut().find(|r| r.id == *revision_id) else {
            return Err(LedgerError::Conflict {
                revision_id: revision_id.clone(),
            });
        };
        if revision.is_submitted() {
            return Err(LedgerError::Conflict {
                revision_id: revision_id.clone(),
            });
        }
        revision.form_data_bytes = bytes;
        if metadata.submit_info.is_some() {
            revision.submit_info = metadata.submit_info;
        }
        if metadata.unlock_info.is_some() {
            revision.unlock_info = metadata.unlock_info;
        }
        Ok(())
    }

    fn append_revision(
        &self,
        package_id: &PackageId,
        bytes: Vec<u8>,
        metadata: RevisionMetadata,
    ) -> Result<RevisionId> {
        let mut inner = self.lock()?;
        inner.next_revision += 1;
        inner.next_sequence += 1;
        let id = RevisionId::new(format!("rev-{:06}", inner.next_revision))?;
        let sequence = inner.next_sequence;
        let Some(package) = inner.packages.get_mut(package_id.as_str()) else {
            return Err(LedgerError::NotFound {
                package_id: package_id.clone(),
            });
        };
        if let Some(open) = package.revisions.iter().find(|r| !r.is_submitted()) {
            return Err(LedgerError::Conflict {
                revision_id: open.id.clone(),
            });
        }
        package.revisions.push(Revision {
            id: id.clone(),
            package_id: package_id.clone(),
            created_at: clock::now(),
            sequence,
            form_data_bytes: bytes,
            unlock_info: metadata.unlock_info,
            submit_info: metadata.submit_info,
        });
        Ok(id)
    }
}
