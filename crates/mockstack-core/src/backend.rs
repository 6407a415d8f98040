//! Per-account, per-region backend lifecycle.
//!
//! Provides [`BackendStore`], an explicit registry that partitions service
//! backends by AWS account ID and region. Each simulated (account, region)
//! pair owns one backend instance, created on first use and torn down by
//! [`BackendStore::reset`] between test runs.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::types::{AccountId, AwsRegion};

/// A service backend that can be created for a given account and region.
///
/// Unlike a plain `Default`, backends are constructed knowing their identity:
/// catalog-scoped services resolve omitted catalog IDs to the owning account,
/// and ARN construction needs the region.
pub trait ServiceBackend: Send + Sync + 'static {
    /// Create a fresh backend for the given account and region.
    fn new(account: &AccountId, region: &AwsRegion) -> Self;
}

/// Explicit registry of per-(account, region) service backends.
///
/// # Examples
///
/// ```
/// use mockstack_core::{AccountId, AwsRegion, BackendStore, ServiceBackend};
///
/// #[derive(Debug)]
/// struct MyBackend {
///     account: AccountId,
/// }
///
/// impl ServiceBackend for MyBackend {
///     fn new(account: &AccountId, _region: &AwsRegion) -> Self {
///         Self { account: account.clone() }
///     }
/// }
///
/// let store = BackendStore::<MyBackend>::new();
/// let backend = store.get_or_create(&AccountId::default(), &AwsRegion::default());
/// assert_eq!(backend.account, AccountId::default());
/// ```
#[derive(Debug)]
pub struct BackendStore<B: ServiceBackend> {
    inner: DashMap<(AccountId, AwsRegion), Arc<B>>,
}

impl<B: ServiceBackend> BackendStore<B> {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Get or create the backend for the given account and region.
    ///
    /// The backend is constructed atomically on first access via
    /// [`ServiceBackend::new`].
    #[must_use]
    pub fn get_or_create(&self, account: &AccountId, region: &AwsRegion) -> Arc<B> {
        self.inner
            .entry((account.clone(), region.clone()))
            .or_insert_with(|| Arc::new(B::new(account, region)))
            .clone()
    }

    /// Get the backend for the given account and region, if it exists.
    #[must_use]
    pub fn get(&self, account: &AccountId, region: &AwsRegion) -> Option<Arc<B>> {
        self.inner
            .get(&(account.clone(), region.clone()))
            .map(|v| v.clone())
    }

    /// Remove the backend for the given account and region.
    #[must_use]
    pub fn remove(&self, account: &AccountId, region: &AwsRegion) -> Option<Arc<B>> {
        self.inner
            .remove(&(account.clone(), region.clone()))
            .map(|(_, v)| v)
    }

    /// Drop all backends in the store.
    pub fn reset(&self) {
        debug!(backends = self.inner.len(), "resetting backend store");
        self.inner.clear();
    }

    /// Number of (account, region) backends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<B: ServiceBackend> Default for BackendStore<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestBackend {
        account: AccountId,
        region: AwsRegion,
        value: std::sync::atomic::AtomicU64,
    }

    impl ServiceBackend for TestBackend {
        fn new(account: &AccountId, region: &AwsRegion) -> Self {
            Self {
                account: account.clone(),
                region: region.clone(),
                value: std::sync::atomic::AtomicU64::new(0),
            }
        }
    }

    #[test]
    fn test_should_create_backend_knowing_its_identity() {
        let store = BackendStore::<TestBackend>::new();
        let account = AccountId::new("555566667777").unwrap();
        let region = AwsRegion::new("eu-central-1");

        let backend = store.get_or_create(&account, &region);
        assert_eq!(backend.account, account);
        assert_eq!(backend.region, region);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_should_return_same_backend_on_subsequent_access() {
        let store = BackendStore::<TestBackend>::new();
        let account = AccountId::default();
        let region = AwsRegion::default();

        let first = store.get_or_create(&account, &region);
        first.value.store(7, std::sync::atomic::Ordering::Relaxed);

        let second = store.get_or_create(&account, &region);
        assert_eq!(second.value.load(std::sync::atomic::Ordering::Relaxed), 7);
    }

    #[test]
    fn test_should_isolate_account_region_pairs() {
        let store = BackendStore::<TestBackend>::new();
        let account = AccountId::default();

        let us = store.get_or_create(&account, &AwsRegion::new("us-east-1"));
        us.value.store(1, std::sync::atomic::Ordering::Relaxed);

        let eu = store.get_or_create(&account, &AwsRegion::new("eu-west-1"));
        assert_eq!(eu.value.load(std::sync::atomic::Ordering::Relaxed), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_should_reset_all_backends() {
        let store = BackendStore::<TestBackend>::new();
        let _ = store.get_or_create(&AccountId::default(), &AwsRegion::default());
        let _ = store.get_or_create(&AccountId::default(), &AwsRegion::new("eu-west-1"));

        store.reset();
        assert!(store.is_empty());
        assert!(store.get(&AccountId::default(), &AwsRegion::default()).is_none());
    }
}
