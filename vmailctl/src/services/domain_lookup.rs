use std::sync::Arc;

use crate::domain::DomainId;
use crate::error::{Result, VmailError};
use crate::ports::MailStore;

/// Resolves domain names against `virtual_domains`. Never cached.
pub struct DomainLookup<S: MailStore> {
    store: Arc<S>,
}

impl<S: MailStore> DomainLookup<S> {
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, name: &str) -> Result<DomainId> {
        if name.is_empty() {
            return Err(VmailError::NoDomain);
        }
        self.store
            .find_domain_id(name)
            .await?
            .ok_or_else(|| VmailError::DomainNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn lookup() -> DomainLookup<MemoryStore> {
        DomainLookup::new(Arc::new(MemoryStore::with_domains(&[
            (1, "test.com"),
            (2, "example.org"),
        ])))
    }

    #[tokio::test]
    async fn test_resolve_known_domain() {
        assert_eq!(lookup().resolve("example.org").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_resolve_is_exact_match() {
        let err = lookup().resolve("TEST.COM").await.unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find domain TEST.COM");
    }

    #[tokio::test]
    async fn test_resolve_empty_name() {
        let err = lookup().resolve("").await.unwrap_err();
        assert!(matches!(err, VmailError::NoDomain));
    }
}
