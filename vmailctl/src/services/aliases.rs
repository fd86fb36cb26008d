use std::sync::Arc;

use crate::domain::{Address, NewAlias, Table};
use crate::error::Result;
use crate::ports::MailStore;

use super::{DomainLookup, IdAllocator};

pub struct AliasService<S: MailStore> {
    store: Arc<S>,
    domains: DomainLookup<S>,
    ids: IdAllocator<S>,
}

impl<S: MailStore> AliasService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            domains: DomainLookup::new(Arc::clone(&store)),
            ids: IdAllocator::new(Arc::clone(&store)),
            store,
        }
    }

    /// The alias belongs to the source address's domain, falling back to
    /// `domain` when `source` has none. `destination` is stored as given.
    pub async fn add_alias(
        &self,
        source: &str,
        destination: &str,
        domain: &str,
    ) -> Result<String> {
        let source_domain = Address::split(source).domain_or(domain);
        let domain_id = self.domains.resolve(source_domain).await?;

        let store = &self.store;
        let id = self
            .ids
            .insert_with_next_id(Table::Aliases, |id| {
                let alias = NewAlias {
                    id,
                    domain_id,
                    source: source.to_string(),
                    destination: destination.to_string(),
                };
                async move { store.insert_alias(&alias).await }
            })
            .await?;

        tracing::info!(id, source, destination, "alias added");
        Ok(format!(
            "Alias from {source} to {destination} added successfully"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use pretty_assertions::assert_eq;

    fn service() -> (Arc<MemoryStore>, AliasService<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_domains(&[
            (1, "test.com"),
            (2, "other.net"),
        ]));
        (Arc::clone(&store), AliasService::new(store))
    }

    #[tokio::test]
    async fn test_add_alias() {
        let (store, aliases) = service();

        let msg = aliases
            .add_alias("alias@test.com", "test1@test.com", "other.net")
            .await
            .unwrap();
        assert_eq!(
            msg,
            "Alias from alias@test.com to test1@test.com added successfully"
        );

        let rows = store.aliases();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].domain_id, 1);
        assert_eq!(rows[0].source, "alias@test.com");
        assert_eq!(rows[0].destination, "test1@test.com");
    }

    #[tokio::test]
    async fn test_add_alias_falls_back_to_domain_flag() {
        let (store, aliases) = service();

        aliases
            .add_alias("postmaster", "admin@test.com", "other.net")
            .await
            .unwrap();

        let rows = store.aliases();
        assert_eq!(rows[0].domain_id, 2);
        assert_eq!(rows[0].source, "postmaster");
    }

    #[tokio::test]
    async fn test_trailing_at_falls_back_to_domain_flag() {
        let (store, aliases) = service();

        aliases
            .add_alias("alias@", "x@test.com", "test.com")
            .await
            .unwrap();

        let rows = store.aliases();
        assert_eq!(rows[0].domain_id, 1);
        assert_eq!(rows[0].source, "alias@");
    }

    #[tokio::test]
    async fn test_destination_domain_is_not_checked() {
        let (store, aliases) = service();

        aliases
            .add_alias("alias@test.com", "someone@unknown.example", "test.com")
            .await
            .unwrap();
        assert_eq!(store.aliases()[0].destination, "someone@unknown.example");
    }

    #[tokio::test]
    async fn test_source_domain_must_exist() {
        let (store, aliases) = service();

        let err = aliases
            .add_alias("alias@missing.org", "test1@test.com", "test.com")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find domain missing.org");
        assert!(store.aliases().is_empty());
    }
}
