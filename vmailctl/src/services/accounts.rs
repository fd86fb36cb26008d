use std::sync::Arc;

use crate::domain::{Address, NewUser, Table, compose_email};
use crate::error::{Result, VmailError};
use crate::ports::MailStore;

use super::{DomainLookup, IdAllocator};

pub struct AccountService<S: MailStore> {
    store: Arc<S>,
    domains: DomainLookup<S>,
    ids: IdAllocator<S>,
}

impl<S: MailStore> AccountService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            domains: DomainLookup::new(Arc::clone(&store)),
            ids: IdAllocator::new(Arc::clone(&store)),
            store,
        }
    }

    /// The mailbox is always created in `domain`; a domain embedded in
    /// `name` is dropped with a warning.
    pub async fn add_user(&self, name: &str, password: &str, domain: &str) -> Result<String> {
        let address = Address::split(name);
        if let Some(embedded) = address.domain
            && embedded != domain
        {
            tracing::warn!(name, domain, "ignoring domain embedded in user name");
        }

        let domain_id = self.domains.resolve(domain).await?;
        let email = compose_email(address.local, domain);

        let store = &self.store;
        let id = self
            .ids
            .insert_with_next_id(Table::Users, |id| {
                let user = NewUser {
                    id,
                    domain_id,
                    email: email.clone(),
                    password: password.to_string(),
                };
                async move { store.insert_user(&user).await }
            })
            .await?;

        tracing::info!(id, email = %email, "user added");
        Ok(format!("User {email} added successfully"))
    }

    pub async fn remove_user(&self, name: &str, domain: &str) -> Result<String> {
        let email = compose_email(name, domain);
        if self.store.delete_user(&email).await? == 0 {
            return Err(VmailError::UserNotFound(email));
        }
        Ok(format!("User {email} removed successfully"))
    }

    pub async fn change_password(
        &self,
        name: &str,
        password: &str,
        domain: &str,
    ) -> Result<String> {
        let email = compose_email(name, domain);
        if self.store.update_password(&email, password).await? == 0 {
            return Err(VmailError::UserNotFound(email));
        }
        Ok(format!("Password for user {email} changed successfully"))
    }
}
