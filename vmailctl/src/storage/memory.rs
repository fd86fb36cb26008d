//! In-memory `MailStore` with the MySQL behaviours the handlers depend on.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{DomainId, MaxIdRow, NewAlias, NewUser, Table};
use crate::error::{Result, VmailError};
use crate::ports::MailStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub domain_id: DomainId,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRow {
    pub id: i64,
    pub domain_id: DomainId,
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Default)]
struct Tables {
    domains: Vec<(DomainId, String)>,
    users: Vec<UserRow>,
    aliases: Vec<AliasRow>,
    salt: u64,
    /// Ids another writer takes between our `MAX(id)` read and our insert.
    racing_ids: Vec<(Table, i64)>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn with_domains(domains: &[(DomainId, &str)]) -> Self {
        let store = Self::default();
        store.lock().domains = domains
            .iter()
            .map(|(id, name)| (*id, (*name).to_string()))
            .collect();
        store
    }

    pub fn users(&self) -> Vec<UserRow> {
        self.lock().users.clone()
    }

    pub fn aliases(&self) -> Vec<AliasRow> {
        self.lock().aliases.clone()
    }

    pub fn user(&self, email: &str) -> Option<UserRow> {
        self.lock().users.iter().find(|u| u.email == email).cloned()
    }

    /// Lets a concurrent writer claim `id` in `table` right before our next
    /// insert of that id.
    pub fn race_on(&self, table: Table, id: i64) {
        self.lock().racing_ids.push((table, id));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Tables {
    fn hash(&mut self, password: &str) -> String {
        self.salt += 1;
        format!("$6${:016x}${password}", self.salt)
    }

    fn take_race(&mut self, table: Table, id: i64) -> bool {
        if let Some(pos) = self
            .racing_ids
            .iter()
            .position(|&(t, taken)| t == table && taken == id)
        {
            self.racing_ids.remove(pos);
            return true;
        }
        false
    }
}

#[async_trait]
impl MailStore for MemoryStore {
    async fn find_domain_id(&self, name: &str) -> Result<Option<DomainId>> {
        Ok(self
            .lock()
            .domains
            .iter()
            .find(|(_, n)| n == name)
            .map(|(id, _)| *id))
    }

    async fn max_id(&self, table: Table) -> Result<Option<MaxIdRow>> {
        let tables = self.lock();
        let max = match table {
            Table::Domains => tables.domains.iter().map(|(id, _)| *id).max(),
            Table::Users => tables.users.iter().map(|u| u.id).max(),
            Table::Aliases => tables.aliases.iter().map(|a| a.id).max(),
        };
        Ok(Some(MaxIdRow(max)))
    }

    async fn insert_user(&self, user: &NewUser) -> Result<u64> {
        let mut tables = self.lock();
        if tables.take_race(Table::Users, user.id) {
            tables.users.push(UserRow {
                id: user.id,
                domain_id: user.domain_id,
                password: String::new(),
                email: format!("concurrent-{}", user.id),
            });
        }
        if tables.users.iter().any(|u| u.id == user.id) {
            return Err(VmailError::IdConflict {
                table: Table::Users.as_str(),
                id: user.id,
            });
        }
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(VmailError::UserExists(user.email.clone()));
        }
        let password = tables.hash(&user.password);
        tables.users.push(UserRow {
            id: user.id,
            domain_id: user.domain_id,
            password,
            email: user.email.clone(),
        });
        Ok(1)
    }

    async fn delete_user(&self, email: &str) -> Result<u64> {
        let mut tables = self.lock();
        let before = tables.users.len();
        tables.users.retain(|u| u.email != email);
        Ok((before - tables.users.len()) as u64)
    }

    async fn update_password(&self, email: &str, password: &str) -> Result<u64> {
        let mut tables = self.lock();
        let hashed = tables.hash(password);
        let mut affected = 0;
        for user in tables.users.iter_mut().filter(|u| u.email == email) {
            user.password.clone_from(&hashed);
            affected += 1;
        }
        Ok(affected)
    }

    async fn insert_alias(&self, alias: &NewAlias) -> Result<u64> {
        let mut tables = self.lock();
        if tables.take_race(Table::Aliases, alias.id) {
            tables.aliases.push(AliasRow {
                id: alias.id,
                domain_id: alias.domain_id,
                source: format!("concurrent-{}", alias.id),
                destination: String::new(),
            });
        }
        if tables.aliases.iter().any(|a| a.id == alias.id) {
            return Err(VmailError::IdConflict {
                table: Table::Aliases.as_str(),
                id: alias.id,
            });
        }
        tables.aliases.push(AliasRow {
            id: alias.id,
            domain_id: alias.domain_id,
            source: alias.source.clone(),
            destination: alias.destination.clone(),
        });
        Ok(1)
    }
}
