use std::sync::Arc;

use crate::domain::Action;
use crate::error::Result;
use crate::ports::MailStore;
use crate::usage::USAGE;

use super::{AccountService, AliasService};

/// Runs one validated action and returns the message to print.
pub struct Executor<S: MailStore> {
    accounts: AccountService<S>,
    aliases: AliasService<S>,
}

impl<S: MailStore> Executor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            accounts: AccountService::new(Arc::clone(&store)),
            aliases: AliasService::new(store),
        }
    }

    pub async fn run(&self, action: &Action, domain: &str) -> Result<String> {
        match action {
            Action::AddUser { name, password } => {
                self.accounts.add_user(name, password, domain).await
            }
            Action::RemoveUser { name } => self.accounts.remove_user(name, domain).await,
            Action::ChangePassword { name, password } => {
                self.accounts.change_password(name, password, domain).await
            }
            Action::AddAlias {
                source,
                destination,
            } => self.aliases.add_alias(source, destination, domain).await,
            // `cli::run` answers help without connecting; kept for library callers.
            Action::Help => Ok(USAGE.to_string()),
        }
    }
}
