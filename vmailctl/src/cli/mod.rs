use std::sync::Arc;

use clap::Parser;

use crate::config::Config;
use crate::domain::{Command, Request};
use crate::error::Result;
use crate::services::{Executor, validate};
use crate::storage::{ConnectionTarget, MySqlStore};
use crate::usage::USAGE;

/// Long flags that may also be written with a single dash (`-name x`).
const FLAGS: [&str; 11] = [
    "host",
    "database",
    "domain",
    "name",
    "password",
    "source",
    "destination",
    "port",
    "verbose",
    "help",
    "version",
];

#[derive(Parser, Debug)]
#[command(name = "vmailctl")]
#[command(about = "Manage virtual mail users and aliases")]
#[command(version, disable_help_flag = true)]
pub struct Cli {
    #[arg(help = "add-user, remove-user, change-password, add-alias or help")]
    pub command: Option<String>,

    #[arg(long, default_value = "localhost", help = "Database host")]
    pub host: String,

    #[arg(long, default_value = "mailserver", help = "Database name")]
    pub database: String,

    #[arg(long, allow_hyphen_values = true, help = "Mail domain")]
    pub domain: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "User name")]
    pub name: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "User password")]
    pub password: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Alias source address")]
    pub source: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Alias destination address")]
    pub destination: Option<String>,

    #[arg(long, default_value_t = 3306, help = "Database port")]
    pub port: u16,

    #[arg(short, long, help = "Show usage")]
    pub help: bool,

    #[arg(long, help = "Log statements to stderr")]
    pub verbose: bool,
}

impl Cli {
    /// The command token, `help` when absent.
    pub fn command_name(&self) -> &str {
        self.command.as_deref().unwrap_or("help")
    }

    pub fn into_request(self, command: Command, config: &Config) -> Request {
        Request {
            command,
            host: self.host,
            database: self.database,
            port: self.port,
            domain: self
                .domain
                .unwrap_or_else(|| config.default_domain().to_string()),
            name: self.name,
            password: self.password,
            source: self.source,
            destination: self.destination,
        }
    }
}

/// Rewrites single-dash long flags (`-name`, `-name=x`) to the double-dash
/// form clap expects. Values following a flag are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut out = Vec::new();
    let mut expects_value = false;

    for arg in args.into_iter().map(Into::into) {
        if expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }

        let normalized = match arg.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') && is_flag(rest) => format!("-{arg}"),
            _ => arg,
        };
        if let Some(flag) = normalized.strip_prefix("--") {
            expects_value = !flag.contains('=') && takes_value(flag);
        }
        out.push(normalized);
    }

    out
}

fn is_flag(word: &str) -> bool {
    let name = word.split_once('=').map_or(word, |(name, _)| name);
    FLAGS.contains(&name)
}

fn takes_value(flag: &str) -> bool {
    !matches!(flag, "verbose" | "help" | "version") && FLAGS.contains(&flag)
}

/// Drives one invocation: validate, connect, execute, close. Returns the
/// message to print on success.
pub async fn run(cli: Cli) -> Result<String> {
    if cli.help {
        return Ok(USAGE.to_string());
    }

    let command: Command = cli.command_name().parse()?;
    if !command.needs_database() {
        return Ok(USAGE.to_string());
    }

    let config = Config::load()?;
    let request = cli.into_request(command, &config);
    let action = validate(&request)?;

    let target = ConnectionTarget::new(&request.host, &request.database, request.port);
    let store = Arc::new(MySqlStore::connect(&target, &config.database).await?);

    let outcome = Executor::new(Arc::clone(&store))
        .run(&action, &request.domain)
        .await;

    match Arc::try_unwrap(store) {
        Ok(store) => {
            if let Err(e) = store.close().await {
                tracing::warn!(error = %e, "failed to close connection");
            }
        }
        Err(_) => tracing::warn!("connection still shared, dropping without close"),
    }

    outcome
}
