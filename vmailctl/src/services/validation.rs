use crate::domain::{Action, Command, Request};
use crate::error::{Result, VmailError};

const NAME: (&str, &str) = ("-name", "<username>");
const PASSWORD: (&str, &str) = ("-password", "<password>");
const SOURCE: (&str, &str) = ("-source", "<address>");
const DESTINATION: (&str, &str) = ("-destination", "<address>");

/// Checks the parameters `request.command` needs, in a fixed order, and
/// reports the first violation.
pub fn validate(request: &Request) -> Result<Action> {
    match request.command {
        Command::AddUser => {
            let (name, password) = user_with_password(request)?;
            Ok(Action::AddUser { name, password })
        }
        Command::ChangePassword => {
            let (name, password) = user_with_password(request)?;
            Ok(Action::ChangePassword { name, password })
        }
        Command::RemoveUser => Ok(Action::RemoveUser {
            name: required(request.name.as_deref(), NAME)?,
        }),
        Command::AddAlias => Ok(Action::AddAlias {
            source: required(request.source.as_deref(), SOURCE)?,
            destination: required(request.destination.as_deref(), DESTINATION)?,
        }),
        Command::Help => Ok(Action::Help),
    }
}

fn user_with_password(request: &Request) -> Result<(String, String)> {
    let name = required(request.name.as_deref(), NAME)?;
    if name.matches('@').count() > 1 {
        return Err(VmailError::TooManyAtSigns);
    }
    let password = required(request.password.as_deref(), PASSWORD)?;
    Ok((name, password))
}

fn required(
    value: Option<&str>,
    (flag, placeholder): (&'static str, &'static str),
) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(VmailError::MissingParameter { flag, placeholder }),
    }
}
