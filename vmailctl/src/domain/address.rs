/// A mail address split at its first `@`. An empty part after the `@`
/// counts as no domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address<'a> {
    pub local: &'a str,
    pub domain: Option<&'a str>,
}

impl<'a> Address<'a> {
    pub fn split(raw: &'a str) -> Self {
        match raw.split_once('@') {
            Some((local, domain)) => Self {
                local,
                domain: (!domain.is_empty()).then_some(domain),
            },
            None => Self {
                local: raw,
                domain: None,
            },
        }
    }

    /// The embedded domain, or `fallback` when the address has none.
    pub fn domain_or(&self, fallback: &'a str) -> &'a str {
        self.domain.unwrap_or(fallback)
    }
}

pub fn compose_email(local: &str, domain: &str) -> String {
    format!("{local}@{domain}")
}
