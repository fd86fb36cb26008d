use std::fmt;

const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

/// Where to connect: host and database, plus a port for non-loopback hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub database: String,
    pub port: Option<u16>,
}

impl ConnectionTarget {
    pub fn new(host: &str, database: &str, port: u16) -> Self {
        let port = (port != 0 && !is_loopback(host)).then_some(port);
        Self {
            host: host.to_string(),
            database: database.to_string(),
            port,
        }
    }

    pub fn is_loopback(&self) -> bool {
        is_loopback(&self.host)
    }
}

fn is_loopback(host: &str) -> bool {
    LOOPBACK_HOSTS.contains(&host)
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}/{}", self.host, port, self.database),
            None => write!(f, "{}/{}", self.host, self.database),
        }
    }
}
