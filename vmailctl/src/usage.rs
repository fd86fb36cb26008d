pub const USAGE: &str = "\
Usage:
  vmailctl add-user        -name <username> -password <password> [options]
  vmailctl remove-user     -name <username> [options]
  vmailctl change-password -name <username> -password <password> [options]
  vmailctl add-alias       -source <address> -destination <address> [options]
  vmailctl help

Options:
  -host <host>          Database host (default: localhost)
  -database <name>      Database name (default: mailserver)
  -domain <domain>      Mail domain (default: [mail] default_domain from the config)
  -port <port>          Database port, ignored for localhost (default: 3306)
  -verbose              Log statements to stderr
  -help                 Show this message

Configuration is read from /etc/vmailctl/config.toml and the per-user
vmailctl/config.toml, or from the file named by VMAILCTL_CONFIG.
VMAILCTL_DB_USER, VMAILCTL_DB_PASSWORD and VMAILCTL_DEFAULT_DOMAIN override it.";
