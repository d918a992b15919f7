use crate::DynError;
use url::Url;

/// Holds the raw syslog server address as supplied by the configuration
/// layer. The address is kept as text and only parsed on demand.
#[derive(Debug, Clone)]
pub struct SyslogConfig {
    syslog_addr: String,
}

impl SyslogConfig {
    pub fn new(syslog_addr: &str) -> SyslogConfig {
        SyslogConfig {
            syslog_addr: syslog_addr.to_string(),
        }
    }

    pub fn syslog_addr(&self) -> &str {
        &self.syslog_addr
    }

    /// Resolve the configured address into a parsed URL.
    /// An empty address means syslog forwarding is disabled and resolves
    /// to None. Scheme and port are taken as-is from the address, nothing
    /// is checked beyond generic URL syntax.
    pub fn resolve_addr(&self) -> Result<Option<Url>, DynError> {
        if self.syslog_addr.is_empty() {
            return Ok(None);
        }
        let u = Url::parse(self.syslog_addr.as_str())?;
        Ok(Some(u))
    }
}
