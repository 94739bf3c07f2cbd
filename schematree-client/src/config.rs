//! Controller connection settings.

use std::{fmt, time::Duration};

/// Port of the controller REST API when the host carries no scheme.
pub const DEFAULT_PORT: u16 = 8443;

/// Per-request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and as whom to connect.
#[derive(Clone)]
pub struct ControllerConfig {
    /// Host name, `host:port`, or a full base URL such as `http://127.0.0.1:8080`
    pub host: String,
    pub username: String,
    pub password: String,
    /// Accept self-signed or otherwise invalid TLS certificates
    pub insecure: bool,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl ControllerConfig {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            insecure: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set whether invalid certificates are accepted.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL of the REST API, without trailing slash.
    ///
    /// A bare host gets `https://` and the default port; a host that already
    /// names a port keeps it; anything with a scheme is used as given.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else if has_port(host) {
            format!("https://{}", host)
        } else {
            format!("https://{}:{}", host, DEFAULT_PORT)
        }
    }
}

impl fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("insecure", &self.insecure)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Returns true if `host` ends in `:<port>`, allowing bracketed IPv6 literals.
fn has_port(host: &str) -> bool {
    let after_bracket = host.rsplit(']').next().unwrap_or(host);
    after_bracket
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
}
