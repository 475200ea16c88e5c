use crate::error::ProxyError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters escaped when credentials are embedded in a proxy URL:
/// everything except RFC 3986 unreserved characters.
const CREDENTIAL_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const SUPPORTED_SCHEMES: [&str; 3] = ["http", "https", "socks5"];
const DEFAULT_SCHEME: &str = "http";

/// Canonical form of a proxy address, parsed from the mixed string
/// formats found in proxies.txt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    pub scheme: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
}

/// Recognized raw input shapes, tried in order.
enum RawFormat<'a> {
    /// `scheme://[user:pass@]host:port`
    SchemeWithAuth { scheme: &'a str, rest: &'a str },
    /// `ip:port:user:pass` - password is everything after the third colon
    ColonDelimitedAuth { parts: Vec<&'a str> },
    /// `user:pass@host:port` with no scheme
    AuthAtHost { auth: &'a str, host_port: &'a str },
    /// `host:port` with no scheme and exactly one colon
    HostPortOnly { host_port: &'a str },
    Unrecognized,
}

fn classify(raw: &str) -> RawFormat<'_> {
    if let Some((scheme, rest)) = raw.split_once("://") {
        return RawFormat::SchemeWithAuth { scheme, rest };
    }
    if raw.matches(':').count() >= 3 {
        return RawFormat::ColonDelimitedAuth {
            parts: raw.split(':').collect(),
        };
    }
    if let Some((auth, host_port)) = raw.rsplit_once('@') {
        return RawFormat::AuthAtHost { auth, host_port };
    }
    if raw.matches(':').count() == 1 {
        return RawFormat::HostPortOnly { host_port: raw };
    }
    RawFormat::Unrecognized
}

impl ProxyEndpoint {
    /// Parses a raw proxy string into its canonical form.
    ///
    /// Errors here are soft failures: callers are expected to log a
    /// warning and continue without a proxy, never abort the identity.
    pub fn normalize(raw: &str) -> Result<Self, ProxyError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ProxyError::UnrecognizedFormat {
                raw: raw.to_string(),
            });
        }

        match classify(raw) {
            RawFormat::SchemeWithAuth { scheme, rest } => {
                if !SUPPORTED_SCHEMES.contains(&scheme) {
                    return Err(ProxyError::UnsupportedScheme {
                        scheme: scheme.to_string(),
                    });
                }
                let (auth, host_port) = match rest.rsplit_once('@') {
                    Some((auth, host_port)) => (Some(auth), host_port),
                    None => (None, rest),
                };
                let (host, port) = split_host_port(raw, host_port)?;
                let (username, password) = split_credentials(auth);
                Ok(Self {
                    scheme: scheme.to_string(),
                    username,
                    password,
                    host,
                    port,
                })
            }
            RawFormat::ColonDelimitedAuth { parts } => {
                // ip:port:user:pass... - password may itself contain colons
                let host = parts[0];
                let port = parse_port(raw, parts[1])?;
                let username = parts[2].to_string();
                let password = parts[3..].join(":");
                if host.is_empty() {
                    return Err(ProxyError::UnrecognizedFormat {
                        raw: raw.to_string(),
                    });
                }
                Ok(Self {
                    scheme: DEFAULT_SCHEME.to_string(),
                    username: Some(username),
                    password: Some(password),
                    host: host.to_string(),
                    port,
                })
            }
            RawFormat::AuthAtHost { auth, host_port } => {
                let (host, port) = split_host_port(raw, host_port)?;
                let (username, password) = split_credentials(Some(auth));
                Ok(Self {
                    scheme: DEFAULT_SCHEME.to_string(),
                    username,
                    password,
                    host,
                    port,
                })
            }
            RawFormat::HostPortOnly { host_port } => {
                let (host, port) = split_host_port(raw, host_port)?;
                Ok(Self {
                    scheme: DEFAULT_SCHEME.to_string(),
                    username: None,
                    password: None,
                    host,
                    port,
                })
            }
            RawFormat::Unrecognized => Err(ProxyError::UnrecognizedFormat {
                raw: raw.to_string(),
            }),
        }
    }

    /// Renders the canonical URL with percent-encoded credentials,
    /// suitable for `reqwest::Proxy::all`.
    pub fn url(&self) -> String {
        let mut url = format!("{}://", self.scheme);
        if let Some(user) = &self.username {
            url.push_str(&utf8_percent_encode(user, CREDENTIAL_SET).to_string());
            if let Some(pass) = &self.password {
                url.push(':');
                url.push_str(&utf8_percent_encode(pass, CREDENTIAL_SET).to_string());
            }
            url.push('@');
        }
        url.push_str(&self.host);
        url.push(':');
        url.push_str(&self.port.to_string());
        url
    }
}

// Display hides credentials so endpoints are safe to log.
impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

fn split_credentials(auth: Option<&str>) -> (Option<String>, Option<String>) {
    match auth {
        Some(auth) => match auth.split_once(':') {
            Some((user, pass)) => (Some(user.to_string()), Some(pass.to_string())),
            None if !auth.is_empty() => (Some(auth.to_string()), None),
            None => (None, None),
        },
        None => (None, None),
    }
}

fn split_host_port(raw: &str, host_port: &str) -> Result<(String, u16), ProxyError> {
    let (host, port_str) = host_port
        .rsplit_once(':')
        .ok_or_else(|| ProxyError::UnrecognizedFormat {
            raw: raw.to_string(),
        })?;
    if host.is_empty() {
        return Err(ProxyError::UnrecognizedFormat {
            raw: raw.to_string(),
        });
    }
    let port = parse_port(raw, port_str)?;
    Ok((host.to_string(), port))
}

fn parse_port(raw: &str, value: &str) -> Result<u16, ProxyError> {
    value.parse::<u16>().map_err(|_| ProxyError::InvalidPort {
        raw: raw.to_string(),
        value: value.to_string(),
    })
}
