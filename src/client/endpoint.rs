//! Device endpoint construction.

use crate::error::DisplayError;

/// Port the signal device serves its WebSocket on.
pub const DEFAULT_DEVICE_PORT: u16 = 81;

/// Builds the WebSocket URL `ws://<host>:<port>` for a device.
///
/// Bare IPv6 addresses are bracketed.
///
/// # Errors
///
/// Returns [`DisplayError::InvalidEndpoint`] if `host` is empty or contains
/// characters that cannot appear in a URL authority.
pub fn device_url(host: &str, port: u16) -> Result<String, DisplayError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(DisplayError::InvalidEndpoint("empty host".to_string()));
    }
    if host
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@'))
    {
        return Err(DisplayError::InvalidEndpoint(format!("bad host: {host}")));
    }

    if host.contains(':') && !host.starts_with('[') {
        Ok(format!("ws://[{host}]:{port}"))
    } else {
        Ok(format!("ws://{host}:{port}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fixed_port_url() {
        let url = device_url("192.168.4.1", DEFAULT_DEVICE_PORT).ok();
        assert_eq!(url.as_deref(), Some("ws://192.168.4.1:81"));
    }

    #[test]
    fn hostname_is_trimmed() {
        let url = device_url(" signal.local ", 81).ok();
        assert_eq!(url.as_deref(), Some("ws://signal.local:81"));
    }

    #[test]
    fn ipv6_is_bracketed() {
        let url = device_url("::1", 81).ok();
        assert_eq!(url.as_deref(), Some("ws://[::1]:81"));
        let url = device_url("[::1]", 81).ok();
        assert_eq!(url.as_deref(), Some("ws://[::1]:81"));
    }

    #[test]
    fn rejects_empty_and_bad_hosts() {
        assert!(matches!(
            device_url("", 81),
            Err(DisplayError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            device_url("host/path", 81),
            Err(DisplayError::InvalidEndpoint(_))
        ));
    }
}
