//! Client IP extraction for throttling.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Determines the client key used for per-client throttling.
///
/// With `behind_proxy` set, the first entry of `X-Forwarded-For` (or,
/// failing that, `X-Real-IP`) wins; otherwise the peer socket address is
/// authoritative, since forwarding headers from an unknown edge are
/// trivially spoofable.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return real_ip.to_string();
        }
    }

    peer.ip().to_string()
}
