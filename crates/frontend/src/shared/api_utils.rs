//! API utilities for frontend-backend communication
//!
//! Адрес REST API задаётся при сборке через `API_BASE_URL`
//! (например, `API_BASE_URL=https://api.otica.com.br trunk build`).
//! Если переменная не задана, берётся хост текущей страницы с портом 3000.

/// Port of the REST API when the base URL is derived from the page location
pub const DEFAULT_API_PORT: u16 = 3000;

/// Чистое правило выбора адреса API.
///
/// `configured` имеет приоритет; завершающий `/` отбрасывается.
pub fn resolve_api_base(
    configured: Option<&str>,
    protocol: Option<&str>,
    hostname: Option<&str>,
) -> String {
    if let Some(url) = configured.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    let protocol = protocol.filter(|p| !p.is_empty()).unwrap_or("http:");
    let hostname = hostname.filter(|h| !h.is_empty()).unwrap_or("127.0.0.1");
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Get the base URL for API requests
///
/// # Returns
/// - `API_BASE_URL` from the build environment, or
/// - API base URL like "http://localhost:3000" built from the window location
pub fn api_base() -> String {
    let configured = option_env!("API_BASE_URL");
    let location = web_sys::window().map(|w| w.location());
    let protocol = location.as_ref().and_then(|l| l.protocol().ok());
    let hostname = location.as_ref().and_then(|l| l.hostname().ok());
    resolve_api_base(configured, protocol.as_deref(), hostname.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        assert_eq!(
            resolve_api_base(Some("https://api.exemplo.com/"), Some("http:"), Some("localhost")),
            "https://api.exemplo.com"
        );
    }

    #[test]
    fn test_derived_from_location() {
        assert_eq!(
            resolve_api_base(None, Some("https:"), Some("painel.exemplo.com")),
            "https://painel.exemplo.com:3000"
        );
        assert_eq!(resolve_api_base(Some("  "), None, None), "http://127.0.0.1:3000");
    }
}
