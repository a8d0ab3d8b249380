//! Cookie header helpers.
//!
//! Cookies are read from and written to the raw `Cookie`/`Set-Cookie`
//! headers. Both minted cookies are http-only, SameSite=Lax, path `/` -
//! one discipline for the set and clear paths.

use axum::http::{header, HeaderMap};

/// Finds the value of a named cookie across all `Cookie` headers.
pub fn request_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(str::trim)
        .find_map(|pair| {
            pair.strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
}

/// Builds a `Set-Cookie` value minting a cookie.
pub fn build_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax")
}

/// Builds a `Set-Cookie` value deleting a cookie.
pub fn expire_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn finds_cookie_among_several() {
        let headers = headers("a=1; IsRecovery=true; b=2");
        assert_eq!(request_cookie(&headers, "IsRecovery"), Some("true"));
        assert_eq!(request_cookie(&headers, "a"), Some("1"));
        assert_eq!(request_cookie(&headers, "b"), Some("2"));
    }

    #[test]
    fn missing_cookie_is_none() {
        let headers = headers("a=1");
        assert_eq!(request_cookie(&headers, "IsRecovery"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        let headers = headers("IsRecoveryX=true");
        assert_eq!(request_cookie(&headers, "IsRecovery"), None);
    }

    #[test]
    fn reads_across_multiple_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::COOKIE, HeaderValue::from_static("IsRecovery=true"));
        assert_eq!(request_cookie(&headers, "IsRecovery"), Some("true"));
    }

    #[test]
    fn build_cookie_formats_attributes() {
        let cookie = build_cookie("IsRecovery", "true", 3600);
        assert_eq!(
            cookie,
            "IsRecovery=true; Path=/; Max-Age=3600; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn expire_cookie_zeroes_max_age() {
        let cookie = expire_cookie("IsRecovery");
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.starts_with("IsRecovery=;"));
    }
}
