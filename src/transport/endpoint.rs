use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/";

pub const CURRENT_USER: &str = "me";
pub const STATS: &str = "stats";
pub const USERS: &str = "users";
pub const PHOTOS: &str = "photos";
pub const COLLECTIONS: &str = "collections";
pub const SEARCH: &str = "search";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid endpoint {url}: {reason}")]
pub struct EndpointError {
    pub url: String,
    pub reason: &'static str,
}

/// Parse and check a base URL. Only absolute `http`/`https` URLs are usable.
pub fn parse_base_url(value: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(value).map_err(|_| EndpointError {
        url: value.to_owned(),
        reason: "not an absolute URL",
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(EndpointError {
            url: value.to_owned(),
            reason: "expected an http or https base URL",
        });
    }
    Ok(url)
}

/// Append path segments to `base`, percent-encoding each one.
///
/// `join(base, &["users", "some name"])` yields `.../users/some%20name`.
/// `.` and `..` are refused: `url` would drop them and the request would
/// land on the parent endpoint.
pub fn join(base: &str, segments: &[&str]) -> Result<Url, EndpointError> {
    if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(EndpointError {
            url: format!("{base}{segment}"),
            reason: "dot segments are not allowed",
        });
    }
    let mut url = parse_base_url(base)?;
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| EndpointError {
            url: base.to_owned(),
            reason: "cannot be a base URL",
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_appends_segments() {
        let url = join(DEFAULT_BASE_URL, &[USERS, "hbagdi", "photos"]).unwrap();
        assert_eq!(url.as_str(), "https://api.unsplash.com/users/hbagdi/photos");

        let url = join(DEFAULT_BASE_URL, &[CURRENT_USER]).unwrap();
        assert_eq!(url.as_str(), "https://api.unsplash.com/me");
    }

    #[test]
    fn join_keeps_base_path_prefix() {
        let url = join("http://127.0.0.1:8080/proxy/", &[STATS, "total"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/stats/total");

        let url = join("http://127.0.0.1:8080/proxy?x=1", &[STATS, "total"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/stats/total");
    }

    #[test]
    fn join_escapes_segments() {
        let url = join(DEFAULT_BASE_URL, &[PHOTOS, "../me"]).unwrap();
        assert_eq!(url.as_str(), "https://api.unsplash.com/photos/..%2Fme");
    }

    #[test]
    fn join_refuses_dot_segments() {
        for segment in [".", ".."] {
            let err = join(DEFAULT_BASE_URL, &[PHOTOS, segment]).unwrap_err();
            assert_eq!(err.reason, "dot segments are not allowed");
        }
        let url = join(DEFAULT_BASE_URL, &[PHOTOS, "..."]).unwrap();
        assert_eq!(url.as_str(), "https://api.unsplash.com/photos/...");
    }

    #[test]
    fn base_url_must_be_http() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("mailto:someone@example.com").is_err());
        assert!(parse_base_url("ftp://example.com/").is_err());
        assert!(parse_base_url("http://localhost:1234").is_ok());
        assert!(join("", &[PHOTOS]).is_err());
    }
}
