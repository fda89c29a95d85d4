use reqwest::Url;

use crate::actions::album_actions::ApiError;

/// `{base}/albums`
pub fn albums_endpoint(base: &Url) -> Result<Url, ApiError> {
    endpoint(base, &["albums"])
}

/// `{base}/albums/{id}`, with `id` percent-encoded as a single path segment.
pub fn album_endpoint(base: &Url, id: &str) -> Result<Url, ApiError> {
    endpoint(base, &["albums", id])
}

fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn appends_to_bare_host() {
        let base = base("http://localhost:8080");
        assert_eq!(
            albums_endpoint(&base).unwrap().as_str(),
            "http://localhost:8080/albums"
        );
        assert_eq!(
            album_endpoint(&base, "42").unwrap().as_str(),
            "http://localhost:8080/albums/42"
        );
    }

    #[test]
    fn keeps_path_prefix() {
        assert_eq!(
            albums_endpoint(&base("http://example.com/api/")).unwrap().as_str(),
            "http://example.com/api/albums"
        );
        assert_eq!(
            albums_endpoint(&base("http://example.com/api")).unwrap().as_str(),
            "http://example.com/api/albums"
        );
    }

    #[test]
    fn encodes_id_as_one_segment() {
        let url = album_endpoint(&base("http://localhost:8080"), "a b/c").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/albums/a%20b%2Fc");
    }

    #[test]
    fn rejects_base_without_path() {
        assert!(matches!(
            albums_endpoint(&base("mailto:someone@example.com")),
            Err(ApiError::InvalidEndpoint(_))
        ));
    }
}
