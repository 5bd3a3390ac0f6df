//! Application configuration.
//!
//! Centralized configuration for the publish page.
//! The backend URL can be overridden at build time with `PUBLISH_API_URL`,
//! everything else is hardcoded.

/// Publish backend base URL.
pub const API_BASE_URL: &str = match option_env!("PUBLISH_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Dataset upload endpoint (multipart).
pub const PUBLISH_DATASET_PATH: &str = "/publish/dataset";

/// Shareable link endpoint (JSON).
pub const GENERATE_LINK_PATH: &str = "/publish/generate-link";

/// Dataset identifier sent when requesting a public link.
///
/// The page has no dataset selection yet, so a fixed id is used.
pub const PLACEHOLDER_DATASET_ID: &str = "example-dataset-id";

/// Accept-list hint for the file picker. Not enforced.
pub const ACCEPTED_FILE_TYPES: &str = ".csv,.json,.txt,.nc,.fastq";

/// Contact address for the "Talk to us" link.
pub const CONTACT_EMAIL: &str = "hello@oceaniq.ai";

/// Build a full endpoint URL from a path.
pub fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let url = endpoint(PUBLISH_DATASET_PATH);
        assert!(url.ends_with("/publish/dataset"));
        assert!(!url.contains("//publish"));
        assert_eq!(endpoint("publish/dataset"), url);
    }

    #[test]
    fn test_default_endpoints() {
        if option_env!("PUBLISH_API_URL").is_none() {
            assert_eq!(endpoint(PUBLISH_DATASET_PATH), "http://localhost:8000/publish/dataset");
            assert_eq!(
                endpoint(GENERATE_LINK_PATH),
                "http://localhost:8000/publish/generate-link"
            );
        }
    }
}
