//! Error type for the per-event enrichment pass.

use thiserror::Error;

/// Error returned by the enricher. Missing inputs are never errors; only a
/// `$current_url` that cannot be parsed is.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// `$current_url` is present but is not a valid absolute URL.
    #[error("invalid $current_url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_url_and_cause() {
        let err = EnrichError::InvalidUrl {
            url: "not a url".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"not a url\""));
        assert!(msg.contains("relative URL without a base"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
