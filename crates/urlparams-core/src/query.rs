//! Query-string extraction from a page-view URL.

use url::Url;

use crate::error::EnrichError;

/// Decoded query-string pairs of a URL, in the order they appear.
///
/// Names repeat freely; a lookup returns the last value given for a name.
/// When built with `fold_case`, every name is lower-cased once up front and
/// lookups lower-case the requested name, so matching is case-insensitive for
/// the whole pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
    fold_case: bool,
}

impl QueryParams {
    /// Parses `url` and collects its query pairs.
    pub fn parse(url: &str, fold_case: bool) -> Result<Self, EnrichError> {
        let parsed = Url::parse(url).map_err(|source| EnrichError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self::from_url(&parsed, fold_case))
    }

    pub fn from_url(url: &Url, fold_case: bool) -> Self {
        let pairs = url
            .query_pairs()
            .map(|(name, value)| {
                let name = if fold_case {
                    name.to_lowercase()
                } else {
                    name.into_owned()
                };
                (name, value.into_owned())
            })
            .collect();
        Self { pairs, fold_case }
    }

    /// Value of the last pair named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        let folded;
        let wanted = if self.fold_case {
            folded = name.to_lowercase();
            folded.as_str()
        } else {
            name
        };
        self.pairs
            .iter()
            .rev()
            .find(|(n, _)| n == wanted)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names() {
        let q = QueryParams::parse("https://example.com/test?plugin=1&myUrlParameter=2", false)
            .unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(q.get("plugin"), Some("1"));
        assert_eq!(q.get("myUrlParameter"), Some("2"));
        assert_eq!(q.get("myurlparameter"), None);
    }

    #[test]
    fn folded_names() {
        let q = QueryParams::parse("https://example.com/test?MyUrlParameter=1", true).unwrap();
        assert_eq!(q.get("myUrlParameter"), Some("1"));
        assert_eq!(q.get("MYURLPARAMETER"), Some("1"));
    }

    #[test]
    fn last_value_wins() {
        let q = QueryParams::parse("https://example.com/?a=1&a=2&A=3", false).unwrap();
        assert_eq!(q.get("a"), Some("2"));
        let q = QueryParams::parse("https://example.com/?a=1&a=2&A=3", true).unwrap();
        assert_eq!(q.get("a"), Some("3"));
    }

    #[test]
    fn trailing_empty_value_shadows_earlier_one() {
        let q = QueryParams::parse("https://e.com/?a=1&a=", false).unwrap();
        assert_eq!(q.get("a"), Some(""));
    }

    #[test]
    fn decodes_values_and_ignores_fragment() {
        let q = QueryParams::parse(
            "https://example.com/?utm_source=news%20letter&q=a+b#utm_medium=x",
            false,
        )
        .unwrap();
        assert_eq!(q.get("utm_source"), Some("news letter"));
        assert_eq!(q.get("q"), Some("a b"));
        assert_eq!(q.get("utm_medium"), None);
    }

    #[test]
    fn no_query() {
        let q = QueryParams::parse("https://example.com/path", false).unwrap();
        assert!(q.is_empty());
    }

    #[test]
    fn relative_url_is_rejected() {
        let err = QueryParams::parse("/test?plugin=1", false).unwrap_err();
        match err {
            EnrichError::InvalidUrl { url, .. } => assert_eq!(url, "/test?plugin=1"),
        }
    }
}
