//! Error type for coordinate extraction.

/// Why a source string produced no repository coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// Normalization produced nothing (empty source).
    #[error("empty repository source")]
    Empty,

    /// The normalized string is not an absolute URL.
    #[error("not a repository URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
