//! Error types for signing.

use std::fmt;

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request URL can't be parsed or rebuilt.
    MalformedUrl,
    /// The region name is not a known S3 region.
    UnknownRegion,
    /// A header or query component carries bytes that can't be encoded.
    InvalidEncoding,
    /// The requested operation is not available for the chosen version.
    Unsupported,
    /// Errors that we can't classify further.
    Unexpected,
}

impl ErrorKind {
    /// Static name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedUrl => "MalformedUrl",
            ErrorKind::UnknownRegion => "UnknownRegion",
            ErrorKind::InvalidEncoding => "InvalidEncoding",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::Unexpected => "Unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by signing operations.
#[derive(thiserror::Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Shortcut for [`ErrorKind::MalformedUrl`].
    pub fn malformed_url(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::MalformedUrl, message)
    }

    /// Shortcut for [`ErrorKind::UnknownRegion`].
    pub fn unknown_region(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::UnknownRegion, message)
    }

    /// Shortcut for [`ErrorKind::InvalidEncoding`].
    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::InvalidEncoding, message)
    }

    /// Shortcut for [`ErrorKind::Unsupported`].
    pub fn unsupported(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::Unsupported, message)
    }

    /// Shortcut for [`ErrorKind::Unexpected`].
    pub fn unexpected(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::Unexpected, message)
    }

    /// Attach the underlying error as the source.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Error::malformed_url("uri is invalid").with_source(err)
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Error::malformed_url("uri parts are invalid").with_source(err)
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Error::invalid_encoding("header value is invalid").with_source(err)
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Error::invalid_encoding("header name is invalid").with_source(err)
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Error::invalid_encoding("header value is not visible ascii").with_source(err)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Error::unexpected("formatting failed").with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_kind() {
        let err = Error::unknown_region("region moon-base-1 is not known");
        assert_eq!(err.kind(), ErrorKind::UnknownRegion);
        assert_eq!(
            err.to_string(),
            "UnknownRegion: region moon-base-1 is not known"
        );
    }
}
