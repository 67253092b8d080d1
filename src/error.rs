// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Search Error: {0}")]
    Search(#[from] SearchError),
    #[error("Asset Error: {0}")]
    Asset(#[from] AssetError),
}

/// Failure of a call to the image archive search endpoint.
///
/// Every expected failure mode (transport, HTTP status, body parsing)
/// collapses into `RequestFailed`; the cause stays attached for logging.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    RequestFailed(#[source] FailureCause),
}

impl SearchError {
    /// Returns the i18n message key shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SearchError::RequestFailed(_) => "notification-search-failed",
        }
    }

    /// Returns the underlying cause.
    pub fn cause(&self) -> &FailureCause {
        match self {
            SearchError::RequestFailed(cause) => cause,
        }
    }
}

/// Failure while downloading or decoding an image asset.
#[derive(Debug, Clone, Error)]
pub enum AssetError {
    #[error("asset download failed: {0}")]
    Fetch(#[source] FailureCause),
    #[error("asset could not be decoded: {0}")]
    Decode(String),
}

impl AssetError {
    /// Returns the i18n message key shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AssetError::Fetch(_) => "notification-image-download-failed",
            AssetError::Decode(_) => "notification-image-decode-failed",
        }
    }
}

/// What went wrong on the wire. Kept as owned strings so messages carrying
/// errors stay `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// Connection, TLS, timeout or other transport error.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),
    /// The body was not the JSON shape we expect.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The configured endpoint or asset URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for FailureCause {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FailureCause::Status(status.as_u16())
        } else if err.is_decode() {
            FailureCause::Malformed(err.to_string())
        } else {
            FailureCause::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FailureCause {
    fn from(err: serde_json::Error) -> Self {
        FailureCause::Malformed(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn search_error_keeps_cause() {
        let err = SearchError::RequestFailed(FailureCause::Status(503));
        assert_eq!(err.cause(), &FailureCause::Status(503));
        assert!(format!("{}", err).contains("503"));
        assert_eq!(err.i18n_key(), "notification-search-failed");
    }

    #[test]
    fn malformed_json_maps_to_malformed_cause() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let cause: FailureCause = json_err.into();
        assert!(matches!(cause, FailureCause::Malformed(_)));
    }

    #[test]
    fn search_error_converts_into_crate_error() {
        let err: Error = SearchError::RequestFailed(FailureCause::Network("refused".into())).into();
        assert!(matches!(err, Error::Search(_)));
        assert!(format!("{}", err).contains("refused"));
    }

    #[test]
    fn asset_error_i18n_keys() {
        assert_eq!(
            AssetError::Fetch(FailureCause::Status(404)).i18n_key(),
            "notification-image-download-failed"
        );
        assert_eq!(
            AssetError::Decode("truncated".into()).i18n_key(),
            "notification-image-decode-failed"
        );
    }
}
