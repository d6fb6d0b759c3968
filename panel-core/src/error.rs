use reqwest::StatusCode;

/// Ways a single fetch can fail.
///
/// The panel only ever surfaces two messages to the user (see
/// [`FetchError::user_message`]); the variants exist so logs keep the
/// underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(StatusCode),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to parse localtime: {0}")]
    BadTimestamp(#[from] chrono::ParseError),

    #[error("response is missing the location or current section")]
    NoData,
}

impl FetchError {
    /// The notice text shown in the panel for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NoData => "No data returned",
            _ => "Could not fetch weather. Try different location or check network.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_has_its_own_message() {
        assert_eq!(FetchError::NoData.user_message(), "No data returned");
    }

    #[test]
    fn decode_failure_maps_to_generic_message() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(
            FetchError::from(err).user_message(),
            "Could not fetch weather. Try different location or check network."
        );
    }

    #[test]
    fn status_failure_maps_to_generic_message() {
        let err = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.user_message().starts_with("Could not fetch weather"));
    }
}
