use thiserror::Error;

/// Errors surfaced by the market feed.
///
/// A failed cycle is recovered locally by the monitor; none of these
/// terminate the process outside of bootstrap.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    #[error("market endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_formatting() {
        let err = FeedError::Transport {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = FeedError::HttpStatus { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}
