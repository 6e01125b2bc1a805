use quote::{QuoteConfig, QuoteError, RateTable};
use viewer::{ViewerError, ViewerSession};

/// Everything the bridge keeps between messages.
#[derive(Debug, Default)]
pub struct BridgeState {
    pub session: ViewerSession,
    pub quote_config: QuoteConfig,
    /// Rates behind the viewer's quick quote button.
    pub quick_rates: RateTable,
}

impl BridgeState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Viewer(#[from] ViewerError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("invalid file payload: {reason}")]
    Payload { reason: String },
}

impl BridgeError {
    /// Text for the page's error panel.
    pub fn user_message(&self) -> String {
        match self {
            BridgeError::Viewer(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}
