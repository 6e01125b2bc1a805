/// Invalid quote inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    #[error("volume must be a finite, non-negative number of cm³, got {0}")]
    InvalidVolume(f64),

    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("infill must be between 0 and 100 percent, got {0}")]
    InvalidInfill(u8),
}
