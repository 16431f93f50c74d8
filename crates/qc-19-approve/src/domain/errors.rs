use thiserror::Error;

/// Reasons an allowance is rejected.
///
/// Rejections are recoverable: the transaction is not applied and the reason
/// is reported back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApproveError {
    #[error("Invalid approve: {0}")]
    InvalidInput(String),

    #[error("Amount overflow")]
    AmountOverflow,

    #[error("Invalid amount text: {0:?}")]
    InvalidAmount(String),
}

impl ApproveError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
