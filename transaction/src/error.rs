//! Transaction error types.

use thiserror::Error;

/// Transaction errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// `complete` was called with no open transaction. Every `ensure`
    /// must be paired with exactly one `complete`; an unmatched pair is
    /// a correctness bug in the caller.
    #[error("no transaction is active")]
    NotActive,

    /// The document rejected the mutation group at commit; state was
    /// rolled back to the outermost snapshot.
    #[error("commit rejected: {reason}")]
    CommitRejected { reason: String },

    /// A mutation inside the transaction failed; state was rolled back.
    #[error("transaction aborted: {reason}")]
    Aborted { reason: String },
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
