//! Reentrant transaction manager.

use tether_document::{Document, DocumentSnapshot};
use tracing::debug;

use crate::error::{TransactionError, TransactionResult};

/// Serializes document mutations into atomic groups.
///
/// Nested `ensure` calls join the open transaction instead of opening a
/// new one; only the matching outermost `complete` commits. The snapshot
/// taken when the outermost scope opens is either discarded on commit or
/// restored in full on rejection/abort — no partial mutation is
/// observable across the boundary.
#[derive(Debug, Default)]
pub struct TransactionManager {
    /// Nesting depth; zero means no open transaction.
    depth: u32,
    /// Document state at the outermost `ensure`, for rollback.
    snapshot: Option<DocumentSnapshot>,
    /// Outermost commits performed so far.
    commits: u64,
}

impl TransactionManager {
    /// Create a manager with no open transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a transaction if none is active; otherwise join the open one.
    pub fn ensure(&mut self, document: &mut Document) {
        if self.depth == 0 {
            self.snapshot = Some(document.snapshot());
            debug!("transaction opened");
        }
        self.depth += 1;
    }

    /// Close one scope; commit when the outermost scope closes.
    ///
    /// Commit runs the document's validation. On failure the snapshot is
    /// restored and the error surfaces as `CommitRejected`. Either way
    /// the depth returns to zero when the outermost scope ends.
    pub fn complete(&mut self, document: &mut Document) -> TransactionResult<()> {
        if self.depth == 0 {
            return Err(TransactionError::NotActive);
        }
        self.depth -= 1;
        if self.depth > 0 {
            return Ok(());
        }
        let snapshot = self.snapshot.take();
        match document.validate() {
            Ok(()) => {
                self.commits += 1;
                debug!(commits = self.commits, "transaction committed");
                Ok(())
            }
            Err(err) => {
                if let Some(snapshot) = snapshot {
                    document.restore(snapshot);
                }
                debug!(%err, "commit rejected, document restored");
                Err(TransactionError::CommitRejected {
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Abandon the open transaction, restoring the snapshot.
    ///
    /// Resets the depth to zero regardless of nesting: an abort inside a
    /// nested scope abandons every enclosing scope at once.
    pub fn abort(&mut self, document: &mut Document) {
        if self.depth == 0 {
            return;
        }
        if let Some(snapshot) = self.snapshot.take() {
            document.restore(snapshot);
        }
        self.depth = 0;
        debug!("transaction aborted");
    }

    /// True while any scope is open.
    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    /// Current nesting depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of outermost commits performed so far.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }
}
