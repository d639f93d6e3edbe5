//! Borrow bundle threading the shared stores through element operations.

use tether_document::Document;
use tether_trace::TraceStore;
use tether_transaction::TransactionManager;

/// Exclusive borrows of the process-wide stores one element operation
/// needs: the open document, the transaction manager bounding its
/// mutation, and the trace store carrying call-site bindings.
///
/// Threaded explicitly as a parameter everywhere the original design
/// reached for singletons.
pub struct BindingContext<'a> {
    pub document: &'a mut Document,
    pub transactions: &'a mut TransactionManager,
    pub trace: &'a mut TraceStore,
}
