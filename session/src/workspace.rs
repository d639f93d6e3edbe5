//! Workspace: the stores behind one open document.

use tether_document::Document;
use tether_elements::BindingContext;
use tether_trace::TraceStore;
use tether_transaction::TransactionManager;

/// The shared state one graph evaluation works against: the open
/// document, its transaction manager and its trace store.
///
/// The original design kept these as global singletons; here they are
/// one owned value the host threads through explicitly.
#[derive(Debug)]
pub struct Workspace {
    pub document: Document,
    pub transactions: TransactionManager,
    pub trace: TraceStore,
}

impl Workspace {
    /// Wrap an open document with fresh transaction and trace state.
    pub fn for_document(document: Document) -> Self {
        Self {
            document,
            transactions: TransactionManager::new(),
            trace: TraceStore::new(),
        }
    }

    /// Lend the stores to one element operation.
    pub fn binding_ctx(&mut self) -> BindingContext<'_> {
        BindingContext {
            document: &mut self.document,
            transactions: &mut self.transactions,
            trace: &mut self.trace,
        }
    }
}
