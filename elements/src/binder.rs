//! Rebind-or-create orchestration.
//!
//! One construction request walks `CheckTrace → {Rebind | Create} →
//! Registered`: the trace store is asked for the call-site's prior
//! binding; if it resolves, the wrapper attaches to the existing object
//! and mutators update it in place; otherwise one transaction wraps the
//! kind-dispatched creation entry point and the new binding is
//! registered.

use tether_core::{Point, TraceSlot};
use tether_document::DocumentKind;
use tether_transaction::TransactionError;
use tracing::debug;

use crate::context::BindingContext;
use crate::error::ElementResult;
use crate::mutators;
use crate::placement::Placement;
use crate::wrappers::{Level, Symbol};

/// Hosting association requested for a placement.
#[derive(Debug)]
pub(crate) enum Hosting<'a> {
    /// No level association.
    Free,
    /// Hosted on a level; levels are only obtainable from instance
    /// documents, so this variant never reaches a definition document.
    OnLevel(&'a Level),
}

pub(crate) fn bind_or_create(
    ctx: &mut BindingContext<'_>,
    slot: TraceSlot,
    symbol: &Symbol,
    point: Point,
    hosting: Hosting<'_>,
) -> ElementResult<Placement> {
    // Phase 1: an earlier pass may have bound this slot already.
    if let Some(id) = ctx.trace.resolve(slot, ctx.document) {
        debug!(%slot, %id, "rebinding to existing component");
        if let Hosting::OnLevel(level) = hosting {
            mutators::set_level(ctx, id, level)?;
        }
        // Symbol strictly before position (ordering rule).
        mutators::set_symbol(ctx, id, symbol)?;
        mutators::set_position(ctx, id, point)?;
        return Ok(Placement::graph_owned(id));
    }

    // Phase 2: nothing to rebind, create under one transaction.
    debug!(%slot, "no binding resolved, creating");
    ctx.transactions.ensure(ctx.document);
    let created = match ctx.document.kind() {
        DocumentKind::Definition => ctx.document.create_in_definition(symbol.id(), point),
        DocumentKind::Instance => {
            let level = match hosting {
                Hosting::OnLevel(level) => Some(level.id()),
                Hosting::Free => None,
            };
            ctx.document.create_in_instance(symbol.id(), point, level)
        }
    };
    let id = match created {
        Ok(id) => id,
        Err(err) => {
            ctx.transactions.abort(ctx.document);
            return Err(TransactionError::Aborted {
                reason: err.to_string(),
            }
            .into());
        }
    };
    ctx.transactions.complete(ctx.document)?;

    ctx.trace.set(slot, id);
    Ok(Placement::graph_owned(id))
}
