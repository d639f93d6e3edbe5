//! Transaction-scoped component mutators.
//!
//! Each mutator opens and completes its own transaction scope; under an
//! already-open scope it joins it instead of opening a new one. A failed
//! document mutation aborts the whole scope stack before the error
//! surfaces, so pairing stays symmetric on every path.

use tether_core::{ObjectId, Point};
use tether_document::DocumentError;
use tether_transaction::TransactionError;

use crate::context::BindingContext;
use crate::error::{ElementError, ElementResult};
use crate::wrappers::{Level, Symbol};

/// Yaw delta (radians) below which a requested rotation is treated as
/// already applied and no transaction is opened.
pub(crate) const ROTATION_TOLERANCE: f64 = 1.0e-6;

fn aborted(ctx: &mut BindingContext<'_>, err: DocumentError) -> ElementError {
    ctx.transactions.abort(ctx.document);
    TransactionError::Aborted {
        reason: err.to_string(),
    }
    .into()
}

/// Set the hosting level of a component.
///
/// Only reachable on instance-document paths: the orchestrator receives
/// levels via `Hosting::OnLevel`, and `Level` values cannot be obtained
/// from a definition document.
pub(crate) fn set_level(
    ctx: &mut BindingContext<'_>,
    id: ObjectId,
    level: &Level,
) -> ElementResult<()> {
    ctx.transactions.ensure(ctx.document);
    if let Err(err) = ctx.document.set_level(id, level.id()) {
        return Err(aborted(ctx, err));
    }
    ctx.transactions.complete(ctx.document)?;
    Ok(())
}

/// Re-host a component under a new symbol.
///
/// Ordered strictly before `set_position` on rebind: the old symbol's
/// placement constraints may be incompatible with the new point.
pub(crate) fn set_symbol(
    ctx: &mut BindingContext<'_>,
    id: ObjectId,
    symbol: &Symbol,
) -> ElementResult<()> {
    ctx.transactions.ensure(ctx.document);
    if let Err(err) = ctx.document.set_symbol(id, symbol.id()) {
        return Err(aborted(ctx, err));
    }
    ctx.transactions.complete(ctx.document)?;
    Ok(())
}

/// Move a component to a new insertion point.
///
/// Requires a point-based location; any other kind fails with
/// `InvalidLocation` after the scope is unwound.
pub(crate) fn set_position(
    ctx: &mut BindingContext<'_>,
    id: ObjectId,
    point: Point,
) -> ElementResult<()> {
    ctx.transactions.ensure(ctx.document);
    match ctx.document.set_location_point(id, point) {
        Ok(()) => {
            ctx.transactions.complete(ctx.document)?;
            Ok(())
        }
        Err(DocumentError::LocationKindMismatch { found }) => {
            ctx.transactions.abort(ctx.document);
            Err(ElementError::InvalidLocation { found })
        }
        Err(err) => Err(aborted(ctx, err)),
    }
}

/// Rotate a component to `degrees` about its local up axis.
///
/// Decomposes the current transform, takes the delta between the current
/// and requested yaw, and applies a relative rotation anchored at the
/// transform origin along the up basis vector — tilt on other axes is
/// preserved. A delta below `ROTATION_TOLERANCE` skips the transaction
/// entirely.
pub(crate) fn set_rotation(
    ctx: &mut BindingContext<'_>,
    id: ObjectId,
    degrees: f64,
) -> ElementResult<()> {
    let current = match ctx.document.resolve(id) {
        Some(component) => component.transform.yaw,
        None => {
            return Err(TransactionError::Aborted {
                reason: DocumentError::ComponentNotFound(id).to_string(),
            }
            .into())
        }
    };
    let target = degrees.to_radians();
    let delta = tether_core::wrap_angle(target - current);
    if delta.abs() < ROTATION_TOLERANCE {
        return Ok(());
    }

    ctx.transactions.ensure(ctx.document);
    if let Err(err) = ctx.document.rotate(id, delta) {
        return Err(aborted(ctx, err));
    }
    ctx.transactions.complete(ctx.document)?;
    Ok(())
}
