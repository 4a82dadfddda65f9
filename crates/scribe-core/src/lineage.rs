//! Enclosing-type validation.
//!
//! A fragment for a nested type can only be emitted if every enclosing type can
//! be extended as well. The resolver walks outward from a configured type,
//! registering each enclosing type once and reporting each one that cannot be
//! extended once.

use tracing::{debug, trace};

use crate::diagnostics::{self, DiagnosticCode, DiagnosticSink};
use crate::records::{TypeArena, TypeId, TypeRecord};
use crate::symbols::{SymbolSource, TypeSymbol};

/// Register the lineage of `symbol` (already registered as `id`) and return
/// whether the whole chain is usable.
pub fn resolve_lineage<S>(
    arena: &mut TypeArena,
    source: &S,
    id: TypeId,
    symbol: &TypeSymbol,
    sink: &mut dyn DiagnosticSink,
) -> bool
where
    S: SymbolSource + ?Sized,
{
    let configured = symbol.qualified_name();
    let mut current_id = id;
    let mut current = symbol;

    loop {
        let Some(parent_name) = current.containing_type.as_deref() else {
            return arena.get(current_id).fragmentable;
        };

        if let Some(parent_id) = arena.lookup(parent_name) {
            trace!(parent = parent_name, "Lineage joins a known type");
            arena.link(parent_id, current_id);
            return arena.is_usable(parent_id);
        }

        let Some(parent) = source.type_symbol(parent_name) else {
            debug!(
                parent = parent_name,
                "Enclosing type of {} is unknown; treating lineage as unusable", configured
            );
            return false;
        };

        let parent_id = arena.insert(TypeRecord::from_symbol(parent));
        arena.link(parent_id, current_id);

        if !parent.partial {
            diagnostics::report(
                sink,
                DiagnosticCode::NonFragmentableAncestor,
                format!(
                    "'{}' must be partial because it encloses '{}', which is configured for description accessors",
                    parent_name, configured
                ),
                parent.location.as_ref().or(symbol.location.as_ref()),
            );
            return false;
        }

        current_id = parent_id;
        current = parent;
    }
}
