//! Member selection and collision resolution.
//!
//! Candidates are the enum-typed members of a configured type, in declaration
//! order. Each candidate claims the name `member + suffix`; the claim either
//! creates a new accessor, binds to a compatible stub, or is dropped with a
//! diagnostic.

use rustc_hash::{FxHashMap, FxHashSet};
use scribe_config::ScribeOptions;
use tracing::debug;

use crate::describe::describe_enum;
use crate::diagnostics::{self, DiagnosticCode, DiagnosticSink};
use crate::records::{EnumCache, MemberRecord, StubHandle, SynthesisTarget};
use crate::symbols::{EnumSymbol, MemberKind, MemberSymbol, SymbolSource, TypeSymbol};

struct Candidate<'a> {
    member: &'a MemberSymbol,
    enum_symbol: &'a EnumSymbol,
}

/// Select and resolve the members of `symbol` under `options`.
///
/// Returns the members to synthesize. An empty result with no eligible
/// candidates is reported as a redundant configuration.
pub fn select_members<S>(
    source: &S,
    symbol: &TypeSymbol,
    options: &ScribeOptions,
    enums: &mut EnumCache,
    sink: &mut dyn DiagnosticSink,
) -> Vec<MemberRecord>
where
    S: SymbolSource + ?Sized,
{
    let candidates = collect_candidates(source, symbol, options);
    if candidates.is_empty() {
        diagnostics::report(
            sink,
            DiagnosticCode::RedundantConfiguration,
            format!(
                "'{}' is configured for description accessors but has no eligible enum members",
                symbol.qualified_name()
            ),
            symbol.location.as_ref(),
        );
        return Vec::new();
    }

    let mut existing: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
    for (idx, member) in symbol.members.iter().enumerate() {
        existing.entry(member.name.as_str()).or_default().push(idx);
    }

    let mut claimed: FxHashSet<String> = FxHashSet::default();
    let mut selected = Vec::new();

    for Candidate {
        member,
        enum_symbol,
    } in candidates
    {
        let target_name = options.target_name(&member.name);
        let location = member.location.as_ref().or(symbol.location.as_ref());

        if claimed.contains(&target_name) {
            diagnostics::report(
                sink,
                DiagnosticCode::NamingCollision,
                format!(
                    "cannot generate '{}' for '{}': the name is already generated for another member of '{}'",
                    target_name,
                    member.name,
                    symbol.qualified_name()
                ),
                location,
            );
            continue;
        }

        let target = match existing.get(target_name.as_str()) {
            None => SynthesisTarget::NewAccessor,
            Some(indices) => match find_stub(symbol, indices, member) {
                Some(stub) if options.implement_stubs => SynthesisTarget::ImplementStub(stub),
                Some(_) => {
                    diagnostics::report(
                        sink,
                        DiagnosticCode::StubImplementationDisabled,
                        format!(
                            "'{}' matches the partial method '{}()' but stub implementation is disabled for '{}'",
                            member.name,
                            target_name,
                            symbol.qualified_name()
                        ),
                        location,
                    );
                    continue;
                }
                None => {
                    diagnostics::report(
                        sink,
                        DiagnosticCode::NamingCollision,
                        format!(
                            "cannot generate '{}' for '{}': '{}' already declares a member with that name",
                            target_name,
                            member.name,
                            symbol.qualified_name()
                        ),
                        location,
                    );
                    continue;
                }
            },
        };

        debug!(
            member = %member.name,
            target = %target_name,
            stub = matches!(target, SynthesisTarget::ImplementStub(_)),
            "Selected member"
        );

        claimed.insert(target_name.clone());
        let enum_id = describe_enum(enums, enum_symbol, sink);
        selected.push(MemberRecord {
            name: member.name.clone(),
            target_name,
            visibility: member.visibility,
            is_optional: member.ty.is_optional(),
            is_static: member.is_static,
            target,
            enum_id,
        });
    }

    selected
}

/// Enum-typed members eligible under `options`, in declaration order.
fn collect_candidates<'a, S>(
    source: &'a S,
    symbol: &'a TypeSymbol,
    options: &ScribeOptions,
) -> Vec<Candidate<'a>>
where
    S: SymbolSource + ?Sized,
{
    symbol
        .members
        .iter()
        .filter(|member| match member.kind {
            MemberKind::Property => true,
            MemberKind::Field { implicit } => options.include_fields && !implicit,
            MemberKind::Method { .. } | MemberKind::Other => false,
        })
        .filter(|member| options.visibility.contains(member.visibility))
        .filter_map(|member| {
            let enum_symbol = source.enum_for(&member.ty)?;
            if member.exclude {
                debug!(member = %member.name, "Member excluded");
                return None;
            }
            Some(Candidate {
                member,
                enum_symbol,
            })
        })
        .collect()
}

/// First member among `indices` that can be implemented for `candidate`.
///
/// A static stub cannot serve an instance member. A non-optional candidate may
/// bind to a stub returning `string?`; an optional candidate needs `string?`.
fn find_stub(symbol: &TypeSymbol, indices: &[usize], candidate: &MemberSymbol) -> Option<StubHandle> {
    let candidate_optional = candidate.ty.is_optional();

    indices.iter().find_map(|&idx| {
        let stub = &symbol.members[idx];
        if !stub.is_description_stub() {
            return None;
        }
        if stub.is_static && !candidate.is_static {
            return None;
        }
        let stub_optional = stub.ty.is_optional();
        if candidate_optional && !stub_optional {
            return None;
        }
        Some(StubHandle {
            member_index: idx,
            visibility: stub.visibility,
            is_static: stub.is_static,
            returns_optional: stub_optional,
        })
    })
}

/// Report exclude markers that have no effect.
pub fn check_exclude_markers<S>(source: &S, sink: &mut dyn DiagnosticSink)
where
    S: SymbolSource + ?Sized,
{
    for ty in source.types() {
        for member in ty.members.iter().filter(|m| m.exclude) {
            let location = member.location.as_ref().or(ty.location.as_ref());
            if !ty.is_configured() {
                diagnostics::report(
                    sink,
                    DiagnosticCode::ExcludeMarkerUnconfigured,
                    format!(
                        "'{}' is marked as excluded but '{}' is not configured for description accessors",
                        member.name,
                        ty.qualified_name()
                    ),
                    location,
                );
            } else if source.enum_for(&member.ty).is_none() {
                diagnostics::report(
                    sink,
                    DiagnosticCode::ExcludeMarkerNonEnum,
                    format!(
                        "'{}.{}' is marked as excluded but its type '{}' is not an enum",
                        ty.qualified_name(),
                        member.name,
                        member.ty
                    ),
                    location,
                );
            }
        }
    }
}
