//! Enumeration description extraction.

use tracing::trace;

use crate::diagnostics::{self, DiagnosticCode, DiagnosticSink};
use crate::records::{EnumCache, EnumId, EnumRecord};
use crate::symbols::{Annotation, EnumSymbol, MalformedDescription};

/// Return the cached record for `symbol`, building it on first request.
///
/// Variants keep declaration order. A variant without an annotation is
/// described by its own name; an annotation with no usable text yields an
/// empty description. Both cases are reported once, when the record is built.
pub fn describe_enum(
    cache: &mut EnumCache,
    symbol: &EnumSymbol,
    sink: &mut dyn DiagnosticSink,
) -> EnumId {
    let full_name = symbol.full_name();
    if let Some(id) = cache.lookup(&full_name) {
        trace!(enum_name = %full_name, "Descriptor cache hit");
        return id;
    }

    let variants = symbol
        .variants
        .iter()
        .map(|variant| {
            let description = match variant.annotation() {
                Annotation::Text(text) => text.to_string(),
                Annotation::Absent => {
                    diagnostics::report(
                        sink,
                        DiagnosticCode::MissingDescription,
                        format!(
                            "'{}.{}' has no description; its name is used instead",
                            full_name, variant.name
                        ),
                        symbol.location.as_ref(),
                    );
                    variant.name.clone()
                }
                Annotation::Malformed(reason) => {
                    let detail = match reason {
                        MalformedDescription::MissingArgument => "has no argument",
                        MalformedDescription::NullArgument => "is null",
                        MalformedDescription::NonTextArgument => "is not a string",
                    };
                    diagnostics::report(
                        sink,
                        DiagnosticCode::EmptyDescription,
                        format!(
                            "description of '{}.{}' {}; an empty description is used",
                            full_name, variant.name, detail
                        ),
                        symbol.location.as_ref(),
                    );
                    String::new()
                }
            };
            (variant.name.clone(), description)
        })
        .collect();

    cache.insert(EnumRecord {
        full_name,
        in_global_namespace: symbol.in_global_namespace(),
        variants,
    })
}
