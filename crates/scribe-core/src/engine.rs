//! The synthesis pass.
//!
//! A pass visits every configured type in discovery order, resolving its
//! configuration, lineage and members into shared caches, and then renders the
//! caches once. All state is owned by the pass; nothing carries over between
//! passes.

use scribe_config::GeneratorSettings;
use tracing::{debug, info, info_span};

use crate::diagnostics::{self, Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use crate::emit::{self, Artifact, ArtifactKind};
use crate::lineage::resolve_lineage;
use crate::records::{EnumCache, SerializationToggles, Serializer, TypeArena, TypeRecord};
use crate::selector::{check_exclude_markers, select_members};
use crate::symbols::{SymbolSource, TypeSymbol};

/// Artifacts and diagnostics produced by one pass.
#[derive(Debug, Clone, Default)]
pub struct PassOutput {
    pub artifacts: Vec<Artifact>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PassOutput {
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }

    pub fn with_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }
}

/// One run of the synthesis engine over a symbol source.
///
/// # Example
///
/// ```
/// use scribe_config::{GeneratorSettings, ScribeConfig, Visibility};
/// use scribe_core::symbols::{EnumSymbol, MemberSymbol, SymbolTable, TypeKind, TypeRef, TypeSymbol, VariantSymbol};
/// use scribe_core::ScribePass;
///
/// let table = SymbolTable::new()
///     .with_enum(EnumSymbol::new("StockLevel").with_variant(VariantSymbol::described("Low", "Low stock")))?
///     .with_type(
///         TypeSymbol::new("Inventory", TypeKind::Class)
///             .with_scribe(ScribeConfig::default())
///             .with_member(MemberSymbol::property("Stock", Visibility::Public, TypeRef::named("StockLevel"))),
///     )?;
///
/// let output = ScribePass::new(&table, GeneratorSettings::default()).run();
/// assert_eq!(output.artifacts.len(), 2);
/// assert!(!output.has_errors());
/// # Ok::<(), scribe_core::ScribeError>(())
/// ```
pub struct ScribePass<'s, S: SymbolSource + ?Sized> {
    source: &'s S,
    settings: GeneratorSettings,
    arena: TypeArena,
    enums: EnumCache,
}

impl<'s, S: SymbolSource + ?Sized> ScribePass<'s, S> {
    pub fn new(source: &'s S, settings: GeneratorSettings) -> Self {
        Self {
            source,
            settings,
            arena: TypeArena::new(),
            enums: EnumCache::new(),
        }
    }

    /// Run the pass, collecting diagnostics into the output.
    pub fn run(self) -> PassOutput {
        let mut diagnostics = Vec::new();
        let artifacts = self.run_into(&mut diagnostics);
        PassOutput {
            artifacts,
            diagnostics,
        }
    }

    /// Run the pass, reporting diagnostics to `sink`. Returns no artifacts
    /// when no type synthesizes anything.
    pub fn run_into(mut self, sink: &mut dyn DiagnosticSink) -> Vec<Artifact> {
        let _span = info_span!("scribe_pass").entered();

        let source = self.source;
        let mut configured = 0usize;
        for symbol in source.configured_types() {
            configured += 1;
            self.process_type(symbol, sink);
        }
        check_exclude_markers(source, sink);

        let synthesizing = self.arena.iter().filter(|(_, r)| r.should_synthesize).count();
        info!(
            configured,
            synthesizing,
            enums = self.enums.len(),
            "Synthesis pass complete"
        );

        if synthesizing == 0 {
            return Vec::new();
        }
        emit::emit(&self.arena, &self.enums, &self.settings)
    }

    fn process_type(&mut self, symbol: &TypeSymbol, sink: &mut dyn DiagnosticSink) {
        let Some(config) = symbol.scribe.as_ref() else {
            return;
        };
        let qualified_name = symbol.qualified_name();
        debug!(type_name = %qualified_name, "Processing configured type");

        let id = match self.arena.lookup(&qualified_name) {
            Some(id) => {
                // Registered earlier as an enclosing type; already reported if unusable.
                if !self.arena.get(id).fragmentable {
                    return;
                }
                id
            }
            None => {
                let id = self.arena.insert(TypeRecord::from_symbol(symbol));
                if !symbol.partial {
                    diagnostics::report(
                        sink,
                        DiagnosticCode::NonFragmentableType,
                        format!(
                            "'{qualified_name}' must be partial to receive description accessors"
                        ),
                        symbol.location.as_ref(),
                    );
                    return;
                }
                id
            }
        };

        let options = match config.resolve() {
            Ok(options) => options,
            Err(err) => {
                diagnostics::report(
                    sink,
                    DiagnosticCode::InvalidSuffix,
                    format!("invalid configuration on '{qualified_name}': {err}"),
                    symbol.location.as_ref(),
                );
                // Nested configured types link to this record; its ancestors must still be checked.
                resolve_lineage(&mut self.arena, self.source, id, symbol, sink);
                return;
            }
        };

        let exclude = options.exclude_from_serialization;
        let serialization = SerializationToggles {
            newtonsoft_json: exclude
                && self
                    .source
                    .is_type_available(Serializer::NewtonsoftJson.attribute_type()),
            system_text_json: exclude
                && self
                    .source
                    .is_type_available(Serializer::SystemTextJson.attribute_type()),
        };
        {
            let record = self.arena.get_mut(id);
            record.serialization = serialization;
            record.options = Some(options.clone());
        }

        if !resolve_lineage(&mut self.arena, self.source, id, symbol, sink) {
            debug!(type_name = %qualified_name, "Lineage is not usable; skipping");
            return;
        }

        let members = select_members(self.source, symbol, &options, &mut self.enums, sink);
        let record = self.arena.get_mut(id);
        record.should_synthesize = !members.is_empty();
        record.members = members;
    }
}

/// Run a pass over `source` with `settings`.
pub fn run<S: SymbolSource + ?Sized>(source: &S, settings: GeneratorSettings) -> PassOutput {
    ScribePass::new(source, settings).run()
}
