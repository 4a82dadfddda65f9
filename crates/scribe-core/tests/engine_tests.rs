//! End-to-end tests for the synthesis pass.

mod common;

use common::*;
use scribe_config::{ScribeConfig, Visibility};
use scribe_core::symbols::{
    EnumSymbol, MemberSymbol, SymbolTable, TypeKind, TypeRef, TypeSymbol, VariantSymbol,
};
use scribe_core::{
    ArtifactKind, Diagnostic, DiagnosticCode, PassOutput, ScribePass, Severity,
};

fn run(table: &SymbolTable) -> PassOutput {
    ScribePass::new(table, settings()).run()
}

fn fragments(output: &PassOutput) -> &str {
    &output
        .artifact(ArtifactKind::Fragments)
        .expect("fragment artifact")
        .contents
}

fn descriptors(output: &PassOutput) -> &str {
    &output
        .artifact(ArtifactKind::Descriptors)
        .expect("descriptor artifact")
        .contents
}

fn codes(output: &PassOutput) -> Vec<DiagnosticCode> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn inventory_sample_fragments() {
    let output = run(&sample_table());

    let expected = r#"// <auto-generated/>
#nullable enable

using Scribe.Extensions;

namespace Acme.Inventory
{
    partial class Inventory
    {
        public string? CakeStockDescription => CakeStock?.DescriptionText();
        public partial string? FishStockDescription() => FishStock.DescriptionText();
    }

    partial record InventoryHistory
    {
        [global::System.Text.Json.Serialization.JsonIgnore]
        internal string DuckStockText => DuckStock.DescriptionText();
        [global::System.Text.Json.Serialization.JsonIgnore]
        public string dragonStockText => dragonStock.DescriptionText();
        public partial string? OwlStockText() => OwlStock?.DescriptionText();
    }

    partial class Warehouse
    {
        partial struct Shelf
        {
            public string LevelDescription => Level.DescriptionText();
        }
    }
}

#nullable restore
"#;
    assert_eq!(fragments(&output), expected);
}

#[test]
fn inventory_sample_descriptors() {
    let output = run(&sample_table());

    let expected = r#"// <auto-generated/>
#nullable enable

using System.CodeDom.Compiler;
using System.Runtime.CompilerServices;

namespace Scribe.Extensions
{
    [GeneratedCode("Scribe", "1.0.0")]
    public static class EnumDescriptions
    {
        [MethodImpl(MethodImplOptions.AggressiveInlining)]
        public static string DescriptionText(this Acme.Inventory.StockLevel value) => value switch
        {
            Acme.Inventory.StockLevel.Available => "In stock",
            Acme.Inventory.StockLevel.Low => "Low stock",
            Acme.Inventory.StockLevel.OutOfStock => "Out of stock",
            Acme.Inventory.StockLevel.Retired => "Retired",
            _ => string.Empty,
        };
    }
}

#nullable restore
"#;
    assert_eq!(descriptors(&output), expected);
}

#[test]
fn inventory_sample_reports_only_missing_description() {
    let output = run(&sample_table());

    assert_eq!(codes(&output), vec![DiagnosticCode::MissingDescription]);
    assert_eq!(output.diagnostics[0].severity, Severity::Info);
    assert!(output.diagnostics[0].message.contains("Retired"));
    assert!(!output.has_errors());
}

#[test]
fn artifact_names_come_from_settings() {
    let output = run(&sample_table());
    let names: Vec<_> = output.artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["EnumDescriptions.g.cs", "ScribedTypes.g.cs"]);
}

#[test]
fn rerun_is_byte_identical() {
    let table = sample_table();
    let first = run(&table);
    let second = run(&table);
    assert_eq!(first.artifacts, second.artifacts);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn non_fragmentable_ancestor_is_reported_once() {
    let outer = TypeSymbol::new("Depot", TypeKind::Class)
        .in_namespace(NS)
        .with_partial(false);
    let first = TypeSymbol::new("Aisle", TypeKind::Class)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Depot")
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));
    let second = TypeSymbol::new("Bay", TypeKind::Class)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Depot")
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));

    let output = run(&table_with(vec![outer, first, second]));

    assert_eq!(codes(&output), vec![DiagnosticCode::NonFragmentableAncestor]);
    assert!(output.diagnostics[0].message.contains("Acme.Inventory.Depot"));
    assert!(output.artifacts.is_empty());
}

#[test]
fn unusable_lineage_leaves_other_types_alone() {
    let outer = TypeSymbol::new("Depot", TypeKind::Class)
        .in_namespace(NS)
        .with_partial(false);
    let nested = TypeSymbol::new("Aisle", TypeKind::Class)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Depot")
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));

    let output = run(&table_with(vec![outer, nested, inventory()]));

    let text = fragments(&output);
    assert!(text.contains("partial class Inventory"));
    assert!(!text.contains("Depot"));
    assert!(!text.contains("Aisle"));
    assert_eq!(output.with_code(DiagnosticCode::NonFragmentableAncestor).count(), 1);
}

#[test]
fn non_partial_configured_type_is_skipped() {
    let ty = inventory().with_partial(false);
    let output = run(&table_with(vec![ty]));

    assert_eq!(codes(&output), vec![DiagnosticCode::NonFragmentableType]);
    assert!(output.has_errors());
    assert!(output.artifacts.is_empty());
}

#[test]
fn non_partial_configured_parent_blocks_nested_type_once() {
    let parent = TypeSymbol::new("Depot", TypeKind::Class)
        .in_namespace(NS)
        .with_partial(false)
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));
    let child = TypeSymbol::new("Aisle", TypeKind::Class)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Depot")
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));

    let output = run(&table_with(vec![parent, child]));
    assert_eq!(codes(&output), vec![DiagnosticCode::NonFragmentableType]);
}

#[test]
fn invalid_suffix_skips_type() {
    let ty = TypeSymbol::new("Ledger", TypeKind::Class)
        .in_namespace(NS)
        .with_scribe(ScribeConfig::default().with_suffix("Desc ription"))
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));

    let output = run(&table_with(vec![ty, inventory()]));

    assert_eq!(output.with_code(DiagnosticCode::InvalidSuffix).count(), 1);
    assert!(!fragments(&output).contains("Ledger"));
    assert!(fragments(&output).contains("CakeStockDescription"));
}

fn nested_under_misconfigured_parent(grand_partial: bool) -> SymbolTable {
    let grand = TypeSymbol::new("Grand", TypeKind::Class)
        .in_namespace(NS)
        .with_partial(grand_partial);
    let parent = TypeSymbol::new("Parent", TypeKind::Class)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Grand")
        .with_scribe(ScribeConfig::default().with_suffix("Bad-Suffix"))
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));
    let child = TypeSymbol::new("Child", TypeKind::Class)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Grand.Parent")
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));
    table_with(vec![grand, parent, child])
}

#[test]
fn misconfigured_parent_still_checks_its_ancestors() {
    let output = run(&nested_under_misconfigured_parent(false));

    assert_eq!(
        codes(&output),
        vec![DiagnosticCode::InvalidSuffix, DiagnosticCode::NonFragmentableAncestor]
    );
    assert!(output.artifacts.is_empty());
}

#[test]
fn nested_type_under_misconfigured_parent_keeps_full_nesting() {
    let output = run(&nested_under_misconfigured_parent(true));

    assert_eq!(output.with_code(DiagnosticCode::InvalidSuffix).count(), 1);
    assert_eq!(output.with_code(DiagnosticCode::NonFragmentableAncestor).count(), 0);

    let expected = "    partial class Grand
    {
        partial class Parent
        {
            partial class Child
            {
                public string LevelDescription => Level.DescriptionText();
            }
        }
    }
";
    assert!(fragments(&output).contains(expected), "{}", fragments(&output));
}

#[test]
fn null_suffix_is_a_configuration_error() {
    let mut config = ScribeConfig::default();
    config.suffix = None;
    let ty = TypeSymbol::new("Ledger", TypeKind::Class)
        .with_scribe(config)
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()));

    let output = run(&table_with(vec![ty]));
    assert_eq!(codes(&output), vec![DiagnosticCode::InvalidSuffix]);
}

#[test]
fn redundant_configuration_produces_nothing() {
    let ty = TypeSymbol::new("Ledger", TypeKind::Class)
        .in_namespace(NS)
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Title", Visibility::Public, TypeRef::String))
        .with_member(MemberSymbol::property("Level", Visibility::Internal, level()));

    let output = run(&table_with(vec![ty]));

    assert_eq!(codes(&output), vec![DiagnosticCode::RedundantConfiguration]);
    assert_eq!(output.diagnostics[0].severity, Severity::Warning);
    assert!(output.artifacts.is_empty());
}

#[test]
fn collision_skips_only_the_conflicting_member() {
    let ty = TypeSymbol::new("Pantry", TypeKind::Class)
        .in_namespace(NS)
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("PieStock", Visibility::Public, level()))
        .with_member(MemberSymbol::property("TartStock", Visibility::Public, level()))
        .with_member(MemberSymbol::property(
            "PieStockDescription",
            Visibility::Public,
            TypeRef::String,
        ));

    let output = run(&table_with(vec![ty]));

    assert_eq!(output.with_code(DiagnosticCode::NamingCollision).count(), 1);
    let text = fragments(&output);
    assert!(text.contains("public string TartStockDescription => TartStock.DescriptionText();"));
    assert!(!text.contains("PieStockDescription"));
}

#[test]
fn optional_member_does_not_bind_non_optional_stub() {
    let ty = TypeSymbol::new("Pantry", TypeKind::Class)
        .in_namespace(NS)
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("CakeStock", Visibility::Public, optional_level()))
        .with_member(MemberSymbol::property("PieStock", Visibility::Public, level()))
        .with_member(MemberSymbol::stub(
            "CakeStockDescription",
            Visibility::Public,
            TypeRef::String,
        ));

    let output = run(&table_with(vec![ty]));

    assert_eq!(codes(&output), vec![
        DiagnosticCode::NamingCollision,
        DiagnosticCode::MissingDescription,
    ]);
    assert!(!fragments(&output).contains("CakeStockDescription"));
}

#[test]
fn matching_stub_with_equal_nullability_binds() {
    let ty = TypeSymbol::new("Pantry", TypeKind::Class)
        .in_namespace(NS)
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("PieStock", Visibility::Public, level()))
        .with_member(
            MemberSymbol::stub("PieStockDescription", Visibility::Internal, TypeRef::String)
                .with_static(false),
        );

    let output = run(&table_with(vec![ty]));
    assert!(fragments(&output)
        .contains("internal partial string PieStockDescription() => PieStock.DescriptionText();"));
}

#[test]
fn disabled_stub_implementation_is_reported() {
    let ty = inventory().with_scribe(
        ScribeConfig::default()
            .with_visibility([Visibility::Public, Visibility::Internal])
            .with_implement_stubs(false),
    );

    let output = run(&table_with(vec![ty]));

    assert_eq!(output.with_code(DiagnosticCode::StubImplementationDisabled).count(), 1);
    let text = fragments(&output);
    assert!(text.contains("CakeStockDescription"));
    assert!(!text.contains("FishStockDescription"));
}

#[test]
fn shared_enum_gets_one_descriptor() {
    let mood = EnumSymbol::new("Mood")
        .in_namespace(NS)
        .with_variant(VariantSymbol::described("Calm", "Calm"));
    let mut table = sample_table();
    table.insert_enum(mood).unwrap();
    table
        .insert_type(
            TypeSymbol::new("Clerk", TypeKind::Class)
                .in_namespace(NS)
                .with_scribe(ScribeConfig::default())
                .with_member(MemberSymbol::property("Mood", Visibility::Public, TypeRef::named("Acme.Inventory.Mood")))
                .with_member(MemberSymbol::property("Desk", Visibility::Public, level())),
        )
        .unwrap();

    let output = run(&table);
    let text = descriptors(&output);
    assert_eq!(text.matches("public static string DescriptionText(").count(), 2);
    assert_eq!(text.matches("(this Acme.Inventory.StockLevel value)").count(), 1);
    assert_eq!(output.with_code(DiagnosticCode::MissingDescription).count(), 1);
}

#[test]
fn global_namespace_types_and_enums() {
    let color = EnumSymbol::new("Color")
        .with_variant(VariantSymbol::described("Red", "Red"));
    let ty = TypeSymbol::new("Palette", TypeKind::RecordStruct)
        .with_type_parameters(["T"])
        .with_scribe(ScribeConfig::default())
        .with_member(
            MemberSymbol::property("Primary", Visibility::Public, TypeRef::named("Color"))
                .with_static(true),
        );
    let table = SymbolTable::new()
        .with_enum(color)
        .and_then(|t| t.with_type(ty))
        .unwrap();

    let output = run(&table);

    let expected = r#"// <auto-generated/>
#nullable enable

using Scribe.Extensions;

partial record struct Palette<T>
{
    public static string PrimaryDescription => Primary.DescriptionText();
}

#nullable restore
"#;
    assert_eq!(fragments(&output), expected);
    assert!(descriptors(&output).contains("global::Color.Red => \"Red\","));
}

#[test]
fn namespaces_group_in_discovery_order() {
    let table = table_with(vec![
        inventory(),
        TypeSymbol::new("Global", TypeKind::Class)
            .with_scribe(ScribeConfig::default())
            .with_member(MemberSymbol::property("Level", Visibility::Public, level())),
        TypeSymbol::new("Ledger", TypeKind::Class)
            .in_namespace(NS)
            .with_scribe(ScribeConfig::default())
            .with_member(MemberSymbol::property("Level", Visibility::Public, level())),
    ]);

    let text_owned = fragments(&run(&table)).to_string();
    let text = text_owned.as_str();
    let inventory_at = text.find("partial class Inventory").unwrap();
    let ledger_at = text.find("partial class Ledger").unwrap();
    let global_at = text.find("partial class Global").unwrap();
    assert!(inventory_at < ledger_at);
    assert!(ledger_at < global_at);
    assert_eq!(text.matches("namespace Acme.Inventory").count(), 1);
}

#[test]
fn serialization_attributes_follow_availability() {
    let mut table = table_with(vec![inventory_history()]);
    table.mark_available(NEWTONSOFT_IGNORE);
    table.mark_available(STJ_IGNORE);
    let both = fragments(&run(&table)).to_string();
    assert_eq!(both.matches("[global::Newtonsoft.Json.JsonIgnore]").count(), 2);
    assert_eq!(both.matches("[global::System.Text.Json.Serialization.JsonIgnore]").count(), 2);

    let none = fragments(&run(&table_with(vec![inventory_history()]))).to_string();
    assert!(!none.contains("JsonIgnore"));
}

#[test]
fn stub_implementations_never_get_serialization_attributes() {
    let mut table = table_with(vec![inventory_history()]);
    table.mark_available(STJ_IGNORE);
    let text = fragments(&run(&table)).to_string();

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let stub_at = lines
        .iter()
        .position(|l| l.starts_with("public partial string? OwlStockText()"))
        .unwrap();
    assert!(!lines[stub_at - 1].contains("JsonIgnore"));
}

#[test]
fn quiet_nested_types_are_pruned() {
    let quiet = TypeSymbol::new("Quiet", TypeKind::Class)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Inventory")
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Note", Visibility::Public, TypeRef::String));

    let output = run(&table_with(vec![inventory(), quiet]));

    assert!(!fragments(&output).contains("Quiet"));
    assert_eq!(output.with_code(DiagnosticCode::RedundantConfiguration).count(), 1);
}

#[test]
fn exclude_marker_on_unconfigured_type_is_reported() {
    let loose = TypeSymbol::new("Loose", TypeKind::Class)
        .in_namespace(NS)
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()).excluded());

    let output = run(&table_with(vec![loose]));

    assert_eq!(codes(&output), vec![DiagnosticCode::ExcludeMarkerUnconfigured]);
    assert!(output.artifacts.is_empty());
}

#[test]
fn empty_source_produces_nothing() {
    let output = run(&SymbolTable::new());
    assert!(output.artifacts.is_empty());
    assert!(output.diagnostics.is_empty());
}

#[test]
fn custom_sink_receives_diagnostics() {
    struct Counting {
        errors: usize,
        seen: Vec<Diagnostic>,
    }

    impl scribe_core::DiagnosticSink for Counting {
        fn report(&mut self, diagnostic: Diagnostic) {
            if diagnostic.is_error() {
                self.errors += 1;
            }
            self.seen.push(diagnostic);
        }
    }

    let mut sink = Counting {
        errors: 0,
        seen: Vec::new(),
    };
    let table = table_with(vec![inventory().with_partial(false), inventory_history()]);
    let artifacts = ScribePass::new(&table, settings()).run_into(&mut sink);

    assert_eq!(sink.errors, 1);
    assert_eq!(sink.seen.len(), 2);
    assert_eq!(artifacts.len(), 2);
}
