//! Shared symbol fixtures.

#![allow(dead_code)]

use scribe_config::{GeneratorSettings, ScribeConfig, Visibility};
use scribe_core::symbols::{
    EnumSymbol, Location, MemberSymbol, SymbolTable, TypeKind, TypeRef, TypeSymbol, VariantSymbol,
};

pub const NS: &str = "Acme.Inventory";
pub const STOCK_LEVEL: &str = "Acme.Inventory.StockLevel";
pub const STJ_IGNORE: &str = "System.Text.Json.Serialization.JsonIgnoreAttribute";
pub const NEWTONSOFT_IGNORE: &str = "Newtonsoft.Json.JsonIgnoreAttribute";

pub fn settings() -> GeneratorSettings {
    GeneratorSettings {
        tool_version: "1.0.0".to_string(),
        ..GeneratorSettings::default()
    }
}

pub fn level() -> TypeRef {
    TypeRef::named(STOCK_LEVEL)
}

pub fn optional_level() -> TypeRef {
    TypeRef::optional(level())
}

pub fn stock_level() -> EnumSymbol {
    EnumSymbol::new("StockLevel")
        .in_namespace(NS)
        .with_variant(VariantSymbol::described("Available", "In stock"))
        .with_variant(VariantSymbol::described("Low", "Low stock"))
        .with_variant(VariantSymbol::described("OutOfStock", "Out of stock"))
        .with_variant(VariantSymbol::bare("Retired"))
}

pub fn inventory() -> TypeSymbol {
    TypeSymbol::new("Inventory", TypeKind::Class)
        .in_namespace(NS)
        .at(Location::new("Inventory.cs", 5, 1))
        .with_scribe(
            ScribeConfig::default().with_visibility([Visibility::Public, Visibility::Internal]),
        )
        .with_member(MemberSymbol::property("CakeStock", Visibility::Public, optional_level()))
        .with_member(MemberSymbol::property("FishStock", Visibility::Internal, level()))
        .with_member(MemberSymbol::property("PieStock", Visibility::Public, level()).excluded())
        .with_member(MemberSymbol::field("_alpacaStock", Visibility::Private, level()))
        .with_member(MemberSymbol::stub(
            "FishStockDescription",
            Visibility::Public,
            TypeRef::optional(TypeRef::String),
        ))
}

pub fn inventory_history() -> TypeSymbol {
    TypeSymbol::new("InventoryHistory", TypeKind::Record)
        .in_namespace(NS)
        .at(Location::new("InventoryHistory.cs", 3, 1))
        .with_scribe(
            ScribeConfig::default()
                .with_suffix("Text")
                .with_include_fields(true)
                .with_visibility([Visibility::Public, Visibility::Internal])
                .with_exclude_from_serialization(true),
        )
        .with_member(MemberSymbol::property("DuckStock", Visibility::Internal, level()))
        .with_member(MemberSymbol::field("dragonStock", Visibility::Public, level()))
        .with_member(MemberSymbol::property("OwlStock", Visibility::Public, optional_level()))
        .with_member(MemberSymbol::stub(
            "OwlStockText",
            Visibility::Public,
            TypeRef::optional(TypeRef::String),
        ))
}

pub fn warehouse() -> TypeSymbol {
    TypeSymbol::new("Warehouse", TypeKind::Class).in_namespace(NS)
}

pub fn shelf() -> TypeSymbol {
    TypeSymbol::new("Shelf", TypeKind::Struct)
        .in_namespace(NS)
        .nested_in("Acme.Inventory.Warehouse")
        .with_scribe(ScribeConfig::default())
        .with_member(MemberSymbol::property("Level", Visibility::Public, level()))
}

/// The inventory sample: two configured top-level types, one configured nested
/// type, one shared enumeration, and only the System.Text.Json attribute available.
pub fn sample_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    table.insert_enum(stock_level()).unwrap();
    for ty in [inventory(), inventory_history(), warehouse(), shelf()] {
        table.insert_type(ty).unwrap();
    }
    table.mark_available(STJ_IGNORE);
    table
}

pub fn table_with(types: Vec<TypeSymbol>) -> SymbolTable {
    let mut table = SymbolTable::new();
    table.insert_enum(stock_level()).unwrap();
    for ty in types {
        table.insert_type(ty).unwrap();
    }
    table
}
