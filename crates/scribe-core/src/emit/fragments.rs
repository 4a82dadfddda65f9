//! Fragment artifact: partial declarations carrying the derived members.

use indexmap::IndexMap;
use scribe_config::GeneratorSettings;

use super::writer::SourceWriter;
use super::{write_epilogue, write_preamble};
use crate::records::{MemberRecord, SynthesisTarget, TypeArena, TypeId, TypeRecord};

pub fn render_fragments(arena: &TypeArena, settings: &GeneratorSettings) -> String {
    let mut w = SourceWriter::new(settings.indent_width);
    write_preamble(&mut w);
    w.line(format!("using {};", settings.descriptor_namespace));
    w.blank();

    let mut groups: IndexMap<Option<&str>, Vec<TypeId>> = IndexMap::new();
    for root in arena.roots().filter(|&id| arena.needs_fragment(id)) {
        groups
            .entry(arena.get(root).namespace.as_deref())
            .or_default()
            .push(root);
    }

    for (idx, (namespace, roots)) in groups.iter().enumerate() {
        if idx > 0 {
            w.blank();
        }
        match namespace {
            Some(namespace) => {
                w.open(format!("namespace {namespace}"));
                write_types(&mut w, arena, roots, settings);
                w.close();
            }
            None => write_types(&mut w, arena, roots, settings),
        }
    }

    write_epilogue(&mut w);
    w.finish()
}

fn write_types(w: &mut SourceWriter, arena: &TypeArena, ids: &[TypeId], settings: &GeneratorSettings) {
    for (idx, &id) in ids.iter().enumerate() {
        if idx > 0 {
            w.blank();
        }
        write_type(w, arena, id, settings);
    }
}

fn write_type(w: &mut SourceWriter, arena: &TypeArena, id: TypeId, settings: &GeneratorSettings) {
    let record = arena.get(id);
    w.open(format!("partial {}", record.declaration()));

    for member in &record.members {
        write_member(w, record, member, settings);
    }

    let children: Vec<TypeId> = record
        .children
        .iter()
        .copied()
        .filter(|&child| arena.needs_fragment(child))
        .collect();
    if !record.members.is_empty() && !children.is_empty() {
        w.blank();
    }
    write_types(w, arena, &children, settings);

    w.close();
}

fn write_member(w: &mut SourceWriter, owner: &TypeRecord, member: &MemberRecord, settings: &GeneratorSettings) {
    let visibility = member.declared_visibility().keyword();
    let modifier = if member.declared_static() { "static " } else { "" };
    let returns = if member.returns_optional() { "string?" } else { "string" };
    let access = if member.is_optional { "?." } else { "." };
    let body = format!("{}{access}{}()", member.name, settings.descriptor_method);

    match member.target {
        SynthesisTarget::NewAccessor => {
            for serializer in owner.serialization.enabled() {
                w.line(serializer.attribute_usage());
            }
            w.line(format!(
                "{visibility} {modifier}{returns} {} => {body};",
                member.target_name
            ));
        }
        SynthesisTarget::ImplementStub(_) => {
            w.line(format!(
                "{visibility} {modifier}partial {returns} {}() => {body};",
                member.target_name
            ));
        }
    }
}
