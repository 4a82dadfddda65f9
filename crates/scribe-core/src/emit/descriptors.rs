//! Descriptor artifact: one `switch` lookup per enumeration.

use scribe_config::GeneratorSettings;

use super::writer::{escape_string, SourceWriter};
use super::{write_epilogue, write_preamble};
use crate::records::{EnumCache, EnumRecord};

pub fn render_descriptors(enums: &EnumCache, settings: &GeneratorSettings) -> String {
    let mut w = SourceWriter::new(settings.indent_width);
    write_preamble(&mut w);
    w.line("using System.CodeDom.Compiler;");
    w.line("using System.Runtime.CompilerServices;");
    w.blank();

    w.open(format!("namespace {}", settings.descriptor_namespace));
    w.line(format!(
        "[GeneratedCode(\"{}\", \"{}\")]",
        escape_string(&settings.tool_name),
        escape_string(&settings.tool_version)
    ));
    w.open(format!("public static class {}", settings.descriptor_class));
    for (idx, record) in enums.iter().enumerate() {
        if idx > 0 {
            w.blank();
        }
        write_lookup(&mut w, record, &settings.descriptor_method);
    }
    w.close();
    w.close();

    write_epilogue(&mut w);
    w.finish()
}

fn write_lookup(w: &mut SourceWriter, record: &EnumRecord, method: &str) {
    let name = record.output_name();
    w.line("[MethodImpl(MethodImplOptions.AggressiveInlining)]");
    w.open(format!(
        "public static string {method}(this {name} value) => value switch"
    ));
    for (variant, description) in &record.variants {
        w.line(format!("{name}.{variant} => \"{}\",", escape_string(description)));
    }
    w.line("_ => string.Empty,");
    w.close_with("};");
}
