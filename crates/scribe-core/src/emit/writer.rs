//! Indentation-aware line writer.

/// Accumulates source text one line at a time.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    buf: String,
    unit: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            buf: String::new(),
            unit: " ".repeat(indent_width),
            depth: 0,
        }
    }

    /// Write `text` at the current depth followed by a newline.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.buf.push_str(&self.unit);
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Write an empty line without trailing whitespace.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Write `header` and an opening brace, then indent.
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    /// Dedent and write `closing`.
    pub fn close_with(&mut self, closing: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(closing);
    }

    pub fn close(&mut self) {
        self.close_with("}");
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Escape `text` as the body of a regular (non-verbatim) string literal.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
