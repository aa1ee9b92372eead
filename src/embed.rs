//! Schema embedding: turning SQL text into a C string-literal declaration.
//!
//! The generated fragment is a warning comment, a declaration opener, one
//! quoted line per input line, and a closing `;`. Adjacent quoted lines carry
//! a backslash continuation so the consuming compiler concatenates them into
//! a single string constant.

/// Marker that starts an inline SQL comment.
const COMMENT_MARKER: &str = "--";

/// Opening line of the generated declaration. The trailing space is part of
/// the consumed format.
pub const DECLARATION: &str = "static const char * schema = ";

/// Closing line of the generated declaration.
pub const TERMINATOR: &str = ";";

/// Strip an inline SQL comment from a line.
///
/// Removes everything from the first `--` through the end of the line, along
/// with any run of spaces immediately preceding the marker. Lines without a
/// marker are returned unchanged. Tabs before the marker are kept; only
/// spaces are trimmed.
///
/// The strip is lexical, not a SQL tokenizer: a `--` inside a quoted SQL
/// string literal is still treated as a comment start. The schema source is
/// hand-authored, so this limitation is accepted.
pub fn strip_line_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(at) => line[..at].trim_end_matches(' '),
        None => line,
    }
}

/// Accumulator for the generated header fragment.
///
/// Created pre-seeded with the warning comment and the declaration opener,
/// fed one input line at a time, and consumed by [`SchemaHeader::finish`] to
/// produce the output text.
#[derive(Debug)]
pub struct SchemaHeader {
    lines: Vec<String>,
}

impl SchemaHeader {
    /// Create an accumulator whose warning comment names `source_name` as the
    /// file to edit instead of the generated artifact.
    pub fn new(source_name: &str) -> Self {
        Self {
            lines: vec![
                format!("/* THIS IS A GENERATED FILE; EDIT {source_name} INSTEAD */"),
                DECLARATION.to_string(),
            ],
        }
    }

    /// Append one input line: comment stripped, quoted, and marked for
    /// continuation. An empty line still produces one (empty) quoted line.
    pub fn push_line(&mut self, line: &str) {
        self.lines.push(format!("\"{}\" \\", strip_line_comment(line)));
    }

    /// Seal the declaration and join everything into the output text.
    ///
    /// The result ends with the terminator; no trailing newline follows it.
    pub fn finish(mut self) -> String {
        self.lines.push(TERMINATOR.to_string());
        self.lines.join("\n")
    }
}

/// Render the complete generated fragment for `sql`, whose on-disk name is
/// `source_name`.
///
/// One quoted line is emitted per input line, in input order; line
/// terminators may be `\n` or `\r\n`, and an unterminated final line still
/// counts as a line.
pub fn render(source_name: &str, sql: &str) -> String {
    let mut header = SchemaHeader::new(source_name);
    for line in sql.lines() {
        header.push_line(line);
    }
    header.finish()
}
