//! Anki plain-text import format.
//!
//! One card per line, fields separated by a tab. Fields may contain HTML, so
//! line breaks inside a field are written as `<br>`.

use crate::types::{Card, FieldMarkup};

/// Separator between the fields of a card.
pub const FIELD_SEPARATOR: char = '\t';

const LINE_BREAK: &str = "<br>";
const TAB_REPLACEMENT: &str = "    ";

/// Render a card as one newline-terminated import line.
pub fn to_import_line(card: &Card, markup: FieldMarkup) -> String {
    let mut line = encode_field(&card.front, markup);
    line.push(FIELD_SEPARATOR);
    line.push_str(&encode_field(&card.back, markup));
    line.push('\n');
    line
}

fn encode_field(field: &str, markup: FieldMarkup) -> String {
    let encoded = field
        .replace("\r\n", LINE_BREAK)
        .replace('\n', LINE_BREAK)
        .replace(FIELD_SEPARATOR, TAB_REPLACEMENT);

    match markup {
        FieldMarkup::Latex if !encoded.is_empty() => format!("[latex]{encoded}[/latex]"),
        _ => encoded,
    }
}
