//! Parser for editor session files.
//!
//! # Format
//! ```text
//! %                                    Front
//! What colour is a ripe tomato?
//! %                                    Back
//! red
//! ```
//!
//! Lines starting with `%` in the first column are markers. A marker
//! mentioning `back` starts the back of the card, any other marker starts the
//! front. Indented `%` lines are ordinary text. Text before the first marker
//! belongs to the front.

use crate::types::Card;

/// Marker line introducing the front of a card.
pub const FRONT_MARKER: &str = "%                                    Front";

/// Marker line introducing the back of a card.
pub const BACK_MARKER: &str = "%                                    Back";

/// Content of a fresh editor session.
pub const TEMPLATE: &str =
    "%                                    Front\n\n%                                    Back\n\n";

/// Parse the content of an editor session.
///
/// Returns `None` for the untouched template and for content with no text
/// outside the marker lines.
pub fn parse(content: &str) -> Option<Card> {
    if content == TEMPLATE {
        return None;
    }

    let mut parser = Parser::new();
    for line in content.lines() {
        parser.process_line(line);
    }

    let card = parser.finish();
    if card.is_empty() {
        None
    } else {
        Some(card)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Front,
    Back,
}

struct Parser {
    current_field: Field,
    front: Vec<String>,
    back: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            current_field: Field::Front,
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        match Self::parse_line(line) {
            LineType::Marker(field) => self.current_field = field,
            LineType::Text(text) => match self.current_field {
                Field::Front => self.front.push(text.to_string()),
                Field::Back => self.back.push(text.to_string()),
            },
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        match line.strip_prefix('%') {
            Some(label) if label.to_ascii_lowercase().contains("back") => {
                LineType::Marker(Field::Back)
            }
            Some(_) => LineType::Marker(Field::Front),
            None => LineType::Text(line),
        }
    }

    fn finish(self) -> Card {
        Card {
            front: self.front.join("\n").trim().to_string(),
            back: self.back.join("\n").trim().to_string(),
        }
    }
}

enum LineType<'a> {
    Marker(Field),
    Text(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(front: &str, back: &str) -> String {
        format!("{FRONT_MARKER}\n{front}\n{BACK_MARKER}\n{back}\n")
    }

    #[test]
    fn template_is_built_from_markers() {
        assert_eq!(TEMPLATE, format!("{FRONT_MARKER}\n\n{BACK_MARKER}\n\n"));
    }

    #[test]
    fn untouched_template_yields_nothing() {
        assert_eq!(parse(TEMPLATE), None);
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("\n\n   \n"), None);
    }

    #[test]
    fn whitespace_only_edits_yield_nothing() {
        assert_eq!(parse(&session("   ", "\t")), None);
    }

    #[test]
    fn markers_only_yield_nothing() {
        assert_eq!(parse(&format!("{FRONT_MARKER}\n{BACK_MARKER}\n")), None);
    }

    #[test]
    fn parse_front_and_back() {
        let card = parse(&session("What colour is a tomato?", "red")).unwrap();
        assert_eq!(card, Card::new("What colour is a tomato?", "red"));
    }

    #[test]
    fn front_only_is_a_card() {
        let card = parse(&session("red", "")).unwrap();
        assert_eq!(card, Card::new("red", ""));
    }

    #[test]
    fn back_only_is_a_card() {
        let card = parse(&format!("{TEMPLATE}rot")).unwrap();
        assert_eq!(card, Card::new("", "rot"));
    }

    #[test]
    fn multiline_fields_keep_interior_lines() {
        let card = parse(&session("line 1\n\n  line 3", "$x^2$\n\\frac{1}{2}")).unwrap();
        assert_eq!(card.front, "line 1\n\n  line 3");
        assert_eq!(card.back, "$x^2$\n\\frac{1}{2}");
    }

    #[test]
    fn text_without_markers_is_the_front() {
        let card = parse("just some text\n").unwrap();
        assert_eq!(card, Card::new("just some text", ""));
    }

    #[test]
    fn additional_percent_lines_are_dropped() {
        let content = format!("{FRONT_MARKER}\n% a note to self\nred\n{BACK_MARKER}\nrot\n");
        let card = parse(&content).unwrap();
        assert_eq!(card, Card::new("red", "rot"));
    }

    #[test]
    fn indented_percent_lines_are_text() {
        let content = format!(
            "{FRONT_MARKER}\nprintf formats:\n    %d integer\n    %s go back\n{BACK_MARKER}\nanswer\n"
        );
        let card = parse(&content).unwrap();
        assert_eq!(card.front, "printf formats:\n    %d integer\n    %s go back");
        assert_eq!(card.back, "answer");
    }

    #[test]
    fn back_marker_is_case_insensitive() {
        let card = parse("% front\nquestion\n%BACK\nanswer").unwrap();
        assert_eq!(card, Card::new("question", "answer"));
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let content = session("red", "rot").replace('\n', "\r\n");
        let card = parse(&content).unwrap();
        assert_eq!(card, Card::new("red", "rot"));
    }
}
