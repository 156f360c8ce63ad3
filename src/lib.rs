#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

extern crate regex;

/// A byte offset into a source, tagged with the name of the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

/// A half-open byte range in a source.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the text of that line (including its
/// trailing newline, if any) and the byte column of `position` within it.
/// An offset equal to the source length points just past the last character.
/// Returns `None` when the offset lies beyond the end of the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    if source.is_empty() || source.ends_with('\n') {
        return Some((line_number, String::new(), 0));
    }

    let last_line = source.rsplit('\n').next().unwrap_or(source);
    Some((line_number - 1, last_line.to_string(), last_line.len()))
}

/// Renders an error against the source it was produced from.
///
/// ```text
/// Error: ExpectedToken (Expected Identifier, found Operator `=`)
/// -> input.js
///   |
/// 1 | var = 10;
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let mut output = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        output.push_str(&format!("   at byte {}", position.0));
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text
        .get(..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(line_pos);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::{lexer::lexer::tokenize, parser::parser::parse};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        let (line_number, line, line_pos) = super::get_line_at_position("a\n", 2).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        assert!(super::get_line_at_position("a", 2).is_none());
    }

    #[test]
    fn test_format_error() {
        let source = "var = 10;";
        let tokens = tokenize(source, Some("input.js".to_string()));
        let error = parse(tokens).unwrap_err();

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: ExpectedToken (Expected Identifier, found Operator `=`)"
        );
        assert_eq!(lines[1], "-> input.js");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | var = 10;");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_format_error_strips_indentation() {
        let source = "if (x) {\n    return (1;\n}";
        let tokens = tokenize(source, None);
        let error = parse(tokens).unwrap_err();

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[3], "2 | return (1;");
        assert_eq!(lines[4], "  | ---------^");
    }
}
