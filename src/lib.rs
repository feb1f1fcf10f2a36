#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::{
    compiler::compiler::compile,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Byte offset into a source file, tagged with the file's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Runs the whole pipeline over a source string and returns the generated C++.
pub fn compile_source(source: &str, file_name: &str) -> Result<String, Error> {
    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;
    let program = parse(tokens, Rc::new(file_name.to_string()))?;
    let (type_checker, typed_program) = type_check(&program)?;

    Ok(compile(&typed_program, &type_checker))
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line's text and the offset of
/// `position` within that line. A position at the very end of the source maps
/// to the end of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    let last_line = content.split_inclusive('\n').last().unwrap_or("");
    Some((
        (line_number - 1).max(1),
        last_line.to_string(),
        last_line.len(),
    ))
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> final.mg
           |
        20 | let a = #;
           | --------^
    */

    let mut output = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(output, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(
            output,
            "Error: {} ({})",
            error.get_error_name(),
            error.get_tip()
        );
    }
    let _ = writeln!(output, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(output, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(output, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(output, "{:>padding$} {:->arrows$}", "|", "^");

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "Hello, world!\nfoo\nbar\n    Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("let x", 6).is_none());
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "let x = 1;\n  x = #;\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "#".to_string(),
            },
            Position(17, Rc::new("main.mg".to_string())),
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[1], "-> main.mg");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x = #;");
        assert_eq!(lines[4], "  | ----^");
    }
}
