#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{
        obligation::TypeCheckResult,
        symbol_table::DeclarationTable,
        symbol_table_builder::build_symbol_table,
        type_checker::type_check,
    },
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A byte offset into a named source file.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline over one source file.
///
/// Returns the collected declarations and the verdict with its proof tree,
/// or the first structural error met on the way.
pub fn check_source(source: &str, file: &str) -> Result<(DeclarationTable, TypeCheckResult), Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    let unit = parse(tokens, Rc::new(file.to_string()))?;
    let table = build_symbol_table(&unit)?;
    let result = type_check(&table, &unit)?;

    Ok((table, result))
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line itself, and the offset within it.
/// An offset at the very end of the content points just past the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || (end == content.len() && pos == end) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    Some((line_number, String::new(), 0))
}

/// Renders an error with its location, the offending line, and a caret.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnsupportedConstruct (Consider rewriting ...)
        -> C.java
           |
         3 | return;
           | ^
    */

    let mut output = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    output.push_str(&format!("{}\n", error));

    let position = error.get_position();
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
