//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, modifiers, primitive types and identifiers
//! - Token position tracking for error reporting
//! - Line and block comments and whitespace handling
//!
//! Operator characters are tokenized even though the supported language has
//! no operators, so the parser can reject them with a precise message.

pub mod lexer;
pub mod tokens;
