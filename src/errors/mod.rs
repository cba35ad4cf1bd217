//! Error types and error handling for the type checker.
//!
//! Every error in this module is fatal: it means the input is outside the
//! supported language subset (or not lexically/syntactically valid). Ordinary
//! type errors are never reported here, they travel as `TypeTag::Error`
//! through the proof tree instead.
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing, and declaration checks
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
