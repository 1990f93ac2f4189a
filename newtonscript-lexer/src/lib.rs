//! A NewtonScript lexer built on `rule-lexer`.
//!
//! [`newtonscript_rules`] builds the rule table, [`tokenize`] runs it over a
//! source string, and [`render`] turns the tokens into XML, JSON or a plain
//! listing.

pub mod category;
pub mod error;
pub mod render;
pub mod rules;

pub use category::NsCategory;
pub use error::{NsError, NsResult};
pub use render::{lex_newtonscript, render, OutputFormat};
pub use rules::{newtonscript_rules, tokenize, RulesOptions, COMMENT};

/// A NewtonScript token.
pub type NsToken = rule_lexer::Token<NsCategory>;
