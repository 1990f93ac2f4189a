//! A rule-driven lexical scanner.
//!
//! A [`RuleTable`] holds ordered pattern/action rules, each restricted to a
//! set of integer lexer states. A [`Lexer`] pulls tokens from an input by
//! finding every rule that matches at the current position, trying them
//! longest match first (earlier registration wins ties), and letting each
//! rule's action emit tokens, suppress the match, or reject it so the next
//! candidate gets a turn.
//!
//! ```
//! use rule_lexer::{Lexer, Outcome, RuleTable, Token};
//!
//! let table = RuleTable::<Token<&str>>::builder()
//!     .rule(r"\d+\.\d*", |m, _| Outcome::Emit(m.token("REAL")))
//!     .rule(r"\d+", |m, _| {
//!         if m.following().starts_with('.') {
//!             Outcome::Reject
//!         } else {
//!             Outcome::Emit(m.token("INTEGER"))
//!         }
//!     })
//!     .skip(r"\s+")
//!     .build()
//!     .unwrap();
//!
//! let tokens = Lexer::from_table(table, "42 3.14").tokenize().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| (*t.kind(), t.lexeme())).collect();
//! assert_eq!(kinds, [("INTEGER", "42"), ("REAL", "3.14")]);
//! ```

pub mod config;
pub mod context;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod pattern;
pub mod rule;
pub mod table;
pub mod token;
pub mod traits;

pub use config::{LexerConfig, StatePolicy};
pub use context::{ActionContext, Match};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{Lexer, Phase};
pub use lexer_common::{Position, TextSlice};
pub use pattern::Pattern;
pub use rule::{Rule, RuleId, StateId, StateSet, INITIAL};
pub use table::{Candidate, RuleTable, RuleTableBuilder};
pub use token::Token;
pub use traits::{FailOnUnmatched, Fallback, LexToken, Outcome, RuleAction, SkipUnmatched};
