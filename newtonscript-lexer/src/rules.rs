//! The NewtonScript rule set.

use crate::category::NsCategory;
use crate::NsToken;
use rule_lexer::{
    ActionContext, LexResult, Lexer, Match, Outcome, RuleTable, StateId, INITIAL,
};

/// Lexer state inside a `/* ... */` comment.
pub const COMMENT: StateId = 2;

const RESERVED_WORDS: &str = r"(?:and|begin|break|by|call|constant|deeply|div|do|else|end|exists|for|foreach|func|global|if|in|inherited|local|loop|mod|native|not|onexception|or|repeat|return|self|then|to|try|until|while|with)\b";
const REAL: &str = r"[0-9]+\.[0-9]*(?:[eE]-?[0-9]+)?";
const INTEGER: &str = r"0x[0-9a-fA-F]+|[0-9]+";
const CHARACTER: &str = r"\$(?:\\(?:[nt\\]|u[0-9a-fA-F]{4}|[0-9a-fA-F]{2})|[^\\\s])";
const STRING: &str =
    r#""(?:[^"\\]|\\["\\nt]|\\u(?:[0-9a-fA-F]{4})*\\u)*(?:\\u(?:[0-9a-fA-F]{4})*)?""#;
const SYMBOL: &str = r"[a-zA-Z_][a-zA-Z0-9_]*|\|(?:[^|\\]|\\[|\\])*\|";
const OPERATOR: &str = r":=|:\?|<>|<=|>=|<<|>>|&&|[-+*/<>=&:.]";
const DELIMITER: &str = r"[()\[\]{},;']";
const WHITE_SPACE: &str = r"\s+";
const LINE_COMMENT: &str = r"//[^\n]*";
const COMMENT_OPEN: &str = r"/\*";
const COMMENT_BODY: &str = r"(?:[^*]|\*+[^*/])+|\*+";
const COMMENT_CLOSE: &str = r"\*+/";

/// Which trivia the rule set emits instead of suppressing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesOptions {
    pub keep_whitespace: bool,
    pub keep_comments: bool,
}

impl RulesOptions {
    /// Emit whitespace and comments too, so the tokens cover the whole input.
    pub fn keep_trivia() -> Self {
        Self {
            keep_whitespace: true,
            keep_comments: true,
        }
    }
}

fn trivia(
    category: NsCategory,
    keep: bool,
) -> impl Fn(&Match<'_>, &mut ActionContext) -> Outcome<NsToken> + Send + Sync + 'static {
    move |m: &Match<'_>, _: &mut ActionContext| {
        if keep {
            Outcome::Emit(m.token(category))
        } else {
            Outcome::Suppress
        }
    }
}

/// Builds the NewtonScript rule table.
///
/// Reserved words tie with symbols and win because they are registered
/// first. Block comments are scanned in the [`COMMENT`] state; when kept,
/// a block comment comes out as several `COMMENT` tokens (opening
/// delimiter, body, closing delimiter). An unterminated block comment runs
/// to the end of input.
pub fn newtonscript_rules(options: &RulesOptions) -> LexResult<RuleTable<NsToken>> {
    let keep_comments = options.keep_comments;

    RuleTable::<NsToken>::builder()
        .token_in(INITIAL, RESERVED_WORDS, NsCategory::ReservedWord)
        .token_in(INITIAL, REAL, NsCategory::Real)
        .rule_in(INITIAL, INTEGER, |m, _| {
            // `1.` belongs to the real rule.
            if !m.as_str().starts_with("0x") && m.following().starts_with('.') {
                Outcome::Reject
            } else {
                Outcome::Emit(m.token(NsCategory::Integer))
            }
        })
        .token_in(INITIAL, CHARACTER, NsCategory::Character)
        .token_in(INITIAL, STRING, NsCategory::String)
        .token_in(INITIAL, SYMBOL, NsCategory::Symbol)
        .token_in(INITIAL, OPERATOR, NsCategory::Operator)
        .token_in(INITIAL, DELIMITER, NsCategory::Delimiter)
        .rule_in(
            INITIAL,
            WHITE_SPACE,
            trivia(NsCategory::WhiteSpace, options.keep_whitespace),
        )
        .rule_in(INITIAL, LINE_COMMENT, trivia(NsCategory::Comment, keep_comments))
        .rule_in(INITIAL, COMMENT_OPEN, move |m, ctx| {
            ctx.set_state(COMMENT);
            trivia(NsCategory::Comment, keep_comments)(m, ctx)
        })
        .rule_in(COMMENT, COMMENT_BODY, trivia(NsCategory::Comment, keep_comments))
        .rule_in(COMMENT, COMMENT_CLOSE, move |m, ctx| {
            ctx.set_state(INITIAL);
            trivia(NsCategory::Comment, keep_comments)(m, ctx)
        })
        .build()
}

/// Lexes `input` with a freshly built rule table.
pub fn tokenize(input: &str, options: &RulesOptions) -> LexResult<Vec<NsToken>> {
    let table = newtonscript_rules(options)?;
    Lexer::from_table(table, input).tokenize()
}
