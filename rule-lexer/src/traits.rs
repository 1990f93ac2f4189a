use crate::context::{ActionContext, Match};
use crate::error::{LexError, LexResult};
use lexer_common::Position;
use std::borrow::Cow;

/// A token the lexer can hand to downstream consumers.
///
/// The engine itself is generic over any token type; this trait is the
/// projection renderers and tools use to get at the category/lexeme pair.
pub trait LexToken: Clone + std::fmt::Debug {
    /// The lexical category, e.g. `INTEGER`.
    fn category(&self) -> Cow<'_, str>;

    /// The exact matched text.
    fn lexeme(&self) -> &str;

    /// Returns the position of this token in the source.
    fn position(&self) -> Option<Position> {
        None
    }
}

/// What a rule's action decided about its match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Accept the match and emit one token.
    Emit(T),
    /// Accept the match; the first token is emitted now, the rest are queued
    /// for the following pulls. An empty list behaves like `Suppress`.
    EmitAll(Vec<T>),
    /// Accept the match without emitting anything (whitespace, comments).
    Suppress,
    /// The match is not valid here: consume nothing, keep the state, and try
    /// the next candidate at the same position.
    Reject,
}

impl<T> Outcome<T> {
    pub fn is_reject(&self) -> bool {
        matches!(self, Outcome::Reject)
    }
}

/// The action half of a rule.
///
/// Actions are shared by every lexer scanning with the same table, so they
/// take `&self` and must be `Send + Sync`. Any closure of the right shape is
/// an action.
pub trait RuleAction<T>: Send + Sync {
    fn apply(&self, matched: &Match<'_>, ctx: &mut ActionContext) -> Outcome<T>;
}

impl<T, F> RuleAction<T> for F
where
    F: Fn(&Match<'_>, &mut ActionContext) -> Outcome<T> + Send + Sync,
{
    fn apply(&self, matched: &Match<'_>, ctx: &mut ActionContext) -> Outcome<T> {
        self(matched, ctx)
    }
}

/// Invoked when no rule accepts the input at a position.
///
/// The lexer has already stepped over `ch` when this runs. Returning an
/// error ends the pull with that error; returning an outcome recovers
/// (`Reject` is treated as `Suppress`, since there is nothing left to try).
pub trait Fallback<T> {
    fn unmatched(&mut self, ch: char, position: Position) -> LexResult<Outcome<T>>;
}

impl<T, F> Fallback<T> for F
where
    F: FnMut(char, Position) -> LexResult<Outcome<T>>,
{
    fn unmatched(&mut self, ch: char, position: Position) -> LexResult<Outcome<T>> {
        self(ch, position)
    }
}

/// The default fallback: fail the pull with [`LexError::Lexical`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailOnUnmatched;

impl<T> Fallback<T> for FailOnUnmatched {
    fn unmatched(&mut self, ch: char, position: Position) -> LexResult<Outcome<T>> {
        Err(LexError::unexpected(ch, position))
    }
}

/// A recovering fallback: log and skip the character.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipUnmatched;

impl<T> Fallback<T> for SkipUnmatched {
    fn unmatched(&mut self, ch: char, position: Position) -> LexResult<Outcome<T>> {
        tracing::warn!(offset = position.offset, %position, ?ch, "skipping unexpected character");
        Ok(Outcome::Suppress)
    }
}
