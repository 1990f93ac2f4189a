use crate::rule::StateId;
use crate::token::Token;
use lexer_common::{Position, TextSlice};
use regex_automata::util::captures::Captures;
use std::ops::Range;
use std::sync::Arc;

/// A rule's match, as seen by its action.
///
/// Gives access to the matched text, capture groups, and the text around the
/// match so an action can look ahead before deciding to accept.
#[derive(Debug)]
pub struct Match<'a> {
    buffer: &'a Arc<str>,
    captures: &'a Captures,
    position: Position,
}

impl<'a> Match<'a> {
    pub(crate) fn new(buffer: &'a Arc<str>, captures: &'a Captures, position: Position) -> Self {
        debug_assert!(captures.is_match());
        Self {
            buffer,
            captures,
            position,
        }
    }

    fn span(&self) -> Range<usize> {
        self.captures
            .get_match()
            .map_or(self.position.offset..self.position.offset, |m| m.range())
    }

    /// The matched text.
    pub fn as_str(&self) -> &'a str {
        let buffer: &'a str = self.buffer;
        &buffer[self.span()]
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn end(&self) -> usize {
        self.span().end
    }

    pub fn len(&self) -> usize {
        self.span().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Where the match starts.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Capture group `index`; group 0 is the whole match.
    pub fn group(&self, index: usize) -> Option<&'a str> {
        let buffer: &'a str = self.buffer;
        self.captures
            .get_group(index)
            .map(|span| &buffer[span.range()])
    }

    /// Named capture group.
    pub fn name(&self, name: &str) -> Option<&'a str> {
        let buffer: &'a str = self.buffer;
        self.captures
            .get_group_by_name(name)
            .map(|span| &buffer[span.range()])
    }

    /// Number of groups in the pattern, including group 0.
    pub fn group_len(&self) -> usize {
        self.captures.group_len()
    }

    /// The input after the match.
    pub fn following(&self) -> &'a str {
        let buffer: &'a str = self.buffer;
        &buffer[self.end()..]
    }

    /// The input before the match.
    pub fn preceding(&self) -> &'a str {
        let buffer: &'a str = self.buffer;
        &buffer[..self.start()]
    }

    /// The matched text as a shareable lexeme.
    pub fn slice(&self) -> TextSlice {
        let span = self.span();
        TextSlice::new(Arc::clone(self.buffer), span.start, span.end)
    }

    /// A token covering the whole match.
    pub fn token<K>(&self, kind: K) -> Token<K> {
        Token::new(kind, self.slice(), self.position)
    }

    /// A token covering `range` of the match, given relative to its start.
    ///
    /// Returns `None` if the range falls outside the match or splits a
    /// character.
    pub fn token_at<K>(&self, kind: K, range: Range<usize>) -> Option<Token<K>> {
        let lexeme = self.slice().sub(range.clone())?;
        let position = self.position.after(&self.as_str()[..range.start]);
        Some(Token::new(kind, lexeme, position))
    }
}

/// Mutable scanner state an action may read and change.
///
/// Changes only take effect if the action accepts its match; a rejecting
/// action leaves the lexer exactly as it was.
#[derive(Debug, Clone)]
pub struct ActionContext {
    state: StateId,
    offset: usize,
}

impl ActionContext {
    pub(crate) fn new(state: StateId, offset: usize) -> Self {
        Self { state, offset }
    }

    /// The current lexer state.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Switches the lexer state for the rules tried after this match.
    pub fn set_state(&mut self, state: StateId) {
        self.state = state;
    }

    /// Byte offset the match starts at.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
