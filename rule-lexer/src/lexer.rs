use crate::context::{ActionContext, Match};
use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::rule::{StateId, INITIAL};
use crate::table::RuleTable;
use crate::traits::{FailOnUnmatched, Fallback, Outcome};
use lexer_common::{Position, TextSlice};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace};

/// Where a lexer is in its scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the next pull.
    Idle,
    /// Candidates gathered at the current position, being tried in order.
    Scanning,
    /// Every candidate at the current position was rejected.
    Exhausted,
    /// End of input reached with nothing pending. Terminal.
    Done,
}

/// One scan session over one input.
///
/// The lexer owns the cursor, the lexer state and the queue of tokens left
/// over from multi-token actions. Rules are borrowed from a shared
/// [`RuleTable`], so any number of lexers can scan with the same table.
pub struct Lexer<T> {
    table: Arc<RuleTable<T>>,
    cursor: Cursor,
    state: StateId,
    pending: VecDeque<T>,
    /// Rules already tried at the cursor's offset. Cleared whenever the
    /// cursor moves, and only then: a rule rejected at this offset stays
    /// excluded even after a zero-length match switches the state.
    tried: Vec<bool>,
    fallback: Box<dyn Fallback<T>>,
    phase: Phase,
}

impl<T: 'static> Lexer<T> {
    /// Creates a lexer over `input`; unmatched characters are errors.
    pub fn new<S: Into<String>>(table: Arc<RuleTable<T>>, input: S) -> Self {
        let tried = vec![false; table.len()];
        Self {
            table,
            cursor: Cursor::new(input),
            state: INITIAL,
            pending: VecDeque::new(),
            tried,
            fallback: Box::new(FailOnUnmatched),
            phase: Phase::Idle,
        }
    }

    /// Creates a lexer that owns its table outright.
    pub fn from_table<S: Into<String>>(table: RuleTable<T>, input: S) -> Self {
        Self::new(Arc::new(table), input)
    }

    /// Replaces the handler called for characters no rule accepts.
    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fallback<T> + 'static,
    {
        self.fallback = Box::new(fallback);
        self
    }
}

impl<T> Lexer<T> {
    pub fn table(&self) -> &Arc<RuleTable<T>> {
        &self.table
    }

    /// The current lexer state.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Forces the lexer state, e.g. to start scanning inside a sub-language.
    pub fn set_state(&mut self, state: StateId) {
        self.state = state;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// The input not yet consumed.
    pub fn remaining(&self) -> TextSlice {
        self.cursor.remaining()
    }

    /// Tokens produced by an earlier multi-token action and not yet pulled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Starts a new session on `input` with the same rules and fallback.
    pub fn reset<S: Into<String>>(&mut self, input: S) {
        debug!("lexer reset");
        self.cursor.reset(input);
        self.state = INITIAL;
        self.pending.clear();
        self.tried.fill(false);
        self.phase = Phase::Idle;
    }

    fn advance(&mut self, len: usize) {
        if len > 0 {
            self.cursor.advance_bytes(len);
            self.tried.fill(false);
        }
    }

    /// Applies an accepted outcome. Returns the token to hand out now, if
    /// any; the rest of a multi-token outcome goes to the pending queue.
    fn accept(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome {
            Outcome::Emit(token) => Some(token),
            Outcome::EmitAll(tokens) => {
                let mut tokens = tokens.into_iter();
                let first = tokens.next();
                self.pending.extend(tokens);
                first
            }
            Outcome::Suppress | Outcome::Reject => None,
        }
    }

    /// Pulls the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted. An error means no rule
    /// accepted the character at the reported position and the fallback did
    /// not recover; the cursor is already past that character, so pulling
    /// again resumes scanning after it.
    pub fn next_token(&mut self) -> LexResult<Option<T>> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Some(token));
        }
        if self.phase == Phase::Done {
            return Ok(None);
        }

        let table = Arc::clone(&self.table);
        let buffer = Arc::clone(self.cursor.buffer());

        'scan: loop {
            self.phase = Phase::Scanning;
            let offset = self.cursor.offset();
            let candidates = {
                let tried = &self.tried;
                table.collect_candidates(&buffer, offset, self.state, |id| !tried[id.index()])
            };

            for candidate in &candidates {
                let id = candidate.rule();
                self.tried[id.index()] = true;

                let Some(rule) = table.rule(id) else {
                    continue;
                };
                let matched = Match::new(&buffer, candidate.captures(), self.cursor.position());
                let mut ctx = ActionContext::new(self.state, offset);
                let outcome = rule.action.apply(&matched, &mut ctx);

                if outcome.is_reject() {
                    trace!(rule = %id, offset, len = candidate.len(), "candidate rejected");
                    continue;
                }

                trace!(rule = %id, offset, len = candidate.len(), state = ctx.state(), "candidate accepted");
                self.state = ctx.state();
                self.advance(candidate.len());
                if let Some(token) = self.accept(outcome) {
                    self.phase = Phase::Idle;
                    return Ok(Some(token));
                }
                // Suppressed: scan again from wherever we are now.
                continue 'scan;
            }

            self.phase = Phase::Exhausted;
            let position = self.cursor.position();
            let Some(ch) = self.cursor.advance() else {
                self.phase = Phase::Done;
                return Ok(None);
            };
            self.tried.fill(false);

            debug!(offset = position.offset, ?ch, "no rule accepted character");
            let outcome = self.fallback.unmatched(ch, position)?;
            if let Some(token) = self.accept(outcome) {
                self.phase = Phase::Idle;
                return Ok(Some(token));
            }
        }
    }

    /// Pulls every remaining token, stopping at the first error.
    pub fn tokenize(&mut self) -> LexResult<Vec<T>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Make Lexer implement Iterator for stream-like processing.
///
/// The iterator ends at end of input. Errors are yielded in place, and
/// scanning continues after the offending character if the caller keeps
/// pulling.
impl<T> Iterator for Lexer<T> {
    type Item = LexResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
