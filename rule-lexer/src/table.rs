use crate::config::{LexerConfig, StatePolicy};
use crate::context::{ActionContext, Match};
use crate::error::{LexError, LexResult};
use crate::pattern::Pattern;
use crate::rule::{Rule, RuleId, StateId, StateSet};
use crate::token::Token;
use crate::traits::{Outcome, RuleAction};
use regex_automata::util::captures::Captures;
use std::cmp::Reverse;

/// A rule whose pattern matched at the position being scanned.
#[derive(Debug)]
pub struct Candidate {
    rule: RuleId,
    captures: Captures,
    len: usize,
}

impl Candidate {
    pub fn rule(&self) -> RuleId {
        self.rule
    }

    /// Match length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn captures(&self) -> &Captures {
        &self.captures
    }
}

/// The ordered set of rules a lexer scans with.
///
/// Registration order matters: it breaks ties between candidates of equal
/// length. Once built, a table is read-only and can be shared between
/// lexers through an `Arc`.
#[derive(Debug)]
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
    config: LexerConfig,
}

impl<T> Default for RuleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RuleTable<T> {
    pub fn new() -> Self {
        Self::with_config(LexerConfig::default())
    }

    pub fn with_config(config: LexerConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    pub fn builder() -> RuleTableBuilder<T> {
        RuleTableBuilder::new()
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn state_policy(&self) -> StatePolicy {
        self.config.state_policy
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule<T>> {
        self.rules.get(id.0)
    }

    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule<T>)> + '_ {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| (RuleId(index), rule))
    }

    /// Appends a rule with a boxed action.
    ///
    /// Fails only if the pattern does not compile; the table is left as it
    /// was in that case.
    pub fn register<P, S>(
        &mut self,
        pattern: P,
        action: Box<dyn RuleAction<T>>,
        states: S,
    ) -> LexResult<RuleId>
    where
        P: Into<Pattern>,
        S: Into<StateSet>,
    {
        let pattern = pattern.into();
        let index = self.rules.len();
        let source = pattern.source().to_string();
        let compiled = pattern
            .compile()
            .map_err(|source_err| LexError::MalformedRule {
                index,
                pattern: source,
                source: Box::new(source_err),
            })?;
        self.rules.push(Rule {
            pattern: compiled,
            action,
            states: states.into(),
        });
        Ok(RuleId(index))
    }

    /// Appends a global rule whose action is a closure.
    pub fn add<P, F>(&mut self, pattern: P, action: F) -> LexResult<RuleId>
    where
        P: Into<Pattern>,
        F: Fn(&Match<'_>, &mut ActionContext) -> Outcome<T> + Send + Sync + 'static,
    {
        self.register(pattern, Box::new(action), StateSet::Global)
    }

    /// Appends a state-restricted rule whose action is a closure.
    pub fn add_in<S, P, F>(&mut self, states: S, pattern: P, action: F) -> LexResult<RuleId>
    where
        S: Into<StateSet>,
        P: Into<Pattern>,
        F: Fn(&Match<'_>, &mut ActionContext) -> Outcome<T> + Send + Sync + 'static,
    {
        self.register(pattern, Box::new(action), states)
    }

    /// Every rule eligible in `state` whose pattern matches starting exactly
    /// at `offset`, longest match first, ties in registration order.
    pub fn candidates_at(&self, input: &str, offset: usize, state: StateId) -> Vec<Candidate> {
        self.collect_candidates(input, offset, state, |_| true)
    }

    pub(crate) fn collect_candidates<F>(
        &self,
        input: &str,
        offset: usize,
        state: StateId,
        mut eligible: F,
    ) -> Vec<Candidate>
    where
        F: FnMut(RuleId) -> bool,
    {
        let policy = self.state_policy();
        let mut candidates: Vec<Candidate> = self
            .rules()
            .filter(|(id, rule)| rule.states.admits(state, policy) && eligible(*id))
            .filter_map(|(id, rule)| {
                let captures = rule.pattern.match_at(input, offset)?;
                let len = captures.get_match()?.len();
                Some(Candidate {
                    rule: id,
                    captures,
                    len,
                })
            })
            .collect();

        // Stable: equal lengths keep registration order.
        candidates.sort_by_key(|candidate| Reverse(candidate.len));
        candidates
    }
}

/// Builds a [`RuleTable`], deferring pattern errors to [`build`].
///
/// [`build`]: RuleTableBuilder::build
pub struct RuleTableBuilder<T> {
    table: RuleTable<T>,
    error: Option<LexError>,
}

impl<T> Default for RuleTableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RuleTableBuilder<T> {
    pub fn new() -> Self {
        Self {
            table: RuleTable::new(),
            error: None,
        }
    }

    pub fn config(mut self, config: LexerConfig) -> Self {
        self.table.config = config;
        self
    }

    pub fn state_policy(mut self, policy: StatePolicy) -> Self {
        self.table.config.state_policy = policy;
        self
    }

    fn push<S, P>(mut self, states: S, pattern: P, action: Box<dyn RuleAction<T>>) -> Self
    where
        S: Into<StateSet>,
        P: Into<Pattern>,
    {
        if self.error.is_none() {
            if let Err(err) = self.table.register(pattern, action, states) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Adds a global rule.
    pub fn rule<P, F>(self, pattern: P, action: F) -> Self
    where
        P: Into<Pattern>,
        F: Fn(&Match<'_>, &mut ActionContext) -> Outcome<T> + Send + Sync + 'static,
    {
        self.push(StateSet::Global, pattern, Box::new(action))
    }

    /// Adds a rule that only applies in `states`.
    pub fn rule_in<S, P, F>(self, states: S, pattern: P, action: F) -> Self
    where
        S: Into<StateSet>,
        P: Into<Pattern>,
        F: Fn(&Match<'_>, &mut ActionContext) -> Outcome<T> + Send + Sync + 'static,
    {
        self.push(states, pattern, Box::new(action))
    }

    /// Adds a rule with an action that is not a closure.
    pub fn action<S, P>(self, states: S, pattern: P, action: Box<dyn RuleAction<T>>) -> Self
    where
        S: Into<StateSet>,
        P: Into<Pattern>,
    {
        self.push(states, pattern, action)
    }

    /// Adds a global rule that matches and emits nothing.
    pub fn skip<P: Into<Pattern>>(self, pattern: P) -> Self {
        self.rule(pattern, |_, _| Outcome::Suppress)
    }

    pub fn skip_in<S, P>(self, states: S, pattern: P) -> Self
    where
        S: Into<StateSet>,
        P: Into<Pattern>,
    {
        self.rule_in(states, pattern, |_, _| Outcome::Suppress)
    }

    /// Returns the table, or the first pattern error encountered.
    pub fn build(self) -> LexResult<RuleTable<T>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.table),
        }
    }
}

impl<K> RuleTableBuilder<Token<K>>
where
    K: Clone + Send + Sync + 'static,
{
    /// Adds a global rule that emits its whole match as a `kind` token.
    pub fn token<P: Into<Pattern>>(self, pattern: P, kind: K) -> Self {
        self.rule(pattern, move |m, _| Outcome::Emit(m.token(kind.clone())))
    }

    pub fn token_in<S, P>(self, states: S, pattern: P, kind: K) -> Self
    where
        S: Into<StateSet>,
        P: Into<Pattern>,
    {
        self.rule_in(states, pattern, move |m, _| Outcome::Emit(m.token(kind.clone())))
    }
}
