/// How a rule's state set is checked against the current lexer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatePolicy {
    /// A global rule applies in every state; a restricted rule applies in
    /// exactly the states it lists.
    #[default]
    Exact,
    /// Like [`StatePolicy::Exact`], but a rule restricted to just the initial
    /// state `0` also applies in every odd state.
    ///
    /// This is the old "odd states are inclusive, even states exclusive"
    /// convention, kept for rule sets written against it.
    OddStatesInclusive,
}

/// Configuration for a rule table and the lexers scanning with it.
#[derive(Debug, Clone, Default)]
pub struct LexerConfig {
    /// State gating policy used when collecting candidates.
    pub state_policy: StatePolicy,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state_policy(mut self, state_policy: StatePolicy) -> Self {
        self.state_policy = state_policy;
        self
    }
}
