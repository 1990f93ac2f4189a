use crate::config::StatePolicy;
use crate::pattern::CompiledPattern;
use crate::traits::RuleAction;
use std::fmt;

/// An integer lexer state. Scanning starts in [`INITIAL`].
pub type StateId = u32;

/// The state every lexer session starts in.
pub const INITIAL: StateId = 0;

/// The lexer states a rule applies in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateSet {
    /// Applies in every state.
    #[default]
    Global,
    /// Applies only in the listed states. Never empty.
    Only(Vec<StateId>),
}

impl StateSet {
    /// Restricts a rule to `states`. An empty list means global.
    pub fn only<I>(states: I) -> Self
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut states: Vec<StateId> = states.into_iter().collect();
        states.sort_unstable();
        states.dedup();
        if states.is_empty() {
            StateSet::Global
        } else {
            StateSet::Only(states)
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, StateSet::Global)
    }

    /// Whether a rule with this set is eligible in `state`.
    pub fn admits(&self, state: StateId, policy: StatePolicy) -> bool {
        match self {
            StateSet::Global => true,
            StateSet::Only(states) => {
                states.binary_search(&state).is_ok()
                    || (policy == StatePolicy::OddStatesInclusive
                        && state % 2 == 1
                        && states.as_slice() == [INITIAL])
            }
        }
    }
}

impl From<StateId> for StateSet {
    fn from(state: StateId) -> Self {
        StateSet::only([state])
    }
}

impl From<Vec<StateId>> for StateSet {
    fn from(states: Vec<StateId>) -> Self {
        StateSet::only(states)
    }
}

impl From<&[StateId]> for StateSet {
    fn from(states: &[StateId]) -> Self {
        StateSet::only(states.iter().copied())
    }
}

impl<const N: usize> From<[StateId; N]> for StateSet {
    fn from(states: [StateId; N]) -> Self {
        StateSet::only(states)
    }
}

/// Identifies a rule by its registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub(crate) usize);

impl RuleId {
    /// Zero-based registration index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One lexical alternative: pattern, action and the states it applies in.
pub struct Rule<T> {
    pub(crate) pattern: CompiledPattern,
    pub(crate) action: Box<dyn RuleAction<T>>,
    pub(crate) states: StateSet,
}

impl<T> Rule<T> {
    pub fn source(&self) -> &str {
        self.pattern.pattern().source()
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", self.pattern.pattern())
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_global() {
        assert_eq!(StateSet::only(Vec::new()), StateSet::Global);
        assert_eq!(StateSet::from(Vec::<StateId>::new()), StateSet::Global);
    }

    #[test]
    fn test_only_admits_listed_states() {
        let set = StateSet::only([2, 4, 2]);
        assert_eq!(set, StateSet::Only(vec![2, 4]));
        assert!(set.admits(2, StatePolicy::Exact));
        assert!(set.admits(4, StatePolicy::Exact));
        assert!(!set.admits(0, StatePolicy::Exact));
        assert!(!set.admits(3, StatePolicy::OddStatesInclusive));
    }

    #[test]
    fn test_global_admits_everything() {
        for state in [0, 1, 2, 17] {
            assert!(StateSet::Global.admits(state, StatePolicy::Exact));
        }
    }

    #[test]
    fn test_odd_states_inclusive_only_widens_initial_rules() {
        let initial = StateSet::from(INITIAL);
        assert!(!initial.admits(1, StatePolicy::Exact));
        assert!(initial.admits(1, StatePolicy::OddStatesInclusive));
        assert!(initial.admits(5, StatePolicy::OddStatesInclusive));
        assert!(!initial.admits(2, StatePolicy::OddStatesInclusive));

        let wider = StateSet::from([INITIAL, 2]);
        assert!(!wider.admits(1, StatePolicy::OddStatesInclusive));
    }
}
