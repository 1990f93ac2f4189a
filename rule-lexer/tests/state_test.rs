//! Lexer state gating tests.

use pretty_assertions::assert_eq;
use rule_lexer::{Lexer, Outcome, RuleTable, StateId, StatePolicy, Token, INITIAL};

type Tok = Token<&'static str>;

const STRING: StateId = 2;
const RAW: StateId = 3;

/// Strings are scanned in their own state: the quote switches state and
/// the body rules only apply inside it.
fn string_table() -> RuleTable<Tok> {
    RuleTable::<Tok>::builder()
        .rule_in(INITIAL, "\"", |m, ctx| {
            ctx.set_state(STRING);
            Outcome::Emit(m.token("OPEN"))
        })
        .token_in(INITIAL, "[a-z]+", "IDENT")
        .skip_in(INITIAL, " +")
        .token_in(STRING, "[^\"\\\\]+", "TEXT")
        .token_in(STRING, r"\\.", "ESCAPE")
        .rule_in(STRING, "\"", |m, ctx| {
            ctx.set_state(INITIAL);
            Outcome::Emit(m.token("CLOSE"))
        })
        .build()
        .unwrap()
}

fn kinds(tokens: &[Tok]) -> Vec<(&'static str, &str)> {
    tokens.iter().map(|t| (*t.kind(), t.lexeme())).collect()
}

#[test]
fn test_rules_apply_only_in_their_states() {
    let tokens = Lexer::from_table(string_table(), r#"say "hi there\n" ok"#)
        .tokenize()
        .unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            ("IDENT", "say"),
            ("OPEN", "\""),
            ("TEXT", "hi there"),
            ("ESCAPE", "\\n"),
            ("CLOSE", "\""),
            ("IDENT", "ok"),
        ]
    );
}

#[test]
fn test_state_is_visible_on_the_lexer() {
    let mut lexer = Lexer::from_table(string_table(), "\"abc");
    lexer.next_token().unwrap();
    assert_eq!(lexer.state(), STRING);
    lexer.next_token().unwrap();
    assert_eq!(lexer.state(), STRING);
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_rejecting_action_cannot_change_state() {
    let table = RuleTable::<Tok>::builder()
        .rule("a", |_, ctx| {
            ctx.set_state(RAW);
            Outcome::Reject
        })
        .token_in(INITIAL, "a", "A")
        .token_in(RAW, "a", "RAW_A")
        .build()
        .unwrap();
    let tokens = Lexer::from_table(table, "aa").tokenize().unwrap();
    assert_eq!(kinds(&tokens), vec![("A", "a"), ("A", "a")]);
}

#[test]
fn test_zero_length_state_switch() {
    // An empty match at the start flips into RAW, where a different rule
    // takes the same text.
    let table = RuleTable::<Tok>::builder()
        .rule_in(INITIAL, "", |_, ctx| {
            ctx.set_state(RAW);
            Outcome::Suppress
        })
        .token_in(INITIAL, "[a-z]+", "WORD")
        .token_in(RAW, "[a-z]+", "RAW_WORD")
        .build()
        .unwrap();
    let tokens = Lexer::from_table(table, "abc").tokenize().unwrap();
    assert_eq!(kinds(&tokens), vec![("WORD", "abc")]);

    // Longer matches go first, so the switch only wins where nothing else
    // matches.
    let table = RuleTable::<Tok>::builder()
        .rule_in(INITIAL, "", |_, ctx| {
            ctx.set_state(RAW);
            Outcome::Suppress
        })
        .token_in(RAW, "-", "DASH")
        .build()
        .unwrap();
    let tokens = Lexer::from_table(table, "-").tokenize().unwrap();
    assert_eq!(kinds(&tokens), vec![("DASH", "-")]);
}

#[test]
fn test_set_state_from_outside() {
    let mut lexer = Lexer::from_table(string_table(), "abc\"");
    lexer.set_state(STRING);
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(kinds(&tokens), vec![("TEXT", "abc"), ("CLOSE", "\"")]);
}

#[test]
fn test_odd_states_inclusive_policy() {
    let build = |policy: StatePolicy| {
        RuleTable::<Tok>::builder()
            .state_policy(policy)
            .rule_in(INITIAL, "!", |m, ctx| {
                ctx.set_state(RAW);
                Outcome::Emit(m.token("BANG"))
            })
            .token_in(INITIAL, "[a-z]", "LETTER")
            .token_in(RAW, "[0-9]", "DIGIT")
            .build()
            .unwrap()
    };

    // RAW is odd: with the inclusive policy the initial-state rules keep
    // applying there.
    let tokens = Lexer::from_table(build(StatePolicy::OddStatesInclusive), "!a1")
        .tokenize()
        .unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![("BANG", "!"), ("LETTER", "a"), ("DIGIT", "1")]
    );

    let result = Lexer::from_table(build(StatePolicy::Exact), "!a1").tokenize();
    assert!(result.is_err());
}

#[test]
fn test_rejected_rule_stays_excluded_after_state_switch() {
    // The rule would accept in RAW, but it already rejected at this offset
    // in the initial state, so the zero-length switch does not revive it.
    let table = RuleTable::<Tok>::builder()
        .rule("a", |m, ctx| {
            if ctx.state() == RAW {
                Outcome::Emit(m.token("RAW_A"))
            } else {
                Outcome::Reject
            }
        })
        .rule_in(INITIAL, "", |_, ctx| {
            ctx.set_state(RAW);
            Outcome::Suppress
        })
        .build()
        .unwrap();
    let mut lexer = Lexer::from_table(table, "aa");
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.offset(), Some(0));
    assert_eq!(lexer.state(), RAW);

    // Once the cursor moves the rule is eligible again.
    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!((*token.kind(), token.lexeme()), ("RAW_A", "a"));
}
