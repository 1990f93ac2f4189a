use regex_automata::meta::{BuildError, Regex};
use regex_automata::util::captures::Captures;
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input};

/// The textual pattern of a rule, plus the flags it is compiled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
}

impl Pattern {
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
        }
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// `^` and `$` match at line boundaries.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn compile(self) -> Result<CompiledPattern, BuildError> {
        let regex = Regex::builder()
            .syntax(
                syntax::Config::new()
                    .case_insensitive(self.case_insensitive)
                    .multi_line(self.multi_line)
                    .dot_matches_new_line(self.dot_matches_new_line),
            )
            .build(&self.source)?;
        Ok(CompiledPattern {
            pattern: self,
            regex,
        })
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Pattern::new(value)
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::new(value)
    }
}

#[derive(Debug)]
pub(crate) struct CompiledPattern {
    pattern: Pattern,
    regex: Regex,
}

impl CompiledPattern {
    pub(crate) fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Runs an anchored search: the match must start exactly at `offset`.
    ///
    /// The whole input stays visible to the regex, so look-around
    /// assertions like `\b` and `^` see the text before `offset`.
    pub(crate) fn match_at(&self, input: &str, offset: usize) -> Option<Captures> {
        let search = Input::new(input).range(offset..).anchored(Anchored::Yes);
        let mut captures = self.regex.create_captures();
        self.regex.search_captures(&search, &mut captures);
        captures.is_match().then_some(captures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: Pattern) -> CompiledPattern {
        pattern.compile().unwrap()
    }

    fn match_len(pattern: &CompiledPattern, input: &str, offset: usize) -> Option<usize> {
        pattern
            .match_at(input, offset)
            .and_then(|caps| caps.get_match())
            .map(|m| m.len())
    }

    #[test]
    fn test_match_is_anchored() {
        let digits = compile(Pattern::new(r"\d+"));
        assert_eq!(match_len(&digits, "ab12", 0), None);
        assert_eq!(match_len(&digits, "ab12", 2), Some(2));
    }

    #[test]
    fn test_word_boundary_sees_preceding_text() {
        let word = compile(Pattern::new(r"\bx"));
        assert_eq!(match_len(&word, "ax", 1), None);
        assert_eq!(match_len(&word, " x", 1), Some(1));
    }

    #[test]
    fn test_empty_match_at_end_of_input() {
        let end = compile(Pattern::new(r"$"));
        assert_eq!(match_len(&end, "abc", 3), Some(0));
        assert_eq!(match_len(&end, "abc", 1), None);
    }

    #[test]
    fn test_flags() {
        let kw = compile(Pattern::new("begin").case_insensitive(true));
        assert_eq!(match_len(&kw, "BeGiN", 0), Some(5));

        let any = compile(Pattern::new("a.b").dot_matches_new_line(true));
        assert_eq!(match_len(&any, "a\nb", 0), Some(3));

        let line_start = compile(Pattern::new("^b").multi_line(true));
        assert_eq!(match_len(&line_start, "a\nb", 2), Some(1));
    }

    #[test]
    fn test_malformed_pattern_fails_to_compile() {
        assert!(Pattern::new("(unclosed").compile().is_err());
    }
}
