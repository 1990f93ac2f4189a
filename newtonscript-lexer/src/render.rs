//! Renders token streams as XML, JSON or a plain listing.

use crate::error::{NsError, NsResult};
use crate::rules::{tokenize, RulesOptions};
use rule_lexer::LexToken;
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Output format for a token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `<tokenlist>` document, one `<token>` element per token.
    #[default]
    Xml,
    /// One `{"type":..,"lexeme":..}` object per token, back to back.
    Json,
    /// One `CATEGORY "lexeme"` line per token.
    Array,
}

impl FromStr for OutputFormat {
    type Err = NsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            "array" => Ok(OutputFormat::Array),
            _ => Err(NsError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    #[serde(rename = "type")]
    category: &'a str,
    lexeme: &'a str,
}

fn escape_xml(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

fn render_xml<T: LexToken>(tokens: &[T]) -> String {
    let mut out = String::from("<tokenlist>\n");
    for token in tokens {
        out.push_str("  <token>\n    <lexeme>");
        escape_xml(token.lexeme(), &mut out);
        out.push_str("</lexeme>\n    <tokencategory>");
        escape_xml(&token.category(), &mut out);
        out.push_str("</tokencategory>\n  </token>\n");
    }
    out.push_str("</tokenlist>\n");
    out
}

fn render_json<T: LexToken>(tokens: &[T]) -> NsResult<String> {
    let mut out = String::new();
    for token in tokens {
        let category = token.category();
        let record = Record {
            category: &category,
            lexeme: token.lexeme(),
        };
        out.push_str(&serde_json::to_string(&record)?);
    }
    Ok(out)
}

fn render_array<T: LexToken>(tokens: &[T]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for token in tokens {
        writeln!(out, "{} {:?}", token.category(), token.lexeme())?;
    }
    Ok(out)
}

/// Renders `tokens` in `format`.
pub fn render<T: LexToken>(format: OutputFormat, tokens: &[T]) -> NsResult<String> {
    match format {
        OutputFormat::Xml => Ok(render_xml(tokens)),
        OutputFormat::Json => render_json(tokens),
        OutputFormat::Array => Ok(render_array(tokens)?),
    }
}

/// Lexes NewtonScript `input` with the default rules and renders the result.
pub fn lex_newtonscript(format: OutputFormat, input: &str) -> NsResult<String> {
    let tokens = tokenize(input, &RulesOptions::default())?;
    render(format, &tokens)
}
