use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rule_lexer::{Lexer, Outcome, RuleTable, SkipUnmatched, Token};
use std::sync::Arc;

type BenchToken = Token<&'static str>;

// --- Rules ---

fn bench_table() -> RuleTable<BenchToken> {
    RuleTable::<BenchToken>::builder()
        .skip(r"\s+")
        .rule(r"\d+\.\d*", |m, _| Outcome::Emit(m.token("REAL")))
        .rule(r"\d+", |m, _| {
            if m.following().starts_with('.') {
                Outcome::Reject
            } else {
                Outcome::Emit(m.token("INTEGER"))
            }
        })
        .token(r"[\p{Alphabetic}_][\p{Alphabetic}\d_]*", "IDENTIFIER")
        .token(r"[-+*/=<>!&|]", "OPERATOR")
        .token(r"[;()]", "DELIMITER")
        .build()
        .expect("bench rules compile")
}

// --- Data Generation ---

fn generate_english(size_kb: usize) -> String {
    let words = [
        "function", "let", "var", "const", "if", "else", "while", "return",
    ];
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        for w in words {
            s.push_str(w);
            s.push_str(" x_Variable = 12345 + 3.25;\n");
        }
    }
    s
}

fn generate_chinese(size_kb: usize) -> String {
    let words = ["定义", "变量", "如果", "否则", "循环", "返回"];
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        for w in words {
            s.push_str(w);
            s.push_str(" 变量名_甲 = 67890;\n");
        }
    }
    s
}

fn generate_emoji(size_kb: usize) -> String {
    // No rule matches these, so every one goes through the fallback.
    let emojis = ["😀", "🚀", "🦀", "💻", "🔥"];
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        for e in emojis {
            s.push_str(e);
            s.push_str(" + ");
        }
        s.push('\n');
    }
    s
}

// --- Benchmarks ---

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_scan");
    let size_kb = 100;
    let table = Arc::new(bench_table());

    let inputs = [
        ("english_100kb", generate_english(size_kb)),
        ("chinese_100kb", generate_chinese(size_kb)),
        ("emoji_100kb", generate_emoji(size_kb)),
    ];

    for (name, text) in &inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(*name, |b| {
            b.iter(|| {
                let lexer =
                    Lexer::new(Arc::clone(&table), text.as_str()).with_fallback(SkipUnmatched);
                lexer.filter_map(Result::ok).count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
