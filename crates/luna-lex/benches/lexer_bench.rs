use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use luna_lex::{tokenize, EntryStack};

const KEYWORDS_SOURCE: &str = "def class of import all case type foreign native def class of import ";

fn complex_source(lines: usize) -> String {
    let mut s = String::new();
    for i in 0..lines {
        s.push_str(&format!(
            "def handler{i}(x: Int, y: 'name`x`'): Int = x + y;\n"
        ));
    }
    s
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_keywords");
    group.throughput(Throughput::Bytes(KEYWORDS_SOURCE.len() as u64));
    group.bench_function("tokenize_keywords", |b| {
        b.iter(|| {
            let count = tokenize(black_box(KEYWORDS_SOURCE)).count();
            black_box(count)
        })
    });
    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let source = complex_source(500);
    let mut group = c.benchmark_group("lexer_complex");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("tokenize_nested_interpolation", |b| {
        b.iter(|| {
            let count = tokenize(black_box(&source)).count();
            black_box(count)
        })
    });
    group.bench_function("tokenize_with_fresh_stack", |b| {
        b.iter(|| {
            let count = luna_lex::tokenize_with(EntryStack::new(), black_box(&source)).count();
            black_box(count)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_lexer_keywords, bench_lexer_complex);
criterion_main!(benches);
