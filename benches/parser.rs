use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use minijs::{lexer::lexer::tokenize, parser::parser::parse, printer::printer::print_ast};

fn parse_source(source: &str) {
    let tokens = tokenize(source, None);
    assert!(parse(tokens).is_ok());
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| parse_source(&source)));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "1".to_string();
    for _i in 0..200 {
        source.push_str(" == 2 < 3 + 5 * -5");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| b.iter(|| parse_source(&source)));
}

fn many_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("many-functions");

    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!(
            "function f{i}(a, b) {{ if (a > b) {{ return a.x[b]; }} else {{ return g(a, [b, {i}]); }} }}\n"
        ));
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("parse", |b| b.iter(|| parse_source(&source)));

    let program = parse(tokenize(&source, None)).unwrap();
    group.bench_function("print", |b| b.iter(|| print_ast(&program)));
}

criterion_group!(benches, long_expr, stress_precedence, many_functions);
criterion_main!(benches);
