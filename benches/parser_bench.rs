use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mini_syntax::Parser;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mini parser");

    let source_1 = "int x = 1;";
    let source_2 = "int i = 0;\nwhile (i < 100) { i = i + 1; }";
    let source_3 = "// fizz counter
int i = 1;
int fizz = 0;
float ratio;
while (i <= 100) {
    if (i % 3 == 0 || i % 5 == 0) fizz = fizz + 1;
    else { ratio = (fizz * 1.0) / i; }
    i = i + 1;
}
bool done = fizz >= 40 && ratio != 0;
#";

    for (name, source) in [("definition", source_1), ("loop", source_2), ("program", source_3)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, source.len()), source, |b, i| {
            b.iter(|| {
                let bump = Bump::new();
                let parser = Parser::new(&bump);
                parser.parse(black_box(i)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
