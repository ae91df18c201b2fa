use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symptom_rules::Classifier;

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::builtin();

    c.bench_function("classify_first_rule", |b| {
        b.iter(|| classifier.classify(black_box("I have chest pain and can't breathe")))
    });

    c.bench_function("classify_default", |b| {
        b.iter(|| {
            classifier.classify(black_box(
                "my elbow hurts a little after playing tennis on the weekend",
            ))
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
