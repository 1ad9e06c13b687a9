use color_recall::{hex_to_rgb, rgb_to_hsl, score_answers, Question, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_conversions(c: &mut Criterion) {
    c.bench_function("hex_to_rgb", |b| {
        b.iter(|| hex_to_rgb(black_box("#3366CC")))
    });

    let rgb = Rgb::new(0x33, 0x66, 0xCC);
    c.bench_function("rgb_to_hsl", |b| b.iter(|| rgb_to_hsl(black_box(rgb))));
}

fn benchmark_scoring(c: &mut Criterion) {
    let questions: Vec<Question> = (0..10).map(|_| Question::generate()).collect();
    // Shifted answers so every question scores a real miss
    let answers: Vec<String> = questions
        .iter()
        .rev()
        .map(|q| q.hex[1..].to_string())
        .collect();

    c.bench_function("score_answers_10", |b| {
        b.iter(|| score_answers(black_box(&questions), black_box(&answers)))
    });
}

criterion_group!(benches, benchmark_conversions, benchmark_scoring);
criterion_main!(benches);
