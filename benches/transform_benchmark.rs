use criterion::{Criterion, black_box, criterion_group, criterion_main};
use promptcraft_core::prompts::catalog;
use promptcraft_core::{Platform, PromptRequest, transform};

/// Benchmark every platform rule with its default option
fn benchmark_transforms(c: &mut Criterion) {
    let idea = "a photo of a man eating spinach on a ship, golden hour, wide shot";
    let mut group = c.benchmark_group("transform");

    for platform in Platform::ALL {
        let request = PromptRequest::new(platform, idea, catalog::default_option(platform));
        group.bench_function(platform.as_str(), |b| {
            b.iter(|| transform(black_box(&request)))
        });
    }

    group.finish();
}

/// Long inputs stress the formatting allocations
fn benchmark_long_input(c: &mut Criterion) {
    let long_text = "describe the scene in detail ".repeat(400);
    let request = PromptRequest::new(Platform::Claude, long_text, "json");

    c.bench_function("claude_json_long_input", |b| {
        b.iter(|| transform(black_box(&request)))
    });
}

criterion_group!(benches, benchmark_transforms, benchmark_long_input);
criterion_main!(benches);
