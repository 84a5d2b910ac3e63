use barplot::core::{LayoutConfig, SampleSource, UniformSampleSource, layout};
use barplot::render::{BarFrame, Renderer, SvgRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_layout_10k(c: &mut Criterion) {
    let config = LayoutConfig::default().with_canvas_size(20_000.0, 600.0);
    let samples = UniformSampleSource::new(10_000, 600.0, 11)
        .expect("valid source")
        .next_samples()
        .expect("samples");

    c.bench_function("layout_10k", |b| {
        b.iter(|| {
            let _ = layout(black_box(&samples), black_box(&config))
                .expect("layout should succeed");
        })
    });
}

fn bench_svg_render_1k(c: &mut Criterion) {
    let config = LayoutConfig::default().with_canvas_size(4_000.0, 600.0);
    let samples = UniformSampleSource::new(1_000, 600.0, 13)
        .expect("valid source")
        .next_samples()
        .expect("samples");
    let frame = BarFrame::from_layout(&config, layout(&samples, &config).expect("layout"));
    let mut renderer = SvgRenderer::new();

    c.bench_function("svg_render_1k", |b| {
        b.iter(|| {
            renderer
                .render(black_box(&frame))
                .expect("render should succeed");
        })
    });
}

criterion_group!(benches, bench_layout_10k, bench_svg_render_1k);
criterion_main!(benches);
