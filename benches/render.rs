//! Benchmarks for painting the digit frame.
//!
//! Every tick repaints the whole frame from scratch, so this measures the
//! per-second cost of the renderer.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ttyclock::{
    render::{draw_time, FrameStyle},
    test_support::MemoryScreen,
    App, ColorScheme, Mode, Options, Time, Window,
};

fn bench_draw_time(c: &mut Criterion) {
    let style = FrameStyle {
        scheme: ColorScheme::new(2),
        blink: false,
        show_seconds: true,
        even_second: false,
    };
    let time = Time::from_hms(23, 58, 47, Mode::Clock);
    let mut frame = Window::new(54, 7);

    c.bench_function("draw_time", |b| {
        b.iter(|| {
            frame.erase();
            draw_time(&mut frame, black_box(&time), &style).unwrap();
        })
    });
}

fn bench_full_redraw(c: &mut Criterion) {
    let start = Time::parse_partial("99:59:59").unwrap();
    let mut app = App::timer(Options::default(), start).unwrap();
    let mut screen = MemoryScreen::new(50, 200);
    app.start(&mut screen).unwrap();
    let mut even = false;

    c.bench_function("app_redraw", |b| {
        b.iter(|| {
            even = !even;
            app.redraw(&mut screen, black_box(even)).unwrap();
        })
    });
}

criterion_group!(benches, bench_draw_time, bench_full_redraw);
criterion_main!(benches);
