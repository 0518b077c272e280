//! Encoding throughput on full-size images.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree_encoder::{encode, source::parse_pbm, Grid};

const WIDTH: usize = 1024;
const HEIGHT: usize = 768;

fn grid_from(f: impl Fn(usize, usize) -> bool) -> Grid {
    let pixels = (0..WIDTH * HEIGHT).map(|i| f(i / WIDTH, i % WIDTH)).collect();
    Grid::new(WIDTH, HEIGHT, pixels).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let uniform = grid_from(|_, _| false);
    let checker = grid_from(|r, c| (r + c) % 2 == 1);
    let disc = grid_from(|r, c| {
        let (dr, dc) = (r as i64 - 384, c as i64 - 512);
        dr * dr + dc * dc < 300 * 300
    });

    let mut group = c.benchmark_group("encode");
    group.bench_function("uniform", |b| b.iter(|| encode(black_box(&uniform))));
    group.bench_function("checkerboard", |b| b.iter(|| encode(black_box(&checker))));
    group.bench_function("disc", |b| b.iter(|| encode(black_box(&disc))));
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut text = format!("P1\n{WIDTH} {HEIGHT}\n");
    for r in 0..HEIGHT {
        let row: Vec<&str> = (0..WIDTH)
            .map(|c| if (r / 16 + c / 16) % 2 == 0 { "0" } else { "1" })
            .collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }

    c.bench_function("parse_pbm", |b| b.iter(|| parse_pbm(black_box(&text)).unwrap()));
}

criterion_group!(benches, bench_encode, bench_parse);
criterion_main!(benches);
