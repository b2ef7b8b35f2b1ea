use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tile_road_map::{
    demo, load_map, save_map, LoadPolicy, PathFinder, Position, SaveStyle, TypeRegistry,
};

fn bench_json_loading(c: &mut Criterion) {
    let content = include_str!("../tests/fixtures/grid_3x3.json");
    let registry = TypeRegistry::builtin();

    c.bench_function("json_load_grid_3x3", |b| {
        b.iter(|| {
            let map = load_map(black_box(content.as_bytes()), &registry, LoadPolicy::Lenient)
                .expect("JSON load failed");
            black_box(map.tile_count())
        })
    });

    let large = save_map(&demo::grid(100, 100), SaveStyle::Compact).expect("JSON save failed");
    c.bench_function("json_load_grid_100x100", |b| {
        b.iter(|| {
            let map = load_map(black_box(&large), &registry, LoadPolicy::Strict)
                .expect("JSON load failed");
            black_box(map.tile_count())
        })
    });
}

fn bench_json_saving(c: &mut Criterion) {
    let map = demo::grid(100, 100);

    c.bench_function("json_save_grid_100x100", |b| {
        b.iter(|| {
            let bytes = save_map(black_box(&map), SaveStyle::Compact).expect("JSON save failed");
            black_box(bytes.len())
        })
    });
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");

    for &size in &[10u32, 50, 100] {
        let map = demo::grid(size, size);
        let goal = Position::new((size - 1) as f64, (size - 1) as f64);

        group.bench_with_input(BenchmarkId::new("corner_to_corner", size), &map, |b, map| {
            let finder = PathFinder::new(map);
            b.iter(|| {
                let route = finder
                    .route(black_box(Position::new(0.0, 0.0)), black_box(goal))
                    .expect("route expected");
                black_box(route.hop_count())
            })
        });
    }

    group.finish();
}

fn bench_spatial_queries(c: &mut Criterion) {
    let mut map = demo::grid(100, 100);
    map.ensure_spatial_index();
    let query_points: Vec<Position> = (0..1024)
        .map(|i| Position::new((i % 100) as f64 + 0.37, ((i * 7) % 100) as f64 + 0.63))
        .collect();

    c.bench_function("nearest_tile_batch", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for point in &query_points {
                if map.nearest_tile(black_box(*point)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(
    core_benches,
    bench_json_loading,
    bench_json_saving,
    bench_routing,
    bench_spatial_queries
);
criterion_main!(core_benches);
