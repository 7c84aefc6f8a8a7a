use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terrain_pathfinding::prelude::*;

// a 50x50 Grid with a few staggered walls
fn grid() -> NodeGrid {
    NodeGrid::build(
        GridConfig::default(),
        |x, z| (x * 0.2).sin() * (z * 0.2).cos(),
        |[x, _, z]| {
            let (x, z) = (x as usize, z as usize);
            !(x % 10 == 5 && (z + x) % 40 > 6)
        },
    )
}

fn bench_frontiers(c: &mut Criterion) {
    let grid = grid();
    for (name, frontier) in [("list", FrontierKind::List), ("heap", FrontierKind::Heap)] {
        let config = SearchConfig::default().with_frontier(frontier);
        let mut comparator = Comparator::new(grid.clone(), config);
        c.bench_function(&format!("compare 50x50 {}", name), |b| {
            b.iter(|| comparator.compare_cells(black_box((0, 0)), black_box((49, 49))))
        });
    }
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build 50x50", |b| b.iter(grid));
}

criterion_group!(benches, bench_frontiers, bench_build);
criterion_main!(benches);
