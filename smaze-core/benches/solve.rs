use criterion::{black_box, criterion_group, criterion_main, Criterion};

use smaze_core::{
    board::{parse, solve},
    Maze,
};

fn corridor(width: usize) -> Maze {
    let mut input = format!("{} 1\n0 0\n{} 0\n", width, width - 1);
    input.push('L');
    input.push_str(&"_".repeat(width - 1));
    input.push('\n');

    parse(&input).unwrap()
}

fn open_grid(width: usize, height: usize) -> Maze {
    let mut input = format!("{} {}\n0 0\n{} {}\n", width, height, width - 1, height - 1);
    for y in 0..height {
        if y + 1 == height {
            input.push('L');
            input.push_str(&"_".repeat(width - 1));
        } else {
            input.push('|');
            input.push_str(&"-".repeat(width - 1));
        }
        input.push('\n');
    }

    parse(&input).unwrap()
}

pub fn solve_corridor(c: &mut Criterion) {
    let maze = corridor(1000);

    c.bench_function("solve_corridor_1000", |b| {
        b.iter(|| solve(black_box(&maze)).unwrap())
    });
}

pub fn solve_open_grid(c: &mut Criterion) {
    let maze = open_grid(100, 100);

    c.bench_function("solve_open_100x100", |b| {
        b.iter(|| solve(black_box(&maze)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(20); targets = solve_corridor, solve_open_grid}
criterion_main!(benches);
