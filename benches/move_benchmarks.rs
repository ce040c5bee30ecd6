use WarehouseEngine::core::{Direction, WarehouseGrid, attempt_move};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const PUZZLES: &[(&str, &str)] = &[
    ("puzzle_0", r#"
    ####
    #@$#
    ####
    "#),
    ("puzzle_1", r#"
    ######
    #@$ .#
    ######
    "#),
    ("puzzle_2", r#"
    ######
    #@$  #
    # $. #
    # .  #
    ######
    "#),
    ("puzzle_3", r#"
    ########
    # @$  .#
    # $  $ #
    # .# $ #
    #..#   #
    ########
    "#),
    ("puzzle_4", r#"
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
"#),
];

const WALK: &[Direction] = &[
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

pub fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_level");

    for &(puzzle_name, puzzle) in PUZZLES {
        group.bench_with_input(
            BenchmarkId::new("parse", puzzle_name),
            &puzzle,
            |b, &puzzle| {
                b.iter(|| WarehouseGrid::parse(black_box(puzzle), 0).unwrap());
            },
        );
    }

    group.finish();
}

pub fn bench_attempt_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("attempt_move");

    for &(puzzle_name, puzzle) in PUZZLES {
        group.bench_with_input(
            BenchmarkId::new("walk_cycle", puzzle_name),
            &puzzle,
            |b, &puzzle| {
                b.iter_with_setup(
                    || WarehouseGrid::parse(puzzle, 0).unwrap(),
                    |mut grid| {
                        for &direction in WALK {
                            black_box(attempt_move(&mut grid, direction));
                        }
                        grid
                    },
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_attempt_move);
criterion_main!(benches);
