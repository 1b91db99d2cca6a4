//! # Scoring Benchmarks
//!
//! Performance benchmarks for podium-core scoring and ranking.
//!
//! Run with: `cargo bench -p podium-core`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use podium_core::{
    Evaluator, Points, ScoreSheet, Stage, Team, TeamNumber, eliminated_beyond, initial_groups,
    rank, season,
};
use std::hint::black_box;

/// A sheet with the observation mix of a mid-field attempt.
fn typical_sheet() -> ScoreSheet {
    let mut sheet = ScoreSheet::new();
    sheet.record("m01_unassisted", true);
    sheet.record("m01_crew_payload", true);
    sheet.record("m03_brick_ejected", true);
    sheet.record("m05_gas_sample_in_base", true);
    sheet.record("m08_pointer", "white");
    sheet.record("m12_satellites", "two");
    sheet.record("m15_lander", "in_base");
    sheet.set_infractions(1);
    sheet
}

/// A sheet achieving every mission at its best outcome.
fn perfect_sheet() -> ScoreSheet {
    let mut sheet = ScoreSheet::new();
    for flag in [
        "m01_unassisted",
        "m01_crew_payload",
        "m01_supply_payload",
        "m01_vehicle_payload",
        "m03_brick_ejected",
        "m03_brick_delivered",
        "m04_crossing_complete",
        "m04_gate_flattened",
        "m05_all_samples_freed",
        "m05_gas_sample_in_circle",
        "m05_gas_sample_in_base",
        "m05_water_sample_supported",
        "m06_cone_in_base",
        "m06_tube_docked_west",
        "m06_module_docked_east",
    ] {
        sheet.record(flag, true);
    }
    for (clause, code) in [
        ("m02_panel", "shared_field"),
        ("m07_rescue", "complete"),
        ("m08_pointer", "orange"),
        ("m09_bar_lifted", "yes"),
        ("m10_weight_dropped", "yes"),
        ("m11_craft_held", "yes"),
        ("m12_satellites", "three"),
        ("m13_dial", "orange"),
        ("m15_lander", "in_target_circle"),
    ] {
        sheet.record(clause, code);
    }
    sheet.set_infractions(2);
    sheet
}

/// A field of `size` teams with three interleaved round-1 attempts each.
fn contested_field(size: u32) -> Vec<Team> {
    (1..=size)
        .map(|number| {
            let mut team = Team::new(TeamNumber::new(number), format!("Team {number}"));
            for attempt in 0..3u32 {
                let points = i64::from((number * 7 + attempt * 13) % 100);
                team.scores
                    .record(Stage::Round1, Points::new(points))
                    .expect("attempt slot");
            }
            team
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let book = season::rulebook();
    let mut group = c.benchmark_group("evaluate");

    let sheets = [
        ("empty", ScoreSheet::new()),
        ("typical", typical_sheet()),
        ("perfect", perfect_sheet()),
    ];
    for (label, sheet) in &sheets {
        group.bench_with_input(BenchmarkId::from_parameter(label), sheet, |b, sheet| {
            b.iter(|| black_box(Evaluator::evaluate(&book, sheet)));
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [16, 64, 256].iter() {
        let field = contested_field(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &field, |b, field| {
            b.iter(|| black_box(rank(field.clone(), Stage::Round1)));
        });
    }

    group.finish();
}

fn bench_elimination(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination");

    for size in [16, 64, 256].iter() {
        let ranked = rank(contested_field(*size), Stage::Round1);

        group.bench_with_input(BenchmarkId::new("cut_to_six", size), &ranked, |b, ranked| {
            b.iter(|| black_box(eliminated_beyond(ranked, 6)));
        });

        group.bench_with_input(
            BenchmarkId::new("opening_groups", size),
            &ranked,
            |b, ranked| {
                b.iter(|| black_box(initial_groups(ranked)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_rank, bench_elimination);

criterion_main!(benches);
