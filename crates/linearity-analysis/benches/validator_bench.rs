//! Criterion benchmarks for the validation pipeline.
//!
//! A full run over a realistic calibration series (5 levels, 3 replicates)
//! should stay comfortably under a millisecond; the sanitation and Dixon
//! paths are benchmarked separately because they run per request even when
//! the fit is skipped.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use linearity_analysis::handler::DataHandler;
use linearity_analysis::outliers::{detect, DixonConfig};
use linearity_analysis::validator::LinearityValidator;
use linearity_core::config::ValidationConfig;

/// Helper: a realistic HPLC calibration pair as raw JSON matrices.
fn raw_matrices() -> (Value, Value) {
    let analytical = json!([
        [88269.0, 86954.0, 88492.0],
        [99580.0, 101235.0, 100228.0],
        [108238.0, 109725.0, 110970.0],
        [118102.0, 119044.0, 118292.0],
        [129714.0, 129481.0, 130213.0]
    ]);
    let concentration = json!([
        [31800.0, 31680.0, 31600.0],
        [36080.0, 36600.0, 36150.0],
        [39641.0, 40108.0, 40190.0],
        [43564.0, 43800.0, 43776.0],
        [47680.0, 47800.0, 47341.0]
    ]);
    (analytical, concentration)
}

fn bench_handler(c: &mut Criterion) {
    let (analytical, concentration) = raw_matrices();
    c.bench_function("handler_sanitize_clean_matrices", |b| {
        b.iter(|| {
            DataHandler::new(black_box(&analytical), black_box(&concentration))
                .handle()
                .unwrap()
        })
    });

    let messy_analytical = json!([["0,188", " 0.192 ", null], ["0.349", "0.346", "0.348"]]);
    let messy_concentration = json!([["0,02", "0.02", "0.02"], ["0.04", "0.04", null]]);
    c.bench_function("handler_sanitize_messy_matrices", |b| {
        b.iter(|| {
            DataHandler::new(black_box(&messy_analytical), black_box(&messy_concentration))
                .handle()
                .unwrap()
        })
    });
}

fn bench_dixon(c: &mut Criterion) {
    let sample = [0.142, 0.153, 0.135, 0.002, 0.175];
    c.bench_function("dixon_detect_n5", |b| {
        b.iter(|| detect(black_box(&sample), DixonConfig::default()).unwrap())
    });

    let large: Vec<f64> = (1..=30).map(|i| i as f64 * 0.1).collect();
    c.bench_function("dixon_detect_n30", |b| {
        b.iter(|| detect(black_box(&large), DixonConfig::default()).unwrap())
    });
}

fn bench_full_validation(c: &mut Criterion) {
    let (analytical, concentration) = raw_matrices();
    let (signal, conc) = DataHandler::new(&analytical, &concentration)
        .handle()
        .unwrap();

    c.bench_function("full_validation_run", |b| {
        b.iter(|| {
            let mut validator = LinearityValidator::new(
                black_box(signal.clone()),
                black_box(conc.clone()),
                ValidationConfig::default(),
            )
            .unwrap();
            validator.validate()
        })
    });
}

criterion_group!(benches, bench_handler, bench_dixon, bench_full_validation);
criterion_main!(benches);
