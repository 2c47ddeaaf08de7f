use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use filecheck::MonitorContext;
use filecheck::cli::MonitorRequest;
use filecheck::commands::check;
use filecheck::config::MonitorConfig;
use filecheck::detector;
use filecheck::pattern::FilenamePattern;
use filecheck::scanner::DirectorySnapshotter;
use filecheck::storage::{FileObservation, Snapshot};
use std::fs;
use std::hint::black_box;
use std::io;
use tempfile::tempdir;

fn build_snapshot(count: usize, offset: i64) -> Snapshot {
    (0..count)
        .map(|i| {
            let bump = if i % 10 == 0 { offset } else { 0 };
            let millis = i as i64 + bump;
            FileObservation::new(
                format!("file_{i}.log"),
                millis,
                "2015-04-13T09:30:00.000Z".to_string(),
            )
        })
        .collect()
}

fn create_test_files_in_dir(dir: &std::path::Path, count: usize) {
    for i in 0..count {
        fs::write(dir.join(format!("file_{i}.log")), "line\n").unwrap();
        fs::write(dir.join(format!("file_{i}.tmp")), "skip\n").unwrap();
    }
}

fn benchmark_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    for count in &[10, 1_000, 10_000] {
        let previous = build_snapshot(*count, 0);
        let current = build_snapshot(*count, 1);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                detector::detect(
                    black_box(Some(&previous)),
                    black_box(&current),
                    "1470:File Status:9",
                )
            });
        });
    }

    group.finish();
}

fn benchmark_pattern_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_matching");
    let names: Vec<String> = (0..1_000)
        .map(|i| format!("service-{i}.{}", if i % 3 == 0 { "log" } else { "gz" }))
        .collect();

    for raw in ["*.log", "service-*.log", "service-500.log", "*-*-*"] {
        let pattern = FilenamePattern::new(raw).unwrap();
        group.bench_function(raw, |b| {
            b.iter(|| names.iter().filter(|n| pattern.matches(black_box(n))).count());
        });
    }

    group.finish();
}

fn benchmark_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");

    for count in &[10, 100, 1_000] {
        let dir = tempdir().unwrap();
        create_test_files_in_dir(dir.path(), *count);
        let snapshotter = DirectorySnapshotter::new(FilenamePattern::new("*.log").unwrap());

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| snapshotter.capture(black_box(dir.path())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for count in &[10, 100, 1_000] {
        let dir = tempdir().unwrap();
        let watched = dir.path().join("watched");
        fs::create_dir_all(&watched).unwrap();
        create_test_files_in_dir(&watched, *count);

        let ctx = MonitorContext::new_explicit(dir.path().join("state"), MonitorConfig::default());
        let request = MonitorRequest::new("1", watched.clone(), "*.log");
        check::execute(&ctx, &request, &mut io::sink()).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| check::execute(&ctx, &request, &mut io::sink()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_detect,
    benchmark_pattern_matching,
    benchmark_capture,
    benchmark_full_run
);
criterion_main!(benches);
