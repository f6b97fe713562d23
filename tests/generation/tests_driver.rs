#![allow(clippy::unwrap_used)]

use rstest::rstest;
use walkdir::WalkDir;

use stubgen::{FsSink, GenerateOptions, MemorySink, generate_all};

use crate::helpers::shop_fixture::shop;

#[rstest]
#[case(None)]
#[case(Some(1))]
#[case(Some(8))]
fn test_run_writes_every_artifact(#[case] workers: Option<usize>) {
    let (graph, db) = shop();
    let options = GenerateOptions {
        worker_count: workers,
        ..GenerateOptions::default()
    };
    let sink = MemorySink::new();

    let summary = generate_all(&graph, &db, &options, &sink).unwrap();
    assert_eq!(summary.packages, 2);
    assert_eq!(summary.artifacts, 6);
    assert_eq!(
        sink.names(),
        vec![
            "Shop_Cart_Package.deps.json",
            "Shop_Cart_Package.rbi",
            "Shop_Cart_Package.test.deps.json",
            "Shop_Cart_Package.test.rbi",
            "Shop_Core_Package.deps.json",
            "Shop_Core_Package.rbi",
        ]
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let (graph, db) = shop();
    let options = GenerateOptions::default().with_workers(4);

    let first = MemorySink::new();
    generate_all(&graph, &db, &options, &first).unwrap();
    let second = MemorySink::new();
    generate_all(&graph, &db, &options, &second).unwrap();

    assert_eq!(first.into_files(), second.into_files());
}

#[test]
fn test_filesystem_sink_matches_memory_sink() {
    let (graph, db) = shop();
    let options = GenerateOptions::default();
    let dir = tempfile::tempdir().unwrap();
    let fs_sink = FsSink::new(dir.path()).unwrap();
    let memory = MemorySink::new();

    let summary = generate_all(&graph, &db, &options, &fs_sink).unwrap();
    generate_all(&graph, &db, &options, &memory).unwrap();

    let mut written = 0;
    for entry in WalkDir::new(dir.path()).min_depth(1) {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().to_string();
        let contents = std::fs::read_to_string(entry.path()).unwrap();
        assert_eq!(Some(contents), memory.get(&name), "mismatch in {}", name);
        written += 1;
    }
    assert_eq!(written, summary.artifacts);
}
