mod common;

use anyhow::Result;
use common::{TestMonitor, sorted_lines};
use filecheck::config::StateConfig;
use filecheck::storage::{SnapshotIdentity, SnapshotStore};
use std::fs;
use std::path::PathBuf;

fn state_file(monitor: &TestMonitor, pattern: &str) -> PathBuf {
    SnapshotStore::new(monitor.state_dir(), &StateConfig::default())
        .path_for(&SnapshotIdentity::new(&monitor.watched(), pattern))
}

/// Corrupt state is treated like a first run and then replaced.
#[test]
fn test_state_corruption_recovery() -> Result<()> {
    let corruptions: [&[u8]; 5] = [
        b"",
        b"   \n\t",
        b"[{\"filename\":\"a.txt\",",
        b"{\"not\":\"an array\"}",
        &[0xff, 0xfe, 0x00, 0x13],
    ];

    for corrupt in corruptions {
        let monitor = TestMonitor::new()?;
        monitor.write_file("a.txt", 1_000)?;
        monitor.check("*.txt")?;

        fs::write(state_file(&monitor, "*.txt"), corrupt)?;

        let recovered = monitor.check("*.txt")?;
        assert!(recovered.status.success(), "corruption {corrupt:?}");
        assert!(recovered.stdout.is_empty(), "corruption {corrupt:?}");

        let next = monitor.check("*.txt")?;
        assert_eq!(sorted_lines(&next.stdout), ["1470:File Status:9|1|a.txt|"]);
    }

    Ok(())
}

/// A state document written by hand in the documented layout is honored.
#[test]
fn test_handwritten_state_is_compared() -> Result<()> {
    let monitor = TestMonitor::new()?;
    monitor.write_file("a.txt", 1_000)?;
    monitor.write_file("b.txt", 2_000)?;

    fs::create_dir_all(monitor.state_dir())?;
    fs::write(
        state_file(&monitor, "*.txt"),
        r#"[{"filename":"a.txt","lastModificationDate":"1000000","timestamp":"2015-04-13T09:30:00.000Z","object":"a.txt"},{"filename":"b.txt","lastModificationDate":"1","timestamp":"2015-04-13T09:30:00.000Z","object":"b.txt"}]"#,
    )?;

    let output = monitor.check("*.txt")?;

    assert_eq!(
        sorted_lines(&output.stdout),
        ["1470:File Status:9|0|b.txt|", "1470:File Status:9|1|a.txt|"]
    );
    Ok(())
}

/// The stored document reflects the latest capture.
#[test]
fn test_state_document_is_rewritten_each_run() -> Result<()> {
    let monitor = TestMonitor::new()?;
    monitor.write_file("a.txt", 1_000)?;
    monitor.check("*.txt")?;

    let path = state_file(&monitor, "*.txt");
    let first: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(first[0]["filename"], "a.txt");
    assert_eq!(first[0]["object"], "a.txt");
    assert_eq!(first[0]["lastModificationDate"], "1000000");

    monitor.write_file("a.txt", 5_000)?;
    monitor.write_file("b.txt", 6_000)?;
    monitor.check("*.txt")?;

    let second: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let entries = second.as_array().expect("state is an array");
    assert_eq!(entries.len(), 2);
    let a = entries
        .iter()
        .find(|e| e["filename"] == "a.txt")
        .expect("a.txt is stored");
    assert_eq!(a["lastModificationDate"], "5000000");

    Ok(())
}

/// Temporary files used for the atomic replace do not linger.
#[test]
fn test_no_temporary_files_left_behind() -> Result<()> {
    let monitor = TestMonitor::new()?;
    monitor.write_file("a.txt", 1_000)?;

    for _ in 0..3 {
        monitor.check("*.txt")?;
    }

    let entries: Vec<_> = fs::read_dir(monitor.state_dir())?.collect::<Result<_, _>>()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path(), state_file(&monitor, "*.txt"));
    Ok(())
}
