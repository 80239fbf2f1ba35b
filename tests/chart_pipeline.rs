//! End-to-end flow: size a directory, then lay out both chart modes from
//! the same items.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use dirchart::{compute_child_sizes, layout_bars, layout_pie, BarOptions, SizedItem};

const MIB: u64 = 1024 * 1024;

fn write_file(path: &Path, len: usize) {
    fs::write(path, vec![0u8; len]).unwrap();
}

#[test]
fn test_two_mib_file_and_one_mib_subdirectory() {
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("sub");
    let locked = sub.join("locked");
    fs::create_dir_all(&locked).unwrap();

    write_file(&temp.path().join("a.txt"), 2 * MIB as usize);
    write_file(&sub.join("b.txt"), MIB as usize);
    write_file(&locked.join("c.txt"), MIB as usize);

    #[cfg(unix)]
    let denied = {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Permission bits do not stop a root process; branch on what this
        // process can actually see.
        fs::read_dir(&locked).is_err()
    };
    #[cfg(not(unix))]
    let denied = false;

    let result = compute_child_sizes(temp.path());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let usage = result.unwrap();

    assert_eq!(usage.files.len(), 1);
    assert_eq!(usage.files[0].name, "a.txt");
    assert_eq!(usage.files[0].size, 2 * MIB);
    assert_eq!(usage.directories.len(), 1);
    assert_eq!(usage.directories[0].name, "sub");

    let items = usage.items();
    assert_eq!(items.len(), 2);
    // Directories precede files in the chart input.
    assert_eq!(items[0].label(), "sub");
    assert_eq!(items[1].label(), "a.txt");

    let bars = layout_bars(&items, &BarOptions::new(400.0));
    let pie = layout_pie(&items);

    if denied {
        // Only b.txt is reachable under sub.
        assert_eq!(usage.directories[0].size, MIB);

        assert_eq!(bars.segments[0].length_fraction, 0.5);
        assert_eq!(bars.segments[1].length_fraction, 1.0);
        assert_eq!(bars.segments[0].label, "sub, 1 MB");
        assert_eq!(bars.segments[1].label, "a.txt, 2 MB");

        assert_eq!(pie[0].start_angle_deg, 0.0);
        assert!((pie[0].sweep_angle_deg - 120.0).abs() < 1e-9);
        assert!((pie[1].start_angle_deg - 120.0).abs() < 1e-9);
        assert!((pie[1].sweep_angle_deg - 240.0).abs() < 1e-9);
    } else {
        // Nothing was actually blocked, so sub holds both megabytes.
        assert_eq!(usage.directories[0].size, 2 * MIB);

        assert_eq!(bars.segments[0].length_fraction, 1.0);
        assert_eq!(bars.segments[1].length_fraction, 1.0);
        assert_eq!(pie[0].sweep_angle_deg, 180.0);
        assert_eq!(pie[1].sweep_angle_deg, 180.0);
    }

    assert_eq!(bars.content_height, 2.0 * 30.0 + 10.0);
}

#[test]
fn test_unchanged_tree_is_idempotent() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("docs")).unwrap();
    write_file(&temp.path().join("docs").join("report.bin"), 4096);
    write_file(&temp.path().join("notes.txt"), 64);

    let first = compute_child_sizes(temp.path()).unwrap();
    let second = compute_child_sizes(temp.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_items_feed_both_layouts_consistently() {
    let temp = TempDir::new().unwrap();
    for (name, len) in [("a.bin", 1000), ("b.bin", 3000), ("c.bin", 6000)] {
        write_file(&temp.path().join(name), len);
    }
    fs::create_dir(temp.path().join("empty")).unwrap();

    let usage = compute_child_sizes(temp.path()).unwrap();
    let items: Vec<SizedItem> = usage.items();

    let bars = layout_bars(&items, &BarOptions::new(800.0));
    let pie = layout_pie(&items);

    assert_eq!(bars.segments.len(), items.len());
    assert_eq!(pie.len(), items.len());

    // Same order and same labels in both chart modes.
    for (segment, sector) in bars.segments.iter().zip(&pie) {
        assert_eq!(segment.label, sector.label);
    }
    for (i, segment) in bars.segments.iter().enumerate() {
        assert_eq!(segment.order, i);
    }

    let sweep_sum: f64 = pie.iter().map(|s| s.sweep_angle_deg).sum();
    assert!((sweep_sum - 360.0).abs() < 1e-6 * pie.len() as f64);

    let max_fraction = bars
        .segments
        .iter()
        .map(|s| s.length_fraction)
        .fold(0.0, f64::max);
    assert_eq!(max_fraction, 1.0);
}
