//! Common assertions for ferry tests

use anyhow::Result;
use std::path::Path;

/// Asserts that two files have byte-identical content
pub fn assert_files_equal(expected: &Path, actual: &Path) -> Result<()> {
    let expected_content = std::fs::read(expected)?;
    let actual_content = std::fs::read(actual)?;

    assert_eq!(
        expected_content.len(),
        actual_content.len(),
        "Size mismatch: {:?} is {} bytes, {:?} is {} bytes",
        expected,
        expected_content.len(),
        actual,
        actual_content.len()
    );
    assert_eq!(
        expected_content, actual_content,
        "Content mismatch between {:?} and {:?}",
        expected, actual
    );

    Ok(())
}

/// Asserts that two files carry the same modification time
pub fn assert_mtime_equal(expected: &Path, actual: &Path) -> Result<()> {
    let expected_mtime = filetime::FileTime::from_last_modification_time(&std::fs::metadata(expected)?);
    let actual_mtime = filetime::FileTime::from_last_modification_time(&std::fs::metadata(actual)?);

    // Compare at second granularity; some filesystems truncate sub-second times
    assert_eq!(
        expected_mtime.unix_seconds(),
        actual_mtime.unix_seconds(),
        "Modification time mismatch for {:?}: expected {}, got {}",
        actual,
        expected_mtime,
        actual_mtime
    );

    Ok(())
}

/// Asserts that a file has specific permission bits (Unix only)
#[cfg(unix)]
pub fn assert_permissions(path: &Path, expected: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode() & 0o777;
    assert_eq!(
        mode, expected,
        "Permission mismatch for {:?}: expected {:o}, got {:o}",
        path, expected, mode
    );

    Ok(())
}
