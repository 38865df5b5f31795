//! File fixtures for copy tests

use crate::TestDir;
use anyhow::Result;
use rand::RngCore;
use std::path::PathBuf;

/// Deterministic patterned bytes, useful for verifying content integrity
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Create a file of the given size filled with a deterministic pattern
pub fn create_patterned_file(test_dir: &TestDir, name: &str, len: usize) -> Result<PathBuf> {
    test_dir.create_file(name, &patterned_bytes(len))
}

/// Create a file of the given size filled with random bytes
pub fn create_random_file(test_dir: &TestDir, name: &str, len: usize) -> Result<PathBuf> {
    let mut content = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut content);
    test_dir.create_file(name, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterned_bytes_are_deterministic() {
        assert_eq!(patterned_bytes(16), patterned_bytes(16));
        assert_eq!(patterned_bytes(300)[251], 0);
    }

    #[test]
    fn random_file_has_requested_size() {
        let test_dir = TestDir::new().unwrap();
        let path = create_random_file(&test_dir, "blob.bin", 4096).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 4096);
    }
}
