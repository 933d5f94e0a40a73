//! File boundary: everything the commands read or write goes through here.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Read a whole file into memory.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(bytes)
}

/// Write `content` verbatim, replacing any existing file.
pub fn write(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let content = content.as_ref();
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        write(&path, [0u8, 1, 255]).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), vec![0, 1, 255]);
    }

    #[test]
    fn test_read_missing_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");
        let err = read_bytes(&path).unwrap_err();
        assert!(err.to_string().contains("missing.bin"));
    }
}
