//! Filename validation
//!
//! Checks names used for files written into the downloads directory.

use crate::error::StorageError;

/// Accept a bare filename, rejecting anything that could leave the target directory
pub fn sanitize_filename(filename: &str) -> Result<String, StorageError> {
    let trimmed = filename.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed.contains("..")
        || trimmed.contains(['/', '\\', '\0'])
    {
        return Err(StorageError::InvalidFilename(filename.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert_eq!(sanitize_filename("tickets_rust.txt").unwrap(), "tickets_rust.txt");
        assert_eq!(sanitize_filename("  exam.txt ").unwrap(), "exam.txt");
    }

    #[test]
    fn test_rejects_traversal_and_separators() {
        for name in ["", "  ", ".", "../secret", "a/b.txt", "a\\b.txt", "x..txt"] {
            assert!(sanitize_filename(name).is_err(), "accepted {:?}", name);
        }
    }
}
