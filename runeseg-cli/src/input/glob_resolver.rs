//! File pattern resolution using glob

use super::{InputSource, STDIN_PATTERN};
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Resolve file patterns to input sources, `-` standing for stdin
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            stdin = true;
            continue;
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !stdin {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }
    log::debug!("Resolved {} input(s)", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.bin"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let exact = temp_dir.path().join("a.txt").display().to_string();

        let sources = resolve_patterns(&[pattern, exact]).unwrap();
        assert_eq!(
            sources,
            vec![
                InputSource::File(temp_dir.path().join("a.txt")),
                InputSource::File(temp_dir.path().join("b.txt")),
            ]
        );
    }

    #[test]
    fn test_stdin_pattern() {
        let sources = resolve_patterns(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
    }

    #[test]
    fn test_no_matches() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir.path().join("*.none").display().to_string();
        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern: ["));
    }
}
