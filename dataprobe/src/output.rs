//! Report output.
//!
//! Reports go to a file when a path is given, otherwise to stdout. Logs
//! stay on stderr so stdout can be piped.

use std::path::Path;

use dataprobe_core::{DataProbeError, Result};
use tokio::io::AsyncWriteExt;

/// Writes rendered report content to `path`, or stdout when `None`.
pub async fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => save_report(content, path).await,
        None => print_report(content).await,
    }
}

/// Saves report content to a file.
pub async fn save_report(content: &str, output_path: &Path) -> Result<()> {
    tokio::fs::write(output_path, content)
        .await
        .map_err(|e| DataProbeError::Io {
            context: format!("Failed to write to {}", output_path.display()),
            source: e,
        })?;
    Ok(())
}

async fn print_report(content: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let write = async {
        stdout.write_all(content.as_bytes()).await?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await
    };
    write
        .await
        .map_err(|e| DataProbeError::io("Failed to write to stdout", e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_output_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_output("{\"ok\": true}", Some(&path)).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"ok\": true}");
    }

    #[tokio::test]
    async fn test_output_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.json");

        let err = save_report("{}", &path).await.unwrap_err();
        assert!(matches!(err, DataProbeError::Io { .. }));
        assert!(err.to_string().contains("Failed to write to"));
    }

    #[tokio::test]
    async fn test_output_to_stdout() {
        write_output("report", None).await.unwrap();
    }
}
