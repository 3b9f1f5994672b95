use crate::utils::error::{BylineError, Result};
use file_rotate::compression::Compression;
use file_rotate::suffix::{AppendTimestamp, FileLimit};
use file_rotate::{ContentLimit, FileRotate};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const DEFAULT_LOG_FILE: &str = "project.log";

/// 100 KB
pub const DEFAULT_MAX_BYTES: u64 = 100_000;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub path: PathBuf,
    pub max_bytes: u64,
    pub verbose: bool,
}

/// Append-only log file handed to `file-rotate`.
///
/// Once the active file has grown past `max_bytes` the next record goes to a
/// fresh file and the old one is kept as `<name>.<timestamp>`. Records are
/// never split across files.
pub fn rotating_file(path: &Path, max_bytes: u64) -> Result<FileRotate<AppendTimestamp>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // 先確認檔案可寫入，錯誤在啟動時回報
    OpenOptions::new().create(true).append(true).open(path)?;

    Ok(FileRotate::new(
        path,
        AppendTimestamp::default(FileLimit::MaxFiles(usize::MAX)),
        ContentLimit::BytesSurpassed(max_bytes as usize),
        Compression::None,
        #[cfg(unix)]
        None,
    ))
}

/// Plain-text INFO layer writing to a size-rotated file.
pub fn file_layer<S>(path: &Path, max_bytes: u64) -> Result<impl Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let writer = rotating_file(path, max_bytes)?;

    Ok(tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(writer))
        .with_filter(LevelFilter::INFO))
}

/// Subscriber with only the file layer, for scoped use with
/// `tracing::subscriber::with_default`.
pub fn file_subscriber(path: &Path, max_bytes: u64) -> Result<impl Subscriber + Send + Sync> {
    Ok(tracing_subscriber::registry().with(file_layer(path, max_bytes)?))
}

pub fn init_cli_logger(config: &LogConfig) -> Result<()> {
    let filter = if config.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("byline=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("byline=info"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact()
                .with_filter(filter),
        )
        .with(file_layer(&config.path, config.max_bytes)?)
        .try_init()
        .map_err(|e| BylineError::LoggerError {
            message: e.to_string(),
        })?;

    tracing::info!("Logger loaded.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn log_files(dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_appends_below_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.log");

        let mut writer = rotating_file(&path, 1_000).unwrap();
        writer.write_all(b"first\n").unwrap();
        writer.write_all(b"second\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(log_files(temp_dir.path()).len(), 1);
    }

    #[test]
    fn test_rotates_once_limit_is_passed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.log");

        let mut writer = rotating_file(&path, 16).unwrap();
        writer.write_all(b"0123456789\n").unwrap();
        writer.write_all(b"abcdefghij\n").unwrap();
        writer.write_all(b"klmnopqrst\n").unwrap();
        writer.flush().unwrap();

        let files = log_files(temp_dir.path());
        assert_eq!(files.len(), 2);
        // 新的檔案只有最後一筆
        assert_eq!(fs::read_to_string(&path).unwrap(), "klmnopqrst\n");

        let rotated = files.iter().find(|p| **p != path).unwrap();
        let name = rotated.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("project.log."));
        assert_eq!(
            fs::read_to_string(rotated).unwrap(),
            "0123456789\nabcdefghij\n"
        );
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("big.log");

        let mut writer = rotating_file(&path, 4).unwrap();
        writer.write_all(b"larger than the limit\n").unwrap();
        writer.flush().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_file_subscriber_writes_info_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.log");

        let subscriber = file_subscriber(&path, DEFAULT_MAX_BYTES).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::warn!("shown");
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("WARN"));
        assert!(content.contains("shown"));
        assert!(!content.contains("hidden"));
        assert!(!content.contains('\u{1b}'));
    }
}
