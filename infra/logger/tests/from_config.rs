use geodex_domain::config::{LogRotation, LoggingConfig};
use geodex_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_with_path_writes_hourly_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "info".to_owned(),
        env_filter: None,
        path: Some(log_dir.clone()),
        json: true,
        rotation: LogRotation::Hourly,
        max_files: 2,
    };

    let logger = Logger::from_config("geodex-from-config", &config, Some(LevelFilter::DEBUG))?;
    assert!(logger.guard().is_some());

    tracing::debug!(code = "FR", "lookup");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    // Hourly files are named `<name>.<YYYY-MM-DD-HH>.log`.
    let file_name = log_file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let stamp = file_name
        .strip_prefix("geodex-from-config.")
        .and_then(|rest| rest.strip_suffix(".log"))
        .expect("prefix and suffix");
    assert_eq!(stamp.split('-').count(), 4, "expected an hourly stamp, got {file_name}");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|l| l.contains("lookup")).expect("debug line written");
    assert!(line.starts_with('{'), "expected JSON, got {line}");
    assert!(line.contains("\"code\":\"FR\""));

    Ok(())
}
