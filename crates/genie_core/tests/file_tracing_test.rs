//! File logging for the terminal front end.

use genie_core::init_file_tracing;

#[test]
fn file_tracing_flushes_when_guard_drops() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("logs").join("genie.log");

    let guard = init_file_tracing(&path, "info").map_err(|e| anyhow::anyhow!("{}", e))?;
    tracing::info!("Wizard started");
    drop(guard);

    let contents = std::fs::read_to_string(&path)?;
    assert!(contents.contains("Wizard started"));
    Ok(())
}

#[test]
fn path_without_file_name_is_rejected() {
    assert!(init_file_tracing("/", "info").is_err());
}
