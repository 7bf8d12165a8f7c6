//! Shared session plumbing for the flow commands.

use anyhow::{Context, Result};
use singer_remote::GeminiClient;
use singer_studio::{ExportBundle, MemoryBackend, PlaybackController, StudioSession};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builds a studio session backed by the in-memory audio backend.
///
/// Flow commands render to files, so no sound device is opened.
pub fn offline_session(client: Arc<GeminiClient>) -> StudioSession {
    let controller = PlaybackController::new(MemoryBackend::default());
    StudioSession::new(client.clone(), client, controller)
}

/// Builds the single-threaded runtime that drives one flow to completion.
pub fn flow_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")
}

/// Writes an export bundle under `output_dir` (current directory by default).
pub fn write_bundle(bundle: &ExportBundle, output_dir: Option<&str>) -> Result<PathBuf> {
    let dir = Path::new(output_dir.unwrap_or("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(&bundle.file_name);
    fs::write(&path, &bundle.wav.wav_data)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
