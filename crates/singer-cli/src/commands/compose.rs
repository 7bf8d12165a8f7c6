//! Compose command implementation
//!
//! Runs the composer flow on a text prompt: song metadata generation,
//! sung performance synthesis, and a WAV export named after the title.

use anyhow::Result;
use colored::Colorize;
use singer_remote::GeminiClient;
use singer_studio::{ExportBundle, StudioMode, StudioResult, StudioSession};
use std::process::ExitCode;
use std::sync::Arc;

use super::json_output::{error_codes, ComposeOutput, JsonError, RenderResult};
use super::report;
use super::studio::{flow_runtime, offline_session, write_bundle};

/// Run the compose command
///
/// # Arguments
/// * `prompt` - Description of the song to compose
/// * `output_dir` - Directory the export is written to (default: current)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(prompt: &str, output_dir: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(prompt, output_dir)
    } else {
        run_human(prompt, output_dir)
    }
}

/// Run compose with human-readable (colored) output
fn run_human(prompt: &str, output_dir: Option<&str>) -> Result<ExitCode> {
    println!("{}", "Composing:".cyan().bold());
    println!("  {} {}", "Prompt:".dimmed(), prompt);

    let client = Arc::new(GeminiClient::from_env()?);
    let mut session = offline_session(client);
    let rt = flow_runtime()?;

    let bundle = match rt.block_on(run_flow(&mut session, prompt)) {
        Ok(bundle) => bundle,
        Err(err) => {
            log::debug!("compose failed: {err}");
            eprintln!("{} {}", "error:".red().bold(), err.user_message());
            return Ok(ExitCode::from(1));
        }
    };

    if let Some(song) = session.song() {
        report::print_song(song);
    }

    let path = write_bundle(&bundle, output_dir)?;
    report::print_render(&path, &bundle.wav);
    Ok(ExitCode::SUCCESS)
}

/// Run compose with machine-readable JSON output
fn run_json(prompt: &str, output_dir: Option<&str>) -> Result<ExitCode> {
    let client = Arc::new(GeminiClient::from_env()?);
    let mut session = offline_session(client);
    let rt = flow_runtime()?;

    let output = match rt.block_on(run_flow(&mut session, prompt)) {
        Ok(bundle) => match write_bundle(&bundle, output_dir) {
            Ok(path) => ComposeOutput::success(
                session.song().cloned(),
                RenderResult::new(&path, &bundle.wav),
            ),
            Err(err) => {
                ComposeOutput::failure(JsonError::new(error_codes::FILE_WRITE, err.to_string()))
            }
        },
        Err(err) => ComposeOutput::failure(JsonError::from_studio(&err)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Switches the session to composer mode and drives the flow through export.
async fn run_flow(session: &mut StudioSession, prompt: &str) -> StudioResult<ExportBundle> {
    session.set_mode(StudioMode::Composer)?;
    session.compose(prompt).await?;
    session.export()
}
