//! Produce command implementation
//!
//! Runs the full producer flow on a vocal take: analysis, backing track
//! synthesis, and an offline mixdown written as a WAV file.

use anyhow::Result;
use colored::Colorize;
use singer_audio::load_wav;
use singer_remote::GeminiClient;
use singer_studio::{EncodedClip, ExportBundle, StudioResult, StudioSession};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use super::json_output::{
    error_codes, warning_codes, JsonError, JsonWarning, ProduceOutput, RenderResult,
};
use super::report;
use super::studio::{flow_runtime, offline_session, write_bundle};

/// Run the produce command
///
/// # Arguments
/// * `input` - Path to the vocal take to produce from
/// * `output_dir` - Directory the export is written to (default: current)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output_dir: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input, output_dir)
    } else {
        run_human(input, output_dir)
    }
}

/// Run produce with human-readable (colored) output
fn run_human(input: &str, output_dir: Option<&str>) -> Result<ExitCode> {
    println!("{}", "Producing from vocal take:".cyan().bold());
    println!("  {} {}", "File:".dimmed(), input);

    let client = Arc::new(GeminiClient::from_env()?);
    let mut session = offline_session(client);
    let rt = flow_runtime()?;

    let bundle = match rt.block_on(run_flow(&mut session, input)) {
        Ok(bundle) => bundle,
        Err(err) => {
            log::debug!("produce failed: {err}");
            eprintln!("{} {}", "error:".red().bold(), err.user_message());
            return Ok(ExitCode::from(1));
        }
    };

    if let Some(analysis) = session.analysis() {
        report::print_analysis(analysis);
    }
    if let Some(warning) = session.last_error() {
        println!("\n{} {}", "warning:".yellow().bold(), warning);
    }

    let path = write_bundle(&bundle, output_dir)?;
    report::print_render(&path, &bundle.wav);
    Ok(ExitCode::SUCCESS)
}

/// Run produce with machine-readable JSON output
fn run_json(input: &str, output_dir: Option<&str>) -> Result<ExitCode> {
    let client = Arc::new(GeminiClient::from_env()?);
    let mut session = offline_session(client);
    let rt = flow_runtime()?;

    let output = match rt.block_on(run_flow(&mut session, input)) {
        Ok(bundle) => match write_bundle(&bundle, output_dir) {
            Ok(path) => {
                let warnings = session
                    .last_error()
                    .map(|msg| vec![JsonWarning::new(warning_codes::PARTIAL_FLOW, msg)])
                    .unwrap_or_default();
                ProduceOutput::success(
                    session.analysis().cloned(),
                    RenderResult::new(&path, &bundle.wav),
                    warnings,
                )
            }
            Err(err) => {
                ProduceOutput::failure(JsonError::new(error_codes::FILE_WRITE, err.to_string()))
            }
        },
        Err(err) => ProduceOutput::failure(JsonError::from_studio(&err)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Attaches the input clip and drives the flow through export.
///
/// A WAV input becomes the user track blended into the mixdown. Other
/// formats are analyzed from their encoded bytes, so only the generated
/// backing track can be rendered.
async fn run_flow(session: &mut StudioSession, input: &str) -> StudioResult<ExportBundle> {
    let path = Path::new(input);
    let clip = EncodedClip::from_file(path)?;

    match load_wav(path) {
        Ok(track) => session.attach_track(clip, track)?,
        Err(err) => {
            log::debug!("treating {input} as encoded audio only: {err}");
            session.attach_clip(clip)?;
        }
    }

    session.produce().await?;
    session.export()
}
