//! Analyze command implementation
//!
//! Uploads an audio clip to the analysis provider and reports genre, tempo,
//! key, sentiment, instrumentation, and transcribed lyrics.

use anyhow::Result;
use colored::Colorize;
use singer_remote::{Analysis, AnalysisProvider, GeminiClient};
use singer_studio::{EncodedClip, FlowStage, StudioError, StudioResult};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{AnalyzeOutput, JsonError};
use super::report;
use super::studio::flow_runtime;

/// Run the analyze command
///
/// # Arguments
/// * `input` - Path to the audio clip to analyze
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run analyze with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{}", "Analyzing clip:".cyan().bold());
    println!("  {} {}", "File:".dimmed(), input);

    let client = GeminiClient::from_env()?;
    let rt = flow_runtime()?;

    match rt.block_on(analyze_file(&client, input)) {
        Ok(analysis) => {
            report::print_analysis(&analysis);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            log::debug!("analysis failed: {err}");
            eprintln!("{} {}", "error:".red().bold(), err.user_message());
            Ok(ExitCode::from(1))
        }
    }
}

/// Run analyze with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let client = GeminiClient::from_env()?;
    let rt = flow_runtime()?;

    let output = match rt.block_on(analyze_file(&client, input)) {
        Ok(analysis) => AnalyzeOutput::success(analysis),
        Err(err) => AnalyzeOutput::failure(JsonError::from_studio(&err)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Loads the clip and runs one analysis request against the provider.
async fn analyze_file(client: &GeminiClient, input: &str) -> StudioResult<Analysis> {
    let clip = EncodedClip::from_file(Path::new(input))?;
    client
        .analyze(clip.bytes(), clip.mime_or_default())
        .await
        .map_err(|err| StudioError::remote(FlowStage::Analysis, err))
}
