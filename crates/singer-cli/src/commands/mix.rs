//! Mix command implementation
//!
//! Blends two local WAV files into a stereo mixdown at the engine rate,
//! with the secondary source attenuated under the primary. Runs entirely
//! offline.

use anyhow::{Context, Result};
use colored::Colorize;
use singer_audio::{load_wav, AudioResult, MixRequest, OfflineMixer, WavResult};
use singer_studio::export_file_name;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, MixOutput, RenderResult};
use super::report;

/// Run the mix command
///
/// # Arguments
/// * `primary` - Path to the primary WAV (full gain)
/// * `secondary` - Path to the secondary WAV (attenuated)
/// * `gain` - Gain applied to the secondary source
/// * `rate` - Sample rate of the rendered mix in Hz
/// * `out` - Output path (default: the primary's name with the export prefix)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    primary: &str,
    secondary: &str,
    gain: f32,
    rate: u32,
    out: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(primary, secondary, gain, rate, out)
    } else {
        run_human(primary, secondary, gain, rate, out)
    }
}

/// Run mix with human-readable (colored) output
fn run_human(
    primary: &str,
    secondary: &str,
    gain: f32,
    rate: u32,
    out: Option<&str>,
) -> Result<ExitCode> {
    println!("{}", "Mixing:".cyan().bold());
    println!("  {} {}", "Primary:".dimmed(), primary);
    println!("  {} {} (gain {})", "Secondary:".dimmed(), secondary, gain);

    let wav = match render_mix(primary, secondary, gain, rate) {
        Ok(wav) => wav,
        Err(err) => {
            log::debug!("mix failed: {err}");
            eprintln!("{} {}", "error:".red().bold(), err);
            return Ok(ExitCode::from(1));
        }
    };

    let path = output_path(primary, out);
    fs::write(&path, &wav.wav_data)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    report::print_render(&path, &wav);
    Ok(ExitCode::SUCCESS)
}

/// Run mix with machine-readable JSON output
fn run_json(
    primary: &str,
    secondary: &str,
    gain: f32,
    rate: u32,
    out: Option<&str>,
) -> Result<ExitCode> {
    let output = match render_mix(primary, secondary, gain, rate) {
        Ok(wav) => {
            let path = output_path(primary, out);
            match fs::write(&path, &wav.wav_data) {
                Ok(()) => MixOutput::success(RenderResult::new(&path, &wav)),
                Err(err) => MixOutput::failure(JsonError::new(
                    error_codes::FILE_WRITE,
                    format!("Failed to write {}: {err}", path.display()),
                )),
            }
        }
        Err(err) => MixOutput::failure(JsonError::from_audio(&err)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Loads both sources and renders the mixdown into an encoded WAV.
fn render_mix(primary: &str, secondary: &str, gain: f32, rate: u32) -> AudioResult<WavResult> {
    let primary = load_wav(Path::new(primary))?;
    let secondary = load_wav(Path::new(secondary))?;

    let request = MixRequest::new()
        .with_primary(&primary)
        .with_secondary(&secondary)
        .with_secondary_gain(gain);
    let mixed = OfflineMixer::new(rate)?.mix(&request)?;
    WavResult::from_buffer(&mixed)
}

/// Resolves the output path, branding the primary's name by default.
fn output_path(primary: &str, out: Option<&str>) -> PathBuf {
    match out {
        Some(path) => PathBuf::from(path),
        None => {
            let source = Path::new(primary)
                .file_name()
                .and_then(|name| name.to_str());
            PathBuf::from(export_file_name(source, None))
        }
    }
}
