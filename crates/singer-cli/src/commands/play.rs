//! Play command implementation
//!
//! Plays a local WAV file through the default output device. Only built
//! with the `device` feature.

use anyhow::Result;
use colored::Colorize;
use singer_audio::load_wav;
use singer_studio::{CpalBackend, PlaybackController};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

/// Run the play command
///
/// # Arguments
/// * `input` - Path to the WAV file to play
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str) -> Result<ExitCode> {
    let buffer = load_wav(Path::new(input))?;
    let duration = buffer.duration_seconds();

    let mut controller = PlaybackController::new(CpalBackend::new()?);
    println!("{} {} ({:.1}s)", "Playing".cyan().bold(), input, duration);
    controller.play(&[(&buffer, 1.0)])?;

    // Small pad so the device drains its last buffer before teardown.
    std::thread::sleep(Duration::from_secs_f64(duration) + Duration::from_millis(250));
    controller.stop_all();

    println!("{}", "Done".green().bold());
    Ok(ExitCode::SUCCESS)
}
