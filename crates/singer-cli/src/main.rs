//! Singer Ai CLI - Command-line studio for vocal production
//!
//! This binary provides commands for analyzing vocal takes, producing
//! backing tracks, composing songs from text prompts, and mixing the
//! results into WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use singer_cli::commands;

/// Singer Ai - AI Vocal Producer and Composer
#[derive(Parser)]
#[command(name = "singer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a vocal take and report genre, tempo, key, and lyrics
    Analyze {
        /// Path to the audio clip to analyze
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Produce a backing track for a vocal take and export the mixdown
    Produce {
        /// Path to the vocal take (WAV inputs are blended into the mix)
        #[arg(short, long)]
        input: String,

        /// Directory to write the export into (default: current directory)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compose a song from a text prompt and export the sung performance
    Compose {
        /// Description of the song to compose
        #[arg(short, long)]
        prompt: String,

        /// Directory to write the export into (default: current directory)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Mix two local WAV files into a stereo mixdown (offline)
    Mix {
        /// Path to the primary WAV (full gain)
        #[arg(long)]
        primary: String,

        /// Path to the secondary WAV (attenuated under the primary)
        #[arg(long)]
        secondary: String,

        /// Gain applied to the secondary source
        #[arg(long, default_value_t = singer_audio::DEFAULT_SECONDARY_GAIN)]
        gain: f32,

        /// Sample rate of the rendered mix in Hz
        #[arg(long, default_value_t = singer_studio::DEFAULT_ENGINE_RATE)]
        rate: u32,

        /// Output path (default: the primary's name with the export prefix)
        #[arg(short, long)]
        out: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Play a local WAV file through the default output device
    #[cfg(feature = "device")]
    Play {
        /// Path to the WAV file to play
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { input, json } => commands::analyze::run(&input, json),
        Commands::Produce {
            input,
            output_dir,
            json,
        } => commands::produce::run(&input, output_dir.as_deref(), json),
        Commands::Compose {
            prompt,
            output_dir,
            json,
        } => commands::compose::run(&prompt, output_dir.as_deref(), json),
        Commands::Mix {
            primary,
            secondary,
            gain,
            rate,
            out,
            json,
        } => commands::mix::run(&primary, &secondary, gain, rate, out.as_deref(), json),
        #[cfg(feature = "device")]
        Commands::Play { input } => commands::play::run(&input),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
