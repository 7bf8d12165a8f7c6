//! Colored terminal rendering shared by the flow commands.

use colored::Colorize;
use singer_audio::WavResult;
use singer_remote::{Analysis, SongMetadata};
use std::path::Path;

/// Prints an analysis report in the human-readable format.
pub fn print_analysis(analysis: &Analysis) {
    println!("\n{}", "Analysis:".cyan().bold());
    println!("  {} {}", "Genre:".dimmed(), analysis.genre);
    println!("  {} {:.0}", "BPM:".dimmed(), analysis.bpm);
    println!("  {} {}", "Key:".dimmed(), analysis.key);
    println!("  {} {}", "Sentiment:".dimmed(), analysis.sentiment);
    if !analysis.instruments.is_empty() {
        println!(
            "  {} {}",
            "Instruments:".dimmed(),
            analysis.instruments.join(", ")
        );
    }
    if !analysis.lyrics.is_empty() {
        println!("  {}", "Lyrics:".dimmed());
        for line in analysis.lyrics.lines() {
            println!("    {}", line);
        }
    }
    if !analysis.suggestion.is_empty() {
        println!("  {} {}", "Suggestion:".dimmed(), analysis.suggestion);
    }
}

/// Prints composed song metadata in the human-readable format.
pub fn print_song(song: &SongMetadata) {
    println!("\n{}", "Song:".cyan().bold());
    println!("  {} {}", "Title:".dimmed(), song.title);
    println!("  {} {}", "Genre:".dimmed(), song.genre);
    println!("  {} {}", "Mood:".dimmed(), song.mood);
    if !song.description.is_empty() {
        println!("  {} {}", "Description:".dimmed(), song.description);
    }
    if !song.lyrics.is_empty() {
        println!("  {}", "Lyrics:".dimmed());
        for line in song.lyrics.lines() {
            println!("    {}", line);
        }
    }
}

/// Prints the details of a rendered WAV file after the saved path.
pub fn print_render(path: &Path, wav: &WavResult) {
    println!("\n{} {}", "Saved".green().bold(), path.display());
    println!(
        "  {} {:.2}s, {} Hz, {} channel(s), {} frames",
        "Audio:".dimmed(),
        wav.duration_seconds(),
        wav.sample_rate,
        wav.channel_count,
        wav.frame_count
    );
    println!("  {} {}", "Hash:".dimmed(), &wav.pcm_hash[..16]);
}
