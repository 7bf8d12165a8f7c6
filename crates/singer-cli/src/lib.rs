//! Singer Ai CLI library.
//!
//! This crate provides the command implementations behind the `singer`
//! binary: vocal analysis, the producer and composer flows, offline
//! mixdown, and local playback.

pub mod commands;
