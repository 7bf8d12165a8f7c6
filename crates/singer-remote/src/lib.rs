//! Singer Ai Remote Service Boundary
//!
//! This crate models the generative service the studio depends on. Four
//! operations cross the boundary:
//!
//! - **Analyze** - encoded clip in, structured [`Analysis`] out
//! - **Compose** - text prompt in, structured [`SongMetadata`] out
//! - **Synthesize backing** - analysis in, base64 PCM out
//! - **Synthesize performance** - song metadata in, base64 PCM out
//!
//! The operations are capability traits ([`AnalysisProvider`],
//! [`SynthesisProvider`]) so orchestration code never names the vendor.
//! [`GeminiClient`] is the production implementation; [`CannedProvider`]
//! answers from fixed values for offline use and tests.
//!
//! Synthesized audio always arrives as headerless s16le PCM at the shape
//! fixed in [`protocol`]; nothing is inferred from payloads. Each operation
//! makes exactly one attempt: there is no retry or backoff layer, and a
//! failure surfaces as a single [`RemoteError`].

pub mod error;
pub mod gemini;
pub mod protocol;
pub mod provider;
pub mod types;

// Re-export main types at crate root
pub use error::{RemoteError, RemoteResult};
pub use gemini::{GeminiClient, GeminiConfig};
pub use provider::{AnalysisProvider, CannedProvider, SynthesisProvider};
pub use types::{Analysis, SongMetadata};
