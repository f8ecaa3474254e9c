//! Audio I/O layer for ripple.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for loading/saving 16-bit audio
//! - **Block processing**: [`BlockEngine`] for feeding a recording through an
//!   effect chain one fixed-size block at a time
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ripple_core::{EffectChain, EffectId};
//! use ripple_effects::GainEffect;
//! use ripple_io::{BlockEngine, read_wav, write_wav};
//!
//! let (samples, spec) = read_wav("input.wav")?;
//!
//! let mut chain = EffectChain::new();
//! chain.add(Box::new(GainEffect::new(EffectId(1))));
//! let processed = BlockEngine::new(1024)?.process_stream(&mut chain, &samples);
//!
//! write_wav("output.wav", &processed, spec.mono())?;
//! ```

mod engine;
mod wav;

pub use engine::{BlockEngine, BlockProcessor, DEFAULT_BLOCK_SIZE};
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file's sample layout cannot be converted.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Block size must be at least one sample.
    #[error("Invalid block size: {0}")]
    InvalidBlockSize(usize),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
