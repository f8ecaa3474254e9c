//! Fixed-size block processing of whole recordings.

use std::borrow::Cow;

use ripple_core::{BoxedEffect, Effect, EffectChain};

use crate::{Error, Result};

/// Block size used when none is configured, in samples.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Something that transforms one block of samples into a block of the same
/// length.
pub trait BlockProcessor {
    /// Process one block.
    fn process_block<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]>;
}

impl BlockProcessor for EffectChain {
    fn process_block<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
        self.apply_all(input)
    }
}

impl BlockProcessor for BoxedEffect {
    fn process_block<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
        self.process(input)
    }
}

/// Cuts a sample stream into fixed-size blocks and feeds them to a processor.
///
/// This mirrors how a capture device delivers audio: one buffer at a time,
/// with effect state carried from each block to the next. The final block is
/// processed at its natural, shorter length.
#[derive(Debug, Clone, Copy)]
pub struct BlockEngine {
    block_size: usize,
}

impl BlockEngine {
    /// Create an engine with the given block size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockSize`] for a block size of zero.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(Error::InvalidBlockSize(block_size));
        }
        Ok(Self { block_size })
    }

    /// Samples per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Process an entire recording, returning a new buffer of the same length.
    pub fn process_stream<P: BlockProcessor + ?Sized>(
        &self,
        processor: &mut P,
        input: &[i16],
    ) -> Vec<i16> {
        self.process_stream_with_progress(processor, input, |_| {})
    }

    /// Like [`process_stream`](Self::process_stream), calling `on_block` with
    /// the number of samples processed so far after each block.
    pub fn process_stream_with_progress<P, F>(
        &self,
        processor: &mut P,
        input: &[i16],
        mut on_block: F,
    ) -> Vec<i16>
    where
        P: BlockProcessor + ?Sized,
        F: FnMut(usize),
    {
        let mut output = Vec::with_capacity(input.len());
        for block in input.chunks(self.block_size) {
            output.extend_from_slice(&processor.process_block(block));
            on_block(output.len());
        }
        tracing::debug!(
            samples = input.len(),
            block_size = self.block_size,
            blocks = input.len().div_ceil(self.block_size),
            "stream processed"
        );
        output
    }
}

impl Default for BlockEngine {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}
