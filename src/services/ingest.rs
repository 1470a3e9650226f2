//! Chunk accumulation for `UploadLargeMedia`.
//!
//! A `ChunkAccumulator` is owned by exactly one streaming call. It is fed
//! chunks in arrival order and either rejects the chunk that would cross the
//! ceiling or, once the stream ends, yields the assembled payload.

use crate::{
    models::media::{MediaType, UploadMediaRequest, UploadMediaResponse},
    services::{
        media_service::MediaError,
        naming::{asset_name, generated_name},
    },
};
use bytes::BytesMut;

/// Hard limit on the bytes accepted by one streaming upload (10 MiB).
pub const MAX_LARGE_MEDIA_SIZE: usize = 10 << 20;

/// Receive-loop states of a streaming upload.
///
/// Terminal failures leave the loop as `MediaError::SizeExceeded` or
/// `MediaError::Receive`; the accumulator is dropped with them.
pub enum Ingest {
    Receiving(ChunkAccumulator),
    Finalizing(AssembledMedia),
    Done(UploadMediaResponse),
}

#[derive(Debug)]
pub struct ChunkAccumulator {
    buffer: BytesMut,
    running_size: usize,
    ceiling: usize,
    name: Option<String>,
    media_type: MediaType,
    chunks: usize,
}

/// Everything the single-shot path needs once the stream has ended.
#[derive(Debug, PartialEq, Eq)]
pub struct AssembledMedia {
    pub media: Vec<u8>,
    pub name: String,
    pub media_type: MediaType,
    pub chunks: usize,
}

impl ChunkAccumulator {
    pub fn new(ceiling: usize) -> Self {
        Self {
            buffer: BytesMut::new(),
            running_size: 0,
            ceiling,
            name: None,
            media_type: MediaType::Image,
            chunks: 0,
        }
    }

    /// Apply one chunk.
    ///
    /// Name and type are re-derived from every chunk, so the last chunk's
    /// metadata wins even when it carries no name.
    pub fn push(&mut self, chunk: UploadMediaRequest) -> Result<(), MediaError> {
        self.name = Some(asset_name(chunk.requested_name(), &chunk.owner));
        self.media_type = chunk.r#type();

        let attempted = self.running_size + chunk.media.len();
        if attempted > self.ceiling {
            return Err(MediaError::SizeExceeded {
                attempted,
                max: self.ceiling,
            });
        }

        self.buffer.extend_from_slice(&chunk.media);
        self.running_size = attempted;
        self.chunks += 1;
        Ok(())
    }

    pub fn running_size(&self) -> usize {
        self.running_size
    }

    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Close the accumulation. A stream without chunks gets a generated name.
    pub fn finish(self) -> AssembledMedia {
        AssembledMedia {
            media: Vec::from(self.buffer.freeze()),
            name: self.name.unwrap_or_else(generated_name),
            media_type: self.media_type,
            chunks: self.chunks,
        }
    }
}
