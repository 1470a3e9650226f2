//! src/services/media_service.rs
//!
//! MediaService — upload, delete and lookup of media assets held by a remote
//! asset store. Nothing is persisted locally: payloads live in memory for the
//! duration of one call and are handed to the store in a single upload.

use crate::{
    models::media::{MediaType, UploadMediaRequest, UploadMediaResponse},
    services::{
        ingest::{ChunkAccumulator, Ingest, MAX_LARGE_MEDIA_SIZE},
        naming::asset_name,
        sniff::detect_content_type,
    },
    store::{AssetStore, NON_IMAGE_EAGER, StoreError, UploadOptions},
};
use base64::{Engine as _, engine::general_purpose};
use futures::{Stream, StreamExt, pin_mut};
use std::sync::Arc;
use thiserror::Error;
use tonic::Status;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("image size exceeds maximum size of {attempted} > {max}")]
    SizeExceeded { attempted: usize, max: usize },
    #[error("failed to receive chunk data: {0}")]
    Receive(#[source] Status),
    #[error("failed to upload media: {0}")]
    Upload(#[source] StoreError),
    #[error("failed to upload media: {0}")]
    Finalize(#[source] Box<MediaError>),
    /// Provider detail stays in the source; callers only see the message.
    #[error("Unable to delete media file")]
    Delete(#[source] StoreError),
}

pub type MediaResult<T> = Result<T, MediaError>;

/// Entry point for every media RPC.
///
/// Cheap to clone; all clones share one asset store handle.
#[derive(Clone)]
pub struct MediaService {
    store: Arc<dyn AssetStore>,
}

impl MediaService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Upload one complete payload.
    ///
    /// The name is `{name}-{owner}` or a generated `qreeket-media-{nanos}`;
    /// the caller's media type only decides whether eager derivatives are
    /// requested.
    pub async fn upload_media(
        &self,
        request: UploadMediaRequest,
    ) -> MediaResult<UploadMediaResponse> {
        let name = asset_name(request.requested_name(), &request.owner);
        let media_type = request.r#type();
        self.store_media(&name, &request.media, media_type).await
    }

    /// Accumulate a chunk stream and upload the result once it ends.
    ///
    /// - Chunks are appended strictly in arrival order.
    /// - The chunk that would push the total past 10 MiB aborts the call.
    /// - A receive error aborts the call.
    /// - Nothing reaches the store unless the whole stream was accepted.
    pub async fn upload_large_media<S>(&self, stream: S) -> MediaResult<UploadMediaResponse>
    where
        S: Stream<Item = Result<UploadMediaRequest, Status>> + Send,
    {
        pin_mut!(stream);

        let mut state = Ingest::Receiving(ChunkAccumulator::new(MAX_LARGE_MEDIA_SIZE));
        loop {
            state = match state {
                Ingest::Receiving(mut acc) => match stream.next().await {
                    Some(Ok(chunk)) => {
                        if let Err(err) = acc.push(chunk) {
                            warn!(chunks = acc.chunks(), "rejecting large media: {}", err);
                            return Err(err);
                        }
                        debug!(
                            chunks = acc.chunks(),
                            running_size = acc.running_size(),
                            "received media chunk"
                        );
                        Ingest::Receiving(acc)
                    }
                    Some(Err(status)) => {
                        warn!(
                            chunks = acc.chunks(),
                            "large media stream broke: {}",
                            status.message()
                        );
                        return Err(MediaError::Receive(status));
                    }
                    None => Ingest::Finalizing(acc.finish()),
                },
                Ingest::Finalizing(assembled) => {
                    debug!(
                        name = %assembled.name,
                        chunks = assembled.chunks,
                        size = assembled.media.len(),
                        "stream complete, uploading assembled media"
                    );
                    let response = self
                        .store_media(&assembled.name, &assembled.media, assembled.media_type)
                        .await
                        .map_err(|err| MediaError::Finalize(Box::new(err)))?;
                    Ingest::Done(response)
                }
                Ingest::Done(response) => return Ok(response),
            };
        }
    }

    /// Destroy the named asset and invalidate cached copies.
    pub async fn delete_media(&self, name: &str) -> MediaResult<()> {
        self.store.destroy(name, true).await.map_err(|err| {
            error!(asset = name, "failed to destroy media: {}", err);
            MediaError::Delete(err)
        })
    }

    /// Echoes `id`. Lookup is not implemented yet.
    pub fn get_media(&self, id: String) -> String {
        debug!(%id, "media lookup is not implemented, echoing id");
        id
    }

    /// Shared tail of both upload paths: sniff, encode, upload, inspect.
    async fn store_media(
        &self,
        name: &str,
        media: &[u8],
        media_type: MediaType,
    ) -> MediaResult<UploadMediaResponse> {
        let mime = detect_content_type(media);
        let file = format!(
            "data:{};base64,{}",
            mime,
            general_purpose::STANDARD.encode(media)
        );

        let options = match media_type {
            MediaType::Image => UploadOptions::default(),
            MediaType::Other => UploadOptions {
                eager: NON_IMAGE_EAGER.to_vec(),
                eager_async: true,
            },
        };

        let asset = self
            .store
            .upload(name, file, &options)
            .await
            .map_err(MediaError::Upload)?;
        info!(
            asset = name,
            public_id = %asset.public_id,
            mime,
            size = media.len(),
            "uploaded media"
        );

        // size is best-effort
        let size = match self.store.inspect(name).await {
            Ok(info) => u32::try_from(info.bytes).ok(),
            Err(err) => {
                warn!(asset = name, "could not inspect uploaded media: {}", err);
                None
            }
        };

        Ok(UploadMediaResponse {
            url: asset.secure_url,
            size,
        })
    }
}
