//! gRPC handlers for the media service.
//! Unwraps tonic requests, delegates to `MediaService`, and maps failures to
//! `Status` through `AppError`.

use crate::{
    errors::AppError,
    models::media::{Empty, UploadMediaRequest, UploadMediaResponse},
    rpc::media_service_server::MediaService as MediaRpc,
    services::media_service::MediaService,
};
use tonic::{Request, Response, Status, Streaming};

#[derive(Clone)]
pub struct MediaHandler {
    service: MediaService,
}

impl MediaHandler {
    pub fn new(service: MediaService) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl MediaRpc for MediaHandler {
    /// `UploadMedia` — single message upload.
    #[tracing::instrument(skip(self, request))]
    async fn upload_media(
        &self,
        request: Request<UploadMediaRequest>,
    ) -> Result<Response<UploadMediaResponse>, Status> {
        let response = self
            .service
            .upload_media(request.into_inner())
            .await
            .map_err(AppError::from)?;
        Ok(Response::new(response))
    }

    /// `UploadLargeMedia` — client-streamed chunks, one response at the end.
    #[tracing::instrument(skip(self, request))]
    async fn upload_large_media(
        &self,
        request: Request<Streaming<UploadMediaRequest>>,
    ) -> Result<Response<UploadMediaResponse>, Status> {
        let response = self
            .service
            .upload_large_media(request.into_inner())
            .await
            .map_err(AppError::from)?;
        Ok(Response::new(response))
    }

    async fn get_media(&self, request: Request<String>) -> Result<Response<String>, Status> {
        Ok(Response::new(self.service.get_media(request.into_inner())))
    }

    /// `DeleteMedia` — destroy with cache invalidation.
    #[tracing::instrument(skip(self, request))]
    async fn delete_media(&self, request: Request<String>) -> Result<Response<Empty>, Status> {
        self.service
            .delete_media(request.get_ref())
            .await
            .map_err(AppError::from)?;
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::media::MediaType, store::testing::RecordingStore};
    use std::sync::Arc;
    use tonic::Code;

    fn handler(store: RecordingStore) -> MediaHandler {
        MediaHandler::new(MediaService::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn upload_media_returns_url_and_size() {
        let request = Request::new(UploadMediaRequest {
            media: b"GIF87a".to_vec(),
            name: Some("logo".into()),
            owner: "acme".into(),
            r#type: MediaType::Image as i32,
        });

        let response = handler(RecordingStore::default())
            .upload_media(request)
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.url, "https://res.example/logo-acme");
        assert_eq!(response.size, Some(2048));
    }

    #[tokio::test]
    async fn upload_failure_is_internal() {
        let store = RecordingStore {
            fail_upload: true,
            ..Default::default()
        };

        let status = handler(store)
            .upload_media(Request::new(UploadMediaRequest::default()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().starts_with("failed to upload media"));
    }

    #[tokio::test]
    async fn delete_media_acknowledges_with_empty() {
        let response = handler(RecordingStore::default())
            .delete_media(Request::new("logo-acme".to_string()))
            .await
            .unwrap();

        assert_eq!(response.into_inner(), Empty {});
    }

    #[tokio::test]
    async fn delete_missing_media_is_internal_and_generic() {
        let store = RecordingStore {
            fail_destroy: true,
            ..Default::default()
        };

        let status = handler(store)
            .delete_media(Request::new("missing-u1".to_string()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "Unable to delete media file");
    }

    #[tokio::test]
    async fn get_media_echoes_request() {
        let response = handler(RecordingStore::default())
            .get_media(Request::new("asset-1".to_string()))
            .await
            .unwrap();

        assert_eq!(response.into_inner(), "asset-1");
    }
}
