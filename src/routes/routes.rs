//! Assembles the gRPC service exposed by the server.
//!
//! ## Methods (`qreeket.media.MediaService`)
//! - `UploadMedia`      — unary upload of a complete payload
//! - `UploadLargeMedia` — client-streamed chunks, capped at 10 MiB in total
//! - `DeleteMedia`      — destroy and invalidate an asset by name
//! - `GetMedia`         — placeholder, echoes the id
//!
//! Every method sits behind the bearer-token interceptor.

use crate::{
    auth::AuthInterceptor,
    handlers::media_handlers::MediaHandler,
    rpc::media_service_server::MediaServiceServer,
    services::{ingest::MAX_LARGE_MEDIA_SIZE, media_service::MediaService},
};
use tonic::service::interceptor::InterceptedService;

/// Largest encoded message accepted; leaves headroom over the payload limit
/// for the other fields of a unary upload.
pub const MAX_DECODING_MESSAGE_SIZE: usize = MAX_LARGE_MEDIA_SIZE + (1 << 20);

/// Build the authenticated media service.
pub fn routes(
    service: MediaService,
    auth: AuthInterceptor,
) -> InterceptedService<MediaServiceServer<MediaHandler>, AuthInterceptor> {
    let server = MediaServiceServer::new(MediaHandler::new(service))
        .max_decoding_message_size(MAX_DECODING_MESSAGE_SIZE);
    InterceptedService::new(server, auth)
}
