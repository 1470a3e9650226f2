//! Bearer-token gate applied to every RPC, unary and streaming alike.

use std::sync::Arc;
use subtle::ConstantTimeEq;
use tonic::{Request, Status, service::Interceptor};
use tracing::warn;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct AuthInterceptor {
    token: Arc<str>,
}

impl AuthInterceptor {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, request: Request<()>) -> Result<Request<()>, Status> {
        let header = request
            .metadata()
            .get("authorization")
            .ok_or_else(|| Status::unauthenticated("missing authorization metadata"))?;

        let presented = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .unwrap_or_default();

        if !presented.is_empty() && bool::from(presented.as_bytes().ct_eq(self.token.as_bytes())) {
            Ok(request)
        } else {
            warn!("rejected call with invalid authorization token");
            Err(Status::unauthenticated("invalid authorization token"))
        }
    }
}
