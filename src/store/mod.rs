//! Remote asset store abstraction.
//!
//! The media service never talks to a provider directly; it is handed an
//! `Arc<dyn AssetStore>` at construction. `CloudinaryStore` is the production
//! backend.

pub mod cloudinary;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub use cloudinary::{CloudinaryCredentials, CloudinaryStore};

/// Provider-side failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to asset store failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("asset store returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("asset store reported `{0}`")]
    UnexpectedResult(String),
    #[error("invalid asset store response: {0}")]
    Decode(String),
    #[error("invalid asset store url: {0}")]
    InvalidUrl(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Crop mode of an eager transformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crop {
    Pad,
    Crop,
}

/// A derivative rendition the provider should generate at upload time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transformation {
    pub width: u32,
    pub height: u32,
    pub crop: Crop,
    /// Anchor for cropping, e.g. `south`.
    pub gravity: Option<&'static str>,
    /// Strip the audio track from the derivative.
    pub strip_audio: bool,
}

/// Derivatives requested for every non-image upload.
pub const NON_IMAGE_EAGER: [Transformation; 2] = [
    Transformation {
        width: 300,
        height: 300,
        crop: Crop::Pad,
        gravity: None,
        strip_audio: true,
    },
    Transformation {
        width: 160,
        height: 100,
        crop: Crop::Crop,
        gravity: Some("south"),
        strip_audio: true,
    },
];

impl fmt::Display for Transformation {
    /// Renders the provider's transformation syntax, e.g. `w_300,h_300,c_pad,ac_none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crop = match self.crop {
            Crop::Pad => "pad",
            Crop::Crop => "crop",
        };
        write!(f, "w_{},h_{},c_{}", self.width, self.height, crop)?;
        if let Some(gravity) = self.gravity {
            write!(f, ",g_{}", gravity)?;
        }
        if self.strip_audio {
            f.write_str(",ac_none")?;
        }
        Ok(())
    }
}

/// Options attached to a single upload call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub eager: Vec<Transformation>,
    /// Generate the eager derivatives in the background.
    pub eager_async: bool,
}

impl UploadOptions {
    /// Eager parameter value (`a|b`), if any derivatives were requested.
    pub fn eager_param(&self) -> Option<String> {
        if self.eager.is_empty() {
            return None;
        }
        Some(
            self.eager
                .iter()
                .map(Transformation::to_string)
                .collect::<Vec<_>>()
                .join("|"),
        )
    }
}

/// What the provider reports back after an upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedAsset {
    pub public_id: String,
    pub secure_url: String,
}

/// Result of inspecting a stored asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetInfo {
    pub bytes: u64,
}

/// Capabilities the media service needs from a remote asset store.
///
/// Implementations must be usable concurrently from many calls.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload `file` (a `data:` URI) under `public_id`.
    async fn upload(
        &self,
        public_id: &str,
        file: String,
        options: &UploadOptions,
    ) -> StoreResult<UploadedAsset>;

    /// Remove the asset, optionally invalidating CDN caches.
    async fn destroy(&self, public_id: &str, invalidate: bool) -> StoreResult<()>;

    /// Look up stored metadata for the asset.
    async fn inspect(&self, public_id: &str) -> StoreResult<AssetInfo>;
}
