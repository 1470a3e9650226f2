//! In-memory `AssetStore` double that records every call.

use super::{AssetInfo, AssetStore, StoreError, StoreResult, UploadOptions, UploadedAsset};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedUpload {
    pub public_id: String,
    pub file: String,
    pub options: UploadOptions,
}

#[derive(Default)]
pub struct RecordingStore {
    pub uploads: Mutex<Vec<RecordedUpload>>,
    pub destroyed: Mutex<Vec<(String, bool)>>,
    pub fail_upload: bool,
    pub fail_inspect: bool,
    pub fail_destroy: bool,
}

impl RecordingStore {
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn destroyed(&self) -> Vec<(String, bool)> {
        self.destroyed.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for RecordingStore {
    async fn upload(
        &self,
        public_id: &str,
        file: String,
        options: &UploadOptions,
    ) -> StoreResult<UploadedAsset> {
        if self.fail_upload {
            return Err(StoreError::Api {
                status: 400,
                message: "Invalid image file".into(),
            });
        }
        self.uploads.lock().unwrap().push(RecordedUpload {
            public_id: public_id.to_string(),
            file,
            options: options.clone(),
        });
        Ok(UploadedAsset {
            public_id: public_id.to_string(),
            secure_url: format!("https://res.example/{}", public_id),
        })
    }

    async fn destroy(&self, public_id: &str, invalidate: bool) -> StoreResult<()> {
        if self.fail_destroy {
            return Err(StoreError::UnexpectedResult("not found".into()));
        }
        self.destroyed
            .lock()
            .unwrap()
            .push((public_id.to_string(), invalidate));
        Ok(())
    }

    async fn inspect(&self, public_id: &str) -> StoreResult<AssetInfo> {
        if self.fail_inspect {
            return Err(StoreError::Api {
                status: 404,
                message: format!("Resource not found - {}", public_id),
            });
        }
        Ok(AssetInfo { bytes: 2048 })
    }
}
