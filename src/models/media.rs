//! Upload request/response messages shared by the unary and streaming RPCs.

/// Kind of media being uploaded. Non-image media gets eager derivatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum MediaType {
    Image = 0,
    Other = 1,
}

/// A complete media payload, or one chunk of one in `UploadLargeMedia`.
///
/// In a stream every chunk repeats `name`, `owner` and `type`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct UploadMediaRequest {
    /// Raw media bytes (the whole file, or a slice of it).
    #[prost(bytes = "vec", tag = "1")]
    pub media: Vec<u8>,

    /// Caller-chosen asset name. Empty or absent means "generate one".
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,

    /// Owner appended to explicit names.
    #[prost(string, tag = "3")]
    pub owner: String,

    #[prost(enumeration = "MediaType", tag = "4")]
    pub r#type: i32,
}

/// Result of an upload.
#[derive(Clone, PartialEq, prost::Message)]
pub struct UploadMediaResponse {
    /// HTTPS location of the uploaded asset.
    #[prost(string, tag = "1")]
    pub url: String,

    /// Stored size in bytes, when the provider could report it.
    #[prost(uint32, optional, tag = "2")]
    pub size: Option<u32>,
}

/// Acknowledgement with no fields; same wire format as `google.protobuf.Empty`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Empty {}

impl UploadMediaRequest {
    /// Name as sent, with absent and empty treated alike.
    pub fn requested_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
