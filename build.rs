use tonic_build::manual::{Builder, Method, Service};

fn main() {
    let codec = "tonic::codec::ProstCodec";

    let media_service = Service::builder()
        .name("MediaService")
        .package("qreeket.media")
        .method(
            Method::builder()
                .name("upload_media")
                .route_name("UploadMedia")
                .input_type("crate::models::media::UploadMediaRequest")
                .output_type("crate::models::media::UploadMediaResponse")
                .codec_path(codec)
                .build(),
        )
        .method(
            Method::builder()
                .name("upload_large_media")
                .route_name("UploadLargeMedia")
                .input_type("crate::models::media::UploadMediaRequest")
                .output_type("crate::models::media::UploadMediaResponse")
                .codec_path(codec)
                .client_streaming()
                .build(),
        )
        // google.protobuf.StringValue maps onto prost's String
        .method(
            Method::builder()
                .name("get_media")
                .route_name("GetMedia")
                .input_type("String")
                .output_type("String")
                .codec_path(codec)
                .build(),
        )
        .method(
            Method::builder()
                .name("delete_media")
                .route_name("DeleteMedia")
                .input_type("String")
                .output_type("crate::models::media::Empty")
                .codec_path(codec)
                .build(),
        )
        .build();

    Builder::new()
        .build_client(false)
        .compile(&[media_service]);

    println!("cargo:rerun-if-changed=build.rs");
}
