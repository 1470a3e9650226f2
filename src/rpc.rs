//! `qreeket.media.MediaService`, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/qreeket.media.MediaService.rs"));
