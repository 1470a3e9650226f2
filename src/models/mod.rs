//! Wire messages for the media service.
//!
//! These are plain prost messages; the service definition that uses them is
//! generated at build time (see `crate::rpc`).

pub mod media;
