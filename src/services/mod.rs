pub mod ingest;
pub mod media_service;
pub mod naming;
pub mod sniff;
