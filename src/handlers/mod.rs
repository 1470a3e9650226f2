pub mod media_handlers;
