pub mod caption_source;
pub mod fallback_source;
