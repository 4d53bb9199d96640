pub mod charmap;
pub mod converter;
pub mod dictionary;
pub mod engine;
pub mod eraab;
pub mod slug;
pub mod types;
