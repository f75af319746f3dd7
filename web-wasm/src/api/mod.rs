//! バックエンドAPIクライアント

mod match_api;

pub use match_api::submit_match;
