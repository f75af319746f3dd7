//! Jewel Match Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ

pub mod error;
pub mod fields;
pub mod format;
pub mod session;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use fields::{detail_rows, resolve_field, style_from_path, DisplayField, DISPLAY_FIELDS, NA};
pub use format::{dataset_image_url, format_score, DATASET_IMAGE_ROUTE, PLACEHOLDER_IMAGE_URL};
pub use session::{load_match_session, MatchSession};
pub use store::{KeyValueStore, MemoryStore, MATCH_RESULTS_KEY, UPLOADED_IMAGE_KEY};
pub use types::{MatchItem, MatchResponse};
