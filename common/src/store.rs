//! key-valueストアの抽象化
//!
//! アップロード画面と詳細画面はこの2キーを介してのみ連携する。
//! 実ブラウザ実装はwasmクレート側（BrowserStore）。

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

/// アップロード画像プレビュー（Data URL）の保存キー
pub const UPLOADED_IMAGE_KEY: &str = "uploadedImage";

/// 照合結果JSONの保存キー
pub const MATCH_RESULTS_KEY: &str = "matchResults";

/// get/setのみの最小ストア
///
/// 削除やTTLは持たない（毎回のアップロードで上書きする運用）。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.set(UPLOADED_IMAGE_KEY, "data:image/png;base64,AAAA").unwrap();
        assert_eq!(
            store.get(UPLOADED_IMAGE_KEY).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get(MATCH_RESULTS_KEY), None);
    }

    #[test]
    fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        store.set(MATCH_RESULTS_KEY, "[1]").unwrap();
        store.set(MATCH_RESULTS_KEY, "[2]").unwrap();
        assert_eq!(store.get(MATCH_RESULTS_KEY).as_deref(), Some("[2]"));
    }

    #[test]
    fn test_storage_keys_are_fixed() {
        // 保存済みデータとの互換キー（変更すると過去の保存分が読めなくなる）
        assert_eq!(UPLOADED_IMAGE_KEY, "uploadedImage");
        assert_eq!(MATCH_RESULTS_KEY, "matchResults");
    }
}
