//! ブラウザローカルストレージ実装
//!
//! 保存キーとストア抽象はcommon側（store モジュール）。ここでは
//! window.localStorage への素のget/setだけを担う。値はJSONエンコード
//! せず生文字列のまま保存する（Data URLとJSONテキストをそのまま持つ）。

use jewel_match_common::{Error, KeyValueStore, Result};

/// window.localStorage を使うストア
///
/// origin単位で共有され、アップロード画面の書き込みを詳細画面が読む。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn local_storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .local_storage()
            .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
