//! 詳細ページ表示状態の読み出し
//!
//! ストレージの保存テキストを解析し、描画側が分岐できる状態へ落とす。
//! どの分岐でもページを落とさない（固定メッセージへ縮退する）。

use serde_json::Value;

use crate::store::{KeyValueStore, MATCH_RESULTS_KEY, UPLOADED_IMAGE_KEY};
use crate::types::MatchItem;

/// 結果未保存時のメッセージ
pub const MSG_NO_RESULTS: &str = "照合結果がありません。画像をアップロードしてください。";

/// 保存データ破損時のメッセージ
pub const MSG_UNREADABLE: &str = "照合結果を読み込めませんでした。";

/// 一致なし時のメッセージ
pub const MSG_NO_MATCHES: &str = "一致する商品が見つかりませんでした。";

/// 詳細ページの表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSession {
    /// 結果が保存されていない
    Missing,
    /// 保存テキストを解析できない（解析エラーを保持）
    Unreadable(String),
    /// 配列でない、または空
    Empty,
    /// 照合結果あり（先頭が最良一致）
    Results(Vec<MatchItem>),
}

impl MatchSession {
    /// 結果なし系の固定メッセージ（Resultsでは None）
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MatchSession::Missing => Some(MSG_NO_RESULTS),
            MatchSession::Unreadable(_) => Some(MSG_UNREADABLE),
            MatchSession::Empty => Some(MSG_NO_MATCHES),
            MatchSession::Results(_) => None,
        }
    }
}

/// 保存済みプレビューと照合結果を読み出す
///
/// 返り値は（プレビューData URL, 表示状態）。プレビューは結果の有無に
/// かかわらず返す（初期画像・読込失敗時のフォールバックに使う）。
pub fn load_match_session(store: &impl KeyValueStore) -> (Option<String>, MatchSession) {
    let preview = store.get(UPLOADED_IMAGE_KEY);
    let session = match store.get(MATCH_RESULTS_KEY) {
        None => MatchSession::Missing,
        Some(text) => parse_results(&text),
    };
    (preview, session)
}

/// 保存テキストを解析して表示状態へ落とす
///
/// 配列かどうかの判定を型付きデコードより先に行う。配列以外のJSONは
/// 「一致なし」、配列要素の型不整合は「読めない」扱い。
fn parse_results(text: &str) -> MatchSession {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => return MatchSession::Unreadable(e.to_string()),
    };

    match value {
        Value::Array(items) if !items.is_empty() => {
            match serde_json::from_value::<Vec<MatchItem>>(Value::Array(items)) {
                Ok(items) => MatchSession::Results(items),
                Err(e) => MatchSession::Unreadable(e.to_string()),
            }
        }
        _ => MatchSession::Empty,
    }
}
