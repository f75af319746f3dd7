//! 照合結果の型定義
//!
//! バックエンド /match のレスポンスと、ブラウザストレージへ保存する
//! 結果配列の要素。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 照合候補1件
///
/// `score` は数値のほか文字列・nullを許容する（メタデータ由来の揺れ）。
/// `details` はキー名に表記ゆれがあるため Map のまま保持し、
/// 解決は表示時に行う（fields モジュール）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchItem {
    pub image_path: String,
    pub score: Value,
    pub details: Map<String, Value>,
}

/// /match 成功レスポンス
///
/// `results` を欠くペイロードはデシリアライズに失敗する。
/// 先頭要素が最良一致（サーバ側で関連度降順ソート済み）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub results: Vec<MatchItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_item_default() {
        let item = MatchItem::default();
        assert_eq!(item.image_path, "");
        assert!(item.score.is_null());
        assert!(item.details.is_empty());
    }

    #[test]
    fn test_match_item_deserialize_full() {
        let json = r#"{
            "image_path": "rings/RG1001.jpg",
            "score": 0.9876,
            "details": {"Style_No": "RG1001", "Kt": 18}
        }"#;

        let item: MatchItem = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(item.image_path, "rings/RG1001.jpg");
        assert_eq!(item.score, json!(0.9876));
        assert_eq!(item.details.get("Style_No"), Some(&json!("RG1001")));
    }

    #[test]
    fn test_match_item_deserialize_partial() {
        // score・detailsを欠く要素も読める
        let item: MatchItem =
            serde_json::from_str(r#"{"image_path": "p.jpg"}"#).expect("デシリアライズ失敗");
        assert_eq!(item.image_path, "p.jpg");
        assert!(item.score.is_null());
        assert!(item.details.is_empty());
    }

    #[test]
    fn test_match_item_score_string() {
        let item: MatchItem =
            serde_json::from_str(r#"{"score": "high"}"#).expect("デシリアライズ失敗");
        assert_eq!(item.score, json!("high"));
    }

    #[test]
    fn test_match_item_roundtrip_keeps_details_keys() {
        let json = r#"{"image_path":"a.jpg","score":0.5,"details":{"style_no":"AB1","Net_Gold":3.2}}"#;
        let item: MatchItem = serde_json::from_str(json).expect("デシリアライズ失敗");
        let text = serde_json::to_string(&item).expect("シリアライズ失敗");
        assert!(text.contains("\"style_no\":\"AB1\""));
        assert!(text.contains("\"Net_Gold\":3.2"));
    }

    #[test]
    fn test_match_response_deserialize() {
        let json = r#"{"results": [{"image_path": "a.jpg"}, {"image_path": "b.jpg"}]}"#;
        let response: MatchResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].image_path, "a.jpg");
    }

    #[test]
    fn test_match_response_requires_results() {
        let result = serde_json::from_str::<MatchResponse>(r#"{"matches": []}"#);
        assert!(result.is_err());
    }
}
