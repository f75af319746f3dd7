//! スコア整形と画像URL構築

use serde_json::Value;

use crate::fields::NA;

/// データセット画像の配信ルート
pub const DATASET_IMAGE_ROUTE: &str = "/dataset_images/";

/// サムネイル読込失敗時の代替画像
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150?text=No+Image";

/// スコアの表示文字列を返す
///
/// 数値は小数4桁固定、文字列はそのまま、null（欠損）はN/A。
pub fn format_score(score: &Value) -> String {
    match score {
        Value::Number(n) => match n.as_f64() {
            Some(v) => format!("{:.4}", v),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Null => NA.to_string(),
        other => other.to_string(),
    }
}

/// image_path をパーセントエンコードして配信ルートへ連結する
pub fn dataset_image_url(path: &str) -> String {
    format!("{}{}", DATASET_IMAGE_ROUTE, urlencoding::encode(path))
}
