//! 詳細フィールドのエイリアス解決
//!
//! メタデータ列名の表記ゆれ（Style_No / style_no / Style No 等）を
//! 順序付きフォールバックで吸収する。

use serde_json::{Map, Value};

use crate::types::MatchItem;

/// 全エイリアス不一致時の表示値
pub const NA: &str = "N/A";

/// 表示フィールド定義
#[derive(Debug, Clone, Copy)]
pub struct DisplayField {
    pub label: &'static str,
    pub aliases: &'static [&'static str],
}

/// 詳細エリアに表示する7フィールド（表示順）
pub const DISPLAY_FIELDS: [DisplayField; 7] = [
    DisplayField {
        label: "Style No",
        aliases: &["Style_No", "style_no", "Style No", "StyleNo"],
    },
    DisplayField {
        label: "Category",
        aliases: &["Category", "category", "CATEGORY"],
    },
    DisplayField {
        label: "Kt",
        aliases: &["Kt", "kt", "KT"],
    },
    DisplayField {
        label: "Net Gold",
        aliases: &["Net_Gold", "net_gold", "Net Gold", "NetGold"],
    },
    DisplayField {
        label: "Shape",
        aliases: &["Shape", "shape", "SHAPE"],
    },
    DisplayField {
        label: "Diamond Wt",
        aliases: &["Diamond_Wt", "diamond_wt", "Diamond Wt", "Dia_Wt"],
    },
    DisplayField {
        label: "Stone Qty",
        aliases: &["Stone_Qty", "stone_qty", "Stone Qty", "No_Of_Stone"],
    },
];

/// 値を表示文字列へ落とす
///
/// null と空文字は欠損扱い（バックエンドがNaNセルをnull/""で返すため）。
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// キーの正規化（小文字化し英数字以外を除去）
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// エイリアス列を順に解決する
///
/// 完全一致を優先し、最後に正規化キーで走査する。欠損値（null/空文字）は
/// 一致扱いにせず次の候補へ進む。
pub fn resolve_field(details: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        if let Some(value) = details.get(*alias) {
            if let Some(text) = display_value(value) {
                return Some(text);
            }
        }
    }

    // 表記ゆれ（大文字小文字・区切り文字）を正規化して走査
    let wanted = normalize_key(aliases.first()?);
    for (key, value) in details {
        if normalize_key(key) == wanted {
            if let Some(text) = display_value(value) {
                return Some(text);
            }
        }
    }

    None
}

/// 画像パスからスタイル名を導出する（拡張子を除いたファイル名）
pub fn style_from_path(path: &str) -> Option<String> {
    let normalized = path.replace('\\', "/");
    let file_name = normalized.rsplit('/').next()?;
    if file_name.is_empty() {
        return None;
    }

    let stem = match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(idx) => &file_name[..idx],
    };

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

/// 詳細エリアの7行を構築する
///
/// Style No のみ、フィールド不一致時に画像パス由来の名前へ
/// フォールバックする。
pub fn detail_rows(item: &MatchItem) -> Vec<(&'static str, String)> {
    DISPLAY_FIELDS
        .iter()
        .map(|field| {
            let mut value = resolve_field(&item.details, field.aliases);
            if value.is_none() && field.label == "Style No" {
                value = style_from_path(&item.image_path);
            }
            (field.label, value.unwrap_or_else(|| NA.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details_of(value: Value) -> Map<String, Value> {
        value.as_object().expect("objectではない").clone()
    }

    #[test]
    fn test_resolve_exact_alias() {
        let details = details_of(json!({"Style_No": "RG1001"}));
        let result = resolve_field(&details, &["Style_No", "style_no"]);
        assert_eq!(result.as_deref(), Some("RG1001"));
    }

    #[test]
    fn test_resolve_lowercase_alias() {
        // Style_Noが無くstyle_noだけのデータでも解決できる
        let details = details_of(json!({"style_no": "AB1"}));
        let result = resolve_field(&details, &["Style_No", "style_no", "Style No"]);
        assert_eq!(result.as_deref(), Some("AB1"));
    }

    #[test]
    fn test_resolve_normalized_scan() {
        // エイリアス表に無い表記（大文字＋空白）も正規化走査で拾う
        let details = details_of(json!({"STYLE NO": "XY9"}));
        let result = resolve_field(&details, &["Style_No", "style_no"]);
        assert_eq!(result.as_deref(), Some("XY9"));
    }

    #[test]
    fn test_resolve_skips_null_and_empty() {
        let details = details_of(json!({"Style_No": null, "style_no": "", "Style No": "Z1"}));
        let result = resolve_field(&details, &["Style_No", "style_no", "Style No"]);
        assert_eq!(result.as_deref(), Some("Z1"));
    }

    #[test]
    fn test_resolve_numeric_value() {
        let details = details_of(json!({"Kt": 18}));
        let result = resolve_field(&details, &["Kt", "kt"]);
        assert_eq!(result.as_deref(), Some("18"));
    }

    #[test]
    fn test_resolve_all_absent() {
        let details = details_of(json!({"Color": "rose"}));
        assert_eq!(resolve_field(&details, &["Kt", "kt"]), None);
    }

    #[test]
    fn test_style_from_path() {
        assert_eq!(style_from_path("foo/BAR123.jpg").as_deref(), Some("BAR123"));
        assert_eq!(style_from_path("BAR123.jpg").as_deref(), Some("BAR123"));
        assert_eq!(style_from_path("a/b/x.y.webp").as_deref(), Some("x.y"));
        assert_eq!(style_from_path("noext").as_deref(), Some("noext"));
        assert_eq!(style_from_path(""), None);
        assert_eq!(style_from_path("dir/"), None);
    }

    #[test]
    fn test_style_from_path_backslash() {
        // Windows区切りのパスが混ざっても最後の要素を取る
        assert_eq!(style_from_path("rings\\RG1.jpg").as_deref(), Some("RG1"));
    }

    #[test]
    fn test_detail_rows_order_and_na() {
        let item = MatchItem {
            image_path: String::new(),
            score: Value::Null,
            details: details_of(json!({"Category": "Ring"})),
        };

        let rows = detail_rows(&item);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("Style No", NA.to_string()));
        assert_eq!(rows[1], ("Category", "Ring".to_string()));
        assert_eq!(rows[2], ("Kt", NA.to_string()));
        assert_eq!(rows[6].0, "Stone Qty");
    }

    #[test]
    fn test_detail_rows_style_falls_back_to_path() {
        // detailsが空でも画像パスからスタイル名を出す
        let item = MatchItem {
            image_path: "foo/BAR123.jpg".to_string(),
            score: Value::Null,
            details: Map::new(),
        };

        let rows = detail_rows(&item);
        assert_eq!(rows[0], ("Style No", "BAR123".to_string()));
    }

    #[test]
    fn test_detail_rows_prefers_field_over_path() {
        let item = MatchItem {
            image_path: "foo/BAR123.jpg".to_string(),
            score: Value::Null,
            details: details_of(json!({"style_no": "AB1"})),
        };

        let rows = detail_rows(&item);
        assert_eq!(rows[0], ("Style No", "AB1".to_string()));
    }
}
