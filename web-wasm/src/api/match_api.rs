//! /match エンドポイント連携
//!
//! multipart form（フィールド名 image）で画像を送信し、照合候補の
//! 配列を返す。タイムアウトや再試行は行わない。

use jewel_match_common::{Error, MatchItem, MatchResponse, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// 照合エンドポイント
const MATCH_ENDPOINT: &str = "/match";

/// 画像1枚を照合にかける
///
/// 2xx以外はボディテキストを添えて Error::Api を返す。成功時は
/// `results` を検証してから返す（欠落は Error::Payload）。
pub async fn submit_match(file: &File) -> Result<Vec<MatchItem>> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(MATCH_ENDPOINT, &opts).map_err(js_error)?;

    let window =
        web_sys::window().ok_or_else(|| Error::Network("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::Network("unexpected fetch result".to_string()))?;

    if !resp.ok() {
        let body = response_text(&resp).await.unwrap_or_default();
        return Err(Error::Api {
            status: resp.status(),
            body,
        });
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let response: MatchResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Payload(e.to_string()))?;

    Ok(response.results)
}

/// レスポンスボディをテキストとして読む
async fn response_text(resp: &Response) -> Option<String> {
    let text = JsFuture::from(resp.text().ok()?).await.ok()?;
    text.as_string()
}

/// JsValue のエラーを Network へ写す
fn js_error(value: JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}
