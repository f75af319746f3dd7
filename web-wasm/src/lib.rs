//! Jewel Match Web App (Leptos + WASM)
//!
//! テンプレート側が用意するマウントノードでアップロード画面と
//! 詳細画面を切り替える（URLパス文字列は参照しない）。

pub mod api;
pub mod app;
pub mod components;
pub mod storage;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// アップロード画面のマウントノードID
const UPLOAD_ROOT_ID: &str = "upload-root";

/// 詳細画面のマウントノードID
const DETAILS_ROOT_ID: &str = "details-root";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        gloo::console::warn!("document is not available");
        return;
    };

    if let Some(root) = mount_node(&document, UPLOAD_ROOT_ID) {
        leptos::mount::mount_to(root, app::UploadPage).forget();
    } else if let Some(root) = mount_node(&document, DETAILS_ROOT_ID) {
        leptos::mount::mount_to(root, app::DetailsPage).forget();
    } else {
        gloo::console::warn!("mount node not found (upload-root / details-root)");
    }
}

/// マウントノードを取得する（無ければ None）
fn mount_node(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
