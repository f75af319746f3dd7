//! ページコントローラ
//!
//! アップロード画面（index）と詳細画面（details）。両画面は
//! ローカルストレージの2キーだけで連携し、遷移はフルナビゲーション。

use jewel_match_common::{
    load_match_session, KeyValueStore, MatchItem, MatchSession, Result, MATCH_RESULTS_KEY,
    UPLOADED_IMAGE_KEY,
};
use leptos::either::Either;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::{
    header::Header,
    match_details::MatchDetails,
    thumbnail_strip::ThumbnailStrip,
    upload_area::{read_file, UploadArea},
};
use crate::storage::BrowserStore;

/// 詳細ページのパス（照合成功時にフルナビゲーションする）
const DETAILS_PAGE_PATH: &str = "/details";

/// アップロード処理の状態
#[derive(Clone, Copy, PartialEq)]
pub enum UploadStatus {
    Idle,
    Searching,
}

impl UploadStatus {
    /// アップロードボックスに出すラベル
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "画像をドラッグ&ドロップ または クリックして選択",
            UploadStatus::Searching => "照合中...",
        }
    }
}

/// アップロード画面
#[component]
pub fn UploadPage() -> impl IntoView {
    let (status, set_status) = signal(UploadStatus::Idle);

    let on_file = move |file: File| {
        if status.get_untracked() == UploadStatus::Searching {
            return;
        }

        let upload_file = file.clone();
        read_file(&file, move |data_url| {
            // プレビュー保存の失敗は照合を止めない
            if let Err(e) = BrowserStore.set(UPLOADED_IMAGE_KEY, &data_url) {
                gloo::console::warn!(format!("プレビューを保存できませんでした: {}", e));
            }

            set_status.set(UploadStatus::Searching);

            let file = upload_file.clone();
            spawn_local(async move {
                match run_match(&file).await {
                    Ok(()) => navigate_to_details(),
                    Err(e) => {
                        gloo::console::error!(format!("照合に失敗しました: {}", e));
                        alert(&format!("照合に失敗しました: {}", e));
                        set_status.set(UploadStatus::Idle);
                    }
                }
            });
        });
    };

    view! {
        <div class="container">
            <Header />
            <UploadArea status=status on_file=on_file />
        </div>
    }
}

/// 照合を実行し、結果をストレージへ保存する
async fn run_match(file: &File) -> Result<()> {
    let results = api::submit_match(file).await?;
    let json = serde_json::to_string(&results)?;
    BrowserStore.set(MATCH_RESULTS_KEY, &json)?;
    Ok(())
}

/// 詳細ページへフルナビゲーションする
fn navigate_to_details() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(DETAILS_PAGE_PATH).is_err() {
        gloo::console::warn!("詳細ページへ遷移できませんでした");
    }
}

/// ユーザー向けアラート
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 詳細画面
#[component]
pub fn DetailsPage() -> impl IntoView {
    let (preview, session) = load_match_session(&BrowserStore);

    if let MatchSession::Unreadable(err) = &session {
        gloo::console::error!(format!("保存された照合結果を解析できません: {}", err));
    }

    let body = match session {
        MatchSession::Results(items) => Either::Left(render_results(items, preview)),
        other => Either::Right(render_message(other.message().unwrap_or_default(), preview)),
    };

    view! {
        <div class="container">
            <Header />
            {body}
        </div>
    }
}

/// 照合結果あり時の詳細ビュー
fn render_results(items: Vec<MatchItem>, preview: Option<String>) -> impl IntoView {
    let (selected, set_selected) = signal(0usize);
    let details_ref = NodeRef::<leptos::html::Div>::new();

    let on_select = move |index: usize| {
        set_selected.set(index);
        scroll_to_details(details_ref);
    };

    let strip_items = items.clone();

    view! {
        <MatchDetails items=items selected=selected preview=preview details_ref=details_ref />
        <ThumbnailStrip items=strip_items selected=selected on_select=on_select />
    }
}

/// 結果なし系の縮退ビュー
///
/// プレビューがあれば画像だけは出す（照合前の確認用）。
fn render_message(message: &'static str, preview: Option<String>) -> impl IntoView {
    view! {
        <div class="match-panel">
            {preview.map(|src| {
                view! {
                    <img id="uploadedImage" class="match-image" src=src alt="アップロード画像" />
                }
            })}
            <div id="detailsArea" class="details-area">
                <p class="details-message">{message}</p>
            </div>
        </div>
    }
}

/// 詳細エリアへスムーズスクロールする
fn scroll_to_details(target: NodeRef<leptos::html::Div>) {
    let Some(element) = target.get_untracked() else {
        gloo::console::warn!("details area is not mounted");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
