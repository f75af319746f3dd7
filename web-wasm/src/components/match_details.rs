//! 照合詳細コンポーネント
//!
//! 選択中の候補のメイン画像と詳細フィールドを描画する。選択が変わる
//! たびに行とスコアを組み直す。

use jewel_match_common::{dataset_image_url, detail_rows, format_score, MatchItem};
use leptos::prelude::*;

#[component]
pub fn MatchDetails(
    items: Vec<MatchItem>,
    selected: ReadSignal<usize>,
    preview: Option<String>,
    details_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    // メイン画像の読込失敗は選択ごとに1回だけプレビューへ戻す
    let (failed_index, set_failed_index) = signal(None::<usize>);

    let current = {
        let items = items.clone();
        move || items.get(selected.get()).cloned().unwrap_or_default()
    };

    let main_src = {
        let preview = preview.clone();
        let current = current.clone();
        move || {
            let item = current();
            if item.image_path.is_empty() {
                // 画像パスが無い候補はプレビューを出したままにする
                return preview.clone().unwrap_or_default();
            }
            if failed_index.get() == Some(selected.get()) {
                preview
                    .clone()
                    .unwrap_or_else(|| dataset_image_url(&item.image_path))
            } else {
                dataset_image_url(&item.image_path)
            }
        }
    };

    let on_error = {
        let preview_present = preview.is_some();
        move |_| {
            // プレビューが無ければ差し替え先も無いので何もしない
            if preview_present {
                set_failed_index.set(Some(selected.get_untracked()));
            }
        }
    };

    let rows = {
        let current = current.clone();
        move || detail_rows(&current())
    };

    let score = move || format_score(&current().score);

    view! {
        <div class="match-panel">
            <img
                id="uploadedImage"
                class="match-image"
                src=main_src
                alt="選択中の候補画像"
                on:error=on_error
            />
            <div id="detailsArea" class="details-area" node_ref=details_ref>
                {move || {
                    rows()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="detail-row">
                                    <span class="detail-label">{label}</span>
                                    <span class="detail-value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <div class="detail-row detail-score">
                    <span class="detail-label">"Score"</span>
                    <span class="detail-value">{score}</span>
                </div>
            </div>
        </div>
    }
}
