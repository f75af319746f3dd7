//! サムネイル一覧コンポーネント
//!
//! 上位候補（最大5件）を並べ、クリックで詳細表示を切り替える。

use jewel_match_common::{
    dataset_image_url, format_score, style_from_path, MatchItem, PLACEHOLDER_IMAGE_URL,
};
use leptos::prelude::*;

/// 表示する最大件数
const MAX_THUMBNAILS: usize = 5;

#[component]
pub fn ThumbnailStrip<F>(
    items: Vec<MatchItem>,
    selected: ReadSignal<usize>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone,
{
    view! {
        <div id="top5Container" class="thumbnail-strip">
            {items
                .into_iter()
                .take(MAX_THUMBNAILS)
                .enumerate()
                .map(|(index, item)| {
                    let on_select = on_select.clone();
                    view! {
                        <ThumbnailCard item=item index=index selected=selected on_select=on_select />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ThumbnailCard<F>(
    item: MatchItem,
    index: usize,
    selected: ReadSignal<usize>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone,
{
    // 読込失敗は1回だけ代替画像へ差し替え、以降は何もしない
    let (is_broken, set_is_broken) = signal(false);

    let title = format!("Score: {}", format_score(&item.score));
    let alt = style_from_path(&item.image_path).unwrap_or_else(|| format!("候補 {}", index + 1));
    let url = dataset_image_url(&item.image_path);

    let src = move || {
        if is_broken.get() {
            PLACEHOLDER_IMAGE_URL.to_string()
        } else {
            url.clone()
        }
    };

    let on_error = move |_| {
        if !is_broken.get_untracked() {
            set_is_broken.set(true);
        }
    };

    let on_click = move |_| on_select(index);

    view! {
        <img
            class=move || {
                if selected.get() == index {
                    "thumbnail selected"
                } else {
                    "thumbnail"
                }
            }
            src=src
            title=title
            alt=alt
            on:error=on_error
            on:click=on_click
        />
    }
}
