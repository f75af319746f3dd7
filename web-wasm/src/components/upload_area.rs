//! アップロードエリアコンポーネント
//!
//! ファイル選択とドラッグ&ドロップを受け付け、選択された画像を親へ
//! 通知する。照合中はラベルを切り替えてポインタ操作を止める。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement, MouseEvent};

use crate::app::UploadStatus;

#[component]
pub fn UploadArea<F>(status: ReadSignal<UploadStatus>, on_file: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let is_busy = move || status.get() == UploadStatus::Searching;

    let on_change = {
        let on_file = on_file.clone();
        move |ev: Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            // ファイル未選択なら何もしない
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file(file);
            }
            // 同じファイルの再選択でもchangeが発火するようクリアしておく
            input.set_value("");
        }
    };

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if is_busy() {
                return;
            }

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_busy() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_: MouseEvent| {
        if is_busy() {
            return;
        }
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-box"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_busy() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            style:pointer-events=move || if is_busy() { "none" } else { "auto" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"💎"</div>
            <p class="upload-label">{move || status.get().label()}</p>
            <p class="text-muted">"対応形式: JPEG, PNG, WebP"</p>
            <input
                node_ref=input_ref
                id="file-input"
                class="file-input"
                type="file"
                accept="image/*"
                on:click=move |ev: MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}

/// ファイルをData URLとして読み、成功時にコールバックする
///
/// 読み込みに失敗した場合は何もしない（照合は開始されない）。
pub fn read_file<F>(file: &File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(file);
}
