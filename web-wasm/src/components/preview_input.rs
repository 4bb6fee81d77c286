//! プレビュー文字列の入力欄
//!
//! 上限はUTF-16単位で数える `maxlength` ではなく、`ShellState` が文字数で切り詰める。

use leptos::prelude::*;

#[component]
pub fn PreviewInput(
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="preview-input form-group">
            <label for="preview-text">"Preview text"</label>
            <input
                type="text"
                id="preview-text"
                placeholder="Type a headline to preview..."
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
