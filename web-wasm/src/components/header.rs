//! ヘッダーコンポーネント

use leptos::prelude::*;

/// 無料プラン表示とProバッジは排他
#[component]
pub fn Header(has_pro: Signal<bool>, #[prop(into)] on_upgrade: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="brand">
                <h1>"FontPair Pro"</h1>
                <p class="tagline">"Curated font pairings, ready to paste into your CSS"</p>
            </div>
            <Show
                when=move || has_pro.get()
                fallback=move || view! {
                    <div class="plan plan-free">
                        <span class="free-badge">"Free plan"</span>
                        <button class="btn btn-primary" on:click=move |_| on_upgrade.run(())>
                            "Upgrade to Pro"
                        </button>
                    </div>
                }
            >
                <span class="pro-badge">"PRO"</span>
            </Show>
        </header>
    }
}
