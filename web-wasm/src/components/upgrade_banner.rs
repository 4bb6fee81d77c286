//! アップグレード誘導バナー

use leptos::prelude::*;

#[component]
pub fn UpgradeBanner(
    locked_count: Signal<usize>,
    #[prop(into)] on_upgrade: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="upgrade-banner">
            <p>
                {move || format!("{} premium pairings are locked.", locked_count.get())}
                " Unlock the full library with a one-time upgrade."
            </p>
            <button class="btn btn-primary" on:click=move |_| on_upgrade.run(())>
                "Unlock all pairings"
            </button>
        </section>
    }
}
