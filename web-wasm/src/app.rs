//! メインアプリケーションコンポーネント

use crate::components::{
    filter_bar::FilterBar,
    header::Header,
    pairing_card::PairingGrid,
    preview_input::PreviewInput,
    upgrade_banner::UpgradeBanner,
    upgrade_modal::UpgradeModal,
};
use crate::font_loader;
use fontpair_pro::{Catalog, CategoryFilter, FlowNotice, PairingRecord, ShellState, SiteConfig};
use leptos::prelude::*;

const CONFIG_ELEMENT_ID: &str = "fontpair-config";

/// ページ内の `<script id="fontpair-config" type="application/json">` から設定を読む
fn load_site_config() -> SiteConfig {
    let source = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match SiteConfig::load(source.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("設定の読み込みに失敗したため既定値を使用: {}", e);
            SiteConfig::default()
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();

    match Catalog::builtin() {
        Ok(catalog) => view! { <Storefront catalog=catalog config=config /> }.into_any(),
        Err(e) => {
            log::error!("カタログの読み込みに失敗: {}", e);
            view! {
                <div class="container">
                    <p class="load-error">"Font pairings are unavailable right now."</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Storefront(catalog: Catalog, config: SiteConfig) -> impl IntoView {
    if let Err(e) = font_loader::load_fonts(catalog.records(), &config) {
        log::warn!("フォントの読み込みに失敗: {:?}", e);
    }

    let state = RwSignal::new(ShellState::new(&config));
    let categories = catalog.categories();
    let catalog = StoredValue::new(catalog);
    provide_context(config);

    let has_pro = Signal::derive(move || state.with(|s| s.has_pro_access()));
    let preview = Signal::derive(move || state.with(|s| s.preview_text().to_string()));
    let active = Signal::derive(move || state.with(|s| s.active_filter()));
    let locked_count = Signal::derive(move || {
        state.with(|s| catalog.with_value(|c| s.locked_count(c)))
    });
    let visible = Signal::derive(move || {
        state.with(|s| {
            catalog.with_value(|c| {
                s.visible_pairings(c)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<PairingRecord>>()
            })
        })
    });

    let on_upgrade = Callback::new(move |_: ()| state.update(|s| s.request_upgrade()));
    let on_preview = Callback::new(move |text: String| state.update(|s| s.set_preview_text(text)));
    let on_select = Callback::new(move |filter: CategoryFilter| {
        state.update(|s| s.select_category(filter))
    });
    let on_notice = Callback::new(move |notice: FlowNotice| {
        state.update(|s| s.apply_notice(notice))
    });

    view! {
        <div class="container">
            <Header has_pro=has_pro on_upgrade=on_upgrade />

            <Show when=move || state.with(|s| s.shows_free_tier())>
                <UpgradeBanner locked_count=locked_count on_upgrade=on_upgrade />
            </Show>

            <PreviewInput value=preview on_input=on_preview />

            <FilterBar categories=categories active=active on_select=on_select />

            <PairingGrid pairings=visible preview=preview has_pro=has_pro on_upgrade=on_upgrade />

            <Show when=move || state.with(|s| s.is_modal_open())>
                <UpgradeModal on_notice=on_notice />
            </Show>
        </div>
    }
}
