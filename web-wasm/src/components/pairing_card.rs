//! ペアリングカードとグリッド

use crate::clipboard;
use fontpair_pro::{card, CardAction, CopyIndicator, PairingRecord, SiteConfig};
use gloo::timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PairingGrid(
    pairings: Signal<Vec<PairingRecord>>,
    preview: Signal<String>,
    has_pro: Signal<bool>,
    #[prop(into)] on_upgrade: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="pairing-section">
            <p class="result-count">
                {move || match pairings.with(|p| p.len()) {
                    1 => "1 pairing".to_string(),
                    n => format!("{} pairings", n),
                }}
            </p>
            <div class="pairing-grid">
                <For
                    each=move || pairings.get()
                    key=|record| record.id
                    children=move |record| {
                        view! {
                            <PairingCard
                                record=record
                                preview=preview
                                has_pro=has_pro
                                on_upgrade=on_upgrade
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
pub fn PairingCard(
    record: PairingRecord,
    preview: Signal<String>,
    has_pro: Signal<bool>,
    #[prop(into)] on_upgrade: Callback<()>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let fallback = config.heading_fallback;
    let reset_ms = config.timings.copied_reset_ms;

    let action = Memo::new({
        let record = record.clone();
        move |_| CardAction::for_record(&record, has_pro.get())
    });
    let locked = move || action.get() == CardAction::Unlock;
    let heading_text =
        move || preview.with(|p| card::displayed_heading(p, &fallback).to_string());

    // コピー表示はカードごとに独立。アンマウントでリセットタイマーも破棄される
    let indicator = RwSignal::new(CopyIndicator::default());
    let reset_timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        reset_timer.try_update_value(|timer| timer.take());
    });

    let css = card::css_snippet(&record);
    let on_copy = move |ev: MouseEvent| {
        ev.stop_propagation();
        let css = css.clone();
        spawn_local(async move {
            match clipboard::write_text(&css).await {
                Ok(()) => {
                    let Some(generation) = indicator.try_update(|i| i.mark_copied()) else {
                        return;
                    };
                    let timeout = Timeout::new(reset_ms, move || {
                        indicator.try_update(|i| i.expire(generation));
                    });
                    reset_timer.try_update_value(|timer| *timer = Some(timeout));
                }
                Err(err) => log::debug!("クリップボードへの書き込みに失敗: {:?}", err),
            }
        });
    };

    let heading_style = format!("font-family: '{}'; font-weight: 700;", record.heading);
    let body_style = format!("font-family: '{}'; font-weight: 400;", record.body);
    let font_names = format!("{} + {}", record.heading, record.body);

    view! {
        <article
            class="pairing-card"
            class:locked=locked
            on:click=move |_| {
                if action.get_untracked() == CardAction::Unlock {
                    on_upgrade.run(());
                }
            }
        >
            <div class="card-meta">
                <span class="category">{record.category.as_str()}</span>
                <span class="tag">{record.tag.clone()}</span>
                {record.free.then(|| view! { <span class="free-badge">"FREE"</span> })}
            </div>
            <h3 class="preview-heading" style=heading_style>{heading_text}</h3>
            <p class="preview-body" style=body_style>{record.desc.clone()}</p>
            <div class="card-footer">
                <span class="font-names">{font_names}</span>
                <Show
                    when=locked
                    fallback=move || view! {
                        <button class="btn btn-small btn-secondary copy-btn" on:click=on_copy.clone()>
                            {move || indicator.with(|i| i.label())}
                        </button>
                    }
                >
                    <button
                        class="btn btn-small btn-tertiary lock-btn"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_upgrade.run(());
                        }
                    >
                        "Unlock with Pro"
                    </button>
                </Show>
            </div>
        </article>
    }
}
