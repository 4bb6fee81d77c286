//! アップグレード(模擬決済)モーダル
//!
//! マウントごとに新しい `UpgradeFlow` を持つ。予約したタイマーはコンポーネントが所有し、
//! 破棄時にまとめて取り消すので、閉じた後に通知が届くことはない。

use fontpair_pro::{FlowNotice, FlowPhase, PaymentDetails, ScheduledEffect, SiteConfig, UpgradeFlow};
use gloo::timers::callback::Timeout;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

#[component]
pub fn UpgradeModal(
    /// 通知は発生順(Pro付与→クローズ)に届く
    #[prop(into)] on_notice: Callback<FlowNotice>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let flow = RwSignal::new(UpgradeFlow::new(config.timings));
    let pending = StoredValue::new_local(Vec::<Timeout>::new());
    on_cleanup(move || {
        pending.try_update_value(|timers| timers.clear());
    });

    let notify = move |notices: Vec<FlowNotice>| {
        for notice in notices {
            on_notice.run(notice);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let scheduled = flow.try_update(|f| f.submit()).unwrap_or_default();
        for ScheduledEffect { delay_ms, effect } in scheduled {
            let timer = Timeout::new(delay_ms, move || {
                let notices = flow.try_update(|f| f.fire(effect)).unwrap_or_default();
                notify(notices);
            });
            pending.try_update_value(|timers| timers.push(timer));
        }
    };

    let on_dismiss = move || {
        if let Some(notice) = flow.with_untracked(|f| f.dismiss()) {
            notify(vec![notice]);
        }
    };

    let phase = move || flow.with(|f| f.phase());
    let payment = PaymentDetails::placeholder();

    view! {
        <div class="modal-overlay" on:click=move |_| on_dismiss()>
            <div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
                <Show
                    when=move || phase() == FlowPhase::Succeeded
                    fallback=move || view! {
                        <PaymentForm
                            payment=payment.clone()
                            phase=Signal::derive(phase)
                            on_submit=on_submit
                            on_dismiss=on_dismiss
                        />
                    }
                >
                    <div class="modal-success">
                        <div class="success-icon">"✓"</div>
                        <h2>"Welcome to Pro!"</h2>
                        <p>"Every pairing is now unlocked."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn PaymentForm<FS, FD>(
    payment: PaymentDetails,
    phase: Signal<FlowPhase>,
    on_submit: FS,
    on_dismiss: FD,
) -> impl IntoView
where
    FS: Fn(SubmitEvent) + 'static + Clone + Send + Sync,
    FD: Fn() + 'static + Clone + Send + Sync,
{
    view! {
        <form class="payment-form" on:submit=on_submit>
            <h2>"Upgrade to FontPair Pro"</h2>
            <p class="text-muted">"One-time payment. This is a demo, no card is charged."</p>

            <div class="form-group">
                <label for="cardholder">"Name on card"</label>
                <input type="text" id="cardholder" value=payment.cardholder />
            </div>
            <div class="form-group">
                <label for="card-number">"Card number"</label>
                <input type="text" id="card-number" value=payment.card_number />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="expiry">"Expiry"</label>
                    <input type="text" id="expiry" value=payment.expiry />
                </div>
                <div class="form-group">
                    <label for="cvc">"CVC"</label>
                    <input type="text" id="cvc" value=payment.cvc />
                </div>
            </div>

            <div class="modal-actions">
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || phase.get().is_submit_disabled()
                >
                    {move || phase.get().submit_label()}
                </button>
                <button
                    type="button"
                    class="btn btn-tertiary"
                    disabled=move || phase.get().is_submit_disabled()
                    on:click=move |_| on_dismiss()
                >
                    "Maybe later"
                </button>
            </div>
        </form>
    }
}
