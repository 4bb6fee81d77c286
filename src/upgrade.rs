//! アップグレードフロー(模擬決済)の状態遷移
//!
//! `AwaitingInput → Processing → Succeeded` の一方向のみ。
//! 送信時に2つの遅延エフェクトを返し、実際のタイマーは呼び出し側が管理する。
//! 呼び出し側はモーダル破棄時に未発火のタイマーを取り消すこと。

use crate::config::FlowTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    AwaitingInput,
    Processing,
    Succeeded,
}

impl FlowPhase {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FlowPhase::AwaitingInput => "Pay $9 and unlock Pro",
            FlowPhase::Processing | FlowPhase::Succeeded => "Processing...",
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        !matches!(self, FlowPhase::AwaitingInput)
    }
}

/// 送信後に予約されるエフェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    /// 成功画面へ切り替え
    RevealSuccess,
    /// Pro付与とクローズを通知
    Finish,
}

/// 親への通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowNotice {
    AccessGranted,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEffect {
    /// 送信時刻からの遅延
    pub delay_ms: u32,
    pub effect: FlowEffect,
}

/// 決済フォームの初期値(すべてダミー)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub cardholder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl PaymentDetails {
    pub fn placeholder() -> Self {
        Self {
            cardholder: "Jane Designer".into(),
            card_number: "4242 4242 4242 4242".into(),
            expiry: "12/28".into(),
            cvc: "123".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeFlow {
    phase: FlowPhase,
    timings: FlowTimings,
    finished: bool,
}

impl UpgradeFlow {
    pub fn new(timings: FlowTimings) -> Self {
        Self {
            phase: FlowPhase::AwaitingInput,
            timings,
            finished: false,
        }
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 支払いを送信する。入力待ち以外では何もしない
    pub fn submit(&mut self) -> Vec<ScheduledEffect> {
        if self.phase != FlowPhase::AwaitingInput {
            log::debug!("送信を無視: {:?}", self.phase);
            return Vec::new();
        }
        self.phase = FlowPhase::Processing;
        vec![
            ScheduledEffect {
                delay_ms: self.timings.success_view_ms,
                effect: FlowEffect::RevealSuccess,
            },
            ScheduledEffect {
                delay_ms: self.timings.finish_ms,
                effect: FlowEffect::Finish,
            },
        ]
    }

    /// 閉じるボタン・背景クリック。入力待ちの間だけクローズを通知する
    pub fn dismiss(&self) -> Option<FlowNotice> {
        (self.phase == FlowPhase::AwaitingInput).then_some(FlowNotice::Close)
    }

    /// 予約済みエフェクトを発火する
    ///
    /// `Finish` は送信ごとに一度だけ、必ず `AccessGranted` → `Close` の順で通知する。
    pub fn fire(&mut self, effect: FlowEffect) -> Vec<FlowNotice> {
        match effect {
            FlowEffect::RevealSuccess => {
                if self.phase == FlowPhase::Processing {
                    self.phase = FlowPhase::Succeeded;
                }
                Vec::new()
            }
            FlowEffect::Finish => {
                if self.phase == FlowPhase::AwaitingInput || self.finished {
                    log::debug!("Finishを無視: {:?} finished={}", self.phase, self.finished);
                    return Vec::new();
                }
                self.phase = FlowPhase::Succeeded;
                self.finished = true;
                vec![FlowNotice::AccessGranted, FlowNotice::Close]
            }
        }
    }
}

impl Default for UpgradeFlow {
    fn default() -> Self {
        Self::new(FlowTimings::default())
    }
}
