//! テスト用の仮想タイムライン
//!
//! 実時間を待たずに遅延エフェクトを発火させる。

#![allow(dead_code)]

struct Pending<E> {
    due_ms: u64,
    seq: u64,
    event: E,
}

/// 仮想時刻で予約イベントを管理する
pub struct Timeline<E> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, delay_ms: u32, event: E) {
        self.pending.push(Pending {
            due_ms: self.now_ms + u64::from(delay_ms),
            seq: self.next_seq,
            event,
        });
        self.next_seq += 1;
    }

    /// 指定時刻まで進め、期限が来たイベントを予約順に返す
    pub fn advance_to(&mut self, t_ms: u64) -> Vec<E> {
        assert!(t_ms >= self.now_ms, "時間を巻き戻せません");
        self.now_ms = t_ms;

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_ms <= t_ms);
        self.pending = rest;
        due.sort_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.event).collect()
    }

    pub fn advance(&mut self, by_ms: u64) -> Vec<E> {
        self.advance_to(self.now_ms + by_ms)
    }

    /// アンマウント相当: 未発火のイベントをすべて破棄
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }
}
