//! ペアリングカードの表示導出
//!
//! ロック判定、見出しテキスト、CSSスニペット、コピー表示状態

use crate::catalog::PairingRecord;

/// ロック中か(Pro限定かつ未購入)
pub fn is_locked(record: &PairingRecord, has_pro_access: bool) -> bool {
    !record.free && !has_pro_access
}

/// 見出しに表示するテキスト
///
/// 空白だけの入力はフォールバックに置き換え、それ以外は前後の空白も含めてそのまま表示する。
pub fn displayed_heading<'a>(preview: &'a str, fallback: &'a str) -> &'a str {
    if preview.trim().is_empty() {
        fallback
    } else {
        preview
    }
}

/// クリップボードにコピーするCSS
pub fn css_snippet(record: &PairingRecord) -> String {
    format!(
        "h1, h2, h3 {{\n  font-family: '{}';\n  font-weight: 700;\n}}\n\nbody {{\n  font-family: '{}';\n  font-weight: 400;\n}}\n",
        record.heading, record.body
    )
}

/// カードに表示する操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// CSSをコピー
    Copy,
    /// アップグレードへ誘導
    Unlock,
}

impl CardAction {
    pub fn for_record(record: &PairingRecord, has_pro_access: bool) -> Self {
        if is_locked(record, has_pro_access) {
            CardAction::Unlock
        } else {
            CardAction::Copy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

impl CopyState {
    pub fn label(&self) -> &'static str {
        match self {
            CopyState::Idle => "Copy CSS",
            CopyState::Copied => "Copied!",
        }
    }
}

/// コピー完了表示
///
/// コピーのたびに世代を進める。古い世代のリセットは無視されるので、
/// 連続コピーしても最後のコピーから一定時間は「Copied!」が残る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyIndicator {
    state: CopyState,
    generation: u64,
}

impl CopyIndicator {
    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    /// クリップボード書き込み完了時に呼ぶ。リセット時に渡す世代を返す
    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.state = CopyState::Copied;
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.state = CopyState::Idle;
        }
    }
}
