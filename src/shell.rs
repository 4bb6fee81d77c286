//! アプリケーションシェルの状態
//!
//! プレビュー文字列・カテゴリフィルタ・Pro権限・モーダル表示を保持し、
//! グリッドに表示するペアを導出する。

use crate::card;
use crate::catalog::{filter_pairings, Catalog, CategoryFilter, PairingRecord};
use crate::config::SiteConfig;
use crate::upgrade::FlowNotice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    preview_text: String,
    active_filter: CategoryFilter,
    has_pro_access: bool,
    modal_open: bool,
    preview_max_chars: usize,
}

impl ShellState {
    pub fn new(config: &SiteConfig) -> Self {
        let mut state = Self {
            preview_text: String::new(),
            active_filter: CategoryFilter::All,
            has_pro_access: false,
            modal_open: false,
            preview_max_chars: config.preview_max_chars,
        };
        state.set_preview_text(config.default_preview.as_str());
        state
    }

    pub fn preview_text(&self) -> &str {
        &self.preview_text
    }

    pub fn active_filter(&self) -> CategoryFilter {
        self.active_filter
    }

    pub fn has_pro_access(&self) -> bool {
        self.has_pro_access
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// 入力をそのまま保持する(上限文字数で切り詰め)
    pub fn set_preview_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.preview_text = match text.char_indices().nth(self.preview_max_chars) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text,
        };
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.active_filter = filter;
    }

    pub fn request_upgrade(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Pro権限を付与する。一度付与したら戻らない
    pub fn grant_pro_access(&mut self) {
        self.has_pro_access = true;
    }

    pub fn apply_notice(&mut self, notice: FlowNotice) {
        match notice {
            FlowNotice::AccessGranted => self.grant_pro_access(),
            FlowNotice::Close => self.close_modal(),
        }
    }

    pub fn visible_pairings<'a>(&self, catalog: &'a Catalog) -> Vec<&'a PairingRecord> {
        filter_pairings(catalog.records(), self.active_filter)
    }

    pub fn is_locked(&self, record: &PairingRecord) -> bool {
        card::is_locked(record, self.has_pro_access)
    }

    /// カタログ全体でロック中の件数
    pub fn locked_count(&self, catalog: &Catalog) -> usize {
        catalog.records().iter().filter(|r| self.is_locked(r)).count()
    }

    pub fn shows_free_tier(&self) -> bool {
        !self.has_pro_access
    }

    pub fn shows_pro_badge(&self) -> bool {
        self.has_pro_access
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}
