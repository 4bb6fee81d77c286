//! フォントペアカタログ
//!
//! 固定データテーブル(data/catalog.json)を読み込み、ロード時に一度だけ不変条件を検証する。
//! 検証済みの `Catalog` はレンダリングごとに再検証しない。

use crate::error::{FontPairError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// 説明文の最低文字数(この値を超える必要がある)
pub const MIN_DESC_CHARS: usize = 10;

/// スタイルカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Modern,
    Classic,
    Editorial,
    Minimal,
    Playful,
    Monospace,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Modern => "Modern",
            Category::Classic => "Classic",
            Category::Editorial => "Editorial",
            Category::Minimal => "Minimal",
            Category::Playful => "Playful",
            Category::Monospace => "Monospace",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カテゴリフィルタ
///
/// `All` はフィルタ専用の選択肢で、レコードのカテゴリにはならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// フォントペア1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRecord {
    pub id: u32,
    pub heading: String,
    pub body: String,
    pub category: Category,
    pub tag: String,
    pub free: bool,
    pub desc: String,
}

/// 検証済みカタログ
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<PairingRecord>,
}

impl Catalog {
    /// 同梱のカタログを読み込む
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<PairingRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn new(records: Vec<PairingRecord>) -> Result<Self> {
        validate(&records)?;
        log::debug!(
            "カタログ読み込み: {}件 (無料 {}件)",
            records.len(),
            records.iter().filter(|r| r.free).count()
        );
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PairingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&PairingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// フィルタ一覧: 先頭に `All`、続いてカタログに現れる順のカテゴリ(重複なし)
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut filters = vec![CategoryFilter::All];
        for record in &self.records {
            if seen.insert(record.category) {
                filters.push(CategoryFilter::Only(record.category));
            }
        }
        filters
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<&PairingRecord> {
        filter_pairings(&self.records, filter)
    }
}

/// カテゴリで絞り込む(元の並び順を保持)
pub fn filter_pairings(records: &[PairingRecord], filter: CategoryFilter) -> Vec<&PairingRecord> {
    records.iter().filter(|r| filter.matches(r.category)).collect()
}

fn validate(records: &[PairingRecord]) -> Result<()> {
    let len = records.len();
    let mut ids = HashSet::with_capacity(len);
    let mut pairs = HashSet::with_capacity(len);

    for record in records {
        if record.id == 0 || record.id as usize > len {
            return Err(FontPairError::IdOutOfSequence { id: record.id, len });
        }
        if !ids.insert(record.id) {
            return Err(FontPairError::DuplicateId(record.id));
        }

        check_family_name(record.id, "heading", &record.heading)?;
        check_family_name(record.id, "body", &record.body)?;

        if record.tag.trim().is_empty() {
            return Err(invalid(record.id, "tag", "空です"));
        }
        if record.desc.chars().count() <= MIN_DESC_CHARS {
            return Err(invalid(record.id, "desc", "短すぎます"));
        }

        if !pairs.insert((record.heading.as_str(), record.body.as_str())) {
            return Err(FontPairError::DuplicatePairing {
                heading: record.heading.clone(),
                body: record.body.clone(),
            });
        }
    }

    Ok(())
}

fn check_family_name(id: u32, field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(id, field, "空です"));
    }
    if name.trim() != name {
        return Err(invalid(id, field, "前後に空白があります"));
    }
    // URLのクエリにそのまま埋め込むため英数字とスペース、ハイフンのみ許す
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-') {
        return Err(invalid(id, field, "使用できない文字を含みます"));
    }
    Ok(())
}

fn invalid(id: u32, field: &'static str, reason: &'static str) -> FontPairError {
    FontPairError::InvalidField { id, field, reason }
}
