//! Webフォント読み込み用スタイルシートURLの構築
//!
//! カタログからファミリー指定子を導出し、フォントサービスへの単一URLにまとめる。
//! DOMへの挿入はWeb側(font_loader)が担当する。

use crate::catalog::PairingRecord;
use crate::config::SiteConfig;
use std::collections::HashSet;
use std::fmt;

/// フォントの用途
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Heading,
    Body,
}

impl FontRole {
    pub fn weights(&self) -> &'static [u16] {
        match self {
            FontRole::Heading => &[700, 800],
            FontRole::Body => &[400, 500],
        }
    }
}

/// スタイルシート指定子: (ファミリー名, ウェイトセット)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilySpec {
    family: String,
    role: FontRole,
}

impl FamilySpec {
    pub fn new(name: &str, role: FontRole) -> Self {
        Self {
            family: name.replace(' ', "+"),
            role,
        }
    }

    /// `+` 連結済みのファミリー名
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn role(&self) -> FontRole {
        self.role
    }

    pub fn weights(&self) -> &'static [u16] {
        self.role.weights()
    }
}

impl fmt::Display for FamilySpec {
    /// `Raleway:wght@700;800` 形式
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:wght@", self.family)?;
        for (i, weight) in self.weights().iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", weight)?;
        }
        Ok(())
    }
}

/// 指定子を導出する
///
/// 各レコードについて見出し→本文の順に並べ、初出順を保ったまま重複を除く。
/// 見出しと本文の両方で使われるファミリーはウェイトセットごとに1つずつ残る。
pub fn derive_stylesheet_specifiers(records: &[PairingRecord]) -> Vec<FamilySpec> {
    let mut seen = HashSet::new();
    let mut specs = Vec::new();
    for record in records {
        for spec in [
            FamilySpec::new(&record.heading, FontRole::Heading),
            FamilySpec::new(&record.body, FontRole::Body),
        ] {
            if seen.insert(spec.clone()) {
                specs.push(spec);
            }
        }
    }
    specs
}

/// 指定子を単一のURLにまとめる
pub fn build_stylesheet_url(base: &str, specs: &[FamilySpec], display: &str) -> String {
    let mut url = String::from(base);
    url.push('?');
    for spec in specs {
        url.push_str("family=");
        url.push_str(&spec.to_string());
        url.push('&');
    }
    url.push_str("display=");
    url.push_str(display);
    url
}

pub fn stylesheet_url(records: &[PairingRecord], config: &SiteConfig) -> String {
    let specs = derive_stylesheet_specifiers(records);
    build_stylesheet_url(&config.font_service_url, &specs, &config.font_display)
}
