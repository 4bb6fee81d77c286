//! サイト設定
//!
//! 既定値を持ち、JSONで部分的に上書きできる。

use crate::error::{FontPairError, Result};
use serde::{Deserialize, Serialize};

/// タイマー設定(ミリ秒)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowTimings {
    /// 送信から成功画面に切り替わるまで
    pub success_view_ms: u32,
    /// 送信からPro付与・モーダルを閉じるまで
    pub finish_ms: u32,
    /// 「Copied!」表示を元に戻すまで
    pub copied_reset_ms: u32,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            success_view_ms: 1600,
            finish_ms: 3600,
            copied_reset_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub font_service_url: String,
    pub font_display: String,
    pub default_preview: String,
    pub heading_fallback: String,
    pub preview_max_chars: usize,
    pub timings: FlowTimings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            font_service_url: "https://fonts.googleapis.com/css2".into(),
            font_display: "swap".into(),
            default_preview: "The quick brown fox jumps over the lazy dog".into(),
            heading_fallback: "Your headline here".into(),
            preview_max_chars: 50,
            timings: FlowTimings::default(),
        }
    }
}

impl SiteConfig {
    /// 設定ソースがあればパースして検証し、なければ既定値を返す
    pub fn load(source: Option<&str>) -> Result<Self> {
        match source {
            Some(json) if !json.trim().is_empty() => {
                let config: SiteConfig = serde_json::from_str(json)?;
                config.validate()?;
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.font_service_url.starts_with("https://") {
            return Err(FontPairError::Config(format!(
                "フォントサービスURLはhttpsである必要があります: {}",
                self.font_service_url
            )));
        }
        if self.font_display.trim().is_empty() {
            return Err(FontPairError::Config("fontDisplayが空です".into()));
        }
        if self.preview_max_chars == 0 {
            return Err(FontPairError::Config("previewMaxCharsは1以上が必要です".into()));
        }
        if self.default_preview.trim().is_empty() {
            return Err(FontPairError::Config("defaultPreviewが空です".into()));
        }
        if self.default_preview.chars().count() > self.preview_max_chars {
            return Err(FontPairError::Config(format!(
                "defaultPreviewが{}文字を超えています",
                self.preview_max_chars
            )));
        }
        if self.heading_fallback.trim().is_empty() {
            return Err(FontPairError::Config("headingFallbackが空です".into()));
        }
        // 成功画面は必ずPro付与より先に表示される
        if self.timings.finish_ms <= self.timings.success_view_ms {
            return Err(FontPairError::Config(format!(
                "finishMs({})はsuccessViewMs({})より大きい必要があります",
                self.timings.finish_ms, self.timings.success_view_ms
            )));
        }
        Ok(())
    }
}
