//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum FontPairError {
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IDが重複しています: {0}")]
    DuplicateId(u32),

    #[error("IDが連番ではありません: {id} (期待範囲: 1..={len})")]
    IdOutOfSequence { id: u32, len: usize },

    #[error("フォントペアが重複しています: {heading} / {body}")]
    DuplicatePairing { heading: String, body: String },

    #[error("レコード{id}の{field}が不正です: {reason}")]
    InvalidField {
        id: u32,
        field: &'static str,
        reason: &'static str,
    },

    #[error("設定エラー: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, FontPairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = FontPairError::Json(json_error);
        assert!(error.to_string().contains("JSON解析エラー"));
    }

    #[test]
    fn test_error_display_sequence() {
        let error = FontPairError::IdOutOfSequence { id: 7, len: 3 };
        assert_eq!(error.to_string(), "IDが連番ではありません: 7 (期待範囲: 1..=3)");
    }

    #[test]
    fn test_error_display_invalid_field() {
        let error = FontPairError::InvalidField {
            id: 4,
            field: "heading",
            reason: "空です",
        };
        assert_eq!(error.to_string(), "レコード4のheadingが不正です: 空です");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: FontPairError = json_error.into();
        assert!(matches!(error, FontPairError::Json(_)));
    }
}
