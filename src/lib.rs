//! FontPair Pro Core Library
//!
//! Web(WASM)フロントエンドから使われる、プラットフォーム非依存の型とロジック

pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fonts;
pub mod shell;
pub mod upgrade;

pub use card::{css_snippet, displayed_heading, is_locked, CardAction, CopyIndicator, CopyState};
pub use catalog::{filter_pairings, Catalog, Category, CategoryFilter, PairingRecord};
pub use config::{FlowTimings, SiteConfig};
pub use error::{FontPairError, Result};
pub use fonts::{build_stylesheet_url, derive_stylesheet_specifiers, stylesheet_url, FamilySpec, FontRole};
pub use shell::ShellState;
pub use upgrade::{FlowEffect, FlowNotice, FlowPhase, PaymentDetails, ScheduledEffect, UpgradeFlow};
