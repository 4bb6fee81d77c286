//! Webフォントのスタイルシート読み込み
//!
//! 呼び出すたびに `<link>` を1つ `<head>` に追加する(冪等ではない)。
//! アプリはマウント時に一度だけ呼ぶ。

use fontpair_pro::{stylesheet_url, PairingRecord, SiteConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlLinkElement};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("documentが取得できません"))
}

pub fn load_fonts(records: &[PairingRecord], config: &SiteConfig) -> Result<(), JsValue> {
    let document = document()?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("<head>が見つかりません"))?;

    let href = stylesheet_url(records, config);
    let link: HtmlLinkElement = document.create_element("link")?.dyn_into()?;
    link.set_rel("stylesheet");
    link.set_href(&href);
    head.append_child(&link)?;

    log::info!("フォント読み込み: {}ファミリー", href.matches("family=").count());
    Ok(())
}
