//! フォント読み込みのブラウザテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

use fontpair_pro::{Catalog, SiteConfig};
use fontpair_web::font_loader::load_fonts;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn stylesheet_hrefs() -> Vec<String> {
    let document = web_sys::window().unwrap().document().unwrap();
    let nodes = document
        .query_selector_all("head link[rel=stylesheet]")
        .expect("セレクタが不正");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<web_sys::Element>()?.get_attribute("href"))
        .collect()
}

/// 呼び出すたびに<link>が1つ増える(冪等ではない)
#[wasm_bindgen_test]
fn test_each_call_appends_one_link() {
    let catalog = Catalog::builtin().expect("カタログ読み込み失敗");
    let config = SiteConfig::default();
    let before = stylesheet_hrefs().len();

    load_fonts(catalog.records(), &config).expect("1回目の読み込み失敗");
    assert_eq!(stylesheet_hrefs().len(), before + 1);

    load_fonts(catalog.records(), &config).expect("2回目の読み込み失敗");
    assert_eq!(stylesheet_hrefs().len(), before + 2);
}

/// 追加された<link>はフォントサービスを参照する
#[wasm_bindgen_test]
fn test_link_points_to_font_service() {
    let catalog = Catalog::builtin().unwrap();
    load_fonts(catalog.records(), &SiteConfig::default()).unwrap();

    let last = stylesheet_hrefs().pop().expect("<link>がない");
    assert!(last.starts_with("https://fonts.googleapis.com/css2?family="));
    assert!(last.contains("Space+Mono:wght@700;800"));
    assert!(last.ends_with("&display=swap"));
}

/// 設定したエンドポイントが使われる
#[wasm_bindgen_test]
fn test_link_uses_configured_endpoint() {
    let catalog = Catalog::builtin().unwrap();
    let config = SiteConfig {
        font_service_url: "https://fonts.example.com/css2".into(),
        ..SiteConfig::default()
    };
    load_fonts(catalog.records(), &config).unwrap();

    let last = stylesheet_hrefs().pop().unwrap();
    assert!(last.starts_with("https://fonts.example.com/css2?"));
}
