//! クリップボード書き込み

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// 非同期でテキストを書き込む。失敗の扱いは呼び出し側に任せる
pub async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("windowが取得できません"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
