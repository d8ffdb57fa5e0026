use {super::*, wasm_bindgen::prelude::wasm_bindgen};

#[wasm_bindgen(module = "/js/define.js")]
extern "C" {
  pub fn define(
    name: &str,
    observed_attributes: Array,
    create: &Closure<dyn Fn(HtmlElement, ShadowRoot) -> JsValue>,
  );
}

#[wasm_bindgen(module = "/js/import.js")]
extern "C" {
  #[wasm_bindgen(js_name = importModule)]
  pub fn import_module(url: &str) -> Promise;
}
