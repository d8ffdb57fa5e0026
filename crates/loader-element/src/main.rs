use {
  self::element::PlayerLoader,
  hypermedia::{
    error::Error,
    loader::{Attribute, Config, Http, Loader, Locations, Settings},
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
    wasm_bindgen_futures::{self, spawn_local},
    web_sys::{HtmlElement, ShadowRoot},
    Component, DomPage, PackagedPlayer, WindowRegistry,
  },
  std::{
    cell::{Cell, RefCell},
    rc::Rc,
  },
  strum::IntoEnumIterator,
};

mod element;

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  hypermedia::initialize_console(log::Level::Info)?;
  PlayerLoader::define();
  Ok(())
}
