#![allow(async_fn_in_trait)]

use {
  self::error::Error,
  js_sys::{Array, Function, Object, Promise, Reflect},
  loader::{Fallback, Locations, Module, Page, Registry, Script, ScriptKind, Settings},
  snafu::{OptionExt, ResultExt, Snafu},
  std::rc::Rc,
  url::Url,
  wasm_bindgen::{closure::Closure, JsCast, JsError, JsValue},
  wasm_bindgen_futures::JsFuture,
  web_sys::{Document, HtmlElement, HtmlScriptElement, ShadowRoot, Window},
};

pub use {
  self::{
    component::Component,
    packaged::{PackagedPlayer, PlayerModule},
    page::DomPage,
    registry::WindowRegistry,
  },
  js_sys, loader, log, wasm_bindgen, wasm_bindgen_futures, web_sys,
};

pub mod error;

mod component;
mod js;
mod packaged;
mod page;
mod registry;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

pub fn window() -> Result<Window, Error> {
  web_sys::window().context(error::WindowMissing)
}

/// URL of the current document, without query or fragment.
pub fn document_url(window: &Window) -> Option<Url> {
  let mut url = Url::parse(&window.location().href().ok()?).ok()?;
  url.set_fragment(None);
  url.set_query(None);
  Some(url)
}
