use super::*;

/// A custom element backed by a Rust value, one per element instance.
pub trait Component: Sized + 'static {
  fn name() -> &'static str;

  /// Attributes whose changes are delivered to `attribute_changed`.
  fn observed_attributes() -> Vec<&'static str>;

  fn initialize(element: HtmlElement, root: ShadowRoot) -> Result<Self, Error>;

  /// Define the element. Defining an already defined name does nothing.
  fn define() {
    let create = Closure::<dyn Fn(HtmlElement, ShadowRoot) -> JsValue>::new(
      |element: HtmlElement, root: ShadowRoot| {
        let result = Self::initialize(element, root)
          .and_then(|component| callbacks(Rc::new(component)));

        match result {
          Ok(callbacks) => callbacks.into(),
          Err(err) => {
            log::error!("error initializing <{}>: {err}", Self::name());
            JsValue::NULL
          }
        }
      },
    );

    js::define(
      Self::name(),
      Self::observed_attributes()
        .into_iter()
        .map(JsValue::from)
        .collect::<Array>(),
      &create,
    );

    create.forget();
  }

  fn connected(self: &Rc<Self>) {}

  /// Called with the new value, or `None` when the attribute was removed.
  fn attribute_changed(self: &Rc<Self>, _name: &str, _value: Option<String>) {}
}

fn callbacks<C: Component>(component: Rc<C>) -> Result<Object, Error> {
  let callbacks = Object::new();

  let connected = {
    let component = component.clone();
    Closure::<dyn Fn()>::new(move || component.connected())
  };

  let attribute_changed =
    Closure::<dyn Fn(JsValue, JsValue)>::new(move |name: JsValue, value: JsValue| {
      if let Some(name) = name.as_string() {
        component.attribute_changed(&name, value.as_string());
      }
    });

  Reflect::set(&callbacks, &"connected".into(), &connected.into_js_value())
    .map_err(Error::js)?;

  Reflect::set(
    &callbacks,
    &"attributeChanged".into(),
    &attribute_changed.into_js_value(),
  )
  .map_err(Error::js)?;

  Ok(callbacks)
}
