use super::*;

/// The player copy shipped alongside the element, loaded with a dynamic
/// `import()`.
pub struct PackagedPlayer {
  url: Url,
}

impl PackagedPlayer {
  pub fn new(url: Url) -> Self {
    Self { url }
  }

  /// The packaged player named by `settings`, relative to the document.
  pub fn from_settings(locations: &Locations, settings: &Settings) -> Result<Self, Error> {
    Ok(Self::new(
      locations
        .resolve(&settings.fallback)
        .context(error::PackagedLocation)?,
    ))
  }
}

impl Fallback<WindowRegistry> for PackagedPlayer {
  type Error = Error;
  type Module = PlayerModule;

  async fn import(&self) -> Result<Self::Module, Self::Error> {
    log::debug!("importing packaged player from {}", self.url);

    let module = JsFuture::from(js::import_module(self.url.as_str()))
      .await
      .map_err(Error::js)?;

    Ok(PlayerModule(module))
  }
}

/// Namespace object of the imported player module.
pub struct PlayerModule(JsValue);

impl Module<WindowRegistry> for PlayerModule {
  type Error = Error;

  async fn define_custom_elements(&self, registry: &WindowRegistry) -> Result<(), Self::Error> {
    let entry = Reflect::get(&self.0, &"defineCustomElements".into())
      .map_err(Error::js)?
      .dyn_into::<Function>()
      .ok()
      .context(error::EntryPointMissing)?;

    let result = entry
      .call1(&JsValue::UNDEFINED, registry.window())
      .map_err(Error::js)?;

    if let Some(promise) = result.dyn_ref::<Promise>() {
      JsFuture::from(promise.clone()).await.map_err(Error::js)?;
    }

    Ok(())
  }
}
