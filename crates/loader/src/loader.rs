use super::*;

/// Counts resolution attempts of one kind. Only the most recent attempt may
/// write its results.
#[derive(Debug, Default)]
struct Generation(Cell<u64>);

impl Generation {
  fn begin(&self) -> u64 {
    let generation = self.0.get() + 1;
    self.0.set(generation);
    generation
  }

  fn superseded(&self, generation: u64) -> bool {
    self.0.get() != generation
  }
}

/// Resolves the player's scripts and content for one element.
pub struct Loader<T, P, R, F> {
  content: Generation,
  fallback: F,
  locations: Locations,
  page: P,
  registry: R,
  scripts: Generation,
  settings: Settings,
  state: RefCell<ResolutionState>,
  transport: T,
}

impl<T, P, R, F> Loader<T, P, R, F>
where
  T: Transport,
  P: Page,
  R: Registry,
  F: Fallback<R>,
{
  pub fn new(
    settings: Settings,
    locations: Locations,
    transport: T,
    page: P,
    registry: R,
    fallback: F,
  ) -> Self {
    Self {
      content: Generation::default(),
      fallback,
      locations,
      page,
      registry,
      scripts: Generation::default(),
      settings,
      state: RefCell::default(),
      transport,
    }
  }

  pub fn page(&self) -> &P {
    &self.page
  }

  pub fn registry(&self) -> &R {
    &self.registry
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  pub fn state(&self) -> ResolutionState {
    self.state.borrow().clone()
  }

  /// Run both resolutions, scripts first.
  pub async fn resolve(&self, config: &Config) {
    self.resolve_scripts(&config.base_location).await;
    self.resolve_content(config).await;
  }

  /// Make sure the player's custom elements are registered, preferring a
  /// remote copy under `base_location` to the packaged one.
  ///
  /// Failures are logged, never returned.
  pub async fn resolve_scripts(&self, base_location: &str) {
    let generation = self.scripts.begin();

    if self.state.borrow().scripts_ready() {
      log::debug!("player already registered, ignoring base location `{base_location}`");
      return;
    }

    if !base_location.is_empty() {
      match self.remote(base_location, generation).await {
        Ok(Some(source)) => {
          self.ready(source);
          return;
        }
        Ok(None) => {
          log::debug!("script resolution for `{base_location}` superseded");
          return;
        }
        Err(_) if self.scripts.superseded(generation) => {
          log::debug!("script resolution for `{base_location}` superseded");
          return;
        }
        Err(err) => {
          log::warn!("remote player unavailable, using packaged copy: {}", err.chain());
        }
      }
    }

    match self.packaged(generation).await {
      Ok(true) => self.ready(ScriptSource::Packaged),
      Ok(false) => log::debug!("packaged player registration superseded"),
      Err(err) => log::error!("failed to load packaged player: {}", err.chain()),
    }
  }

  /// Resolve the XML payload for `config`, replacing any previous result.
  ///
  /// Failures are logged, never returned.
  pub async fn resolve_content(&self, config: &Config) {
    let generation = self.content.begin();

    {
      let mut state = self.state.borrow_mut();
      state.xml_base = None;
      state.xml_data = None;
    }

    if let Some(inline) = &config.inline_xml_data {
      log::debug!("using inline XML data");
      self.state.borrow_mut().xml_data = Some(inline.clone());
      return;
    }

    let location = match &config.xml_location {
      Some(location) => location.clone(),
      None if !config.base_location.is_empty() => {
        self.state.borrow_mut().xml_base = Some(config.base_location.clone());
        Locations::index(&config.base_location)
      }
      None => {
        log::debug!("no XML location to load");
        return;
      }
    };

    let result = self.fetch(&location).await;

    if self.content.superseded(generation) {
      log::debug!("XML load from `{location}` superseded");
      return;
    }

    match result {
      Ok(xml) => {
        log::info!("loaded {} bytes of XML from `{location}`", xml.len());
        self.state.borrow_mut().xml_data = Some(xml);
      }
      Err(err) => log::warn!("failed to load XML: {}", err.chain()),
    }
  }

  /// The player element for `config` and the current resolution state.
  pub fn render(&self, config: &Config) -> PlayerHtml {
    let state = self.state.borrow();

    PlayerHtml {
      can_play: config.can_play,
      height: config.height.clone(),
      initial_index: config.initial_index,
      tag: self.settings.player_tag.clone(),
      xml_base: state.xml_base.clone(),
      xml_data: state.xml_data.clone(),
    }
  }

  fn ready(&self, source: ScriptSource) {
    log::info!("player registered from {source}");
    self.state.borrow_mut().scripts = Some(source);
  }

  async fn remote(&self, base_location: &str, generation: u64) -> Result<Option<ScriptSource>> {
    let module = self.locations.module(base_location)?;
    let legacy = self.locations.legacy(base_location)?;

    log::debug!("probing {module}");

    let status = self
      .transport
      .head(&module, self.settings.timeout())
      .await
      .boxed()
      .context(error::Request {
        url: module.clone(),
      })?;

    if self.scripts.superseded(generation) {
      return Ok(None);
    }

    ensure!(
      status.is_success(),
      error::Status {
        url: module.clone(),
        status,
      }
    );

    self.inject(ScriptKind::Module, &module)?;

    // the module script is already loading, so falling back would register a
    // second copy
    if let Err(err) = self.inject(ScriptKind::Legacy, &legacy) {
      log::warn!("{}", err.chain());
    }

    Ok(Some(ScriptSource::Remote { module, legacy }))
  }

  fn inject(&self, kind: ScriptKind, url: &Url) -> Result {
    self
      .page
      .inject_script(&Script {
        kind,
        src: url.clone(),
      })
      .boxed()
      .context(error::Inject {
        kind,
        url: url.clone(),
      })
  }

  async fn packaged(&self, generation: u64) -> Result<bool> {
    let module = self.fallback.import().await.boxed().context(error::Import)?;

    if self.scripts.superseded(generation) {
      return Ok(false);
    }

    module
      .define_custom_elements(&self.registry)
      .await
      .boxed()
      .context(error::Define)?;

    let tag = &self.settings.player_tag;

    ensure!(self.registry.is_defined(tag), error::Unregistered { tag });

    Ok(true)
  }

  async fn fetch(&self, location: &str) -> Result<String> {
    let url = self.locations.resolve(location)?;

    log::debug!("fetching {url}");

    let response = self
      .transport
      .get(&url, self.settings.timeout())
      .await
      .boxed()
      .context(error::Request { url: url.clone() })?;

    ensure!(
      response.status.is_success(),
      error::Status {
        url,
        status: response.status,
      }
    );

    Ok(response.body)
  }
}
