use super::*;

/// `<player-loader>`: loads the player, then hosts it in its shadow root.
pub(crate) struct PlayerLoader {
  config: RefCell<Config>,
  connected: Cell<bool>,
  loader: Loader<Http, DomPage, WindowRegistry, PackagedPlayer>,
  root: ShadowRoot,
}

impl PlayerLoader {
  fn render(&self) {
    let player = self.loader.render(&self.config.borrow());
    self.root.set_inner_html(&player.to_string());
  }

  fn resolve_scripts(self: &Rc<Self>) {
    let element = self.clone();
    let base_location = self.config.borrow().base_location.clone();
    spawn_local(async move {
      element.loader.resolve_scripts(&base_location).await;
    });
  }

  fn resolve_content(self: &Rc<Self>) {
    let element = self.clone();
    let config = self.config.borrow().clone();
    spawn_local(async move {
      element.loader.resolve_content(&config).await;
      element.render();
    });
  }
}

impl Component for PlayerLoader {
  fn name() -> &'static str {
    "player-loader"
  }

  fn observed_attributes() -> Vec<&'static str> {
    Attribute::iter().map(Attribute::name).collect()
  }

  fn initialize(_element: HtmlElement, root: ShadowRoot) -> Result<Self, Error> {
    let window = hypermedia::window()?;
    let settings = Settings::default();
    let locations = Locations::new(hypermedia::document_url(&window));

    Ok(Self {
      config: RefCell::default(),
      connected: Cell::new(false),
      loader: Loader::new(
        settings.clone(),
        locations.clone(),
        Http::default(),
        DomPage::new(&window)?,
        WindowRegistry::new(window),
        PackagedPlayer::from_settings(&locations, &settings)?,
      ),
      root,
    })
  }

  fn connected(self: &Rc<Self>) {
    // moving the element around the document reconnects it
    if self.connected.replace(true) {
      return;
    }

    self.render();
    self.resolve_scripts();
    self.resolve_content();
  }

  fn attribute_changed(self: &Rc<Self>, name: &str, value: Option<String>) {
    let Ok(attribute) = name.parse::<Attribute>() else {
      return;
    };

    let change = self
      .config
      .borrow_mut()
      .set_attribute(attribute, value.as_deref());

    // initial attributes arrive before connection
    if !self.connected.get() {
      return;
    }

    if change.scripts {
      self.resolve_scripts();
    }

    if change.content {
      self.resolve_content();
    }

    if change.render {
      self.render();
    }
  }
}
