use {super::*, url::Url};

#[derive(Parser)]
pub(crate) struct Resolve {
  #[command(flatten)]
  attributes: Attributes,
  #[arg(long, help = "Resolve relative locations against <DOCUMENT>.")]
  document: Option<Url>,
  #[arg(long, help = "Print resolution as JSON.")]
  json: bool,
  #[arg(long, help = "Load loader settings from YAML file at <SETTINGS>.")]
  settings: Option<Utf8PathBuf>,
}

/// What an element with the given attributes would end up rendering.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct Resolution {
  pub(crate) defined: Vec<String>,
  pub(crate) player: String,
  pub(crate) scripts: Vec<String>,
  pub(crate) source: Option<String>,
  pub(crate) xml_base: Option<String>,
  pub(crate) xml_data: Option<String>,
}

impl Display for Resolution {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match &self.source {
      Some(source) => writeln!(f, "player registered from {source}")?,
      None => writeln!(f, "player not registered")?,
    }

    for script in &self.scripts {
      writeln!(f, "{script}")?;
    }

    for tag in &self.defined {
      writeln!(f, "defined <{tag}>")?;
    }

    writeln!(f, "{}", self.player)
  }
}

impl Resolve {
  pub(crate) fn run(self) -> Result {
    let settings = match &self.settings {
      Some(path) => Self::load(path)?,
      None => Settings::default(),
    };

    let config = self.attributes.config();

    let resolution = Runtime::new()
      .context(error::Runtime)?
      .block_on(resolve(settings, self.document, &config));

    if self.json {
      println!(
        "{}",
        serde_json::to_string_pretty(&resolution).context(error::SerializeResolution)?
      );
    } else {
      print!("{resolution}");
    }

    Ok(())
  }

  fn load(path: &Utf8Path) -> Result<Settings> {
    let yaml = fs::read_to_string(path).context(error::Io { path })?;
    serde_yaml::from_str(&yaml).context(error::DeserializeSettings { path })
  }
}

pub(crate) async fn resolve(
  settings: Settings,
  document: Option<Url>,
  config: &Config,
) -> Resolution {
  let loader = Loader::new(
    settings,
    Locations::new(document),
    Http::default(),
    Document::default(),
    TagRegistry::default(),
    Packaged,
  );

  loader.resolve(config).await;

  let state = loader.state();

  Resolution {
    defined: loader.registry().tags(),
    player: loader.render(config).to_string(),
    scripts: loader
      .page()
      .scripts()
      .iter()
      .map(ToString::to_string)
      .collect(),
    source: state.scripts.as_ref().map(ToString::to_string),
    xml_base: state.xml_base,
    xml_data: state.xml_data,
  }
}
