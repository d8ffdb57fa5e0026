use {super::*, loader::Attribute};

/// Element attributes, as command line options.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct Attributes {
  #[arg(long, help = "Load remote player and XML from <BASE_LOCATION>.")]
  pub(crate) base_location: Option<String>,
  #[arg(long, help = "Allow playback.")]
  pub(crate) can_play: bool,
  #[arg(long, help = "Player height as a CSS length.")]
  pub(crate) height: Option<String>,
  #[arg(long, help = "Start at item <INITIAL_INDEX>.")]
  pub(crate) initial_index: Option<String>,
  #[arg(long, help = "Use <INLINE_XML_DATA> instead of loading XML.")]
  pub(crate) inline_xml_data: Option<String>,
  #[arg(long, help = "Load XML from <XML_LOCATION>.")]
  pub(crate) xml_location: Option<String>,
}

impl Attributes {
  pub(crate) fn config(&self) -> Config {
    let mut config = Config::default();

    for (attribute, value) in self.attributes() {
      config.set_attribute(attribute, Some(&value));
    }

    config
  }

  /// Present attributes, as they would appear on the element.
  pub(crate) fn attributes(&self) -> Vec<(Attribute, String)> {
    let mut attributes = Vec::new();

    let mut push = |attribute, value: &Option<String>| {
      if let Some(value) = value {
        attributes.push((attribute, value.clone()));
      }
    };

    push(Attribute::BaseLocation, &self.base_location);
    push(Attribute::Height, &self.height);
    push(Attribute::InitialIndex, &self.initial_index);
    push(Attribute::InlineXmlData, &self.inline_xml_data);
    push(Attribute::XmlLocation, &self.xml_location);

    if self.can_play {
      attributes.push((Attribute::CanPlay, String::new()));
    }

    attributes.sort();

    attributes
  }
}
