use super::*;

#[derive(
  Clone, Copy, Debug, EnumIter, EnumString, Eq, IntoStaticStr, Ord, PartialEq, PartialOrd,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Attribute {
  BaseLocation,
  CanPlay,
  Height,
  InitialIndex,
  InlineXmlData,
  XmlLocation,
}

impl Attribute {
  pub fn name(self) -> &'static str {
    self.into()
  }
}

impl Display for Attribute {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// What an attribute change requires of the element.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Change {
  pub content: bool,
  pub render: bool,
  pub scripts: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  pub base_location: String,
  pub can_play: bool,
  pub height: String,
  pub initial_index: u32,
  pub inline_xml_data: Option<String>,
  pub xml_location: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_location: String::new(),
      can_play: false,
      height: Self::DEFAULT_HEIGHT.into(),
      initial_index: 0,
      inline_xml_data: None,
      xml_location: None,
    }
  }
}

impl Config {
  pub const DEFAULT_HEIGHT: &'static str = "75vh";

  /// Apply a new attribute value, `None` meaning the attribute was removed.
  pub fn set_attribute(&mut self, attribute: Attribute, value: Option<&str>) -> Change {
    let mut change = Change {
      render: true,
      ..Change::default()
    };

    match attribute {
      Attribute::BaseLocation => {
        let value = value.unwrap_or_default();
        if self.base_location == value {
          return Change::default();
        }
        self.base_location = value.into();
        change.scripts = true;
        change.content = self.xml_location.is_none() && self.inline_xml_data.is_none();
      }
      Attribute::CanPlay => {
        self.can_play = value.is_some_and(|value| value != "false");
      }
      Attribute::Height => {
        self.height = value.unwrap_or(Self::DEFAULT_HEIGHT).into();
      }
      Attribute::InitialIndex => {
        self.initial_index = match value.map(str::trim) {
          None => 0,
          Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid {attribute} `{value}`");
            0
          }),
        };
      }
      Attribute::InlineXmlData => {
        if self.inline_xml_data.as_deref() == value {
          return Change::default();
        }
        self.inline_xml_data = value.map(Into::into);
        change.content = true;
      }
      Attribute::XmlLocation => {
        let value = value.filter(|value| !value.is_empty());
        if self.xml_location.as_deref() == value {
          return Change::default();
        }
        self.xml_location = value.map(Into::into);
        change.content = true;
      }
    }

    change
  }
}
