use super::*;

/// Resolves the locations a player root exposes, relative to the document
/// when one is known.
#[derive(Clone, Debug, Default)]
pub struct Locations {
  document: Option<Url>,
}

impl Locations {
  const INDEX: &'static str = "index.xml";
  const LEGACY: &'static str = "code/player.js";
  const MODULE: &'static str = "code/player.esm.js";

  pub fn new(document: Option<Url>) -> Self {
    Self { document }
  }

  pub fn resolve(&self, location: &str) -> Result<Url> {
    Url::options()
      .base_url(self.document.as_ref())
      .parse(location)
      .context(error::Location { location })
  }

  pub fn module(&self, base: &str) -> Result<Url> {
    self.resolve(&Self::join(base, Self::MODULE))
  }

  pub fn legacy(&self, base: &str) -> Result<Url> {
    self.resolve(&Self::join(base, Self::LEGACY))
  }

  /// Default XML location for a player root.
  pub fn index(base: &str) -> String {
    Self::join(base, Self::INDEX)
  }

  fn join(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trailing_slashes_are_stripped() {
    let locations = Locations::default();

    for base in ["https://h/p", "https://h/p/", "https://h/p///"] {
      assert_eq!(
        locations.module(base).unwrap().as_str(),
        "https://h/p/code/player.esm.js",
      );
      assert_eq!(
        locations.legacy(base).unwrap().as_str(),
        "https://h/p/code/player.js",
      );
      assert_eq!(Locations::index(base), "https://h/p/index.xml");
    }
  }

  #[test]
  fn relative_to_document() {
    let locations = Locations::new(Some("https://h/app/page.html?x=1".parse().unwrap()));

    assert_eq!(
      locations.module("player").unwrap().as_str(),
      "https://h/app/player/code/player.esm.js",
    );

    assert_eq!(
      locations.module("/player/").unwrap().as_str(),
      "https://h/player/code/player.esm.js",
    );

    assert_eq!(
      locations.resolve("https://other/index.xml").unwrap().as_str(),
      "https://other/index.xml",
    );
  }

  #[test]
  fn relative_without_document() {
    assert_matches!(
      Locations::default().module("player").unwrap_err(),
      Error::Location { location, .. } if location == "player/code/player.esm.js",
    );
  }
}
