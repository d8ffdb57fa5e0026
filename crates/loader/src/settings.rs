use super::*;

/// Loader settings that are not part of an element's attributes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  /// Module URL of the packaged player, relative to the document.
  pub fallback: String,
  /// Tag the player registers.
  pub player_tag: String,
  /// Applies to each probe and fetch. Expiry counts as failure.
  pub timeout_ms: u64,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      fallback: "bundle/player.esm.js".into(),
      player_tag: "xml-player".into(),
      timeout_ms: 10_000,
    }
  }
}

impl Settings {
  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}
