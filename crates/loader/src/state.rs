use super::*;

/// How the player's custom elements came to be registered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScriptSource {
  Remote { module: Url, legacy: Url },
  Packaged,
}

impl Display for ScriptSource {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Remote { module, .. } => write!(f, "remote copy at {module}"),
      Self::Packaged => f.write_str("packaged copy"),
    }
  }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolutionState {
  pub scripts: Option<ScriptSource>,
  pub xml_base: Option<String>,
  pub xml_data: Option<String>,
}

impl ResolutionState {
  pub fn scripts_ready(&self) -> bool {
    self.scripts.is_some()
  }
}
