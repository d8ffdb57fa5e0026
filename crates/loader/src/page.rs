use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptKind {
  /// `type="module"`, for environments with ES module support.
  Module,
  /// `nomodule`, for environments without.
  Legacy,
}

impl Display for ScriptKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Module => f.write_str("module"),
      Self::Legacy => f.write_str("legacy"),
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Script {
  pub kind: ScriptKind,
  pub src: Url,
}

impl Display for Script {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    // serialized URLs percent-encode quotes and angle brackets
    let src = &self.src;
    match self.kind {
      ScriptKind::Module => write!(f, r#"<script type="module" src="{src}"></script>"#),
      ScriptKind::Legacy => write!(f, r#"<script nomodule src="{src}"></script>"#),
    }
  }
}

/// The page hosting the element, into which remote player scripts are
/// injected.
pub trait Page {
  type Error: std::error::Error + Send + Sync + 'static;

  fn inject_script(&self, script: &Script) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      Script {
        kind: ScriptKind::Module,
        src: "https://h/p/code/player.esm.js".parse().unwrap(),
      }
      .to_string(),
      r#"<script type="module" src="https://h/p/code/player.esm.js"></script>"#,
    );

    assert_eq!(
      Script {
        kind: ScriptKind::Legacy,
        src: "https://h/p/code/player.js?q=\"><".parse().unwrap(),
      }
      .to_string(),
      r#"<script nomodule src="https://h/p/code/player.js?q=%22%3E%3C"></script>"#,
    );
  }
}
