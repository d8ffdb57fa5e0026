use super::*;

/// Records injected scripts in place of a browser document.
#[derive(Debug, Default)]
pub(crate) struct Document {
  scripts: RefCell<Vec<Script>>,
}

impl Document {
  pub(crate) fn scripts(&self) -> Vec<Script> {
    self.scripts.borrow().clone()
  }
}

impl Page for Document {
  type Error = Infallible;

  fn inject_script(&self, script: &Script) -> Result<(), Self::Error> {
    log::debug!("injecting {script}");
    self.scripts.borrow_mut().push(script.clone());
    Ok(())
  }
}
