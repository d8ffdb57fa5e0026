use super::*;

/// The window's `customElements` registry.
#[derive(Clone)]
pub struct WindowRegistry {
  window: Window,
}

impl WindowRegistry {
  pub fn new(window: Window) -> Self {
    Self { window }
  }

  pub fn window(&self) -> &Window {
    &self.window
  }
}

impl Registry for WindowRegistry {
  fn is_defined(&self, tag: &str) -> bool {
    !self.window.custom_elements().get(tag).is_undefined()
  }
}
