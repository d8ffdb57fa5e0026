use super::*;

#[derive(Debug, Default)]
pub(crate) struct TagRegistry {
  tags: RefCell<BTreeSet<String>>,
}

impl TagRegistry {
  pub(crate) fn define(&self, tag: &str) {
    if !self.tags.borrow_mut().insert(tag.into()) {
      log::debug!("`<{tag}>` already defined");
    }
  }

  pub(crate) fn tags(&self) -> Vec<String> {
    self.tags.borrow().iter().cloned().collect()
  }
}

impl Registry for TagRegistry {
  fn is_defined(&self, tag: &str) -> bool {
    self.tags.borrow().contains(tag)
  }
}
