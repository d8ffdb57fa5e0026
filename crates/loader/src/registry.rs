use super::*;

/// The environment's custom element registry.
///
/// Registries are shared by every loader on a page, so defining an already
/// defined tag must be a no-op.
pub trait Registry {
  fn is_defined(&self, tag: &str) -> bool;
}

/// A loaded copy of the packaged player.
pub trait Module<R: Registry + ?Sized> {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The player's registration entry point, complete once the returned
  /// future resolves.
  async fn define_custom_elements(&self, registry: &R) -> Result<(), Self::Error>;
}

/// Source of the packaged player, used when no remote copy is reachable.
pub trait Fallback<R: Registry + ?Sized> {
  type Error: std::error::Error + Send + Sync + 'static;
  type Module: Module<R>;

  async fn import(&self) -> Result<Self::Module, Self::Error>;
}
