use super::*;

/// The packaged player, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "bundle"]
pub(crate) struct Bundle;

impl Bundle {
  const MANIFEST: &'static str = "manifest.yaml";

  pub(crate) fn file(path: &str) -> Option<(Mime, Vec<u8>)> {
    let file = Self::get(path)?;
    Some((
      mime_guess::from_path(path).first_or_octet_stream(),
      file.data.into_owned(),
    ))
  }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Manifest {
  pub(crate) module: String,
  pub(crate) tags: Vec<String>,
}

impl Module<TagRegistry> for Manifest {
  type Error = Infallible;

  async fn define_custom_elements(&self, registry: &TagRegistry) -> Result<(), Self::Error> {
    for tag in &self.tags {
      registry.define(tag);
    }
    Ok(())
  }
}

/// Imports the packaged player by reading its manifest, which lists the
/// tags its entry point defines.
pub(crate) struct Packaged;

impl Fallback<TagRegistry> for Packaged {
  type Error = Error;
  type Module = Manifest;

  async fn import(&self) -> Result<Manifest> {
    let file = Bundle::get(Bundle::MANIFEST).context(error::BundleMissing {
      path: Bundle::MANIFEST,
    })?;

    let manifest =
      serde_yaml::from_slice::<Manifest>(&file.data).context(error::DeserializeManifest)?;

    Bundle::get(&manifest.module).context(error::BundleMissing {
      path: &manifest.module,
    })?;

    Ok(manifest)
  }
}
