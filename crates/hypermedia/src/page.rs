use super::*;

/// Injects scripts into the document's `<head>`.
#[derive(Clone)]
pub struct DomPage {
  document: Document,
}

impl DomPage {
  pub fn new(window: &Window) -> Result<Self, Error> {
    Ok(Self {
      document: window.document().context(error::DocumentMissing)?,
    })
  }
}

impl Page for DomPage {
  type Error = Error;

  fn inject_script(&self, script: &Script) -> Result<(), Self::Error> {
    let element = self
      .document
      .create_element("script")
      .map_err(Error::js)?
      .unchecked_into::<HtmlScriptElement>();

    match script.kind {
      ScriptKind::Module => element.set_type("module"),
      ScriptKind::Legacy => element.set_no_module(true),
    }

    element.set_src(script.src.as_str());

    self
      .document
      .head()
      .context(error::HeadMissing)?
      .append_child(&element)
      .map_err(Error::js)?;

    Ok(())
  }
}
