use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("window has no document"))]
  DocumentMissing,
  #[snafu(display("packaged player has no `defineCustomElements` entry point"))]
  EntryPointMissing,
  #[snafu(display("document has no head"))]
  HeadMissing,
  #[snafu(display("{message}"))]
  Js { message: String },
  #[snafu(display("invalid packaged player location"))]
  PackagedLocation { source: loader::Error },
  WindowMissing,
}

impl Error {
  /// Capture a thrown JavaScript value.
  pub fn js(value: JsValue) -> Self {
    let message = match value.dyn_ref::<js_sys::Error>() {
      Some(err) => String::from(err.message()),
      None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
    };

    Self::Js { message }
  }
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
