use super::*;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("packaged player failed to define custom elements"))]
  Define { source: BoxError },
  #[snafu(display("failed to import packaged player"))]
  Import { source: BoxError },
  #[snafu(display("failed to inject {kind} script `{url}`"))]
  Inject {
    kind: ScriptKind,
    url: Url,
    source: BoxError,
  },
  #[snafu(display("invalid location `{location}`"))]
  Location {
    location: String,
    source: url::ParseError,
  },
  #[snafu(display("request to {url} failed"))]
  Request { url: Url, source: BoxError },
  #[snafu(display("response from {url} failed with {status}"))]
  Status { url: Url, status: StatusCode },
  #[snafu(display("packaged player did not define `<{tag}>`"))]
  Unregistered { tag: String },
}

impl Error {
  /// This error and its sources, on one line.
  pub fn chain(&self) -> String {
    self
      .iter_chain()
      .map(ToString::to_string)
      .collect::<Vec<String>>()
      .join(": ")
  }
}
