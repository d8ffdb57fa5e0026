#![allow(async_fn_in_trait)]

use {
  self::{
    attributes::Attributes,
    bundle::{Bundle, Packaged},
    document::Document,
    error::Error,
    subcommand::Subcommand,
    tag_registry::TagRegistry,
    templates::DemoHtml,
  },
  boilerplate::Boilerplate,
  camino::{Utf8Component, Utf8Path, Utf8PathBuf},
  clap::{Args, Parser},
  libc::EXIT_FAILURE,
  loader::{Config, Fallback, Http, Loader, Locations, Module, Page, Registry, Script, Settings},
  mime_guess::Mime,
  rust_embed::RustEmbed,
  serde::{Deserialize, Serialize},
  snafu::{ErrorCompat, OptionExt, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    cell::RefCell,
    collections::BTreeSet,
    convert::Infallible,
    fmt::{self, Display, Formatter},
    fs, io,
    net::SocketAddr,
    process,
    sync::Arc,
  },
  tokio::runtime::Runtime,
};


#[cfg(test)]
use test::*;

mod attributes;
mod bundle;
mod document;
mod error;
mod subcommand;
mod tag_registry;
mod templates;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
