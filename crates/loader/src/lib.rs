#![allow(async_fn_in_trait)]

use {
  boilerplate::Boilerplate,
  reqwest::{StatusCode, Url},
  serde::Deserialize,
  snafu::{ensure, ErrorCompat, ResultExt, Snafu},
  std::{
    cell::{Cell, RefCell},
    fmt::{self, Display, Formatter},
    time::Duration,
  },
  strum::{EnumIter, EnumString, IntoStaticStr},
};

pub use {
  self::{
    config::{Attribute, Change, Config},
    error::Error,
    loader::Loader,
    location::Locations,
    page::{Page, Script, ScriptKind},
    player::PlayerHtml,
    registry::{Fallback, Module, Registry},
    settings::Settings,
    state::{ResolutionState, ScriptSource},
    transport::{Http, Response, Transport},
  },
};

#[cfg(test)]
#[macro_use]
mod test;

mod config;
mod error;
mod loader;
mod location;
mod page;
mod player;
mod registry;
mod settings;
mod state;
mod transport;

#[cfg(test)]
use test::*;

type Result<T = (), E = Error> = std::result::Result<T, E>;
