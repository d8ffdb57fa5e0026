use {
  super::*,
  clap::builder::{
    styling::{AnsiColor, Effects},
    Styles,
  },
};

pub(crate) mod resolve;
pub(crate) mod serve;

#[derive(Parser)]
#[command(
  version,
  styles = Styles::styled()
    .header(AnsiColor::Green.on_default() | Effects::BOLD)
    .usage(AnsiColor::Green.on_default() | Effects::BOLD)
    .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
    .placeholder(AnsiColor::Cyan.on_default()))
]
pub(crate) enum Subcommand {
  Resolve(resolve::Resolve),
  Serve(serve::Serve),
}

impl Subcommand {
  pub(crate) fn run(self) -> Result {
    match self {
      Self::Resolve(resolve) => resolve.run(),
      Self::Serve(serve) => serve.run(),
    }
  }
}
