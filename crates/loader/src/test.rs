use {
  super::*,
  log::{Level, LevelFilter, Log, Metadata, Record},
  std::{
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
    sync::Once,
  },
  tokio::sync::Notify,
};

macro_rules! assert_matches {
  ($expression:expr, $( $pattern:pat_param )|+ $( if $guard:expr )? $(,)?) => {
    match $expression {
      $( $pattern )|+ $( if $guard )? => {}
      left => panic!(
        "assertion failed: (left ~= right)\n  left: `{:?}`\n right: `{}`",
        left,
        stringify!($($pattern)|+ $(if $guard)?)
      ),
    }
  }
}

#[derive(Debug, Snafu)]
pub(crate) enum FakeError {
  #[snafu(display("connection refused"))]
  Refused,
  #[snafu(display("operation timed out"))]
  TimedOut,
  #[snafu(display("defineCustomElements threw"))]
  Threw,
  #[snafu(display("module not found"))]
  Missing,
  #[snafu(display("document has no head"))]
  NoHead,
}

#[derive(Clone)]
pub(crate) enum Route {
  Body(&'static str),
  Gated(Rc<Notify>, u16),
  Refused,
  Status(u16),
  TimedOut,
}

#[derive(Default)]
pub(crate) struct FakeTransport {
  pub(crate) gets: RefCell<Vec<Url>>,
  pub(crate) heads: RefCell<Vec<Url>>,
  pub(crate) timeouts: RefCell<Vec<Duration>>,
  routes: BTreeMap<String, Route>,
}

impl FakeTransport {
  pub(crate) fn route(mut self, url: &str, route: Route) -> Self {
    self.routes.insert(url.into(), route);
    self
  }

  async fn respond(&self, url: &Url, timeout: Duration) -> Result<Response, FakeError> {
    self.timeouts.borrow_mut().push(timeout);

    let route = self
      .routes
      .get(url.as_str())
      .cloned()
      .unwrap_or(Route::Status(404));

    let (status, body) = match route {
      Route::Body(body) => (200, body),
      Route::Gated(gate, status) => {
        gate.notified().await;
        (status, "")
      }
      Route::Refused => return Err(FakeError::Refused),
      Route::Status(status) => (status, ""),
      Route::TimedOut => return Err(FakeError::TimedOut),
    };

    Ok(Response {
      status: StatusCode::from_u16(status).unwrap(),
      body: body.into(),
    })
  }
}

impl Transport for FakeTransport {
  type Error = FakeError;

  async fn head(&self, url: &Url, timeout: Duration) -> Result<StatusCode, Self::Error> {
    self.heads.borrow_mut().push(url.clone());
    Ok(self.respond(url, timeout).await?.status)
  }

  async fn get(&self, url: &Url, timeout: Duration) -> Result<Response, Self::Error> {
    self.gets.borrow_mut().push(url.clone());
    self.respond(url, timeout).await
  }
}

#[derive(Default)]
pub(crate) struct FakePage {
  pub(crate) refuse: Option<ScriptKind>,
  pub(crate) scripts: RefCell<Vec<Script>>,
}

impl Page for FakePage {
  type Error = FakeError;

  fn inject_script(&self, script: &Script) -> Result<(), Self::Error> {
    if self.refuse == Some(script.kind) {
      return Err(FakeError::NoHead);
    }
    self.scripts.borrow_mut().push(script.clone());
    Ok(())
  }
}

/// Clones share definitions, like every element on a page shares the
/// window's registry.
#[derive(Clone, Default)]
pub(crate) struct FakeRegistry {
  pub(crate) attempts: Rc<Cell<usize>>,
  pub(crate) tags: Rc<RefCell<BTreeSet<String>>>,
}

impl Registry for FakeRegistry {
  fn is_defined(&self, tag: &str) -> bool {
    self.tags.borrow().contains(tag)
  }
}

#[derive(Clone, Copy)]
pub(crate) enum Packaged {
  Defines(&'static str),
  Missing,
  Throws,
}

pub(crate) struct FakeModule(Packaged);

impl Module<FakeRegistry> for FakeModule {
  type Error = FakeError;

  async fn define_custom_elements(&self, registry: &FakeRegistry) -> Result<(), Self::Error> {
    registry.attempts.set(registry.attempts.get() + 1);
    match self.0 {
      Packaged::Defines(tag) => {
        registry.tags.borrow_mut().insert(tag.into());
        Ok(())
      }
      Packaged::Missing => unreachable!(),
      Packaged::Throws => Err(FakeError::Threw),
    }
  }
}

pub(crate) struct FakeFallback {
  pub(crate) imports: Cell<usize>,
  packaged: Packaged,
}

impl FakeFallback {
  pub(crate) fn new(packaged: Packaged) -> Self {
    Self {
      imports: Cell::new(0),
      packaged,
    }
  }
}

impl Fallback<FakeRegistry> for FakeFallback {
  type Error = FakeError;
  type Module = FakeModule;

  async fn import(&self) -> Result<Self::Module, Self::Error> {
    self.imports.set(self.imports.get() + 1);
    match self.packaged {
      Packaged::Missing => Err(FakeError::Missing),
      packaged => Ok(FakeModule(packaged)),
    }
  }
}

pub(crate) fn loader(
  transport: FakeTransport,
  packaged: Packaged,
) -> Loader<FakeTransport, FakePage, FakeRegistry, FakeFallback> {
  Loader::new(
    Settings::default(),
    Locations::default(),
    transport,
    FakePage::default(),
    FakeRegistry::default(),
    FakeFallback::new(packaged),
  )
}

thread_local! {
  static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records log messages on the thread that emits them, so concurrently
/// running tests only see their own.
struct Recorder;

impl Log for Recorder {
  fn enabled(&self, _: &Metadata) -> bool {
    true
  }

  fn log(&self, record: &Record) {
    RECORDS.with(|records| {
      records
        .borrow_mut()
        .push((record.level(), record.args().to_string()));
    });
  }

  fn flush(&self) {}
}

/// Start recording log messages for the current test.
pub(crate) fn record_logs() {
  static INSTALL: Once = Once::new();

  INSTALL.call_once(|| {
    log::set_logger(&Recorder).unwrap();
    log::set_max_level(LevelFilter::Trace);
  });

  RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged at `level` since `record_logs`.
pub(crate) fn logged(level: Level) -> Vec<String> {
  RECORDS.with(|records| {
    records
      .borrow()
      .iter()
      .filter(|(l, _)| *l == level)
      .map(|(_, message)| message.clone())
      .collect()
  })
}
