use {
  super::*,
  axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
  },
};

#[derive(Parser)]
pub(crate) struct Serve {
  #[arg(long, help = "Listen on <ADDRESS> for incoming requests.")]
  pub(crate) address: SocketAddr,
  #[command(flatten)]
  pub(crate) attributes: Attributes,
  #[arg(long, help = "Open server in browser.")]
  pub(crate) open: bool,
  #[arg(long, help = "Serve player root <ROOT> under `/player/`.")]
  pub(crate) root: Option<Utf8PathBuf>,
  #[arg(long, help = "Serve compiled element in <WIDGET> under `/widget/`.")]
  pub(crate) widget: Option<Utf8PathBuf>,
}

#[derive(Debug)]
pub(crate) struct Site {
  demo: String,
  root: Option<Utf8PathBuf>,
  widget: Option<Utf8PathBuf>,
}

#[derive(Debug)]
struct Resource {
  content_type: Mime,
  content: Vec<u8>,
}

impl Resource {
  fn new(content_type: Mime, content: Vec<u8>) -> Self {
    Self {
      content_type,
      content,
    }
  }
}

impl IntoResponse for Resource {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, self.content_type.to_string())],
      self.content,
    )
      .into_response()
  }
}

#[derive(Debug, PartialEq)]
pub(crate) enum ServerError {
  NotFound { message: String },
}

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    match self {
      Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
    }
  }
}

type ServerResult<T = Resource> = std::result::Result<T, ServerError>;

impl Serve {
  pub(crate) fn run(self) -> Result {
    if self.open {
      let url = format!("http://{}/", self.address);
      open::that(&url).context(error::Open { url: &url })?;
    }

    let address = self.address;

    let router = self.router();

    log::info!("serving on {address}");

    Runtime::new().context(error::Runtime)?.block_on(async {
      axum_server::Server::bind(address)
        .serve(router.into_make_service())
        .await
        .context(error::Serve { address })
    })?;

    Ok(())
  }

  /// `GET` routes also answer `HEAD`, which the loader uses to probe for a
  /// remote player.
  pub(crate) fn router(self) -> Router {
    let site = Site {
      demo: DemoHtml {
        attributes: self.attributes.attributes(),
        widget: self.widget.is_some(),
      }
      .to_string(),
      root: self.root,
      widget: self.widget,
    };

    Router::new()
      .route("/", get(Self::demo))
      .route("/bundle/*path", get(Self::bundle))
      .route("/player/*path", get(Self::player))
      .route("/widget/*path", get(Self::widget))
      .layer(Extension(Arc::new(site)))
  }

  async fn demo(site: Extension<Arc<Site>>) -> ServerResult {
    Ok(Resource::new(
      mime_guess::mime::TEXT_HTML_UTF_8,
      site.demo.clone().into_bytes(),
    ))
  }

  async fn bundle(Path(path): Path<String>) -> ServerResult {
    Bundle::file(&path)
      .map(|(content_type, content)| Resource::new(content_type, content))
      .ok_or_else(|| ServerError::NotFound {
        message: format!("/bundle/{path} not found"),
      })
  }

  async fn player(site: Extension<Arc<Site>>, Path(path): Path<String>) -> ServerResult {
    Self::file(site.root.as_deref(), "/player/", &path)
  }

  async fn widget(site: Extension<Arc<Site>>, Path(path): Path<String>) -> ServerResult {
    Self::file(site.widget.as_deref(), "/widget/", &path)
  }

  fn file(root: Option<&Utf8Path>, prefix: &str, path: &str) -> ServerResult {
    let not_found = || ServerError::NotFound {
      message: format!("{prefix}{path} not found"),
    };

    let root = root.ok_or_else(not_found)?;

    let relative = Utf8Path::new(path);

    if !relative
      .components()
      .all(|component| matches!(component, Utf8Component::Normal(_)))
    {
      return Err(not_found());
    }

    let path = root.join(relative);

    let content = fs::read(&path).map_err(|_| not_found())?;

    Ok(Resource::new(
      mime_guess::from_path(&path).first_or_octet_stream(),
      content,
    ))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, loader::Transport};

  fn site(root: Option<Utf8PathBuf>) -> Extension<Arc<Site>> {
    Extension(Arc::new(Site {
      demo: String::new(),
      root,
      widget: None,
    }))
  }

  #[test]
  fn serve_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    assert_matches!(
      Serve {
        address,
        attributes: Attributes::default(),
        open: false,
        root: None,
        widget: None,
      }
      .run()
      .unwrap_err(),
      Error::Serve { address: a, .. }
      if a == address,
    );
  }

  #[tokio::test]
  async fn routes() {
    let tempdir = tempdir();

    let root = player_root(&tempdir);

    let site = Extension(Arc::new(Site {
      demo: DemoHtml {
        attributes: vec![(loader::Attribute::BaseLocation, "player".into())],
        widget: true,
      }
      .to_string(),
      root: Some(root),
      widget: None,
    }));

    let demo = Serve::demo(site.clone()).await.unwrap();
    assert_eq!(demo.content_type, mime_guess::mime::TEXT_HTML_UTF_8);
    assert!(String::from_utf8(demo.content)
      .unwrap()
      .contains(r#"<player-loader base-location="player">"#));

    let module = Serve::player(site.clone(), Path("code/player.esm.js".into()))
      .await
      .unwrap();
    assert_eq!(module.content, PLAYER_ESM.as_bytes());

    let index = Serve::player(site.clone(), Path("index.xml".into()))
      .await
      .unwrap();
    assert_eq!(index.content, INDEX_XML.as_bytes());

    assert_eq!(
      Serve::player(site.clone(), Path("foo".into()))
        .await
        .unwrap_err(),
      ServerError::NotFound {
        message: "/player/foo not found".into(),
      },
    );

    assert_eq!(
      Serve::widget(site.clone(), Path("loader_element.js".into()))
        .await
        .unwrap_err(),
      ServerError::NotFound {
        message: "/widget/loader_element.js not found".into(),
      },
    );

    let bundle = Serve::bundle(Path("player.esm.js".into())).await.unwrap();
    assert!(bundle.content.starts_with(b"class XmlPlayer"));

    assert_eq!(
      Serve::bundle(Path("foo.js".into())).await.unwrap_err(),
      ServerError::NotFound {
        message: "/bundle/foo.js not found".into(),
      },
    );
  }

  #[tokio::test]
  async fn paths_may_not_escape_root() {
    let tempdir = tempdir();

    let root = player_root(&tempdir);

    fs::write(tempdir.path_utf8().join("secret"), "secret").unwrap();

    for path in ["../secret", "code/../../secret", "/etc/passwd", "./index.xml"] {
      assert_eq!(
        Serve::player(site(Some(root.clone())), Path(path.into()))
          .await
          .unwrap_err(),
        ServerError::NotFound {
          message: format!("/player/{path} not found"),
        },
      );
    }
  }

  #[tokio::test]
  async fn missing_root() {
    assert_eq!(
      Serve::player(site(None), Path("index.xml".into()))
        .await
        .unwrap_err(),
      ServerError::NotFound {
        message: "/player/index.xml not found".into(),
      },
    );
  }

  #[tokio::test]
  async fn head_probe() {
    let tempdir = tempdir();

    let address = serve(Some(player_root(&tempdir))).await;

    let http = Http::default();

    let timeout = Settings::default().timeout();

    let module = format!("http://{address}/player/code/player.esm.js")
      .parse()
      .unwrap();

    assert_eq!(
      http.head(&module, timeout).await.unwrap(),
      axum::http::StatusCode::OK,
    );

    let missing = format!("http://{address}/player/code/missing.js")
      .parse()
      .unwrap();

    assert_eq!(
      http.head(&missing, timeout).await.unwrap(),
      axum::http::StatusCode::NOT_FOUND,
    );
  }
}
