use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
  pub status: StatusCode,
  pub body: String,
}

pub trait Transport {
  type Error: std::error::Error + Send + Sync + 'static;

  async fn head(&self, url: &Url, timeout: Duration) -> Result<StatusCode, Self::Error>;

  async fn get(&self, url: &Url, timeout: Duration) -> Result<Response, Self::Error>;
}

#[derive(Clone, Debug, Default)]
pub struct Http {
  client: reqwest::Client,
}

impl Transport for Http {
  type Error = reqwest::Error;

  async fn head(&self, url: &Url, timeout: Duration) -> Result<StatusCode, Self::Error> {
    let response = self
      .client
      .head(url.clone())
      .timeout(timeout)
      .send()
      .await?;

    Ok(response.status())
  }

  async fn get(&self, url: &Url, timeout: Duration) -> Result<Response, Self::Error> {
    let response = self
      .client
      .get(url.clone())
      .timeout(timeout)
      .send()
      .await?;

    let status = response.status();

    let body = response.text().await?;

    Ok(Response { status, body })
  }
}
