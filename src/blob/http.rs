use super::BlobStore;
use crate::errors::{AppError, AppResult};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};

/// S3-compatible object endpoint addressed as `<endpoint>/<bucket>/<key>`.
///
/// Requests carry the access token as a bearer credential. There are no
/// retries: a failed request fails the operation.
pub struct HttpBlobStore {
    endpoint: String,
    bucket: String,
    region: String,
    token: Option<String>,
    client: Client,
}

impl HttpBlobStore {
    pub fn new(endpoint: &str, bucket: &str, region: &str, token: Option<String>) -> AppResult<Self> {
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(AppError::Config(
                "store.endpoint is empty (set it or use `kind: fs`)".into(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Persistence(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            endpoint,
            bucket: bucket.to_string(),
            region: region.to_string(),
            token,
            client,
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint,
            self.bucket,
            key.trim_start_matches('/')
        )
    }

    fn token(&self) -> AppResult<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| AppError::Credentials("no access token configured".into()))
    }

    fn check_auth(resp: &Response) -> AppResult<()> {
        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Credentials(
                format!("store rejected the credentials ({})", resp.status()),
            )),
            _ => Ok(()),
        }
    }
}

impl BlobStore for HttpBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let resp = self
            .client
            .get(self.object_url(key))
            .bearer_auth(self.token()?)
            .send()?;

        Self::check_auth(&resp)?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(AppError::Persistence(format!(
                "GET {key} failed: {}",
                resp.status()
            )));
        }

        Ok(Some(resp.bytes()?.to_vec()))
    }

    fn put(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        let resp = self
            .client
            .put(self.object_url(key))
            .bearer_auth(self.token()?)
            .header(reqwest::header::CONTENT_TYPE, "text/csv; charset=utf-8")
            .body(bytes.to_vec())
            .send()?;

        Self::check_auth(&resp)?;

        if !resp.status().is_success() {
            return Err(AppError::Persistence(format!(
                "PUT {key} failed: {}",
                resp.status()
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        if self.region.is_empty() {
            format!("{}/{}", self.endpoint, self.bucket)
        } else {
            format!("{}/{} ({})", self.endpoint, self.bucket, self.region)
        }
    }
}
