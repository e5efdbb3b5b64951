//! The HTTP client for the exam-generator API.

use reqwest::{
    Response, StatusCode,
    header::{HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::{
    error::{Error, Result, classify_failure},
    resource::{Resource, WritableResource},
};
use crate::domain::{ConfinementBlock, ConfinementId, ConfinementText};

/// A thin pass-through client for the remote REST API.
///
/// Every operation is a single request; there is no local caching, no
/// automatic retry, and no timeout beyond reqwest's defaults. The client
/// carries a cookie store so that a session established out of band (the
/// API's cookie/CSRF login is a collaborator concern) is honored on every
/// request.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client rooted at `base_url` (e.g.
    /// `http://localhost:8000/api`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Checks the response status, translating failures through the error
    /// taxonomy.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        Ok(Self::check(response).await?.json().await?)
    }

    /// Lists every record of a resource.
    ///
    /// # Errors
    ///
    /// Returns any [`Error`] the server's response translates to.
    #[instrument(level = "debug", skip(self), fields(resource = R::PATH))]
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let response = self.http.get(self.url(R::PATH)).send().await?;
        Self::decode(response).await
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no record has this id; otherwise any
    /// [`Error`] the server's response translates to.
    #[instrument(level = "debug", skip(self, id), fields(resource = R::PATH))]
    pub async fn get<R: Resource>(&self, id: &R::Id) -> Result<R> {
        let url = self.url(&format!("{}/{id}", R::PATH));
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// Creates a record, returning the server's copy.
    ///
    /// # Errors
    ///
    /// [`Error::Duplicate`] when the server reports a uniqueness
    /// violation; otherwise any [`Error`] the response translates to.
    #[instrument(level = "debug", skip(self, payload), fields(resource = R::PATH))]
    pub async fn create<R: WritableResource>(&self, payload: &R::New) -> Result<R> {
        let response = self
            .http
            .post(self.url(R::PATH))
            .json(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Updates a record, returning the server's copy.
    ///
    /// # Errors
    ///
    /// Returns any [`Error`] the server's response translates to.
    #[instrument(level = "debug", skip(self, id, patch), fields(resource = R::PATH))]
    pub async fn update<R: WritableResource>(&self, id: &R::Id, patch: &R::Patch) -> Result<R> {
        let url = self.url(&format!("{}/{id}", R::PATH));
        let response = self.http.patch(url).json(patch).send().await?;
        Self::decode(response).await
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns any [`Error`] the server's response translates to.
    #[instrument(level = "debug", skip(self, id), fields(resource = R::PATH))]
    pub async fn delete<R: WritableResource>(&self, id: &R::Id) -> Result<()> {
        let url = self.url(&format!("{}/{id}", R::PATH));
        let response = self.http.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Lists the requirements of one confinement
    /// (`GET /confinements/{id}/blocks`).
    ///
    /// # Errors
    ///
    /// Returns any [`Error`] the server's response translates to.
    #[instrument(level = "debug", skip(self))]
    pub async fn confinement_requirements(
        &self,
        id: &ConfinementId,
    ) -> Result<Vec<ConfinementBlock>> {
        let url = self.url(&format!("confinements/{id}/blocks"));
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// Lists the text allocations of one confinement
    /// (`GET /confinements/{id}/texts`).
    ///
    /// # Errors
    ///
    /// Returns any [`Error`] the server's response translates to.
    #[instrument(level = "debug", skip(self))]
    pub async fn confinement_allocations(
        &self,
        id: &ConfinementId,
    ) -> Result<Vec<ConfinementText>> {
        let url = self.url(&format!("confinements/{id}/texts"));
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// Fetches the exported spreadsheet for a confinement as raw bytes.
    ///
    /// The export itself is produced server-side; the client only carries
    /// the blob back for the caller to save.
    ///
    /// # Errors
    ///
    /// Returns any [`Error`] the server's response translates to.
    #[instrument(level = "debug", skip(self))]
    pub async fn export_confinement(&self, id: &ConfinementId) -> Result<Vec<u8>> {
        let url = self.url(&format!("confinements/{id}/export"));
        let response = self.http.get(url).send().await?;
        let response = Self::check(response).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let client = Client::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn item_urls_nest_under_the_base() {
        let client = Client::new("http://localhost:8000/api").unwrap();
        assert_eq!(
            client.url("blocks/7"),
            "http://localhost:8000/api/blocks/7"
        );
    }

    #[test]
    fn nested_confinement_paths() {
        let client = Client::new("http://localhost:8000/api").unwrap();
        let id = ConfinementId("abc".to_string());

        assert_eq!(
            client.url(&format!("confinements/{id}/texts")),
            "http://localhost:8000/api/confinements/abc/texts"
        );
    }
}
