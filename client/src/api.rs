use log::{debug, warn};
use reqwest::Client;

use crate::config;
use crate::error::ApiError;
use crate::models::candidate::{
    CandidateData, CandidateLogin, CandidatePreview, CreateCandidateLogin,
};

/// Thin client over the portal backend.
///
/// Carries no session state of its own; credentials travel with the calls
/// and cookies follow reqwest defaults. Every failure (connect, status,
/// body decode) comes back as an [`ApiError`] whose message is ready for
/// display and whose cause keeps the transport error for diagnostics. No
/// retries, no backoff.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Client targeting `PORTFOLIO_API_URL`, or the default backend.
    pub fn from_env() -> Self {
        Self::new(config::api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn normalize(&self, error: reqwest::Error, msg: &str) -> ApiError {
        warn!("request against {} failed: {error}", self.base_url);
        ApiError::wrap(error, msg)
    }

    pub async fn login(&self, login: &CandidateLogin) -> Result<(), ApiError> {
        debug!("logging in application {}", login.application_id);
        self.http
            .post(self.endpoint("/candidate/login"))
            .json(login)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| self.normalize(e, "Could not log in"))?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.http
            .post(self.endpoint("/candidate/logout"))
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| self.normalize(e, "Could not log out"))?;
        Ok(())
    }

    /// The candidate the current session belongs to.
    pub async fn whoami(&self) -> Result<CandidatePreview, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/candidate/whoami"))
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| self.normalize(e, "Could not load candidate"))?;
        response
            .json()
            .await
            .map_err(|e| self.normalize(e, "Could not load candidate"))
    }

    pub async fn get_details(&self) -> Result<CandidateData, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/candidate/details"))
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| self.normalize(e, "Could not load application details"))?;
        response
            .json()
            .await
            .map_err(|e| self.normalize(e, "Could not load application details"))
    }

    pub async fn post_details(&self, details: &CandidateData) -> Result<(), ApiError> {
        debug!("submitting application details");
        self.http
            .post(self.endpoint("/candidate/details"))
            .json(details)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| self.normalize(e, "Could not submit application details"))?;
        Ok(())
    }

    /// Registers a candidate (admin endpoint).
    pub async fn create_candidate(
        &self,
        request: &CreateCandidateLogin,
    ) -> Result<CandidatePreview, ApiError> {
        debug!(
            "creating candidate for application {}",
            request.create.application_id
        );
        let response = self
            .http
            .post(self.endpoint("/admin/create"))
            .json(request)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| self.normalize(e, "Could not create candidate"))?;
        response
            .json()
            .await
            .map_err(|e| self.normalize(e, "Could not create candidate"))
    }

    /// All candidates, for admin list views.
    pub async fn list_candidates(&self) -> Result<Vec<CandidatePreview>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/admin/candidates"))
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| self.normalize(e, "Could not load candidate list"))?;
        response
            .json()
            .await
            .map_err(|e| self.normalize(e, "Could not load candidate list"))
    }
}
