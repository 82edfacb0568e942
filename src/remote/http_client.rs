use super::*;

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::Response,
        label: &str,
    ) -> Result<reqwest::Response> {
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!(
                "{}: endpoint not found at {} (check the configured base url)",
                label,
                self.base_url
            );
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    /// `{base}/{endpoint}{path}`, each path segment percent-encoded.
    pub(super) fn url(&self, endpoint: &str, session: &Session) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("parse base url {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("base url {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .push(endpoint)
            .extend(session.current_path().split('/').skip(1));
        Ok(url)
    }
}
