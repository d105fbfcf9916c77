use crate::comparison::{Comparison, Matchup};
use crate::creature::{self, Creature};
use crate::region::{self, Key};
use crate::typing::{self, Type};
use crate::Error;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::env;
use std::sync::LazyLock;

/// A connection to the Pokédex API.
///
/// Every call performs a single GET request: there are no retries and no
/// timeout. Failures are never raised past the returned [`Error`].
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    base_url: String,
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .expect("Build reqwest client")
});

impl Session {
    pub const DEFAULT_URL: &'static str = "http://127.0.0.1:5000";

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        log::info!("Pokédex session started (API: {base_url})");

        Self {
            client: CLIENT.clone(),
            base_url,
        }
    }

    /// Reads the API location from `POKEDEX_API_URL`.
    pub fn from_env() -> Self {
        match env::var("POKEDEX_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(Self::DEFAULT_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search(&self, query: &creature::Query) -> Result<Creature, Error> {
        self.get(
            &format!("/api/pokemon?q={}", urlencoding::encode(query.as_str())),
            "No pudimos encontrar ese Pokémon.",
        )
        .await
    }

    pub async fn random(&self) -> Result<Creature, Error> {
        self.get("/api/pokemon/random", "No pudimos encontrar ese Pokémon.")
            .await
    }

    pub async fn by_type(&self, kind: Type) -> Result<typing::Listing, Error> {
        self.get(
            &format!("/api/types/{}", urlencoding::encode(kind.slug())),
            "Ocurrió un problema al cargar el tipo.",
        )
        .await
    }

    pub async fn compare(&self, matchup: &Matchup) -> Result<Comparison, Error> {
        self.get(
            &format!(
                "/api/pokemon/compare?a={}&b={}",
                urlencoding::encode(matchup.first.as_str()),
                urlencoding::encode(matchup.second.as_str())
            ),
            "No pudimos comparar a esos Pokémon.",
        )
        .await
    }

    pub async fn regions(&self) -> Result<region::Catalogue, Error> {
        self.get("/api/regions", "No pudimos cargar las regiones.")
            .await
    }

    pub async fn region(&self, key: &Key, limit: usize) -> Result<region::Detail, Error> {
        self.get(
            &format!(
                "/api/regions/{}?limit={limit}",
                urlencoding::encode(key.as_str())
            ),
            "No pudimos cargar esa región.",
        )
        .await
    }

    /// Downloads the raw bytes behind an absolute URL, such as a sprite.
    pub async fn download(&self, url: &str) -> Result<Bytes, Error> {
        const FALLBACK: &str = "No pudimos descargar la imagen.";

        log::info!("Downloading image: {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| Error::transport(FALLBACK, error))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::api(status.as_u16(), None, FALLBACK));
        }

        response
            .bytes()
            .await
            .map_err(|error| Error::transport(FALLBACK, error))
    }

    /// Performs a GET request against the API and classifies the outcome.
    ///
    /// `path` must already have its dynamic segments percent-encoded.
    /// `fallback` is the message used when the response carries none.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, Error> {
        let url = format!("{}{path}", self.base_url);

        log::info!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| Error::transport(fallback, error))?;

        let status = response.status();

        let body = response
            .bytes()
            .await
            .map_err(|error| Error::transport(fallback, error))?;

        let result = classify(status, &body, fallback);

        if let Err(error) = &result {
            log::warn!("GET {url} failed ({status}): {error}");
        }

        result
    }
}

/// Classifies a response by its status, parsing the body as JSON regardless.
///
/// - 2xx: the payload, decoded as `T`.
/// - Otherwise: the payload's `error` field, or `fallback` if absent.
/// - Bodies that are not JSON, or do not decode as `T`, fail with `fallback`.
pub fn classify<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
    fallback: &str,
) -> Result<T, Error> {
    let payload: serde_json::Value =
        serde_json::from_slice(body).map_err(|error| Error::transport(fallback, error))?;

    if !status.is_success() {
        let message = payload
            .get("error")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);

        return Err(Error::api(status.as_u16(), message, fallback));
    }

    serde_json::from_value(payload).map_err(|error| Error::transport(fallback, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn success_decodes_payload() {
        let creature: Creature = classify(
            StatusCode::OK,
            br#"{"id": 25, "name": "Pikachu"}"#,
            "fallback",
        )
        .expect("Decode creature");

        assert_eq!(creature.id, creature::Id(25));
        assert_eq!(creature.name, "Pikachu");
    }

    #[test]
    fn failure_carries_payload_error() {
        let result: Result<Creature, _> = classify(
            StatusCode::NOT_FOUND,
            br#"{"error": "no existe"}"#,
            "fallback",
        );

        match result {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "no existe");
            }
            other => panic!("expected an API error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_error_field_uses_fallback() {
        let result: Result<Creature, _> =
            classify(StatusCode::BAD_GATEWAY, br#"{"detail": "upstream"}"#, "fallback");

        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("fallback".to_owned())
        );
    }

    #[test]
    fn malformed_json_is_a_transport_error() {
        for status in [StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR] {
            let result: Result<Creature, _> = classify(status, b"<html>oops</html>", "fallback");

            assert!(matches!(
                result,
                Err(Error::Transport { ref message, .. }) if message == "fallback"
            ));
        }
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let session = Session::new("http://localhost:5000/");

        assert_eq!(session.base_url(), "http://localhost:5000");
    }
}
