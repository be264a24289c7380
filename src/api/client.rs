use reqwest::Url;
use tracing::debug;

use crate::api::{FetchError, SkipOffering};
use crate::config::{ApiConfig, LocationConfig};

const BY_LOCATION_PATH: &str = "skips/by-location";

/// HTTP client for the skip hire API.
///
/// Built from explicit configuration rather than ambient globals; cheap to
/// clone (the underlying connection pool is shared).
#[derive(Debug, Clone)]
pub struct SkipApi {
    http: reqwest::Client,
    base_url: Url,
}

impl SkipApi {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("skippick/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Fetch all offerings available for the given location, in
    /// server-provided order.
    pub async fn list_by_location(
        &self,
        location: &LocationConfig,
    ) -> Result<Vec<SkipOffering>, FetchError> {
        let url = self.by_location_url(location)?;
        debug!(%url, "fetching skip offerings");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let offerings = response.json::<Vec<SkipOffering>>().await?;
        debug!(count = offerings.len(), "fetched skip offerings");
        Ok(offerings)
    }

    fn by_location_url(&self, location: &LocationConfig) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(BY_LOCATION_PATH)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("postcode", &location.postcode)
            .append_pair("area", &location.area);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> SkipApi {
        SkipApi::new(&ApiConfig {
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn builds_the_by_location_url_with_query_pairs() {
        let url = api("http://localhost:3000")
            .by_location_url(&LocationConfig::default())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/skips/by-location?postcode=NR32&area=Lowestoft"
        );
    }

    #[test]
    fn location_is_not_hardcoded() {
        let location = LocationConfig {
            postcode: "IP12".to_string(),
            area: "Woodbridge".to_string(),
        };
        let url = api("https://api.example.com").by_location_url(&location).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/skips/by-location?postcode=IP12&area=Woodbridge"
        );
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let location = LocationConfig {
            postcode: "NR32".to_string(),
            area: "Great Yarmouth".to_string(),
        };
        let url = api("http://localhost:3000").by_location_url(&location).unwrap();
        assert!(url.as_str().ends_with("postcode=NR32&area=Great+Yarmouth"));
    }

    #[test]
    fn rejects_an_invalid_base_url() {
        let result = SkipApi::new(&ApiConfig {
            base_url: "not a url".to_string(),
        });
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
