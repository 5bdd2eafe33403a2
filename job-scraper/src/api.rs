use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk { url: String, status: StatusCode },
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Every listing a site returned for one search, together with the
/// total the site claims to have found (which may exceed `items.len()`).
#[derive(Debug)]
pub struct Vacancies<T> {
    pub items: Vec<T>,
    pub found: u64,
}

impl<T> Default for Vacancies<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            found: 0,
        }
    }
}

/// A job site that can be searched for vacancies mentioning a programming language
#[async_trait]
pub trait VacancySource {
    type Vacancy: Send;

    async fn fetch_vacancies(&self, language: &str) -> Result<Vacancies<Self::Vacancy>>;
}
