use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client,
};

use crate::api::{Error, Result, Vacancies, VacancySource};
use crate::headhunter::types::{ApiResponse, Vacancy};

const BASE_URL: &str = "https://api.hh.ru";
const CLIENT_USER_AGENT: &str = "HH-User-Agent";
/// Moscow
const AREA_ID: u32 = 1;
/// Only listings published within this many days are returned
const PERIOD_DAYS: u32 = 30;
/// The `pages` count in responses is not followed, only the first page is requested.
const PAGE_LIMIT: u32 = 1;

pub struct HeadHunterClient {
    client: Client,
    base_url: String,
}

impl HeadHunterClient {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self::with_client(client, BASE_URL))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies", self.base_url)
    }

    async fn scrape_search_page(&self, language: &str, page: u32) -> Result<ApiResponse> {
        let url = self.search_url();
        let text = format!("Программист {}", language);
        log::debug!(
            "requesting vacancies from headhunter, page: {}, search: {}",
            page,
            text
        );
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("text", text),
                ("area", AREA_ID.to_string()),
                ("period", PERIOD_DAYS.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::RequestNotOk { url, status });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { url, source })
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Vacancy = Vacancy;

    /// A page answered with an error status is skipped and the next page is tried.
    async fn fetch_vacancies(&self, language: &str) -> Result<Vacancies<Vacancy>> {
        let mut vacancies = Vacancies::default();
        let mut page = 0;
        while page < PAGE_LIMIT {
            let result = self.scrape_search_page(language, page).await;
            page += 1;
            let search_page = match result {
                Ok(search_page) => search_page,
                Err(Error::RequestNotOk { url, status }) => {
                    log::warn!(
                        "skipping headhunter page {} for '{}', url: {}, status code: {}",
                        page - 1,
                        language,
                        url,
                        status
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            log::debug!(
                "headhunter reports {} vacancies on {} pages for '{}'",
                search_page.found,
                search_page.pages,
                language
            );
            vacancies.found = search_page.found;
            vacancies.items.extend(search_page.items);
        }
        Ok(vacancies)
    }
}
