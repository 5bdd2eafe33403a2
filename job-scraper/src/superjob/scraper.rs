use async_trait::async_trait;
use reqwest::Client;

use crate::api::{Error, Result, Vacancies, VacancySource};
use crate::superjob::types::{ApiResponse, Vacancy};

const BASE_URL: &str = "https://api.superjob.ru/2.0";
const API_KEY_HEADER: &str = "X-Api-App-Id";
/// Moscow
const TOWN_ID: u32 = 4;
/// "Разработка, программирование"
const CATALOGUE_ID: u32 = 48;
const RESULTS_PER_PAGE: u32 = 5;
/// All time
const PERIOD: u32 = 0;

pub struct SuperJobClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SuperJobClient {
    pub fn new(api_key: String) -> Self {
        Self::with_client(api_key, Client::new(), BASE_URL)
    }

    pub fn with_client(api_key: String, client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies", self.base_url)
    }

    async fn scrape_search_page(&self, language: &str, page: u32) -> Result<ApiResponse> {
        let url = self.search_url();
        log::debug!(
            "requesting vacancies from superjob, page: {}, keyword: {}",
            page,
            language
        );
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("town", TOWN_ID.to_string()),
                ("catalogues", CATALOGUE_ID.to_string()),
                ("count", RESULTS_PER_PAGE.to_string()),
                ("page", page.to_string()),
                ("keyword", language.to_owned()),
                ("period", PERIOD.to_string()),
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
impl VacancySource for SuperJobClient {
    type Vacancy = Vacancy;

    /// Pages are requested until the response says there are no more.
    /// An error status ends the search, keeping what was collected so far.
    async fn fetch_vacancies(&self, language: &str) -> Result<Vacancies<Vacancy>> {
        let mut vacancies = Vacancies::default();
        let mut page = 0;
        let mut next_page = true;
        while next_page {
            let search_page = match self.scrape_search_page(language, page).await {
                Ok(search_page) => search_page,
                Err(Error::RequestNotOk { url, status }) => {
                    log::error!(
                        "Request not successful, stopping the search for '{}' at page {}, url: {}, status code: {}",
                        language,
                        page,
                        url,
                        status
                    );
                    break;
                }
                Err(e) => return Err(e),
            };
            page += 1;
            vacancies.found = search_page.total;
            vacancies.items.extend(search_page.objects);
            next_page = search_page.more;
        }
        log::debug!(
            "collected {} of {} superjob vacancies for '{}' in {} pages",
            vacancies.items.len(),
            vacancies.found,
            language,
            page
        );
        Ok(vacancies)
    }
}
