use job_scraper::VacancySource;

use crate::models::{AggregateRecord, SurveyResult};

pub const LANGUAGES: [&str; 9] = [
    "python",
    "c",
    "c#",
    "c++",
    "java",
    "JavaScript",
    "ruby",
    "go",
    "1c",
];

/// Averages the salary estimates of `vacancies`, skipping listings without one.
/// The average is truncated to whole rubles.
pub fn aggregate<V, P>(
    predict_salary: P,
    vacancies: &[V],
    vacancies_found: u64,
    currency: &str,
) -> AggregateRecord
where
    P: Fn(&V, &str) -> Option<f64>,
{
    let (total_salary, vacancies_processed) = vacancies
        .iter()
        .filter_map(|vacancy| predict_salary(vacancy, currency))
        .fold((0.0, 0u64), |(total, count), salary| (total + salary, count + 1));
    let average_salary = if vacancies_processed > 0 {
        Some((total_salary / vacancies_processed as f64) as u64)
    } else {
        None
    };
    AggregateRecord {
        vacancies_found,
        vacancies_processed,
        average_salary,
    }
}

/// Runs one survey: every language in [`LANGUAGES`] is fetched from `source`
/// in turn and aggregated. The first fetch error aborts the survey.
pub async fn survey_languages<S, P>(
    source: &S,
    predict_salary: P,
    currency: &str,
) -> job_scraper::Result<SurveyResult>
where
    S: VacancySource + Sync,
    P: Fn(&S::Vacancy, &str) -> Option<f64>,
{
    let mut result = SurveyResult::new();
    for language in LANGUAGES {
        log::info!("surveying vacancies for '{}'", language);
        let vacancies = source.fetch_vacancies(language).await?;
        let stats = aggregate(&predict_salary, &vacancies.items, vacancies.found, currency);
        log::info!(
            "'{}': found {}, processed {}, average salary {:?}",
            language,
            stats.vacancies_found,
            stats.vacancies_processed,
            stats.average_salary
        );
        result.push(language, stats);
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::estimator::{predict_rub_salary_hh, HEADHUNTER_CURRENCY};
    use async_trait::async_trait;
    use job_scraper::{headhunter, Error, Vacancies};
    use std::sync::Mutex;

    fn hh_vacancy(from: Option<u64>, to: Option<u64>, currency: &str) -> headhunter::Vacancy {
        headhunter::Vacancy {
            id: "1".to_owned(),
            name: "Программист".to_owned(),
            salary: Some(headhunter::Salary {
                from,
                to,
                currency: Some(currency.to_owned()),
            }),
        }
    }

    #[test]
    fn test_aggregate_averages_known_estimates() {
        let vacancies = vec![
            hh_vacancy(Some(100000), Some(150000), "RUR"),
            hh_vacancy(None, Some(100000), "RUR"),
            hh_vacancy(Some(1000), None, "USD"),
            hh_vacancy(None, None, "RUR"),
        ];
        let stats = aggregate(predict_rub_salary_hh, &vacancies, 120, HEADHUNTER_CURRENCY);
        assert_eq!(
            stats,
            AggregateRecord {
                vacancies_found: 120,
                vacancies_processed: 2,
                average_salary: Some(102500),
            }
        );
    }

    #[test]
    fn test_aggregate_truncates_average() {
        let vacancies = vec![
            hh_vacancy(Some(100001), None, "RUR"),
            hh_vacancy(Some(100000), Some(100001), "RUR"),
        ];
        // 120001.2 and 100000.5
        let stats = aggregate(predict_rub_salary_hh, &vacancies, 2, HEADHUNTER_CURRENCY);
        assert_eq!(stats.average_salary, Some(110000));
    }

    #[test]
    fn test_aggregate_nothing_processed() {
        let vacancies = vec![
            hh_vacancy(None, None, "RUR"),
            hh_vacancy(Some(10), None, "EUR"),
        ];
        let stats = aggregate(predict_rub_salary_hh, &vacancies, 5000, HEADHUNTER_CURRENCY);
        assert_eq!(stats.vacancies_found, 5000);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, None);

        let stats = aggregate(predict_rub_salary_hh, &[], 0, HEADHUNTER_CURRENCY);
        assert_eq!(stats, AggregateRecord::default());
    }

    struct CannedSource {
        requested: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl CannedSource {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                requested: Mutex::new(Vec::new()),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl VacancySource for CannedSource {
        type Vacancy = headhunter::Vacancy;

        async fn fetch_vacancies(
            &self,
            language: &str,
        ) -> job_scraper::Result<Vacancies<headhunter::Vacancy>> {
            self.requested.lock().unwrap().push(language.to_owned());
            if self.fail_on == Some(language) {
                let source = serde_json::from_str::<u8>("{").unwrap_err();
                return Err(Error::Decode {
                    url: "http://localhost/vacancies".to_owned(),
                    source,
                });
            }
            // Only "go" gets listings, the rest come back empty
            if language == "go" {
                return Ok(Vacancies {
                    items: vec![hh_vacancy(Some(200000), Some(300000), "RUR")],
                    found: 7,
                });
            }
            Ok(Vacancies::default())
        }
    }

    #[tokio::test]
    async fn test_survey_keeps_language_order() {
        let source = CannedSource::new(None);
        let result = survey_languages(&source, predict_rub_salary_hh, HEADHUNTER_CURRENCY)
            .await
            .expect("Survey failed");

        let languages = result
            .iter()
            .map(|entry| entry.language.as_str())
            .collect::<Vec<_>>();
        assert_eq!(languages, LANGUAGES.to_vec());
        assert_eq!(*source.requested.lock().unwrap(), LANGUAGES.to_vec());

        let go = result.get("go").expect("go should be surveyed");
        assert_eq!(go.vacancies_found, 7);
        assert_eq!(go.average_salary, Some(250000));
        assert_eq!(result.get("python"), Some(&AggregateRecord::default()));
    }

    #[tokio::test]
    async fn test_survey_aborts_on_fetch_error() {
        let source = CannedSource::new(Some("java"));
        let result = survey_languages(&source, predict_rub_salary_hh, HEADHUNTER_CURRENCY).await;
        assert!(matches!(result, Err(Error::Decode { .. })));
        let requested = source.requested.lock().unwrap();
        assert_eq!(requested.last().map(String::as_str), Some("java"));
        assert_eq!(requested.len(), 5);
    }
}
