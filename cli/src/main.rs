mod config;
mod table;

use job_scraper::headhunter::HeadHunterClient;
use job_scraper::superjob::SuperJobClient;
use salary_analyzer::estimator::{
    predict_rub_salary_hh, predict_rub_salary_sj, HEADHUNTER_CURRENCY, SUPERJOB_CURRENCY,
};
use salary_analyzer::survey_languages;
use thiserror::Error;

use crate::config::Config;
use crate::table::render_table;

const HEADHUNTER_TITLE: &str = "HeadHunter";
const SUPERJOB_TITLE: &str = "SuperJob";

#[derive(Debug, Error)]
enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::Error),
    #[error("Survey failed: {0}")]
    Scrape(#[from] job_scraper::Error),
}

async fn run(config: Config) -> Result<(), Error> {
    let headhunter = HeadHunterClient::new()?;
    let hh_stats =
        survey_languages(&headhunter, predict_rub_salary_hh, HEADHUNTER_CURRENCY).await?;
    log::info!("Finished surveying {}", HEADHUNTER_TITLE);

    let superjob = SuperJobClient::new(config.superjob_api_key);
    let sj_stats = survey_languages(&superjob, predict_rub_salary_sj, SUPERJOB_CURRENCY).await?;
    log::info!("Finished surveying {}", SUPERJOB_TITLE);

    println!("{}", render_table(HEADHUNTER_TITLE, &hh_stats));
    println!();
    println!("{}", render_table(SUPERJOB_TITLE, &sj_stats));
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let result = match Config::from_env() {
        Ok(config) => run(config).await,
        Err(e) => Err(e.into()),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
