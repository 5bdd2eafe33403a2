pub mod scraper;
pub mod types;

pub use scraper::SuperJobClient;
pub use types::Vacancy;
