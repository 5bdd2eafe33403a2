pub mod scraper;
pub mod types;

pub use scraper::HeadHunterClient;
pub use types::{Salary, Vacancy};
