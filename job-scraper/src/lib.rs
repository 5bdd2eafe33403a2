pub mod api;
pub mod headhunter;
pub mod superjob;

pub use api::{Error, Result, Vacancies, VacancySource};
