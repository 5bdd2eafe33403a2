use job_scraper::{headhunter, superjob};

use crate::api::SalaryFields;

pub const HEADHUNTER_CURRENCY: &str = "RUR";
pub const SUPERJOB_CURRENCY: &str = "rub";

/// Estimates a ruble salary from the stated bounds.
///
/// Listings in another currency, or without any bound, give `None`.
/// With both bounds the midpoint is used, an upper bound alone is
/// discounted by 20% and a lower bound alone is raised by 20%.
pub fn predict_rub_salary<S>(fields: &S, currency: &str) -> Option<f64>
where
    S: SalaryFields + ?Sized,
{
    if fields.currency() != Some(currency) {
        return None;
    }
    match (fields.salary_from(), fields.salary_to()) {
        (Some(from), Some(to)) => Some((from as f64 + to as f64) / 2.0),
        (None, Some(to)) => Some(to as f64 * 0.8),
        (Some(from), None) => Some(from as f64 * 1.2),
        (None, None) => None,
    }
}

pub fn predict_rub_salary_hh(vacancy: &headhunter::Vacancy, currency: &str) -> Option<f64> {
    let salary = vacancy.salary.as_ref()?;
    predict_rub_salary(salary, currency)
}

pub fn predict_rub_salary_sj(vacancy: &superjob::Vacancy, currency: &str) -> Option<f64> {
    predict_rub_salary(vacancy, currency)
}
