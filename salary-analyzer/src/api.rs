use job_scraper::{headhunter, superjob};

/// Access to the stated salary bounds of a listing.
/// Bounds that are missing or zero are reported as `None`.
pub trait SalaryFields {
    fn currency(&self) -> Option<&str>;
    fn salary_from(&self) -> Option<u64>;
    fn salary_to(&self) -> Option<u64>;
}

fn stated(bound: Option<u64>) -> Option<u64> {
    bound.filter(|amount| *amount > 0)
}

impl SalaryFields for headhunter::Salary {
    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn salary_from(&self) -> Option<u64> {
        stated(self.from)
    }

    fn salary_to(&self) -> Option<u64> {
        stated(self.to)
    }
}

impl SalaryFields for superjob::Vacancy {
    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn salary_from(&self) -> Option<u64> {
        stated(self.payment_from)
    }

    fn salary_to(&self) -> Option<u64> {
        stated(self.payment_to)
    }
}
