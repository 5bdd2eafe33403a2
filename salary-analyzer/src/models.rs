/// Salary statistics for one language on one site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateRecord {
    /// As reported by the site, may exceed the number of listings fetched
    pub vacancies_found: u64,
    /// Listings that contributed to the average
    pub vacancies_processed: u64,
    pub average_salary: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStats {
    pub language: String,
    pub stats: AggregateRecord,
}

/// Per-language statistics of one survey, in the order the languages were surveyed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurveyResult {
    entries: Vec<LanguageStats>,
}

impl SurveyResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, language: impl Into<String>, stats: AggregateRecord) {
        self.entries.push(LanguageStats {
            language: language.into(),
            stats,
        });
    }

    pub fn get(&self, language: &str) -> Option<&AggregateRecord> {
        self.entries
            .iter()
            .find(|entry| entry.language == language)
            .map(|entry| &entry.stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageStats> {
        self.entries.iter()
    }
}
