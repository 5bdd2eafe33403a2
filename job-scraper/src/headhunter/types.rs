use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub salary: Option<Salary>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u64,
    pub(crate) pages: u32,
}
