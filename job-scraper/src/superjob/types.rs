use serde::{Deserialize, Serialize};

/// SuperJob reports a missing bound as `0` rather than `null`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub id: u64,
    #[serde(default)]
    pub profession: String,
    pub payment_from: Option<u64>,
    pub payment_to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u64,
    pub(crate) more: bool,
}
