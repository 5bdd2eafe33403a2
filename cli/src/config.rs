use thiserror::Error;

pub const SUPERJOB_API_KEY_VAR: &str = "SJ_KEY";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable '{0}' not set")]
    MissingVar(&'static str),
}

pub struct Config {
    pub superjob_api_key: String,
}

impl Config {
    /// Reads the configuration from the process environment,
    /// after loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let superjob_api_key = lookup(SUPERJOB_API_KEY_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(Error::MissingVar(SUPERJOB_API_KEY_VAR))?;
        Ok(Self { superjob_api_key })
    }
}
