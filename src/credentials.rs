use anyhow::{Context, Result};

/// Account credentials, passed explicitly into the login step.
///
/// Values come from `UPWORK_USERNAME` / `UPWORK_PASSWORD`; how they got into
/// the environment is the caller's business.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        let username = read_var("UPWORK_USERNAME")?;
        let password = read_var("UPWORK_PASSWORD")?;
        Ok(Credentials { username, password })
    }
}

fn read_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{} is not set", key))
}
