use anyhow::{bail, Context, Result};

pub const TABLE_NAME: &str = "TABLE_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(TABLE_NAME).with_context(|| format!("{} not set", TABLE_NAME))?;
        if table_name.trim().is_empty() {
            bail!("{} is empty", TABLE_NAME);
        }

        Ok(Self { table_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_table_name() {
        let config = Config::from_lookup(|key| match key {
            TABLE_NAME => Some("mock-payments".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.table_name, "mock-payments");
    }

    #[test]
    fn missing_table_name_is_an_error() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.to_string(), "TABLE_NAME not set");
    }

    #[test]
    fn blank_table_name_is_an_error() {
        let err = Config::from_lookup(|_| Some("  ".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "TABLE_NAME is empty");
    }
}
