use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

/// Where `env` tag lookups read from.
///
/// `Vars` lets tests and embedding applications pass a synthetic table
/// instead of touching the process environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EnvSource {
    #[default]
    Process,
    Vars(HashMap<String, String>),
}

impl EnvSource {
    /// Build a `Vars` source from any iterator of pairs.
    pub fn vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        EnvSource::Vars(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a variable. A variable set to `""` is present.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match self {
            EnvSource::Process => std::env::var(name),
            EnvSource::Vars(vars) => vars.get(name).cloned().ok_or(VarError::NotPresent),
        }
    }
}

/// Best-effort `.env` ingestion into the process environment.
///
/// Reads `path` if given, otherwise searches for `.env` from the current
/// directory upwards. Variables already set are left alone. A missing or
/// malformed file is ignored.
#[cfg(feature = "dotenv")]
pub fn load_dot_env(path: Option<&Path>) {
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match result {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) => tracing::debug!(error = %e, "skipping .env file"),
    }
}

#[cfg(not(feature = "dotenv"))]
pub fn load_dot_env(_path: Option<&Path>) {
    tracing::debug!("built without the `dotenv` feature, ignoring use_dot_env");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vars_lookup() {
        let env = EnvSource::vars([("HOST", "0.0.0.0"), ("EMPTY", "")]);
        assert_eq!(env.var("HOST").unwrap(), "0.0.0.0");
        assert_eq!(env.var("EMPTY").unwrap(), "");
        assert_eq!(env.var("MISSING"), Err(VarError::NotPresent));
    }

    #[test]
    fn process_lookup_missing() {
        let env = EnvSource::Process;
        assert_eq!(
            env.var("TAGFIG_TEST_SURELY_NOT_SET_ANYWHERE"),
            Err(VarError::NotPresent)
        );
    }

    #[test]
    fn default_is_process() {
        assert_eq!(EnvSource::default(), EnvSource::Process);
    }

    #[cfg(feature = "dotenv")]
    #[test]
    fn dot_env_file_is_ingested() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "TAGFIG_TEST_DOTENV_INGESTED=from-file\n").unwrap();

        load_dot_env(Some(&path));

        assert_eq!(
            EnvSource::Process.var("TAGFIG_TEST_DOTENV_INGESTED").unwrap(),
            "from-file"
        );
    }

    #[test]
    fn missing_dot_env_file_is_ignored() {
        let dir = tempfile::TempDir::new().unwrap();
        load_dot_env(Some(&dir.path().join("nope.env")));
    }
}
