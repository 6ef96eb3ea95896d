use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagfigError {
    #[error("Target type '{type_name}' is not a struct")]
    NotStruct { type_name: &'static str },

    #[error("Flag '--{flag}' is declared by both '{first}' and '{second}'")]
    DuplicateFlag {
        flag: String,
        first: String,
        second: String,
    },

    #[error("Failed to parse flags: {0}")]
    Parse(#[source] clap::Error),

    #[error("Flags were already parsed")]
    AlreadyParsed,

    #[error("Failed to resolve field \"{field}\": {source}")]
    Conversion {
        field: String,
        source: serde_json::Error,
    },

    #[error("Failed to resolve field \"{field}\": ${var} is not valid unicode")]
    NonUnicodeEnv { field: String, var: String },

    #[error("Failed to encode target: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to assign resolved values to target: {0}")]
    Assign(#[source] serde_json::Error),
}

impl TagfigError {
    /// True when parsing stopped because `-h`/`--help` was passed.
    ///
    /// The wrapped `clap::Error` carries the rendered help; `clap::Error::exit`
    /// prints it and exits with status 0.
    pub fn is_help(&self) -> bool {
        matches!(
            self,
            TagfigError::Parse(e) if e.kind() == clap::error::ErrorKind::DisplayHelp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_names_field() {
        let source = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        let err = TagfigError::Conversion {
            field: "server.port".into(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("server.port"));
        assert!(msg.starts_with("Failed to resolve field"));
    }

    #[test]
    fn duplicate_flag_formats() {
        let err = TagfigError::DuplicateFlag {
            flag: "port".into(),
            first: "server.port".into(),
            second: "admin.port".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("--port"));
        assert!(msg.contains("server.port"));
        assert!(msg.contains("admin.port"));
    }

    #[test]
    fn not_struct_is_not_help() {
        let err = TagfigError::NotStruct { type_name: "u32" };
        assert!(!err.is_help());
        assert!(err.to_string().contains("u32"));
    }
}
