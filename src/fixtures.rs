#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::error::TagfigError;
    use crate::flags::FlagSource;
    use crate::meta::{Field, Kind, Meta, Schema, dotted_name};
    use crate::resolve::FieldResolver;

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    pub struct AppConfig {
        pub name: String,
        pub verbose: bool,
        pub server: ServerConfig,
        pub limits: Option<LimitsConfig>,
        pub tags: HashMap<String, String>,
    }

    impl Schema for AppConfig {
        const META: Meta = Meta {
            name: "AppConfig",
            fields: &[
                Field::leaf(
                    "name",
                    Kind::String,
                    &[
                        ("def", "tagfig"),
                        ("env", "TAGFIG_TEST_NAME"),
                        ("arg", "name,Application name"),
                    ],
                ),
                Field::leaf(
                    "verbose",
                    Kind::Bool,
                    &[
                        ("def", "false"),
                        ("env", "TAGFIG_TEST_VERBOSE"),
                        ("arg", "verbose"),
                    ],
                ),
                Field::nested("server", &ServerConfig::META),
                Field::nested("limits", &LimitsConfig::META),
                Field::leaf("tags", Kind::Other, &[]),
            ],
        };
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
        pub tls: TlsConfig,
        pub timeouts: Vec<u64>,
    }

    impl Schema for ServerConfig {
        const META: Meta = Meta {
            name: "ServerConfig",
            fields: &[
                Field::leaf(
                    "host",
                    Kind::String,
                    &[
                        ("def", "127.0.0.1"),
                        ("env", "TAGFIG_TEST_SERVER_HOST"),
                        ("arg", "host,Hostname to bind"),
                    ],
                ),
                Field::leaf(
                    "port",
                    Kind::Integer,
                    &[
                        ("def", "3000"),
                        ("env", "TAGFIG_TEST_SERVER_PORT"),
                        ("arg", "port,Port number"),
                    ],
                ),
                Field::nested("tls", &TlsConfig::META),
                Field::leaf("timeouts", Kind::Other, &[("def", "[5, 30]")]),
            ],
        };
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    pub struct TlsConfig {
        pub cert: Option<String>,
        pub enabled: bool,
    }

    impl Schema for TlsConfig {
        const META: Meta = Meta {
            name: "TlsConfig",
            fields: &[
                Field::leaf(
                    "cert",
                    Kind::String,
                    &[("env", "TAGFIG_TEST_TLS_CERT"), ("arg", "tls-cert")],
                ),
                Field::leaf("enabled", Kind::Bool, &[("def", "false"), ("arg", "tls")]),
            ],
        };
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    #[serde(default)]
    pub struct LimitsConfig {
        pub max_connections: u32,
    }

    impl Schema for LimitsConfig {
        const META: Meta = Meta {
            name: "LimitsConfig",
            fields: &[Field::leaf(
                "max_connections",
                Kind::Integer,
                &[("def", "100"), ("env", "TAGFIG_TEST_MAX_CONNECTIONS")],
            )],
        };
    }

    // -- Test doubles for the loader's seams ----------------------------------

    /// Flag source answering from a fixed table.
    #[derive(Default)]
    pub struct MockFlags {
        pub values: HashMap<String, String>,
        pub register_error: bool,
        pub registered: Vec<String>,
    }

    impl MockFlags {
        pub fn with(pairs: &[(&str, &str)]) -> Self {
            Self {
                values: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                ..Self::default()
            }
        }
    }

    impl FlagSource for MockFlags {
        fn register_field(
            &mut self,
            parents: &[&'static Field],
            field: &'static Field,
        ) -> Result<(), TagfigError> {
            if self.register_error {
                return Err(TagfigError::AlreadyParsed);
            }
            self.registered.push(dotted_name(parents, field));
            Ok(())
        }

        fn parse(&mut self) -> Result<(), TagfigError> {
            Ok(())
        }

        fn lookup_flag(&self, name: &str) -> Option<&str> {
            self.values.get(name).map(String::as_str)
        }
    }

    /// Resolver answering by bare field name.
    #[derive(Default)]
    pub struct MockResolver {
        pub values: HashMap<&'static str, Value>,
        pub failing: Option<&'static str>,
    }

    impl FieldResolver for MockResolver {
        fn resolve_field(
            &self,
            _parents: &[&'static Field],
            field: &'static Field,
            _flags: &dyn FlagSource,
        ) -> Result<Option<Value>, TagfigError> {
            if self.failing == Some(field.name) {
                return Err(TagfigError::Conversion {
                    field: field.name.to_string(),
                    source: serde_json::from_str::<Value>("{{").unwrap_err(),
                });
            }
            Ok(self.values.get(field.name).cloned())
        }
    }

    // -- Minimal shape: a string default and a nested integer default ---------

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    pub struct Outer {
        pub a: String,
        pub b: Inner,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
    pub struct Inner {
        pub c: i64,
    }

    impl Schema for Outer {
        const META: Meta = Meta {
            name: "Outer",
            fields: &[
                Field::leaf("a", Kind::String, &[("def", "x")]),
                Field::nested("b", &Inner::META),
            ],
        };
    }

    impl Schema for Inner {
        const META: Meta = Meta {
            name: "Inner",
            fields: &[Field::leaf("c", Kind::Integer, &[("def", "3")])],
        };
    }
}
