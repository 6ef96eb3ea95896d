//! Configuration structs for the tagfig demo application.
//!
//! The root [`DemoConfig`] holds two top-level keys and two nested
//! sub-configs. Each struct implements [`Schema`] by hand; the tags name the
//! default, the environment variable and the flag for every leaf:
//!
//! | Key                      | Flag                  | Env var                  | Default     |
//! |--------------------------|-----------------------|--------------------------|-------------|
//! | `name`                   | `--name`              | `DEMO_NAME`              | `tagfig-demo` |
//! | `verbose`                | `--verbose`           |                          | `false`     |
//! | `server.host`            | `--host`              | `DEMO_HOST`              | `127.0.0.1` |
//! | `server.port`            | `--port`              | `DEMO_PORT`              | `3000`      |
//! | `server.max_connections` |                       | `DEMO_MAX_CONNECTIONS`   | `100`       |
//! | `display.color`          | `--color`             | `DEMO_COLOR`             | `yellow`    |
//! | `display.format`         | `--format`            |                          | `pretty`    |

use serde::{Deserialize, Serialize};
use tagfig::{Field, Kind, Meta, Schema};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DemoConfig {
    pub name: String,
    pub verbose: bool,
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

impl Schema for DemoConfig {
    const META: Meta = Meta {
        name: "DemoConfig",
        fields: &[
            Field::leaf(
                "name",
                Kind::String,
                &[
                    ("def", "tagfig-demo"),
                    ("env", "DEMO_NAME"),
                    ("arg", "name,Application name shown in the banner"),
                ],
            ),
            Field::leaf(
                "verbose",
                Kind::Bool,
                &[("def", "false"), ("arg", "verbose,Enable verbose output")],
            ),
            Field::nested("server", &ServerConfig::META),
            Field::nested("display", &DisplayConfig::META),
        ],
    };
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
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
                    ("env", "DEMO_HOST"),
                    ("arg", "host,Hostname to bind to"),
                ],
            ),
            Field::leaf(
                "port",
                Kind::Integer,
                &[("def", "3000"), ("env", "DEMO_PORT"), ("arg", "port,Port number")],
            ),
            Field::leaf(
                "max_connections",
                Kind::Integer,
                &[("def", "100"), ("env", "DEMO_MAX_CONNECTIONS")],
            ),
        ],
    };
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DisplayConfig {
    /// One of red, green, yellow, blue, magenta, cyan, white.
    pub color: String,
    /// `pretty` or `plain`.
    pub format: String,
}

impl Schema for DisplayConfig {
    const META: Meta = Meta {
        name: "DisplayConfig",
        fields: &[
            Field::leaf(
                "color",
                Kind::String,
                &[
                    ("def", "yellow"),
                    ("env", "DEMO_COLOR"),
                    ("arg", "color,Terminal color for the output"),
                ],
            ),
            Field::leaf(
                "format",
                Kind::String,
                &[("def", "pretty"), ("arg", "format,Output format (pretty or plain)")],
            ),
        ],
    };
}
