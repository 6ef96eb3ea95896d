//! # tagfig demo application
//!
//! A sample program showing how an application wires [tagfig] into its
//! startup. It loads [`DemoConfig`] and prints the resolved values.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example tagfig_demo
//! cargo run --example tagfig_demo -- --help
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature             | How to exercise it                                            |
//! |---------------------|---------------------------------------------------------------|
//! | Defaults            | `cargo run --example tagfig_demo`                             |
//! | Env var             | `DEMO_PORT=9999 cargo run --example tagfig_demo`              |
//! | Flag beats env      | `DEMO_PORT=9999 cargo run --example tagfig_demo -- --port=1`  |
//! | `.env` file         | put `DEMO_COLOR=red` in `./.env`, then run                    |
//! | Help                | `cargo run --example tagfig_demo -- -h`                       |
//! | Type error          | `cargo run --example tagfig_demo -- --port=true`              |
//! | Logging             | `RUST_LOG=tagfig=debug cargo run --example tagfig_demo`       |

mod config;

use tagfig::{Loader, LoaderOptions, TagfigError};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

fn ansi_color_code(name: &str) -> &str {
    match name {
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",
        _ => "\x1b[0m",
    }
}

const RESET: &str = "\x1b[0m";

fn print_config(config: &DemoConfig) {
    let color = ansi_color_code(&config.display.color);

    if config.verbose {
        println!("{color}[verbose] Resolved configuration for {:?}{RESET}", config.name);
        println!();
    }

    let entries = [
        ("name", config.name.clone()),
        ("verbose", config.verbose.to_string()),
        ("server.host", config.server.host.clone()),
        ("server.port", config.server.port.to_string()),
        ("server.max_connections", config.server.max_connections.to_string()),
        ("display.color", config.display.color.clone()),
        ("display.format", config.display.format.clone()),
    ];

    if config.display.format == "plain" {
        for (key, value) in &entries {
            println!("{key}={value}");
        }
    } else {
        let max_key_len = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in &entries {
            println!("{color}{key:<max_key_len$}{RESET}  {value}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let loader = Loader::new(LoaderOptions {
        title: "tagfig-demo".into(),
        use_dot_env: true,
        ..LoaderOptions::default()
    });

    match loader.load_default::<DemoConfig>() {
        Ok(config) => print_config(&config),
        Err(TagfigError::Parse(e)) => e.exit(),
        Err(e) => {
            eprintln!("Failed to load config:\n{e}");
            std::process::exit(1);
        }
    }
}
