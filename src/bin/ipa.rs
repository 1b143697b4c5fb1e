use anyhow::Result;
use clap::{Parser, Subcommand};
use freeipa_rs::{Config, IpaClient};
use serde_json::{Map, Value};
use tracing::info;

#[derive(Parser)]
#[command(name = "ipa")]
#[command(about = "FreeIPA command-line client", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check connectivity and credentials against the server
    Ping,
    /// Issue a raw command, e.g. `ipa call user_show alice --param all=true`
    Call {
        /// Remote command name
        method: String,
        /// Positional arguments
        args: Vec<String>,
        /// Named parameters as key=value pairs; values parse as JSON where
        /// possible, otherwise as plain strings
        #[arg(short, long, value_parser = parse_key_value)]
        param: Vec<(String, String)>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;

    let mut client = IpaClient::from_config(&config)?;
    info!("Logging in to {}...", config.freeipa.host);
    client
        .login(&config.freeipa.username, &config.freeipa.password)
        .await?;
    info!("Login successful");

    let result = match cli.command {
        Commands::Ping => client.ping().await?,
        Commands::Call {
            method,
            args,
            param,
        } => {
            let args: Vec<Value> = args.into_iter().map(Value::String).collect();
            let mut params = Map::new();
            for (key, value) in param {
                params.insert(key, parse_value(&value));
            }
            client
                .request(&method, Some(Value::Array(args)), Some(params))
                .await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
