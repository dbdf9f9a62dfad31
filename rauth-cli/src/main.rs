use clap::{Parser, Subcommand};
use rauth_lib::{DeviceProfile, TokenInput, auth_headers, decode_token, encode_token};
use std::error::Error;
use tracing::info;

#[derive(Parser)]
#[command(name = "rauth", about = "R-Auth device token encoder/decoder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an R-Auth token from device metadata
    Encode {
        /// Client fingerprint; the device identifier becomes
        /// web-fingerprint-<value>
        #[arg(long)]
        fingerprint: Option<String>,

        /// Device serial number
        #[arg(long)]
        serial: Option<String>,

        /// Seconds since epoch, base-10; current time when absent or
        /// unparsable
        #[arg(long)]
        timestamp: Option<String>,

        /// Device model string
        #[arg(long)]
        model: Option<String>,

        /// Operating system string
        #[arg(long)]
        os: Option<String>,

        /// Mark the token as coming from a development build
        #[arg(long)]
        dev: bool,

        /// Bearer credential; when given, print the full header pair
        /// instead of the bare token
        #[arg(long)]
        bearer: Option<String>,

        /// Print input and token as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a token and print its fields
    Decode {
        /// The base64 token text
        token: String,

        /// Print the decoded fields as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            fingerprint,
            serial,
            timestamp,
            model,
            os,
            dev,
            bearer,
            json,
        } => {
            let profile = DeviceProfile {
                fingerprint,
                serial_number: serial,
                device_model: model,
                os,
            };
            let ts = timestamp.as_deref().map(TokenInput::parse_timestamp);
            let mut input = TokenInput::from_profile(&profile, ts);
            input.is_development = dev;

            let token = encode_token(&input);
            info!(
                timestamp = input.timestamp,
                token_len = token.len(),
                "encoded R-Auth token"
            );
            if json {
                let report = serde_json::json!({ "input": input, "token": token });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if let Some(bearer) = bearer {
                for (name, value) in auth_headers(&token, &bearer) {
                    println!("{name}: {value}");
                }
            } else {
                println!("{token}");
            }
        }
        Command::Decode { token, json } => {
            let decoded = decode_token(&token)?;
            info!(timestamp = decoded.timestamp, "decoded R-Auth token");
            if json {
                println!("{}", serde_json::to_string_pretty(&decoded)?);
            } else {
                println!("Device ID: {}", decoded.device_identifier);
                println!("Serial: {}", decoded.serial_number);
                println!("Timestamp: {}", decoded.timestamp);
                println!("Model: {}", decoded.device_model);
                println!("OS: {}", decoded.os);
                println!("Platform: {}", decoded.platform_tag);
                println!("API version: {}", decoded.api_version);
                println!("Development: {}", decoded.is_development);
                println!(
                    "Seed: {} (matches timestamp: {})",
                    decoded.seed,
                    decoded.verify_seed()
                );
            }
        }
    }

    Ok(())
}
