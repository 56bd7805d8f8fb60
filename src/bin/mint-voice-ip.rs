//! `mint-voice-ip` — mint a voice IP asset from the command line.
//!
//! Without arguments it submits the built-in sample asset. `--interactive`
//! prompts for the character name and URLs instead.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing_subscriber::filter::LevelFilter;

use voice_ip_minter::config::MintConfig;
use voice_ip_minter::domain::ip_asset::{
    MintResult, VoiceAsset, SAMPLE_CHARACTER_NAME, SAMPLE_IMAGE_URL, SAMPLE_VOICE_URL,
};
use voice_ip_minter::http::StatusPolicy;
use voice_ip_minter::logging;
use voice_ip_minter::prelude::MintClient;

/// Mint a voice IP asset through the Crossmint IP collections API.
///
/// The API key is read from `CROSSMINT_API_KEY` (or `API_KEY`), including a
/// `.env` file in the working directory.
#[derive(clap::Parser, Debug)]
#[command(name = "mint-voice-ip", version)]
struct Args {
    /// Voice character name
    #[arg(long, default_value = SAMPLE_CHARACTER_NAME)]
    name: String,

    /// URL of the character's image
    #[arg(long, value_name("URL"), default_value = SAMPLE_IMAGE_URL)]
    image_url: String,

    /// URL of the voice sample (MP3)
    #[arg(long, value_name("URL"), default_value = SAMPLE_VOICE_URL)]
    voice_url: String,

    /// Prompt for the name and URLs on stdin
    #[arg(short, long, conflicts_with_all = ["name", "image_url", "voice_url"])]
    interactive: bool,

    /// Attach commercial-use license terms to the asset
    #[arg(long)]
    license_terms: bool,

    /// Treat non-2xx responses as failures even when the body has no `error` field
    #[arg(long)]
    strict_status: bool,

    /// Request timeout; by default the request may wait indefinitely
    #[arg(long, value_name("SECS"), value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Print the request instead of sending it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    logging::init_from_env_or(LevelFilter::WARN)?;

    let args = Args::parse();

    let asset = if args.interactive {
        let stdin = io::stdin();
        prompt_asset(&mut stdin.lock())?
    } else {
        VoiceAsset::new(&args.name, &args.image_url, &args.voice_url)
    }
    .with_license_terms(args.license_terms);

    if let Err(e) = asset.validate() {
        eprintln!("Please fill in all fields before minting ({e}).");
        return Ok(ExitCode::FAILURE);
    }

    let mut config = MintConfig::from_env().wrap_err("Failed to load configuration")?;
    if args.strict_status {
        config.status_policy = StatusPolicy::Strict;
    }
    if let Some(secs) = args.timeout {
        config.timeout = Some(Duration::from_secs(secs));
    }

    let client = MintClient::new(config).wrap_err("Failed to build HTTP client")?;

    if args.dry_run {
        let request = client.ip_assets().build_request(&asset)?;
        println!("POST {}", client.collection_url());
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(ExitCode::SUCCESS);
    }

    if !client.config().has_api_key() {
        tracing::warn!("No API key configured; sending an empty X-API-KEY header");
    }

    println!("Minting IP asset...");
    let result = client.submit(&asset).await;
    render(&result)
}

fn prompt_asset(input: &mut impl BufRead) -> Result<VoiceAsset> {
    let name = prompt(input, "Voice Character Name", "e.g., Morgan Freeman")?;
    let image_url = prompt(input, "Character Image URL", "URL of the character's image")?;
    let voice_url = prompt(input, "Voice Sample URL", "URL of the voice sample (MP3)")?;
    Ok(VoiceAsset::new(name, image_url, voice_url))
}

fn prompt(input: &mut impl BufRead, label: &str, hint: &str) -> Result<String> {
    print!("{label} [{hint}]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .wrap_err_with(|| format!("Failed to read {label}"))?;
    Ok(line.trim().to_string())
}

fn render(result: &MintResult) -> Result<ExitCode> {
    if result.reports_error() {
        let message = result
            .error_message()
            .unwrap_or_else(|| "Unknown error".to_string());
        eprintln!("Minting failed: {message}");
        if let Some(body) = result.body() {
            eprintln!("{}", serde_json::to_string_pretty(body)?);
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("IP Asset minted successfully!");
    if let Some(body) = result.body() {
        println!("{}", serde_json::to_string_pretty(body)?);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_must_be_positive() {
        let err = Args::try_parse_from(["mint-voice-ip", "--timeout", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let args = Args::try_parse_from(["mint-voice-ip", "--timeout", "30"]).unwrap();
        assert_eq!(args.timeout, Some(30));
        assert_eq!(args.name, SAMPLE_CHARACTER_NAME);
    }

    #[test]
    fn test_interactive_conflicts_with_explicit_fields() {
        assert!(Args::try_parse_from(["mint-voice-ip", "-i", "--name", "X"]).is_err());
        assert!(Args::try_parse_from(["mint-voice-ip", "-i"]).is_ok());
    }

    #[test]
    fn test_prompt_asset_reads_three_lines() {
        let mut input = "Ada Lovelace\nhttps://img/a.png\n  https://cdn/a.mp3  \n".as_bytes();
        let asset = prompt_asset(&mut input).unwrap();
        assert_eq!(
            asset,
            VoiceAsset::new("Ada Lovelace", "https://img/a.png", "https://cdn/a.mp3")
        );
    }
}
