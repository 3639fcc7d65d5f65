//! Submit command implementation.
//!
//! Collects order fields from flags or interactive prompts, submits the
//! order through the gateway and renders the outcome.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

use vela_core::data::{OrderType, RawOrderFields, SubmissionOutcome};
use vela_core::traits::Credentials;
use vela_gateway::binance::{BinanceEnvironment, BinanceFutures};
use vela_gateway::submit::OrderSubmitter;
use vela_telemetry::SensitiveDataMasker;

/// Arguments for the submit command
#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Trading symbol (e.g., BTCUSDT)
    #[arg(short, long)]
    symbol: Option<String>,

    /// Order side (buy, sell)
    #[arg(long)]
    side: Option<String>,

    /// Order type (market, limit, stop_market)
    #[arg(long = "type")]
    order_type: Option<String>,

    /// Order quantity in base asset units
    #[arg(short, long)]
    quantity: Option<String>,

    /// Limit price (required for limit orders)
    #[arg(short, long)]
    price: Option<String>,

    /// Stop trigger price (required for stop-market orders)
    #[arg(long)]
    stop_price: Option<String>,

    /// Target environment (testnet, production)
    #[arg(short, long, visible_alias = "env", default_value = "testnet")]
    environment: String,

    /// Binance API key
    #[arg(long, env = "BINANCE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Binance API secret
    #[arg(long, env = "BINANCE_API_SECRET", hide_env_values = true)]
    api_secret: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    output: String,

    /// Fail on missing fields instead of prompting
    #[arg(long)]
    non_interactive: bool,
}

/// Run the submit command, returning the process exit code.
///
/// Exit code is 0 only when the exchange accepted the order: 1 for a
/// rejection (local or exchange-side), 2 for a transport failure.
///
/// # Errors
///
/// Returns error for malformed arguments, missing credentials or
/// logging problems; submission outcomes are reported via the exit
/// code, not as errors.
pub async fn run(args: SubmitArgs) -> Result<u8> {
    let environment = BinanceEnvironment::from_str(&args.environment)
        .map_err(|e| anyhow::anyhow!("{e} (expected testnet or production)"))?;

    let interactive = !args.non_interactive;
    let fields = collect_fields(&args, interactive)?;
    let credentials = collect_credentials(&args, interactive)?;

    let masker = SensitiveDataMasker::new();
    info!(
        environment = %environment,
        api_key = masker.mask_value(credentials.api_key()),
        "Submitting order"
    );

    if !environment.is_testnet() {
        eprintln!("WARNING: targeting production, real funds at risk");
    }

    let transport = BinanceFutures::connect(&credentials, environment)?;
    let submitter = OrderSubmitter::new(transport);
    let outcome = submitter.submit(&fields).await;

    println!("{}", render_outcome(&outcome, &args.output)?);

    Ok(match outcome {
        SubmissionOutcome::Accepted { .. } => 0,
        SubmissionOutcome::Rejected { .. } => 1,
        SubmissionOutcome::TransportFailure { .. } => 2,
    })
}

/// Assemble raw order fields from flags, prompting for anything missing.
///
/// Conditional fields (price, stop price) are only prompted for when
/// the chosen order type needs them; validation of the final shape is
/// left to the order validator.
fn collect_fields(args: &SubmitArgs, interactive: bool) -> Result<RawOrderFields> {
    let symbol = resolve(args.symbol.clone(), "Symbol (e.g., BTCUSDT)", interactive)?;
    let side = resolve(args.side.clone(), "Side (buy/sell)", interactive)?;
    let order_type = resolve(
        args.order_type.clone(),
        "Order type (market/limit/stop_market)",
        interactive,
    )?;

    let quantity = resolve_decimal(args.quantity.clone(), "Quantity", "quantity", interactive)?;

    // Prompt for conditional fields only when the type calls for them.
    // An unparseable type skips prompting; the validator reports it.
    let parsed_type = OrderType::from_str(&order_type).ok();
    let needs_price = parsed_type.is_some_and(|t| t.requires_price());
    let needs_stop = parsed_type.is_some_and(|t| t.requires_stop_price());

    let price = resolve_conditional_decimal(
        args.price.clone(),
        needs_price,
        "Limit price",
        "price",
        interactive,
    )?;
    let stop_price = resolve_conditional_decimal(
        args.stop_price.clone(),
        needs_stop,
        "Stop price",
        "stop price",
        interactive,
    )?;

    Ok(RawOrderFields {
        symbol,
        side,
        order_type,
        quantity,
        price,
        stop_price,
    })
}

fn collect_credentials(args: &SubmitArgs, interactive: bool) -> Result<Credentials> {
    let api_key = resolve(args.api_key.clone(), "API key", interactive)
        .context("API key required (--api-key or BINANCE_API_KEY)")?;
    let api_secret = resolve(args.api_secret.clone(), "API secret", interactive)
        .context("API secret required (--api-secret or BINANCE_API_SECRET)")?;

    Ok(Credentials::new(api_key, api_secret))
}

fn resolve(value: Option<String>, label: &str, interactive: bool) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ if interactive => {
            let v = prompt(label)?;
            if v.is_empty() {
                bail!("No value provided for {label}");
            }
            Ok(v)
        }
        _ => bail!("Missing required value: {label}"),
    }
}

/// Resolve a required numeric field. Flag values are parsed once and
/// rejected if malformed; prompted values re-prompt until they parse.
fn resolve_decimal(
    value: Option<String>,
    label: &str,
    field: &str,
    interactive: bool,
) -> Result<Decimal> {
    if let Some(v) = value {
        return parse_decimal(v.trim(), field);
    }
    if !interactive {
        bail!("Missing required value: {label}");
    }
    loop {
        let input = prompt(label)?;
        if input.is_empty() {
            bail!("No value provided for {label}");
        }
        match input.parse::<Decimal>() {
            Ok(d) => return Ok(d),
            Err(_) => eprintln!("Not a number: '{input}', try again"),
        }
    }
}

/// Resolve an optional numeric field, prompting only when the order
/// type needs it. An empty prompt answer leaves the field absent so the
/// validator can name it in its error.
fn resolve_conditional_decimal(
    value: Option<String>,
    needed: bool,
    label: &str,
    field: &str,
    interactive: bool,
) -> Result<Option<Decimal>> {
    if let Some(v) = value {
        return parse_decimal(v.trim(), field).map(Some);
    }
    if !(needed && interactive) {
        return Ok(None);
    }
    loop {
        let input = prompt(label)?;
        if input.is_empty() {
            return Ok(None);
        }
        match input.parse::<Decimal>() {
            Ok(d) => return Ok(Some(d)),
            Err(_) => eprintln!("Not a number: '{input}', try again"),
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;

    Ok(line.trim().to_string())
}

fn parse_decimal(value: &str, field: &str) -> Result<Decimal> {
    value
        .parse::<Decimal>()
        .with_context(|| format!("Invalid {field}: '{value}'"))
}

fn render_outcome(outcome: &SubmissionOutcome, format: &str) -> Result<String> {
    match format {
        "json" => serde_json::to_string_pretty(outcome).context("Failed to encode outcome"),
        _ => Ok(match outcome {
            SubmissionOutcome::Accepted { ack } => format!(
                "Order accepted: id {} on {} (status {})",
                ack.order_id, ack.symbol, ack.status
            ),
            other => other.to_string(),
        }),
    }
}
