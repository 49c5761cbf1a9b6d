//! stake-cli — build, encode and validate stake module transactions.

mod config;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

use config::CliConfig;
use stake_transactions::codec;
use stake_transactions::{Transaction, TxMapper};
use stake_types::{Actor, Coin, Decimal};
use stake_utils::LogFormat;

#[derive(Parser)]
#[command(name = "stake-cli", about = "Build and validate stake module transactions")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "STAKE_CONFIG")]
    config: Option<PathBuf>,

    /// Chain id stamped on actors.
    #[arg(long, env = "STAKE_CHAIN_ID")]
    chain_id: Option<String>,

    /// App scope stamped on actors.
    #[arg(long, env = "STAKE_APP")]
    app: Option<String>,

    /// Denomination used when an amount is a bare number.
    #[arg(long, env = "STAKE_DENOM")]
    denom: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "STAKE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "STAKE_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Delegate stake to a validator.
    Bond {
        /// Hex address of the validator.
        #[arg(long)]
        delegatee: String,
        /// Amount, either "<n><denom>" or a bare number in the default denomination.
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
    /// Release stake delegated to a validator.
    Unbond {
        #[arg(long)]
        delegatee: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
    /// Nominate a validator candidate with a self-bond and commission rate.
    Nominate {
        #[arg(long)]
        nominee: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Commission rate, e.g. "0.05".
        #[arg(long, allow_hyphen_values = true)]
        commission: String,
        #[arg(long, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
    /// Change a validator's commission rate.
    ModifyCommission {
        #[arg(long)]
        delegatee: String,
        #[arg(long, allow_hyphen_values = true)]
        commission: String,
        #[arg(long, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
    /// Decode a transaction (JSON envelope or hex frame) and run structural validation.
    Validate {
        /// Input file; reads stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List registered transaction types.
    Registry,
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    /// JSON envelope.
    Json,
    /// Hex-encoded binary frame.
    Frame,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let log_format: LogFormat = config.log_format.parse().map_err(anyhow::Error::msg)?;
    stake_utils::init_logging(log_format, &config.log_level);

    let mut mapper = TxMapper::new();
    stake_transactions::register(&mut mapper).context("registering stake transaction types")?;

    match cli.command {
        Command::Bond {
            delegatee,
            amount,
            output,
        } => {
            let tx = Transaction::bond(
                parse_actor(&config, &delegatee)?,
                parse_amount(&config, &amount)?,
            );
            print_tx(&tx, output)?;
        }
        Command::Unbond {
            delegatee,
            amount,
            output,
        } => {
            let tx = Transaction::unbond(
                parse_actor(&config, &delegatee)?,
                parse_amount(&config, &amount)?,
            );
            print_tx(&tx, output)?;
        }
        Command::Nominate {
            nominee,
            amount,
            commission,
            output,
        } => {
            let tx = Transaction::nominate(
                parse_actor(&config, &nominee)?,
                parse_amount(&config, &amount)?,
                parse_commission(&commission)?,
            );
            print_tx(&tx, output)?;
        }
        Command::ModifyCommission {
            delegatee,
            commission,
            output,
        } => {
            let tx = Transaction::modify_commission(
                parse_actor(&config, &delegatee)?,
                parse_commission(&commission)?,
            );
            print_tx(&tx, output)?;
        }
        Command::Validate { input } => {
            let raw = read_input(input.as_ref())?;
            let tx = admit(&mapper, &raw)?;
            println!("ok {} {}", tx.tag(), tx.actor());
        }
        Command::Registry => {
            for (tag, byte) in mapper.registered() {
                println!("{byte:#04x} {tag}");
            }
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

/// File settings (or defaults) with CLI flags and env vars applied on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    let base = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CliConfig::default(),
    };
    Ok(CliConfig {
        chain_id: cli.chain_id.clone().unwrap_or(base.chain_id),
        app: cli.app.clone().unwrap_or(base.app),
        default_denom: cli.denom.clone().unwrap_or(base.default_denom),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
        log_format: cli.log_format.clone().unwrap_or(base.log_format),
    })
}

fn parse_actor(config: &CliConfig, hex_address: &str) -> anyhow::Result<Actor> {
    let address = hex::decode(hex_address.trim_start_matches("0x"))
        .with_context(|| format!("actor address {hex_address:?} is not hex"))?;
    Ok(Actor::new(config.chain_id.clone(), config.app.clone(), address))
}

/// Accepts `100STAKE`, or a bare `100` in the configured default denomination.
fn parse_amount(config: &CliConfig, amount: &str) -> anyhow::Result<Coin> {
    if let Ok(n) = amount.trim().parse::<i64>() {
        return Ok(Coin::new(n, config.default_denom.clone()));
    }
    Ok(amount.parse::<Coin>()?)
}

fn parse_commission(commission: &str) -> anyhow::Result<Decimal> {
    Ok(commission.parse::<Decimal>()?)
}

fn print_tx(tx: &Transaction, output: Output) -> anyhow::Result<()> {
    match output {
        Output::Json => println!("{}", codec::to_json_pretty(tx)?),
        Output::Frame => println!("{}", hex::encode(codec::encode_frame(tx)?)),
    }
    tracing::debug!(tag = tx.tag(), "built transaction");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Decode `raw` as a JSON envelope if it looks like one, otherwise as a hex
/// frame, then run structural validation.
fn admit(mapper: &TxMapper, raw: &str) -> anyhow::Result<Transaction> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("no transaction given");
    }
    let tx = if raw.starts_with('{') {
        mapper.admit_json(raw)?
    } else {
        let frame = hex::decode(raw).context("input is neither a JSON envelope nor a hex frame")?;
        mapper.admit(&frame)?
    };
    Ok(tx)
}
