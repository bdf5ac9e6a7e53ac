use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::{Parser, Subcommand};
use solana_program::pubkey::Pubkey;
use tracing::warn;

use parlay_rs::accounts::DecodedBetAccount;
use parlay_rs::config::Config;
use parlay_rs::records::Bet;
use parlay_rs::rpc::RpcClient;
use parlay_rs::transforms::parse_bet_id;
use parlay_rs::{decode_market, decode_period, format_selection, WireDecode};

#[derive(Parser)]
#[command(name = "parlay")]
#[command(about = "Parlay wagering program CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a market code into its descriptor
    Market {
        code: u16,
        /// Home competitor name used in side labels
        #[arg(long, default_value = "Home")]
        home: String,
        /// Away competitor name used in side labels
        #[arg(long, default_value = "Away")]
        away: String,
    },
    /// Decode a period code, optionally for a specific sport id
    Period {
        code: u16,
        #[arg(short, long)]
        sport: Option<u16>,
    },
    /// Decode a bet account blob (base64, or hex with --hex)
    DecodeBet {
        data: String,
        #[arg(long)]
        hex: bool,
    },
    /// Fetch the program's operational status
    Status,
    /// Fetch a user's bets
    Bets {
        /// Bettor address (base58)
        bettor: String,
        /// Only bets that have not been matched yet
        #[arg(long)]
        unmatched: bool,
        /// Narrow to a single bet id (UUID)
        #[arg(long)]
        bet_id: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Market { code, home, away } => {
            let descriptor = decode_market(code, &home, &away)?;
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
            Ok(())
        }
        Commands::Period { code, sport } => {
            match decode_period(code, sport) {
                Some(descriptor) => println!("{}", serde_json::to_string_pretty(&descriptor)?),
                None => println!("no label for period {code}"),
            }
            Ok(())
        }
        Commands::DecodeBet { data, hex: is_hex } => {
            let bytes = if is_hex {
                hex::decode(data.trim())?
            } else {
                BASE64.decode(data.trim())?
            };
            let bet = Bet::from_bytes(&bytes)?;
            print_bet(None, &bet)?;
            Ok(())
        }
        Commands::Status => {
            tokio::runtime::Runtime::new()?.block_on(async {
                let client = rpc_client()?;
                let status = client.fetch_operational_status().await?;
                println!("{status:?}");
                Ok(())
            })
        }
        Commands::Bets {
            bettor,
            unmatched,
            bet_id,
        } => {
            tokio::runtime::Runtime::new()?.block_on(async {
                let client = rpc_client()?;
                let bettor: Pubkey = bettor
                    .parse()
                    .map_err(|_| anyhow!("invalid bettor address: {bettor}"))?;
                let bet_id = bet_id.map(|id| parse_bet_id(&id)).transpose()?;
                let (bets, skipped) = client.fetch_user_bets(&bettor, unmatched, bet_id).await?;
                for account in &bets {
                    print_decoded(account)?;
                }
                if !skipped.is_empty() {
                    warn!("skipped {} undecodable accounts", skipped.len());
                }
                println!("{} bets", bets.len());
                Ok(())
            })
        }
    }
}

fn rpc_client() -> Result<RpcClient> {
    // Fall back to public mainnet when no config.toml is present.
    let config = Config::new().unwrap_or_default();
    Ok(RpcClient::with_url(config.parlay.network, config.rpc_url()))
}

fn print_decoded(account: &DecodedBetAccount) -> Result<()> {
    print_bet(Some(&account.pubkey), &account.bet)
}

fn print_bet(pubkey: Option<&str>, bet: &Bet) -> Result<()> {
    if let Some(pubkey) = pubkey {
        println!("account   {pubkey}");
    }
    println!("bet       {}", bet.bet_uuid());
    println!(
        "requester {}",
        Pubkey::new_from_array(bet.requester)
    );
    let placed = chrono::DateTime::from_timestamp(bet.placed_at, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| bet.placed_at.to_string());
    println!("placed    {placed}");
    println!(
        "stake     {} requested @ {}, {} matched @ {}",
        bet.requested_stake, bet.requested_odds, bet.matched_stake, bet.matched_odds
    );
    for selection in &bet.selections {
        println!("  {}", format_selection(selection, "Home", "Away", None)?);
    }
    if !bet.matchers.is_empty() {
        println!("matchers  {}", bet.matchers.len());
    }
    println!();
    Ok(())
}
