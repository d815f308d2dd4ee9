use std::path::PathBuf;

use bittrex_api::types::{Market, OrderUuid, Quantity, Rate};
use clap::{Args, Parser, Subcommand};

const AFTER_HELP: &str = "\
Synopsis:
  $ trade buy --quantity 1 --rate 10 --market 'BTC-LTC' ...
  $ trade sell --quantity 1 --rate 10 --market 'BTC-ETH' ...
  $ trade cancel --uuid 'ec810bf0-76ae-4ce7-8b2f-5576bf38d3e2' ...
  $ trade list ...
  $ trade help

Credentials:
  The BITTREX_APIKEY and BITTREX_APISECRET environment variables take precedence
  over --apikey and --apisecret.";

#[derive(Parser, Debug)]
#[command(
    name = "trade",
    version,
    about = "Trade on Bittrex via the command line.",
    long_about = None,
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Bittrex API key, must be specified. Alternatively use the BITTREX_APIKEY environment variable
    #[arg(short = 'k', long, value_name = "KEY", global = true)]
    pub apikey: Option<String>,

    /// Bittrex API secret, must be specified. Alternatively use the BITTREX_APISECRET environment variable
    #[arg(short = 't', long, value_name = "SECRET", global = true)]
    pub apisecret: Option<String>,

    /// Optional path to a settings JSON file
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// `trade` alone behaves as `trade help`
    pub fn wants_help(&self) -> bool {
        matches!(self.command, None | Some(Commands::Help))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Display help information
    Help,

    /// Create a new limit buy order
    Buy(OrderArgs),

    /// Create a new limit sell order
    Sell(OrderArgs),

    /// Cancel an existing order
    Cancel(CancelArgs),

    /// List open orders
    List(ListArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OrderArgs {
    /// Market to trade on (e.g: "BTC-LTC")
    #[arg(short, long, value_name = "MARKET")]
    pub market: Market,

    /// Limit price of the order (e.g: 0.0125)
    #[arg(short, long)]
    pub rate: Rate,

    /// Quantity of the order (e.g: 1)
    #[arg(short, long)]
    pub quantity: Quantity,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CancelArgs {
    /// Uuid of the order to cancel, you can get it with the `trade list` command
    #[arg(short, long, value_name = "UUID")]
    pub uuid: OrderUuid,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ListArgs {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("trade").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_buy() {
        let cli = parse(&[
            "buy",
            "--market",
            "BTC-LTC",
            "--rate",
            "10",
            "--quantity",
            "1",
            "--apikey",
            "K",
            "--apisecret",
            "S",
        ])
        .unwrap();

        assert_eq!(cli.apikey.as_deref(), Some("K"));
        assert_eq!(cli.apisecret.as_deref(), Some("S"));
        assert_eq!(
            cli.command,
            Some(Commands::Buy(OrderArgs {
                market: Market::new("BTC-LTC").unwrap(),
                rate: Rate::new(10.0).unwrap(),
                quantity: Quantity::new(1.0).unwrap(),
            }))
        );
    }

    #[test]
    fn test_parse_short_aliases() {
        let cli = parse(&[
            "-k", "K", "-t", "S", "sell", "-m", "BTC-ETH", "-r", "0.5", "-q", "2",
        ])
        .unwrap();
        assert_eq!(cli.apikey.as_deref(), Some("K"));
        assert_eq!(cli.apisecret.as_deref(), Some("S"));
        assert!(matches!(cli.command, Some(Commands::Sell(ref args)) if args.rate.get() == 0.5));

        let cli = parse(&["cancel", "-u", "X"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Cancel(CancelArgs {
                uuid: OrderUuid::new("X").unwrap()
            }))
        );
    }

    #[test]
    fn test_parse_help_and_empty() {
        assert_eq!(parse(&[]).unwrap().command, None);
        assert_eq!(parse(&["help"]).unwrap().command, Some(Commands::Help));
        assert_eq!(
            parse(&["list"]).unwrap().command,
            Some(Commands::List(ListArgs {}))
        );
    }

    #[test]
    fn test_wants_help() {
        assert!(parse(&[]).unwrap().wants_help());
        assert!(parse(&["help"]).unwrap().wants_help());
        assert!(parse(&["help", "--apikey", "K"]).unwrap().wants_help());
        assert!(!parse(&["list"]).unwrap().wants_help());
        assert!(!parse(&["cancel", "-u", "X"]).unwrap().wants_help());
    }

    #[test]
    fn test_parse_rejects_missing_required_options() {
        let err = parse(&["buy", "--market", "BTC-LTC", "--rate", "10"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["cancel"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = parse(&["buy", "--market", "BTCLTC", "--rate", "10", "--quantity", "1"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["sell", "--market", "BTC-LTC", "--rate", "0", "--quantity", "1"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = parse(&["list", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&["transfer"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);

        // Options belong to their command
        let err = parse(&["list", "--uuid", "X"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
