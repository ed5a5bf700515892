//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line arguments and the run configuration derived from them.

use clap::Parser;

/// Evaluates additive arithmetic expressions such as "10 - 4 + 3".
///
/// Each expression is evaluated on its own; one failure does not stop the
/// others. With no EXPR arguments, expressions are read from stdin, one per line.
#[derive(Parser, Debug)]
#[command(name = "calc", version, about, long_about = None)]
pub struct Args {
    /// Print the token stream instead of the result
    #[arg(long, conflicts_with = "ast")]
    pub tokens: bool,

    /// Print the parsed tree next to the result
    #[arg(long)]
    pub ast: bool,

    /// Emit one JSON object per expression
    #[arg(long)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Expressions to evaluate
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    pub expressions: Vec<String>,
}

/// What to print for each expression.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputMode {
    Value,
    Tokens,
    Ast,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: OutputMode,
    pub json: bool,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: OutputMode::Value,
            json: false,
            verbosity: 0,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let mode = if args.tokens {
            OutputMode::Tokens
        } else if args.ast {
            OutputMode::Ast
        } else {
            OutputMode::Value
        };

        Config {
            mode,
            json: args.json,
            verbosity: args.verbose,
        }
    }
}
