use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "udf-docs")]
#[command(about = "Render project UDFs into built documentation pages", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendered UDF section to stdout
    Render {
        #[command(flatten)]
        api: ApiArgs,
    },
    /// Inject the UDF section into one page
    Inject {
        #[command(flatten)]
        api: ApiArgs,
        page: PathBuf,
        /// Write here instead of rewriting the page in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inject the UDF section into every functions page under a directory
    Site {
        #[command(flatten)]
        api: ApiArgs,
        dir: PathBuf,
    },
    /// Point `[source]` links at the notebook viewer
    SourceLinks {
        /// Host serving jnr.php (falls back to `source_host` in the config)
        #[arg(long)]
        host: Option<String>,
        /// Notebook path appended after /notebooks/lib/
        #[arg(long)]
        path: String,
        page: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Origin the documentation is served from
    #[arg(long, env = "UDF_DOCS_ORIGIN")]
    pub origin: Option<String>,
    /// API origin, bypassing port substitution
    #[arg(long, env = "UDF_DOCS_API_ORIGIN")]
    pub api_origin: Option<String>,
    #[arg(long)]
    pub docs_port: Option<u16>,
    #[arg(long)]
    pub api_port: Option<u16>,
}

impl From<ApiArgs> for Overrides {
    fn from(args: ApiArgs) -> Self {
        Self {
            origin: args.origin,
            api_origin: args.api_origin,
            docs_port: args.docs_port,
            api_port: args.api_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn verbose_counts_and_is_global() {
        let_assert!(Ok(cli) = Cli::try_parse_from(["udf-docs", "-v", "site", "out", "-v"]));
        check!(cli.verbose == 2);
        let_assert!(Commands::Site { dir, .. } = cli.command);
        check!(dir == PathBuf::from("out"));
    }

    #[test]
    fn quiet_by_default() {
        let_assert!(Ok(cli) = Cli::try_parse_from(["udf-docs", "render"]));
        check!(cli.verbose == 0);
    }
}
