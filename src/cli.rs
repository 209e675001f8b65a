use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bfhl")]
#[command(
    author,
    version,
    about = "Classifies token lists into even/odd numbers, words and special characters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server exposing POST /bfhl
    Serve {
        /// Configuration file path
        #[clap(short, long, default_value = server::config::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Address to listen on (overrides the configuration file)
        #[clap(long)]
        host: Option<String>,

        /// Port to listen on (overrides the configuration file and PORT)
        #[clap(short, long)]
        port: Option<u16>,

        /// Enable verbose output with per-request logging
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Classify a JSON token list without starting the server
    Classify {
        /// JSON file holding an array or an object with a `data` array (reads stdin when omitted)
        #[clap(short, long)]
        input: Option<String>,

        /// Print compact JSON instead of pretty-printed output
        #[clap(long, default_value_t = false)]
        compact: bool,
    },

    /// Generate a default configuration file
    Init {
        /// Configuration file path
        #[clap(short, long, default_value = server::config::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}
