// src/cli/mod.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the web server to
    #[arg(long)]
    pub address: Option<String>,

    /// Port for the web server
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Random-word API endpoint
    #[arg(long, env = "WORD_API_URL")]
    pub api_url: Option<String>,

    /// Verify the word API's TLS certificate
    #[arg(long)]
    pub verify_tls: bool,
}
