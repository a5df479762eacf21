use clap::Parser;
use ferrous_lookup_domain::{CliOverrides, QueryType};
use std::ffi::OsString;
use std::net::Ipv4Addr;

#[derive(Parser, Debug)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Send a single DNS query over UDP and print the answer")]
pub struct Cli {
    /// Seconds to wait before retransmitting an unanswered query
    #[arg(short = 't', long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Retransmissions of an unanswered query before giving up
    #[arg(short = 'r', long = "max-retries", value_name = "N")]
    pub max_retries: Option<u32>,

    /// UDP port of the DNS server
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Send an MX (mail server) query
    #[arg(long, conflicts_with = "ns")]
    pub mx: bool,

    /// Send an NS (name server) query
    #[arg(long)]
    pub ns: bool,

    /// IPv4 address of the DNS server, a.b.c.d
    #[arg(short = 's', long)]
    pub server: Ipv4Addr,

    /// Domain name to query for
    #[arg(short = 'n', long)]
    pub name: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse the process arguments, accepting the single-dash `-mx`/`-ns`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn query_type(&self) -> QueryType {
        QueryType::from_flags(self.mx, self.ns)
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            timeout_secs: self.timeout,
            max_retries: self.max_retries,
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

/// Rewrite `-mx` and `-ns` to their long forms; clap short flags are one
/// character.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-mx") => OsString::from("--mx"),
            Some("-ns") => OsString::from("--ns"),
            _ => arg,
        })
        .collect()
}
