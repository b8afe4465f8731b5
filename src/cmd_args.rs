use std::ffi::OsString;

pub use clap::Parser;

use crate::config;

#[derive(Parser, Debug)]
#[command(version, about = "Run the PureMVC counter demo", long_about = None)]
struct ClapArgs {
    /// Multiton key of the demo core
    #[clap(short = 'k', long, default_value = config::DEFAULT_CORE_KEY, help = "core key")]
    key: String,

    /// How many increment notifications to send
    #[clap(short = 'n', long, default_value_t = config::DEFAULT_INCREMENTS, help = "increments to send")]
    increments: u32,

    #[clap(long, help = "print the core report as JSON")]
    json: bool,

    /// Log level; falls back to PUREMVC_LOG_LEVEL, then to 'warn'
    #[clap(short = 'l', long, help = "log level")]
    log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    key: String,
    increments: u32,
    json: bool,
    log_level: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn increments(&self) -> u32 {
        self.increments
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Log level from the command line, else from the environment
    pub fn log_level(&self) -> String {
        self.log_level.clone().unwrap_or_else(config::get_log_level)
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            key: args.key,
            increments: args.increments,
            json: args.json,
            log_level: args.log_level,
        }
    }
}
