use crate::gameroom::TimerConfig;
use clap::Parser;
use std::time::Duration;

/// Command-line and environment configuration for the hosting server.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND", default_value = "0.0.0.0")]
    pub bind: String,
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
    /// Seconds a room outlives its last closed connection.
    #[arg(long, default_value_t = 30)]
    pub grace: u64,
    /// Seconds between sweeps of abandoned rooms.
    #[arg(long, default_value_t = 600)]
    pub sweep: u64,
    /// Milliseconds before the turn passes once every die is used.
    #[arg(long, default_value_t = 100)]
    pub settle: u64,
    /// Milliseconds before the turn passes when no die can be played.
    #[arg(long, default_value_t = 700)]
    pub stall: u64,
}

impl Config {
    pub fn addr(&self) -> (String, u16) {
        (self.bind.clone(), self.port)
    }
    pub fn timers(&self) -> TimerConfig {
        TimerConfig {
            settle: Duration::from_millis(self.settle),
            stall: Duration::from_millis(self.stall),
            grace: Duration::from_secs(self.grace),
            sweep: Duration::from_secs(self.sweep),
        }
    }
}
