//! Authoritative backgammon engine for two-player rooms.
//!
//! - [`board`]: checkers, points, bar and borne-off tallies
//! - [`rules`]: the legality family every move check goes through
//! - [`game`]: turn/dice state machine for one match
//! - [`gameroom`]: per-room actor, wire protocol and timers
//! - [`hosting`]: room registry, connection sessions and the HTTP/WebSocket server
pub mod board;
pub mod game;
pub mod rules;

#[cfg(feature = "server")]
pub mod gameroom;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// BOARD GEOMETRY
// ============================================================================
/// Points on the board, indexed 0..24.
pub const POINTS: usize = 24;
/// Checkers per color.
pub const CHECKERS: u8 = 15;
/// Faces on a die.
pub const FACES: u8 = 6;
/// Points in a home quadrant.
pub const QUADRANT: usize = 6;

// ============================================================================
// ROOMS
// ============================================================================
/// Length of a shareable room code.
pub const CODE_LENGTH: usize = 6;
/// Alphabet room codes are drawn from.
pub const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Longest display name kept, in characters.
pub const NAME_LIMIT: usize = 24;

/// Random instance generation (dice, room codes).
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = std::fs::create_dir_all("logs")
        .and_then(|_| std::fs::File::create(format!("logs/{}.log", time)))
        .map(|f| simplelog::WriteLogger::new(log::LevelFilter::Debug, config, f));
    let loggers: Vec<Box<dyn simplelog::SharedLogger>> = match file {
        Ok(file) => vec![term, file],
        Err(_) => vec![term],
    };
    if let Err(e) = simplelog::CombinedLogger::init(loggers) {
        eprintln!("logger already initialized: {}", e);
    }
}

/// Register Ctrl+C handler for immediate termination.
/// Rooms live only in memory, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
