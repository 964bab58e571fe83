//! Turn-based skateboarding championship simulation.
//!
//! A human skater faces computer opponents across three escalating rounds
//! (Qualifier, Group Stage, Final). Each round is a single match of three
//! turns of trick attempts with probabilistic landing, scoring, and injury
//! outcomes. The engine is synchronous and single-threaded; every random
//! draw flows through an injected RNG so full runs are reproducible.

pub mod catalog;
pub mod error;
pub mod gameplay;
pub mod players;
pub mod tournament;
pub mod view;

/// Accumulated points; unbounded in both directions.
pub type Score = f32;
/// Remaining hits before a skater is forced out of the match.
pub type Health = u8;
/// Tournament stage (1 = Qualifier, 2 = Group Stage, 3 = Final).
pub type Round = u8;
/// Landing and injury chances.
pub type Probability = f32;

/// Full health at the start of every match.
pub const MAX_HEALTH: Health = 3;
/// Turns per match. The trick tier offered during turn t equals t.
pub const MAX_TURNS: usize = 3;
/// Last tournament round; opponents see the whole catalog here.
pub const FINAL_ROUND: Round = 3;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Gameplay owns stdout, so the terminal only carries warnings; the full
/// DEBUG stream goes to `logs/`.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
