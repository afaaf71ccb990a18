//! Block Catch entry point
//!
//! Native hosts have no window yet, so the binary runs a headless demo: the
//! autopilot holds the keys, the driver steps at a fixed 60 Hz, and the HUD is
//! logged once per second of game time.

use std::path::PathBuf;

use block_catch::consts::HEADLESS_DT;
use block_catch::platform::{SharedInput, TickDriver, TickOutcome};
use block_catch::renderer::Frame;
use block_catch::Config;
use block_catch::sim::{Pipeline, World, steer};
use clap::Parser;

/// Ten minutes of game time
const MAX_TICKS: u64 = 60 * 60 * 10;

#[derive(Parser, Debug)]
#[command(name = "block-catch")]
#[command(about = "Headless Block Catch demo driven by the autopilot")]
struct Args {
    /// Tuning file (JSON); defaults are used when omitted or unreadable
    config: Option<PathBuf>,

    /// Override the spawner seed
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the final world as JSON
    #[arg(long)]
    dump: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::init();
    log::info!("Block Catch (headless) starting...");

    let mut config = args
        .config
        .as_deref()
        .map_or_else(Config::default, Config::load_or_default);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    log::info!("Seed {}", config.seed);

    let input = SharedInput::new();
    let mut driver = TickDriver::new(World::new(config), Pipeline::standard(input.clone()));

    let ticks_per_second = (1.0 / HEADLESS_DT).round() as u64;
    let mut tick = 0u64;
    let outcome = driver.run_fixed(HEADLESS_DT, MAX_TICKS, |world| {
        if tick % ticks_per_second == 0 {
            log::info!("{}", Frame::from_world(world));
        }
        tick += 1;
        input.set_snapshot(steer(world));
    });

    let world = driver.world();
    println!("{}", Frame::from_world(world));
    match outcome {
        TickOutcome::GameOver => {
            println!("Caught {} blocks in {:.1}s", world.score, world.time)
        }
        TickOutcome::Running => println!(
            "Still alive after {}s, stopping",
            driver.ticks() / ticks_per_second
        ),
    }

    if args.dump {
        match serde_json::to_string_pretty(world) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("Failed to serialize world: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_all_arguments() {
        let args =
            Args::try_parse_from(["block-catch", "tuning.json", "--seed", "42", "--dump"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("tuning.json")));
        assert_eq!(args.seed, Some(42));
        assert!(args.dump);
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["block-catch"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert!(!args.dump);
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Args::try_parse_from(["block-catch", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_seed_requires_a_value() {
        assert!(Args::try_parse_from(["block-catch", "--seed"]).is_err());
        let err = Args::try_parse_from(["block-catch", "--seed", "many"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Args::try_parse_from(["block-catch", "--sed", "7"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
