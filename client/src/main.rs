mod config;
mod console;
mod error;
mod local_game;
mod render;
mod setup;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Bot, BotType, GameStatus, Player};
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE, ClientConfig, Validate, get_config_manager};
use console::Console;
use error::{ClientError, ClientResult};
use local_game::run_game;
use setup::resolve_setup;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a random or a perfect opponent")]
struct Args {
    /// YAML file with saved preferences
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Mark to play with (X or O)
    #[arg(long)]
    mark: Option<Player>,

    /// Opponent: random or minimax
    #[arg(long)]
    difficulty: Option<BotType>,

    #[arg(long, conflicts_with = "bot_first")]
    human_first: bool,

    #[arg(long)]
    bot_first: bool,

    /// Pause before each computer move
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Write the resolved settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, mut config: ClientConfig) -> ClientConfig {
        if self.mark.is_some() {
            config.player_mark = self.mark;
        }
        if self.difficulty.is_some() {
            config.difficulty = self.difficulty;
        }
        if self.human_first {
            config.human_first = Some(true);
        } else if self.bot_first {
            config.human_first = Some(false);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.bot_delay_ms = delay_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn run(args: &Args) -> ClientResult<GameStatus> {
    let manager = get_config_manager(&args.config);
    let stored = manager.get_config().map_err(ClientError::Config)?;
    log!("Loaded config from {}", manager.source());

    let config = args.apply_to(stored);
    config.validate().map_err(ClientError::Config)?;

    if args.save_config {
        manager.set_config(&config).map_err(ClientError::Config)?;
        log!("Saved config to {}", manager.source());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let setup = resolve_setup(&config, &mut console)?;

    let rng = config
        .seed
        .map(SessionRng::new)
        .unwrap_or_else(SessionRng::from_random);
    log!("Opponent {} with seed {}", setup.bot_type, rng.seed());

    let mut bot = Bot::new(setup.bot_type, rng);
    run_game(&mut console, &setup, &mut bot)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    match run(&args) {
        Ok(_) | Err(ClientError::InputClosed) => Ok(()),
        Err(err) => {
            log!("Fatal error: {}", err);
            Err(err.into())
        }
    }
}
