#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{
    cli::{print_board, run_interactive, Locale, Messages, TerminalView},
    init_logging, Coord, Game, Session, ShotKind, ShotObserver, ShotOutcome,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively: type targets such as E4.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Locale::En)]
        lang: Locale,
        #[arg(long, help = "Show ship positions on the board")]
        reveal: bool,
        #[arg(long, default_value_t = 100, help = "Delay before the victory message, in ms")]
        win_delay_ms: u64,
    },
    /// Fire at random cells until every ship is sunk.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Locale::En)]
        lang: Locale,
    },
}

/// One line per shot, used by `auto`.
#[cfg(feature = "std")]
struct ShotLog {
    messages: Messages,
}

#[cfg(feature = "std")]
impl ShotObserver for ShotLog {
    fn on_shot(&mut self, game: &Game, coord: Coord, outcome: &ShotOutcome) {
        let text = match (outcome.kind, outcome.ship_size) {
            (ShotKind::Hit, Some(size)) => self.messages.hit(size),
            (ShotKind::Repeated, _) => self.messages.repeated().to_string(),
            (ShotKind::IgnoredGameOver, _) => self.messages.game_over().to_string(),
            _ => self.messages.miss().to_string(),
        };
        println!(
            "{:>3}. {:<3} {}  [{}/{}]",
            outcome.shot_count_after, coord, text, outcome.hit_count_after, game.win_count()
        );
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            lang,
            reveal,
            win_delay_ms,
        } => {
            let mut rng = make_rng(seed);
            let game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let messages = Messages::new(lang);

            let mut view = TerminalView::stdout(lang)
                .reveal(reveal)
                .win_delay(Duration::from_millis(win_delay_ms));
            view.show(&game);

            let mut session = Session::new(game);
            session.subscribe(Box::new(view));
            let stdin = std::io::stdin();
            let won = run_interactive(&mut session, stdin.lock(), messages)?;
            if !won {
                println!("{}", messages.counters(session.game().hit_count(), session.game().shot_count()));
                print_board(session.game(), true);
            }
        }
        Commands::Auto { seed, lang } => {
            let mut rng = make_rng(seed);
            let game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let messages = Messages::new(lang);

            let mut session = Session::new(game);
            session.subscribe(Box::new(ShotLog { messages }));
            let shots = session
                .play_out(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;

            print_board(session.game(), true);
            println!("{}", messages.counters(session.game().hit_count(), shots));
            println!("{}", messages.victory());
        }
    }
    Ok(())
}
