#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{Game, Session};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Plays `<games>` random-fire games from `<seed>` and prints shot statistics as JSON.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    battleship_solo::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    if games == 0 {
        return Err(anyhow::anyhow!("games must be at least 1"));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut shots = Vec::with_capacity(games);
    let mut win_count = 0;
    for _ in 0..games {
        let game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        win_count = game.win_count();
        let mut session = Session::new(game);
        shots.push(session.play_out(&mut rng).map_err(|e| anyhow::anyhow!(e))?);
    }

    let min = shots.iter().copied().min().unwrap_or(0);
    let max = shots.iter().copied().max().unwrap_or(0);
    let mean = shots.iter().sum::<usize>() as f64 / games as f64;

    let result = json!({
        "seed": seed,
        "games": games,
        "win_count": win_count,
        "shots": {"min": min, "max": max, "mean": mean},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
