use battleship_solo::{
    BoardError, CellStatus, CellView, Coord, Game, GameFleet, GameShip, GameStatus, Orientation,
    Rotation, ShotKind, FLEET_SIZES,
};
use rand::{rngs::SmallRng, SeedableRng};

fn single_ship_game() -> Game {
    let mut fleet = GameFleet::new().unwrap();
    fleet
        .push(GameShip::linear(1, Orientation::Horizontal, Coord::new(3, 4)).unwrap())
        .unwrap();
    Game::with_fleet(fleet)
}

#[test]
fn test_single_ship_scenario() {
    let mut game = single_ship_game();
    assert_eq!(game.win_count(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);

    let miss = game.fire(0, 0).unwrap();
    assert_eq!(miss.kind, ShotKind::Miss);
    assert_eq!((miss.shot_count_after, miss.hit_count_after), (1, 0));
    assert!(!miss.won);

    let hit = game.fire(3, 4).unwrap();
    assert_eq!(hit.kind, ShotKind::Hit);
    assert_eq!(hit.ship_size, Some(1));
    assert_eq!((hit.shot_count_after, hit.hit_count_after), (2, 1));
    assert!(hit.won);
    assert!(game.is_won());
    assert_eq!(game.status(), GameStatus::Won);

    let ignored = game.fire(3, 4).unwrap();
    assert_eq!(ignored.kind, ShotKind::IgnoredGameOver);
    assert_eq!((ignored.shot_count_after, ignored.hit_count_after), (2, 1));
    assert!(ignored.won);
    assert_eq!(game.shot_count(), 2);
    assert_eq!(game.hit_count(), 1);
}

#[test]
fn test_repeated_miss_counts_shots_only() {
    let mut game = single_ship_game();
    assert_eq!(game.fire(5, 5).unwrap().kind, ShotKind::Miss);
    let again = game.fire(5, 5).unwrap();
    assert_eq!(again.kind, ShotKind::Repeated);
    assert_eq!(again.ship_size, None);
    assert_eq!(again.shot_count_after, 2);
    assert_eq!(again.hit_count_after, 0);
    assert_eq!(game.board().status(Coord::new(5, 5)).unwrap(), CellStatus::Missed);
    assert_eq!(game.board().misses().count_ones(), 1);
    assert!(game.board().hits().is_empty());
}

#[test]
fn test_repeated_hit_does_not_double_count() {
    let mut fleet = GameFleet::new().unwrap();
    fleet
        .push(GameShip::linear(2, Orientation::Vertical, Coord::new(0, 0)).unwrap())
        .unwrap();
    let mut game = Game::with_fleet(fleet);

    assert_eq!(game.fire(0, 0).unwrap().kind, ShotKind::Hit);
    let again = game.fire(0, 0).unwrap();
    assert_eq!(again.kind, ShotKind::Repeated);
    assert_eq!(again.hit_count_after, 1);
    assert_eq!(again.shot_count_after, 2);
    assert!(!again.won);

    let last = game.fire(1, 0).unwrap();
    assert_eq!(last.kind, ShotKind::Hit);
    assert!(last.won);
    assert_eq!(game.shot_count(), 3);
    assert_eq!(game.board().hits(), game.fleet().occupied());
    assert!(game.board().misses().is_empty());
}

#[test]
fn test_out_of_bounds_is_rejected_without_changes() {
    let mut game = single_ship_game();
    assert_eq!(
        game.fire(10, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        game.fire(0, 99).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 99 }
    );
    assert_eq!(game.shot_count(), 0);
    assert_eq!(game.hit_count(), 0);
}

#[test]
fn test_cell_view_reports_ship_size() {
    let mut fleet = GameFleet::new().unwrap();
    fleet
        .push(GameShip::carrier(Rotation::Up, Coord::new(0, 0)).unwrap())
        .unwrap();
    let mut game = Game::with_fleet(fleet);

    game.fire(2, 1).unwrap();
    game.fire(9, 9).unwrap();
    assert_eq!(
        game.cell(Coord::new(2, 1)).unwrap(),
        CellView::Hit { ship_size: 5 }
    );
    assert_eq!(game.cell(Coord::new(9, 9)).unwrap(), CellView::Water);
    assert_eq!(game.cell(Coord::new(0, 0)).unwrap(), CellView::Unknown);
    assert!(game.cell(Coord::new(10, 0)).is_err());
}

#[test]
fn test_standard_game_win_count() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let game = Game::new(&mut rng).unwrap();
    assert_eq!(game.win_count(), FLEET_SIZES.iter().sum::<usize>());
    assert_eq!(game.fleet().len(), 11);
    assert_eq!(game.shot_count(), 0);
}

#[test]
fn test_with_sizes_computes_win_count() {
    let mut rng = SmallRng::seed_from_u64(9);
    let game = Game::with_sizes(&mut rng, &[3, 2, 2]).unwrap();
    assert_eq!(game.win_count(), 7);
    assert!(Game::with_sizes(&mut rng, &[9]).is_err());
}

#[test]
fn test_hitting_every_ship_cell_wins() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut game = Game::new(&mut rng).unwrap();
    let targets: Vec<_> = game.fleet().occupied().iter().collect();
    for (i, cell) in targets.iter().enumerate() {
        let outcome = game.fire_at(*cell).unwrap();
        assert_eq!(outcome.kind, ShotKind::Hit);
        assert_eq!(outcome.won, i + 1 == targets.len());
    }
    assert!(game.is_won());
    let after = game.fire(0, 0).unwrap();
    assert_eq!(after.kind, ShotKind::IgnoredGameOver);
    assert_eq!(game.shot_count(), FLEET_SIZES.iter().sum::<usize>());
}
