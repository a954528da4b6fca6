use std::cell::RefCell;
use std::rc::Rc;

use battleship_solo::{
    BoardError, Coord, Game, GameFleet, GameShip, Orientation, Session, ShotKind, ShotObserver,
    ShotOutcome, FLEET_SIZES,
};
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Default)]
struct Log {
    shots: Vec<(Coord, ShotKind, usize)>,
    rejected: Vec<(usize, usize)>,
}

struct Recorder(Rc<RefCell<Log>>);

impl ShotObserver for Recorder {
    fn on_shot(&mut self, game: &Game, coord: Coord, outcome: &ShotOutcome) {
        // The game is already updated when observers run.
        assert_eq!(game.shot_count(), outcome.shot_count_after);
        self.0
            .borrow_mut()
            .shots
            .push((coord, outcome.kind, outcome.hit_count_after));
    }

    fn on_rejected(&mut self, row: usize, col: usize, _err: &BoardError) {
        self.0.borrow_mut().rejected.push((row, col));
    }
}

fn two_cell_session() -> Session {
    let mut fleet = GameFleet::new().unwrap();
    fleet
        .push(GameShip::linear(2, Orientation::Horizontal, Coord::new(6, 2)).unwrap())
        .unwrap();
    Session::new(Game::with_fleet(fleet))
}

#[test]
fn observers_see_every_outcome() {
    let log = Rc::new(RefCell::new(Log::default()));
    let mut session = two_cell_session();
    session.subscribe(Box::new(Recorder(log.clone())));
    session.subscribe(Box::new(Recorder(log.clone())));

    session.fire(6, 2).unwrap();
    session.fire(0, 0).unwrap();
    session.fire(0, 0).unwrap();
    assert!(session.fire(11, 0).is_err());

    let log = log.borrow();
    // two observers, three accepted shots
    assert_eq!(log.shots.len(), 6);
    assert_eq!(log.shots[0], (Coord::new(6, 2), ShotKind::Hit, 1));
    assert_eq!(log.shots[1], log.shots[0]);
    assert_eq!(log.shots[2].1, ShotKind::Miss);
    assert_eq!(log.shots[4].1, ShotKind::Repeated);
    assert_eq!(log.rejected, vec![(11, 0), (11, 0)]);
}

#[test]
fn play_out_wins_without_repeats() {
    let log = Rc::new(RefCell::new(Log::default()));
    let mut rng = SmallRng::seed_from_u64(31);
    let mut session = Session::new(Game::new(&mut rng).unwrap());
    session.subscribe(Box::new(Recorder(log.clone())));

    let shots = session.play_out(&mut rng).unwrap();
    assert!(session.game().is_won());
    let total: usize = FLEET_SIZES.iter().sum();
    assert!(shots >= total && shots <= 100);
    let log = log.borrow();
    assert_eq!(log.shots.len(), shots);
    assert!(log.shots.iter().all(|s| s.1 != ShotKind::Repeated));
    assert_eq!(log.shots.last().map(|s| s.2), Some(total));
}

#[test]
fn play_out_after_win_is_a_no_op() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut session = two_cell_session();
    session.fire(6, 2).unwrap();
    session.fire(6, 3).unwrap();
    assert_eq!(session.play_out(&mut rng).unwrap(), 2);
    assert_eq!(session.into_game().shot_count(), 2);
}
