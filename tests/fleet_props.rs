use battleship_solo::{
    build_fleet, build_fleet_with, build_standard_fleet, BoardError, Coord, Fit, Fleet,
    GameFleet, GameShip, Orientation, Ship, ShipShape, FLEET_SIZES,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn standard_fleet(seed: u64) -> GameFleet {
    let mut rng = SmallRng::seed_from_u64(seed);
    build_standard_fleet(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_has_configured_sizes(seed in any::<u64>()) {
        let fleet = standard_fleet(seed);
        let sizes: Vec<_> = fleet.ships().iter().map(|s| s.size()).collect();
        prop_assert_eq!(sizes, FLEET_SIZES.to_vec());
        let total: usize = FLEET_SIZES.iter().sum();
        prop_assert_eq!(total, 25);
        prop_assert_eq!(fleet.occupied_cells(), total);
        prop_assert_eq!(fleet.occupied().count_ones(), total);
        for ship in fleet.ships() {
            prop_assert_eq!(ship.cells().count(), ship.size());
        }
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let fleet = standard_fleet(seed);
        let ships = fleet.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(ca.chebyshev(&cb) > 1, "{} touches {}", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn carrier_first_then_linear(seed in any::<u64>()) {
        let fleet = standard_fleet(seed);
        prop_assert!(matches!(fleet.ships()[0].shape(), ShipShape::Carrier(_)));
        for ship in &fleet.ships()[1..] {
            prop_assert!(matches!(ship.shape(), ShipShape::Linear(_)));
        }
    }

    #[test]
    fn custom_sizes_on_rectangular_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet: Fleet<u64, 6, 9> = build_fleet(&mut rng, &[5, 3, 2, 1]).unwrap();
        prop_assert_eq!(fleet.len(), 4);
        prop_assert_eq!(fleet.occupied_cells(), 11);
        prop_assert_eq!(fleet.occupied().count_ones(), 11);
    }
}

fn assert_no_contact(fleet: &GameFleet, seed: u64) {
    let ships = fleet.ships();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            for ca in a.cells() {
                for cb in b.cells() {
                    assert!(ca.chebyshev(&cb) > 1, "seed {}: {} touches {}", seed, ca, cb);
                }
            }
        }
    }
}

#[test]
fn boxed_in_last_ship_restarts_placement() {
    // This seed leaves no legal cell for the final single-cell ship on the
    // first pass.
    let fleet = standard_fleet(10630);
    let sizes: Vec<_> = fleet.ships().iter().map(|s| s.size()).collect();
    assert_eq!(sizes, FLEET_SIZES.to_vec());
    assert_eq!(fleet.occupied().count_ones(), FLEET_SIZES.iter().sum::<usize>());
    assert_no_contact(&fleet, 10630);
}

#[test]
fn standard_fleet_always_places() {
    for seed in 0..20_000 {
        let fleet = standard_fleet(seed);
        assert_eq!(fleet.len(), FLEET_SIZES.len(), "seed {}", seed);
        assert_no_contact(&fleet, seed);
    }
}

#[test]
fn place_ship_reports_no_room() -> Result<(), BoardError> {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut fleet: Fleet<u16, 3, 3> = Fleet::new()?;
    fleet.push(Ship::linear(1, Orientation::Horizontal, Coord::new(1, 1))?)?;
    assert_eq!(
        fleet.place_ship(&mut rng, 1, Fit::Buffered),
        Err(BoardError::NoRoom { size: 1 })
    );
    assert!(fleet.place_ship(&mut rng, 1, Fit::Unchecked).is_ok());
    Ok(())
}

#[test]
fn same_seed_same_fleet() {
    assert_eq!(standard_fleet(7), standard_fleet(7));
}

#[test]
fn ship_at_finds_owner() {
    let fleet = standard_fleet(3);
    for ship in fleet.ships() {
        for cell in ship.cells() {
            assert_eq!(fleet.ship_at(cell).map(|s| s.size()), Some(ship.size()));
        }
    }
    let empty = (0..10)
        .flat_map(|r| (0..10).map(move |c| Coord::new(r, c)))
        .find(|&c| !fleet.occupied().contains(c))
        .unwrap();
    assert!(fleet.ship_at(empty).is_none());
}

#[test]
fn manual_push_rejects_overlap() -> Result<(), BoardError> {
    let mut fleet = GameFleet::new()?;
    fleet.push(GameShip::linear(3, Orientation::Horizontal, Coord::new(0, 0))?)?;
    let crossing = GameShip::linear(3, Orientation::Vertical, Coord::new(0, 1))?;
    assert_eq!(fleet.push(crossing), Err(BoardError::ShipOverlaps));
    // Touching is only forbidden during random placement.
    fleet.push(GameShip::linear(2, Orientation::Horizontal, Coord::new(1, 0))?)?;
    assert_eq!(fleet.len(), 2);
    assert_eq!(fleet.occupied_cells(), 5);

    fleet.clear();
    assert!(fleet.is_empty());
    assert!(fleet.occupied().is_empty());
    Ok(())
}

#[test]
fn placement_respects_existing_ships() -> Result<(), BoardError> {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut fleet = GameFleet::new()?;
    fleet.push(GameShip::linear(4, Orientation::Horizontal, Coord::new(4, 3))?)?;
    for _ in 0..50 {
        let ship = fleet.place_linear_ship(&mut rng, 2, Fit::Buffered)?;
        assert!(fleet.accepts(&ship));
        assert!(!ship.exclusion_zone().intersects(&fleet.occupied()));
        let carrier = fleet.place_carrier(&mut rng, Fit::Buffered)?;
        assert_eq!(carrier.size(), 5);
        assert!(fleet.accepts(&carrier));
    }
    Ok(())
}

#[test]
fn unchecked_fit_skips_exclusion() {
    let mut rng = SmallRng::seed_from_u64(5);
    // Nine single cells on a 3×3 board cannot all keep a buffer.
    let fleet: Fleet<u16, 3, 3> = build_fleet_with(&mut rng, &[1; 9], Fit::Unchecked).unwrap();
    assert_eq!(fleet.len(), 9);
    assert_eq!(fleet.occupied_cells(), 9);
}

#[test]
fn invalid_size_aborts_construction() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = build_fleet::<u128, 10, 10, _>(&mut rng, &[4, 6]).unwrap_err();
    assert_eq!(err, BoardError::InvalidShipSize { declared: 6, actual: 0 });
    let err = build_fleet::<u128, 10, 10, _>(&mut rng, &[0]).unwrap_err();
    assert_eq!(err, BoardError::InvalidShipSize { declared: 0, actual: 0 });
}

#[test]
fn shape_too_large_for_board() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = build_fleet::<u16, 2, 4, _>(&mut rng, &[5]).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    let err = build_fleet::<u16, 3, 3, _>(&mut rng, &[4]).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
}

#[test]
fn board_too_large_for_storage() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = build_fleet::<u64, 10, 10, _>(&mut rng, &[1]).unwrap_err();
    assert!(matches!(err, BoardError::BitBoardError(_)));
}
