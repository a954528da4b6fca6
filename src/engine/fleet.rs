//! Fleet container and the random placement engine.
//!
//! Placement is rejection sampling: pick a shape uniformly among those that
//! fit, pick an anchor uniformly within that shape's bounds, and keep the
//! candidate only if its exclusion buffer misses every ship already placed.
//! There is no retry cap. After `SCAN_AFTER` rejections for one ship every
//! shape/anchor pair is checked once; if none is acceptable the ship gets
//! `NoRoom` and `build_fleet` discards the partial fleet and starts over.
//! The standard game (25 of 100 cells) occasionally boxes in its last single
//! cell ship this way. A fleet with no valid layout at all is still rebuilt
//! forever.

use alloc::vec::Vec;
use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::engine::bitboard::BitBoard;
use crate::engine::common::BoardError;
use crate::engine::config::{CARRIER_SIZE, FLEET_SIZES, MAX_SHIP_SIZE, MIN_SHIP_SIZE};
use crate::engine::coord::Coord;
use crate::engine::ship::{Orientation, Rotation, Ship, ShipShape};

/// Rejections tolerated for one ship before checking whether it fits anywhere.
const SCAN_AFTER: usize = 64;

type AnchorBounds = ((usize, usize), (usize, usize));

/// Whether a candidate must keep clear of ships already placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fit {
    /// Reject candidates that overlap or touch (diagonals included) another ship.
    #[default]
    Buffered,
    /// Accept any in-bounds candidate, even one that overlaps.
    Unchecked,
}

/// Ordered collection of placed ships plus the union of their cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Fleet<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ships: Vec<Ship<T, R, C>>,
    occupied: BitBoard<T, R, C>,
}

impl<T, const R: usize, const C: usize> Fleet<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Empty fleet. Fails if an `R×C` board does not fit in `T`.
    pub fn new() -> Result<Self, BoardError> {
        Ok(Fleet {
            ships: Vec::new(),
            occupied: BitBoard::try_new()?,
        })
    }

    /// Add a ship that shares no cell with the ships already in the fleet.
    pub fn push(&mut self, ship: Ship<T, R, C>) -> Result<(), BoardError> {
        if self.occupied.intersects(&ship.mask()) {
            return Err(BoardError::ShipOverlaps);
        }
        self.push_unchecked(ship);
        Ok(())
    }

    /// Add a ship without any overlap check.
    pub fn push_unchecked(&mut self, ship: Ship<T, R, C>) {
        self.occupied |= ship.mask();
        self.ships.push(ship);
    }

    /// Whether `ship` keeps its exclusion buffer clear of every placed ship.
    pub fn accepts(&self, ship: &Ship<T, R, C>) -> bool {
        !ship.exclusion_zone().intersects(&self.occupied)
    }

    /// First ship (in placement order) occupying `coord`.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship<T, R, C>> {
        if !self.occupied.contains(coord) {
            return None;
        }
        self.ships.iter().find(|s| s.contains(coord))
    }

    pub fn ships(&self) -> &[Ship<T, R, C>] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Union of all ship cells.
    pub fn occupied(&self) -> BitBoard<T, R, C> {
        self.occupied
    }

    /// Hits needed to win: the sum of ship sizes.
    pub fn occupied_cells(&self) -> usize {
        self.ships.iter().map(|s| s.size()).sum()
    }

    /// Remove every ship.
    pub fn clear(&mut self) {
        self.ships.clear();
        self.occupied.clear_all();
    }

    /// Randomly place a ship of `size` against the current fleet. The ship is
    /// returned, not added.
    pub fn place_ship<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        size: usize,
        fit: Fit,
    ) -> Result<Ship<T, R, C>, BoardError> {
        self.sample(rng, size, ShipShape::candidates(size), fit)
    }

    /// Randomly place a straight ship of `size`.
    pub fn place_linear_ship<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        size: usize,
        fit: Fit,
    ) -> Result<Ship<T, R, C>, BoardError> {
        let shapes = [Orientation::Horizontal, Orientation::Vertical]
            .iter()
            .map(|&o| ShipShape::Linear(o))
            .collect();
        self.sample(rng, size, shapes, fit)
    }

    /// Randomly place the five-cell carrier in one of its four rotations.
    pub fn place_carrier<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        fit: Fit,
    ) -> Result<Ship<T, R, C>, BoardError> {
        let shapes = Rotation::ALL.iter().map(|&r| ShipShape::Carrier(r)).collect();
        self.sample(rng, CARRIER_SIZE, shapes, fit)
    }

    fn sample<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        size: usize,
        shapes: Vec<ShipShape>,
        fit: Fit,
    ) -> Result<Ship<T, R, C>, BoardError> {
        if !(MIN_SHIP_SIZE..=MAX_SHIP_SIZE).contains(&size) {
            return Err(BoardError::InvalidShipSize {
                declared: size,
                actual: 0,
            });
        }
        // Shapes that cannot fit anywhere are dropped up front so the loop
        // below only ever samples placeable candidates.
        let choices: Vec<_> = shapes
            .into_iter()
            .filter_map(|shape| shape.anchor_bounds(size, R, C).map(|b| (shape, b)))
            .collect();
        if choices.is_empty() {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            if fit == Fit::Buffered && attempts == SCAN_AFTER && !self.has_room(size, &choices)? {
                log::debug!("no room left for a size-{} ship", size);
                return Err(BoardError::NoRoom { size });
            }
            let (shape, ((r_lo, r_hi), (c_lo, c_hi))) = choices[rng.random_range(0..choices.len())];
            let anchor = Coord::new(rng.random_range(r_lo..=r_hi), rng.random_range(c_lo..=c_hi));
            let ship = Ship::new(size, shape, anchor)?;
            if fit == Fit::Unchecked || self.accepts(&ship) {
                log::debug!(
                    "placed size-{} ship {:?} at {} after {} attempt(s)",
                    size,
                    shape,
                    anchor,
                    attempts
                );
                return Ok(ship);
            }
            log::trace!("rejected size-{} ship {:?} at {}", size, shape, anchor);
        }
    }

    /// Whether any shape/anchor pair among `choices` keeps clear of the fleet.
    fn has_room(&self, size: usize, choices: &[(ShipShape, AnchorBounds)]) -> Result<bool, BoardError> {
        for &(shape, ((r_lo, r_hi), (c_lo, c_hi))) in choices {
            for row in r_lo..=r_hi {
                for col in c_lo..=c_hi {
                    if self.accepts(&Ship::new(size, shape, Coord::new(row, col))?) {
                        return Ok(true);
                    }
                }
            }
        }
        Ok(false)
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for Fleet<T, R, C>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("occupied", &self.occupied)
            .finish()
    }
}

/// Build a fleet on an `R×C` board, placing ships in the order of `sizes`.
///
/// A size equal to `CARRIER_SIZE` gets the carrier shape, every other size a
/// straight line. Each ship is checked against all ships placed before it.
/// When a ship has nowhere left to go the whole fleet is placed again.
pub fn build_fleet<T, const R: usize, const C: usize, G>(
    rng: &mut G,
    sizes: &[usize],
) -> Result<Fleet<T, R, C>, BoardError>
where
    T: PrimInt + Unsigned + Zero,
    G: Rng + ?Sized,
{
    build_fleet_with(rng, sizes, Fit::Buffered)
}

/// Like [`build_fleet`] with an explicit fit rule.
pub fn build_fleet_with<T, const R: usize, const C: usize, G>(
    rng: &mut G,
    sizes: &[usize],
    fit: Fit,
) -> Result<Fleet<T, R, C>, BoardError>
where
    T: PrimInt + Unsigned + Zero,
    G: Rng + ?Sized,
{
    let mut fleet = Fleet::new()?;
    let mut restarts = 0usize;
    'build: loop {
        for &size in sizes {
            match fleet.place_ship(rng, size, fit) {
                Ok(ship) => fleet.push_unchecked(ship),
                Err(BoardError::NoRoom { .. }) => {
                    restarts += 1;
                    fleet.clear();
                    continue 'build;
                }
                Err(err) => return Err(err),
            }
        }
        break;
    }
    log::debug!(
        "fleet of {} ship(s) placed, {} cell(s) occupied, {} restart(s)",
        fleet.len(),
        fleet.occupied_cells(),
        restarts
    );
    Ok(fleet)
}

/// Build the standard fleet defined by `FLEET_SIZES`.
pub fn build_standard_fleet<T, const R: usize, const C: usize, G>(
    rng: &mut G,
) -> Result<Fleet<T, R, C>, BoardError>
where
    T: PrimInt + Unsigned + Zero,
    G: Rng + ?Sized,
{
    build_fleet(rng, &FLEET_SIZES)
}
