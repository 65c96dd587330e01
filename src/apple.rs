use rand::Rng;

use crate::config::GridGeometry;
use crate::snake::Position;

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    position: Position,
}

impl Apple {
    /// Creates an apple at a fixed cell.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Creates an apple on a random cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, geometry: GridGeometry) -> Self {
        Self::at(random_cell(rng, geometry))
    }

    /// Moves the apple to a new random cell and returns it.
    ///
    /// The snake's body is not consulted, so the apple can land under it.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, geometry: GridGeometry) -> Position {
        self.position = random_cell(rng, geometry);
        self.position
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Picks a uniformly random grid-aligned cell, each axis independently.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, geometry: GridGeometry) -> Position {
    let cell_size = geometry.cell_size();
    Position {
        x: rng.gen_range(0..geometry.columns()) * cell_size,
        y: rng.gen_range(0..geometry.rows()) * cell_size,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridGeometry;
    use crate::snake::Position;

    use super::{random_cell, Apple};

    #[test]
    fn random_cells_are_aligned_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let geometry = GridGeometry::default();

        for _ in 0..1_000 {
            let cell = random_cell(&mut rng, geometry);
            assert!(geometry.contains(cell));
            assert_eq!(cell.x % geometry.cell_size(), 0);
            assert_eq!(cell.y % geometry.cell_size(), 0);
        }
    }

    #[test]
    fn random_cells_reach_every_cell_of_small_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let geometry = GridGeometry::new(60, 40, 20).expect("geometry should be valid");

        let seen: HashSet<Position> = (0..500).map(|_| random_cell(&mut rng, geometry)).collect();

        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn relocate_replaces_stored_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let geometry = GridGeometry::default();
        let mut apple = Apple::at(Position { x: -20, y: -20 });

        let moved_to = apple.relocate(&mut rng, geometry);

        assert_eq!(apple.position(), moved_to);
        assert!(geometry.contains(moved_to));
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let geometry = GridGeometry::default();

        let first = Apple::spawn(&mut StdRng::seed_from_u64(99), geometry);
        let second = Apple::spawn(&mut StdRng::seed_from_u64(99), geometry);

        assert_eq!(first, second);
    }
}
