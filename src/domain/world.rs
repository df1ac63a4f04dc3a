//! Arena with a grid of cells and two movers flipping the cells they run into.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;

use super::{overlaps, Cell, Mover, Position, Team, Velocity};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct World {
    cells: Vec<Cell>,
    movers: [Mover; 2],
    config: ArenaConfig,
}

impl World {
    pub fn new<R: Rng + ?Sized>(config: ArenaConfig, rng: &mut R) -> Result<Self, WorldError> {
        config.validate()?;

        let columns = config.columns();
        let total = columns * config.rows();
        let half_cell = config.cell_size / 2.0;

        let cells = (0..total)
            .map(|i| {
                let position = Position::new(
                    half_cell + (i % columns) as f64 * config.cell_size,
                    half_cell + (i / columns) as f64 * config.cell_size,
                );
                let team = if i >= total / 2 {
                    Team::Black
                } else {
                    Team::White
                };
                Cell::new(position, team)
            })
            .collect();

        let movers = [
            Mover::with_random_heading(
                Position::new(config.width / 2.0, 3.0 * config.height / 4.0),
                Team::Black,
                config.mover_speed,
                rng,
            ),
            Mover::with_random_heading(
                Position::new(config.width / 2.0, config.height / 4.0),
                Team::White,
                config.mover_speed,
                rng,
            ),
        ];

        Ok(Self::from_parts(cells, movers, config))
    }

    /// Assembles a world from explicit parts without laying out the grid.
    pub fn from_parts(cells: Vec<Cell>, movers: [Mover; 2], config: ArenaConfig) -> Self {
        Self {
            cells,
            movers,
            config,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    pub fn mover(&self, id: MoverId) -> Result<&Mover, WorldError> {
        self.movers
            .get(id.0)
            .ok_or(WorldError::MissingMoverID(id.0))
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn team_counts(&self) -> TeamCounts {
        self.cells
            .iter()
            .fold(TeamCounts::default(), |mut counts, cell| {
                match cell.team() {
                    Team::White => counts.white += 1,
                    Team::Black => counts.black += 1,
                }
                counts
            })
    }

    /// Advances every mover by `elapsed` and resolves border and cell bounces, movers in index
    /// order.
    pub fn step(&mut self, elapsed: Duration) -> Vec<Bounce> {
        let mut bounces = vec![];

        for (idx, mover) in self.movers.iter_mut().enumerate() {
            let mover_id = MoverId(idx);

            mover.advance(elapsed);

            if !self.config.contains(mover.position()) {
                mover.reflect();
                bounces.push(Bounce {
                    mover_id,
                    cause: BounceCause::Border,
                });
            }

            // The mover flips cells of the opposing team, first hit in row-major order wins.
            let hit = self.cells.iter().position(|cell| {
                cell.team() != mover.team()
                    && overlaps(mover.position(), cell.position(), self.config.cell_size)
            });

            if let Some(cell_idx) = hit {
                self.cells[cell_idx].toggle_team();
                mover.reflect();
                bounces.push(Bounce {
                    mover_id,
                    cause: BounceCause::Cell(cell_idx),
                });
            }
        }

        bounces
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WorldError {
    #[error("invalid cell size {0}")]
    InvalidCellSize(f64),
    #[error("arena {width}x{height} cannot hold a cell of size {cell_size}")]
    ArenaTooSmall {
        width: f64,
        height: f64,
        cell_size: f64,
    },
    #[error("missing mover id {0}")]
    MissingMoverID(usize),
}

/// Dimensions are in pixels, the origin is the top left corner of the window with the y-axis
/// pointing down.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub mover_speed: Velocity,
    pub seed: Option<u64>,
    // Only required for visualisation
    pub title: &'static str,
    pub frame_rate: f64,
}

impl ArenaConfig {
    pub const DEFAULT: ArenaConfig = ArenaConfig::new(
        1200.0,
        840.0,
        60.0,
        Velocity::new(500.0),
        None,
        "Yin And Yang",
        120.0,
    );

    pub const fn new(
        width: f64,
        height: f64,
        cell_size: f64,
        mover_speed: Velocity,
        seed: Option<u64>,
        title: &'static str,
        frame_rate: f64,
    ) -> Self {
        ArenaConfig {
            width,
            height,
            cell_size,
            mover_speed,
            seed,
            title,
            frame_rate,
        }
    }

    pub fn columns(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    /// Borders are part of the arena.
    pub fn contains(&self, position: Position) -> bool {
        (0.0..=self.width).contains(&position.x()) && (0.0..=self.height).contains(&position.y())
    }

    fn validate(&self) -> Result<(), WorldError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(WorldError::InvalidCellSize(self.cell_size));
        }

        if !(self.width >= self.cell_size && self.height >= self.cell_size)
            || !(self.width.is_finite() && self.height.is_finite())
        {
            return Err(WorldError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct MoverId(usize);

impl MoverId {
    pub fn iter() -> impl Iterator<Item = MoverId> {
        (0..2).map(MoverId)
    }
}

impl TryFrom<usize> for MoverId {
    type Error = WorldError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 | 1 => Ok(MoverId(value)),
            _ => Err(WorldError::MissingMoverID(value)),
        }
    }
}

impl From<MoverId> for usize {
    fn from(value: MoverId) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounce {
    pub mover_id: MoverId,
    pub cause: BounceCause,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BounceCause {
    Border,
    /// Index of the flipped cell.
    Cell(usize),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TeamCounts {
    pub white: usize,
    pub black: usize,
}
