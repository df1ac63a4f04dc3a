//! Square moving in a straight line with constant speed, turning by a right angle on every bounce.

use std::time::Duration;

use rand::Rng;

use super::{Angle, Cell, Position, Team, Velocity};

/// Change of heading on every bounce.
const REFLECTION_DEG: f64 = 90.0;

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Mover {
    cell: Cell,
    /// Degrees, clockwise on screen. Not normalized, keeps growing with every bounce.
    heading: f64,
    speed: Velocity,
}

impl Mover {
    pub fn new(position: Position, team: Team, heading: f64, speed: Velocity) -> Self {
        Self {
            cell: Cell::new(position, team),
            heading,
            speed,
        }
    }

    pub fn with_random_heading<R: Rng + ?Sized>(
        position: Position,
        team: Team,
        speed: Velocity,
        rng: &mut R,
    ) -> Self {
        Self::new(position, team, rng.random_range(0.0..360.0), speed)
    }

    pub fn position(&self) -> Position {
        self.cell.position()
    }

    pub fn team(&self) -> Team {
        self.cell.team()
    }

    pub fn toggle_team(&mut self) {
        self.cell.toggle_team();
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    pub fn speed(&self) -> Velocity {
        self.speed
    }

    pub fn advance(&mut self, elapsed: Duration) {
        let distance = f64::from(self.speed) * elapsed.as_secs_f64();
        let position =
            self.cell.position() + Position::from_angle(Angle::from_deg(self.heading)) * distance;
        self.cell.set_position(position);
    }

    pub fn reflect(&mut self) {
        self.heading += REFLECTION_DEG;
    }
}
