//! Grid cell belonging to one of two teams.

use super::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Cell {
    position: Position,
    team: Team,
}

impl Cell {
    pub fn new(position: Position, team: Team) -> Self {
        Self { position, team }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn toggle_team(&mut self) {
        self.team = self.team.opponent();
    }

    /// Only movers relocate; grid cells keep the position they were created with.
    pub(super) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
