//! Simulation of the movers in the arena.
//!
//! Every frame each mover is advanced by the duration of the previous frame, bounced off the
//! arena borders and flips the first opposing cell it overlaps. On the first frame the elapsed
//! time is zero.

use bevy::prelude::*;

use crate::{domain::BounceCause, resource::WorldRes};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, report_world)
            .add_systems(Update, simulate.in_set(SimulationSet));
    }
}

/// Systems reading the world after it has been stepped are ordered after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

fn report_world(world: Res<WorldRes>) {
    let counts = world.team_counts();
    info!(
        "arena {}x{} with {} cells ({} white, {} black)",
        world.config().width,
        world.config().height,
        world.cells().len(),
        counts.white,
        counts.black
    );
    for mover in world.movers() {
        info!(
            "{:?} mover at ({:.1}, {:.1}) heading {:.1} deg",
            mover.team(),
            mover.position().x(),
            mover.position().y(),
            mover.heading()
        );
    }
}

fn simulate(time: Res<Time>, mut world: ResMut<WorldRes>) {
    for bounce in world.step(time.delta()) {
        match bounce.cause {
            BounceCause::Border => debug!("mover {:?} bounced off the border", bounce.mover_id),
            BounceCause::Cell(idx) => {
                debug!("mover {:?} flipped cell {idx}", bounce.mover_id)
            }
        }
    }
}
