use bevy::{prelude::*, window::WindowResolution};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod domain;
mod pacing;
mod resource;
mod simulator;
mod visualizer;

use domain::{ArenaConfig, World, WorldError};

const CONFIG: ArenaConfig = ArenaConfig::DEFAULT;

fn main() -> Result<(), WorldError> {
    let mut rng = match CONFIG.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let world = World::new(CONFIG, &mut rng)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: CONFIG.title.into(),
                resolution: WindowResolution::new(CONFIG.width as f32, CONFIG.height as f32),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(resource::WorldRes::from(world))
        .add_plugins(simulator::Simulator)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(pacing::Pacing {
            frame_rate: CONFIG.frame_rate,
        })
        .run();

    Ok(())
}
