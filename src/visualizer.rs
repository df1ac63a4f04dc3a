//! 2D visualization.

use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    prelude::*,
};

use crate::{
    domain::{ArenaConfig, Position, Team},
    resource::WorldRes,
    simulator::SimulationSet,
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_plugins(FrameTimeDiagnosticsPlugin)
            .add_systems(Startup, set_up)
            .add_systems(
                Update,
                (
                    handle_keyboard_input,
                    bevy::window::close_on_esc,
                    update_fps_text,
                    (update_cells, update_movers, update_tally_text).after(SimulationSet),
                ),
            )
            .insert_resource(ClearColor(BACKGROUND_COLOR))
            .init_resource::<Scene>();
    }
}

#[derive(Resource, Default)]
pub struct Scene {
    cells: Vec<Entity>,
    movers: Vec<Entity>,
    show_tally: bool,
}

#[derive(Component)]
struct FpsText;

#[derive(Component)]
struct TallyText;

const BACKGROUND_COLOR: Color = Color::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
const FPS_COLOR: Color = Color::rgb(0.0, 158.0 / 255.0, 47.0 / 255.0);
const TALLY_COLOR: Color = Color::rgb(230.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0);
const CELL_LAYER: f32 = 0.0;
const MOVER_LAYER: f32 = 1.0;

fn set_up(mut scene: ResMut<Scene>, mut commands: Commands, world: Res<WorldRes>) {
    commands.spawn(Camera2dBundle::default());

    let config = world.config();

    scene.cells = world
        .cells()
        .iter()
        .map(|cell| {
            create_square(
                &mut commands,
                config,
                cell.position(),
                team_color(cell.team()),
                CELL_LAYER,
            )
        })
        .collect();

    scene.movers = world
        .movers()
        .iter()
        .map(|mover| {
            create_square(
                &mut commands,
                config,
                mover.position(),
                team_color(mover.team().opponent()),
                MOVER_LAYER,
            )
        })
        .collect();

    create_text(&mut commands);
}

fn create_square(
    commands: &mut Commands,
    config: &ArenaConfig,
    position: Position,
    color: Color,
    layer: f32,
) -> Entity {
    commands
        .spawn(SpriteBundle {
            sprite: Sprite {
                color,
                custom_size: Some(Vec2::splat(config.cell_size as f32)),
                ..default()
            },
            transform: Transform::from_translation(to_bevy_position(config, position, layer)),
            ..default()
        })
        .id()
}

fn create_text(commands: &mut Commands) {
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 20.0,
                color: FPS_COLOR,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            left: Val::Px(20.0),
            ..default()
        }),
        FpsText,
    ));

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 20.0,
                color: TALLY_COLOR,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        }),
        TallyText,
    ));
}

fn update_cells(scene: Res<Scene>, world: Res<WorldRes>, mut sprites: Query<&mut Sprite>) {
    for (cell, entity) in std::iter::zip(world.cells(), scene.cells.iter()) {
        if let Ok(mut sprite) = sprites.get_mut(*entity) {
            sprite.color = team_color(cell.team());
        }
    }
}

/// Movers are drawn in the color of the team they flip, so they stand out against the cells they
/// travel over.
fn update_movers(
    scene: Res<Scene>,
    world: Res<WorldRes>,
    mut squares: Query<(&mut Sprite, &mut Transform)>,
) {
    for (mover, entity) in std::iter::zip(world.movers(), scene.movers.iter()) {
        if let Ok((mut sprite, mut transform)) = squares.get_mut(*entity) {
            sprite.color = team_color(mover.team().opponent());
            transform.translation = to_bevy_position(world.config(), mover.position(), MOVER_LAYER);
        }
    }
}

fn update_fps_text(
    diagnostics: Res<DiagnosticsStore>,
    mut text: Query<&mut Text, With<FpsText>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .map_or("--".to_string(), |fps| format!("{fps:.0}"));

    for mut text in &mut text {
        text.sections[0].value = format!("{fps} FPS");
    }
}

fn update_tally_text(
    scene: Res<Scene>,
    world: Res<WorldRes>,
    mut text: Query<&mut Text, With<TallyText>>,
) {
    let value = if scene.show_tally {
        let counts = world.team_counts();
        format!("WHITE: {}   BLACK: {}", counts.white, counts.black)
    } else {
        String::new()
    };

    for mut text in &mut text {
        text.sections[0].value.clone_from(&value);
    }
}

fn handle_keyboard_input(keys: Res<ButtonInput<KeyCode>>, mut scene: ResMut<Scene>) {
    if keys.just_pressed(KeyCode::KeyT) {
        scene.show_tally = !scene.show_tally;
    }
}

fn team_color(team: Team) -> Color {
    match team {
        Team::White => Color::WHITE,
        Team::Black => Color::BLACK,
    }
}

/// The arena's origin is the top left corner with the y-axis pointing down, Bevy's 2D camera is
/// centered on the window with the y-axis pointing up.
fn to_bevy_position(config: &ArenaConfig, position: Position, layer: f32) -> Vec3 {
    let (x, y): (f32, f32) = position.into();
    Vec3::new(
        x - config.width as f32 / 2.0,
        config.height as f32 / 2.0 - y,
        layer,
    )
}
