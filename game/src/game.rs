use crate::args::ProgramArgs;
use crate::canvas::{Canvas, TextLabel};
use crate::settings::*;
use crate::sim_rate::SimRate;
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy_vector_shapes::prelude::*;
use clap::Parser;
use orrery::prelude::{
    draw_scene, load_system_from_file, Clock, Nanotime, SolarSystem, HEIGHT, WIDTH,
};

pub const WINDOW_TITLE: &str = "Solar System - Rotation, Translation and Scale";

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK));
        app.add_systems(Startup, init_system);
        app.add_systems(
            Update,
            (advance_clock, draw_system, sync_text_labels).chain(),
        );
    }
}

#[derive(Resource)]
pub struct OrreryState {
    pub clock: Clock,
    pub system: SolarSystem,
    pub settings: Settings,
    pub rate: SimRate,

    /// Labels produced by the most recent draw, in world space
    pub text_labels: Vec<TextLabel>,
}

impl OrreryState {
    pub fn new(args: ProgramArgs) -> Self {
        let settings = match load_settings_from_file(&args.settings) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to load settings: {e}");
                Settings::default()
            }
        };

        let system = match &args.scene {
            Some(path) => match load_system_from_file(path) {
                Ok(s) => {
                    info!("Loaded scene from {}", path.display());
                    s
                }
                Err(e) => {
                    error!("Failed to load scene {}: {e}", path.display());
                    SolarSystem::default()
                }
            },
            None => SolarSystem::default(),
        };

        OrreryState {
            clock: Clock::new(),
            system,
            settings,
            rate: args.rate,
            text_labels: Vec::new(),
        }
    }

    pub fn screen_size() -> Vec2 {
        Vec2::new(WIDTH, HEIGHT)
    }
}

#[derive(Component, Debug)]
pub struct BodyLabel;

fn init_system(mut commands: Commands) {
    let args = match ProgramArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            _ = e.print();
            ProgramArgs::default()
        }
    };

    let state = OrreryState::new(args);

    info!(
        "Drawing {} bodies at {}",
        state.system.bodies.len(),
        state.rate
    );

    commands.insert_resource(state);
    commands.spawn(Camera2d);
}

fn advance_clock(time: Res<Time>, mut state: ResMut<OrreryState>) {
    let delta = Nanotime::from(time.delta()) * state.rate.multiplier();
    state.clock.advance(delta);
}

fn draw_system(
    painter: ShapePainter,
    mut state: ResMut<OrreryState>,
    mut clear: ResMut<ClearColor>,
) {
    let mut canvas = Canvas::new(painter, OrreryState::screen_size(), state.settings.line_thickness);

    draw_scene(&state.system, state.clock.elapsed(), &mut canvas);

    if let Some(c) = canvas.clear_color {
        if clear.0 != c {
            clear.0 = c;
        }
    }

    state.text_labels = canvas.text_labels;
}

/// Reuses label entities from the previous frame, spawning or despawning
/// only when the label count changes.
fn sync_text_labels(
    mut commands: Commands,
    mut existing: Query<(Entity, &mut Text2d, &mut Transform, &mut TextColor), With<BodyLabel>>,
    state: Res<OrreryState>,
) {
    let labels: &[TextLabel] = if state.settings.show_labels {
        &state.text_labels
    } else {
        &[]
    };

    let mut labels = labels.iter();

    for (e, mut text, mut transform, mut color) in &mut existing {
        let Some(label) = labels.next() else {
            commands.entity(e).despawn();
            continue;
        };
        if text.0 != label.text {
            text.0 = label.text.clone();
        }
        transform.translation = label.pos.extend(label.z);
        color.0 = label.color;
    }

    for label in labels {
        commands.spawn((
            BodyLabel,
            Text2d::new(label.text.clone()),
            TextFont {
                font_size: state.settings.label_font_size,
                ..default()
            },
            TextColor(label.color),
            Anchor::TopLeft,
            Transform::from_translation(label.pos.extend(label.z)),
        ));
    }
}
