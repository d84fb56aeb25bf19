use std::path::PathBuf;
use bevy::app::{App, Plugin};
use bevy::prelude::*;
use crate::animation::driver::Simulation;
use crate::cards::card::CardKind;
use crate::core::components::GoalFocus;
use crate::core::config::{import_config_or_default, SceneConfig, DEFAULT_CONFIG_PATH};
use crate::management::texture_autoloader::{degrade_failed_textures, SceneTextures, TextureWatch};
use crate::spawning::ball_spawning::spawn_ball;
use crate::spawning::card_spawning::{respawn_dealt_cards, spawn_cards};
use crate::spawning::goal_spawning::spawn_goal;
use crate::spawning::helpers::GenRng;
use crate::spawning::light_spawning::spawn_lights;
use crate::spawning::skybox::{attach_skybox, load_skybox_faces};
use crate::systems::events::{tally_pickups, CardPickedUp, CardsDealt, Scoreboard};
use crate::systems::input::{
    apply_animation_actions, apply_view_actions, keyboard_action_system, SceneActionEvent, ViewToggles,
};
use crate::systems::simulation::{advance_simulation, apply_redeal_actions, draw_lanes};

/// Runs the ball, the cards and the key bindings without touching any render resources.
///
/// Uses the `SceneConfig` resource if one was inserted before the plugin and it validates,
/// the built-in defaults otherwise.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let existing = app.world()
            .get_resource::<SceneConfig>()
            .map(|config| (config.clone(), config.validate()));
        let config = match existing {
            Some((config, Ok(()))) => config,
            Some((_, Err(e))) => {
                warn!("{}; falling back to built-in scene config", e);
                let config = SceneConfig::default();
                app.insert_resource(config.clone());
                config
            }
            None => {
                let config = SceneConfig::default();
                app.insert_resource(config.clone());
                config
            }
        };

        let seed = config.seed.resolve();
        let mut rng = GenRng::new(seed);
        let simulation = Simulation::new(&config, rng.rng_mut());
        info!(
            "Dealt {} cards over {} lanes (seed {})",
            simulation.cards.len(),
            simulation.lanes.len(),
            seed
        );

        app
            .insert_resource(rng)
            .insert_resource(simulation)
            .init_resource::<ViewToggles>()
            .init_resource::<Scoreboard>()
            .add_event::<SceneActionEvent>()
            .add_event::<CardPickedUp>()
            .add_event::<CardsDealt>()
            .add_systems(Update, (
                keyboard_action_system,
                apply_animation_actions,
                apply_view_actions,
                apply_redeal_actions,
                advance_simulation,
                tally_pickups,
            ).chain());
    }
}

/// The full scene: config loading, the simulation and everything it draws.
pub struct GoalScenePlugin {
    pub config_path: PathBuf,
}

impl Default for GoalScenePlugin {
    fn default() -> Self {
        GoalScenePlugin {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for GoalScenePlugin {
    fn build(&self, app: &mut App) {
        let config = import_config_or_default(&self.config_path);
        let focus = GoalFocus(Vec3::new(0.0, -config.goal.height / 4.0, 1.0));

        app
            .insert_resource(config)
            .insert_resource(focus)
            .init_resource::<TextureWatch>()
            .add_plugins(SimulationPlugin)
            .register_type::<CardKind>()
            .add_systems(PreStartup, load_scene_textures)
            .add_systems(Startup, (
                spawn_lights,
                spawn_goal,
                spawn_ball,
                spawn_cards,
                load_skybox_faces,
            ))
            .add_systems(Update, (
                degrade_failed_textures,
                attach_skybox,
                draw_lanes,
                respawn_dealt_cards.after(apply_redeal_actions).after(advance_simulation),
            ));
    }
}

fn load_scene_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    commands.insert_resource(SceneTextures::load(&asset_server, &config.textures));
}
