use std::path::PathBuf;
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy::render::settings::{WgpuFeatures, WgpuSettings};
use bevy::render::RenderPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use goal_scene::core::scene_plugin::GoalScenePlugin;

mod input_manager;
mod camera;

// shown until the skybox faces finish loading, and for good if they never do
const FOREST_GREEN: Color = Color::srgb(0.133, 0.545, 0.133);

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(RenderPlugin {
                render_creation: WgpuSettings {
                    features: WgpuFeatures::POLYGON_MODE_LINE,
                    ..default()
                }
                    .into(),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                filter: "warn,goal_scene=info,goal_scene_app=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Goal Scene".into(),
                    resolution: (1280.0, 720.0).into(),
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: "../assets".to_string(),
                ..default()
            })
            .build(),
    );

    app.insert_resource(ClearColor(FOREST_GREEN));

    // Setup wireframe rendering, off until toggled
    app.add_plugins(WireframePlugin)
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        });

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape)),
    );

    // Setup the scene
    app.add_plugins(GoalScenePlugin {
        config_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets/config/scene.ron"),
    });

    // Setup input system
    app.add_plugins(crate::input_manager::InputPlugin);

    // Setup camera
    app.add_plugins(crate::camera::CameraPlugin);

    app.run();
}
