use bevy::prelude::*;
use crate::animation::driver::Simulation;
use crate::core::components::Ball;
use crate::core::config::SceneConfig;
use crate::management::texture_autoloader::{SceneTextures, TextureWatch};

pub fn spawn_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut watch: ResMut<TextureWatch>,
    textures: Res<SceneTextures>,
    simulation: Res<Simulation>,
    config: Res<SceneConfig>,
) {
    let radius = config.ball_radius();
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(textures.ball.clone()),
        perceptual_roughness: 0.6,
        ..default()
    });
    watch.watch("ball", &textures.ball, &material);

    commands.spawn_empty()
        .insert(Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(32, 18))))
        .insert(MeshMaterial3d(material))
        .insert(Transform::from_translation(simulation.ball.translation))
        .insert(Name::new("Ball"))
        .insert(Ball);

    debug!("Spawned ball with radius {} at {}", radius, simulation.ball.translation);
}
