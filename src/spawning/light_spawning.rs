use bevy::prelude::*;
use crate::core::config::{DirectionalLightConfig, SceneConfig};

pub(crate) fn spawn_directional_light(
    commands: &mut Commands,
    light: &DirectionalLightConfig,
    index: usize,
) -> Entity {
    commands.spawn_empty()
        .insert(DirectionalLight {
            illuminance: light.illuminance,
            shadows_enabled: index == 0,
            ..default()
        })
        .insert(Transform::from_translation(light.position).looking_at(Vec3::ZERO, Vec3::Y))
        .insert(Name::new(format!("DirectionalLight{}", index)))
        .id()
}

pub fn spawn_lights(
    mut commands: Commands,
    config: Res<SceneConfig>,
) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: config.lighting.ambient_brightness,
    });

    for (index, light) in config.lighting.directional.iter().enumerate() {
        spawn_directional_light(&mut commands, light, index);
    }

    debug!(
        "Spawned ambient light and {} directional lights",
        config.lighting.directional.len()
    );
}
