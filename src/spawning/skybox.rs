use bevy::asset::LoadState;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureViewDescriptor, TextureViewDimension};
use crate::core::components::MainCamera;
use crate::core::config::SceneConfig;

const SKYBOX_BRIGHTNESS: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkyboxStatus {
    #[default]
    Loading,
    Attached,
    // the clear color stays as the background
    Unavailable,
}

/// The six cube faces, ordered +X, -X, +Y, -Y, +Z, -Z.
#[derive(Resource, Debug)]
pub struct SkyboxFaces {
    pub faces: [Handle<Image>; 6],
    pub status: SkyboxStatus,
}

pub fn load_skybox_faces(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let faces = config.textures.skybox.clone().map(|path| asset_server.load(path));
    commands.insert_resource(SkyboxFaces { faces, status: SkyboxStatus::Loading });
}

/// Stacks equally sized faces vertically and reinterprets the result as a cube map.
pub fn stack_cube_faces(faces: &[&Image]) -> Result<Image, String> {
    let Some(first) = faces.first() else {
        return Err("no skybox faces".to_string());
    };
    if faces.len() != 6 {
        return Err(format!("a cube map needs 6 faces, got {}", faces.len()));
    }

    let size = first.size();
    let format = first.texture_descriptor.format;
    let mut data = Vec::with_capacity(first.data.len() * 6);
    for (index, face) in faces.iter().enumerate() {
        if face.size() != size {
            return Err(format!("face {} is {} but face 0 is {}", index, face.size(), size));
        }
        if face.texture_descriptor.format != format {
            return Err(format!("face {} has a different pixel format", index));
        }
        data.extend_from_slice(&face.data);
    }

    let mut image = Image::new(
        Extent3d {
            width: size.x,
            height: size.y * 6,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        format,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.reinterpret_stacked_2d_as_array(6);
    image.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });

    Ok(image)
}

pub fn attach_skybox(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut skybox: ResMut<SkyboxFaces>,
    mut images: ResMut<Assets<Image>>,
    camera_query: Query<Entity, With<MainCamera>>,
) {
    if skybox.status != SkyboxStatus::Loading {
        return;
    }
    let skybox = &mut *skybox;

    for face in &skybox.faces {
        match asset_server.load_state(face.id()) {
            LoadState::Loaded => {}
            LoadState::Failed(err) => {
                warn!("Skybox face failed to load, keeping the plain background: {}", err);
                skybox.status = SkyboxStatus::Unavailable;
                return;
            }
            _ => return,
        }
    }

    let Ok(camera) = camera_query.get_single() else {
        return;
    };

    let stacked = {
        let faces: Vec<&Image> = skybox.faces.iter().filter_map(|face| images.get(face)).collect();
        stack_cube_faces(&faces)
    };
    match stacked {
        Ok(cube) => {
            let image = images.add(cube);
            commands.entity(camera).insert(Skybox {
                image,
                brightness: SKYBOX_BRIGHTNESS,
                rotation: Quat::IDENTITY,
            });
            skybox.status = SkyboxStatus::Attached;
            info!("Skybox attached");
        }
        Err(reason) => {
            warn!("Could not build skybox: {}", reason);
            skybox.status = SkyboxStatus::Unavailable;
        }
    }
}
