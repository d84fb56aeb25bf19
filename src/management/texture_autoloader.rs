use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::utils::hashbrown::HashMap;
use crate::cards::card::CardKind;
use crate::core::config::TextureConfig;

/// Image handles for every textured surface in the scene.
#[derive(Resource, Debug, Clone)]
pub struct SceneTextures {
    pub ball: Handle<Image>,
    pub caution_card: Handle<Image>,
    pub penalty_card: Handle<Image>,
    pub net: Handle<Image>,
    pub logo: Handle<Image>,
}

impl SceneTextures {
    pub fn load(asset_server: &AssetServer, config: &TextureConfig) -> Self {
        SceneTextures {
            ball: asset_server.load(&config.ball),
            caution_card: asset_server.load(&config.caution_card),
            penalty_card: asset_server.load(&config.penalty_card),
            net: asset_server.load(&config.net),
            logo: asset_server.load(&config.logo),
        }
    }

    pub fn card(&self, kind: CardKind) -> &Handle<Image> {
        match kind {
            CardKind::Caution => &self.caution_card,
            CardKind::Penalty => &self.penalty_card,
        }
    }
}

struct WatchedTexture {
    label: String,
    image: Handle<Image>,
    // each material with the base color it takes on if the texture fails
    materials: Vec<(Handle<StandardMaterial>, Option<Color>)>,
}

/// Textures still loading, with the materials that sample them.
///
/// A texture that fails to load is stripped from its materials so the surface
/// renders with its plain base color instead of the missing-texture fallback.
#[derive(Resource, Default)]
pub struct TextureWatch {
    pending: HashMap<AssetId<Image>, WatchedTexture>,
    failed: Vec<AssetId<Image>>,
}

impl TextureWatch {
    pub fn watch(&mut self, label: &str, image: &Handle<Image>, material: &Handle<StandardMaterial>) {
        self.track(label, image, material, None);
    }

    pub fn watch_with_fallback(
        &mut self,
        label: &str,
        image: &Handle<Image>,
        material: &Handle<StandardMaterial>,
        fallback: Color,
    ) {
        self.track(label, image, material, Some(fallback));
    }

    fn track(
        &mut self,
        label: &str,
        image: &Handle<Image>,
        material: &Handle<StandardMaterial>,
        fallback: Option<Color>,
    ) {
        if self.failed.contains(&image.id()) {
            return;
        }
        self.pending.entry(image.id())
            .or_insert_with(|| WatchedTexture {
                label: label.to_string(),
                image: image.clone(),
                materials: Vec::new(),
            })
            .materials
            .push((material.clone(), fallback));
    }
}

// Returns true when the material was sampling `image`.
pub fn strip_texture(material: &mut StandardMaterial, image: &Handle<Image>, fallback: Option<Color>) -> bool {
    if material.base_color_texture.as_ref() != Some(image) {
        return false;
    }
    material.base_color_texture = None;
    if let Some(color) = fallback {
        material.base_color = color;
    }
    true
}

pub fn degrade_failed_textures(
    asset_server: Res<AssetServer>,
    mut watch: ResMut<TextureWatch>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if watch.pending.is_empty() {
        return;
    }

    let mut newly_failed = Vec::new();
    watch.pending.retain(|id, watched| match asset_server.load_state(*id) {
        LoadState::Loaded => {
            debug!("Loaded {} texture", watched.label);
            false
        }
        LoadState::Failed(err) => {
            warn!("Could not load {} texture, falling back to plain color: {}", watched.label, err);
            for (handle, fallback) in &watched.materials {
                if let Some(material) = materials.get_mut(handle) {
                    strip_texture(material, &watched.image, *fallback);
                }
            }
            newly_failed.push(*id);
            false
        }
        _ => true,
    });
    watch.failed.extend(newly_failed);
}
