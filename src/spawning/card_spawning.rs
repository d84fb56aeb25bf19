use bevy::prelude::*;
use crate::animation::driver::Simulation;
use crate::cards::card::{CardId, CardKind};
use crate::core::components::CardRoot;
use crate::core::config::SceneConfig;
use crate::management::texture_autoloader::{SceneTextures, TextureWatch};
use crate::systems::events::CardsDealt;

// shown only when the card texture fails to load
const CAUTION_COLOR: Color = Color::srgb(1.0, 0.85, 0.1);
const PENALTY_COLOR: Color = Color::srgb(0.85, 0.1, 0.1);

#[derive(Resource, Debug, Clone)]
pub struct CardAssets {
    pub mesh: Handle<Mesh>,
    pub caution: Handle<StandardMaterial>,
    pub penalty: Handle<StandardMaterial>,
}

impl CardAssets {
    pub fn material(&self, kind: CardKind) -> &Handle<StandardMaterial> {
        match kind {
            CardKind::Caution => &self.caution,
            CardKind::Penalty => &self.penalty,
        }
    }
}

fn card_material(texture: &Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture.clone()),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub(crate) fn spawn_card_entities(
    commands: &mut Commands,
    simulation: &Simulation,
    assets: &CardAssets,
) -> Entity {
    let root = commands.spawn_empty()
        .insert(Transform::default())
        .insert(Visibility::default())
        .insert(Name::new("Cards"))
        .insert(CardRoot)
        .id();

    for (index, card) in simulation.active_cards() {
        commands.spawn_empty()
            .insert(Mesh3d(assets.mesh.clone()))
            .insert(MeshMaterial3d(assets.material(card.kind).clone()))
            .insert(Transform::from_translation(card.position).with_rotation(card.rotation))
            .insert(Visibility::Visible)
            .insert(Name::new(format!("{:?}Card{}", card.kind, index)))
            .insert(CardId(index))
            .insert(card.kind)
            .set_parent(root);
    }

    root
}

pub fn spawn_cards(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut watch: ResMut<TextureWatch>,
    textures: Res<SceneTextures>,
    simulation: Res<Simulation>,
    config: Res<SceneConfig>,
) {
    let size = config.cards.size;
    let caution = materials.add(card_material(textures.card(CardKind::Caution)));
    let penalty = materials.add(card_material(textures.card(CardKind::Penalty)));
    watch.watch_with_fallback("caution card", textures.card(CardKind::Caution), &caution, CAUTION_COLOR);
    watch.watch_with_fallback("penalty card", textures.card(CardKind::Penalty), &penalty, PENALTY_COLOR);

    let assets = CardAssets {
        mesh: meshes.add(Rectangle::new(size.x, size.y)),
        caution,
        penalty,
    };

    spawn_card_entities(&mut commands, &simulation, &assets);
    debug!("Spawned {} cards", simulation.cards.len());
    commands.insert_resource(assets);
}

pub fn respawn_dealt_cards(
    mut commands: Commands,
    mut dealt_reader: EventReader<CardsDealt>,
    root_query: Query<Entity, With<CardRoot>>,
    simulation: Res<Simulation>,
    assets: Option<Res<CardAssets>>,
) {
    let Some(dealt) = dealt_reader.read().last() else {
        return;
    };
    let Some(assets) = assets else {
        warn!("Cards were dealt before card assets existed");
        return;
    };

    for root in root_query.iter() {
        commands.entity(root).despawn_recursive();
    }
    spawn_card_entities(&mut commands, &simulation, &assets);
    debug!("Respawned {} cards", dealt.count);
}
