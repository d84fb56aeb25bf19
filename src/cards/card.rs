use bevy::ecs::reflect::ReflectComponent;
use bevy::math::{Quat, Vec3};
use bevy::prelude::{Component, Reflect};
use bevy_inspector_egui::InspectorOptions;
use bevy_inspector_egui::prelude::ReflectInspectorOptions;
use serde::{Deserialize, Serialize};

#[derive(InspectorOptions, Serialize, Deserialize, Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component, InspectorOptions)]
pub enum CardKind {
    // yellow
    Caution,
    // red
    Penalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Active,
    Collected,
}

/// A collectible placed on a lane. Everything except `state` is fixed at deal time.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub lane: usize,
    pub t: f32,
    pub kind: CardKind,
    pub position: Vec3,
    pub rotation: Quat,
    pub state: CardState,
}

impl Card {
    pub fn is_active(&self) -> bool {
        self.state == CardState::Active
    }
}

/// Index into the dealt card list, stored on the spawned card entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub usize);
