use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

// The ball driven by the simulation
#[derive(Component)]
pub struct Ball;

// Every mesh making up the goal frame and nets; shrinks together
#[derive(Component)]
pub struct GoalPart;

// Parent of all dealt card entities, despawned on re-deal
#[derive(Component)]
pub struct CardRoot;

/// Where the orbit camera looks by default: the middle of the goal mouth.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GoalFocus(pub Vec3);
