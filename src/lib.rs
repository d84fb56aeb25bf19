pub mod animation;
pub mod cards;
pub mod core;
pub mod management;
pub mod path;
pub mod spawning;
pub mod systems;
