pub mod ball_spawning;
pub mod card_spawning;
pub mod goal_spawning;
pub mod helpers;
pub mod light_spawning;
pub mod skybox;
