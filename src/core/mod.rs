pub mod components;
pub mod config;
pub mod scene_error;
pub mod scene_plugin;
pub mod seeded_or_not;
