use std::fs::File;
use std::path::Path;
use bevy::log::warn;
use bevy::math::{Vec2, Vec3};
use bevy::prelude::Resource;
use ron::de::from_reader;
use serde::{Deserialize, Serialize};
use crate::core::scene_error::SceneError;
use crate::core::seeded_or_not::SeededOrNot;
use crate::path::bezier::QuadraticBezier;
use crate::path::lanes::{Lane, Lanes};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/scene.ron";

#[derive(Serialize, Deserialize, Debug, Clone, Resource)]
#[serde(default)]
pub struct SceneConfig {
    pub seed: SeededOrNot,
    pub goal: GoalConfig,
    pub ball: BallConfig,
    pub motion: MotionConfig,
    pub cards: CardConfig,
    pub lanes: Vec<Lane>,
    pub lighting: LightingConfig,
    pub textures: TextureConfig,
    pub debug: DebugConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GoalConfig {
    pub height: f32,
    pub z: f32,
    // applied on every shrink key press
    pub shrink_factor: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BallConfig {
    // fraction of goal height
    pub radius_ratio: f32,
    pub start_lane: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MotionConfig {
    // curve parameter per second at speed factor 1
    pub base_speed: f32,
    pub speed_step: f32,
    pub min_speed_factor: f32,
    // radians per second
    pub spin_rate: f32,
    pub start_running: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CardConfig {
    pub min_per_lane: u32,
    pub max_per_lane: u32,
    pub size: Vec2,
    pub pickup_radius: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DirectionalLightConfig {
    pub position: Vec3,
    pub illuminance: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub directional: Vec<DirectionalLightConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TextureConfig {
    pub ball: String,
    pub caution_card: String,
    pub penalty_card: String,
    pub net: String,
    pub logo: String,
    // +X, -X, +Y, -Y, +Z, -Z
    pub skybox: [String; 6],
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DebugConfig {
    pub draw_lanes: bool,
    pub lane_segments: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let start = Vec3::new(0.0, 0.0, 100.0);
        let end = Vec3::ZERO;

        SceneConfig {
            seed: SeededOrNot::Unseeded,
            goal: GoalConfig::default(),
            ball: BallConfig::default(),
            motion: MotionConfig::default(),
            cards: CardConfig::default(),
            lanes: vec![
                Lane {
                    name: "left_winger".to_string(),
                    path: QuadraticBezier::new(start, Vec3::new(-50.0, 0.0, 50.0), end),
                    color: [0.0, 0.0, 1.0],
                },
                Lane {
                    name: "center_forward".to_string(),
                    path: QuadraticBezier::new(start, Vec3::new(0.0, 50.0, 50.0), end),
                    color: [0.0, 1.0, 0.0],
                },
                Lane {
                    name: "right_winger".to_string(),
                    path: QuadraticBezier::new(start, Vec3::new(50.0, 0.0, 50.0), end),
                    color: [1.0, 0.0, 0.0],
                },
            ],
            lighting: LightingConfig::default(),
            textures: TextureConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        GoalConfig {
            height: 16.0,
            z: -50.0,
            shrink_factor: 0.95,
        }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        BallConfig {
            radius_ratio: 1.0 / 16.0,
            start_lane: 1,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            base_speed: 0.1,
            speed_step: 0.1,
            min_speed_factor: 0.1,
            spin_rate: 3.0,
            start_running: true,
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            min_per_lane: 2,
            max_per_lane: 4,
            size: Vec2::new(1.0, 1.5),
            pickup_radius: 2.0,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        LightingConfig {
            ambient_brightness: 400.0,
            directional: vec![
                DirectionalLightConfig { position: Vec3::new(0.0, 60.0, -100.0), illuminance: 4000.0 },
                DirectionalLightConfig { position: Vec3::new(0.0, 60.0, 100.0), illuminance: 4000.0 },
            ],
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        TextureConfig {
            ball: "textures/soccer_ball.jpg".to_string(),
            caution_card: "textures/yellow_card.jpg".to_string(),
            penalty_card: "textures/red_card.jpg".to_string(),
            net: "textures/goal_net.png".to_string(),
            logo: "textures/logo.png".to_string(),
            skybox: [
                "pitch/right.jpg".to_string(),
                "pitch/left.jpg".to_string(),
                "pitch/top.jpg".to_string(),
                "pitch/bottom.jpg".to_string(),
                "pitch/front.jpg".to_string(),
                "pitch/back.jpg".to_string(),
            ],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        DebugConfig {
            draw_lanes: true,
            lane_segments: 50,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.lanes.is_empty() {
            return Err("at least one lane is required".into());
        }
        if self.cards.min_per_lane == 0 {
            return Err("min_per_lane must be at least 1".into());
        }
        if self.cards.min_per_lane > self.cards.max_per_lane {
            return Err(SceneError::InvalidConfig(format!(
                "min_per_lane ({}) exceeds max_per_lane ({})",
                self.cards.min_per_lane, self.cards.max_per_lane
            )));
        }
        if self.cards.pickup_radius <= 0.0 {
            return Err("pickup_radius must be positive".into());
        }
        if self.motion.base_speed <= 0.0 {
            return Err("base_speed must be positive".into());
        }
        let lanes = Lanes::from_unique(&self.lanes).map_err(SceneError::InvalidConfig)?;
        if self.ball.start_lane >= lanes.len() {
            return Err(SceneError::InvalidConfig(format!(
                "start_lane {} is out of range for {} lanes",
                self.ball.start_lane,
                lanes.len()
            )));
        }
        Ok(())
    }

    pub fn lanes(&self) -> Lanes {
        self.lanes.iter().cloned().collect()
    }

    pub fn ball_radius(&self) -> f32 {
        self.goal.height * self.ball.radius_ratio
    }
}

pub fn import_config(path: &Path) -> Result<SceneConfig, SceneError> {
    let file = File::open(path)?;
    let config: SceneConfig = from_reader(file)?;
    config.validate()?;
    Ok(config)
}

pub fn import_config_or_default(path: &Path) -> SceneConfig {
    match import_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; falling back to built-in scene config", e);
            SceneConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SceneConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.lanes().len(), 3);
        assert_eq!(config.ball_radius(), 1.0);
    }

    #[test]
    fn shipped_config_parses() {
        let config: SceneConfig = ron::from_str(include_str!("../../assets/config/scene.ron"))
            .expect("shipped scene.ron should parse");

        assert!(config.validate().is_ok());
        assert_eq!(config.seed, SeededOrNot::Unseeded);
        assert_eq!(config.lanes[1].path.control, Vec3::new(0.0, 50.0, 50.0));
        assert_eq!(config.cards.max_per_lane, 4);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SceneConfig = ron::from_str("(seed: Seeded(7), cards: (pickup_radius: 3.5))").unwrap();

        assert_eq!(config.seed, SeededOrNot::Seeded(7));
        assert_eq!(config.cards.pickup_radius, 3.5);
        assert_eq!(config.cards.min_per_lane, 2);
        assert_eq!(config.goal.height, 16.0);
        assert_eq!(config.lanes.len(), 3);
    }

    #[test]
    fn rejects_inverted_card_range() {
        let mut config = SceneConfig::default();
        config.cards.min_per_lane = 5;

        assert!(matches!(config.validate(), Err(SceneError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_missing_lanes() {
        let mut config = SceneConfig::default();
        config.lanes.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_lane_names() {
        let mut config = SceneConfig::default();
        config.lanes[1].name = "left_winger".to_string();

        match config.validate() {
            Err(SceneError::InvalidConfig(reason)) => assert!(reason.contains("left_winger"), "{}", reason),
            other => panic!("expected duplicate lane rejection, got {:?}", other),
        }
    }

    #[test]
    fn rejects_start_lane_past_the_last_lane() {
        let mut config = SceneConfig::default();
        config.lanes.truncate(2);
        config.ball.start_lane = 2;

        assert!(matches!(config.validate(), Err(SceneError::InvalidConfig(_))));

        config.ball.start_lane = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = import_config(Path::new("assets/config/does_not_exist.ron"));

        assert!(matches!(result, Err(SceneError::ConfigRead(_))));
    }
}
