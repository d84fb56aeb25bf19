use bevy::pbr::wireframe::WireframeConfig;
use bevy::prelude::*;
use crate::animation::driver::Simulation;
use crate::core::components::GoalPart;
use crate::core::config::SceneConfig;
use crate::spawning::helpers::scale_about_origin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneAction {
    ToggleOrbit,
    ToggleWireframe,
    ShrinkGoal,
    ToggleSpinY,
    ToggleSpinX,
    SpeedUp,
    SpeedDown,
    LaneLeft,
    LaneRight,
    ToggleMotion,
    Redeal,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneActionEvent(pub SceneAction);

pub fn action_for_key(key: KeyCode) -> Option<SceneAction> {
    match key {
        KeyCode::KeyO => Some(SceneAction::ToggleOrbit),
        KeyCode::KeyW => Some(SceneAction::ToggleWireframe),
        KeyCode::Digit3 => Some(SceneAction::ShrinkGoal),
        KeyCode::Digit1 => Some(SceneAction::ToggleSpinY),
        KeyCode::Digit2 => Some(SceneAction::ToggleSpinX),
        KeyCode::ArrowUp | KeyCode::Equal | KeyCode::NumpadAdd => Some(SceneAction::SpeedUp),
        KeyCode::ArrowDown | KeyCode::Minus | KeyCode::NumpadSubtract => Some(SceneAction::SpeedDown),
        KeyCode::ArrowLeft => Some(SceneAction::LaneLeft),
        KeyCode::ArrowRight => Some(SceneAction::LaneRight),
        KeyCode::Space => Some(SceneAction::ToggleMotion),
        KeyCode::KeyR => Some(SceneAction::Redeal),
        _ => None,
    }
}

/// Camera and render toggles. The orbit controller lives in the app and reads this.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewToggles {
    pub orbit_enabled: bool,
    pub wireframe: bool,
    // accumulated goal scale, for logging and inspection
    pub goal_scale: f32,
}

impl Default for ViewToggles {
    fn default() -> Self {
        ViewToggles {
            orbit_enabled: true,
            wireframe: false,
            goal_scale: 1.0,
        }
    }
}

impl ViewToggles {
    // Returns true when the action was a view action.
    pub fn apply(&mut self, action: SceneAction, shrink_factor: f32) -> bool {
        match action {
            SceneAction::ToggleOrbit => self.orbit_enabled = !self.orbit_enabled,
            SceneAction::ToggleWireframe => self.wireframe = !self.wireframe,
            SceneAction::ShrinkGoal => self.goal_scale *= shrink_factor,
            _ => return false,
        }
        true
    }
}

pub fn keyboard_action_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_writer: EventWriter<SceneActionEvent>,
) {
    for key in keys.get_just_pressed() {
        if let Some(action) = action_for_key(*key) {
            action_writer.send(SceneActionEvent(action));
        }
    }
}

pub fn apply_animation_actions(
    mut action_reader: EventReader<SceneActionEvent>,
    mut simulation: ResMut<Simulation>,
) {
    for SceneActionEvent(action) in action_reader.read() {
        let lane_count = simulation.lanes.len();
        let state = &mut simulation.state;
        match action {
            SceneAction::ToggleMotion => state.toggle_motion(),
            SceneAction::SpeedUp => state.speed_up(),
            SceneAction::SpeedDown => state.speed_down(),
            SceneAction::LaneLeft => state.previous_lane(),
            SceneAction::LaneRight => state.next_lane(lane_count),
            SceneAction::ToggleSpinX => state.toggle_spin_x(),
            SceneAction::ToggleSpinY => state.toggle_spin_y(),
            _ => continue,
        }
        if matches!(action, SceneAction::LaneLeft | SceneAction::LaneRight) {
            info!("Ball now on lane {}", state.active_lane);
        }
        debug!(
            "{:?}: lane {} t {:.3} speed {:.1} motion {:?}",
            action, state.active_lane, state.t, state.speed_factor, state.motion
        );
    }
}

pub fn apply_view_actions(
    mut action_reader: EventReader<SceneActionEvent>,
    mut toggles: ResMut<ViewToggles>,
    mut wireframe_config: Option<ResMut<WireframeConfig>>,
    mut goal_query: Query<&mut Transform, With<GoalPart>>,
    config: Res<SceneConfig>,
) {
    for SceneActionEvent(action) in action_reader.read() {
        if !toggles.apply(*action, config.goal.shrink_factor) {
            continue;
        }
        match action {
            SceneAction::ToggleWireframe => match wireframe_config.as_mut() {
                Some(wireframe) => wireframe.global = toggles.wireframe,
                None => warn!("Wireframe toggled but no WireframePlugin is installed"),
            },
            SceneAction::ShrinkGoal => {
                for mut transform in goal_query.iter_mut() {
                    *transform = scale_about_origin(&transform, config.goal.shrink_factor);
                }
            }
            _ => {}
        }
        debug!("{:?}: {:?}", action, *toggles);
    }
}
