use crate::core::config::MotionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Stopped,
    Running,
}

/// Everything the per-frame update reads and the keyboard mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub active_lane: usize,
    // curve parameter, kept in [0, 1]
    pub t: f32,
    pub motion: MotionState,
    pub speed_factor: f32,
    pub base_speed: f32,
    pub speed_step: f32,
    pub min_speed_factor: f32,
    pub spin_rate: f32,
    pub spin_x: bool,
    pub spin_y: bool,
}

impl AnimationState {
    pub fn new(config: &MotionConfig, start_lane: usize) -> Self {
        AnimationState {
            active_lane: start_lane,
            t: 0.0,
            motion: if config.start_running { MotionState::Running } else { MotionState::Stopped },
            speed_factor: 1.0,
            base_speed: config.base_speed,
            speed_step: config.speed_step,
            min_speed_factor: config.min_speed_factor,
            spin_rate: config.spin_rate,
            spin_x: true,
            spin_y: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.motion == MotionState::Running
    }

    pub fn toggle_motion(&mut self) {
        self.motion = match self.motion {
            MotionState::Stopped => MotionState::Running,
            MotionState::Running => MotionState::Stopped,
        };
    }

    pub fn speed_up(&mut self) {
        self.speed_factor += self.speed_step;
    }

    pub fn speed_down(&mut self) {
        self.speed_factor = (self.speed_factor - self.speed_step).max(self.min_speed_factor);
    }

    // Lane changes keep `t`; the ball jumps across on the next step.
    pub fn previous_lane(&mut self) {
        self.active_lane = self.active_lane.saturating_sub(1);
    }

    pub fn next_lane(&mut self, lane_count: usize) {
        if self.active_lane + 1 < lane_count {
            self.active_lane += 1;
        }
    }

    pub fn toggle_spin_x(&mut self) {
        self.spin_x = !self.spin_x;
    }

    pub fn toggle_spin_y(&mut self) {
        self.spin_y = !self.spin_y;
    }

    /// Curve parameter covered in `dt` seconds at the current speed.
    pub fn advance_per(&self, dt: f32) -> f32 {
        dt * self.base_speed * self.speed_factor
    }
}
