use bevy::math::Vec3;
use bevy::prelude::Resource;
use rand::Rng;
use crate::animation::state::AnimationState;
use crate::cards::card::Card;
use crate::cards::collision::{collect_cards, Pickup};
use crate::cards::placement::deal_cards;
use crate::core::config::{CardConfig, SceneConfig};
use crate::path::lanes::Lanes;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BallState {
    pub translation: Vec3,
    // euler XYZ, radians
    pub rotation: Vec3,
}

/// What the presentation layer has to apply after a step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameCommands {
    pub ball: BallState,
    pub pickups: Vec<Pickup>,
    pub wrapped: bool,
}

/// Headless simulation of the ball run. Owns lanes, cards and the ball.
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    pub lanes: Lanes,
    pub cards: Vec<Card>,
    pub state: AnimationState,
    pub ball: BallState,
    pub pickup_radius: f32,
}

impl Simulation {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let lanes = config.lanes();
        let cards = deal_cards(&lanes, &config.cards, rng);
        let state = AnimationState::new(&config.motion, config.ball.start_lane);
        let translation = lanes.position_at(state.active_lane, state.t).unwrap_or_default();

        Simulation {
            lanes,
            cards,
            state,
            ball: BallState { translation, rotation: Vec3::ZERO },
            pickup_radius: config.cards.pickup_radius,
        }
    }

    /// Advances the run by `dt` seconds.
    ///
    /// While stopped the ball stays put; the pickup check runs either way.
    pub fn step(&mut self, dt: f32) -> FrameCommands {
        let mut wrapped = false;

        if self.state.is_running() {
            self.state.t += self.state.advance_per(dt);
            if self.state.t > 1.0 {
                self.state.t = 0.0;
                wrapped = true;
            }

            if let Some(position) = self.lanes.position_at(self.state.active_lane, self.state.t) {
                self.ball.translation = position;
            }

            let spin = self.state.spin_rate * dt;
            if self.state.spin_x {
                self.ball.rotation.x += spin;
            }
            if self.state.spin_y {
                self.ball.rotation.y += spin;
            }
        }

        let pickups = collect_cards(
            &mut self.cards,
            self.state.active_lane,
            self.ball.translation,
            self.pickup_radius,
        );

        FrameCommands {
            ball: self.ball,
            pickups,
            wrapped,
        }
    }

    /// Throws away the current hand and deals a new one; the ball goes back to the start.
    pub fn redeal<R: Rng + ?Sized>(&mut self, config: &CardConfig, rng: &mut R) {
        self.cards = deal_cards(&self.lanes, config, rng);
        self.state.t = 0.0;
        if let Some(position) = self.lanes.position_at(self.state.active_lane, 0.0) {
            self.ball.translation = position;
        }
    }

    pub fn active_cards(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.cards.iter().enumerate().filter(|(_, card)| card.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Quat;
    use bevy_prng::WyRand;
    use rand::SeedableRng;
    use crate::animation::state::MotionState;
    use crate::cards::card::{CardKind, CardState};

    fn simulation() -> Simulation {
        let config = SceneConfig::default();
        let mut sim = Simulation::new(&config, &mut WyRand::seed_from_u64(3));
        // keep cards out of the way unless a test places its own
        sim.cards.clear();
        sim
    }

    #[test]
    fn starts_at_the_lane_start() {
        let sim = simulation();

        assert_eq!(sim.ball.translation, Vec3::new(0.0, 0.0, 100.0));
        assert_eq!(sim.state.active_lane, 1);
    }

    #[test]
    fn step_advances_along_the_active_lane() {
        let mut sim = simulation();

        let commands = sim.step(1.0);

        assert!((sim.state.t - 0.1).abs() < 1e-6);
        assert_eq!(commands.ball.translation, sim.lanes.position_at(1, sim.state.t).unwrap());
        assert!(!commands.wrapped);
    }

    #[test]
    fn crossing_one_resets_to_exactly_zero() {
        let mut sim = simulation();
        sim.state.t = 0.95;

        // 0.95 + 0.1 would be 1.05; no carry is kept
        let commands = sim.step(1.0);

        assert_eq!(sim.state.t, 0.0);
        assert!(commands.wrapped);
        assert_eq!(commands.ball.translation, Vec3::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn reaching_exactly_one_does_not_wrap() {
        let mut sim = simulation();
        sim.state.t = 0.5;
        sim.state.base_speed = 0.5;

        let commands = sim.step(1.0);

        assert_eq!(sim.state.t, 1.0);
        assert!(!commands.wrapped);
        assert_eq!(commands.ball.translation, Vec3::ZERO);
    }

    #[test]
    fn many_small_steps_wrap_on_the_crossing_step() {
        let mut sim = simulation();
        let dt = 1.0 / 60.0;
        let mut steps = 0;

        loop {
            steps += 1;
            let before = sim.state.t;
            let commands = sim.step(dt);
            if commands.wrapped {
                assert!(before + sim.state.advance_per(dt) > 1.0);
                assert_eq!(sim.state.t, 0.0);
                break;
            }
            assert!(sim.state.t <= 1.0);
            assert!(steps < 10_000, "never wrapped");
        }
    }

    #[test]
    fn switching_lanes_keeps_t() {
        let mut sim = simulation();
        sim.state.t = 0.4;
        let dt = 1.0 / 60.0;

        sim.state.next_lane(sim.lanes.len());
        let commands = sim.step(dt);

        let expected_t = 0.4 + dt * 0.1;
        assert!((sim.state.t - expected_t).abs() < 1e-6);
        let expected = sim.lanes.position_at(2, sim.state.t).unwrap();
        assert_eq!(commands.ball.translation, expected);
    }

    #[test]
    fn stopped_ball_does_not_move_or_spin() {
        let mut sim = simulation();
        sim.state.motion = MotionState::Stopped;
        sim.state.t = 0.3;
        let before = sim.ball;

        let commands = sim.step(0.5);

        assert_eq!(sim.state.t, 0.3);
        assert_eq!(commands.ball, before);
    }

    #[test]
    fn spin_follows_enabled_axes_at_a_fixed_rate() {
        let mut sim = simulation();
        sim.state.toggle_spin_y();

        sim.step(0.25);

        assert!((sim.ball.rotation.x - 0.75).abs() < 1e-6);
        assert!((sim.ball.rotation.y - 0.75).abs() < 1e-6);
        assert_eq!(sim.ball.rotation.z, 0.0);
    }

    #[test]
    fn spin_ignores_the_speed_factor() {
        let mut sim = simulation();
        sim.state.speed_factor = 3.0;

        sim.step(1.0 / 3.0);

        assert!((sim.ball.rotation.x - 1.0).abs() < 1e-5);
        assert!((sim.state.t - 0.1).abs() < 1e-5);
    }

    #[test]
    fn ball_on_a_card_picks_it_up_once() {
        let mut sim = simulation();
        sim.state.motion = MotionState::Stopped;
        sim.cards.push(Card {
            lane: 1,
            t: 0.0,
            kind: CardKind::Caution,
            position: sim.ball.translation,
            rotation: Quat::IDENTITY,
            state: CardState::Active,
        });

        let first = sim.step(0.016);
        let second = sim.step(0.016);

        assert_eq!(first.pickups.len(), 1);
        assert_eq!(first.pickups[0].kind, CardKind::Caution);
        assert!(second.pickups.is_empty());
        assert_eq!(sim.active_cards().count(), 0);
    }

    #[test]
    fn running_the_lane_collects_every_card_on_it() {
        let config = SceneConfig::default();
        let mut sim = Simulation::new(&config, &mut WyRand::seed_from_u64(11));
        let on_lane = sim.cards.iter().filter(|c| c.lane == 1).count();
        let mut collected = 0;

        for _ in 0..(60 * 10) {
            collected += sim.step(1.0 / 60.0).pickups.len();
        }

        assert_eq!(collected, on_lane);
        assert!(sim.cards.iter().filter(|c| c.lane != 1).all(|c| c.is_active()));
    }

    #[test]
    fn redeal_restores_cards_and_rewinds() {
        let config = SceneConfig::default();
        let mut sim = Simulation::new(&config, &mut WyRand::seed_from_u64(5));
        for card in sim.cards.iter_mut() {
            card.state = CardState::Collected;
        }
        sim.state.t = 0.7;

        sim.redeal(&config.cards, &mut WyRand::seed_from_u64(6));

        assert_eq!(sim.state.t, 0.0);
        assert!(sim.cards.iter().all(|c| c.is_active()));
        assert_eq!(sim.ball.translation, Vec3::new(0.0, 0.0, 100.0));
    }
}
