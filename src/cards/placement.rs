use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;
use rand::Rng;
use crate::cards::card::{Card, CardKind, CardState};
use crate::core::config::CardConfig;
use crate::path::lanes::Lanes;

/// Deals a random hand of cards onto every lane.
///
/// Each lane gets between `min_per_lane` and `max_per_lane` cards, at least one of them a
/// caution card: if the lane's last card comes up and no caution card has been drawn yet, it
/// is forced to caution. Within a lane the result is ordered by `t`.
pub fn deal_cards<R: Rng + ?Sized>(lanes: &Lanes, config: &CardConfig, rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::new();

    for (lane_index, lane) in lanes.iter().enumerate() {
        let count = rng.gen_range(config.min_per_lane..=config.max_per_lane) as usize;
        let mut has_caution = false;
        let mut lane_cards = Vec::with_capacity(count);

        for i in 0..count {
            let t = rng.gen::<f32>();
            let forced = i == count - 1 && !has_caution;
            let kind = if forced || rng.gen::<f32>() > 0.5 {
                has_caution = true;
                CardKind::Caution
            } else {
                CardKind::Penalty
            };

            let position = lane.path.position_at(t);
            lane_cards.push(Card {
                lane: lane_index,
                t,
                kind,
                position,
                rotation: facing_origin(position),
                state: CardState::Active,
            });
        }

        lane_cards.sort_by(|a, b| a.t.total_cmp(&b.t));
        cards.extend(lane_cards);
    }

    cards
}

// Cards at the origin itself keep the default facing
fn facing_origin(position: Vec3) -> Quat {
    if position.length_squared() <= f32::EPSILON {
        return Quat::IDENTITY;
    }
    Transform::from_translation(position)
        .looking_at(Vec3::ZERO, Vec3::Y)
        .rotation
}
