use bevy::math::Vec3;
use crate::cards::card::{Card, CardKind, CardState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub card: usize,
    pub lane: usize,
    pub kind: CardKind,
}

/// Collects every active card on `lane` lying strictly within `radius` of `ball`.
///
/// Collected cards never come back, so a ball parked on a card yields a single pickup.
pub fn collect_cards(cards: &mut [Card], lane: usize, ball: Vec3, radius: f32) -> Vec<Pickup> {
    let mut pickups = Vec::new();

    for (index, card) in cards.iter_mut().enumerate() {
        if card.lane != lane || card.state != CardState::Active {
            continue;
        }
        if card.position.distance(ball) < radius {
            card.state = CardState::Collected;
            pickups.push(Pickup {
                card: index,
                lane,
                kind: card.kind,
            });
        }
    }

    pickups
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Quat;

    fn card(lane: usize, kind: CardKind, position: Vec3) -> Card {
        Card {
            lane,
            t: 0.5,
            kind,
            position,
            rotation: Quat::IDENTITY,
            state: CardState::Active,
        }
    }

    #[test]
    fn exact_hit_collects_once() {
        let position = Vec3::new(3.0, 4.0, 50.0);
        let mut cards = vec![card(0, CardKind::Penalty, position)];

        let first = collect_cards(&mut cards, 0, position, 0.5);
        let second = collect_cards(&mut cards, 0, position, 0.5);

        assert_eq!(first, vec![Pickup { card: 0, lane: 0, kind: CardKind::Penalty }]);
        assert!(second.is_empty());
        assert_eq!(cards[0].state, CardState::Collected);
    }

    #[test]
    fn other_lanes_are_ignored() {
        let position = Vec3::new(0.0, 0.0, 20.0);
        let mut cards = vec![card(2, CardKind::Caution, position)];

        assert!(collect_cards(&mut cards, 1, position, 5.0).is_empty());
        assert!(cards[0].is_active());
    }

    #[test]
    fn radius_is_exclusive() {
        let mut cards = vec![card(0, CardKind::Caution, Vec3::new(2.0, 0.0, 0.0))];

        assert!(collect_cards(&mut cards, 0, Vec3::ZERO, 2.0).is_empty());
        assert_eq!(collect_cards(&mut cards, 0, Vec3::ZERO, 2.001).len(), 1);
    }

    #[test]
    fn overlapping_cards_are_all_collected() {
        let mut cards = vec![
            card(0, CardKind::Caution, Vec3::new(0.0, 0.0, 10.0)),
            card(1, CardKind::Penalty, Vec3::new(0.0, 0.0, 10.0)),
            card(0, CardKind::Penalty, Vec3::new(0.0, 0.5, 10.0)),
        ];

        let pickups = collect_cards(&mut cards, 0, Vec3::new(0.0, 0.0, 10.0), 1.0);

        assert_eq!(pickups.iter().map(|p| p.card).collect::<Vec<_>>(), vec![0, 2]);
        assert!(cards[1].is_active());
    }
}
