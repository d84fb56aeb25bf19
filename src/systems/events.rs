use bevy::prelude::*;
use crate::cards::card::CardKind;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CardPickedUp {
    pub card: usize,
    pub lane: usize,
    pub kind: CardKind,
}

// A fresh hand is in the simulation; card entities need respawning
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardsDealt {
    pub count: usize,
}

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub caution: u32,
    pub penalty: u32,
}

impl Scoreboard {
    pub fn record(&mut self, kind: CardKind) {
        match kind {
            CardKind::Caution => self.caution += 1,
            CardKind::Penalty => self.penalty += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.caution + self.penalty
    }
}

pub fn tally_pickups(
    mut pickup_reader: EventReader<CardPickedUp>,
    mut scoreboard: ResMut<Scoreboard>,
) {
    for pickup in pickup_reader.read() {
        scoreboard.record(pickup.kind);
        info!(
            "Picked up {:?} card {} on lane {} (caution: {}, penalty: {}, total: {})",
            pickup.kind, pickup.card, pickup.lane, scoreboard.caution, scoreboard.penalty, scoreboard.total()
        );
    }
}
