use bevy::prelude::*;
use crate::animation::driver::{BallState, Simulation};
use crate::cards::card::CardId;
use crate::core::components::Ball;
use crate::core::config::SceneConfig;
use crate::spawning::helpers::GenRng;
use crate::systems::events::{CardPickedUp, CardsDealt};
use crate::systems::input::{SceneAction, SceneActionEvent};

pub fn ball_transform(ball: &BallState, current: &Transform) -> Transform {
    Transform {
        translation: ball.translation,
        rotation: Quat::from_euler(EulerRot::XYZ, ball.rotation.x, ball.rotation.y, ball.rotation.z),
        scale: current.scale,
    }
}

pub fn advance_simulation(
    time: Res<Time>,
    mut simulation: ResMut<Simulation>,
    mut ball_query: Query<&mut Transform, With<Ball>>,
    mut card_query: Query<(&CardId, &mut Visibility)>,
    mut pickup_writer: EventWriter<CardPickedUp>,
) {
    let commands = simulation.step(time.delta_secs());

    if commands.wrapped {
        debug!("Ball looped back to the start of lane {}", simulation.state.active_lane);
    }

    for mut transform in ball_query.iter_mut() {
        *transform = ball_transform(&commands.ball, &transform);
    }

    for pickup in &commands.pickups {
        for (card_id, mut visibility) in card_query.iter_mut() {
            if card_id.0 == pickup.card {
                *visibility = Visibility::Hidden;
            }
        }
        pickup_writer.send(CardPickedUp {
            card: pickup.card,
            lane: pickup.lane,
            kind: pickup.kind,
        });
    }
}

pub fn apply_redeal_actions(
    mut action_reader: EventReader<SceneActionEvent>,
    mut simulation: ResMut<Simulation>,
    mut rng: ResMut<GenRng>,
    mut dealt_writer: EventWriter<CardsDealt>,
    config: Res<SceneConfig>,
) {
    let requests = action_reader.read()
        .filter(|SceneActionEvent(action)| *action == SceneAction::Redeal)
        .count();
    if requests == 0 {
        return;
    }

    simulation.redeal(&config.cards, rng.rng_mut());
    info!("Dealt {} new cards", simulation.cards.len());
    dealt_writer.send(CardsDealt { count: simulation.cards.len() });
}

pub fn draw_lanes(
    mut gizmos: Gizmos,
    simulation: Res<Simulation>,
    config: Res<SceneConfig>,
) {
    if !config.debug.draw_lanes {
        return;
    }
    for lane in simulation.lanes.iter() {
        let [r, g, b] = lane.color;
        gizmos.linestrip(lane.path.samples(config.debug.lane_segments), Color::srgb(r, g, b));
    }
}
