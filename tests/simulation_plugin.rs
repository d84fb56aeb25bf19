use std::time::Duration;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use goal_scene::animation::driver::Simulation;
use goal_scene::cards::card::{Card, CardKind, CardState};
use goal_scene::core::components::{Ball, GoalPart};
use goal_scene::core::config::SceneConfig;
use goal_scene::core::scene_plugin::SimulationPlugin;
use goal_scene::core::seeded_or_not::SeededOrNot;
use goal_scene::systems::events::{CardsDealt, Scoreboard};
use goal_scene::systems::input::ViewToggles;

fn test_app() -> App {
    let mut app = App::new();
    let config = SceneConfig {
        seed: SeededOrNot::Seeded(21),
        ..default()
    };

    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(config)
        .add_plugins(SimulationPlugin);
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn simulation(app: &App) -> &Simulation {
    app.world().resource::<Simulation>()
}

#[test]
fn ball_entity_follows_the_active_lane() {
    let mut app = test_app();
    let ball = app.world_mut().spawn((Transform::default(), Ball)).id();

    for _ in 0..5 {
        app.update();
    }

    let sim = simulation(&app);
    assert!(sim.state.t > 0.0);
    let expected = sim.lanes.position_at(sim.state.active_lane, sim.state.t).unwrap();
    let transform = app.world().get::<Transform>(ball).unwrap();
    assert_eq!(transform.translation, expected);
}

#[test]
fn arrow_keys_switch_lanes() {
    let mut app = test_app();
    app.update();

    press(&mut app, KeyCode::ArrowRight);
    assert_eq!(simulation(&app).state.active_lane, 2);

    press(&mut app, KeyCode::ArrowRight);
    assert_eq!(simulation(&app).state.active_lane, 2);

    press(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::ArrowLeft);
    assert_eq!(simulation(&app).state.active_lane, 0);
}

#[test]
fn space_stops_the_ball() {
    let mut app = test_app();
    app.update();

    press(&mut app, KeyCode::Space);
    let t = simulation(&app).state.t;
    for _ in 0..3 {
        app.update();
    }

    assert!(!simulation(&app).state.is_running());
    assert_eq!(simulation(&app).state.t, t);
}

#[test]
fn speed_keys_clamp_at_the_floor() {
    let mut app = test_app();

    press(&mut app, KeyCode::ArrowUp);
    assert!((simulation(&app).state.speed_factor - 1.1).abs() < 1e-5);

    for _ in 0..20 {
        press(&mut app, KeyCode::ArrowDown);
    }
    assert!((simulation(&app).state.speed_factor - 0.1).abs() < 1e-5);
}

#[test]
fn shrink_key_scales_goal_parts_about_the_origin() {
    let mut app = test_app();
    let post = app.world_mut().spawn((Transform::from_xyz(20.0, 0.0, -50.0), GoalPart)).id();

    press(&mut app, KeyCode::Digit3);

    let transform = app.world().get::<Transform>(post).unwrap();
    assert!((transform.translation - Vec3::new(19.0, 0.0, -47.5)).length() < 1e-4);
    assert!((transform.scale - Vec3::splat(0.95)).length() < 1e-5);
    assert!((app.world().resource::<ViewToggles>().goal_scale - 0.95).abs() < 1e-6);
}

#[test]
fn orbit_and_wireframe_toggle_without_a_renderer() {
    let mut app = test_app();

    press(&mut app, KeyCode::KeyO);
    press(&mut app, KeyCode::KeyW);

    let toggles = app.world().resource::<ViewToggles>();
    assert!(!toggles.orbit_enabled);
    assert!(toggles.wireframe);
}

#[test]
fn card_under_the_ball_is_scored_once() {
    let mut app = test_app();

    {
        let mut sim = app.world_mut().resource_mut::<Simulation>();
        let position = sim.ball.translation;
        let lane = sim.state.active_lane;
        sim.cards.clear();
        sim.cards.push(Card {
            lane,
            t: 0.0,
            kind: CardKind::Penalty,
            position,
            rotation: Quat::IDENTITY,
            state: CardState::Active,
        });
    }
    app.update();
    app.update();

    let scoreboard = app.world().resource::<Scoreboard>();
    assert_eq!(scoreboard.penalty, 1);
    assert_eq!(scoreboard.total(), 1);
}

#[test]
fn redeal_key_deals_a_fresh_hand() {
    let mut app = test_app();
    {
        let mut sim = app.world_mut().resource_mut::<Simulation>();
        for card in sim.cards.iter_mut() {
            card.state = CardState::Collected;
        }
    }

    press(&mut app, KeyCode::KeyR);

    let sim = simulation(&app);
    assert!(!sim.cards.is_empty());
    assert!(sim.cards.iter().all(|card| card.is_active() || card.lane == sim.state.active_lane));
    assert!(sim.state.t < 0.05);
    assert!(!app.world().resource::<Events<CardsDealt>>().is_empty());
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let mut app = App::new();
    let mut config = SceneConfig {
        seed: SeededOrNot::Seeded(4),
        ..default()
    };
    config.cards.min_per_lane = 5;

    app.add_plugins(MinimalPlugins)
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(config)
        .add_plugins(SimulationPlugin);
    app.update();

    let installed = app.world().resource::<SceneConfig>();
    assert_eq!(installed.cards.min_per_lane, 2);
    assert!(installed.validate().is_ok());

    let sim = simulation(&app);
    assert_eq!(sim.lanes.len(), 3);
    for lane in 0..sim.lanes.len() {
        let on_lane = sim.cards.iter().filter(|card| card.lane == lane).count();
        assert!((2..=4).contains(&on_lane), "lane {} has {} cards", lane, on_lane);
    }
}
