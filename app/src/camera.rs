use bevy::app::{App, Plugin};
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy_math::cubic_splines::{CubicCardinalSpline, CubicCurve, CubicGenerator};
use goal_scene::core::components::{GoalFocus, MainCamera};
use goal_scene::systems::input::ViewToggles;
use crate::input_manager::DragStates;

const START_POSITION: Vec3 = Vec3::new(-5.0, 3.0, 110.0);
const ROTATE_SENSITIVITY: f32 = 0.01;
const PAN_SENSITIVITY: f32 = 0.1;
const ZOOM_SENSITIVITY: f32 = 0.1;

#[derive(Component)]
pub(crate) struct CameraFocus;
#[derive(Component)]
struct CameraRig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(ZoomParameters::default())
            .add_systems(Startup, initialize_camera_system)
            .add_systems(Update, orbit_controller_system.run_if(orbit_enabled));
    }
}

fn orbit_enabled(toggles: Res<ViewToggles>) -> bool {
    toggles.orbit_enabled
}

pub(crate) fn initialize_camera_system(
    mut commands: Commands,
    focus: Res<GoalFocus>,
) {
    // The rig sits on the focus point; panning moves the rig, orbiting moves the camera within it
    let rig_trans = Transform::from_translation(focus.0);
    let cam_trans = Transform::from_translation(START_POSITION - focus.0).looking_at(Vec3::ZERO, Vec3::Y);

    let rig = commands.spawn_empty()
        .insert(rig_trans)
        .insert(Visibility::default())
        .insert(Name::new("CameraRig"))
        .insert(CameraRig)
        .id();

    commands.spawn_empty()
        .insert(Transform::default())
        .insert(Name::new("CameraFocus"))
        .insert(CameraFocus)
        .set_parent(rig);

    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(cam_trans)
        .insert(Name::new("MainCamera"))
        .insert(MainCamera)
        .set_parent(rig);
}

/// Maps a zoom position onto (horizontal distance, height) relative to the focus.
#[derive(Resource)]
pub(crate) struct ZoomParameters {
    curve: Option<CubicCurve<Vec2>>,
    position: f32,
}

impl Default for ZoomParameters {
    fn default() -> Self {
        let points = vec![
            Vec2::new(5.0, 2.0),
            Vec2::new(20.0, 4.0),
            Vec2::new(60.0, 6.0),
            Vec2::new(109.0, 7.0),
            Vec2::new(160.0, 30.0),
            Vec2::new(220.0, 80.0),
        ];
        let curve = CubicCardinalSpline::new(0.5, points).to_curve().ok();

        ZoomParameters {
            curve,
            position: 3.0,
        }
    }
}

impl ZoomParameters {
    fn scroll(&mut self, amount: f32) -> Option<Vec2> {
        let curve = self.curve.as_ref()?;
        let max = curve.segments().len() as f32;
        self.position = (self.position + amount).clamp(0.0, max);
        Some(curve.position(self.position))
    }
}

fn orbit_controller_system(
    mut rig_query: Query<&mut Transform, (With<CameraRig>, Without<MainCamera>, Without<CameraFocus>)>,
    focus_query: Query<&Transform, (With<CameraFocus>, Without<MainCamera>, Without<CameraRig>)>,
    mut camera_query: Query<&mut Transform, (With<MainCamera>, Without<CameraFocus>, Without<CameraRig>)>,
    mut cursor_moved_events: EventReader<CursorMoved>,
    mut mouse_wheel_events: EventReader<MouseWheel>,
    drags: Res<DragStates>,
    mut zoom_parameters: ResMut<ZoomParameters>,
) {
    let Ok(focus_trans) = focus_query.get_single() else {
        return;
    };
    let Ok(mut cam_trans) = camera_query.get_single_mut() else {
        return;
    };
    let Ok(mut rig_trans) = rig_query.get_single_mut() else {
        return;
    };

    let scroll: f32 = mouse_wheel_events.read().map(|event| -event.y * ZOOM_SENSITIVITY).sum();
    if scroll != 0.0 {
        if let Some(sample) = zoom_parameters.scroll(scroll) {
            let back = cam_trans.rotation * Vec3::Z;
            let back_xz = Vec3::new(back.x, 0.0, back.z).normalize_or_zero();
            cam_trans.translation = focus_trans.translation + Vec3::Y * sample.y + back_xz * sample.x;
            cam_trans.look_at(focus_trans.translation, Vec3::Y);
        }
    }

    for event in cursor_moved_events.read() {
        let Some(delta) = event.delta else {
            continue;
        };

        if drags.rotate.is_dragging() {
            let offset = cam_trans.translation - focus_trans.translation;
            let distance = (offset.x.powi(2) + offset.z.powi(2)).sqrt();
            let angle = offset.z.atan2(offset.x) + delta.x * ROTATE_SENSITIVITY;
            cam_trans.translation = Vec3::new(
                focus_trans.translation.x + distance * angle.cos(),
                cam_trans.translation.y,
                focus_trans.translation.z + distance * angle.sin(),
            );
            cam_trans.look_at(focus_trans.translation, Vec3::Y);
        } else if drags.pan.is_dragging() {
            let forward = cam_trans.rotation * Vec3::Z;
            let right = cam_trans.rotation * Vec3::X;
            let forward_xz = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
            let right_xz = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();
            rig_trans.translation -= (right_xz * delta.x + forward_xz * delta.y) * PAN_SENSITIVITY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_stays_on_the_curve() {
        let mut zoom = ZoomParameters::default();

        let near = zoom.scroll(-100.0).unwrap();
        assert_eq!(zoom.position, 0.0);

        let far = zoom.scroll(100.0).unwrap();
        assert!(zoom.position > 0.0);
        assert!(far.x > near.x);
    }
}
