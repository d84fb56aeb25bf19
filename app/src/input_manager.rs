use bevy::app::Plugin;
use bevy::input::ButtonState;
use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;

pub(crate) struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<DragStates>()
            .add_systems(PreUpdate, drag_tracking_system.after(bevy::input::InputSystem));
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DragState {
    #[default]
    Released,
    // cursor position where the drag started
    Dragging(Vec2),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    fn update(&mut self, state: ButtonState, cursor: Vec2) {
        *self = match state {
            ButtonState::Pressed => DragState::Dragging(cursor),
            ButtonState::Released => DragState::Released,
        };
    }
}

/// Mouse buttons the orbit camera cares about: right rotates, middle pans.
#[derive(Default, Resource)]
pub(crate) struct DragStates {
    pub rotate: DragState,
    pub pan: DragState,
    pub cursor_position: Vec2,
}

fn drag_tracking_system(
    mut cursor_moved_events: EventReader<CursorMoved>,
    mut mouse_button_input_events: EventReader<MouseButtonInput>,
    mut drags: ResMut<DragStates>,
) {
    if let Some(event) = cursor_moved_events.read().last() {
        drags.cursor_position = event.position;
    }

    for event in mouse_button_input_events.read() {
        let cursor = drags.cursor_position;
        match event.button {
            MouseButton::Right => drags.rotate.update(event.state, cursor),
            MouseButton::Middle => drags.pan.update(event.state, cursor),
            _ => {}
        }
    }
}
