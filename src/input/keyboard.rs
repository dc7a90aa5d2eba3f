//! Keyboard polling
//!
//! Turns macroquad's per-frame key state into queued `InputEvent`s.
//! WASD and the arrow keys both move; a direction is released only when
//! every key bound to it is up.

use macroquad::prelude::*;

use super::{Action, Direction, InputEvent, InputQueue};

/// Keys bound to each movement direction
pub fn direction_keys(direction: Direction) -> &'static [KeyCode] {
    match direction {
        Direction::Up => &[KeyCode::W, KeyCode::Up],
        Direction::Down => &[KeyCode::S, KeyCode::Down],
        Direction::Left => &[KeyCode::A, KeyCode::Left],
        Direction::Right => &[KeyCode::D, KeyCode::Right],
    }
}

/// Key that triggers each command
pub fn action_key(action: Action) -> KeyCode {
    match action {
        Action::Save => KeyCode::F5,
        Action::Load => KeyCode::F9,
        Action::CycleResolution => KeyCode::F2,
        Action::Quit => KeyCode::Escape,
    }
}

const ACTIONS: [Action; 4] = [Action::Save, Action::Load, Action::CycleResolution, Action::Quit];

/// Edge detector between macroquad's key state and the input queue
#[derive(Debug, Default)]
pub struct KeyboardSource {
    /// Direction state last reported, indexed like `Direction::ALL`
    held: [bool; 4],
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before draining the queue
    pub fn poll(&mut self, queue: &mut InputQueue) {
        self.update(is_key_down, is_key_pressed, queue);
        if is_quit_requested() {
            queue.push(InputEvent::Command(Action::Quit));
        }
    }

    fn update(
        &mut self,
        key_down: impl Fn(KeyCode) -> bool,
        key_pressed: impl Fn(KeyCode) -> bool,
        queue: &mut InputQueue,
    ) {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            let down = direction_keys(*direction).iter().any(|k| key_down(*k));
            if down != self.held[i] {
                self.held[i] = down;
                queue.push(if down {
                    InputEvent::Pressed(*direction)
                } else {
                    InputEvent::Released(*direction)
                });
            }
        }

        for action in ACTIONS {
            if key_pressed(action_key(action)) {
                queue.push(InputEvent::Command(action));
            }
        }
    }
}
