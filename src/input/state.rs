//! Input state management
//!
//! Key events are queued as they arrive and drained once at the start of
//! each tick. The tick itself only ever sees an immutable `InputState`.

use std::collections::HashSet;

use super::{Action, Direction};

/// Snapshot of held movement directions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: HashSet<Direction>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given directions held
    pub fn with_held(directions: &[Direction]) -> Self {
        Self {
            held: directions.iter().copied().collect(),
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held.contains(&direction)
    }

    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        self.held.iter().copied()
    }

    pub fn is_idle(&self) -> bool {
        self.held.is_empty()
    }

    fn apply(&mut self, event: InputEvent) -> Option<Action> {
        match event {
            InputEvent::Pressed(d) => {
                self.held.insert(d);
                None
            }
            InputEvent::Released(d) => {
                self.held.remove(&d);
                None
            }
            InputEvent::Command(action) => Some(action),
        }
    }
}

/// Something the input source observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Direction),
    Released(Direction),
    Command(Action),
}

/// FIFO of events collected between ticks
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Iterate over queued events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply all queued events to `state` in arrival order.
    ///
    /// Returns the commands that were queued, in order. The queue is empty afterwards.
    pub fn drain_into(&mut self, state: &mut InputState) -> Vec<Action> {
        self.events
            .drain(..)
            .filter_map(|event| state.apply(event))
            .collect()
    }
}
