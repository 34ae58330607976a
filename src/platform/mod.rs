//! Platform abstraction layer
//!
//! Handles host differences for input: the host delivers discrete
//! key-down/key-up events, the game turns them into bound actions.

use glam::Vec2;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Up,
    F1,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowDown" => Some(Key::Down),
            "ArrowUp" => Some(Key::Up),
            "F1" => Some(Key::F1),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }

    fn slot(&self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Down => 2,
            Key::Up => 3,
            Key::F1 => 4,
            Key::Escape => 5,
        }
    }
}

/// Host-side key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// When a binding fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// On the press edge
    Pressed,
    /// Every tick while held (and once on the press edge)
    Down,
    /// On the release edge
    Released,
}

/// Movement direction for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Down => Vec2::NEG_Y,
            Direction::Up => Vec2::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Stop,
    ShowHelp,
    Exit,
}

/// A registered key listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: Key,
    pub state: ButtonState,
    pub action: Action,
    /// Shown in the control help (None = not listed)
    pub description: Option<&'static str>,
}

impl Binding {
    fn new(key: Key, state: ButtonState, action: Action) -> Self {
        Self {
            key,
            state,
            action,
            description: None,
        }
    }

    fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// The game's controls, in registration order
pub fn default_bindings() -> Vec<Binding> {
    use ButtonState::*;
    vec![
        Binding::new(Key::Left, Down, Action::Move(Direction::Left)).described("Liiku vasemmalle"),
        Binding::new(Key::Left, Released, Action::Stop),
        Binding::new(Key::Right, Down, Action::Move(Direction::Right)).described("Liiku oikealle"),
        Binding::new(Key::Right, Released, Action::Stop),
        Binding::new(Key::Down, Down, Action::Move(Direction::Down)).described("Liiku alas"),
        Binding::new(Key::Down, Released, Action::Stop),
        Binding::new(Key::Up, Down, Action::Move(Direction::Up)).described("Liiku ylös"),
        Binding::new(Key::Up, Released, Action::Stop),
        Binding::new(Key::F1, Pressed, Action::ShowHelp).described("Näytä ohjeet"),
        Binding::new(Key::Escape, Pressed, Action::Exit).described("Lopeta peli"),
    ]
}

/// Which keys are currently held
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: [bool; 6],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event. Returns false for a press of an already-held key
    /// (host auto-repeat), which should not fire press bindings again.
    pub fn update(&mut self, key: Key, state: KeyState) -> bool {
        let slot = key.slot();
        let down = state == KeyState::Pressed;
        let changed = self.held[slot] != down;
        self.held[slot] = down;
        changed
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.slot()]
    }

    pub fn release_all(&mut self) {
        self.held = [false; 6];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom() {
        assert_eq!(Key::from_dom("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_dom("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_dom("a"), None);
    }

    #[test]
    fn test_keyboard_tracks_held_keys() {
        let mut kb = Keyboard::new();
        assert!(kb.update(Key::Left, KeyState::Pressed));
        assert!(!kb.update(Key::Left, KeyState::Pressed));
        assert!(kb.is_held(Key::Left));
        assert!(kb.update(Key::Left, KeyState::Released));
        assert!(!kb.is_held(Key::Left));
        assert!(!kb.is_held(Key::F1));
    }

    #[test]
    fn test_auto_repeat_of_press_keys_is_not_an_edge() {
        let mut kb = Keyboard::new();
        assert!(kb.update(Key::F1, KeyState::Pressed));
        assert!(!kb.update(Key::F1, KeyState::Pressed));
        assert!(kb.update(Key::F1, KeyState::Released));
        assert!(kb.update(Key::Escape, KeyState::Pressed));
        assert!(!kb.update(Key::Escape, KeyState::Pressed));
        kb.release_all();
        assert!(!kb.is_held(Key::Escape));
    }

    #[test]
    fn test_every_direction_key_has_move_and_stop() {
        let bindings = default_bindings();
        for key in [Key::Left, Key::Right, Key::Down, Key::Up] {
            assert!(bindings.iter().any(|b| b.key == key
                && b.state == ButtonState::Down
                && matches!(b.action, Action::Move(_))));
            assert!(bindings
                .iter()
                .any(|b| b.key == key && b.state == ButtonState::Released && b.action == Action::Stop));
        }
    }
}
