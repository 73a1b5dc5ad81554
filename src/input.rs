use crate::math::Vector2;

/// Logical key identifiers the core recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Shift,
    Control,
}

impl Key {
    pub const COUNT: usize = 7;

    const fn index(self) -> usize {
        self as usize
    }
}

/// One frame's worth of input: key-down state per recognized key plus the
/// cursor position in device units.
///
/// Built once per frame by an [`InputProvider`](crate::traits::InputProvider)
/// and read-only inside the core. Sustained presses read as repeated downs on
/// consecutive frames; there is no debouncing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    keys: [bool; Key::COUNT],
    cursor: Vector2,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style key press, convenient for tests and scripted input.
    pub fn with_key(mut self, key: Key) -> Self {
        self.keys[key.index()] = true;
        self
    }

    pub fn with_cursor(mut self, x: f32, y: f32) -> Self {
        self.cursor = Vector2::new(x, y);
        self
    }

    pub fn set_key(&mut self, key: Key, down: bool) {
        self.keys[key.index()] = down;
    }

    pub fn set_cursor(&mut self, cursor: Vector2) {
        self.cursor = cursor;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    pub fn cursor(&self) -> Vector2 {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_nothing_down() {
        let snap = InputSnapshot::new();
        for key in [
            Key::W,
            Key::A,
            Key::S,
            Key::D,
            Key::Space,
            Key::Shift,
            Key::Control,
        ] {
            assert!(!snap.is_down(key));
        }
    }

    #[test]
    fn test_builder_sets_keys_and_cursor() {
        let snap = InputSnapshot::new()
            .with_key(Key::W)
            .with_key(Key::Shift)
            .with_cursor(320.0, 240.0);
        assert!(snap.is_down(Key::W));
        assert!(snap.is_down(Key::Shift));
        assert!(!snap.is_down(Key::S));
        assert_eq!(snap.cursor(), Vector2::new(320.0, 240.0));
    }

    #[test]
    fn test_set_key_toggles() {
        let mut snap = InputSnapshot::new();
        snap.set_key(Key::D, true);
        assert!(snap.is_down(Key::D));
        snap.set_key(Key::D, false);
        assert!(!snap.is_down(Key::D));
    }
}
