use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Left,
    Down,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Input intent: the set of directions held this frame.
/// Transient: rebuilt in the Input stage, purged in the Cleanup stage.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent(u8);

impl MoveIntent {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, dir: MoveDirection) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn insert(&mut self, dir: MoveDirection) {
        self.0 |= dir.bit();
    }

    pub fn remove(&mut self, dir: MoveDirection) {
        self.0 &= !dir.bit();
    }

    /// Add `dir` when `held`, drop it otherwise.
    pub fn set(&mut self, dir: MoveDirection, held: bool) {
        if held {
            self.insert(dir);
        } else {
            self.remove(dir);
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = MoveDirection> {
        MoveDirection::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<MoveDirection> for MoveIntent {
    fn from_iter<I: IntoIterator<Item = MoveDirection>>(iter: I) -> Self {
        let mut intent = Self::empty();
        for dir in iter {
            intent.insert(dir);
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut intent = MoveIntent::empty();
        intent.insert(MoveDirection::Up);
        intent.insert(MoveDirection::Up);
        assert_eq!(intent.iter().count(), 1);
        assert!(intent.contains(MoveDirection::Up));
    }

    #[test]
    fn releasing_one_key_keeps_the_others() {
        let mut intent: MoveIntent = [MoveDirection::Up, MoveDirection::Right].into_iter().collect();
        intent.set(MoveDirection::Right, false);
        intent.set(MoveDirection::Down, false);

        assert!(intent.contains(MoveDirection::Up));
        assert!(!intent.contains(MoveDirection::Right));
        assert_eq!(intent, [MoveDirection::Up].into_iter().collect());
    }

    #[test]
    fn order_does_not_matter() {
        let a: MoveIntent = [MoveDirection::Left, MoveDirection::Down].into_iter().collect();
        let b: MoveIntent = [MoveDirection::Down, MoveDirection::Left].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn removing_absent_direction_is_noop() {
        let mut intent = MoveIntent::empty();
        intent.remove(MoveDirection::Left);
        assert!(intent.is_empty());
    }
}
