use super::Color;
use serde::Deserialize;
use serde::Serialize;

/// A single point. Empty iff `count == 0`, in which case `color` is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    color: Option<Color>,
    count: u8,
}

impl Point {
    pub const fn empty() -> Self {
        Self {
            color: None,
            count: 0,
        }
    }
    pub const fn stack(color: Color, count: u8) -> Self {
        match count {
            0 => Self::empty(),
            _ => Self {
                color: Some(color),
                count,
            },
        }
    }
    pub fn color(&self) -> Option<Color> {
        self.color
    }
    pub fn count(&self) -> u8 {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    /// Holds at least one checker of `color`.
    pub fn holds(&self, color: Color) -> bool {
        self.count > 0 && self.color == Some(color)
    }
    /// A lone checker that can be hit.
    pub fn is_blot(&self) -> bool {
        self.count == 1
    }
    pub fn is_consistent(&self) -> bool {
        (self.count == 0) == self.color.is_none()
    }

    pub(crate) fn push(&mut self, color: Color) {
        debug_assert!(self.is_empty() || self.holds(color), "mixed stack");
        self.color = Some(color);
        self.count += 1;
    }
    pub(crate) fn pop(&mut self, color: Color) {
        debug_assert!(self.holds(color), "lifting from empty or foreign point");
        self.count = self.count.saturating_sub(1);
        if self.count == 0 {
            self.color = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_point_has_no_color() {
        assert!(Point::empty().is_consistent());
        assert_eq!(Point::stack(Color::White, 0), Point::empty());
    }
    #[test]
    fn popping_last_checker_clears_color() {
        let mut point = Point::stack(Color::Black, 1);
        assert!(point.is_blot());
        point.pop(Color::Black);
        assert!(point.is_empty());
        assert_eq!(point.color(), None);
        assert!(point.is_consistent());
    }
    #[test]
    fn push_extends_stack() {
        let mut point = Point::empty();
        point.push(Color::White);
        point.push(Color::White);
        assert!(point.holds(Color::White));
        assert!(!point.holds(Color::Black));
        assert_eq!(point.count(), 2);
    }
}
