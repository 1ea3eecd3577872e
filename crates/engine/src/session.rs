//! Focus tracking for a grid of blank editors.

/// Which of N blank editors currently holds focus.
///
/// One instance per open exercise view; owned, not global. Not synchronized:
/// a view drives its own session from one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSession {
    blank_count: usize,
    current_index: usize,
}

impl NavigationSession {
    /// Start a session over `blank_count` blanks, focused on blank 0.
    #[must_use]
    pub fn new(blank_count: usize) -> Self {
        Self {
            blank_count,
            current_index: 0,
        }
    }

    /// Move focus to the next blank; no-op at the last one.
    pub fn next(&mut self) {
        if self.current_index + 1 < self.blank_count {
            self.current_index += 1;
        }
    }

    /// Move focus to the previous blank; no-op at blank 0.
    pub fn previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Jump straight to `index`, for pointer-driven focus changes; no-op when
    /// out of range.
    pub fn focus(&mut self, index: usize) {
        if index < self.blank_count {
            self.current_index = index;
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.blank_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_inside_bounds() {
        let mut s = NavigationSession::new(3);
        s.previous();
        assert_eq!(s.current_index(), 0);
        s.next();
        s.next();
        s.next();
        assert_eq!(s.current_index(), 2);
        s.previous();
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn focus_ignores_out_of_range_targets() {
        let mut s = NavigationSession::new(4);
        s.focus(2);
        assert_eq!(s.current_index(), 2);
        s.focus(9);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn zero_blank_session_never_moves() {
        let mut s = NavigationSession::new(0);
        s.next();
        s.previous();
        s.focus(0);
        assert_eq!(s.current_index(), 0);
    }
}
