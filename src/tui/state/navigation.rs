//! Wrapping selection over a fixed set of entries
//!
//! Used for menu choices and for focus movement between form fields.

/// Types with a selected index into a list of entries
///
/// Implementors supply the accessors; `next`/`previous` wrap around.
///
/// # Example
/// ```
/// use quiz_app::tui::state::Navigable;
///
/// struct Choices {
///     labels: [&'static str; 2],
///     selected: usize,
/// }
///
/// impl Navigable for Choices {
///     fn len(&self) -> usize {
///         self.labels.len()
///     }
///
///     fn selected(&self) -> usize {
///         self.selected
///     }
///
///     fn set_selected(&mut self, index: usize) {
///         self.selected = index;
///     }
/// }
///
/// let mut choices = Choices { labels: ["Log In", "Register"], selected: 0 };
/// choices.next();
/// assert_eq!(choices.selected(), 1);
/// choices.next();
/// assert_eq!(choices.selected(), 0);
/// ```
pub trait Navigable {
    fn len(&self) -> usize;

    fn selected(&self) -> usize;

    fn set_selected(&mut self, index: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select the following entry, wrapping to the first
    fn next(&mut self) {
        if !self.is_empty() {
            let current = self.selected();
            self.set_selected((current + 1) % self.len());
        }
    }

    /// Select the preceding entry, wrapping to the last
    fn previous(&mut self) {
        if !self.is_empty() {
            let current = self.selected();
            let len = self.len();
            self.set_selected((current + len - 1) % len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Focus {
        fields: usize,
        focused: usize,
    }

    impl Navigable for Focus {
        fn len(&self) -> usize {
            self.fields
        }

        fn selected(&self) -> usize {
            self.focused
        }

        fn set_selected(&mut self, index: usize) {
            self.focused = index;
        }
    }

    #[test]
    fn test_next_wraps_from_last_field() {
        let mut focus = Focus { fields: 5, focused: 4 };
        focus.next();
        assert_eq!(focus.selected(), 0);
    }

    #[test]
    fn test_previous_wraps_from_first_field() {
        let mut focus = Focus { fields: 5, focused: 0 };
        focus.previous();
        assert_eq!(focus.selected(), 4);
    }

    #[test]
    fn test_step_through() {
        let mut focus = Focus { fields: 2, focused: 0 };
        focus.next();
        assert_eq!(focus.selected(), 1);
        focus.previous();
        assert_eq!(focus.selected(), 0);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut focus = Focus { fields: 0, focused: 0 };
        assert!(focus.is_empty());
        focus.next();
        focus.previous();
        assert_eq!(focus.selected(), 0);
    }
}
