//! Slot values and the active slot index

/// Per-slot values plus the focused slot
///
/// `values.len()` is fixed at creation. `active_index` stays inside
/// `[0, len - 1]`, or 0 when there are no slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpState {
    values: Vec<Option<char>>,
    active_index: usize,
}

impl OtpState {
    /// Create `len` empty slots with the first one active
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![None; len],
            active_index: 0,
        }
    }

    /// Build a state from per-slot strings (test and replay convenience)
    ///
    /// Each string is reduced the same way `write` reduces it.
    pub fn from_values<S: AsRef<str>>(values: &[S], active_index: usize) -> Self {
        let mut state = Self::new(values.len());
        for (index, value) in values.iter().enumerate() {
            state.write(index, value.as_ref());
        }
        state.focus_at(active_index);
        state
    }

    /// Number of slots
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the field has zero slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The character stored in a slot, `None` if empty or out of range
    pub fn value(&self, index: usize) -> Option<char> {
        self.values.get(index).copied().flatten()
    }

    pub fn values(&self) -> &[Option<char>] {
        &self.values
    }

    /// Slot values as strings (empty string for an empty slot)
    pub fn value_strings(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| v.map(String::from).unwrap_or_default())
            .collect()
    }

    /// Concatenation of filled slots in slot order
    pub fn code(&self) -> String {
        self.values.iter().flatten().collect()
    }

    /// True when every slot holds a character (and there is at least one)
    pub fn is_complete(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(Option::is_some)
    }

    fn last_index(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Set slot `index` to the last character of `text`
    ///
    /// An empty `text` clears the slot. The last character wins because a
    /// field that already shows a digit reports old + new text on change.
    /// Out-of-range indices are ignored. Returns whether the slot changed.
    pub fn write(&mut self, index: usize, text: &str) -> bool {
        let Some(slot) = self.values.get_mut(index) else {
            tracing::debug!(index, len = self.values.len(), "ignoring out-of-range write");
            return false;
        };
        let next = text.chars().next_back();
        if *slot == next {
            return false;
        }
        *slot = next;
        true
    }

    /// Focus a slot, clamped into range. Returns whether focus moved.
    pub fn focus_at(&mut self, index: usize) -> bool {
        let target = index.min(self.last_index());
        let moved = target != self.active_index;
        self.active_index = target;
        moved
    }

    /// Move focus one slot right; no-op at the last slot
    pub fn focus_next(&mut self) -> bool {
        self.focus_at(self.active_index + 1)
    }

    /// Move focus one slot left; no-op at the first slot
    pub fn focus_prev(&mut self) -> bool {
        self.focus_at(self.active_index.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty_and_focused_on_first() {
        let state = OtpState::new(4);
        assert_eq!(state.len(), 4);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.code(), "");
        assert!(!state.is_complete());
    }

    #[test]
    fn test_write_keeps_last_character() {
        let mut state = OtpState::new(2);
        assert!(state.write(0, "ab"));
        assert_eq!(state.value(0), Some('b'));
    }

    #[test]
    fn test_write_same_value_reports_no_change() {
        let mut state = OtpState::new(2);
        state.write(1, "7");
        assert!(!state.write(1, "7"));
        assert!(!state.write(0, ""));
    }

    #[test]
    fn test_out_of_range_write_is_ignored() {
        let mut state = OtpState::new(2);
        let before = state.clone();
        assert!(!state.write(5, "1"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_zero_slots() {
        let mut state = OtpState::new(0);
        assert!(state.is_empty());
        assert!(!state.focus_next());
        assert!(!state.focus_prev());
        assert!(!state.focus_at(3));
        assert_eq!(state.active_index(), 0);
        assert!(!state.write(0, "1"));
        assert_eq!(state.code(), "");
        assert!(!state.is_complete());
    }

    #[test]
    fn test_focus_at_clamps() {
        let mut state = OtpState::new(4);
        assert!(state.focus_at(10));
        assert_eq!(state.active_index(), 3);
    }

    #[test]
    fn test_from_values_reduces_and_focuses() {
        let state = OtpState::from_values(&["9", "", "ab", ""], 2);
        assert_eq!(state.value_strings(), vec!["9", "", "b", ""]);
        assert_eq!(state.active_index(), 2);
        assert_eq!(state.code(), "9b");
    }
}
