//! Reported window state flags

use bitflags::bitflags;

bitflags! {
    /// State bits reported by [`crate::WindowPeer::state`] and accepted by
    /// [`crate::WindowPeer::set_state`].
    ///
    /// `MINIMIZED` and `MAXIMIZED` are independent bits and may be reported
    /// together. `NORMAL` is reported only when neither of the other two
    /// applies; a dead window reports the empty set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowState: u32 {
        /// Neither minimized nor maximized
        const NORMAL = 1 << 0;
        /// Minimized (or hidden) to the task list
        const MINIMIZED = 1 << 1;
        /// Zoomed to the maximum usable frame
        const MAXIMIZED = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_distinct_from_other_bits() {
        assert!(!WindowState::NORMAL.intersects(WindowState::MINIMIZED | WindowState::MAXIMIZED));
    }

    #[test]
    fn minimized_and_maximized_can_combine() {
        let state = WindowState::MINIMIZED | WindowState::MAXIMIZED;
        assert!(state.contains(WindowState::MINIMIZED));
        assert!(state.contains(WindowState::MAXIMIZED));
        assert!(!state.contains(WindowState::NORMAL));
    }
}
