//! Options applied to engine-initiated focus moves.

/// Options passed through to the host when the engine moves focus.
///
/// Mirrors the platform's focus options surface. The engine never inspects
/// these; it only carries them from the lock configuration to the port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusOptions {
    /// Ask the host not to scroll the moved-to element into view.
    pub prevent_scroll: bool,
}

impl FocusOptions {
    /// Options requesting a scroll-free focus move.
    #[inline]
    pub const fn no_scroll() -> Self {
        Self {
            prevent_scroll: true,
        }
    }
}
