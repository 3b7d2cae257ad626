//! Toolkit abstraction seam
//!
//! The peer never talks to a window system directly; it goes through the
//! [`ToolkitWindow`] and [`ToolkitView`] traits. This keeps the peer logic
//! backend-agnostic and lets tests drive it with a scripted fake instead of a
//! live display connection.
//!
//! The trait vocabulary mirrors the host toolkit, not the framework: frames
//! use inclusive coordinates, resizing takes integer spans, zoom is a toggle
//! with no matching getter, and visibility nests (a window hidden twice needs
//! two shows).

use std::any::Any;

use bitflags::bitflags;

use crate::geometry::ToolkitFrame;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(feature = "glfw-backend")]
pub mod glfw;

bitflags! {
    /// Toolkit window style flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WindowFlags: u32 {
        /// The user may not resize the window
        const NOT_RESIZABLE = 1 << 0;
        /// The window has no minimize control
        const NOT_MINIMIZABLE = 1 << 1;
        /// The window has no zoom control
        const NOT_ZOOMABLE = 1 << 2;
    }
}

/// Border and title-bar treatment requested at window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowLook {
    /// Decorated: title bar, border and window controls
    #[default]
    Titled,
    /// Undecorated: bare content rectangle
    NoBorder,
}

/// Opaque token for the content view's backing surface
///
/// Surface management is out of scope for the peer; the token is handed to
/// the rendering layer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableHandle(u64);

impl DrawableHandle {
    /// Wrap a raw backend surface identifier
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw backend surface identifier
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A top-level toolkit window and its message-loop lock
///
/// Every mutating or reading call other than `view` assumes the caller holds
/// the window lock via [`try_lock`](Self::try_lock). The lock is reentrant
/// and dies with the window: once [`quit`](Self::quit) has run, `try_lock`
/// fails forever, which is how the peer detects a dead object.
pub trait ToolkitWindow {
    /// Acquire the window lock; `false` means the window is gone
    fn try_lock(&self) -> bool;

    /// Release one level of the window lock
    fn unlock(&self);

    /// Current frame in inclusive toolkit coordinates
    fn frame(&self) -> ToolkitFrame;

    /// Move the top-left corner to `(x, y)`
    fn move_to(&self, x: i32, y: i32);

    /// Resize to the given inclusive integer spans
    fn resize_to(&self, width: i32, height: i32);

    /// Current style flags
    fn flags(&self) -> WindowFlags;

    /// Replace the style flags
    fn set_flags(&self, flags: WindowFlags);

    /// Whether the window is hidden (shows nest: see [`hide`](Self::hide))
    fn is_hidden(&self) -> bool;

    /// Whether the window is minimized to the task list
    fn is_minimized(&self) -> bool;

    /// Minimize or un-minimize the window
    fn minimize(&self, minimized: bool);

    /// Toggle the zoomed (maximized) state
    ///
    /// The toolkit offers no getter for the zoomed state; callers that need
    /// it must track the toggles themselves.
    fn zoom(&self);

    /// Decrement the hide nesting; the window becomes visible at zero
    fn show(&self);

    /// Increment the hide nesting
    fn hide(&self);

    /// Attach the root content view as the window's only child
    fn attach_view(&self);

    /// Detach the root content view so window teardown cannot release it twice
    fn detach_view(&self);

    /// The root content view
    fn view(&self) -> &dyn ToolkitView;

    /// Terminate the window's message loop and release the native resource
    ///
    /// The window lock dies with the loop; it is not released afterwards.
    fn quit(&self);
}

/// The root content view embedded in a [`ToolkitWindow`]
pub trait ToolkitView {
    /// Current view frame in window-local inclusive coordinates
    fn frame(&self) -> ToolkitFrame;

    /// Move and resize the view within its window
    fn set_frame(&self, frame: ToolkitFrame);

    /// Give the view input focus
    fn focus(&self);

    /// Backing surface token, if the backend exposes one
    fn drawable(&self) -> Option<DrawableHandle>;

    /// Concrete-type access for managed-side embedding
    fn as_any(&self) -> &dyn Any;
}
