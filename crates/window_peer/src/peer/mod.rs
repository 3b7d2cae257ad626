//! The window peer itself
//!
//! [`WindowPeer`] owns one toolkit window (with its embedded content view)
//! and bridges it to a managed-side window object in both directions:
//! property and command requests flow in through the peer's methods,
//! lifecycle callbacks flow back out through a [`PeerEvents`] sink.
//!
//! # Lock discipline
//!
//! Every operation that touches toolkit state first acquires the window's
//! reentrant lock and releases it before returning. A failed acquisition
//! means the window is dead; reads then return zero-valued defaults and
//! writes are silently skipped, never an error.
//!
//! Notifications are always delivered with the lock *released*: the managed
//! side may re-enter the peer from inside an event handler (for example call
//! [`WindowPeer::dispose`] from the closing notification), and holding the
//! lock across that boundary would deadlock. After the handler returns the
//! lock is reacquired; if that fails the peer was torn down during the
//! callback and the rest of the operation is abandoned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Weak;

use log::error;

use crate::geometry::{Point, Rectangle, ToolkitFrame};
use crate::state::WindowState;
use crate::toolkit::{DrawableHandle, ToolkitView, ToolkitWindow, WindowFlags};


/// Notification sink on the managed-framework side
///
/// All notifications are fire-and-forget; the peer expects no acknowledgment
/// and ignores whatever the handler does, with one exception: a handler may
/// re-enter the peer, which is why every method takes `&self`.
pub trait PeerEvents {
    /// The window moved to a new top-left position
    fn window_moved(&self, x: i32, y: i32);

    /// The window was resized; width and height are half-open pixel sizes
    fn window_resized(&self, width: i32, height: i32);

    /// The window was minimized or un-minimized
    fn window_minimized(&self, minimized: bool);

    /// The user asked to close the window
    ///
    /// The peer never closes the window on its own; the managed side must
    /// call [`WindowPeer::dispose`] if it wants the close to proceed.
    fn window_closing(&self);

    /// The window was zoomed or un-zoomed
    fn window_maximized(&self, maximized: bool);
}

/// Native peer for one managed-framework window
///
/// The peer exclusively owns its toolkit window; the window owns the content
/// view for its whole lifetime. The back-reference to the managed side is a
/// [`Weak`] handle used only to route notifications; it plays no part in
/// the peer's lifetime.
pub struct WindowPeer {
    window: Box<dyn ToolkitWindow>,
    events: Weak<dyn PeerEvents>,
    // The toolkit exposes zoom only as a toggle action with no getter, so
    // the zoomed state is tracked here. Flipped exactly once per toggle.
    maximized: AtomicBool,
}

impl WindowPeer {
    /// Bind a freshly created toolkit window to a managed-side sink
    ///
    /// Attaches the content view and sizes it to fill the window's current
    /// frame. The window is expected to be newly created: hidden, unlocked,
    /// not yet zoomed.
    pub fn new(window: Box<dyn ToolkitWindow>, events: Weak<dyn PeerEvents>) -> Self {
        let peer = Self {
            window,
            events,
            maximized: AtomicBool::new(false),
        };
        if peer.window.try_lock() {
            peer.window.attach_view();
            // After this initial frame, the view tracks the window size.
            let frame = peer.window.frame();
            peer.window.view().set_frame(ToolkitFrame::new(
                0,
                0,
                frame.integer_width(),
                frame.integer_height(),
            ));
            peer.window.unlock();
        }
        peer
    }

    /// Window frame as a framework rectangle; zero rectangle when dead
    pub fn bounds(&self) -> Rectangle {
        self.locked(|window| window.frame())
            .map_or(Rectangle::ZERO, ToolkitFrame::to_rectangle)
    }

    /// Top-left corner of the window
    pub fn location(&self) -> Point {
        self.bounds().location()
    }

    /// Top-left corner in screen coordinates
    ///
    /// The toolkit frame already is in screen space; no extra translation.
    pub fn location_on_screen(&self) -> Point {
        self.location()
    }

    /// Current state bits; the empty set when dead
    ///
    /// `NORMAL` is reported only when neither `MINIMIZED` nor `MAXIMIZED`
    /// applies. A hidden window counts as minimized.
    pub fn state(&self) -> WindowState {
        self.locked(|window| {
            let mut state = WindowState::empty();
            if window.is_hidden() || window.is_minimized() {
                state |= WindowState::MINIMIZED;
            }
            if self.maximized.load(Ordering::Relaxed) {
                state |= WindowState::MAXIMIZED;
            }
            if state.is_empty() {
                state |= WindowState::NORMAL;
            }
            state
        })
        .unwrap_or_else(WindowState::empty)
    }

    /// Move and resize the window
    pub fn set_bounds(&self, bounds: Rectangle) {
        if !self.window.try_lock() {
            return;
        }
        self.window.move_to(bounds.x, bounds.y);
        // Back to the toolkit's inclusive span convention.
        self.window
            .resize_to(bounds.width - 1, bounds.height - 1);
        self.window.unlock();
    }

    /// Allow or forbid user resizing
    pub fn set_resizable(&self, resizable: bool) {
        if !self.window.try_lock() {
            return;
        }
        let mut flags = self.window.flags();
        flags.set(WindowFlags::NOT_RESIZABLE, !resizable);
        self.window.set_flags(flags);
        self.window.unlock();
    }

    /// Apply a requested state-bit set
    ///
    /// Rules run in fixed order: minimize, zoom, then normal. Normal cancels
    /// the other two. Because the zoom step is an unconditional toggle,
    /// requesting `MAXIMIZED | NORMAL` together zooms twice for a net no-op
    /// rather than forcing the zoomed state off; callers must consult
    /// [`state`](Self::state) first to avoid flapping.
    pub fn set_state(&self, state: WindowState) {
        if !self.window.try_lock() {
            return;
        }
        if state.contains(WindowState::MINIMIZED) && !self.minimize_locked(true) {
            return;
        }
        if state.contains(WindowState::MAXIMIZED) && !self.zoom_locked() {
            return;
        }
        if state.contains(WindowState::NORMAL) {
            if !self.minimize_locked(false) {
                return;
            }
            if self.maximized.load(Ordering::Relaxed) && !self.zoom_locked() {
                return;
            }
        }
        self.window.unlock();
    }

    /// Whether the window is currently shown; `false` when dead
    pub fn visible(&self) -> bool {
        self.locked(|window| !window.is_hidden()).unwrap_or(false)
    }

    /// Show or hide the window
    ///
    /// Toolkit show/hide calls nest, so a single call is not guaranteed to
    /// change the hidden flag; loop until it matches the request.
    pub fn set_visible(&self, visible: bool) {
        if !self.window.try_lock() {
            return;
        }
        if visible {
            while self.window.is_hidden() {
                self.window.show();
            }
        } else {
            while !self.window.is_hidden() {
                self.window.hide();
            }
        }
        self.window.unlock();
    }

    /// Tear the window down
    ///
    /// Detaches the content view first so window teardown cannot release it
    /// a second time, then terminates the window's message loop. The lock
    /// dies with the loop, so every later operation sees a dead object.
    pub fn dispose(&self) {
        if !self.window.try_lock() {
            return;
        }
        self.window.detach_view();
        self.window.quit();
    }

    /// Give the window input focus
    ///
    /// Focus belongs to the content view, not the window itself.
    pub fn focus(&self) {
        if !self.window.try_lock() {
            return;
        }
        self.window.view().focus();
        self.window.unlock();
    }

    /// Reparent request: unsupported for a top-level window
    ///
    /// A usage error on the caller's part; logged and ignored.
    pub fn set_parent(&self, _parent: &dyn ToolkitView) {
        error!("attempted to reparent a top-level window; ignoring");
    }

    /// The root content view (no lock required)
    pub fn container(&self) -> &dyn ToolkitView {
        self.window.view()
    }

    /// The content view's backing surface token (no lock required)
    pub fn drawable(&self) -> Option<DrawableHandle> {
        self.window.view().drawable()
    }

    // ---- Inbound toolkit hooks ----
    //
    // All hooks are invoked by the toolkit's message loop with the window
    // lock held. Each releases the lock around the outbound notification and
    // reacquires it before returning control to the toolkit.

    /// The toolkit moved the window to `(x, y)`
    pub fn frame_moved(&self, x: i32, y: i32) {
        self.emit(|events| events.window_moved(x, y));
    }

    /// The toolkit resized the window; arguments are inclusive integer spans
    pub fn frame_resized(&self, width: i32, height: i32) {
        self.emit(|events| events.window_resized(width + 1, height + 1));
    }

    /// The toolkit minimized or un-minimized the window
    pub fn minimize_changed(&self, minimized: bool) {
        self.emit(|events| events.window_minimized(minimized));
    }

    /// The user asked to close the window
    ///
    /// Always answers "not closed": the close decision is deferred to the
    /// managed side, which proceeds by calling [`dispose`](Self::dispose).
    pub fn quit_requested(&self) -> bool {
        self.emit(|events| events.window_closing());
        false
    }

    /// The toolkit toggled the window's zoomed state
    pub fn zoom_changed(&self) {
        let maximized = !self.maximized.fetch_xor(true, Ordering::Relaxed);
        self.emit(|events| events.window_maximized(maximized));
    }

    /// Activation changed; intentionally not forwarded at this layer
    ///
    /// The content view is the right place to report activation, so the peer
    /// swallows the window-level callback.
    pub fn window_activated(&self, _active: bool) {}

    // ---- Internals ----

    /// Run `op` under the window lock; `None` means the window is dead
    fn locked<R>(&self, op: impl FnOnce(&dyn ToolkitWindow) -> R) -> Option<R> {
        if !self.window.try_lock() {
            return None;
        }
        let result = op(self.window.as_ref());
        self.window.unlock();
        Some(result)
    }

    /// Deliver a notification with the lock released, then reacquire it
    ///
    /// Returns `false` when the lock cannot be reacquired, which means the
    /// handler disposed the peer; callers must abandon the operation.
    fn emit(&self, notify: impl FnOnce(&dyn PeerEvents)) -> bool {
        self.window.unlock();
        if let Some(events) = self.events.upgrade() {
            notify(events.as_ref());
        }
        self.window.try_lock()
    }

    /// Notify and apply a minimize while holding the lock
    fn minimize_locked(&self, minimized: bool) -> bool {
        if !self.emit(|events| events.window_minimized(minimized)) {
            return false;
        }
        self.window.minimize(minimized);
        true
    }

    /// Flip the tracked zoom flag, notify, then toggle the toolkit state
    fn zoom_locked(&self) -> bool {
        let maximized = !self.maximized.fetch_xor(true, Ordering::Relaxed);
        if !self.emit(|events| events.window_maximized(maximized)) {
            return false;
        }
        self.window.zoom();
        true
    }
}

impl Drop for WindowPeer {
    fn drop(&mut self) {
        // Dropping without an explicit dispose still releases the native
        // window exactly once; dispose is a no-op on a dead window.
        self.dispose();
    }
}
