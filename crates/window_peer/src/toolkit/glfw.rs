//! GLFW-backed toolkit adapter
//!
//! Maps the toolkit seam onto the `glfw` crate. GLFW is main-thread-only and
//! has no per-window message-loop lock, so the looper lock degenerates to a
//! liveness check: `try_lock` fails once the window has been quit.
//!
//! GLFW reports sizes directly rather than inclusive spans, so this adapter
//! applies the span conversion at its own boundary: `resize_to` adds one,
//! the event pump subtracts one before handing spans to the peer.
//!
//! GLFW also reports minimize and maximize transitions as absolute state,
//! and fires them for peer-initiated changes as well as user ones. The peer
//! expects toggle-only hooks that fire once per genuine transition, so the
//! adapter shadows the last-known state and drops events that merely echo
//! a change the peer itself requested.

use std::cell::RefCell;
use std::rc::Rc;

use glfw::{WindowEvent, WindowHint, WindowMode};
use thiserror::Error;

use crate::config::WindowConfig;
use crate::geometry::ToolkitFrame;
use crate::peer::WindowPeer;
use crate::toolkit::{DrawableHandle, ToolkitView, ToolkitWindow, WindowFlags, WindowLook};

/// Toolkit adapter errors
#[derive(Error, Debug)]
pub enum GlfwError {
    /// GLFW initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window creation failed
    #[error("window creation failed")]
    CreationFailed,
}

struct Inner {
    glfw: glfw::Glfw,
    window: Option<glfw::PWindow>,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    flags: WindowFlags,
    // Last state forwarded to (or requested by) the peer; used to tell
    // genuine transitions apart from echoes of peer-initiated ones.
    minimized: bool,
    maximized: bool,
}

/// Forward an absolute-state event only when it changes the shadowed state.
fn reconcile(shadow: &mut bool, reported: bool) -> bool {
    let changed = *shadow != reported;
    *shadow = reported;
    changed
}

/// A GLFW top-level window behind the [`ToolkitWindow`] seam
///
/// Clone-handles share the same underlying window; the application keeps one
/// handle for pumping events while the peer owns another.
#[derive(Clone)]
pub struct GlfwWindow {
    inner: Rc<RefCell<Inner>>,
    view: GlfwView,
}

impl GlfwWindow {
    /// Create a hidden window per the given configuration
    pub fn open(config: &WindowConfig) -> Result<Self, GlfwError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| GlfwError::InitializationFailed)?;

        // The peer drives visibility explicitly; start hidden. No client API:
        // rendering is the drawable consumer's business, not the peer's.
        glfw.window_hint(WindowHint::Visible(false));
        glfw.window_hint(WindowHint::Decorated(config.look() == WindowLook::Titled));
        glfw.window_hint(WindowHint::Resizable(config.resizable));
        glfw.window_hint(WindowHint::ClientApi(glfw::ClientApiHint::NoApi));

        let (mut window, events) = glfw
            .create_window(
                config.width.max(1) as u32,
                config.height.max(1) as u32,
                &config.title,
                WindowMode::Windowed,
            )
            .ok_or(GlfwError::CreationFailed)?;

        window.set_pos(config.x, config.y);
        window.set_pos_polling(true);
        window.set_size_polling(true);
        window.set_iconify_polling(true);
        window.set_maximize_polling(true);
        window.set_close_polling(true);
        window.set_focus_polling(true);

        let mut flags = WindowFlags::empty();
        flags.set(WindowFlags::NOT_RESIZABLE, !config.resizable);

        let inner = Rc::new(RefCell::new(Inner {
            glfw,
            window: Some(window),
            events,
            flags,
            minimized: false,
            maximized: false,
        }));
        Ok(Self {
            view: GlfwView {
                inner: Rc::clone(&inner),
            },
            inner,
        })
    }

    /// Pump pending GLFW events into the peer's inbound hooks
    ///
    /// Close requests honor the peer's two-phase protocol: the peer is asked,
    /// always answers "not closed", and the window's should-close flag is
    /// reset so only an explicit dispose tears the window down.
    pub fn dispatch_events(&self, peer: &WindowPeer) {
        self.inner.borrow_mut().glfw.poll_events();
        // Drain before dispatching: the hooks may re-enter this window.
        let pending: Vec<(f64, WindowEvent)> = {
            let inner = self.inner.borrow();
            glfw::flush_messages(&inner.events).collect()
        };
        for (_, event) in pending {
            match event {
                WindowEvent::Pos(x, y) => peer.frame_moved(x, y),
                WindowEvent::Size(width, height) => peer.frame_resized(width - 1, height - 1),
                WindowEvent::Iconify(minimized) => {
                    let changed = reconcile(&mut self.inner.borrow_mut().minimized, minimized);
                    if changed {
                        peer.minimize_changed(minimized);
                    }
                }
                WindowEvent::Maximize(maximized) => {
                    let changed = reconcile(&mut self.inner.borrow_mut().maximized, maximized);
                    if changed {
                        peer.zoom_changed();
                    }
                }
                WindowEvent::Close => {
                    if !peer.quit_requested() {
                        if let Some(window) = self.inner.borrow_mut().window.as_mut() {
                            window.set_should_close(false);
                        }
                    }
                }
                WindowEvent::Focus(active) => peer.window_activated(active),
                _ => {}
            }
        }
    }
}

impl ToolkitWindow for GlfwWindow {
    fn try_lock(&self) -> bool {
        self.inner.borrow().window.is_some()
    }

    fn unlock(&self) {}

    fn frame(&self) -> ToolkitFrame {
        let inner = self.inner.borrow();
        inner.window.as_ref().map_or_else(ToolkitFrame::default, |window| {
            let (x, y) = window.get_pos();
            let (width, height) = window.get_size();
            ToolkitFrame::new(x, y, x + width - 1, y + height - 1)
        })
    }

    fn move_to(&self, x: i32, y: i32) {
        if let Some(window) = self.inner.borrow_mut().window.as_mut() {
            window.set_pos(x, y);
        }
    }

    fn resize_to(&self, width: i32, height: i32) {
        if let Some(window) = self.inner.borrow_mut().window.as_mut() {
            window.set_size(width + 1, height + 1);
        }
    }

    fn flags(&self) -> WindowFlags {
        self.inner.borrow().flags
    }

    fn set_flags(&self, flags: WindowFlags) {
        let mut inner = self.inner.borrow_mut();
        inner.flags = flags;
        if let Some(window) = inner.window.as_mut() {
            window.set_resizable(!flags.contains(WindowFlags::NOT_RESIZABLE));
        }
    }

    fn is_hidden(&self) -> bool {
        self.inner
            .borrow()
            .window
            .as_ref()
            .map_or(true, |window| !window.is_visible())
    }

    fn is_minimized(&self) -> bool {
        self.inner
            .borrow()
            .window
            .as_ref()
            .is_some_and(|window| window.is_iconified())
    }

    fn minimize(&self, minimized: bool) {
        let mut inner = self.inner.borrow_mut();
        // The peer has already notified; the GLFW event for this transition
        // is an echo and must not be forwarded again.
        inner.minimized = minimized;
        if let Some(window) = inner.window.as_mut() {
            if minimized {
                window.iconify();
            } else {
                window.restore();
            }
        }
    }

    fn zoom(&self) {
        let mut inner = self.inner.borrow_mut();
        let Some(window) = inner.window.as_mut() else {
            return;
        };
        let maximized = !window.is_maximized();
        if maximized {
            window.maximize();
        } else {
            window.restore();
        }
        inner.maximized = maximized;
    }

    fn show(&self) {
        if let Some(window) = self.inner.borrow_mut().window.as_mut() {
            window.show();
        }
    }

    fn hide(&self) {
        if let Some(window) = self.inner.borrow_mut().window.as_mut() {
            window.hide();
        }
    }

    fn attach_view(&self) {
        // The client area is the root view; it exists with the window.
    }

    fn detach_view(&self) {
        // Nothing to detach: the client area cannot outlive the window.
    }

    fn view(&self) -> &dyn ToolkitView {
        &self.view
    }

    fn quit(&self) {
        // Dropping the handle destroys the native window; try_lock fails
        // from here on.
        self.inner.borrow_mut().window.take();
    }
}

/// The window's client area behind the [`ToolkitView`] seam
#[derive(Clone)]
pub struct GlfwView {
    inner: Rc<RefCell<Inner>>,
}

impl ToolkitView for GlfwView {
    fn frame(&self) -> ToolkitFrame {
        let inner = self.inner.borrow();
        inner.window.as_ref().map_or_else(ToolkitFrame::default, |window| {
            let (width, height) = window.get_size();
            ToolkitFrame::new(0, 0, width - 1, height - 1)
        })
    }

    fn set_frame(&self, _frame: ToolkitFrame) {
        // The client area tracks the window frame; it cannot be repositioned.
    }

    fn focus(&self) {
        if let Some(window) = self.inner.borrow_mut().window.as_mut() {
            window.focus();
        }
    }

    fn drawable(&self) -> Option<DrawableHandle> {
        self.inner
            .borrow()
            .window
            .as_ref()
            .map(|window| DrawableHandle::new(window.window_ptr() as u64))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
