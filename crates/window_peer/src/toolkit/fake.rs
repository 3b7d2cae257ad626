//! Scripted in-memory toolkit for peer tests
//!
//! `FakeWindow` and `FakeView` are cheap clone-handles over shared state, so
//! a test can move one handle into the peer and keep another for inspection.
//! The fake reproduces the toolkit behaviors the peer has to defend against:
//! a reentrant lock that dies with the window, nested hide counts, and a zoom
//! toggle with no state getter.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::ToolkitFrame;
use crate::toolkit::{DrawableHandle, ToolkitView, ToolkitWindow, WindowFlags};

#[derive(Debug)]
struct WindowData {
    frame: ToolkitFrame,
    flags: WindowFlags,
    hide_count: u32,
    minimized: bool,
    zoomed: bool,
    zoom_count: u32,
    lock_depth: u32,
    alive: bool,
    view_attached: bool,
    log: Vec<&'static str>,
}

/// Clone-handle over a fake top-level window
#[derive(Clone)]
pub(crate) struct FakeWindow {
    data: Rc<RefCell<WindowData>>,
    view: FakeView,
}

impl FakeWindow {
    /// A live fake window with a zero-size frame, hidden once (new toolkit
    /// windows are created hidden)
    pub(crate) fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(WindowData {
                frame: ToolkitFrame::default(),
                flags: WindowFlags::empty(),
                hide_count: 1,
                minimized: false,
                zoomed: false,
                zoom_count: 0,
                lock_depth: 0,
                alive: true,
                view_attached: false,
                log: Vec::new(),
            })),
            view: FakeView::new(),
        }
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.data.borrow().lock_depth > 0
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.data.borrow().alive
    }

    pub(crate) fn is_zoomed(&self) -> bool {
        self.data.borrow().zoomed
    }

    pub(crate) fn zoom_count(&self) -> u32 {
        self.data.borrow().zoom_count
    }

    pub(crate) fn is_view_attached(&self) -> bool {
        self.data.borrow().view_attached
    }

    pub(crate) fn window_flags(&self) -> WindowFlags {
        self.data.borrow().flags
    }

    pub(crate) fn hide_count(&self) -> u32 {
        self.data.borrow().hide_count
    }

    pub(crate) fn log(&self) -> Vec<&'static str> {
        self.data.borrow().log.clone()
    }

    pub(crate) fn fake_view(&self) -> FakeView {
        self.view.clone()
    }

    /// Preset the frame without going through the peer
    pub(crate) fn place(&self, frame: ToolkitFrame) {
        self.data.borrow_mut().frame = frame;
    }
}

impl ToolkitWindow for FakeWindow {
    fn try_lock(&self) -> bool {
        let mut data = self.data.borrow_mut();
        if !data.alive {
            return false;
        }
        data.lock_depth += 1;
        true
    }

    fn unlock(&self) {
        let mut data = self.data.borrow_mut();
        data.lock_depth = data.lock_depth.saturating_sub(1);
    }

    fn frame(&self) -> ToolkitFrame {
        self.data.borrow().frame
    }

    fn move_to(&self, x: i32, y: i32) {
        let mut data = self.data.borrow_mut();
        let width = data.frame.integer_width();
        let height = data.frame.integer_height();
        data.frame = ToolkitFrame::new(x, y, x + width, y + height);
        data.log.push("move_to");
    }

    fn resize_to(&self, width: i32, height: i32) {
        let mut data = self.data.borrow_mut();
        data.frame.right = data.frame.left + width;
        data.frame.bottom = data.frame.top + height;
        data.log.push("resize_to");
    }

    fn flags(&self) -> WindowFlags {
        self.data.borrow().flags
    }

    fn set_flags(&self, flags: WindowFlags) {
        self.data.borrow_mut().flags = flags;
    }

    fn is_hidden(&self) -> bool {
        self.data.borrow().hide_count > 0
    }

    fn is_minimized(&self) -> bool {
        self.data.borrow().minimized
    }

    fn minimize(&self, minimized: bool) {
        let mut data = self.data.borrow_mut();
        data.minimized = minimized;
        data.log.push("minimize");
    }

    fn zoom(&self) {
        let mut data = self.data.borrow_mut();
        data.zoomed = !data.zoomed;
        data.zoom_count += 1;
        data.log.push("zoom");
    }

    fn show(&self) {
        let mut data = self.data.borrow_mut();
        data.hide_count = data.hide_count.saturating_sub(1);
        data.log.push("show");
    }

    fn hide(&self) {
        let mut data = self.data.borrow_mut();
        data.hide_count += 1;
        data.log.push("hide");
    }

    fn attach_view(&self) {
        let mut data = self.data.borrow_mut();
        data.view_attached = true;
        data.log.push("attach_view");
    }

    fn detach_view(&self) {
        let mut data = self.data.borrow_mut();
        data.view_attached = false;
        data.log.push("detach_view");
    }

    fn view(&self) -> &dyn ToolkitView {
        &self.view
    }

    fn quit(&self) {
        let mut data = self.data.borrow_mut();
        data.alive = false;
        data.lock_depth = 0;
        data.log.push("quit");
    }
}

#[derive(Debug)]
struct ViewData {
    frame: ToolkitFrame,
    focus_count: u32,
}

/// Clone-handle over a fake content view
#[derive(Clone)]
pub(crate) struct FakeView {
    data: Rc<RefCell<ViewData>>,
}

impl FakeView {
    fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(ViewData {
                frame: ToolkitFrame::default(),
                focus_count: 0,
            })),
        }
    }

    pub(crate) fn focus_count(&self) -> u32 {
        self.data.borrow().focus_count
    }

    pub(crate) fn view_frame(&self) -> ToolkitFrame {
        self.data.borrow().frame
    }
}

impl ToolkitView for FakeView {
    fn frame(&self) -> ToolkitFrame {
        self.data.borrow().frame
    }

    fn set_frame(&self, frame: ToolkitFrame) {
        self.data.borrow_mut().frame = frame;
    }

    fn focus(&self) {
        self.data.borrow_mut().focus_count += 1;
    }

    fn drawable(&self) -> Option<DrawableHandle> {
        Some(DrawableHandle::new(Rc::as_ptr(&self.data) as usize as u64))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
