//! # Window Peer
//!
//! A native windowing peer layer: it binds a managed UI-framework window
//! object to a host toolkit's top-level window and root content view.
//!
//! ## Features
//!
//! - **Property surface**: bounds, visibility, state and resizability
//!   requests translated into toolkit calls
//! - **Notification surface**: toolkit move/resize/minimize/zoom/close
//!   callbacks forwarded to the managed side, fire-and-forget
//! - **Two-phase close**: close requests are reported, never acted on;
//!   teardown happens only through an explicit dispose
//! - **Dead-object tolerance**: every operation degrades to a documented
//!   default once the underlying window is gone
//! - **Backend Agnostic**: the toolkit is reached through a trait seam, so
//!   the peer can be driven by a real window system or a scripted fake
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use window_peer::{PeerEvents, WindowPeer};
//!
//! struct FrameworkWindow;
//!
//! impl PeerEvents for FrameworkWindow {
//!     fn window_moved(&self, x: i32, y: i32) { println!("moved to {x},{y}"); }
//!     fn window_resized(&self, w: i32, h: i32) { println!("resized to {w}x{h}"); }
//!     fn window_minimized(&self, minimized: bool) { println!("minimized: {minimized}"); }
//!     fn window_closing(&self) { println!("close requested"); }
//!     fn window_maximized(&self, maximized: bool) { println!("maximized: {maximized}"); }
//! }
//!
//! # fn open_toolkit_window() -> Box<dyn window_peer::toolkit::ToolkitWindow> { unimplemented!() }
//! let framework_window: Arc<dyn PeerEvents> = Arc::new(FrameworkWindow);
//! let peer = WindowPeer::new(open_toolkit_window(), Arc::downgrade(&framework_window));
//! peer.set_visible(true);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod geometry;
pub mod logging;
pub mod state;
pub mod toolkit;

mod peer;

pub use config::{ConfigError, WindowConfig};
pub use geometry::{Point, Rectangle, ToolkitFrame};
pub use peer::{PeerEvents, WindowPeer};
pub use state::WindowState;

/// Common imports for peer users
pub mod prelude {
    pub use crate::{
        config::WindowConfig,
        geometry::{Point, Rectangle},
        peer::{PeerEvents, WindowPeer},
        state::WindowState,
        toolkit::{ToolkitView, ToolkitWindow, WindowLook},
    };
}
