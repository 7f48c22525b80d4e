//! Screen module: The double-buffered screen state.
//!
//! - [`Screen`]: front/back buffers, cursor, tab policy and committed size
//! - [`TabBehaviour`]: how tab characters expand into spaces
//! - [`ResizeHandle`]: thread-safe slot for pending resizes
//! - [`ScreenConfig`]: construction-time settings
//!
//! # Frame lifecycle
//!
//! ```text
//!   resize producer ──request──▶ ResizeHandle
//!                                     │
//!   painter: do_resize_if_necessary ◀─┘
//!            draw via set_character / text_graphics  ──▶ back buffer
//!            diff front vs back, emit output
//!            sync_front_buffer                       ──▶ front buffer
//! ```

mod config;
mod resize;
#[allow(clippy::module_inception)]
mod screen;
mod tab;

pub use config::ScreenConfig;
pub use resize::ResizeHandle;
pub use screen::Screen;
pub use tab::TabBehaviour;
