//! histeq - Grayscale conversion and histogram equalization
//!
//! Loads an image, converts it to grayscale, builds its 256-bucket
//! intensity histogram and equalizes it, with every step driven by a
//! discrete [`Command`] on an [`ImageSession`].
//!
//! # Example
//!
//! ```
//! use histeq::{Command, GrayscaleCheck, ImageSession, PixelBuffer, color};
//!
//! let black = color::compose_gray(0, 255);
//! let white = color::compose_gray(255, 255);
//! let image = PixelBuffer::from_data(2, 2, vec![black, black, black, white]).unwrap();
//!
//! let mut session = ImageSession::from_buffer(image, GrayscaleCheck::Strict);
//! session.apply(Command::Equalize).unwrap();
//! assert_eq!(session.histogram().get(191), 3);
//! assert_eq!(session.histogram().get(255), 1);
//! ```

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod session;

// Re-export core types (primary data structures used everywhere)
pub use histeq_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use histeq_color as gray;
pub use histeq_filter as filter;
pub use histeq_io as io;

pub use command::Command;
pub use config::{CheckMode, Config, DisplayConfig};
pub use display::render_frame;
pub use error::{SessionError, SessionResult};
pub use session::ImageSession;
