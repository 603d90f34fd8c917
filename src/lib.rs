//! LedPainter - LED Animation Authoring Library
//!
//! This library holds everything that doesn't need a window: the session
//! model, color decoding, frame rendering and script export. The binary is a
//! thin iced front end over it.

pub mod app;
pub mod color;
pub mod constants;
pub mod export;
pub mod renderer;
pub mod settings;

// Re-export commonly used types
pub use app::{ClickOutcome, Frame, FrameSequence, Marker, Mode, Position, Session};
pub use color::{hex_to_rgb, LedColor, Rgb};
pub use export::{generate_script, write_script, ExportConfig};
pub use renderer::{frame_view, RenderedMarker};
pub use settings::Settings;
