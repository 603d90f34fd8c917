// constants.rs - Application-wide Constants
//
// Centralized constants for canvas geometry, marker drawing and export defaults.

/// Drawing surface dimensions
pub mod canvas {
    /// Canvas width in pixels
    pub const WIDTH: f32 = 500.0;
    /// Canvas height in pixels
    pub const HEIGHT: f32 = 500.0;
}

/// Marker drawing and hit-testing
pub mod marker {
    /// Radius of the drawn LED circle
    pub const RADIUS: f32 = 5.0;
    /// Vertical distance from the LED center to its number label
    pub const LABEL_OFFSET: f32 = 10.0;
    /// Label font size
    pub const LABEL_SIZE: f32 = 10.0;
    /// Edit clicks farther than this from every marker center select nothing
    pub const PICK_RADIUS: f32 = 10.0;
    /// Color every marker starts with, and the color of unset markers in later frames
    pub const DEFAULT_COLOR: &str = "green";
}

/// Generated script defaults
pub mod export {
    /// Where the generated script is written, relative to the working directory
    pub const OUTPUT_FILE: &str = "led_show_code.py";
    /// `board` pin the strip's data line is attached to
    pub const DATA_PIN: &str = "D18";
    /// Strip brightness passed to `neopixel.NeoPixel`
    pub const BRIGHTNESS: f32 = 0.2;
    /// Pause between frames in seconds
    pub const FRAME_INTERVAL_SECS: f64 = 1.0;
    /// Decoded color used for anything that isn't `#RRGGBB`
    pub const FALLBACK_RGB: (u8, u8, u8) = (0, 255, 0);
}

/// Main window dimensions
pub mod window {
    /// Default window width
    pub const DEFAULT_WIDTH: f32 = 560.0;
    /// Default window height
    pub const DEFAULT_HEIGHT: f32 = 860.0;
}
