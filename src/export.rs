// export.rs - NeoPixel Script Generation
//
// Serializes the session into a standalone CircuitPython script that sets up a
// strip with one pixel per marker and loops over the captured frames forever.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::app::{Frame, Session};
use crate::constants;

/// Parameters of the generated script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output file, relative paths resolve against the working directory
    pub output_path: PathBuf,
    /// `board` pin name driving the strip
    pub data_pin: String,
    pub brightness: f32,
    /// Seconds each frame stays on the strip
    pub frame_interval_secs: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(constants::export::OUTPUT_FILE),
            data_pin: constants::export::DATA_PIN.to_string(),
            brightness: constants::export::BRIGHTNESS,
            frame_interval_secs: constants::export::FRAME_INTERVAL_SECS,
        }
    }
}

impl ExportConfig {
    /// Reject values that would break the generated Python
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.data_pin.is_empty()
                && self
                    .data_pin
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_'),
            "Invalid data pin {:?}: expected letters, digits or '_'",
            self.data_pin
        );
        ensure!(
            (0.0..=1.0).contains(&self.brightness),
            "Invalid brightness {}: expected 0.0 to 1.0",
            self.brightness
        );
        ensure!(
            self.frame_interval_secs.is_finite() && self.frame_interval_secs >= 0.0,
            "Invalid frame interval {}: expected a non-negative number of seconds",
            self.frame_interval_secs
        );
        Ok(())
    }
}

/// One `{index: (r, g, b), ...}` literal; LED indices are zero-based
fn frame_literal(frame: &Frame) -> String {
    let entries: Vec<String> = frame
        .iter()
        .map(|(number, color)| format!("{}: {}", number - 1, color.rgb()))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Build the playback script for every frame in the session
pub fn generate_script(session: &Session, config: &ExportConfig) -> String {
    let mut code = format!(
        "import time\n\
         import board\n\
         import neopixel\n\
         \n\
         pixels = neopixel.NeoPixel(board.{}, {}, brightness={})\n\
         \n\
         frames = [\n",
        config.data_pin,
        session.markers().len(),
        config.brightness,
    );

    for frame in session.frames().iter() {
        // Writing into a String cannot fail
        let _ = writeln!(code, "    {},", frame_literal(frame));
    }

    let _ = write!(
        code,
        "    ]\n\
         \n\
         def show_frame(strip, frame):\n\
         \x20   for led_number, color in frame.items():\n\
         \x20       strip[led_number] = color\n\
         \x20   strip.show()\n\
         \n\
         while True:\n\
         \x20   for frame in frames:\n\
         \x20       show_frame(pixels, frame)\n\
         \x20       time.sleep({})  # Adjust the delay as needed\n",
        config.frame_interval_secs,
    );

    code
}

/// Write a generated script to disk, replacing any previous export
pub fn write_script(path: &Path, script: &str) -> Result<()> {
    fs::write(path, script)
        .with_context(|| format!("Failed to write LED script to {}", path.display()))?;
    info!("LED script written to {:?} ({} bytes)", path, script.len());
    Ok(())
}

impl Session {
    /// Generate the script, write it to `config.output_path`, and hand it back
    pub fn export(&self, config: &ExportConfig) -> Result<String> {
        config.validate()?;
        let script = generate_script(self, config);
        write_script(&config.output_path, &script)?;
        info!(
            "Exported {} LEDs across {} frames",
            self.markers().len(),
            self.frames().len()
        );
        Ok(script)
    }
}
