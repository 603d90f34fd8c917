// app/state.rs - Core Session State
//
// This module defines the authoring session: the marker registry, the frame
// sequence with its cursor, and the interaction mode. The GUI, renderer and
// exporter all read from one `Session` passed to them explicitly.

use std::fmt;

use log::{debug, info};

use crate::color::LedColor;
use crate::constants;

/// A point on the canvas, in pixels from its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// A placed virtual LED
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// 1-based, assigned in placement order
    pub number: u32,
    pub position: Position,
    /// Color most recently assigned to this marker, in any frame
    pub color: LedColor,
}

impl Marker {
    /// Zero-based strip address
    pub fn led_index(&self) -> u32 {
        self.number - 1
    }
}

/// Per-marker colors for one frame, in the order they were first set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    led_states: Vec<(u32, LedColor)>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, number: u32) -> Option<&LedColor> {
        self.led_states
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, color)| color)
    }

    /// Set a marker's color; an existing entry keeps its position
    pub fn set(&mut self, number: u32, color: LedColor) {
        match self.led_states.iter_mut().find(|(n, _)| *n == number) {
            Some(entry) => entry.1 = color,
            None => self.led_states.push((number, color)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &LedColor)> {
        self.led_states.iter().map(|(n, color)| (*n, color))
    }

    pub fn len(&self) -> usize {
        self.led_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.led_states.is_empty()
    }
}

/// Append-only list of frames with a bounds-checked cursor.
/// Never empty: frame 0 always exists.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    current: usize,
}

impl Default for FrameSequence {
    fn default() -> Self {
        Self {
            frames: vec![Frame::new()],
            current: 0,
        }
    }
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Frame {
        &self.frames[self.current]
    }

    fn current_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.current]
    }

    fn first_mut(&mut self) -> &mut Frame {
        &mut self.frames[0]
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Append an empty frame and move the cursor onto it
    pub fn push_empty(&mut self) {
        self.frames.push(Frame::new());
        self.current = self.frames.len() - 1;
    }

    /// Returns false (and stays put) at frame 0
    pub fn step_back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Returns false (and stays put) at the last frame
    pub fn step_forward(&mut self) -> bool {
        if self.current + 1 >= self.frames.len() {
            return false;
        }
        self.current += 1;
        true
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Canvas clicks place new markers
    #[default]
    Place,
    /// Canvas clicks pick a marker to recolor in the current frame
    Edit,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::Place, Mode::Edit]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Place => write!(f, "Place Mode"),
            Mode::Edit => write!(f, "Edit Mode"),
        }
    }
}

/// What a canvas click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Place mode: a marker with this number was created
    Placed(u32),
    /// Edit mode: this marker was hit and should be offered for recoloring
    Picked(u32),
    /// Edit mode: no marker within the pick radius
    Missed,
}

/// Registry index of a marker number; numbers are dense from 1
fn registry_index(number: u32) -> Option<usize> {
    usize::try_from(number.checked_sub(1)?).ok()
}

/// The single owner of all authoring state
#[derive(Debug, Clone)]
pub struct Session {
    markers: Vec<Marker>,
    frames: FrameSequence,
    mode: Mode,
    pick_radius: f32,
    /// Marker picked in edit mode, waiting for a color or a cancel
    pending_edit: Option<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_pick_radius(constants::marker::PICK_RADIUS)
    }

    /// Negative (or NaN) radii select nothing
    pub fn with_pick_radius(pick_radius: f32) -> Self {
        Self {
            markers: Vec::new(),
            frames: FrameSequence::default(),
            mode: Mode::default(),
            pick_radius: pick_radius.max(0.0),
            pending_edit: None,
        }
    }

    pub fn pick_radius(&self) -> f32 {
        self.pick_radius
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, number: u32) -> Option<&Marker> {
        self.markers.get(registry_index(number)?)
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    pub fn current_frame_index(&self) -> usize {
        self.frames.current_index()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("Mode changed to {}", mode);
            self.cancel_edit();
        }
        self.mode = mode;
    }

    /// Dispatch a canvas click according to the current mode.
    /// A picked marker becomes the pending edit.
    pub fn click(&mut self, position: Position) -> ClickOutcome {
        match self.mode {
            Mode::Place => ClickOutcome::Placed(self.place_marker(position)),
            Mode::Edit => match self.pick_marker(position) {
                Some(number) => {
                    self.begin_edit(number);
                    ClickOutcome::Picked(number)
                }
                None => ClickOutcome::Missed,
            },
        }
    }

    /// Marker waiting for a color, if any
    pub fn pending_edit(&self) -> Option<u32> {
        self.pending_edit
    }

    /// Hold `number` until a color is submitted or the pick is cancelled.
    /// Returns false for an unknown marker.
    pub fn begin_edit(&mut self, number: u32) -> bool {
        if self.marker(number).is_none() {
            return false;
        }
        debug!("Editing LED {} in frame {}", number, self.frames.current_index());
        self.pending_edit = Some(number);
        true
    }

    /// Apply `color` to the pending marker in the current frame.
    /// Returns false when nothing was pending.
    pub fn submit_edit(&mut self, color: LedColor) -> bool {
        match self.pending_edit.take() {
            Some(number) => self.set_color(number, color),
            None => false,
        }
    }

    /// Drop the pending pick without touching any frame
    pub fn cancel_edit(&mut self) -> Option<u32> {
        let cancelled = self.pending_edit.take();
        if let Some(number) = cancelled {
            debug!("Color pick for LED {} cancelled", number);
        }
        cancelled
    }

    /// Create the next marker at `position`, seeding frame 0 with the default color
    pub fn place_marker(&mut self, position: Position) -> u32 {
        let number = self.markers.len() as u32 + 1;
        let color = LedColor::default();

        self.frames.first_mut().set(number, color.clone());
        self.markers.push(Marker {
            number,
            position,
            color,
        });

        info!("Placed LED {} at ({}, {})", number, position.x, position.y);
        number
    }

    /// Nearest marker whose center is within the pick radius; ties go to the lower number
    pub fn pick_marker(&self, position: Position) -> Option<u32> {
        let limit = self.pick_radius * self.pick_radius;
        let mut best: Option<(&Marker, f32)> = None;

        for marker in &self.markers {
            let dist = marker.position.distance_squared(position);
            if dist > limit {
                continue;
            }
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((marker, dist)),
            }
        }

        best.map(|(marker, _)| marker.number)
    }

    /// Color a marker shows in the current frame
    pub fn color_in_current_frame(&self, number: u32) -> LedColor {
        self.frames
            .current()
            .get(number)
            .cloned()
            .unwrap_or_default()
    }

    /// Record `color` for marker `number` in the current frame only.
    /// Returns false for an unknown marker.
    pub fn set_color(&mut self, number: u32, color: LedColor) -> bool {
        let index = self.frames.current_index();
        let Some(marker) = registry_index(number).and_then(|i| self.markers.get_mut(i)) else {
            debug!("Ignoring color for unknown LED {}", number);
            return false;
        };

        marker.color = color.clone();
        info!("LED {} set to {} in frame {}", number, color, index);
        self.frames.current_mut().set(number, color);
        true
    }

    pub fn add_frame(&mut self) {
        self.cancel_edit();
        self.frames.push_empty();
        info!(
            "Added frame {} ({} total)",
            self.frames.current_index(),
            self.frames.len()
        );
    }

    pub fn prev_frame(&mut self) -> bool {
        self.cancel_edit();
        let moved = self.frames.step_back();
        if moved {
            debug!("Showing frame {}", self.frames.current_index());
        }
        moved
    }

    pub fn next_frame(&mut self) -> bool {
        self.cancel_edit();
        let moved = self.frames.step_forward();
        if moved {
            debug!("Showing frame {}", self.frames.current_index());
        }
        moved
    }
}
