// renderer/mod.rs - Frame Rendering
//
// Turns the session's marker registry and current frame into a flat list of
// colored markers. The iced canvas program in `canvas` only draws that list.

mod canvas;

pub use canvas::LedCanvas;

use crate::app::{Position, Session};
use crate::color::{LedColor, Rgb};

/// One marker as it should appear for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedMarker {
    pub number: u32,
    pub position: Position,
    pub color: Rgb,
}

/// Every marker in registry order, colored from the current frame.
/// Markers without an entry in that frame get the default color.
pub fn frame_view(session: &Session) -> Vec<RenderedMarker> {
    let frame = session.frames().current();
    let default_color = LedColor::default();

    session
        .markers()
        .iter()
        .map(|marker| RenderedMarker {
            number: marker.number,
            position: marker.position,
            color: frame.get(marker.number).unwrap_or(&default_color).rgb(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_markers_render_in_default_color() {
        let mut session = Session::new();
        session.place_marker(Position::new(10.0, 20.0));
        session.place_marker(Position::new(30.0, 40.0));
        session.add_frame();
        session.set_color(2, LedColor::new("#102030"));

        let view = frame_view(&session);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].number, 1);
        assert_eq!(view[0].position, Position::new(10.0, 20.0));
        assert_eq!(view[0].color, Rgb::fallback());
        assert_eq!(view[1].color, Rgb::new(0x10, 0x20, 0x30));
    }

    #[test]
    fn view_follows_the_frame_cursor() {
        let mut session = Session::new();
        session.place_marker(Position::new(10.0, 20.0));
        session.add_frame();
        session.set_color(1, LedColor::new("#FF0000"));

        assert_eq!(frame_view(&session)[0].color, Rgb::new(255, 0, 0));
        session.prev_frame();
        assert_eq!(frame_view(&session)[0].color, Rgb::new(0, 255, 0));
        session.next_frame();
        assert_eq!(frame_view(&session)[0].color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn empty_session_renders_nothing() {
        assert!(frame_view(&Session::new()).is_empty());
    }
}
