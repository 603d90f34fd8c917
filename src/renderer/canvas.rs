// renderer/canvas.rs - iced Canvas Program for the LED Board
//
// Draws the rendered markers on a white board and reports left clicks in
// canvas coordinates through a message constructor.

use iced::alignment;
use iced::mouse;
use iced::widget::canvas::{event, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Theme};

use super::RenderedMarker;
use crate::app::Position;
use crate::constants::marker;

/// The clickable drawing surface
pub struct LedCanvas<Message> {
    markers: Vec<RenderedMarker>,
    on_click: fn(Position) -> Message,
}

impl<Message> LedCanvas<Message> {
    pub fn new(markers: Vec<RenderedMarker>, on_click: fn(Position) -> Message) -> Self {
        Self { markers, on_click }
    }
}

fn to_iced(marker: &RenderedMarker) -> Color {
    Color::from_rgb8(marker.color.r, marker.color.g, marker.color.b)
}

impl<Message> Program<Message> for LedCanvas<Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(point) = cursor.position_in(bounds) {
                let message = (self.on_click)(Position::new(point.x, point.y));
                return (event::Status::Captured, Some(message));
            }
        }
        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        for led in &self.markers {
            let center = Point::new(led.position.x, led.position.y);
            let circle = Path::circle(center, marker::RADIUS);
            frame.fill(&circle, to_iced(led));
            frame.stroke(&circle, Stroke::default().with_width(1.0).with_color(Color::BLACK));

            frame.fill_text(Text {
                content: led.number.to_string(),
                position: Point::new(center.x, center.y - marker::LABEL_OFFSET),
                color: Color::BLACK,
                size: Pixels(marker::LABEL_SIZE),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
