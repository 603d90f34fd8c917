//! LedPainter - Iced UI
//!
//! Click to place LEDs, switch to edit mode to paint them per frame, then
//! generate a NeoPixel script that plays the frames back on a real strip.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced::widget::{
    button, canvas::Canvas, column, container, horizontal_space, radio, row, scrollable, text,
    vertical_space, Row,
};
use iced::{keyboard, Alignment, Color, Element, Font, Length, Padding, Size, Subscription, Task, Theme};

// Color picker from iced_aw
use iced_aw::iced_fonts::REQUIRED_FONT_BYTES;
use iced_aw::ColorPicker;

use log::{debug, error, info};

use ledpainter::constants;
use ledpainter::renderer::{frame_view, LedCanvas};
use ledpainter::{ClickOutcome, Mode, Position, Rgb, Session, Settings};

// Color palette (dark chrome around a white board)
mod colors {
    use iced::Color;

    pub const BG_PRIMARY: Color = Color::from_rgb(0.09, 0.09, 0.12);
    pub const BG_SECONDARY: Color = Color::from_rgb(0.12, 0.12, 0.16);
    pub const BG_HOVER: Color = Color::from_rgb(0.18, 0.18, 0.24);

    pub const ACCENT: Color = Color::from_rgb(0.35, 0.55, 0.95);
    pub const SUCCESS: Color = Color::from_rgb(0.2, 0.75, 0.45);
    pub const SUCCESS_HOVER: Color = Color::from_rgb(0.25, 0.85, 0.55);

    pub const TEXT_PRIMARY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.95);
    pub const TEXT_SECONDARY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
    pub const TEXT_MUTED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.4);

    pub const BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.1);
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
enum Message {
    SetMode(Mode),
    CanvasClicked(Position),

    // Color picker submit/cancel for the marker being edited
    ColorSubmitted(Color),
    ColorCancelled,

    AddFrame,
    PrevFrame,
    NextFrame,

    GenerateCode,
}

// ============================================================================
// Application State
// ============================================================================

struct LedPainterApp {
    session: Session,
    settings: Settings,

    /// Most recent export, shown in the preview pane
    last_script: Option<String>,
    status_message: String,
}

impl LedPainterApp {
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        info!("LedPainter starting, output file: {:?}", settings.export.output_path);

        let app = Self {
            session: Session::with_pick_radius(settings.pick_radius),
            settings,
            last_script: None,
            status_message: "Click the board to place LEDs".to_string(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!(
            "LED Control UI - Frame {}/{}",
            self.session.current_frame_index() + 1,
            self.session.frames().len()
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SetMode(mode) => self.session.set_mode(mode),

            Message::CanvasClicked(position) => {
                if self.session.pending_edit().is_some() {
                    // Picker is modal
                    return Task::none();
                }
                match self.session.click(position) {
                    ClickOutcome::Placed(number) => {
                        self.status_message = format!("Placed LED {}", number);
                    }
                    ClickOutcome::Picked(number) => {
                        debug!("Opening color picker for LED {}", number);
                    }
                    ClickOutcome::Missed => {
                        debug!("Edit click at ({}, {}) hit no LED", position.x, position.y);
                    }
                }
            }

            Message::ColorSubmitted(color) => {
                if let Some(number) = self.session.pending_edit() {
                    let rgb = Rgb::new(
                        (color.r * 255.0).round() as u8,
                        (color.g * 255.0).round() as u8,
                        (color.b * 255.0).round() as u8,
                    );
                    if self.session.submit_edit(rgb.into()) {
                        self.status_message = format!(
                            "LED {} set to {} in frame {}",
                            number,
                            rgb.to_hex(),
                            self.session.current_frame_index() + 1
                        );
                    }
                }
            }
            Message::ColorCancelled => {
                self.session.cancel_edit();
            }

            Message::AddFrame => self.session.add_frame(),
            Message::PrevFrame => {
                self.session.prev_frame();
            }
            Message::NextFrame => {
                self.session.next_frame();
            }

            Message::GenerateCode => match self.session.export(&self.settings.export) {
                Ok(script) => {
                    println!("{}", script);
                    self.status_message =
                        format!("Code written to {}", self.settings.export.output_path.display());
                    self.last_script = Some(script);
                }
                Err(e) => {
                    error!("{:#}", e);
                    self.status_message = format!("Error: {:#}", e);
                }
            },
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let board = self.view_board();
        let controls = self.view_controls();
        let preview = self.view_preview();

        container(
            column![
                text("LED Control UI").size(18).color(colors::TEXT_PRIMARY),
                board,
                controls,
                text(&self.status_message).size(13).color(colors::TEXT_SECONDARY),
                preview,
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| container::Style {
            background: Some(iced::Background::Color(colors::BG_PRIMARY)),
            ..Default::default()
        })
        .into()
    }

    fn view_board(&self) -> Element<'_, Message> {
        let board = Canvas::new(LedCanvas::new(
            frame_view(&self.session),
            Message::CanvasClicked,
        ))
        .width(Length::Fixed(constants::canvas::WIDTH))
        .height(Length::Fixed(constants::canvas::HEIGHT));

        let editing = self.session.pending_edit();
        let picker_color = editing
            .map(|number| self.session.color_in_current_frame(number).rgb())
            .unwrap_or_else(Rgb::fallback);

        ColorPicker::new(
            editing.is_some(),
            Color::from_rgb8(picker_color.r, picker_color.g, picker_color.b),
            board,
            Message::ColorCancelled,
            Message::ColorSubmitted,
        )
        .into()
    }

    fn view_controls(&self) -> Element<'_, Message> {
        let selected = Some(self.session.mode());
        let modes = Row::with_children(Mode::all().iter().map(|&mode| {
            radio(mode.to_string(), mode, selected, Message::SetMode)
                .size(14)
                .text_size(13)
                .into()
        }))
        .spacing(24);

        let frames = self.session.frames();
        let frame_info = text(format!(
            "Frame {} / {}   |   {} LEDs",
            frames.current_index() + 1,
            frames.len(),
            self.session.markers().len()
        ))
        .size(12)
        .color(colors::TEXT_MUTED);

        let frame_row = row![
            action_button("Add Frame", Message::AddFrame),
            action_button("Previous Frame", Message::PrevFrame),
            action_button("Next Frame", Message::NextFrame),
        ]
        .spacing(8);

        let generate = button(text("Generate Code").size(13).color(colors::BG_PRIMARY))
            .padding(Padding::from([8, 20]))
            .style(|_, s| {
                let bg = match s {
                    button::Status::Hovered | button::Status::Pressed => colors::SUCCESS_HOVER,
                    _ => colors::SUCCESS,
                };
                button::Style {
                    background: Some(iced::Background::Color(bg)),
                    text_color: colors::BG_PRIMARY,
                    border: iced::Border { radius: 6.0.into(), ..Default::default() },
                    ..Default::default()
                }
            })
            .on_press(Message::GenerateCode);

        column![
            modes,
            frame_row,
            row![frame_info, horizontal_space(), generate].align_y(Alignment::Center),
        ]
        .spacing(10)
        .width(Length::Fixed(constants::canvas::WIDTH))
        .align_x(Alignment::Center)
        .into()
    }

    fn view_preview(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match &self.last_script {
            Some(script) => scrollable(
                text(script.as_str())
                    .font(Font::MONOSPACE)
                    .size(11)
                    .color(colors::TEXT_PRIMARY),
            )
            .height(Length::Fill)
            .into(),
            None => text("Generated code appears here")
                .size(11)
                .color(colors::TEXT_MUTED)
                .into(),
        };

        container(column![vertical_space().height(4), body].spacing(4))
            .padding(8)
            .width(Length::Fixed(constants::canvas::WIDTH))
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(colors::BG_SECONDARY)),
                border: iced::Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::PrevFrame),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::NextFrame),
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::ColorCancelled),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn action_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(12).color(colors::TEXT_PRIMARY))
        .padding(Padding::from([6, 12]))
        .style(|_, s| {
            let bg = match s {
                button::Status::Hovered | button::Status::Pressed => colors::BG_HOVER,
                _ => colors::BG_SECONDARY,
            };
            button::Style {
                background: Some(iced::Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: iced::Border {
                    radius: 6.0.into(),
                    color: colors::ACCENT,
                    width: 1.0,
                },
                ..Default::default()
            }
        })
        .on_press(message)
        .into()
}

// ============================================================================
// Main
// ============================================================================

fn main() -> iced::Result {
    // Initialize logger with wgpu warnings filtered out
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .init();
    info!("LedPainter Iced starting...");

    iced::application(LedPainterApp::title, LedPainterApp::update, LedPainterApp::view)
        .font(REQUIRED_FONT_BYTES)
        .subscription(LedPainterApp::subscription)
        .theme(LedPainterApp::theme)
        .window_size(Size::new(
            constants::window::DEFAULT_WIDTH,
            constants::window::DEFAULT_HEIGHT,
        ))
        .run_with(LedPainterApp::new)
}
