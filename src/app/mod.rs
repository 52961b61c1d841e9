// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single slider.
//!
//! The `App` struct loads a gallery and the user's tunables, mounts the
//! slider, and shows its lifecycle notifications in a status line.

pub mod gallery;
mod message;

pub use gallery::Gallery;
pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::slider::{self, Effect, SliderSettings};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    slider: slider::State,
    /// Last notification reported by the slider.
    status: String,
    /// Problem encountered while reading the gallery, shown instead of a hint.
    gallery_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slider_loaded", &self.slider.is_loaded())
            .field("status", &self.status)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads tunables from `path` if given, otherwise from the per-user file.
/// Errors fall back to defaults.
fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!("Using default settings: {}", err);
        Config::default()
    })
}

fn load_gallery(flags: &Flags) -> (Gallery, Option<String>) {
    let Some(path) = &flags.gallery_path else {
        return (Gallery::default(), None);
    };
    match Gallery::load(path) {
        Ok(gallery) => {
            tracing::info!(path = %path.display(), images = gallery.images.len(), "gallery loaded");
            (gallery, None)
        }
        Err(err) => {
            tracing::error!("Failed to load gallery: {}", err);
            (Gallery::default(), Some(err.to_string()))
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        let (gallery, gallery_error) = load_gallery(&flags);
        Self::with_settings(gallery.settings().with_config(&config), gallery_error)
    }

    fn with_settings(
        settings: SliderSettings,
        gallery_error: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut slider = slider::State::new(settings);
        let task = slider.mount().map(Message::Slider);
        let app = App {
            slider,
            status: String::from("Loading images…"),
            gallery_error,
        };
        (app, task)
    }

    fn title(&self) -> String {
        String::from("Iced Reel")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.slider.subscription().map(Message::Slider)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(message) => {
                let (effects, task) = self.slider.update(message);
                for effect in effects {
                    self.record(effect);
                }
                task.map(Message::Slider)
            }
        }
    }

    fn record(&mut self, effect: Effect) {
        match effect {
            Effect::Ready => {
                self.status = format!(
                    "Ready: {} images, {:.0}px of content",
                    self.slider.layout().images.len(),
                    self.slider.layout().total_width
                );
            }
            Effect::ButtonScrolled { direction, offset } => {
                self.status = format!("Button {direction:?} → {offset:.0}px");
            }
            Effect::WheelScrolled(offset) => {
                self.status = format!("Wheel → {offset:.0}px");
            }
            Effect::ScrollEnded(offset) => {
                tracing::debug!(offset, "scroll ended");
            }
            Effect::ScrollStarted | Effect::Changed(_) => {}
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let triggers = self.slider.triggers();
        let controls = Row::new()
            .spacing(8)
            .push(button(Text::new("‹")).on_press(Message::Slider(triggers.left)))
            .push(button(Text::new("›")).on_press(Message::Slider(triggers.right)));

        let status = match &self.gallery_error {
            Some(error) => error.as_str(),
            None if self.slider.settings().images.is_empty() => {
                "Pass a gallery file to show images: iced_reel gallery.toml"
            }
            None => self.status.as_str(),
        };

        let content = Column::new()
            .spacing(12)
            .padding(16)
            .push(self.slider.view().map(Message::Slider))
            .push(
                Row::new()
                    .spacing(16)
                    .align_y(alignment::Vertical::Center)
                    .push(controls)
                    .push(Text::new(status).size(14)),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
