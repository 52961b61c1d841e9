// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that turns pointer activity over the slider track into
//! messages, and keeps the mouse wheel away from the wrapped scrollable so the
//! slider alone decides how far each wheel notch moves the track.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Pointer and geometry activity observed over the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackEvent {
    /// Wheel moved while the pointer was over the track.
    Wheel(mouse::ScrollDelta),
    PointerEntered { x: f32, bounds: Rectangle },
    PointerMoved { x: f32, bounds: Rectangle },
    PointerLeft,
    /// The track's laid-out width changed.
    Resized(f32),
}

#[derive(Debug, Default)]
struct SensorState {
    hovered: bool,
    width: Option<f32>,
}

/// Wraps the track content and reports [`TrackEvent`]s through `on_event`.
pub struct TrackSensor<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_event: Box<dyn Fn(TrackEvent) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> TrackSensor<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_event: impl Fn(TrackEvent) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_event: Box::new(on_event),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for TrackSensor<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<SensorState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(SensorState::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<SensorState>();

        if state.width != Some(bounds.width) {
            state.width = Some(bounds.width);
            shell.publish((self.on_event)(TrackEvent::Resized(bounds.width)));
        }

        let over = cursor.position_over(bounds);
        match (state.hovered, over) {
            (false, Some(position)) => {
                state.hovered = true;
                shell.publish((self.on_event)(TrackEvent::PointerEntered {
                    x: position.x,
                    bounds,
                }));
            }
            (true, None) => {
                state.hovered = false;
                shell.publish((self.on_event)(TrackEvent::PointerLeft));
            }
            (true, Some(position)) if is_cursor_move(event) => {
                shell.publish((self.on_event)(TrackEvent::PointerMoved {
                    x: position.x,
                    bounds,
                }));
            }
            _ => {}
        }

        if let Event::Mouse(mouse::Event::WheelScrolled { delta }) = event {
            if over.is_some() {
                shell.publish((self.on_event)(TrackEvent::Wheel(*delta)));
                shell.capture_event();
            }
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<TrackSensor<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(sensor: TrackSensor<'a, Message, Theme, Renderer>) -> Self {
        Self::new(sensor)
    }
}

/// Helper function to wrap track content in a sensor.
pub fn track_sensor<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_event: impl Fn(TrackEvent) -> Message + 'a,
) -> TrackSensor<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    TrackSensor::new(content, on_event)
}

fn is_cursor_move(event: &Event) -> bool {
    matches!(event, Event::Mouse(mouse::Event::CursorMoved { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn cursor_move_is_detected() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(10.0, 20.0),
        });
        assert!(is_cursor_move(&event));
    }

    #[test]
    fn wheel_is_not_a_cursor_move() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert!(!is_cursor_move(&event));
    }

    #[test]
    fn window_events_are_not_cursor_moves() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(!is_cursor_move(&event));
    }
}
