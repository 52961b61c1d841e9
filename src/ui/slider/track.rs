// SPDX-License-Identifier: MPL-2.0
//! Track rendering.
//!
//! Slides sit inside a horizontally scrolling, scrollbar-less `Scrollable`
//! whose offset is driven by the component through `scroll_to`. The
//! scrollable is wrapped in a [`TrackSensor`](crate::ui::widgets::TrackSensor)
//! so wheel and pointer activity reach the component instead of the
//! scrollable.

use super::component::Message;
use crate::domain::slider::{LayoutMode, SliderImage};
use crate::layout::{ImageGeometry, Layout};
use crate::media::{is_remote, local_path};
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Container, Id, Row, Scrollable, Space, Stack};
use iced::{Element, Length, Padding};

pub struct ViewContext<'a> {
    pub images: &'a [SliderImage],
    /// Handles for downloaded slides, index-aligned with `images`.
    pub handles: &'a [Option<Handle>],
    pub layout: &'a Layout,
    pub track_height: f32,
    pub border: f32,
    pub mode: LayoutMode,
    pub spacing: f32,
    pub scrollable_id: Id,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.mode {
        LayoutMode::Linear => linear(&ctx),
        LayoutMode::Mosaic => mosaic(&ctx),
    };

    let scrollable = Scrollable::new(content)
        .id(ctx.scrollable_id)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.track_height))
        .direction(Direction::Horizontal(Scrollbar::hidden()));

    crate::ui::widgets::track_sensor(scrollable, Message::Track).into()
}

fn linear<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slides = slides(ctx).map(|(image, handle, geometry)| -> Element<'a, Message> {
        let top = geometry.top.resolve(ctx.track_height).max(0.0);
        Column::new()
            .push(Space::new().height(Length::Fixed(top)))
            .push(slide(image, handle, geometry, ctx.border))
            .into()
    });

    Row::with_children(slides)
        .spacing(ctx.spacing.max(0.0))
        .height(Length::Fixed(ctx.track_height))
        .into()
}

fn mosaic<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slides = slides(ctx).map(|(image, handle, geometry)| -> Element<'a, Message> {
        Container::new(slide(image, handle, geometry, ctx.border))
            .padding(Padding {
                top: geometry.top.resolve(ctx.track_height).max(0.0),
                left: geometry.left.max(0.0),
                right: 0.0,
                bottom: 0.0,
            })
            .into()
    });

    Stack::with_children(slides)
        .height(Length::Fixed(ctx.track_height))
        .into()
}

fn slides<'a, 'c>(
    ctx: &'c ViewContext<'a>,
) -> impl Iterator<Item = (&'a SliderImage, Option<&'a Handle>, ImageGeometry)> + 'c {
    let handles = ctx.handles;
    ctx.images
        .iter()
        .zip(ctx.layout.images.iter().copied())
        .enumerate()
        .map(move |(index, (image, geometry))| {
            (image, handles.get(index).and_then(Option::as_ref), geometry)
        })
}

/// What to draw for a slide: downloaded bytes when present, the file for
/// local sources, nothing for a remote source that arrived without bytes.
fn picture(image: &SliderImage, downloaded: Option<&Handle>) -> Option<Handle> {
    match downloaded {
        Some(handle) => Some(handle.clone()),
        None if is_remote(&image.source) => None,
        None => Some(Handle::from_path(local_path(&image.source))),
    }
}

fn slide<'a>(
    image: &SliderImage,
    downloaded: Option<&Handle>,
    geometry: ImageGeometry,
    border: f32,
) -> Element<'a, Message> {
    let width = Length::Fixed(geometry.width.max(0.0));
    let height = Length::Fixed(geometry.height.max(0.0));

    let body: Element<'a, Message> = match picture(image, downloaded) {
        Some(handle) => Image::new(handle).width(width).height(height).into(),
        None => Space::new().width(width).height(height).into(),
    };

    Container::new(body).padding(border.max(0.0)).into()
}
