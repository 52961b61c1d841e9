// SPDX-License-Identifier: MPL-2.0
//! Slider component encapsulating state and update logic.

use super::{track, SliderSettings};
use crate::config::WHEEL_QUIET_PERIOD;
use crate::domain::slider::{Align, Dimensions, ScrollDirection, SliderImage};
use crate::layout::{compute_layout, Layout, LayoutParams};
use crate::media::{
    resolve_dimensions, DimensionLoader, DimensionSource, ImageDimensionSource, LoadOutcome,
    LoadTicket, ProbedImage,
};
use crate::ui::state::{
    vertical_amount, ButtonStepper, HoverDirection, HoverEngine, ResizeWatcher, ScrollController,
    WheelInput, WheelScroll, WheelToken,
};
use crate::ui::widgets::TrackEvent;
use iced::mouse::ScrollDelta;
use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Subscription, Task};
use std::sync::Arc;
use std::time::Instant;

/// Messages handled by the slider.
#[derive(Debug, Clone)]
pub enum Message {
    DimensionsResolved {
        ticket: LoadTicket,
        outcome: LoadOutcome,
    },
    Track(TrackEvent),
    /// Display refresh tick from `window::frames()`.
    Frame(Instant),
    WheelQuiet(WheelToken),
    StepLeft,
    StepRight,
}

/// Notifications for the host, returned from [`State::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Dimensions resolved and the layout for the current settings is in place.
    Ready,
    /// The displayed offset left rest.
    ScrollStarted,
    /// The displayed offset moved this frame.
    Changed(f32),
    /// The displayed offset came to rest.
    ScrollEnded(f32),
    ButtonScrolled {
        direction: ScrollDirection,
        offset: f32,
    },
    WheelScrolled(f32),
}

/// Messages a host attaches to its own left/right controls.
#[derive(Debug, Clone)]
pub struct TriggerHandles {
    pub left: Message,
    pub right: Message,
}

/// Read-only snapshot of the scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Authoritative offset (`<= 0`).
    pub offset: f32,
    /// Hover direction, `None` while the pointer is off the track.
    pub direction: Option<HoverDirection>,
    pub is_animating: bool,
    pub is_wheel_active: bool,
}

/// Output of the last accepted run. Everything drawn comes from here, so a
/// pending or stalled run for newer settings never mixes with it.
#[derive(Debug, Default)]
struct LaidOut {
    images: Vec<SliderImage>,
    dimensions: Vec<Dimensions>,
    handles: Vec<Option<Handle>>,
    params: LayoutParams,
    layout: Layout,
}

impl LaidOut {
    fn new(images: Vec<SliderImage>, params: LayoutParams, probed: Vec<ProbedImage>) -> Self {
        let (dimensions, handles) = probed
            .into_iter()
            .map(|image| (image.dimensions, image.bytes.map(Handle::from_bytes)))
            .unzip();
        let mut laid_out = Self {
            images,
            dimensions,
            handles,
            params,
            layout: Layout::default(),
        };
        laid_out.compute();
        laid_out
    }

    fn realign(&mut self, align: Align) {
        self.params.align = align;
        self.compute();
    }

    fn compute(&mut self) {
        self.layout = compute_layout(&self.images, &self.params, &self.dimensions);
    }
}

#[derive(Debug)]
pub struct State {
    settings: SliderSettings,
    source: Arc<dyn DimensionSource>,
    loader: DimensionLoader,
    laid_out: LaidOut,
    scroll: ScrollController,
    wheel: WheelInput,
    hover: HoverEngine,
    buttons: ButtonStepper,
    resize: ResizeWatcher,
    scrollable_id: Id,
    mounted: bool,
    in_motion: bool,
}

impl State {
    /// Creates a slider that probes images from disk or over HTTP.
    #[must_use]
    pub fn new(settings: SliderSettings) -> Self {
        Self::with_source(settings, Arc::new(ImageDimensionSource::new()))
    }

    #[must_use]
    pub fn with_source(settings: SliderSettings, source: Arc<dyn DimensionSource>) -> Self {
        Self {
            wheel: WheelInput::new(settings.wheel_sensitivity),
            hover: HoverEngine::new(settings.hover_sensitivity),
            buttons: ButtonStepper::new(settings.button_step),
            settings,
            source,
            loader: DimensionLoader::new(),
            laid_out: LaidOut::default(),
            scroll: ScrollController::new(),
            resize: ResizeWatcher::new(),
            scrollable_id: Id::unique(),
            mounted: false,
            in_motion: false,
        }
    }

    /// Subscribes to resize reports and starts resolving dimensions.
    pub fn mount(&mut self) -> Task<Message> {
        if self.mounted {
            return Task::none();
        }
        tracing::info!(images = self.settings.images.len(), "slider mounted");
        self.mounted = true;
        self.resize.subscribe();
        self.start_load()
    }

    /// Releases everything acquired by [`State::mount`]. In-flight loads and
    /// wheel timers are orphaned and the frame subscription ends.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::info!("slider unmounted");
        self.mounted = false;
        self.hover.pointer_left();
        self.resize.unsubscribe();
        self.loader.invalidate();
        self.wheel.reset();
        self.in_motion = false;
    }

    /// Replaces the settings. Geometry changes restart dimension loading;
    /// tunables apply immediately.
    pub fn configure(&mut self, settings: SliderSettings) -> Task<Message> {
        let reload = self.settings.needs_reload(&settings);
        let realign = self.settings.align != settings.align;

        self.wheel.set_sensitivity(settings.wheel_sensitivity);
        self.hover.set_sensitivity(settings.hover_sensitivity);
        self.buttons.set_step(settings.button_step);
        self.settings = settings;

        if reload {
            tracing::debug!("slider geometry changed, reloading dimensions");
            if self.mounted {
                return self.start_load();
            }
            self.loader.invalidate();
        } else if realign && self.loader.is_loaded() {
            self.laid_out.realign(self.settings.align);
            self.scroll.set_content_width(self.laid_out.layout.total_width);
        }
        Task::none()
    }

    pub fn update(&mut self, message: Message) -> (Vec<Effect>, Task<Message>) {
        if !self.mounted {
            return (Vec::new(), Task::none());
        }

        match message {
            Message::DimensionsResolved { ticket, outcome } => self.handle_dimensions(ticket, outcome),
            Message::Track(event) => self.handle_track_event(event),
            Message::Frame(now) => self.handle_frame(now),
            Message::WheelQuiet(token) => {
                if self.wheel.on_quiet(token) {
                    tracing::debug!("wheel quiet");
                }
                (Vec::new(), Task::none())
            }
            Message::StepLeft => self.handle_step(ScrollDirection::Left),
            Message::StepRight => self.handle_step(ScrollDirection::Right),
        }
    }

    /// Whether frame ticks are wanted: hover is running or the displayed
    /// offset is still catching up.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.mounted && (self.hover.is_running() || self.scroll.is_animating())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.needs_frames() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let shown = &self.laid_out;
        track::view(track::ViewContext {
            images: &shown.images,
            handles: &shown.handles,
            layout: &shown.layout,
            track_height: shown.params.track_height.pixels(),
            border: shown.params.border,
            mode: shown.params.mode,
            spacing: shown.params.spacing,
            scrollable_id: self.scrollable_id.clone(),
        })
    }

    #[must_use]
    pub fn triggers(&self) -> TriggerHandles {
        TriggerHandles {
            left: Message::StepLeft,
            right: Message::StepRight,
        }
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll.offset(),
            direction: self.hover.direction(),
            is_animating: self.scroll.is_animating(),
            is_wheel_active: self.wheel.is_active(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.laid_out.layout
    }

    /// Images the current layout belongs to.
    #[must_use]
    pub fn laid_out_images(&self) -> &[SliderImage] {
        &self.laid_out.images
    }

    #[must_use]
    pub fn loader(&self) -> &DimensionLoader {
        &self.loader
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loader.is_loaded()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    fn start_load(&mut self) -> Task<Message> {
        let ticket = self.loader.begin();
        let sources = self
            .settings
            .images
            .iter()
            .map(|image| image.source.clone())
            .collect::<Vec<_>>();
        tracing::debug!(?ticket, count = sources.len(), "resolving image dimensions");

        Task::perform(
            resolve_dimensions(self.source.clone(), sources, self.settings.load_timeout),
            move |outcome| Message::DimensionsResolved { ticket, outcome },
        )
    }

    fn handle_dimensions(
        &mut self,
        ticket: LoadTicket,
        outcome: LoadOutcome,
    ) -> (Vec<Effect>, Task<Message>) {
        match outcome {
            LoadOutcome::Resolved(probed) => {
                if !self.loader.complete(ticket) {
                    tracing::debug!(?ticket, "discarding superseded dimension run");
                    return (Vec::new(), Task::none());
                }
                self.laid_out = LaidOut::new(
                    self.settings.images.clone(),
                    self.settings.layout_params(),
                    probed,
                );
                let total_width = self.laid_out.layout.total_width;
                self.scroll.set_content_width(total_width);
                tracing::info!(total_width, "slider layout ready");
                (vec![Effect::Ready], Task::none())
            }
            LoadOutcome::Stalled { source, error } => {
                if self.loader.stall(ticket) {
                    tracing::warn!(%source, %error, "image dimensions unavailable, slider stays unloaded");
                } else {
                    tracing::debug!(?ticket, "ignoring failure from superseded run");
                }
                (Vec::new(), Task::none())
            }
        }
    }

    fn handle_track_event(&mut self, event: TrackEvent) -> (Vec<Effect>, Task<Message>) {
        match event {
            TrackEvent::Wheel(delta) => {
                let Some(scrolled) = self.wheel_scrolled(delta) else {
                    return (Vec::new(), Task::none());
                };
                let quiet = Task::perform(wheel_quiet(scrolled.token), std::convert::identity);
                (vec![Effect::WheelScrolled(scrolled.offset)], quiet)
            }
            TrackEvent::PointerEntered { x, bounds } => {
                self.hover
                    .pointer_entered(x, bounds, self.loader.is_loaded(), self.wheel.is_active());
                (Vec::new(), Task::none())
            }
            TrackEvent::PointerMoved { x, bounds } => {
                self.hover.pointer_moved(x, bounds);
                (Vec::new(), Task::none())
            }
            TrackEvent::PointerLeft => {
                self.hover.pointer_left();
                (Vec::new(), Task::none())
            }
            TrackEvent::Resized(width) => {
                if let Some(width) = self.resize.observe(width) {
                    tracing::debug!(width, "track resized");
                    self.scroll.set_container_width(width);
                }
                (Vec::new(), Task::none())
            }
        }
    }

    fn wheel_scrolled(&mut self, delta: ScrollDelta) -> Option<WheelScroll> {
        self.wheel.on_wheel(vertical_amount(delta), &mut self.scroll)
    }

    fn handle_frame(&mut self, now: Instant) -> (Vec<Effect>, Task<Message>) {
        self.hover.tick(&mut self.scroll, self.wheel.is_active());

        let mut effects = Vec::new();
        let mut task = Task::none();
        if self.scroll.tick(now) {
            if !self.in_motion {
                self.in_motion = true;
                effects.push(Effect::ScrollStarted);
            }
            let displayed = self.scroll.displayed_offset();
            effects.push(Effect::Changed(displayed));
            task = operation::scroll_to(
                self.scrollable_id.clone(),
                AbsoluteOffset {
                    x: -displayed,
                    y: 0.0,
                },
            );
        }
        if self.in_motion && !self.scroll.is_animating() {
            self.in_motion = false;
            effects.push(Effect::ScrollEnded(self.scroll.offset()));
        }
        (effects, task)
    }

    fn handle_step(&mut self, direction: ScrollDirection) -> (Vec<Effect>, Task<Message>) {
        let step = self.buttons.step(direction, &mut self.scroll);
        (
            vec![Effect::ButtonScrolled {
                direction: step.direction,
                offset: step.offset,
            }],
            Task::none(),
        )
    }
}

/// Reports the end of the quiet period that started with `token`.
async fn wheel_quiet(token: WheelToken) -> Message {
    tokio::time::sleep(WHEEL_QUIET_PERIOD).await;
    Message::WheelQuiet(token)
}
