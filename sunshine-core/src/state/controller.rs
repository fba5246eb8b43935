//! Face controller
//!
//! Owns the clock, weather, scheduler and renderer, reacts to host events
//! and tells the host when to redraw. All handling is synchronous: by the
//! time [`FaceController::handle_event`] returns, the state change is done
//! and the scheduler has been re-evaluated.

#[cfg(feature = "defmt")]
use defmt::{debug, info, warn};

use super::events::Event;
use super::mode::DisplayMode;
use crate::clock::ClockSource;
use crate::config::FaceConfig;
use crate::render::{DrawList, FaceFrame, FaceRenderer, Viewport};
use crate::scheduler::{RenderScheduler, TickOutcome};
use crate::traits::{Canvas, FaceHost, Resources, StandardIcons, TextMetrics, WallClock};
use crate::weather::{WeatherSample, WeatherState};

/// Where the face is in its host lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Waiting for `Created`; other events are ignored
    NotCreated,
    Created,
    /// Torn down; every event is ignored
    Destroyed,
}

/// State of the push subscription channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataLayerState {
    /// Not set up yet
    Uninitialized,
    /// Set up but closed
    Closed,
    /// Connect requested, waiting for the result
    Connecting,
    /// Connected with a data listener attached
    Listening,
}

/// The single owner of all face state
pub struct FaceController<C, H, R = StandardIcons> {
    clock: ClockSource<C>,
    weather: WeatherState,
    scheduler: RenderScheduler,
    renderer: FaceRenderer,
    resources: R,
    host: H,
    lifecycle: Lifecycle,
    data_layer: DataLayerState,
    timezone_receiver: bool,
    visible: bool,
    mode: DisplayMode,
    low_bit_ambient: bool,
    redraw_pending: bool,
}

impl<C: WallClock, H: FaceHost> FaceController<C, H, StandardIcons> {
    /// Controller with the built-in icon set
    pub fn new(config: &FaceConfig, clock: C, host: H) -> Self {
        Self::with_resources(config, clock, host, StandardIcons)
    }
}

impl<C: WallClock, H: FaceHost, R: Resources> FaceController<C, H, R> {
    pub fn with_resources(config: &FaceConfig, clock: C, host: H, resources: R) -> Self {
        Self {
            clock: ClockSource::new(clock),
            weather: WeatherState::new(),
            scheduler: RenderScheduler::new(config.interval_ms),
            renderer: FaceRenderer::new(config.style.clone(), config.locale.table()),
            resources,
            host,
            lifecycle: Lifecycle::NotCreated,
            data_layer: DataLayerState::Uninitialized,
            timezone_receiver: false,
            visible: false,
            mode: DisplayMode::Interactive,
            low_bit_ambient: false,
            redraw_pending: false,
        }
    }

    /// Process one host event
    pub fn handle_event(&mut self, event: Event) {
        match self.lifecycle {
            Lifecycle::Destroyed => return,
            Lifecycle::NotCreated if event != Event::Created => {
                #[cfg(feature = "defmt")]
                warn!("Event before Created ignored: {}", event);
                return;
            }
            _ => {}
        }

        match event {
            Event::Created => self.on_created(),
            Event::Destroyed => self.on_destroyed(),
            Event::VisibilityChanged(visible) => self.on_visibility_changed(visible),
            Event::AmbientModeChanged(in_ambient) => self.on_ambient_changed(in_ambient),
            Event::PropertiesChanged { low_bit_ambient } => {
                self.low_bit_ambient = low_bit_ambient;
            }
            Event::TimezoneChanged => {
                self.clock.on_timezone_changed();
                #[cfg(feature = "defmt")]
                debug!("Timezone now {=i32}s from UTC", self.clock.offset_secs());
                self.request_redraw();
            }
            // Nothing is on screen to refresh while hidden
            Event::TimeTick if self.visible => self.request_redraw(),
            Event::TimeTick => {}
            Event::Tick(token) => {
                let now_ms = self.clock.now_ms();
                if self.scheduler.on_tick(token, now_ms, &mut self.host) == TickOutcome::Fired {
                    self.request_redraw();
                }
            }
            Event::DataLayerConnected => self.on_data_layer_connected(),
            Event::DataLayerSuspended => {
                #[cfg(feature = "defmt")]
                warn!("Data layer suspended");
            }
            Event::DataLayerFailed(_code) => {
                #[cfg(feature = "defmt")]
                warn!("Data layer connection failed: {=i32}", _code);
                if self.data_layer == DataLayerState::Connecting {
                    self.data_layer = DataLayerState::Closed;
                }
            }
            Event::WeatherPushReceived(sample) => self.on_weather(sample),
        }
    }

    fn on_created(&mut self) {
        if self.lifecycle == Lifecycle::Created {
            return;
        }
        self.clock.on_timezone_changed();
        self.data_layer = DataLayerState::Closed;
        self.lifecycle = Lifecycle::Created;
        #[cfg(feature = "defmt")]
        info!("Face created");
    }

    fn on_destroyed(&mut self) {
        self.scheduler.cancel(&mut self.host);
        self.close_data_layer();
        self.set_timezone_receiver(false);
        self.lifecycle = Lifecycle::Destroyed;
        #[cfg(feature = "defmt")]
        info!("Face destroyed");
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.open_data_layer();
            self.set_timezone_receiver(true);
            // The zone may have moved while nobody was listening
            self.clock.on_timezone_changed();
            self.request_redraw();
        } else {
            self.close_data_layer();
            self.set_timezone_receiver(false);
        }
        self.update_schedule();
    }

    fn on_ambient_changed(&mut self, in_ambient: bool) {
        let mode = DisplayMode::from_ambient(in_ambient);
        if mode != self.mode {
            self.mode = mode;
            #[cfg(feature = "defmt")]
            debug!("Display mode {}", mode);
            self.request_redraw();
        }
        self.update_schedule();
    }

    fn on_data_layer_connected(&mut self) {
        if self.data_layer != DataLayerState::Connecting {
            // Closed again before the connection finished
            return;
        }
        self.data_layer = DataLayerState::Listening;
        #[cfg(feature = "defmt")]
        info!("Data layer connected, listening for weather");
    }

    fn on_weather(&mut self, sample: WeatherSample) {
        if self.data_layer != DataLayerState::Listening {
            #[cfg(feature = "defmt")]
            debug!("Weather push dropped, channel not listening");
            return;
        }
        let _valid = self.weather.update(sample);
        #[cfg(feature = "defmt")]
        info!("Weather updated: {} (valid: {=bool})", self.weather.current(), _valid);
        self.request_redraw();
    }

    fn update_schedule(&mut self) {
        let now_ms = self.clock.now_ms();
        self.scheduler
            .evaluate(self.visible, self.mode, now_ms, &mut self.host);
    }

    fn open_data_layer(&mut self) {
        if self.data_layer == DataLayerState::Closed {
            self.data_layer = DataLayerState::Connecting;
            self.host.connect_data_layer();
        }
    }

    fn close_data_layer(&mut self) {
        if matches!(
            self.data_layer,
            DataLayerState::Connecting | DataLayerState::Listening
        ) {
            self.data_layer = DataLayerState::Closed;
            self.host.disconnect_data_layer();
        }
    }

    fn set_timezone_receiver(&mut self, registered: bool) {
        if registered == self.timezone_receiver {
            return;
        }
        self.timezone_receiver = registered;
        if registered {
            self.host.register_timezone_receiver();
        } else {
            self.host.unregister_timezone_receiver();
        }
    }

    /// Coalesce redraw requests into one host invalidation per draw
    fn request_redraw(&mut self) {
        if !self.redraw_pending {
            self.redraw_pending = true;
            self.host.invalidate();
        }
    }

    /// Time text is smoothed unless a low-bit panel is in ambient mode
    pub fn time_anti_alias(&self) -> bool {
        !(self.low_bit_ambient && self.mode.is_ambient())
    }

    /// Lay out the current state for `viewport`
    ///
    /// Clears the pending redraw, so later requests invalidate again.
    pub fn draw<M: TextMetrics + ?Sized>(&mut self, viewport: Viewport, metrics: &M) -> DrawList {
        self.redraw_pending = false;
        let frame = FaceFrame {
            time: self.clock.now(),
            mode: self.mode,
            time_anti_alias: self.time_anti_alias(),
            weather: self.weather.current(),
            viewport,
        };
        self.renderer.render(&frame, metrics, &self.resources)
    }

    /// Draw straight onto `canvas`
    pub fn draw_to<K: Canvas + ?Sized>(
        &mut self,
        viewport: Viewport,
        canvas: &mut K,
    ) -> Result<(), K::Error> {
        let list = self.draw(viewport, canvas);
        list.replay(canvas)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn data_layer(&self) -> DataLayerState {
        self.data_layer
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    pub fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    pub fn clock(&self) -> &ClockSource<C> {
        &self.clock
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
