//! Cooperative screen rotation with independent feed refresh cadences
//!
//! One [`ScreenScheduler::tick`] refreshes whichever feeds are due, then
//! shows the next screen for the configured dwell time. Dwelling happens in
//! one-second steps; each step runs the platform housekeeping hook and
//! advances the progress marks at the bottom of the screen. The CO2 sensor
//! is read on every step of the CO2 screen.

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::draw_target::DrawTarget;
use log::{debug, info, warn};

use crate::config::Config;
use crate::net::{FetchError, HttpTransport, Request, fetch};
use crate::pages::{DwellIndicator, Screen, draw_co2, draw_rain, draw_splash, draw_weather};
use crate::platform::{Canvas, Platform};
use crate::rain::RainSeries;
use crate::sensors::{Co2Reading, Co2Sensor};
use crate::time::{Deadline, FetchTimer};
use crate::ui::colors::BLACK;
use crate::weather::{SymbolAtlas, WeatherPipeline, WeatherSnapshot};

/// Length of one dwell step
const DWELL_STEP_MS: u32 = 1000;

/// Everything the screens show. Written only by the scheduler.
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    pub weather: WeatherSnapshot,
    pub rain: RainSeries,
    pub co2: Co2Reading,
}

#[derive(Debug, Clone, Copy)]
struct ScheduleState {
    /// Index of the screen last shown, 0 before the first tick
    shown: u8,
    weather: FetchTimer,
    rain: FetchTimer,
}

/// Owns the display and every collaborator, and drives the screen cycle.
pub struct ScreenScheduler<D, T, S, P>
where
    D: Canvas,
    T: HttpTransport,
    S: Co2Sensor,
    P: Platform,
{
    config: Config,
    display: D,
    transport: T,
    sensor: S,
    platform: P,
    state: ScheduleState,
    telemetry: Telemetry,
    weather: WeatherPipeline,
    symbols: SymbolAtlas,
    body: Vec<u8>,
}

impl<D, T, S, P> ScreenScheduler<D, T, S, P>
where
    D: Canvas,
    T: HttpTransport,
    S: Co2Sensor,
    P: Platform,
{
    pub fn new(config: Config, display: D, transport: T, sensor: S, platform: P) -> Self {
        let state = ScheduleState {
            shown: 0,
            weather: FetchTimer::new(config.weather_interval_ms()),
            rain: FetchTimer::new(config.rain_interval_ms()),
        };
        Self {
            weather: WeatherPipeline::new(config.weather.station_id),
            body: vec![0; config.network.max_body_bytes],
            symbols: SymbolAtlas::empty(),
            telemetry: Telemetry::default(),
            state,
            config,
            display,
            transport,
            sensor,
            platform,
        }
    }

    pub fn with_symbols(mut self, symbols: SymbolAtlas) -> Self {
        self.symbols = symbols;
        self
    }

    /// Bring up the sensor and show the splash screen for `splash_ms`.
    pub fn start(&mut self) -> Result<(), D::Error> {
        let sensor = self.sensor.initialize();
        match sensor {
            Ok(()) => info!("CO2 sensor ready"),
            Err(e) => warn!("CO2 sensor init failed: {} (code {})", e, e.code()),
        }

        draw_splash(&self.config, sensor, &mut self.display)?;
        self.display.present()?;
        self.platform.delay_ms(self.config.schedule.splash_ms);
        Ok(())
    }

    /// Refresh due feeds, then show the next screen until its dwell time is
    /// over. Returns the screen that was shown.
    pub fn tick(&mut self) -> Result<Screen, D::Error> {
        self.refresh_due_feeds();

        let screen = Screen::after(self.state.shown);
        self.state.shown = screen.index();
        info!("Showing {:?} screen", screen);

        match screen {
            Screen::Weather => {
                draw_weather(&self.telemetry.weather, &self.symbols, &mut self.display)?
            }
            Screen::Rain => {
                draw_rain(&self.telemetry.weather, &self.telemetry.rain, &mut self.display)?
            }
            Screen::Co2 => self.display.clear(BLACK)?,
        }
        DwellIndicator::draw_track(&mut self.display)?;
        self.display.present()?;

        self.dwell(screen)?;
        Ok(screen)
    }

    /// Screen shown by the last tick, `None` before the first.
    pub fn shown(&self) -> Option<Screen> {
        Screen::from_index(self.state.shown)
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn next_weather_fetch(&self) -> Option<Deadline> {
        self.state.weather.next_deadline()
    }

    pub fn next_rain_fetch(&self) -> Option<Deadline> {
        self.state.rain.next_deadline()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    fn refresh_due_feeds(&mut self) {
        // Deadlines count from the end of the fetch, so slow fetches and
        // missed periods are not caught up.
        if self.state.weather.is_due(self.platform.now_ms()) {
            self.refresh_weather();
            let next = self.state.weather.reschedule(self.platform.now_ms());
            debug!("Next weather fetch at {} ms", next.as_millis());
        }
        if self.state.rain.is_due(self.platform.now_ms()) {
            self.refresh_rain();
            let next = self.state.rain.reschedule(self.platform.now_ms());
            debug!("Next rain fetch at {} ms", next.as_millis());
        }
    }

    fn refresh_weather(&mut self) {
        let feed = &self.config.weather;
        let request = Request::get(&feed.host, &feed.path);
        let snapshot = &mut self.telemetry.weather;

        match fetch(
            &mut self.transport,
            &mut self.platform,
            &request,
            &self.config.network,
            &mut self.body,
        ) {
            Ok(response) => {
                snapshot.http_status = response.status;
                if let Err(e) = self.weather.run(response.body, snapshot) {
                    warn!(
                        "Keeping previous weather for station {}: {}",
                        self.weather.station_id(),
                        e
                    );
                }
            }
            // Shown in the footer next to the time of the last good data
            Err(FetchError::Status { code }) => snapshot.http_status = code,
            Err(_) => {}
        }
    }

    fn refresh_rain(&mut self) {
        let feed = &self.config.rain;
        let request = Request::get(&feed.host, &feed.path).with_query(&feed.query);

        if let Ok(response) = fetch(
            &mut self.transport,
            &mut self.platform,
            &request,
            &self.config.network,
            &mut self.body,
        ) {
            self.telemetry.rain = RainSeries::parse(response.body);
            debug!("Rain forecast peaks at {} mm/h", self.telemetry.rain.max());
        }
    }

    fn dwell(&mut self, screen: Screen) -> Result<(), D::Error> {
        for step in 0..self.config.schedule.dwell_secs {
            if screen == Screen::Co2 {
                // Failures are logged and show as 0 ppm
                self.telemetry.co2.refresh(&mut self.sensor).ok();
                draw_co2(&self.telemetry.co2, &self.config.meter, &mut self.display)?;
                self.display.present()?;
            }

            self.platform.housekeeping();
            self.platform.delay_ms(DWELL_STEP_MS);

            DwellIndicator::draw_step(step, &mut self.display)?;
            self.display.present()?;
        }
        Ok(())
    }
}
