//! Desktop simulator for RoundMeter.
//!
//! Runs the real screen scheduler in an SDL2 window via
//! `embedded-graphics-simulator`. Feeds are answered from canned fixtures
//! unless `--live` is given, and CO2 readings come from a drifting mock
//! sensor.
//!
//! # Usage
//!
//! ```text
//! roundmeter-simulator [--config <path>] [--live]
//! ```
//!
//! | Option            | Effect                                           |
//! |-------------------|--------------------------------------------------|
//! | `--config <path>` | Load settings from a TOML file                   |
//! | `--live`          | Fetch the real feeds over plain HTTP (port 80)   |
//!
//! `Q`, `Esc` or closing the window quits. `RUST_LOG` sets the log level.

mod host;
mod symbols;
mod transport;
mod window;

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info, warn};
use roundmeter_core::VERSION;
use roundmeter_core::config::Config;
use roundmeter_core::net::HttpTransport;
use roundmeter_core::scheduler::ScreenScheduler;
use roundmeter_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

use host::{DriftingSensor, HostPlatform};
use transport::{FixtureTransport, TcpTransport};
use window::WindowCanvas;

/// TLS is not available here, so live fetches use plain HTTP.
const PLAIN_HTTP_PORT: u16 = 80;

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    live: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--live" => options.live = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(options)
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let config = toml::from_str(&text).map_err(|e| format!("Invalid {}: {}", path.display(), e))?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn run<T: HttpTransport>(config: Config, transport: T) {
    let canvas = WindowCanvas::new("RoundMeter Simulator");
    let mut scheduler = ScreenScheduler::new(
        config,
        canvas,
        transport,
        DriftingSensor::new(),
        HostPlatform::new(),
    )
    .with_symbols(symbols::generated_atlas());

    if scheduler.start().is_err() {
        info!("Window closed during start-up");
        return;
    }
    while scheduler.tick().is_ok() {}
    if !scheduler.display().is_closed() {
        warn!("Scheduler stopped with the window still open");
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: roundmeter-simulator [--config <path>] [--live]");
            return ExitCode::FAILURE;
        }
    };
    let mut config = match load_config(options.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting RoundMeter simulator {}", VERSION);
    info!("Display: {}×{}", DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX);

    if options.live {
        if config.network.port != PLAIN_HTTP_PORT {
            warn!(
                "Port {} needs TLS, using {} instead",
                config.network.port, PLAIN_HTTP_PORT
            );
            config.network.port = PLAIN_HTTP_PORT;
        }
        let transport = TcpTransport::new(config.network.read_timeout_secs);
        run(config, transport);
    } else {
        info!("Serving feeds from fixtures (use --live for the real feeds)");
        let transport = FixtureTransport::new(&config.weather.host, &config.rain.host);
        run(config, transport);
    }

    info!("Simulator exiting");
    ExitCode::SUCCESS
}
