//! Nimbus CLI
//!
//! Terminal frontend for the weather dashboard: shows current, hourly and
//! daily weather plus air quality for the resolved location, and manages
//! favorites, units, refresh interval and theme.

#![allow(clippy::print_stdout)]

mod render;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use domain::Location;
use domain::value_objects::{Theme, Timezone, UnitSystem};

use application::ports::{GeocodingPort, GeolocationPort, StatePort};
use application::services::{
    DashboardService, DashboardSnapshot, FavoritesService, LocationService, PreferencesService,
    WeatherService,
};
use infrastructure::{
    AppConfig, ConfiguredGeolocator, FileStateStore, ForecastAdapter, GeocodingAdapter,
    SimulatedAirQuality,
};

/// Nimbus CLI
#[derive(Parser)]
#[command(name = "nimbus")]
#[command(author, version, about = "Nimbus weather dashboard", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard once
    Show,

    /// Keep the dashboard updating at the configured interval
    Watch,

    /// Search for locations by name or "lat,lon"
    Search {
        /// Free-form query
        query: String,
    },

    /// Make the first match for a query the active location
    SetLocation {
        /// Free-form query
        query: String,
    },

    /// Manage favorite locations
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },

    /// Set the measurement unit system
    SetUnits {
        /// `metric` or `imperial`
        units: UnitSystem,
    },

    /// Set the auto-refresh interval in minutes (0 disables)
    SetInterval {
        /// Minutes between automatic re-fetches
        minutes: u32,
    },

    /// Set the display theme
    SetTheme {
        /// `light`, `dark` or `system`
        theme: Theme,
    },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorites
    List,
    /// Favorite the first match for a query
    Add {
        /// Free-form query
        query: String,
    },
    /// Remove a favorite by its id
    Remove {
        /// Location id as shown by `favorites list`
        id: i64,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Wire the dashboard from configuration
fn build_dashboard(config: &AppConfig) -> anyhow::Result<(DashboardService, Arc<dyn GeocodingPort>)> {
    let state: Arc<dyn StatePort> = Arc::new(FileStateStore::new(&config.storage.state_dir));
    let geocoding: Arc<dyn GeocodingPort> = Arc::new(
        GeocodingAdapter::with_config(config.geocoding.clone())
            .context("Failed to initialize geocoding client")?,
    );
    let forecast = Arc::new(
        ForecastAdapter::with_config(config.weather.clone())
            .context("Failed to initialize forecast client")?,
    );

    let geolocator: Option<Arc<dyn GeolocationPort>> = config
        .location
        .coordinates
        .as_ref()
        .and_then(infrastructure::CoordinatesConfig::to_geo_location)
        .map(|position| Arc::new(ConfiguredGeolocator::new(position)) as Arc<dyn GeolocationPort>);

    let location = LocationService::new(
        geolocator,
        Arc::clone(&geocoding),
        Arc::clone(&state),
        Timezone::new(config.location.timezone.clone()),
    );
    let weather = WeatherService::new(forecast, Arc::new(SimulatedAirQuality::new()));
    let preferences = PreferencesService::new(Arc::clone(&state));
    let favorites = FavoritesService::new(Arc::clone(&state));

    let dashboard = DashboardService::new(location, weather, preferences, favorites, state);
    Ok((dashboard, geocoding))
}

/// Render the full dashboard to stdout
fn print_dashboard(snapshot: &DashboardSnapshot) {
    if let Some(error) = &snapshot.error {
        println!("⚠️  {error}");
    }

    let Some(location) = &snapshot.location else {
        println!("No location available. Try `nimbus set-location <city>`.");
        return;
    };
    println!("{}", render::format_location(location));

    let Some(weather) = &snapshot.weather else {
        println!("No weather data yet.");
        return;
    };
    let units = weather.units;

    println!("{}", render::format_current(&weather.current, units));
    if let Some(reading) = &snapshot.air_quality {
        println!("{}", render::format_air_quality(reading));
    }
    if let Some(today) = weather.today() {
        println!("{}", render::format_sun_times(today));
    }

    if !weather.hourly.is_empty() {
        println!("\nNext hours:");
        for hour in weather.hourly.iter().take(8) {
            println!("  {}", render::format_hour(hour, units));
        }
    }

    if !weather.daily.is_empty() {
        println!("\nForecast:");
        for day in &weather.daily {
            println!("  {}", render::format_day(day, units));
        }
    }
}

fn print_matches(matches: &[Location]) {
    if matches.is_empty() {
        println!("No matches.");
        return;
    }
    for location in matches {
        println!(
            "{:>10}  {} ({})",
            location.id(),
            location.qualified_name(),
            location.coordinates()
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose))
            }),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let (dashboard, geocoding) = build_dashboard(&config)?;

    match cli.command {
        Commands::Show => {
            dashboard.initialize().await?;
            print_dashboard(&dashboard.snapshot());
            dashboard.shutdown();
        },
        Commands::Watch => {
            dashboard.initialize().await?;
            print_dashboard(&dashboard.snapshot());
            let interval = dashboard.snapshot().preferences.update_interval_minutes;
            if interval == 0 {
                println!("\nAuto-refresh is disabled; set an interval with `nimbus set-interval`.");
            } else {
                println!("\nRefreshing every {interval} minutes. Press Ctrl-C to stop.");
            }
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    () = tokio::time::sleep(Duration::from_secs(60)) => {
                        print_dashboard(&dashboard.snapshot());
                    },
                }
            }
            dashboard.shutdown();
        },
        Commands::Search { query } => {
            let matches = geocoding.search(&query).await?;
            print_matches(&matches);
        },
        Commands::SetLocation { query } => {
            dashboard.load_persisted().await?;
            let matches = geocoding.search(&query).await?;
            let Some(location) = matches.into_iter().next() else {
                println!("No matches for '{query}'.");
                return Ok(());
            };
            println!("Setting location to {}", location.qualified_name());
            if let Err(e) = dashboard.set_location(location).await {
                println!("⚠️  {e}");
            }
            print_dashboard(&dashboard.snapshot());
            dashboard.shutdown();
        },
        Commands::Favorites { command } => {
            dashboard.load_persisted().await?;
            match command {
                FavoritesCommand::List => {
                    print_matches(&dashboard.snapshot().favorites);
                },
                FavoritesCommand::Add { query } => {
                    let matches = geocoding.search(&query).await?;
                    let Some(location) = matches.into_iter().next() else {
                        println!("No matches for '{query}'.");
                        return Ok(());
                    };
                    println!("Favoriting {}", location.qualified_name());
                    dashboard.add_favorite(location).await?;
                },
                FavoritesCommand::Remove { id } => {
                    dashboard.remove_favorite(id).await?;
                    println!("Removed favorite {id}.");
                },
            }
        },
        Commands::SetUnits { units } => {
            dashboard.load_persisted().await?;
            dashboard.set_units(units).await?;
            println!("Units set to {units}.");
        },
        Commands::SetInterval { minutes } => {
            dashboard.load_persisted().await?;
            dashboard.set_update_interval(minutes).await?;
            if minutes == 0 {
                println!("Auto-refresh disabled.");
            } else {
                println!("Auto-refresh every {minutes} minutes.");
            }
        },
        Commands::SetTheme { theme } => {
            dashboard.load_persisted().await?;
            dashboard.set_theme(theme).await?;
            println!("Theme set to {theme}.");
        },
    }

    Ok(())
}
