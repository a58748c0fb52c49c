use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::warn;

use wizard_core::{
    Config, Connectivity, FetchError, NetworkStatusProbe, RecentEntry, RecentsStore, UnitSystem,
    WeatherClient, WeatherReading,
    recents::should_record,
    units::{compass_direction, format_temp, format_wind},
};

const NO_CONNECTION: &str = "Please connect to the internet to receive weather data.";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wizard", version, about = "Weather Wizard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for lookups.
    Configure,

    /// Look up and display current weather for a location.
    Show {
        /// Location name, e.g. "Paris, FR".
        location: String,

        /// Display temperatures in Celsius and wind speed in KPH.
        #[arg(long)]
        celsius: bool,
    },

    /// List recent searches.
    Recents {
        /// Empty the recent-searches list.
        #[arg(long)]
        clear: bool,
    },

    /// Re-run the lookup for a recent search by its number.
    Recent {
        /// 1-based index from `wizard recents`.
        index: usize,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => run_configure(),
            Command::Show { location, celsius } => {
                let unit = if celsius { UnitSystem::Celsius } else { UnitSystem::Fahrenheit };
                run_show(&location, unit).await
            }
            Command::Recents { clear } => run_recents(clear),
            Command::Recent { index } => run_recent(index).await,
        }
    }
}

fn run_configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn run_show(location: &str, unit: UnitSystem) -> Result<()> {
    let config = Config::load()?;

    // Connectivity is checked before the fetch is even attempted; offline
    // shows the indicator instead of a failed request.
    let probe = NetworkStatusProbe::new(config.probe_host());
    if !probe.is_reachable().await {
        println!("{NO_CONNECTION}");
        return Ok(());
    }

    let client = WeatherClient::from_config(&config)?;
    match client.fetch_weather(location).await {
        Ok(reading) => {
            render_card(&reading, unit);

            // An empty query can still succeed upstream, but it is never
            // recorded as a recent search.
            if should_record(location) {
                let mut recents = RecentsStore::open(config.recents_file_path()?)?;
                recents
                    .append(RecentEntry {
                        city: reading.city.clone(),
                        country: reading.country.clone(),
                    })
                    .context("Failed to record recent search")?;
            }
        }
        Err(err) => print_fetch_error(&err),
    }

    Ok(())
}

fn run_recents(clear: bool) -> Result<()> {
    let config = Config::load()?;
    let mut recents = RecentsStore::open(config.recents_file_path()?)?;

    if clear {
        recents.clear()?;
        println!("Recent searches cleared.");
        return Ok(());
    }

    if recents.count() == 0 {
        println!("Your recent searches will be here.");
        return Ok(());
    }

    for (i, entry) in recents.list().iter().enumerate() {
        println!("{:>3}. {}, {}", i + 1, entry.city, entry.country);
    }

    Ok(())
}

async fn run_recent(index: usize) -> Result<()> {
    let config = Config::load()?;
    let recents = RecentsStore::open(config.recents_file_path()?)?;

    let entry = index
        .checked_sub(1)
        .and_then(|i| recents.get(i))
        .ok_or_else(|| anyhow!("No recent search #{index}; run `wizard recents` to list them."))?;

    let probe = NetworkStatusProbe::new(config.probe_host());
    if !probe.is_reachable().await {
        println!("{NO_CONNECTION}");
        return Ok(());
    }

    let client = WeatherClient::from_config(&config)?;
    match client.fetch_weather(&entry.query()).await {
        // Re-running a recent search does not append to the list again.
        Ok(reading) => render_summary(&reading),
        Err(err) => print_fetch_error(&err),
    }

    Ok(())
}

/// Full weather card, mirroring the main screen layout.
fn render_card(reading: &WeatherReading, unit: UnitSystem) {
    let now = Local::now();

    println!();
    println!("  {}", format_temp(reading.temp_f, unit));
    println!("  {}, {}", reading.city, reading.country);
    println!("  {}  [{}]", reading.condition, reading.condition.icon());
    println!("  {}  {}", now.format("%B %-d, %Y"), now.format("%H:%M"));
    println!();
    println!("  {}'s Weather", reading.city);
    println!(
        "  L: {} / H: {}",
        format_temp(reading.temp_min_f, unit),
        format_temp(reading.temp_max_f, unit)
    );
    println!();
    println!("  FEELS LIKE      {}", format_temp(reading.feels_like_f, unit));
    println!("  CLOUDINESS      {}%", reading.cloudiness_pct);
    println!("  HUMIDITY        {}%", reading.humidity_pct);
    println!("  WIND SPEED      {}", format_wind(reading.wind_speed_mph, unit));
    println!("  AIR PRESSURE    {}", reading.pressure_hpa);
    println!("  WIND DIRECTION  {}", compass_direction(reading.wind_deg));
    println!("  DESCRIPTION     {}", reading.description);
}

/// Compact summary used when re-running a recent search.
fn render_summary(reading: &WeatherReading) {
    println!("{}, {}", reading.city, reading.country);
    println!(
        "Temperature: {} / {}",
        format_temp(reading.temp_f, UnitSystem::Fahrenheit),
        format_temp(reading.temp_f, UnitSystem::Celsius)
    );
    println!("Weather: {}", reading.condition);
    println!("Weather Description: {}", reading.description);
}

fn print_fetch_error(err: &FetchError) {
    match err {
        FetchError::NotFound { .. } => {
            println!("City Not Found");
            println!("Looks like that city doesn't exist. Maybe try using this format?");
            println!("<City Name>, <Country Abbreviation>");
        }
        FetchError::InvalidCredential { .. } => {
            println!("Invalid API Key");
            println!("Looks like this API key is invalid. Please use a valid API key.");
        }
        FetchError::Unreachable { .. } => {
            println!("{NO_CONNECTION}");
        }
        FetchError::Malformed { message } => {
            warn!(%message, "discarding malformed response");
            println!("No weather data yet.");
        }
    }
}
