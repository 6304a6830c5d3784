//! Weather forecast location and provider configuration.

use serde::{Deserialize, Serialize};

fn default_city() -> String {
    String::from("Toronto")
}

const fn default_latitude() -> f64 {
    43.6532
}

const fn default_longitude() -> f64 {
    -79.3832
}

fn default_timezone() -> String {
    String::from("America/Toronto")
}

const fn default_days() -> u32 {
    7
}

fn default_endpoint() -> String {
    String::from("https://api.open-meteo.com/v1/forecast")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    /// Display name of the forecast location.
    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// IANA time zone used to find local noon.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Number of forecast days.
    #[serde(default = "default_days")]
    pub days: u32,

    /// Open-Meteo forecast endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
            days: default_days(),
            endpoint: default_endpoint(),
        }
    }
}
