//! # flow-weather
//!
//! Weather forecast provider for flowcast.
//!
//! Fetches the hourly forecast from Open-Meteo and reduces it to one
//! [`ForecastRow`](flow_core::ForecastRow) per local calendar date by taking
//! the sample nearest to local noon. Hourly variables are renamed to the
//! feature names the regression models expect.

mod client;
mod error;
mod hourly;
mod source;

pub use client::{OpenMeteoClient, parse_forecast};
pub use error::WeatherError;
pub use hourly::{HourlySample, daily_at_noon};
pub use source::{ForecastSource, StaticForecast};
