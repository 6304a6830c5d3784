//! Parsing a recorded Open-Meteo response end to end.

use flow_weather::{daily_at_noon, parse_forecast};
use pretty_assertions::assert_eq;

const FIXTURE: &str = r#"{
    "latitude": 43.65,
    "longitude": -79.38,
    "timezone": "America/Toronto",
    "hourly_units": {
        "time": "iso8601",
        "temperature_2m": "°C",
        "precipitation": "mm",
        "wind_speed_10m": "km/h",
        "wind_direction_10m": "°"
    },
    "hourly": {
        "time": [
            "2026-10-19T11:00", "2026-10-19T12:00", "2026-10-19T13:00",
            "2026-10-20T11:00", "2026-10-20T12:00", "2026-10-20T13:00"
        ],
        "temperature_2m": [9.1, 10.4, 11.0, 6.2, null, 7.9],
        "precipitation": [0.0, 0.1, 0.0, 1.2, 0.4, 0.0],
        "wind_speed_10m": [14.0, 15.5, 16.1, 22.3, 25.0, 24.8],
        "wind_direction_10m": [250, 255, 260, 310, 300, 305]
    }
}"#;

#[test]
fn parses_and_reduces_fixture() {
    let samples = parse_forecast(FIXTURE).expect("fixture parses");
    assert_eq!(samples.len(), 6);

    let rows = daily_at_noon(&samples, 7);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].date.to_string(), "2026-10-19");
    assert_eq!(rows[0].temperature_2m_mean, 10.4);
    assert_eq!(rows[0].precipitation_sum, 0.1);
    assert_eq!(rows[0].wind_speed_10m_max, 15.5);
    assert_eq!(rows[0].wind_direction_10m_dominant, 255.0);

    // Noon is incomplete on the 20th; 11:00 and 13:00 tie, the earlier wins.
    assert_eq!(rows[1].temperature_2m_mean, 6.2);
}

#[tokio::test]
#[ignore] // requires network
async fn live_forecast_for_toronto() {
    let client = flow_weather::OpenMeteoClient::new(flow_config::WeatherConfig::default())
        .expect("client builds");
    let rows = client.daily_forecast().await.expect("forecast");
    println!("{rows:#?}");
    assert!(!rows.is_empty());
}
