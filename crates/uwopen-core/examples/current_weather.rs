//! # Current Weather Example
//!
//! Fetches the current campus weather station readings.
//!
//! ## Usage
//!
//! ```bash
//! export UWATERLOO_API_KEY=your_key_here
//! cargo run --example current_weather
//! ```

use uwopen_core::UwClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("UWATERLOO_API_KEY")?;
    let client = UwClient::new(key);

    let weather = client.weather.current().await?;

    // The upstream envelope is returned verbatim: data under "data",
    // application status under "meta".
    println!("status: {}", weather["meta"]["status"]);
    println!("temperature: {}", weather["data"]["temperature_current_c"]);
    println!("observed at: {}", weather["data"]["observation_time"]);

    Ok(())
}
