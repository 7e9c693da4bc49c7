// SPDX-License-Identifier: MPL-2.0

//! Live machine monitor.
//!
//! Subscribes to all four telemetry streams of one machine and prints a
//! line for every state change, plus availability transitions, for five
//! minutes.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example monitor -- <broker_host> <device_id> [username] [password]
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Broker without authentication
//! cargo run --example monitor -- 192.168.1.50 gs3_kitchen
//!
//! # Broker with authentication
//! cargo run --example monitor -- 192.168.1.50 gs3_kitchen mqtt_user mqtt_pass
//! ```

use std::env;
use std::time::Duration;

use brewlink::{Coordinator, MqttBroker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <broker_host> <device_id> [username] [password]",
            args[0]
        );
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example monitor -- 192.168.1.50 gs3_kitchen user pass");
        std::process::exit(1);
    }

    let host = &args[1];
    let device_id = &args[2];

    println!("Connecting to MQTT broker {host}...");

    let mut builder = MqttBroker::builder().host(host);
    if args.len() >= 5 {
        builder = builder.credentials(&args[3], &args[4]);
    }
    let broker = builder.build().await?;

    let coordinator = Coordinator::builder(broker.clone())
        .device_id(device_id)
        .build();
    coordinator.setup().await?;

    coordinator.on_availability_changed(|online| {
        println!("== machine is {} ==", if online { "online" } else { "offline" });
    });

    coordinator.on_update(|state| {
        println!(
            "{:>8} | brew {:5.1}/{:.1} °C | steam {:5.1} °C | {:4.1} bar | {:5.1} g",
            state.machine_state,
            state.brew_temp,
            state.brew_setpoint,
            state.steam_temp,
            state.pressure,
            state.scale_weight,
        );
    });

    println!("Watching {device_id} for 5 minutes...");
    tokio::time::sleep(Duration::from_secs(300)).await;

    println!("Shutting down...");
    coordinator.shutdown().await?;
    broker.disconnect().await?;

    println!("Done!");
    Ok(())
}
