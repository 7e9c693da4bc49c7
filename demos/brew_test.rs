// SPDX-License-Identifier: MPL-2.0

//! Test program: pull a timed shot.
//!
//! Powers the machine on, waits for it to report ready, runs the brew for
//! 25 seconds, then stops it and prints the shot result.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example brew_test -- <broker_host> <device_id> <username> <password>
//! ```
//!
//! # Example
//!
//! ```bash
//! cargo run --example brew_test -- 192.168.1.50 gs3_kitchen mqtt_user mqtt_pass
//! ```

use std::env;
use std::time::Duration;

use brewlink::{Coordinator, MqttBroker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 5 {
        eprintln!(
            "Usage: {} <broker_host> <device_id> <username> <password>",
            args[0]
        );
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example brew_test -- 192.168.1.50 gs3_kitchen user pass");
        std::process::exit(1);
    }

    let host = &args[1];
    let device_id = &args[2];
    let username = &args[3];
    let password = &args[4];

    println!("Connecting to MQTT broker {host}...");

    let broker = MqttBroker::builder()
        .host(host)
        .credentials(username, password)
        .build()
        .await?;

    let coordinator = Coordinator::builder(broker.clone())
        .device_id(device_id)
        .build();
    coordinator.setup().await?;

    println!("Connected!");
    println!("Powering on...");
    coordinator.set_mode("on").await?;

    // Wait up to five minutes for the boilers to come up
    for _ in 0..60 {
        tokio::time::sleep(Duration::from_secs(5)).await;
        let state = coordinator.snapshot();
        println!(
            "  {} (brew {:.1} °C, target {:.1} °C)",
            state.machine_state, state.brew_temp, state.brew_setpoint
        );
        if state.is_ready() {
            break;
        }
    }

    if !coordinator.snapshot().is_ready() {
        eprintln!("Machine never reported ready, giving up");
        coordinator.shutdown().await?;
        broker.disconnect().await?;
        std::process::exit(1);
    }

    println!("Starting the shot...");
    coordinator.brew_start().await?;

    println!("Brewing for 25 seconds...");
    tokio::time::sleep(Duration::from_secs(25)).await;

    println!("Stopping the shot...");
    coordinator.brew_stop().await?;

    let state = coordinator.snapshot();
    println!(
        "Shot finished: {:.1} g in {:.1} s",
        state.shot_weight, state.shot_duration
    );

    println!("Disconnecting...");
    coordinator.shutdown().await?;
    broker.disconnect().await?;

    println!("Done!");
    Ok(())
}
