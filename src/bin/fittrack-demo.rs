// ABOUTME: Demo driver feeding fixed sensor packets through the dispatcher
// ABOUTME: Prints one formatted summary line per packet, in packet order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Developers

//! Demo driver for the fittrack calculator.
//!
//! Processes a fixed ordered list of sensor packets and prints one summary
//! line per packet to stdout. Logs go to stderr; set `RUST_LOG=debug` to see
//! per-packet dispatch events.
//!
//! Usage:
//! ```bash
//! cargo run --bin fittrack-demo
//! ```

use anyhow::Result;
use fittrack::read_packet;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let packets: [(&str, &[f64]); 3] = [
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, data) in packets {
        let workout = read_packet(code, data)?;
        let summary = workout.summary()?;
        info!(code, workout = workout.name(), "processed sensor packet");
        println!("{}", summary.to_message());
    }

    Ok(())
}
