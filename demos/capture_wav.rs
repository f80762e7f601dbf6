//! Renders two seconds of the simulated source to `drumnoise.wav`.
//!
//! Requires the `wav-capture` feature:
//!
//! ```text
//! cargo run --example capture_wav --features wav-capture
//! ```

use anyhow::Result;
use drumnoise::capture::{mix_levels, write_mix_wav};
use drumnoise::{DrumSource, SimPin, SimTimer, TICK_PERIOD_US};

fn main() -> Result<()> {
    let tick_rate = 1_000_000 / TICK_PERIOD_US;
    let ticks = tick_rate * 2; // two seconds

    let source = DrumSource::new(
        SimTimer::new(),
        [SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new()],
        SimPin::new(),
    )?;
    let (mut scheduler, mut pump) = source.split();
    scheduler.begin();
    pump.begin();

    let mut tone_levels: [Vec<bool>; 4] = Default::default();
    let mut noise_levels = Vec::with_capacity(ticks as usize);

    for _ in 0..ticks {
        scheduler.on_fire();
        pump.step();
        for (levels, channel) in tone_levels.iter_mut().zip(scheduler.channels()) {
            levels.push(channel.pin().level().unwrap_or(false));
        }
        noise_levels.push(pump.pin().level().unwrap_or(false));
    }

    let streams: Vec<&[bool]> = tone_levels
        .iter()
        .map(Vec::as_slice)
        .chain(std::iter::once(noise_levels.as_slice()))
        .collect();
    let mixed = mix_levels(&streams);
    write_mix_wav("drumnoise.wav", &mixed, tick_rate)?;

    println!("wrote drumnoise.wav ({} samples at {} Hz)", mixed.len(), tick_rate);
    Ok(())
}
