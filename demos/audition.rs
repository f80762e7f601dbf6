//! Interactive audition of the drum-machine signal source.
//!
//! Simulates the tick engine inside the audio callback and mixes the five
//! output lines to the sound card.
//!
//! Press 1-4 to toggle tone channels, N to toggle noise.
//! Press Q or ESC to quit.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use drumnoise::{
    DrumSource, Lfsr16, NoisePump, SimPin, SimTimer, SquareOscillator, TickScheduler,
    TICK_PERIOD_US, TONE_CHANNELS, TONE_FREQUENCIES_HZ,
};
use std::io::{stdout, Write};
use std::sync::{Arc, Mutex};

const TICK_RATE_HZ: f64 = 1e6 / TICK_PERIOD_US as f64;

type Scheduler =
    TickScheduler<SimTimer, SquareOscillator<SimPin, TICK_PERIOD_US>, TICK_PERIOD_US, TONE_CHANNELS>;

struct AudioState {
    scheduler: Scheduler,
    pump: NoisePump<Lfsr16, SimPin>,
    tone_enabled: [bool; TONE_CHANNELS],
    noise_enabled: bool,
    /// Fractional ticks owed to the engine, in ticks per audio sample.
    tick_accumulator: f64,
    ticks_per_sample: f64,
}

impl AudioState {
    fn new(sample_rate: f64) -> Result<Self> {
        let source = DrumSource::new(
            SimTimer::new(),
            [SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new()],
            SimPin::new(),
        )?;
        let (mut scheduler, mut pump) = source.split();
        scheduler.begin();
        pump.begin();
        Ok(Self {
            scheduler,
            pump,
            tone_enabled: [true; TONE_CHANNELS],
            noise_enabled: true,
            tick_accumulator: 0.0,
            ticks_per_sample: TICK_RATE_HZ / sample_rate,
        })
    }

    fn next_sample(&mut self) -> f64 {
        self.tick_accumulator += self.ticks_per_sample;
        while self.tick_accumulator >= 1.0 {
            self.scheduler.on_fire();
            self.pump.step();
            self.tick_accumulator -= 1.0;
        }

        let mut mix = 0.0;
        for (channel, enabled) in self.scheduler.channels().iter().zip(self.tone_enabled) {
            if enabled {
                mix += match channel.pin().level() {
                    Some(true) => 1.0,
                    _ => -1.0,
                };
            }
        }
        if self.noise_enabled {
            mix += match self.pump.pin().level() {
                Some(true) => 1.0,
                _ => -1.0,
            };
        }
        mix / (TONE_CHANNELS + 1) as f64
    }
}

fn run_audio_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<AudioState>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut state = state.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let sample = state.next_sample();
                let value: T = T::from_sample(sample);
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

fn draw_ui(tone_enabled: [bool; TONE_CHANNELS], noise_enabled: bool) -> Result<()> {
    let mut stdout = stdout();

    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    stdout.execute(crossterm::cursor::MoveTo(0, 0))?;

    let mark = |on| if on { "ON " } else { "off" };
    write!(
        stdout,
        "drumnoise audition | 1-4=tones N=noise Q=quit\r\n\r\n"
    )?;
    for (i, (freq, on)) in TONE_FREQUENCIES_HZ.iter().zip(tone_enabled).enumerate() {
        write!(stdout, "  [{}] tone {:>4} Hz  {}\r\n", i + 1, freq, mark(on))?;
    }
    write!(stdout, "  [N] noise         {}\r\n", mark(noise_enabled))?;

    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    // Setup audio
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0 as f64;

    let state = Arc::new(Mutex::new(AudioState::new(sample_rate)?));

    let _stream = match config.sample_format() {
        SampleFormat::F32 => run_audio_stream::<f32>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => run_audio_stream::<i16>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => run_audio_stream::<u16>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ))
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    {
        let state = state.lock().unwrap();
        draw_ui(state.tone_enabled, state.noise_enabled)?;
    }

    // Event loop
    loop {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char(c @ '1'..='4') => {
                        let mut state = state.lock().unwrap();
                        let index = c as usize - '1' as usize;
                        state.tone_enabled[index] = !state.tone_enabled[index];
                        let (tones, noise) = (state.tone_enabled, state.noise_enabled);
                        drop(state);
                        draw_ui(tones, noise)?;
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') => {
                        let mut state = state.lock().unwrap();
                        state.noise_enabled = !state.noise_enabled;
                        let (tones, noise) = (state.tone_enabled, state.noise_enabled);
                        drop(state);
                        draw_ui(tones, noise)?;
                    }
                    _ => {}
                }
            }
        }
    }

    // Cleanup terminal
    stdout().execute(crossterm::cursor::Show)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    Ok(())
}
