//! Interactive hi-hat playground.
//!
//! Press SPACE for a closed hat, O for an open hat.
//! Press Q or ESC to quit.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hat420::{HatParams, HatVoice};
use rand::SeedableRng;
use std::io::{Write, stdout};
use std::sync::{Arc, Mutex};

const CLOSED_SUSTAIN: f32 = 12.0;
const OPEN_SUSTAIN: f32 = 85.0;

struct AudioState {
    // StdRng-backed so the voice is Send for the audio thread
    voice: HatVoice<rand::rngs::StdRng>,
    params: HatParams,
    pending_strike: f32,
}

impl AudioState {
    fn new() -> Self {
        Self {
            voice: HatVoice::with_rng(rand::rngs::StdRng::from_entropy()),
            params: HatParams {
                amplitude: 0.6,
                sustain: CLOSED_SUSTAIN,
            },
            pending_strike: 0.0,
        }
    }

    fn strike(&mut self, sustain: f32) {
        self.params.sustain = sustain;
        self.pending_strike = 1.0;
    }
}

fn run_audio_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<AudioState>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f32> + cpal::SizedSample,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut state = state.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                // The strike is a one-sample impulse on the voice's input.
                let input = std::mem::take(&mut state.pending_strike);
                let params = state.params;
                let sample = state.voice.tick(&params, input);
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

fn draw_ui(last_hit: &str) -> Result<()> {
    let mut stdout = stdout();

    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    stdout.execute(crossterm::cursor::MoveTo(0, 0))?;

    write!(
        stdout,
        "Last hit: {} | SPACE=closed O=open Q=quit",
        last_hit
    )?;

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

    let state = Arc::new(Mutex::new(AudioState::new()));

    // Start audio stream
    let _stream = match config.sample_format() {
        SampleFormat::F32 => run_audio_stream::<f32>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => run_audio_stream::<i16>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => run_audio_stream::<u16>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    draw_ui("none")?;

    // Event loop
    loop {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => {
                        state.lock().unwrap().strike(CLOSED_SUSTAIN);
                        draw_ui("closed")?;
                    }
                    KeyCode::Char('o') | KeyCode::Char('O') => {
                        state.lock().unwrap().strike(OPEN_SUSTAIN);
                        draw_ui("open")?;
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
