//! Sound effects
//!
//! Procedurally generated tones - no external files needed! Each effect is
//! synthesized into an in-memory WAV and handed to macroquad's audio backend.

use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

use crate::config::AudioSettings;
use crate::sim::GameEvent;

/// Sample rate of synthesized effects
pub const SAMPLE_RATE: u32 = 22_050;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// A point was scored
    Score,
    /// Match decided
    MatchWon,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::PaddleHit,
        SoundEffect::WallHit,
        SoundEffect::Score,
        SoundEffect::MatchWon,
    ];

    /// Effect to play for a game event
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallBounce => Some(SoundEffect::WallHit),
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::MatchWon { .. } => Some(SoundEffect::MatchWon),
        }
    }

    fn voice(&self) -> Tone {
        match self {
            // Solid thump
            SoundEffect::PaddleHit => Tone::sweep(150.0, 60.0, 0.12, 0.6),
            // Higher ping
            SoundEffect::WallHit => Tone::sweep(400.0, 400.0, 0.08, 0.3),
            // Falling blip
            SoundEffect::Score => Tone::sweep(660.0, 220.0, 0.3, 0.5),
            // Rising fanfare
            SoundEffect::MatchWon => Tone::sweep(330.0, 990.0, 0.8, 0.5),
        }
    }
}

/// A single sine sweep with an exponential decay envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration: f32,
    pub gain: f32,
}

impl Tone {
    pub fn sweep(start_hz: f32, end_hz: f32, duration: f32, gain: f32) -> Self {
        Self {
            start_hz,
            end_hz,
            duration,
            gain,
        }
    }

    /// 16-bit signed mono samples
    pub fn samples(&self, sample_rate: u32) -> Vec<i16> {
        let count = (self.duration * sample_rate as f32).round() as usize;
        let mut phase = 0.0f32;
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let t = i as f32 / count.max(1) as f32;
            let freq = self.start_hz + (self.end_hz - self.start_hz) * t;
            phase += std::f32::consts::TAU * freq / sample_rate as f32;
            // Decays to ~1% at the end of the tone
            let envelope = (-4.6 * t).exp();
            let value = phase.sin() * envelope * self.gain.clamp(0.0, 1.0);
            out.push((value * i16::MAX as f32) as i16);
        }
        out
    }
}

/// Encode mono 16-bit PCM samples as a RIFF/WAVE file
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    wav
}

/// Audio manager for the game
pub struct AudioManager {
    sounds: Vec<(SoundEffect, Sound)>,
    settings: AudioSettings,
}

impl AudioManager {
    /// Synthesize and load every effect; failures leave that effect silent
    pub async fn load(settings: AudioSettings) -> Self {
        let mut sounds = Vec::with_capacity(SoundEffect::ALL.len());
        for effect in SoundEffect::ALL {
            let wav = encode_wav(&effect.voice().samples(SAMPLE_RATE), SAMPLE_RATE);
            match load_sound_from_bytes(&wav).await {
                Ok(sound) => sounds.push((effect, sound)),
                Err(err) => log::warn!("Failed to load {effect:?} sound - effect disabled: {err:?}"),
            }
        }
        Self { sounds, settings }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let volume = self.settings.effective_volume();
        if volume <= 0.0 {
            return;
        }
        if let Some((_, sound)) = self.sounds.iter().find(|(e, _)| *e == effect) {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume,
                },
            );
        }
    }

    pub fn play_event(&self, event: &GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Score, Side};

    #[test]
    fn test_wav_header() {
        let wav = encode_wav(&[0, 1, -1], 8000);
        assert_eq!(wav.len(), 44 + 6);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 36 + 6);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 8000);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 6);
        assert_eq!(&wav[44..], &[0, 0, 1, 0, 0xff, 0xff]);
    }

    #[test]
    fn test_tone_length_and_decay() {
        let tone = Tone::sweep(440.0, 440.0, 0.5, 1.0);
        let samples = tone.samples(8000);
        assert_eq!(samples.len(), 4000);

        let peak = |s: &[i16]| s.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);
        assert!(peak(&samples[..400]) > 4 * peak(&samples[3600..]));
    }

    #[test]
    fn test_every_event_has_an_effect() {
        let events = [
            GameEvent::WallBounce,
            GameEvent::PaddleHit { side: Side::Left },
            GameEvent::Scored {
                side: Side::Right,
                score: Score { left: 0, right: 1 },
            },
            GameEvent::MatchWon { winner: Side::Left },
        ];
        let effects: Vec<_> = events.iter().filter_map(SoundEffect::for_event).collect();
        assert_eq!(
            effects,
            vec![
                SoundEffect::WallHit,
                SoundEffect::PaddleHit,
                SoundEffect::Score,
                SoundEffect::MatchWon
            ]
        );
    }
}
