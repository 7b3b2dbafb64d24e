//! The public facade: load a bank and a song, play/pause/stop it, and
//! read back developer diagnostics.

use std::collections::HashMap;
use std::env;

use crate::allocator::{DriverVersion, VoiceAllocator};
use crate::bank::InstrumentBank;
use crate::channel::{ChannelHandle, ChannelState};
use crate::dispatch::{self, DispatchedEvent};
use crate::midi::MidiMessage;
use crate::opl::{OplDriver, OplProgrammer};
use crate::scheduler::{self, Scheduler};
use crate::track::TrackSource;

/// Maximum size, in bytes, of a MIDI file this crate will accept, matching
/// the original driver's `MAXMIDLENGTH` guard (96 KiB).
pub const MAX_MIDI_LEN: usize = 96 * 1024;

/// How many recently triggered percussion instruments `dev_status` keeps
/// around for its ring-buffer report.
const PERCUSSION_LOG_LEN: usize = 16;

/// How the chip should be initialized and which historical voice-stealing
/// policy to reproduce; the DMX-era equivalent of passing `-opl3` and
/// `-reverse` plus a `driver_version` setting on the command line.
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    pub driver_version: DriverVersion,
    /// Enable the second OPL3 operator bank (18 voices instead of 9).
    /// Only takes effect when `driver_version` isn't `Beta`, matching
    /// the original's guard against enabling OPL3 on the beta driver.
    pub opl3_mode: bool,
    /// Swap the stereo channels (`-reverse`).
    pub reverse_stereo: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            driver_version: DriverVersion::default(),
            opl3_mode: false,
            reverse_stereo: false,
        }
    }
}

impl PlayerConfig {
    /// Effective OPL3 mode, after applying the driver-version guard the
    /// original enforces: OPL3 never activates on the beta driver.
    pub fn effective_opl3_mode(&self) -> bool {
        self.opl3_mode && self.driver_version != DriverVersion::Beta
    }

    /// Build a config from an explicit value, unless the `DMXOPTION`
    /// environment variable is set, in which case its flags
    /// (`-opl3`, `-reverse`) override it. Matches the original's
    /// `snd_dmxoption`/`DMXOPTION` precedence: environment wins.
    pub fn from_env_or(default: PlayerConfig) -> Self {
        match env::var("DMXOPTION") {
            Ok(value) => {
                let mut config = default;
                config.opl3_mode = value.contains("-opl3");
                config.reverse_stereo = value.contains("-reverse");
                config
            }
            Err(_) => default,
        }
    }
}

/// Sniffs raw song data to decide whether it looks like a Standard MIDI
/// File, and enforces the size cap the original driver guards with before
/// handing data to its MUS-to-MIDI converter.
pub struct SongSource;

/// Why a candidate song was rejected before playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SongSourceError {
    #[error("song data is {got} bytes, exceeds the {max}-byte limit")]
    TooLarge { got: usize, max: usize },
}

impl SongSource {
    /// True if `data` starts with the 4-byte `MThd` Standard MIDI File
    /// signature, matching `IsMid`.
    pub fn sniff(data: &[u8]) -> bool {
        data.len() > 4 && &data[0..4] == b"MThd"
    }

    /// Reject song data over [`MAX_MIDI_LEN`] bytes before it is handed
    /// to a MIDI/MUS parser.
    pub fn check_length(data: &[u8]) -> Result<(), SongSourceError> {
        if data.len() > MAX_MIDI_LEN {
            Err(SongSourceError::TooLarge {
                got: data.len(),
                max: MAX_MIDI_LEN,
            })
        } else {
            Ok(())
        }
    }
}

/// Playback state of the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// The beta-only fader that ramps music volume up over the first tick of
/// a song, matching `StartFader`/`FaderCallback`.
#[derive(Debug, Clone, Copy)]
struct Fader {
    active: bool,
    step: u32,
    current_volume: u8,
}

impl Fader {
    const STEPS: u32 = 50;

    fn new(beta: bool) -> Self {
        Fader {
            active: beta,
            step: 0,
            current_volume: if beta { 0 } else { 127 },
        }
    }

    /// Advance one 20ms tick; returns the new fader volume.
    fn tick(&mut self) -> u8 {
        if !self.active {
            return self.current_volume;
        }
        self.step += 1;
        self.current_volume = ((self.step * 127) / Self::STEPS) as u8;
        if self.step >= Self::STEPS {
            self.active = false;
            self.current_volume = 127;
        }
        self.current_volume
    }
}

/// Extract the raw MIDI channel number a message is addressed to, if it
/// carries one (channel voice messages do; meta/system messages don't).
fn midi_channel(message: &MidiMessage) -> Option<u8> {
    match message {
        MidiMessage::NoteOff { channel, .. }
        | MidiMessage::NoteOn { channel, .. }
        | MidiMessage::PolyPressure { channel, .. }
        | MidiMessage::ControlChange { channel, .. }
        | MidiMessage::ProgramChange { channel, .. }
        | MidiMessage::ChannelPressure { channel, .. }
        | MidiMessage::PitchBend { channel, .. } => Some(*channel),
        _ => None,
    }
}

/// Ties together the instrument bank, voice allocator, channel table and
/// scheduler into the single entry point a host application drives.
pub struct Player<D: OplDriver> {
    driver: D,
    bank: InstrumentBank,
    config: PlayerConfig,
    allocator: VoiceAllocator,
    channels: HashMap<ChannelHandle, ChannelState>,
    scheduler: Scheduler,
    state: PlaybackState,
    music_volume: u8,
    fader: Fader,
    start_music_volume: Option<u8>,
    percussion_log: Vec<u8>,
}

impl<D: OplDriver> Player<D> {
    pub fn new(mut driver: D, bank: InstrumentBank, config: PlayerConfig) -> Result<Self, crate::opl::DriverError> {
        let opl3_mode = config.effective_opl3_mode();
        driver.init(opl3_mode)?;
        if opl3_mode {
            OplProgrammer::enable_opl3(&mut driver);
        }

        Ok(Player {
            driver,
            bank,
            config,
            allocator: VoiceAllocator::new(opl3_mode, config.driver_version),
            channels: HashMap::new(),
            scheduler: Scheduler::new(0),
            state: PlaybackState::Stopped,
            music_volume: 127,
            fader: Fader::new(config.driver_version == DriverVersion::Beta),
            start_music_volume: None,
            percussion_log: Vec::with_capacity(PERCUSSION_LOG_LEN),
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Register a track's channel count so the scheduler and channel
    /// table have slots for it (the player facade's equivalent of
    /// `I_OPL_PlaySong` allocating per-channel state for a loaded song).
    pub fn register_song(&mut self, num_tracks: usize) {
        self.scheduler = Scheduler::new(num_tracks);
        self.channels.clear();
        self.state = PlaybackState::Stopped;
        self.start_music_volume = Some(self.music_volume);
        self.fader = Fader::new(self.config.driver_version == DriverVersion::Beta);
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
        self.driver.set_paused(false);
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            self.driver.set_paused(true);

            let indices: Vec<usize> = self
                .allocator
                .pool()
                .iter_alloced()
                .filter(|&i| {
                    self.allocator
                        .pool()
                        .voice(i)
                        .current_instr
                        .map(|r| !r.percussion)
                        .unwrap_or(true)
                })
                .collect();
            for idx in indices {
                let voice = self.allocator.pool().voice(idx).clone();
                OplProgrammer::voice_key_off(&mut self.driver, &voice);
            }
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
            self.driver.set_paused(false);
        }
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.driver.clear_callbacks();
        let indices: Vec<usize> = self.allocator.pool().iter_alloced().collect();
        for idx in indices {
            let voice = self.allocator.pool().voice(idx).clone();
            OplProgrammer::voice_key_off(&mut self.driver, &voice);
            self.allocator.pool_mut().remove_from_alloced_list(idx);
            self.allocator.pool_mut().push_free(idx);
        }
    }

    /// Rewind scheduling state and forget all per-channel state, ready to
    /// schedule every track again, matching `RestartSong`.
    pub fn restart_song(&mut self) {
        self.scheduler.restart();
        self.channels.clear();
    }

    /// Apply (or clear) the beta-only `clip_start` volume ceiling that
    /// caps every channel at the volume the song started at.
    pub fn set_start_music_volume(&mut self, volume: Option<u8>) {
        self.start_music_volume = volume;
        self.recompute_all_channel_volumes(true);
    }

    pub fn set_music_volume(&mut self, volume: u8) {
        self.music_volume = volume;
        self.recompute_all_channel_volumes(false);
    }

    /// Recompute every channel's clipped volume. `clip_start` controls
    /// whether the beta-only `start_music_volume` ceiling applies, per
    /// `SetChannelVolume`'s `clip_start` parameter.
    fn recompute_all_channel_volumes(&mut self, clip_start: bool) {
        let fader_volume = self.fader.current_volume;
        let music_volume = self.music_volume;
        let start = if clip_start { self.start_music_volume } else { None };
        for channel in self.channels.values_mut() {
            channel.recompute_volume(music_volume, fader_volume, start);
        }
    }

    /// Advance the beta fader by one 20ms tick, if active, reprogramming
    /// every channel's volume without applying the start-volume clip
    /// (`clip_start=false`, matching `FaderCallback`).
    pub fn tick_fader(&mut self) {
        if self.fader.active {
            self.fader.tick();
            self.recompute_all_channel_volumes(false);
        }
    }

    /// Drive one track forward: dispatch its current event (if any),
    /// then advance the scheduler to find the next one. Returns the
    /// microsecond delay the caller should wait before calling this
    /// again for `track`, or `None` if the track (and, if every other
    /// track is also finished, the whole song) should wait for a
    /// restart instead.
    pub fn pump_track(&mut self, track: usize, source: &dyn TrackSource) -> Option<u32> {
        if self.state != PlaybackState::Playing {
            return None;
        }

        let index = self.scheduler.current_index(track);
        if let Some(event) = source.event(index) {
            let raw_channel = midi_channel(event.message()).unwrap_or(0);
            let dispatched = dispatch::dispatch(event.message());
            self.handle_event(track, raw_channel, dispatched);
        }

        match self.scheduler.advance(track, source) {
            Some(next_tick) => {
                let us = self.scheduler.ticks_to_us(next_tick, source.ticks_per_beat());
                let delay = us.min(u32::MAX as u64) as u32;
                self.driver.set_callback(delay);
                Some(delay)
            }
            None => {
                if self.scheduler.all_tracks_finished() {
                    self.driver.set_callback(scheduler::RESTART_DELAY_US);
                }
                None
            }
        }
    }

    /// Handle one dispatched MIDI event for `track`/raw channel, driving
    /// voice allocation, channel state and the OPL programmer.
    pub fn handle_event(&mut self, track: usize, raw_channel: u8, event: DispatchedEvent) {
        let channel_num = dispatch::track_channel_for_event(raw_channel);
        let handle = ChannelHandle::new(track, channel_num);
        let is_percussion = dispatch::is_percussion_channel(channel_num);
        let music_volume = self.music_volume;
        let fader_volume = self.fader.current_volume;
        let start_volume = self.start_music_volume;
        self.channels.entry(handle).or_insert_with(|| {
            // InitChannel: volume starts clipped through the same chain
            // SetChannelVolume uses, not a bare 100, so a note-on that
            // lands before the beta fader's first tick is still silent.
            let mut channel = ChannelState::new(handle, is_percussion);
            channel.recompute_volume(music_volume, fader_volume, start_volume);
            channel
        });

        match event {
            DispatchedEvent::NoteOn { key, velocity, .. } => {
                self.note_on(handle, key, velocity);
            }
            DispatchedEvent::NoteOff { key, .. } => {
                self.note_off(handle, key);
            }
            DispatchedEvent::ProgramChange { program, .. } => {
                if let Some(channel) = self.channels.get_mut(&handle) {
                    channel.set_program(program);
                }
            }
            DispatchedEvent::ChannelVolume { volume, .. } => {
                if let Some(channel) = self.channels.get_mut(&handle) {
                    channel.set_volume_base(volume);
                }
                self.recompute_all_channel_volumes(true);
                self.reprogram_channel_voices_volume(handle);
            }
            DispatchedEvent::ChannelPan { pan, .. } => {
                self.set_channel_pan(handle, pan);
            }
            DispatchedEvent::AllNotesOff { .. } => {
                self.all_notes_off(handle);
            }
            DispatchedEvent::PitchBend { value, .. } => {
                self.set_channel_bend(handle, value);
            }
            DispatchedEvent::TempoChange { us_per_beat } => {
                let factor = self.scheduler.set_tempo(us_per_beat);
                self.driver.adjust_callbacks(factor);
            }
            DispatchedEvent::EndOfTrack | DispatchedEvent::Ignored => {}
        }
    }

    fn note_on(&mut self, handle: ChannelHandle, key: u8, velocity: u8) {
        let is_percussion = handle.channel == dispatch::MUS_PERCUSSION_CHANNEL;

        let (instrument_ref, note) = if is_percussion {
            let instrument_ref = match self.bank.percussion_ref(key) {
                Some(r) => r,
                None => return,
            };
            self.percussion_log.push(key);
            if self.percussion_log.len() > PERCUSSION_LOG_LEN {
                self.percussion_log.remove(0);
            }
            (instrument_ref, 60u8)
        } else {
            let program = self.channels.get(&handle).map(|c| c.program()).unwrap_or(0);
            (crate::bank::InstrumentRef::melodic(program), key)
        };

        let instrument = self.bank.get(instrument_ref).clone();
        let double_voice = instrument.is_double_voice();
        let opl3_mode = self.config.effective_opl3_mode();

        let (channel_pan, channel_volume, bend) = {
            let channel = self.channels.get(&handle);
            (
                channel.map(|c| c.pan()).unwrap_or(0x30),
                channel.map(|c| c.volume()).unwrap_or(127),
                channel.map(|c| c.bend()).unwrap_or(0),
            )
        };

        let released = self
            .allocator
            .ensure_capacity(handle, instrument_ref, double_voice, opl3_mode);
        for idx in released {
            let voice = self.allocator.pool().voice(idx).clone();
            OplProgrammer::voice_key_off(&mut self.driver, &voice);
        }

        // VoiceKeyOn forces instrument-voice 0 for both calls on the
        // doom1_1.666 driver when the chip isn't in OPL3 mode.
        let forced = self.allocator.forces_single_voice_data(opl3_mode);

        let mut instrument_voices = if double_voice { vec![0usize, 1] } else { vec![0usize] };
        if self.allocator.programs_secondary_first() {
            instrument_voices.reverse();
        }

        let note_value = if instrument.is_fixed_pitch() { instrument.fixed_note } else { note };
        let beta = self.allocator.version() == DriverVersion::Beta;

        for instrument_voice_idx in instrument_voices {
            let effective_voice_idx = if forced { 0 } else { instrument_voice_idx };
            let Some(voice_index) = self.allocator.pool_mut().get_free_voice() else {
                log::trace!("no free voice for note {key} on {handle:?}, dropped");
                continue;
            };

            let voice = self.allocator.pool_mut().voice_mut(voice_index);
            voice.channel = Some(handle);
            voice.key = key;
            voice.note = note_value;
            voice.reg_pan = channel_pan;

            OplProgrammer::set_voice_instrument(&mut self.driver, voice, instrument_ref, effective_voice_idx, &instrument);
            OplProgrammer::set_voice_volume(&mut self.driver, voice, &instrument, velocity, channel_volume);
            voice.freq = 0;
            OplProgrammer::update_voice_frequency(&mut self.driver, voice, &instrument, bend, beta);
        }
    }

    fn note_off(&mut self, handle: ChannelHandle, key: u8) {
        let victims: Vec<usize> = self
            .allocator
            .pool()
            .iter_alloced()
            .filter(|&i| {
                let voice = self.allocator.pool().voice(i);
                voice.channel == Some(handle) && voice.key == key
            })
            .collect();

        for idx in victims {
            // Already freed as part of an earlier cascade this pass.
            if self.allocator.pool().voice(idx).channel != Some(handle) {
                continue;
            }
            let released = self.allocator.release(idx);
            for r in released {
                let voice = self.allocator.pool().voice(r).clone();
                OplProgrammer::voice_key_off(&mut self.driver, &voice);
            }
        }
    }

    fn all_notes_off(&mut self, handle: ChannelHandle) {
        let victims: Vec<usize> = self
            .allocator
            .pool()
            .iter_alloced()
            .filter(|&i| self.allocator.pool().voice(i).channel == Some(handle))
            .collect();

        for idx in victims {
            if self.allocator.pool().voice(idx).channel != Some(handle) {
                continue;
            }
            let released = self.allocator.release(idx);
            for r in released {
                let voice = self.allocator.pool().voice(r).clone();
                OplProgrammer::voice_key_off(&mut self.driver, &voice);
            }
        }
    }

    fn reprogram_channel_voices_volume(&mut self, handle: ChannelHandle) {
        let channel_volume = self.channels.get(&handle).map(|c| c.volume()).unwrap_or(127);
        let indices: Vec<usize> = self
            .allocator
            .pool()
            .iter_alloced()
            .filter(|&i| self.allocator.pool().voice(i).channel == Some(handle))
            .collect();
        for idx in indices {
            let Some(instrument_ref) = self.allocator.pool().voice(idx).current_instr else { continue };
            let instrument = self.bank.get(instrument_ref).clone();
            let note_volume = self.allocator.pool().voice(idx).note_volume;
            let voice = self.allocator.pool_mut().voice_mut(idx);
            OplProgrammer::set_voice_volume(&mut self.driver, voice, &instrument, note_volume, channel_volume);
        }
    }

    /// `SetChannelPan`: reverse-stereo correction, then encode into the
    /// three-way (left/right/center) register value OPL3 actually
    /// supports; a no-op in OPL2 (monaural) mode.
    fn set_channel_pan(&mut self, handle: ChannelHandle, raw: u8) {
        if !self.config.effective_opl3_mode() {
            return;
        }
        let raw = if self.config.reverse_stereo { 144u8.saturating_sub(raw) } else { raw };
        let encoded = if raw >= 96 {
            0x10
        } else if raw <= 48 {
            0x20
        } else {
            0x30
        };

        let changed = self.channels.get(&handle).map(|c| c.pan() != encoded).unwrap_or(false);
        if !changed {
            return;
        }
        if let Some(channel) = self.channels.get_mut(&handle) {
            channel.set_pan(encoded);
        }

        let indices: Vec<usize> = self
            .allocator
            .pool()
            .iter_alloced()
            .filter(|&i| self.allocator.pool().voice(i).channel == Some(handle))
            .collect();
        for idx in indices {
            let Some(instrument_ref) = self.allocator.pool().voice(idx).current_instr else { continue };
            let instrument = self.bank.get(instrument_ref).clone();
            let voice = self.allocator.pool_mut().voice_mut(idx);
            OplProgrammer::set_voice_pan(&mut self.driver, voice, &instrument, encoded);
        }
    }

    /// `PitchBendEvent`: standard drivers derive semitone bend straight
    /// from the MSB; the beta driver uses a different fixed-point curve
    /// across both bytes.
    fn set_channel_bend(&mut self, handle: ChannelHandle, raw_value: u16) {
        let msb = ((raw_value >> 7) & 0x7f) as i32;
        let lsb = (raw_value & 0x7f) as i32;
        let bend = if self.allocator.version() == DriverVersion::Beta {
            let mut full = (msb << 1) | ((lsb >> 6) & 1);
            if full >= 128 {
                full += 3;
            }
            full / 4 - 30
        } else {
            msb - 64
        };

        if let Some(channel) = self.channels.get_mut(&handle) {
            channel.set_bend(bend);
        }

        let beta = self.allocator.version() == DriverVersion::Beta;
        let indices: Vec<usize> = self
            .allocator
            .pool()
            .iter_alloced()
            .filter(|&i| self.allocator.pool().voice(i).channel == Some(handle))
            .collect();
        for idx in indices {
            let Some(instrument_ref) = self.allocator.pool().voice(idx).current_instr else { continue };
            let instrument = self.bank.get(instrument_ref).clone();
            let voice = self.allocator.pool_mut().voice_mut(idx);
            OplProgrammer::update_voice_frequency(&mut self.driver, voice, &instrument, bend, beta);
        }
    }

    /// Developer-only status report: which voices are in use and the
    /// last `PERCUSSION_LOG_LEN` percussion instruments played, matching
    /// `I_OPL_DevMessages`/`NumActiveChannels`/`ChannelInUse`.
    pub fn dev_status(&self) -> String {
        let active = self.allocator.pool().num_allocated();
        let total = self.allocator.pool().num_voices();
        let mut report = format!("active channels: {active}/{total}\n");
        for index in self.allocator.pool().iter_alloced() {
            let voice = self.allocator.pool().voice(index);
            report.push_str(&format!(
                "  voice {}: channel={:?} key={}\n",
                voice.index, voice.channel, voice.key
            ));
        }
        report.push_str("recent percussion: ");
        for key in &self.percussion_log {
            report.push_str(&format!("{key} "));
        }
        report.push('\n');
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{Instrument, InstrumentFlags, InstrumentVoice};

    struct NullDriver;

    impl OplDriver for NullDriver {
        fn init(&mut self, _opl3_mode: bool) -> Result<(), crate::opl::DriverError> {
            Ok(())
        }
        fn shutdown(&mut self) {}
        fn write_register(&mut self, _array: crate::opl::RegisterArray, _reg: u8, _value: u8) {}
        fn set_callback(&mut self, _delay_us: u32) -> crate::opl::CallbackId {
            0
        }
        fn clear_callbacks(&mut self) {}
        fn adjust_callbacks(&mut self, _factor: f64) {}
        fn set_paused(&mut self, _paused: bool) {}
    }

    fn empty_bank() -> InstrumentBank {
        let instrument = Instrument {
            flags: InstrumentFlags::empty(),
            fine_tuning: 0,
            fixed_note: 0,
            voices: [InstrumentVoice::default(), InstrumentVoice::default()],
        };
        InstrumentBank::from_instruments(
            vec![instrument.clone(); 128],
            vec![instrument; 47],
            vec!["melodic".to_string(); 128],
            vec!["percussion".to_string(); 47],
        )
    }

    fn double_voice_bank() -> InstrumentBank {
        let instrument = Instrument {
            flags: InstrumentFlags::DOUBLE_VOICE,
            fine_tuning: 0,
            fixed_note: 0,
            voices: [InstrumentVoice::default(), InstrumentVoice::default()],
        };
        InstrumentBank::from_instruments(
            vec![instrument.clone(); 128],
            vec![instrument; 47],
            vec!["melodic".to_string(); 128],
            vec!["percussion".to_string(); 47],
        )
    }

    #[test]
    fn song_sniff_detects_mthd_header() {
        assert!(SongSource::sniff(b"MThd\0\0\0\x06"));
        assert!(!SongSource::sniff(b"MUS\x1a"));
    }

    #[test]
    fn song_length_cap_rejects_oversized_data() {
        let data = vec![0u8; MAX_MIDI_LEN + 1];
        assert!(SongSource::check_length(&data).is_err());
    }

    #[test]
    fn dmxoption_env_overrides_default_config() {
        std::env::set_var("DMXOPTION", "-opl3 -reverse");
        let config = PlayerConfig::from_env_or(PlayerConfig::default());
        assert!(config.opl3_mode);
        assert!(config.reverse_stereo);
        std::env::remove_var("DMXOPTION");
    }

    #[test]
    fn note_on_then_off_releases_the_voice() {
        let mut player = Player::new(NullDriver, empty_bank(), PlayerConfig::default()).unwrap();
        player.register_song(1);
        let handle = ChannelHandle::new(0, 0);
        player.handle_event(0, 0, DispatchedEvent::NoteOn { channel: 0, key: 60, velocity: 100 });
        assert_eq!(player.allocator.pool().num_allocated(), 1);
        player.handle_event(0, 0, DispatchedEvent::NoteOff { channel: 0, key: 60 });
        assert_eq!(player.allocator.pool().num_allocated(), 0);
        let _ = handle;
    }

    #[test]
    fn double_voice_instrument_allocates_two_voices() {
        let mut player = Player::new(NullDriver, double_voice_bank(), PlayerConfig {
            driver_version: DriverVersion::Doom1_9,
            opl3_mode: true,
            reverse_stereo: false,
        })
        .unwrap();
        player.register_song(1);
        player.handle_event(0, 0, DispatchedEvent::NoteOn { channel: 0, key: 60, velocity: 100 });
        assert_eq!(player.allocator.pool().num_allocated(), 2);
        player.handle_event(0, 0, DispatchedEvent::NoteOff { channel: 0, key: 60 });
        assert_eq!(player.allocator.pool().num_allocated(), 0);
    }

    #[test]
    fn percussion_note_resolves_from_bank_percussion_range() {
        let mut player = Player::new(NullDriver, empty_bank(), PlayerConfig::default()).unwrap();
        player.register_song(1);
        // Raw channel 9 (standard MIDI drum channel) swaps to 15 internally.
        player.handle_event(0, 9, DispatchedEvent::NoteOn { channel: 9, key: 38, velocity: 100 });
        assert_eq!(player.allocator.pool().num_allocated(), 1);
        assert!(player.dev_status().contains("recent percussion: 38"));
    }

    #[test]
    fn beta_fader_ramps_from_zero_to_full() {
        let mut player = Player::new(NullDriver, empty_bank(), PlayerConfig {
            driver_version: DriverVersion::Beta,
            opl3_mode: false,
            reverse_stereo: false,
        })
        .unwrap();
        assert_eq!(player.fader.current_volume, 0);
        for _ in 0..Fader::STEPS {
            player.tick_fader();
        }
        assert_eq!(player.fader.current_volume, 127);
    }

    #[test]
    fn dev_status_reports_active_voice_count() {
        let mut player = Player::new(NullDriver, empty_bank(), PlayerConfig::default()).unwrap();
        player.register_song(1);
        player.handle_event(0, 0, DispatchedEvent::NoteOn { channel: 0, key: 60, velocity: 100 });
        assert!(player.dev_status().contains("active channels: 1/"));
    }

    #[test]
    fn pump_track_dispatches_then_advances() {
        use crate::midi::MidiEvent;
        use crate::track::VecTrackSource;

        let mut player = Player::new(NullDriver, empty_bank(), PlayerConfig::default()).unwrap();
        player.register_song(1);
        player.play();
        let source = VecTrackSource::new(
            96,
            vec![
                MidiEvent::new(0, MidiMessage::note_on(0, 60, 100)),
                MidiEvent::new(96, MidiMessage::note_off(0, 60, 0)),
            ],
        );
        let delay = player.pump_track(0, &source);
        assert_eq!(player.allocator.pool().num_allocated(), 1);
        assert_eq!(delay, Some(500_000));
        player.pump_track(0, &source);
        assert_eq!(player.allocator.pool().num_allocated(), 0);
    }
}
