//! OPL chip register interface and the programmer that turns voice/channel
//! state into register writes.
//!
//! Actual chip access (real hardware, an emulator, a virtual port) is an
//! external collaborator behind [`OplDriver`]; this module never touches
//! hardware or emulator state itself, matching the original's split
//! between `i_oplmusic.c` and the `opl_*` backend it links against.

use thiserror::Error;

use crate::bank::{Instrument, InstrumentRef};
use crate::freq::{self, VOLUME_MAPPING_TABLE};
use crate::voicepool::Voice;

/// Errors an [`OplDriver`] implementation can report.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("OPL driver initialization failed: {0}")]
    InitFailed(String),

    #[error("requested OPL3 mode but the driver only supports OPL2")]
    Opl3Unsupported,

    #[error("driver is not initialized")]
    NotInitialized,
}

/// The two OPL register banks; OPL3 exposes a second bank at port 0x1xx
/// for its extra 9 voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterArray {
    Primary,
    Secondary,
}

/// Register base addresses, common to OPL2 and OPL3 (bank selected via
/// [`RegisterArray`]). These are standard AdLib/OPL register-map offsets;
/// they belong to the chip, not to any particular driver implementation.
pub mod reg {
    pub const TREMOLO: u8 = 0x20;
    pub const LEVEL: u8 = 0x40;
    pub const ATTACK: u8 = 0x60;
    pub const SUSTAIN: u8 = 0x80;
    pub const WAVEFORM: u8 = 0xE0;
    pub const FEEDBACK: u8 = 0xC0;
    pub const FREQ_1: u8 = 0xA0;
    pub const FREQ_2: u8 = 0xB0;
    /// OPL3 "new" / mode-enable register, bank 1 only.
    pub const OPL3_MODE: u8 = 0x05;
}

/// A callback handle a driver hands back from [`OplDriver::set_callback`]
/// so it can later be targeted by [`OplDriver::adjust_callbacks`].
pub type CallbackId = u64;

/// Abstraction over an OPL chip: register writes and a timer callback
/// facility the scheduler drives song playback with.
///
/// Implemented by whatever actually owns the chip (hardware I/O port,
/// software emulator, recording/test double); this crate only calls
/// through the trait.
pub trait OplDriver {
    fn init(&mut self, opl3_mode: bool) -> Result<(), DriverError>;
    fn shutdown(&mut self);

    fn write_register(&mut self, array: RegisterArray, reg: u8, value: u8);

    /// Schedule `callback` to fire after `delay_us` microseconds.
    fn set_callback(&mut self, delay_us: u32) -> CallbackId;
    /// Cancel every pending callback (song stop/restart).
    fn clear_callbacks(&mut self);
    /// Rescale every pending callback's remaining delay by `factor`
    /// (`old_us_per_beat / new_us_per_beat`), used when a tempo meta
    /// event changes playback speed mid-song.
    fn adjust_callbacks(&mut self, factor: f64);

    fn set_paused(&mut self, paused: bool);
}

/// Programs voice and channel state into OPL register writes.
///
/// Grouped as a free-standing set of functions over `&mut dyn OplDriver`
/// rather than a type with its own state, since every value it needs
/// (voice, instrument, channel) is already owned by the allocator.
pub struct OplProgrammer;

impl OplProgrammer {
    fn array(voice_array: u8) -> RegisterArray {
        if voice_array == 0 {
            RegisterArray::Primary
        } else {
            RegisterArray::Secondary
        }
    }

    /// Write one operator's five register fields. The carrier always gets
    /// its level register forced to maximum (0x3f); the modulator only
    /// when `max_level` is set, which happens whenever the voice is not
    /// in modulated-feedback mode (both operators must be silenced until
    /// `set_voice_volume` programs the real level).
    pub fn load_operator(driver: &mut dyn OplDriver, array: u8, op: u8, operator: &crate::bank::Operator, max_level: bool) {
        let a = Self::array(array);
        let mut level = (operator.scale & 0xc0) | (operator.level & 0x3f);
        if max_level {
            level |= 0x3f;
        }
        driver.write_register(a, reg::LEVEL + op, level);
        driver.write_register(a, reg::TREMOLO + op, operator.tremolo);
        driver.write_register(a, reg::ATTACK + op, operator.attack);
        driver.write_register(a, reg::SUSTAIN + op, operator.sustain);
        driver.write_register(a, reg::WAVEFORM + op, operator.waveform);
    }

    /// Program a voice's modulator/carrier operators and feedback register
    /// from `instrument`'s `instrument_voice`-th operator pair. A no-op if
    /// the voice is already programmed with the same instrument voice.
    pub fn set_voice_instrument(
        driver: &mut dyn OplDriver,
        voice: &mut Voice,
        instr_ref: InstrumentRef,
        instrument_voice: usize,
        instrument: &Instrument,
    ) {
        if voice.current_instr == Some(instr_ref) && voice.instrument_voice == instrument_voice {
            return;
        }
        voice.current_instr = Some(instr_ref);
        voice.instrument_voice = instrument_voice;

        let data = instrument.voice(instrument_voice);
        let modulating = (data.feedback & 0x01) == 0;

        // Doom loads the second operator first, then the first. The
        // carrier is held at minimum volume until set_voice_volume runs;
        // in non-modulating mode both operators must be held down.
        Self::load_operator(driver, voice.array, voice.op2, &data.carrier, true);
        Self::load_operator(driver, voice.array, voice.op1, &data.modulator, !modulating);

        driver.write_register(
            Self::array(voice.array),
            reg::FEEDBACK + voice.index as u8,
            data.feedback | voice.reg_pan,
        );

        // Hack to force a volume update on the next set_voice_volume call.
        voice.reg_volume = 999;
        voice.priority = crate::allocator::voice_priority(data);
    }

    /// Combine note velocity and channel volume into the carrier's level
    /// register, writing the modulator's level too when the voice uses
    /// non-modulated feedback.
    pub fn set_voice_volume(driver: &mut dyn OplDriver, voice: &mut Voice, instrument: &Instrument, note_volume: u8, channel_volume: u8) {
        voice.note_volume = note_volume;
        let data = instrument.voice(voice.instrument_voice);

        let midi_volume = 2 * (VOLUME_MAPPING_TABLE[channel_volume as usize & 0x7f] as u32 + 1);
        let full_volume = (VOLUME_MAPPING_TABLE[voice.note_volume as usize & 0x7f] as u32 * midi_volume) >> 9;
        let car_volume = 0x3f - full_volume.min(0x3f);

        if car_volume as u8 == voice.reg_volume {
            return;
        }

        voice.reg_volume = car_volume as u8 | (data.carrier.scale & 0xc0);
        driver.write_register(Self::array(voice.array), reg::LEVEL + voice.op2, voice.reg_volume);

        if (data.feedback & 0x01) != 0 && data.modulator.level != 0x3f {
            let mut mod_volume = 0x3f - data.modulator.level;
            if mod_volume >= car_volume as u8 {
                mod_volume = car_volume as u8;
            }
            driver.write_register(
                Self::array(voice.array),
                reg::LEVEL + voice.op1,
                mod_volume | (data.modulator.scale & 0xc0),
            );
        }
    }

    /// Write the stereo-pan/feedback register (bits 4-5 select left/right
    /// output in OPL3 mode; bit 0 carries the feedback LSB).
    pub fn set_voice_pan(driver: &mut dyn OplDriver, voice: &mut Voice, instrument: &Instrument, pan: u8) {
        voice.reg_pan = pan;
        let data = instrument.voice(voice.instrument_voice);
        driver.write_register(
            Self::array(voice.array),
            reg::FEEDBACK + voice.index as u8,
            data.feedback | pan,
        );
    }

    /// Recompute and, if changed, rewrite the voice's frequency register
    /// pair (low byte, then high byte with block and the key-on bit set).
    pub fn update_voice_frequency(driver: &mut dyn OplDriver, voice: &mut Voice, instrument: &Instrument, bend: i32, beta: bool) {
        let data = instrument.voice(voice.instrument_voice);
        let mut note = voice.note as i32;
        if !instrument.is_fixed_pitch() {
            note += data.base_note_offset as i32;
        }

        let is_second_voice = voice.instrument_voice != 0;
        let freq = freq::frequency_for_note(note, bend, instrument.fine_tuning, is_second_voice, beta);

        if voice.freq == freq {
            return;
        }

        let a = Self::array(voice.array);
        driver.write_register(a, reg::FREQ_1 + voice.index as u8, (freq & 0xff) as u8);
        driver.write_register(a, reg::FREQ_2 + voice.index as u8, ((freq >> 8) as u8) | 0x20);
        voice.freq = freq;
    }

    /// Clear the key-on bit without touching the low frequency byte.
    pub fn voice_key_off(driver: &mut dyn OplDriver, voice: &Voice) {
        driver.write_register(
            Self::array(voice.array),
            reg::FREQ_2 + voice.index as u8,
            (voice.freq >> 8) as u8,
        );
    }

    /// Enable OPL3 mode on the secondary register bank.
    pub fn enable_opl3(driver: &mut dyn OplDriver) {
        driver.write_register(RegisterArray::Secondary, reg::OPL3_MODE, 0x01);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{InstrumentFlags, InstrumentVoice, Operator};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDriver {
        writes: RefCell<Vec<(RegisterArray, u8, u8)>>,
    }

    impl OplDriver for RecordingDriver {
        fn init(&mut self, _opl3_mode: bool) -> Result<(), DriverError> {
            Ok(())
        }
        fn shutdown(&mut self) {}
        fn write_register(&mut self, array: RegisterArray, reg: u8, value: u8) {
            self.writes.borrow_mut().push((array, reg, value));
        }
        fn set_callback(&mut self, _delay_us: u32) -> CallbackId {
            0
        }
        fn clear_callbacks(&mut self) {}
        fn adjust_callbacks(&mut self, _factor: f64) {}
        fn set_paused(&mut self, _paused: bool) {}
    }

    fn voice(index: usize) -> Voice {
        let mut pool = crate::voicepool::VoicePool::new(false);
        pool.get_free_voice();
        for _ in 0..index {
            pool.get_free_voice();
        }
        pool.voice(index).clone()
    }

    fn instrument_with(modulator: Operator, carrier: Operator, feedback: u8, fine_tuning: u8) -> Instrument {
        Instrument {
            flags: InstrumentFlags::empty(),
            fine_tuning,
            fixed_note: 0,
            voices: [
                InstrumentVoice { modulator, feedback, carrier, base_note_offset: 0 },
                InstrumentVoice::default(),
            ],
        }
    }

    #[test]
    fn load_operator_writes_level_register_first() {
        let mut driver = RecordingDriver::default();
        let op = Operator { tremolo: 1, attack: 2, sustain: 3, waveform: 4, scale: 5, level: 6 };
        OplProgrammer::load_operator(&mut driver, 0, 0x00, &op, false);
        let writes = driver.writes.borrow();
        assert_eq!(writes.len(), 5);
        assert_eq!(writes[0].1, reg::LEVEL);
        assert_eq!(writes[0].2, 6);
    }

    #[test]
    fn load_operator_forces_max_level() {
        let mut driver = RecordingDriver::default();
        let op = Operator { tremolo: 0, attack: 0, sustain: 0, waveform: 0, scale: 0xc0, level: 0x10 };
        OplProgrammer::load_operator(&mut driver, 0, 0x00, &op, true);
        let writes = driver.writes.borrow();
        assert_eq!(writes[0].2, 0xff);
    }

    #[test]
    fn set_voice_instrument_skips_when_unchanged() {
        let mut driver = RecordingDriver::default();
        let instrument = instrument_with(Operator::default(), Operator::default(), 0x01, 0);
        let mut v = voice(0);
        let instr_ref = InstrumentRef::melodic(0);
        OplProgrammer::set_voice_instrument(&mut driver, &mut v, instr_ref, 0, &instrument);
        let first_len = driver.writes.borrow().len();
        OplProgrammer::set_voice_instrument(&mut driver, &mut v, instr_ref, 0, &instrument);
        assert_eq!(driver.writes.borrow().len(), first_len);
    }

    #[test]
    fn set_voice_instrument_writes_feedback_register_with_pan() {
        let mut driver = RecordingDriver::default();
        let instrument = instrument_with(Operator::default(), Operator::default(), 0x05, 0);
        let mut v = voice(0);
        v.reg_pan = 0x10;
        OplProgrammer::set_voice_instrument(&mut driver, &mut v, InstrumentRef::melodic(3), 0, &instrument);
        let writes = driver.writes.borrow();
        let feedback_write = writes.iter().find(|(_, r, _)| *r == reg::FEEDBACK + v.index as u8).unwrap();
        assert_eq!(feedback_write.2, 0x05 | 0x10);
    }

    #[test]
    fn set_voice_instrument_computes_priority() {
        let mut driver = RecordingDriver::default();
        let carrier = Operator { attack: 0x40, sustain: 0x05, ..Operator::default() };
        let instrument = instrument_with(Operator::default(), carrier, 0, 0);
        let mut v = voice(0);
        OplProgrammer::set_voice_instrument(&mut driver, &mut v, InstrumentRef::melodic(0), 0, &instrument);
        assert_eq!(v.priority, 21);
    }

    #[test]
    fn set_voice_volume_skips_redundant_write() {
        let mut driver = RecordingDriver::default();
        let instrument = instrument_with(Operator::default(), Operator::default(), 0, 0);
        let mut v = voice(0);
        v.instrument_voice = 0;
        OplProgrammer::set_voice_volume(&mut driver, &mut v, &instrument, 100, 100);
        let first_len = driver.writes.borrow().len();
        OplProgrammer::set_voice_volume(&mut driver, &mut v, &instrument, 100, 100);
        assert_eq!(driver.writes.borrow().len(), first_len);
    }

    #[test]
    fn set_voice_volume_also_writes_modulator_in_non_modulated_mode() {
        let mut driver = RecordingDriver::default();
        let modulator = Operator { level: 0x10, ..Operator::default() };
        let instrument = instrument_with(modulator, Operator::default(), 0x01, 0);
        let mut v = voice(0);
        OplProgrammer::set_voice_volume(&mut driver, &mut v, &instrument, 100, 100);
        let writes = driver.writes.borrow();
        assert!(writes.iter().any(|(_, r, _)| *r == reg::LEVEL + v.op1));
    }

    #[test]
    fn update_voice_frequency_sets_key_on_bit_and_skips_when_unchanged() {
        let mut driver = RecordingDriver::default();
        let instrument = instrument_with(Operator::default(), Operator::default(), 0, 0);
        let mut v = voice(0);
        v.note = 60;
        OplProgrammer::update_voice_frequency(&mut driver, &mut v, &instrument, 0, false);
        let writes = driver.writes.borrow();
        let (_, _, high) = writes[1];
        assert_eq!(high & 0x20, 0x20);
        drop(writes);
        let before = driver.writes.borrow().len();
        OplProgrammer::update_voice_frequency(&mut driver, &mut v, &instrument, 0, false);
        assert_eq!(driver.writes.borrow().len(), before);
    }

    #[test]
    fn voice_key_off_writes_only_high_byte_without_key_on_bit() {
        let mut driver = RecordingDriver::default();
        let mut v = voice(0);
        v.freq = 0x2ab;
        OplProgrammer::voice_key_off(&mut driver, &v);
        let writes = driver.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].1, reg::FREQ_2 + v.index as u8);
        assert_eq!(writes[0].2, (0x2ab >> 8) as u8);
    }

    #[test]
    fn secondary_array_routes_to_secondary_bank() {
        let mut driver = RecordingDriver::default();
        let instrument = instrument_with(Operator::default(), Operator::default(), 0, 0);
        let mut v = voice(9.min(0));
        v.array = 1;
        OplProgrammer::update_voice_frequency(&mut driver, &mut v, &instrument, 0, false);
        let writes = driver.writes.borrow();
        assert!(writes.iter().all(|(a, _, _)| *a == RegisterArray::Secondary));
    }
}
