//! GENMIDI instrument records: two-operator FM voice definitions.

use bitflags::bitflags;

bitflags! {
    /// Flags carried in a GENMIDI instrument header.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InstrumentFlags: u16 {
        /// Instrument always plays `fixed_note`, ignoring the MIDI key.
        const FIXED_PITCH = 0x0001;
        /// Instrument uses both operator pairs (OPL3 double voice).
        const DOUBLE_VOICE = 0x0004;
    }
}

/// One FM operator's register fields, as stored in a GENMIDI lump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Operator {
    pub tremolo: u8,
    pub attack: u8,
    pub sustain: u8,
    pub waveform: u8,
    pub scale: u8,
    pub level: u8,
}

/// One of the (up to two) operator pairs making up an instrument voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstrumentVoice {
    pub modulator: Operator,
    pub feedback: u8,
    pub carrier: Operator,
    /// Offset applied to the MIDI note before frequency lookup.
    pub base_note_offset: i16,
}

/// A single GENMIDI instrument: one or two operator-pair voices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub flags: InstrumentFlags,
    pub fine_tuning: u8,
    pub fixed_note: u8,
    pub voices: [InstrumentVoice; 2],
}

impl Instrument {
    /// True if this instrument programs both operator pairs per note-on.
    pub fn is_double_voice(&self) -> bool {
        self.flags.contains(InstrumentFlags::DOUBLE_VOICE)
    }

    /// True if the note played is always `fixed_note`, regardless of key.
    pub fn is_fixed_pitch(&self) -> bool {
        self.flags.contains(InstrumentFlags::FIXED_PITCH)
    }

    /// Which of `voices` to use; instrument_voice is 0 or 1.
    pub fn voice(&self, instrument_voice: usize) -> &InstrumentVoice {
        &self.voices[instrument_voice]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_roundtrip() {
        let flags = InstrumentFlags::FIXED_PITCH | InstrumentFlags::DOUBLE_VOICE;
        assert!(flags.contains(InstrumentFlags::FIXED_PITCH));
        assert!(flags.contains(InstrumentFlags::DOUBLE_VOICE));
        assert_eq!(flags.bits(), 0x0005);
    }

    #[test]
    fn single_voice_defaults_to_voice_zero() {
        let instr = Instrument {
            flags: InstrumentFlags::empty(),
            fine_tuning: 0,
            fixed_note: 0,
            voices: [InstrumentVoice::default(), InstrumentVoice::default()],
        };
        assert!(!instr.is_double_voice());
        assert!(!instr.is_fixed_pitch());
        let _ = instr.voice(0);
    }
}
