//! Per-MIDI-channel state: the current instrument, volume, pan and pitch
//! bend that every voice allocated on a channel inherits.

use crate::bank::InstrumentRef;

/// Identifies a MIDI channel within a specific track.
///
/// The original driver distinguishes channels by the address of their
/// `opl_channel_data_t`, and the voice-stealing policies compare those
/// addresses directly ("lower channel = higher priority"). Lacking raw
/// pointers, a track/channel pair gives the same total order: `track` is
/// compared first, then `channel`, which reproduces "channel allocated
/// earlier wins ties" for every single-track song and is a reasonable
/// generalization for the multi-track case the original never had to
/// handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelHandle {
    pub track: usize,
    pub channel: u8,
}

impl ChannelHandle {
    pub fn new(track: usize, channel: u8) -> Self {
        ChannelHandle { track, channel }
    }
}

/// Mutable state of one MIDI channel: instrument, volume chain, pan and
/// pitch bend.
#[derive(Debug, Clone)]
pub struct ChannelState {
    handle: ChannelHandle,
    /// GM program number (0-127); re-resolved against the bank on demand
    /// rather than cached, matching the original's pointer to a shared
    /// instrument record.
    program: u8,
    /// Raw MIDI channel volume (controller 7), 0-127.
    volume_base: u8,
    /// Volume after the current-music/fader/start-volume clip chain.
    volume: u8,
    /// Raw MIDI pan (controller 10), 0-127, default center (0x30).
    pan: u8,
    /// Pitch bend in semitones*4 units, as produced by `PitchBendEvent`.
    bend: i32,
    is_percussion: bool,
}

impl ChannelState {
    pub fn new(handle: ChannelHandle, is_percussion: bool) -> Self {
        ChannelState {
            handle,
            program: 0,
            volume_base: 100,
            volume: 100,
            pan: 0x30,
            bend: 0,
            is_percussion,
        }
    }

    pub fn handle(&self) -> ChannelHandle {
        self.handle
    }

    pub fn program(&self) -> u8 {
        self.program
    }

    pub fn set_program(&mut self, program: u8) {
        self.program = program;
    }

    /// Reference to this channel's current melodic instrument. Percussion
    /// channels never consult this: the instrument is resolved directly
    /// from the struck key instead.
    pub fn instrument_ref(&self) -> InstrumentRef {
        InstrumentRef::melodic(self.program)
    }

    pub fn is_percussion(&self) -> bool {
        self.is_percussion
    }

    pub fn volume_base(&self) -> u8 {
        self.volume_base
    }

    pub fn set_volume_base(&mut self, volume: u8) {
        self.volume_base = volume;
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Recompute `volume` by clipping `volume_base` against the chain of
    /// global, fader and (beta-only) start-volume limits, in that order,
    /// matching `SetChannelVolume`.
    pub fn recompute_volume(&mut self, music_volume: u8, fader_volume: u8, start_volume: Option<u8>) {
        let mut v = self.volume_base;
        v = v.min(music_volume);
        v = v.min(fader_volume);
        if let Some(start) = start_volume {
            v = v.min(start);
        }
        self.volume = v;
    }

    pub fn pan(&self) -> u8 {
        self.pan
    }

    pub fn set_pan(&mut self, pan: u8) {
        self.pan = pan;
    }

    pub fn bend(&self) -> i32 {
        self.bend
    }

    pub fn set_bend(&mut self, bend: i32) {
        self.bend = bend;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_orders_by_track_then_channel() {
        let a = ChannelHandle::new(0, 5);
        let b = ChannelHandle::new(0, 9);
        let c = ChannelHandle::new(1, 0);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn volume_clips_through_full_chain() {
        let mut ch = ChannelState::new(ChannelHandle::new(0, 0), false);
        ch.set_volume_base(127);
        ch.recompute_volume(100, 127, None);
        assert_eq!(ch.volume(), 100);
        ch.recompute_volume(127, 40, None);
        assert_eq!(ch.volume(), 40);
        ch.recompute_volume(127, 127, Some(10));
        assert_eq!(ch.volume(), 10);
    }

    #[test]
    fn default_pan_is_030() {
        let ch = ChannelState::new(ChannelHandle::new(0, 0), false);
        assert_eq!(ch.pan(), 0x30);
    }

    #[test]
    fn program_defaults_to_zero_and_is_settable() {
        let mut ch = ChannelState::new(ChannelHandle::new(0, 0), false);
        assert_eq!(ch.instrument_ref(), InstrumentRef::melodic(0));
        ch.set_program(40);
        assert_eq!(ch.instrument_ref(), InstrumentRef::melodic(40));
    }
}
