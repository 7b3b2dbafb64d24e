//! Routes decoded MIDI events to channel-state updates and voice
//! allocation/release calls.

use crate::midi::{Controller, MetaEvent, MidiMessage};

/// MUS files (and the MIDI files converted from them) use channel 15 for
/// percussion; real MIDI files use channel 9. The original driver swaps
/// the two so a single percussion channel constant works regardless of
/// which convention a given track follows.
pub const MUS_PERCUSSION_CHANNEL: u8 = 15;
pub const MIDI_PERCUSSION_CHANNEL: u8 = 9;

/// Map a raw MIDI channel number as it appears in a track to the channel
/// number this crate's channel-state table actually uses, applying the
/// 9/15 percussion swap.
pub fn track_channel_for_event(raw_channel: u8) -> u8 {
    match raw_channel {
        MIDI_PERCUSSION_CHANNEL => MUS_PERCUSSION_CHANNEL,
        MUS_PERCUSSION_CHANNEL => MIDI_PERCUSSION_CHANNEL,
        other => other,
    }
}

/// Whether `channel` (already passed through [`track_channel_for_event`])
/// is the percussion channel.
pub fn is_percussion_channel(channel: u8) -> bool {
    channel == MUS_PERCUSSION_CHANNEL
}

/// High-level classification of a dispatched event, used by the player
/// facade to decide what follow-up action (voice allocate/release,
/// channel update, tempo change) to take.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchedEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelVolume { channel: u8, volume: u8 },
    ChannelPan { channel: u8, pan: u8 },
    AllNotesOff { channel: u8 },
    /// `value` is the raw 14-bit pitch bend value (0x2000 = center), as
    /// carried by [`MidiMessage::PitchBend`].
    PitchBend { channel: u8, value: u16 },
    TempoChange { us_per_beat: u32 },
    EndOfTrack,
    /// Recognized but not acted upon (matches the original's silent
    /// ignore of most meta/sysex events), logged at trace level.
    Ignored,
}

/// Translate one decoded MIDI message into a [`DispatchedEvent`],
/// applying the percussion channel swap to every channel-voice event.
pub fn dispatch(message: &MidiMessage) -> DispatchedEvent {
    match message {
        MidiMessage::NoteOn { channel, key, velocity } => {
            let channel = track_channel_for_event(*channel);
            if *velocity == 0 {
                DispatchedEvent::NoteOff { channel, key: *key }
            } else {
                DispatchedEvent::NoteOn {
                    channel,
                    key: *key,
                    velocity: *velocity,
                }
            }
        }
        MidiMessage::NoteOff { channel, key, .. } => DispatchedEvent::NoteOff {
            channel: track_channel_for_event(*channel),
            key: *key,
        },
        MidiMessage::ProgramChange { channel, program } => DispatchedEvent::ProgramChange {
            channel: track_channel_for_event(*channel),
            program: *program,
        },
        MidiMessage::PitchBend { channel, value } => DispatchedEvent::PitchBend {
            channel: track_channel_for_event(*channel),
            value: *value,
        },
        MidiMessage::ControlChange { channel, controller, value } => {
            dispatch_controller(track_channel_for_event(*channel), *controller, *value)
        }
        MidiMessage::Meta(meta) => dispatch_meta(meta),
        _ => {
            log::trace!("unrecognized MIDI message ignored: {message:?}");
            DispatchedEvent::Ignored
        }
    }
}

fn dispatch_controller(channel: u8, controller: u8, value: u8) -> DispatchedEvent {
    match Controller::try_from(controller) {
        Ok(Controller::MainVolume) => DispatchedEvent::ChannelVolume { channel, volume: value },
        Ok(Controller::Pan) => DispatchedEvent::ChannelPan { channel, pan: value },
        Ok(Controller::AllNotesOff) => DispatchedEvent::AllNotesOff { channel },
        Ok(other) => {
            log::trace!("ignored controller {other:?} on channel {channel}");
            DispatchedEvent::Ignored
        }
        Err(unknown) => {
            log::warn!("unknown controller number {} on channel {channel}", unknown.0);
            DispatchedEvent::Ignored
        }
    }
}

fn dispatch_meta(meta: &MetaEvent) -> DispatchedEvent {
    match meta {
        MetaEvent::Tempo(us_per_beat) => DispatchedEvent::TempoChange {
            us_per_beat: *us_per_beat,
        },
        MetaEvent::EndOfTrack => DispatchedEvent::EndOfTrack,
        other => {
            log::trace!("ignored meta event: {other:?}");
            DispatchedEvent::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percussion_channels_swap() {
        assert_eq!(track_channel_for_event(9), 15);
        assert_eq!(track_channel_for_event(15), 9);
    }

    #[test]
    fn non_percussion_channels_pass_through() {
        for ch in [0u8, 1, 5, 8, 10, 14] {
            assert_eq!(track_channel_for_event(ch), ch);
        }
    }

    #[test]
    fn note_on_with_zero_velocity_becomes_note_off() {
        let msg = MidiMessage::NoteOn {
            channel: 0,
            key: 60,
            velocity: 0,
        };
        assert_eq!(dispatch(&msg), DispatchedEvent::NoteOff { channel: 0, key: 60 });
    }

    #[test]
    fn note_on_channel_nine_routes_to_percussion_channel() {
        let msg = MidiMessage::NoteOn {
            channel: 9,
            key: 38,
            velocity: 100,
        };
        assert_eq!(
            dispatch(&msg),
            DispatchedEvent::NoteOn {
                channel: 15,
                key: 38,
                velocity: 100
            }
        );
    }

    #[test]
    fn is_percussion_channel_checks_swapped_value() {
        assert!(is_percussion_channel(15));
        assert!(!is_percussion_channel(9));
    }

    #[test]
    fn main_volume_controller_maps_to_channel_volume() {
        let event = dispatch_controller(0, 7, 100);
        assert_eq!(event, DispatchedEvent::ChannelVolume { channel: 0, volume: 100 });
    }

    #[test]
    fn tempo_meta_event_maps_to_tempo_change() {
        let event = dispatch_meta(&MetaEvent::Tempo(500_000));
        assert_eq!(event, DispatchedEvent::TempoChange { us_per_beat: 500_000 });
    }
}
