//! The boundary between this crate and whatever parses a Standard MIDI
//! File or MUS lump into a stream of timed events.
//!
//! Container parsing (MThd/MTrk chunks, MUS opcodes, WAD lump lookup) is
//! explicitly out of scope; callers hand this crate an already-decoded
//! [`TrackSource`] per MIDI track.

use crate::midi::MidiEvent;

/// One MIDI track's decoded events, in file order, plus the song's
/// pulses-per-quarter-note resolution needed to convert tick deltas into
/// real time.
pub trait TrackSource {
    /// Ticks per quarter note (the file header's division field).
    fn ticks_per_beat(&self) -> u16;

    /// Number of events in the track.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the event at `index`, if any.
    fn event(&self, index: usize) -> Option<&MidiEvent>;
}

/// A simple in-memory [`TrackSource`] backed by a `Vec`, used by tests and
/// by callers who have already parsed a full track into memory.
#[derive(Debug, Clone)]
pub struct VecTrackSource {
    ticks_per_beat: u16,
    events: Vec<MidiEvent>,
}

impl VecTrackSource {
    pub fn new(ticks_per_beat: u16, events: Vec<MidiEvent>) -> Self {
        VecTrackSource { ticks_per_beat, events }
    }
}

impl TrackSource for VecTrackSource {
    fn ticks_per_beat(&self) -> u16 {
        self.ticks_per_beat
    }

    fn len(&self) -> usize {
        self.events.len()
    }

    fn event(&self, index: usize) -> Option<&MidiEvent> {
        self.events.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::MidiMessage;

    #[test]
    fn empty_source_reports_zero_length() {
        let source = VecTrackSource::new(96, Vec::new());
        assert!(source.is_empty());
        assert_eq!(source.event(0), None);
    }

    #[test]
    fn events_are_retrievable_by_index() {
        let event = MidiEvent::new(0, MidiMessage::note_on(0, 60, 100));
        let source = VecTrackSource::new(96, vec![event.clone()]);
        assert_eq!(source.len(), 1);
        assert_eq!(source.event(0), Some(&event));
    }
}
