//! MIDI message types.
//!
//! This crate consumes decoded [`MidiMessage`]/[`MidiEvent`] values; parsing
//! a Standard MIDI File or a MUS lump into that representation is an
//! external collaborator's job, not this module's.

mod event;
mod message;

pub use event::MidiEvent;
pub use message::{MetaEvent, MidiMessage};

/// Standard MIDI controller numbers relevant to DMX playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Controller {
    BankSelect = 0,
    ModWheel = 1,
    BreathController = 2,
    FootController = 4,
    PortamentoTime = 5,
    DataEntry = 6,
    MainVolume = 7,
    Balance = 8,
    Pan = 10,
    Expression = 11,
    EffectControl1 = 12,
    EffectControl2 = 13,
    Sustain = 64,
    Portamento = 65,
    Sostenuto = 66,
    SoftPedal = 67,
    Legato = 68,
    Hold2 = 69,
    AllSoundOff = 120,
    ResetAllControllers = 121,
    LocalControl = 122,
    AllNotesOff = 123,
}

/// Controller number not recognized by [`Controller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownController(pub u8);

impl TryFrom<u8> for Controller {
    type Error = UnknownController;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Controller::BankSelect),
            1 => Ok(Controller::ModWheel),
            2 => Ok(Controller::BreathController),
            4 => Ok(Controller::FootController),
            5 => Ok(Controller::PortamentoTime),
            6 => Ok(Controller::DataEntry),
            7 => Ok(Controller::MainVolume),
            8 => Ok(Controller::Balance),
            10 => Ok(Controller::Pan),
            11 => Ok(Controller::Expression),
            12 => Ok(Controller::EffectControl1),
            13 => Ok(Controller::EffectControl2),
            64 => Ok(Controller::Sustain),
            65 => Ok(Controller::Portamento),
            66 => Ok(Controller::Sostenuto),
            67 => Ok(Controller::SoftPedal),
            68 => Ok(Controller::Legato),
            69 => Ok(Controller::Hold2),
            120 => Ok(Controller::AllSoundOff),
            121 => Ok(Controller::ResetAllControllers),
            122 => Ok(Controller::LocalControl),
            123 => Ok(Controller::AllNotesOff),
            other => Err(UnknownController(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_volume_and_pan() {
        assert_eq!(Controller::try_from(7), Ok(Controller::MainVolume));
        assert_eq!(Controller::try_from(10), Ok(Controller::Pan));
    }

    #[test]
    fn rejects_unknown_controller_number() {
        assert_eq!(Controller::try_from(3), Err(UnknownController(3)));
    }
}
