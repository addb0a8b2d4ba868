//! Bit-level views of the 9151 status registers.
//!
//! `STAT:QUES:*?` and `STAT:OPER:*?` answer with a plain integer; these
//! bitfields name the documented bit positions. Reading an event register on
//! the instrument also resets it, so two consecutive event queries are not
//! expected to agree.

use modular_bitfield::prelude::*;

/// Quest condition/event register.
#[bitfield]
#[derive(Debug, Clone, Copy)]
pub struct QuestStatus {
    /// OV: output over-voltage.
    pub over_voltage: bool,
    /// OT: over-temperature.
    pub over_temperature: bool,
    /// UNR: the output is unregulated.
    pub unregulated: bool,
    #[skip]
    __: B5,
}

/// Operation condition/event register.
#[bitfield]
#[derive(Debug, Clone, Copy)]
pub struct OperationStatus {
    /// CAL: calculating new calibration parameters.
    pub calibrating: bool,
    /// WTG: waiting for a trigger signal.
    pub waiting_for_trigger: bool,
    /// CV: constant voltage regulation.
    pub constant_voltage: bool,
    /// CC: constant current regulation.
    pub constant_current: bool,
    /// RI: remote-inhibit input level.
    pub ri_level: bool,
    #[skip]
    __: B3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_bit_positions() {
        let status = QuestStatus::from_bytes([0b0000_0101]);
        assert!(status.over_voltage());
        assert!(!status.over_temperature());
        assert!(status.unregulated());
    }

    #[test]
    fn operation_bit_positions() {
        // CV + CC never both in practice, but the bits are independent.
        let status = OperationStatus::from_bytes([0b0000_0110]);
        assert!(!status.calibrating());
        assert!(status.waiting_for_trigger());
        assert!(status.constant_voltage());
        assert!(!status.constant_current());
        assert!(!status.ri_level());
    }

    #[test]
    fn all_clear() {
        let status = OperationStatus::from_bytes([0]);
        assert!(!status.constant_voltage());
        assert!(!status.constant_current());
    }
}
