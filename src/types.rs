//! Keyword vocabularies the 9151 uses in command arguments and responses.
//!
//! Each enum serializes to the exact token the instrument documents, via
//! strum's `Display`, and parses back from a response token via `EnumString`.

use strum_macros::{Display, EnumIter, EnumString};

/// On/off switch argument, sent and reported as `ON`/`OFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
pub enum State {
    #[strum(serialize = "OFF")]
    #[default]
    Off,
    #[strum(serialize = "ON")]
    On,
}

impl From<bool> for State {
    fn from(value: bool) -> Self {
        match value {
            true => State::On,
            false => State::Off,
        }
    }
}

impl From<State> for bool {
    fn from(value: State) -> Self {
        match value {
            State::On => true,
            State::Off => false,
        }
    }
}

/// Source operating mode (`SOUR:MODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum SourceMode {
    /// Plain constant voltage/current operation. Also stops a running list.
    #[strum(serialize = "FIXED")]
    Fixed,
    /// List (step sequence) execution.
    #[strum(serialize = "LIST")]
    List,
    /// Digital voltmeter mode.
    #[strum(serialize = "DRM")]
    Drm,
}

/// Trigger condition for list execution (`LIST:MODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ListMode {
    /// The instrument firmware spells this keyword `CONTINIOUS`.
    #[strum(serialize = "CONTINIOUS")]
    Continuous,
    #[strum(serialize = "STEP")]
    Step,
}

/// List repetition mode (`LIST:STEP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ListStep {
    /// Run the list once.
    #[strum(serialize = "ONCE")]
    Once,
    /// Repeat indefinitely.
    #[strum(serialize = "REPEAT")]
    Repeat,
}

/// Unit for list step widths (`LIST:UNIT`). Set the unit before the widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ListUnit {
    #[strum(serialize = "SECOND")]
    Second,
    #[strum(serialize = "MSECOND")]
    Millisecond,
}

/// Division of the list storage area (`LIST:AREA`): groups x steps per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ListArea {
    /// 1 group of 400 steps.
    #[strum(serialize = "1")]
    One,
    /// 2 groups of 200 steps.
    #[strum(serialize = "2")]
    Two,
    /// 4 groups of 100 steps.
    #[strum(serialize = "4")]
    Four,
    /// 8 groups of 50 steps.
    #[strum(serialize = "8")]
    Eight,
}

/// Mode of the rear-panel port (`PORT:FUNC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum PortFunction {
    /// Pins 1/2 act as an external trigger source.
    #[strum(serialize = "TRIGGER")]
    Trigger,
    /// Remote inhibit input / discrete fault output.
    #[strum(serialize = "RIDFI")]
    RiDfi,
    /// General purpose digital I/O.
    #[strum(serialize = "DIGITAL")]
    Digital,
}

/// Input mode of the remote-inhibit pin (`RI:MODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum RiMode {
    #[strum(serialize = "OFF")]
    Off,
    #[strum(serialize = "LATCHING")]
    Latching,
    #[strum(serialize = "LIVE")]
    Live,
}

/// Trigger source selection (`TRIG:SOUR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum TriggerSource {
    /// Front panel Shift+Trigger.
    #[strum(serialize = "IMMEDIATE")]
    Immediate,
    /// TTL pulse on rear pin 1.
    #[strum(serialize = "EXTERNAL")]
    External,
    /// `*TRG` / `TRIG` over the bus.
    #[strum(serialize = "BUS")]
    Bus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    // Every keyword must survive a Display -> FromStr round trip, since the
    // same tokens travel in both command arguments and query responses.
    fn round_trip<T>()
    where
        T: IntoEnumIterator + ToString + FromStr + PartialEq + core::fmt::Debug,
    {
        for variant in T::iter() {
            let token = variant.to_string();
            match T::from_str(&token) {
                Ok(parsed) => assert_eq!(parsed, variant),
                Err(_) => panic!("keyword {token:?} did not parse back"),
            }
        }
    }

    #[test]
    fn keyword_round_trips() {
        round_trip::<State>();
        round_trip::<SourceMode>();
        round_trip::<ListMode>();
        round_trip::<ListStep>();
        round_trip::<ListUnit>();
        round_trip::<ListArea>();
        round_trip::<PortFunction>();
        round_trip::<RiMode>();
        round_trip::<TriggerSource>();
    }

    #[test]
    fn state_tokens() {
        assert_eq!(State::On.to_string(), "ON");
        assert_eq!(State::Off.to_string(), "OFF");
        assert_eq!(State::from(true), State::On);
        assert!(bool::from(State::On));
    }

    #[test]
    fn list_mode_uses_firmware_spelling() {
        assert_eq!(ListMode::Continuous.to_string(), "CONTINIOUS");
    }
}
