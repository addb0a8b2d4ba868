use core::ops::RangeInclusive;
use core::str::FromStr;

use embedded_io::Error as _;
use fugit::Duration;

use crate::{
    error::{Error, Result},
    response::{self, Value},
    scpi::{self, Command},
    status::{OperationStatus, QuestStatus},
    types::{
        ListArea, ListMode, ListStep, ListUnit, PortFunction, RiMode, SourceMode, State,
        TriggerSource,
    },
};

/// Highest programmable output voltage, in millivolts.
pub const VOLTAGE_MAX_MV: u32 = 21_000;
/// Highest programmable output current, in milliamps.
pub const CURRENT_MAX_MA: u32 = 27_100;

const SETTINGS_SLOTS: RangeInclusive<u8> = 1..=50;
const LIST_LEVELS: RangeInclusive<u8> = 1..=25;
const LIST_STORES: RangeInclusive<u8> = 1..=8;
const LIST_COUNT: RangeInclusive<u16> = 2..=400;
const LIST_WIDTH: RangeInclusive<u16> = 0..=60_000;
const LIST_NAME_MAX: usize = 8;
/// 1 second up to 5 days.
const TIMER_SECS: RangeInclusive<u32> = 1..=432_000;

/// Driver for a BK Precision 9151 power supply, generic over any interface
/// implementing [embedded_io::Read] and [embedded_io::Write].
///
/// For its methods we use the nomenclature that "set" means to write a
/// configuration and "get" means to read back a configuration value, whereas
/// "read" means to get a measured value.
///
/// Every operation is one synchronous command/response exchange over the
/// serial link; the instrument handles one command at a time, so a handle
/// must not be driven from several threads without external locking. Read
/// timeouts come from the transport's own configuration; the driver adds no
/// waiting of its own.
pub struct Bkp9151<S: embedded_io::Read + embedded_io::Write, const L: usize = 128> {
    interface: S,
}

impl<S: embedded_io::Read + embedded_io::Write, const L: usize> Bkp9151<S, L> {
    /// Create a driver over an already-opened interface.
    pub fn new(interface: S) -> Self {
        Self { interface }
    }

    /// Give the interface back, dropping the driver.
    pub fn into_inner(self) -> S {
        self.interface
    }

    // ------------------------------------------------------------------
    // Generic command/response plumbing. All named operations below go
    // through these.
    // ------------------------------------------------------------------

    fn send(&mut self, command: Command) -> Result<(), S::Error> {
        log::trace!("-> {command}");
        self.interface
            .write_all(&command.into_bytes())
            .map_err(Error::Serial)?;
        self.interface.flush().map_err(Error::Serial)
    }

    /// Read one response line, terminator stripped.
    ///
    /// A timeout after partial data ends the line (some firmware revisions
    /// omit the terminator on the last response before going quiet); a
    /// timeout before any data means the instrument never answered.
    fn read_line(&mut self) -> Result<String, S::Error> {
        let mut line: heapless::Vec<u8, L> = heapless::Vec::new();
        let mut chunk = [0u8; 8];
        'line: loop {
            match self.interface.read(&mut chunk) {
                Ok(0) => {
                    if line.is_empty() {
                        return Err(Error::Timeout);
                    }
                    break 'line;
                }
                Ok(count) => {
                    for &byte in &chunk[..count] {
                        if byte == scpi::TERMINATOR {
                            break 'line;
                        }
                        line.push(byte).map_err(|_| Error::Overflow)?;
                    }
                }
                Err(e) if e.kind() == embedded_io::ErrorKind::TimedOut => {
                    if line.is_empty() {
                        return Err(Error::Timeout);
                    }
                    break 'line;
                }
                Err(e) => return Err(Error::Serial(e)),
            }
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let text = core::str::from_utf8(&line)?;
        log::trace!("<- {text}");
        Ok(text.to_owned())
    }

    fn query(&mut self, command: Command) -> Result<Value, S::Error> {
        self.send(command)?;
        let line = self.read_line()?;
        Ok(response::decode(&line))
    }

    /// Send an arbitrary SCPI command verbatim (terminator added). If the
    /// command contains the `?` query marker, one response line is read and
    /// decoded; otherwise nothing is read back. This is the escape hatch
    /// beneath all the named operations.
    pub fn send_raw(&mut self, command: &str) -> Result<Option<Value>, S::Error> {
        let command = Command::new(command);
        let is_query = command.is_query();
        self.send(command)?;
        if is_query {
            let line = self.read_line()?;
            Ok(Some(response::decode(&line)))
        } else {
            Ok(None)
        }
    }

    fn query_f64(&mut self, command: Command) -> Result<f64, S::Error> {
        let value = self.query(command)?;
        value
            .as_f64()
            .ok_or_else(|| Error::UnexpectedResponse(value.to_string()))
    }

    fn query_u8(&mut self, command: Command) -> Result<u8, S::Error> {
        let value = self.query(command)?;
        value
            .as_i64()
            .and_then(|i| u8::try_from(i).ok())
            .ok_or_else(|| Error::UnexpectedResponse(value.to_string()))
    }

    fn query_u16(&mut self, command: Command) -> Result<u16, S::Error> {
        let value = self.query(command)?;
        value
            .as_i64()
            .and_then(|i| u16::try_from(i).ok())
            .ok_or_else(|| Error::UnexpectedResponse(value.to_string()))
    }

    fn query_u32(&mut self, command: Command) -> Result<u32, S::Error> {
        let value = self.query(command)?;
        value
            .as_i64()
            .and_then(|i| u32::try_from(i).ok())
            .ok_or_else(|| Error::UnexpectedResponse(value.to_string()))
    }

    fn query_state(&mut self, command: Command) -> Result<State, S::Error> {
        let value = self.query(command)?;
        value
            .as_bool()
            .map(State::from)
            .ok_or_else(|| Error::UnexpectedResponse(value.to_string()))
    }

    /// Parse the response as one of the instrument's keyword vocabularies.
    /// Works off the re-encoded token so that numeric keywords (`LIST:AREA`
    /// answers `4`, not `"4"`) parse too.
    fn query_keyword<T: FromStr>(&mut self, command: Command) -> Result<T, S::Error> {
        let token = self.query(command)?.to_string();
        T::from_str(&token).map_err(|_| Error::UnexpectedResponse(token))
    }

    /// Query whose answer is taken as the raw line rather than decoded:
    /// identification and error strings contain commas that are not field
    /// separators worth splitting here.
    fn query_line(&mut self, command: Command) -> Result<String, S::Error> {
        self.send(command)?;
        self.read_line()
    }

    fn check<N: PartialOrd>(value: N, range: RangeInclusive<N>) -> Result<(), S::Error> {
        if range.contains(&value) {
            Ok(())
        } else {
            Err(Error::InvalidRange)
        }
    }

    // ------------------------------------------------------------------
    // IEEE 488 common commands and system subsystem.
    // ------------------------------------------------------------------

    /// Query the identification line: manufacturer, model, serial number and
    /// firmware version (`*IDN?`).
    pub fn identification(&mut self) -> Result<String, S::Error> {
        self.query_line(Command::new("*IDN").query())
    }

    /// Clear the event, quest condition, operation event and status byte
    /// registers along with the error queue (`*CLS`).
    pub fn clear_status(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("*CLS"))
    }

    /// Control whether the status enable registers are cleared on power-on
    /// (`*PSC`). With this off, their contents persist in nonvolatile memory
    /// across a reset.
    pub fn set_power_on_status_clear(&mut self, state: impl Into<State>) -> Result<(), S::Error> {
        let state: State = state.into();
        self.send(Command::new("*PSC").arg(state))
    }

    /// Get the power-on status clear setting (`*PSC?`).
    pub fn get_power_on_status_clear(&mut self) -> Result<State, S::Error> {
        self.query_state(Command::new("*PSC").query())
    }

    /// Reset the supply to its default settings (`*RST`).
    pub fn reset(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("*RST"))
    }

    /// Save the operating parameters (voltage, current, limits, step values)
    /// to nonvolatile memory slot 1-50 (`*SAV`).
    pub fn save_settings(&mut self, slot: u8) -> Result<(), S::Error> {
        Self::check(slot, SETTINGS_SLOTS)?;
        self.send(Command::new("*SAV").arg(slot))
    }

    /// Recall the operating parameters from memory slot 1-50 (`*RCL`).
    pub fn recall_settings(&mut self, slot: u8) -> Result<(), S::Error> {
        Self::check(slot, SETTINGS_SLOTS)?;
        self.send(Command::new("*RCL").arg(slot))
    }

    /// Pop the oldest error code and message from the error queue
    /// (`SYST:ERR?`).
    pub fn get_system_error(&mut self) -> Result<String, S::Error> {
        self.query_line(Command::new("SYST:ERR").query())
    }

    /// Pop the next error from the error queue (`SYST:ERR:NEXT?`).
    pub fn get_next_system_error(&mut self) -> Result<String, S::Error> {
        self.query_line(Command::new("SYST:ERR:NEXT").query())
    }

    /// Query the firmware version string (`SYST:VERS?`).
    pub fn get_system_version(&mut self) -> Result<String, S::Error> {
        self.query_line(Command::new("SYST:VERS").query())
    }

    /// Query the system address (`SYST:ADDR?`).
    pub fn get_system_address(&mut self) -> Result<u8, S::Error> {
        self.query_u8(Command::new("SYST:ADDR").query())
    }

    /// Put the supply in remote control mode (`SYST:REM`).
    pub fn set_remote(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("SYST:REM"))
    }

    /// Return the supply to front panel operation (`SYST:LOC`).
    pub fn set_local(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("SYST:LOC"))
    }

    /// Remote mode with the front panel LOCAL key disabled (`SYST:RWL`).
    pub fn set_remote_lock(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("SYST:RWL"))
    }

    /// Enable or disable remote sense (`SYST:SENS`).
    pub fn set_remote_sense(&mut self, state: impl Into<State>) -> Result<(), S::Error> {
        let state: State = state.into();
        self.send(Command::new("SYST:SENS").arg(state))
    }

    /// Query the remote sense setting (`SYST:SENS?`).
    pub fn get_remote_sense(&mut self) -> Result<State, S::Error> {
        self.query_state(Command::new("SYST:SENS").query())
    }

    // ------------------------------------------------------------------
    // Status registers.
    // ------------------------------------------------------------------

    /// Query and reset the quest event register (`STAT:QUES:EVEN?`).
    pub fn get_quest_event(&mut self) -> Result<QuestStatus, S::Error> {
        let raw = self.query_u8(Command::new("STAT:QUES:EVEN").query())?;
        Ok(QuestStatus::from_bytes([raw]))
    }

    /// Query the quest condition register (`STAT:QUES:COND?`).
    pub fn get_quest_condition(&mut self) -> Result<QuestStatus, S::Error> {
        let raw = self.query_u8(Command::new("STAT:QUES:COND").query())?;
        Ok(QuestStatus::from_bytes([raw]))
    }

    /// Select which quest condition changes set bits in the quest event
    /// register (`STAT:QUES:ENAB`).
    pub fn set_quest_event_enable(&mut self, mask: u8) -> Result<(), S::Error> {
        self.send(Command::new("STAT:QUES:ENAB").arg(mask))
    }

    /// Query the quest event enable mask (`STAT:QUES:ENAB?`).
    pub fn get_quest_event_enable(&mut self) -> Result<u8, S::Error> {
        self.query_u8(Command::new("STAT:QUES:ENAB").query())
    }

    /// Query and reset the operation event register (`STAT:OPER:EVEN?`).
    pub fn get_operation_event(&mut self) -> Result<OperationStatus, S::Error> {
        let raw = self.query_u8(Command::new("STAT:OPER:EVEN").query())?;
        Ok(OperationStatus::from_bytes([raw]))
    }

    /// Query the operation condition register (`STAT:OPER:COND?`).
    pub fn get_operation_condition(&mut self) -> Result<OperationStatus, S::Error> {
        let raw = self.query_u8(Command::new("STAT:OPER:COND").query())?;
        Ok(OperationStatus::from_bytes([raw]))
    }

    /// Select which operation condition changes set bits in the operation
    /// event register (`STAT:OPER:ENAB`).
    pub fn set_operation_event_enable(&mut self, mask: u8) -> Result<(), S::Error> {
        self.send(Command::new("STAT:OPER:ENAB").arg(mask))
    }

    /// Query the operation event enable mask (`STAT:OPER:ENAB?`).
    pub fn get_operation_event_enable(&mut self) -> Result<u8, S::Error> {
        self.query_u8(Command::new("STAT:OPER:ENAB").query())
    }

    // ------------------------------------------------------------------
    // Output subsystem.
    // ------------------------------------------------------------------

    /// Switch the output on or off (`OUTP:STAT`).
    pub fn set_output_state(&mut self, state: impl Into<State>) -> Result<(), S::Error> {
        let state: State = state.into();
        self.send(Command::new("OUTP:STAT").arg(state))
    }

    /// Query whether the output is on (`OUTP:STAT?`).
    pub fn get_output_state(&mut self) -> Result<State, S::Error> {
        self.query_state(Command::new("OUTP:STAT").query())
    }

    /// Enable or disable the output timer (`OUTP:TIM`). When using the
    /// timer, enable it before switching the output on.
    pub fn set_output_timer_state(&mut self, state: impl Into<State>) -> Result<(), S::Error> {
        let state: State = state.into();
        self.send(Command::new("OUTP:TIM").arg(state))
    }

    /// Query the output timer enable (`OUTP:TIM?`).
    pub fn get_output_timer_state(&mut self) -> Result<State, S::Error> {
        self.query_state(Command::new("OUTP:TIM").query())
    }

    /// Program the output timer, whole seconds from 1 s to 5 days
    /// (`OUTP:TIM:DATA`).
    pub fn set_output_timer(&mut self, time: Duration<u32, 1, 1>) -> Result<(), S::Error> {
        let secs = time.ticks();
        Self::check(secs, TIMER_SECS)?;
        self.send(Command::new("OUTP:TIM:DATA").arg(secs))
    }

    /// Query the programmed output timer duration (`OUTP:TIM:DATA?`).
    pub fn get_output_timer(&mut self) -> Result<Duration<u32, 1, 1>, S::Error> {
        let secs = self.query_u32(Command::new("OUTP:TIM:DATA").query())?;
        Ok(Duration::<u32, 1, 1>::from_ticks(secs))
    }

    // ------------------------------------------------------------------
    // Source subsystem: mode and setpoints.
    // ------------------------------------------------------------------

    /// Select fixed, list or DVM operation (`SOUR:MODE`). Selecting
    /// [SourceMode::Fixed] also stops a running list.
    pub fn set_source_mode(&mut self, mode: SourceMode) -> Result<(), S::Error> {
        self.send(Command::new("SOUR:MODE").arg(mode))
    }

    /// Query the source operating mode (`SOUR:MODE?`).
    pub fn get_source_mode(&mut self) -> Result<SourceMode, S::Error> {
        self.query_keyword(Command::new("SOUR:MODE").query())
    }

    /// Set the output voltage in millivolts, 0 to 21000 (`VOLT {n}mV`).
    pub fn set_voltage_mv(&mut self, voltage_mv: u32) -> Result<(), S::Error> {
        Self::check(voltage_mv, 0..=VOLTAGE_MAX_MV)?;
        self.send(Command::new("VOLT").arg(format_args!("{voltage_mv}mV")))
    }

    /// Set the output current limit in milliamps, 0 to 27100 (`CURR {n}mA`).
    pub fn set_current_ma(&mut self, current_ma: u32) -> Result<(), S::Error> {
        Self::check(current_ma, 0..=CURRENT_MAX_MA)?;
        self.send(Command::new("CURR").arg(format_args!("{current_ma}mA")))
    }

    /// Set the voltage to the instrument minimum (`VOLT MIN`).
    pub fn set_voltage_min(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("VOLT").arg("MIN"))
    }

    /// Set the voltage to the instrument maximum (`VOLT MAX`).
    pub fn set_voltage_max(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("VOLT").arg("MAX"))
    }

    /// Set the current limit to the instrument minimum (`CURR MIN`).
    pub fn set_current_min(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("CURR").arg("MIN"))
    }

    /// Set the current limit to the instrument maximum (`CURR MAX`).
    pub fn set_current_max(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("CURR").arg("MAX"))
    }

    /// Get the programmed voltage setpoint in volts (`SOUR:VOLT?`).
    pub fn get_voltage_v(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("SOUR:VOLT").query())
    }

    /// Get the programmed current limit in amps (`SOUR:CURR?`).
    pub fn get_current_a(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("SOUR:CURR").query())
    }

    /// Get the highest supported voltage in volts (`SOUR:VOLT? MAX`).
    pub fn get_max_voltage_v(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("SOUR:VOLT").query().arg("MAX"))
    }

    /// Get the highest supported current in amps (`SOUR:CURR? MAX`).
    pub fn get_max_current_a(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("SOUR:CURR").query().arg("MAX"))
    }

    // ------------------------------------------------------------------
    // List subsystem.
    // ------------------------------------------------------------------

    /// Set the trigger condition for list execution (`LIST:MODE`).
    pub fn set_list_mode(&mut self, mode: ListMode) -> Result<(), S::Error> {
        self.send(Command::new("LIST:MODE").arg(mode))
    }

    /// Query the list trigger condition (`LIST:MODE?`).
    pub fn get_list_mode(&mut self) -> Result<ListMode, S::Error> {
        self.query_keyword(Command::new("LIST:MODE").query())
    }

    /// Run the list once or repeat it indefinitely (`LIST:STEP`).
    pub fn set_list_step(&mut self, step: ListStep) -> Result<(), S::Error> {
        self.send(Command::new("LIST:STEP").arg(step))
    }

    /// Query the list repetition mode (`LIST:STEP?`).
    pub fn get_list_step(&mut self) -> Result<ListStep, S::Error> {
        self.query_keyword(Command::new("LIST:STEP").query())
    }

    /// Set the number of list steps, 2 to 400 (`LIST:COUNT`).
    pub fn set_list_count(&mut self, count: u16) -> Result<(), S::Error> {
        Self::check(count, LIST_COUNT)?;
        self.send(Command::new("LIST:COUNT").arg(count))
    }

    /// Query the number of list steps (`LIST:COUNT?`).
    pub fn get_list_count(&mut self) -> Result<u16, S::Error> {
        self.query_u16(Command::new("LIST:COUNT").query())
    }

    /// Program the current for list level 1-25, in milliamps
    /// (`LIST:CURR l,{n}mA`).
    pub fn set_list_current_ma(&mut self, level: u8, current_ma: u32) -> Result<(), S::Error> {
        Self::check(level, LIST_LEVELS)?;
        Self::check(current_ma, 0..=CURRENT_MAX_MA)?;
        self.send(
            Command::new("LIST:CURR")
                .arg(level)
                .arg(format_args!("{current_ma}mA")),
        )
    }

    /// Query the programmed current for a list level, in amps
    /// (`LIST:CURR? l`).
    pub fn get_list_current_a(&mut self, level: u8) -> Result<f64, S::Error> {
        Self::check(level, LIST_LEVELS)?;
        self.query_f64(Command::new("LIST:CURR").query().arg(level))
    }

    /// Program the voltage for list level 1-25, in millivolts
    /// (`LIST:VOLT l,{n}mV`).
    pub fn set_list_voltage_mv(&mut self, level: u8, voltage_mv: u32) -> Result<(), S::Error> {
        Self::check(level, LIST_LEVELS)?;
        Self::check(voltage_mv, 0..=VOLTAGE_MAX_MV)?;
        self.send(
            Command::new("LIST:VOLT")
                .arg(level)
                .arg(format_args!("{voltage_mv}mV")),
        )
    }

    /// Query the programmed voltage for a list level, in volts
    /// (`LIST:VOLT? l`).
    pub fn get_list_voltage_v(&mut self, level: u8) -> Result<f64, S::Error> {
        Self::check(level, LIST_LEVELS)?;
        self.query_f64(Command::new("LIST:VOLT").query().arg(level))
    }

    /// Select seconds or milliseconds for list step widths (`LIST:UNIT`).
    pub fn set_list_unit(&mut self, unit: ListUnit) -> Result<(), S::Error> {
        self.send(Command::new("LIST:UNIT").arg(unit))
    }

    /// Query the list width unit (`LIST:UNIT?`).
    pub fn get_list_unit(&mut self) -> Result<ListUnit, S::Error> {
        self.query_keyword(Command::new("LIST:UNIT").query())
    }

    /// Program the step time for list level 1-25, 0 to 60000 in the unit
    /// selected by [Self::set_list_unit] (`LIST:WID l,n`). Set the unit
    /// first.
    pub fn set_list_width(&mut self, level: u8, width: u16) -> Result<(), S::Error> {
        Self::check(level, LIST_LEVELS)?;
        Self::check(width, LIST_WIDTH)?;
        self.send(Command::new("LIST:WID").arg(level).arg(width))
    }

    /// Query the step time for a list level (`LIST:WID? l`).
    pub fn get_list_width(&mut self, level: u8) -> Result<u16, S::Error> {
        Self::check(level, LIST_LEVELS)?;
        self.query_u16(Command::new("LIST:WID").query().arg(level))
    }

    /// Name the list file, at most 8 characters (`LIST:NAME 'name'`).
    pub fn set_list_name(&mut self, name: &str) -> Result<(), S::Error> {
        if name.len() > LIST_NAME_MAX {
            return Err(Error::InvalidRange);
        }
        self.send(Command::new("LIST:NAME").arg(format_args!("'{name}'")))
    }

    /// Query the list file name (`LIST:NAME?`).
    pub fn get_list_name(&mut self) -> Result<String, S::Error> {
        self.query_line(Command::new("LIST:NAME").query())
    }

    /// Divide the list storage area into 1, 2, 4 or 8 groups (`LIST:AREA`).
    pub fn set_list_area(&mut self, area: ListArea) -> Result<(), S::Error> {
        self.send(Command::new("LIST:AREA").arg(area))
    }

    /// Query the list storage division (`LIST:AREA?`).
    pub fn get_list_area(&mut self) -> Result<ListArea, S::Error> {
        self.query_keyword(Command::new("LIST:AREA").query())
    }

    /// Save the list file to nonvolatile register 1-8 (`LIST:SAV`).
    pub fn save_list(&mut self, store: u8) -> Result<(), S::Error> {
        Self::check(store, LIST_STORES)?;
        self.send(Command::new("LIST:SAV").arg(store))
    }

    /// Recall a list file from nonvolatile register 1-8 (`LIST:RCL`).
    pub fn recall_list(&mut self, store: u8) -> Result<(), S::Error> {
        Self::check(store, LIST_STORES)?;
        self.send(Command::new("LIST:RCL").arg(store))
    }

    // ------------------------------------------------------------------
    // Measurements.
    // ------------------------------------------------------------------

    /// Read the measured output voltage in volts (`MEAS:VOLT?`).
    pub fn read_voltage_v(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("MEAS:VOLT").query())
    }

    /// Read the measured output current in amps (`MEAS:CURR?`).
    pub fn read_current_a(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("MEAS:CURR").query())
    }

    /// Read the measured output power in watts (`MEAS:POW?`).
    pub fn read_power_w(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("MEAS:POW").query())
    }

    /// Read the digital voltmeter input in volts (`MEAS:DVM?`).
    pub fn read_dvm_voltage_v(&mut self) -> Result<f64, S::Error> {
        self.query_f64(Command::new("MEAS:DVM").query())
    }

    // ------------------------------------------------------------------
    // Rear port and trigger subsystem.
    // ------------------------------------------------------------------

    /// Set the mode of the rear-panel port (`PORT:FUNC`).
    pub fn set_port_function(&mut self, function: PortFunction) -> Result<(), S::Error> {
        self.send(Command::new("PORT:FUNC").arg(function))
    }

    /// Query the rear-panel port mode (`PORT:FUNC?`).
    pub fn get_port_function(&mut self) -> Result<PortFunction, S::Error> {
        self.query_keyword(Command::new("PORT:FUNC").query())
    }

    /// Set the input mode of the remote-inhibit pin (`RI:MODE`).
    pub fn set_ri_mode(&mut self, mode: RiMode) -> Result<(), S::Error> {
        self.send(Command::new("RI:MODE").arg(mode))
    }

    /// Query the remote-inhibit input mode (`RI:MODE?`).
    pub fn get_ri_mode(&mut self) -> Result<RiMode, S::Error> {
        self.query_keyword(Command::new("RI:MODE").query())
    }

    /// Issue a bus trigger (`TRIG`). Takes effect when the trigger source is
    /// [TriggerSource::Bus].
    pub fn trigger(&mut self) -> Result<(), S::Error> {
        self.send(Command::new("TRIG"))
    }

    /// Select the trigger source (`TRIG:SOUR`).
    pub fn set_trigger_source(&mut self, source: TriggerSource) -> Result<(), S::Error> {
        self.send(Command::new("TRIG:SOUR").arg(source))
    }

    /// Query the trigger source (`TRIG:SOUR?`).
    pub fn get_trigger_source(&mut self) -> Result<TriggerSource, S::Error> {
        self.query_keyword(Command::new("TRIG:SOUR").query())
    }
}
