use std::env;
use std::time::Duration;

use bkp9151::types::State;
use inquire::Select;

// Configuration constants - adjust these for your setup
const BAUD_RATE: u32 = bkp9151::serial::DEFAULT_BAUD_RATE;
// The supply can take a while to respond, a reasonably large timeout is required.
const SERIAL_TIMEOUT_MS: u64 = 300;
const OUTPUT_VOLTAGE_MV: u32 = 5_000; // 5V
const CURRENT_LIMIT_MA: u32 = 100; // 0.1A
const STABILIZATION_DELAY_MS: u64 = 1000;

fn main() {
    env_logger::init();

    // Get serial port from command line arg or interactive selection
    let port_name = env::args().nth(1).unwrap_or_else(|| {
        let ports = serialport::available_ports().expect("Failed to enumerate serial ports");

        if ports.is_empty() {
            eprintln!("No serial ports found!");
            std::process::exit(1);
        }

        let port_names: Vec<String> = ports.iter().map(|p| p.port_name.clone()).collect();

        Select::new("Select a serial port:", port_names)
            .prompt()
            .expect("Failed to select port")
    });

    println!("Using port: {}", port_name);

    let mut psu = bkp9151::serial::connect(
        &port_name,
        BAUD_RATE,
        Duration::from_millis(SERIAL_TIMEOUT_MS),
    )
    .expect("Failed to open serial port");

    // Identify the instrument and take control away from the front panel
    let idn = psu.identification().expect("No response to *IDN?");
    println!("Connected to: {}", idn);
    psu.set_remote().unwrap();

    // Program the setpoints
    psu.set_voltage_mv(OUTPUT_VOLTAGE_MV).unwrap();
    println!(
        "Set output voltage to {}V",
        OUTPUT_VOLTAGE_MV as f32 / 1000.0
    );

    psu.set_current_ma(CURRENT_LIMIT_MA).unwrap();
    println!("Set current limit to {}A", CURRENT_LIMIT_MA as f32 / 1000.0);

    // Enable the output
    psu.set_output_state(State::On).unwrap();
    println!("Output enabled");

    // Wait for the output to stabilize
    std::thread::sleep(Duration::from_millis(STABILIZATION_DELAY_MS));

    // Measure and display the live output
    let volts = psu.read_voltage_v().unwrap();
    let amps = psu.read_current_a().unwrap();
    let watts = psu.read_power_w().unwrap();
    println!("Measured: {:.3}V  {:.3}A  {:.3}W", volts, amps, watts);

    let status = psu.get_operation_condition().unwrap();
    if status.constant_current() {
        println!("Supply is current limiting");
    }

    // Check the instrument's error queue before letting go
    println!("Error queue: {}", psu.get_system_error().unwrap());

    psu.set_output_state(State::Off).unwrap();
    psu.set_local().unwrap();
    println!("Output disabled, front panel returned to local control");
}
