//! Example: drive a simulated device the way a UI harness would.
//!
//! Run with: cargo run -p eyewear-device --example simulate_device

use eyewear_device::events::InMemoryEventBus;
use eyewear_device::{
    button_labels, Button, DeviceError, DeviceSimulation, DeviceState, SimulatedDevice,
    SimulatorConfig, TouchpadGesture,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DeviceError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eyewear_device=trace")),
        )
        .init();

    println!("=== Simulated Eyewear ===");

    let config = SimulatorConfig::from_json(r#"{"initialState": {"mode": "idle"}}"#)?;
    let bus = Arc::new(InMemoryEventBus::new());
    let mut device = SimulatedDevice::with_config(config).with_event_bus(bus.clone());

    device.on_button_input(|buttons, held| {
        let action = if held { "held" } else { "pressed" };
        println!("buttons {} {}", buttons.join("+"), action);
    });
    device.on_touchpad_input(|gesture, pad| println!("{gesture} on pad {pad}"));
    device.on_mode_changed(|mode| println!("mode -> {mode}"));
    device.on_wearer_heading_changed(|heading| println!("heading {heading:.0}"));

    let buttons = button_labels(&[Button::L1, Button::R2]);
    device.set_button_input(&buttons);
    device.simulate_button_input(&buttons, true)?;

    let gesture = TouchpadGesture::BackAndForthSwipe.label();
    device.set_touchpad_input(&[gesture.to_string()]);
    device.simulate_touchpad_input(gesture, 1)?;

    device.set_mode("navigation");
    device.simulate_mode_changed("navigation")?;

    for heading in [350.0, 359.0, 0.0, 10.0] {
        device.set_wearer_heading(heading);
        device.simulate_wearer_heading_changed(heading)?;
    }

    // No delegate for low power: the trigger reports it instead of panicking.
    if let Err(err) = device.simulate_low_power_change(true) {
        println!("{err}");
    }

    println!("\nstate: {:?}", device.snapshot());
    println!("{} events published:", bus.len());
    for event in bus.events() {
        println!("  {} {}", event.topic, event.payload);
    }

    Ok(())
}
