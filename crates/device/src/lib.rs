//! Simulated wearable eyewear device.
//!
//! Lets a UI be built and tested against the eyewear API without hardware.
//! The model has two capabilities:
//!
//! - [`DeviceState`] - read-only: one getter per channel plus delegate
//!   registration. `&dyn DeviceState` is an observation-only handle.
//! - [`DeviceSimulation`] - composes `DeviceState` and adds a setter and a
//!   trigger per channel so a harness can drive the device.
//!
//! [`SimulatedDevice`] implements both.
//!
//! # Channels
//!
//! | channel | getter | delegate arguments |
//! |---|---|---|
//! | audio level | `f64` | `(level)` |
//! | button input | `&[String]` | `(buttons, held)` |
//! | low power | `bool` | `(is_low_power)` |
//! | mode | `&str` | `(mode)` |
//! | touchpad input | `&[String]` | `(gesture, pad_number)` |
//! | wearer heading | `f64` | `(heading)` |
//!
//! Each channel holds at most one delegate; registering again replaces it.
//! Triggers run the delegate inline and return after it does. A trigger on a
//! channel without a delegate fails with [`DeviceError::NoDelegate`].
//!
//! # Example
//!
//! ```
//! use eyewear_device::{DeviceSimulation, DeviceState, SimulatedDevice};
//!
//! let mut device = SimulatedDevice::new();
//! device.on_touchpad_input(|gesture, pad| println!("{gesture} on pad {pad}"));
//!
//! device.set_touchpad_input(&["left swipe".to_string()]);
//! device.simulate_touchpad_input("left swipe", 2)?;
//! # Ok::<(), eyewear_device::DeviceError>(())
//! ```

mod channel;
mod config;
mod delegate;
mod error;
mod input;
mod simulator;
mod state;

pub use channel::Channel;
pub use config::SimulatorConfig;
pub use delegate::{
    AudioLevelDelegate, ButtonInputDelegate, LowPowerDelegate, ModeDelegate, TouchpadDelegate,
    WearerHeadingDelegate,
};
pub use error::{DeviceError, DeviceResult};
pub use input::{button_labels, Button, TouchpadGesture};
pub use simulator::{DeviceSimulation, SimulatedDevice};
pub use state::{DeviceSnapshot, DeviceState};

// Re-export the event contracts the simulator publishes.
pub use eyewear_events as events;
