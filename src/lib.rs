/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Control-plane driver for the Sony IMX185 CMOS image sensor.
//! This imaging sensor has multiple interfaces:
//! - Two-wire i2c (CCI) for configuration registers
//! - MIPI CSI-2 pixel data out
//! - supply rails, an external clock, enable and reset lines
//!
//! This driver is concerned only with the control side: power sequencing,
//! identification, mode and format negotiation, stream start/stop and the
//! image-quality controls. Pixel transport belongs to the host.
//!
//! The host video framework talks to an [`Imx185`] through plain methods;
//! a thin adapter maps its pad, core and video operations onto them.

pub mod bus;
pub mod config;
pub mod controls;
pub mod device;
pub mod mode;
pub mod power;
pub mod registers;
pub mod tables;

pub use bus::{RegisterBus, RegisterTable, RegisterWrite};
pub use config::{BusType, SensorConfig};
pub use controls::{Control, ControlDescriptor, ControlId, ControlPolicy, ExposureMode, TestPattern};
pub use device::Imx185;
pub use mode::{Mode, ModeId, PadConfig, PadFormat, Rect, SelectionTarget, Which};
pub use power::{BusController, Clock, Platform, Rail, Regulator, SharedBus};

/// Errors in this crate
#[derive(Debug, thiserror::Error)]
pub enum Error<CommE> {
    /// Sensor communication error
    #[error("sensor communication error: {0:?}")]
    Comm(CommE),

    /// Clock, regulator or GPIO failure
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The device is not what it claims to be, or is described wrongly
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Rejected before touching the hardware
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    /// Stream transitions need the sensor powered
    #[error("sensor is powered off")]
    PoweredOff,
}

/// Failures acquiring or driving clock, regulator and GPIO handles
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("resource `{0}` is not available")]
    Unavailable(String),

    #[error("clock `{0}` failed")]
    Clock(String),

    #[error("regulator `{0}` failed")]
    Regulator(String),

    #[error("gpio `{0}` failed")]
    Gpio(String),

    #[error("bus controller failed: {0}")]
    BusController(String),
}

/// Discovery-time mismatches between the description and the device
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("invalid bus type {0:?}, must be CSI-2")]
    BusType(BusType),

    #[error("external clock frequency is not configured")]
    MissingClockFrequency,

    #[error("no response reading chip id register {0:#06x}")]
    NoResponse(u16),

    #[error("chip id register {register:#06x} reads {found:#04x}, expected {expected:#04x}")]
    ChipIdMismatch { register: u16, expected: u8, found: u8 },
}

/// 7-bit bus address the IMX185 answers on
pub const DEFAULT_I2C_ADDRESS: u8 = 0x34;

/// Number of media pads: a single source pad
pub const NUM_PADS: usize = 1;
