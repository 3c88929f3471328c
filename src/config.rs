/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Discovery-time description of one sensor instance.
//!
//! The host fills this from whatever it parses (device tree, a file, code)
//! and [`Imx185::probe`](crate::Imx185::probe) validates it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::controls::ControlPolicy;
use crate::{ProtocolError, DEFAULT_I2C_ADDRESS};

/// Media bus type of the endpoint the sensor is wired to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BusType {
    Parallel,
    Bt656,
    Csi1,
    Ccp2,
    Csi2,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorConfig {
    /// Must be [`BusType::Csi2`]
    pub bus_type: BusType,
    /// External clock rate in Hz. Required, there is no default.
    pub clock_frequency: Option<u32>,
    pub clock_name: String,
    pub io_regulator: String,
    pub core_regulator: String,
    pub analog_regulator: String,
    pub enable_gpio: String,
    pub reset_gpio: String,
    /// 7-bit bus address used for reads, and for writes unless overridden
    pub address: u8,
    /// Send writes to a different address than reads. Only some bring-up
    /// boards need this.
    pub write_address: Option<u8>,
    pub control_policy: ControlPolicy,
    /// Program the global-init table after every power-up
    pub load_init_table: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            bus_type: BusType::Csi2,
            clock_frequency: None,
            clock_name: "xclk".into(),
            io_regulator: "vdddo".into(),
            core_regulator: "vddd".into(),
            analog_regulator: "vdda".into(),
            enable_gpio: "enable".into(),
            reset_gpio: "reset".into(),
            address: DEFAULT_I2C_ADDRESS,
            write_address: None,
            control_policy: ControlPolicy::Apply,
            load_init_table: false,
        }
    }
}

impl SensorConfig {
    /// Defaults with the given external clock rate
    pub fn new(clock_frequency: u32) -> Self {
        Self {
            clock_frequency: Some(clock_frequency),
            ..Self::default()
        }
    }

    /// Check the description and return the clock frequency to use
    pub fn validate(&self) -> Result<u32, ProtocolError> {
        if self.bus_type != BusType::Csi2 {
            return Err(ProtocolError::BusType(self.bus_type));
        }
        self.clock_frequency
            .ok_or(ProtocolError::MissingClockFrequency)
    }

    pub fn read_address(&self) -> u8 {
        self.address
    }

    pub fn write_address(&self) -> u8 {
        self.write_address.unwrap_or(self.address)
    }
}
