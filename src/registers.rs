/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! IMX185 register map: only the registers the driver touches outside of
//! the static tables.

/// 16-bit register addresses
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    /// Standby / operating mode
    SystemCtrl0 = 0x3000,

    // Identification
    ChipIdHigh = 0x3384,
    ChipIdLow = 0x3385,

    /// White balance manual override
    AwbManualControl = 0x3406,
    /// Exposure and gain manual override
    AecPkManual = 0x3503,

    // Readout direction
    TimingTcReg20 = 0x3820,
    TimingTcReg21 = 0x3821,

    PreIspTestSetting1 = 0x503d,

    // Chroma saturation
    SdeSatU = 0x5583,
    SdeSatV = 0x5584,
}

impl Register {
    /// Return the raw register address
    #[inline]
    pub fn addr(self) -> u16 {
        self as u16
    }
}

/// Values for [`Register::SystemCtrl0`]
pub const SYSTEM_CTRL0_START: u8 = 0x00;
pub const SYSTEM_CTRL0_STANDBY: u8 = 0x01;

/// Expected contents of the identification registers
pub const CHIP_ID_HIGH_BYTE: u8 = 0x85;
pub const CHIP_ID_LOW_BYTE: u8 = 0x01;

pub const AWB_MANUAL_ENABLE: u8 = 1 << 0;
pub const AEC_MANUAL_ENABLE: u8 = 1 << 0;
pub const AGC_MANUAL_ENABLE: u8 = 1 << 1;

pub const SENSOR_VFLIP: u8 = 1 << 1;
pub const ISP_VFLIP: u8 = 1 << 2;
pub const SENSOR_MIRROR: u8 = 1 << 1;

pub const TEST_PATTERN_MASK: u8 = 0x03;
pub const TEST_PATTERN_ENABLE: u8 = 1 << 7;

/// Regulator set-points in microvolts
pub const VOLTAGE_ANALOG_UV: u32 = 2_800_000;
pub const VOLTAGE_DIGITAL_CORE_UV: u32 = 1_500_000;
pub const VOLTAGE_DIGITAL_IO_UV: u32 = 1_800_000;
