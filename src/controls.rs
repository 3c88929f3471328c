/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Image-quality controls and their register encodings.
//!
//! Every control except saturation is a read-modify-write of a single
//! register: the other bits belong to the sensor and are preserved.

use core::fmt::Debug;

use embedded_hal::blocking::i2c::{Write, WriteRead};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bus::RegisterBus;
use crate::registers::*;
use crate::Error;

pub const SATURATION_MIN: i32 = -4;
pub const SATURATION_MAX: i32 = 4;

/// What to do with control requests
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ControlPolicy {
    /// Program the sensor
    Apply,
    /// Accept every request and leave the registers alone
    Bypass,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExposureMode {
    Auto = 0,
    Manual = 1,
}

#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TestPattern {
    Disabled = 0,
    VerticalColorBars = 1,
    PseudoRandom = 2,
    ColorSquare = 3,
    BlackImage = 4,
}

pub const TEST_PATTERN_MENU: [&str; 5] = [
    "Disabled",
    "Vertical Color Bars",
    "Pseudo-Random Data",
    "Color Square",
    "Black Image",
];

const EXPOSURE_MENU: [&str; 2] = ["Auto Mode", "Manual Mode"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlId {
    Saturation,
    HorizontalFlip,
    VerticalFlip,
    AutoGain,
    ExposureAuto,
    AutoWhiteBalance,
    TestPattern,
}

/// A control request with its value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    /// -4..=4
    Saturation(i32),
    HorizontalFlip(bool),
    VerticalFlip(bool),
    AutoGain(bool),
    ExposureMode(ExposureMode),
    AutoWhiteBalance(bool),
    TestPattern(TestPattern),
}

/// How a control is declared to the host
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub id: ControlId,
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
    /// Item names for menu controls, empty otherwise
    pub menu: &'static [&'static str],
}

const fn boolean(id: ControlId, name: &'static str, default: i32) -> ControlDescriptor {
    ControlDescriptor {
        id,
        name,
        min: 0,
        max: 1,
        step: 1,
        default,
        menu: &[],
    }
}

pub static CONTROLS: [ControlDescriptor; 7] = [
    ControlDescriptor {
        id: ControlId::Saturation,
        name: "Saturation",
        min: SATURATION_MIN,
        max: SATURATION_MAX,
        step: 1,
        default: 0,
        menu: &[],
    },
    boolean(ControlId::HorizontalFlip, "Horizontal Flip", 0),
    boolean(ControlId::VerticalFlip, "Vertical Flip", 0),
    boolean(ControlId::AutoGain, "Gain, Automatic", 1),
    ControlDescriptor {
        id: ControlId::ExposureAuto,
        name: "Auto Exposure",
        min: 0,
        max: ExposureMode::Manual as i32,
        step: 1,
        default: ExposureMode::Auto as i32,
        menu: &EXPOSURE_MENU,
    },
    boolean(ControlId::AutoWhiteBalance, "White Balance, Automatic", 1),
    ControlDescriptor {
        id: ControlId::TestPattern,
        name: "Test Pattern",
        min: 0,
        max: TEST_PATTERN_MENU.len() as i32 - 1,
        step: 1,
        default: 0,
        menu: &TEST_PATTERN_MENU,
    },
];

impl ControlId {
    pub fn descriptor(self) -> &'static ControlDescriptor {
        &CONTROLS[self as usize]
    }
}

impl ExposureMode {
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(ExposureMode::Auto),
            1 => Some(ExposureMode::Manual),
            _ => None,
        }
    }
}

impl TestPattern {
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(TestPattern::Disabled),
            1 => Some(TestPattern::VerticalColorBars),
            2 => Some(TestPattern::PseudoRandom),
            3 => Some(TestPattern::ColorSquare),
            4 => Some(TestPattern::BlackImage),
            _ => None,
        }
    }
}

impl Control {
    /// Build a control from the host's integer representation.
    /// Returns `None` for values outside the declared range.
    pub fn from_raw(id: ControlId, value: i32) -> Option<Self> {
        let flag = |value: i32| match value {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        };
        match id {
            ControlId::Saturation => Some(Control::Saturation(value)).filter(|c| c.in_range()),
            ControlId::HorizontalFlip => flag(value).map(Control::HorizontalFlip),
            ControlId::VerticalFlip => flag(value).map(Control::VerticalFlip),
            ControlId::AutoGain => flag(value).map(Control::AutoGain),
            ControlId::ExposureAuto => ExposureMode::from_raw(value).map(Control::ExposureMode),
            ControlId::AutoWhiteBalance => flag(value).map(Control::AutoWhiteBalance),
            ControlId::TestPattern => TestPattern::from_raw(value).map(Control::TestPattern),
        }
    }

    pub fn id(&self) -> ControlId {
        match self {
            Control::Saturation(_) => ControlId::Saturation,
            Control::HorizontalFlip(_) => ControlId::HorizontalFlip,
            Control::VerticalFlip(_) => ControlId::VerticalFlip,
            Control::AutoGain(_) => ControlId::AutoGain,
            Control::ExposureMode(_) => ControlId::ExposureAuto,
            Control::AutoWhiteBalance(_) => ControlId::AutoWhiteBalance,
            Control::TestPattern(_) => ControlId::TestPattern,
        }
    }

    pub fn in_range(&self) -> bool {
        match *self {
            Control::Saturation(value) => (SATURATION_MIN..=SATURATION_MAX).contains(&value),
            _ => true,
        }
    }
}

/// Register value for a saturation level: 0x00 at -4, 0x40 at 0, 0x80 at 4
pub fn saturation_value(level: i32) -> u8 {
    (level.clamp(SATURATION_MIN, SATURATION_MAX) * 0x10 + 0x40) as u8
}

pub fn mirror_bits(current: u8, on: bool) -> u8 {
    if on {
        current | SENSOR_MIRROR
    } else {
        current & !SENSOR_MIRROR
    }
}

/// The native readout is upside down, so the flip bits are set when the
/// flip control is off.
pub fn vflip_bits(current: u8, on: bool) -> u8 {
    let bits = SENSOR_VFLIP | ISP_VFLIP;
    if on {
        current & !bits
    } else {
        current | bits
    }
}

/// Clear `manual_bit` for automatic operation, set it for manual
fn auto_bit(current: u8, manual_bit: u8, auto: bool) -> u8 {
    if auto {
        current & !manual_bit
    } else {
        current | manual_bit
    }
}

pub fn test_pattern_bits(current: u8, pattern: TestPattern) -> u8 {
    match pattern {
        TestPattern::Disabled => current & !TEST_PATTERN_ENABLE,
        pattern => {
            let select = (pattern as u8 - 1) & TEST_PATTERN_MASK;
            (current & !TEST_PATTERN_MASK) | select | TEST_PATTERN_ENABLE
        }
    }
}

/// Program one control into the sensor
pub fn apply<I2C, CommE>(bus: &mut RegisterBus<I2C>, control: Control) -> Result<(), Error<CommE>>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    CommE: Debug,
{
    match control {
        Control::Saturation(level) => {
            if !control.in_range() {
                return Err(Error::InvalidRequest("saturation out of range"));
            }
            let value = saturation_value(level);
            bus.write_register(Register::SdeSatU.addr(), value)?;
            bus.write_register(Register::SdeSatV.addr(), value)
        }
        Control::HorizontalFlip(on) => {
            bus.update_register(Register::TimingTcReg21.addr(), |v| mirror_bits(v, on))
        }
        Control::VerticalFlip(on) => {
            bus.update_register(Register::TimingTcReg20.addr(), |v| vflip_bits(v, on))
        }
        Control::AutoGain(auto) => bus.update_register(Register::AecPkManual.addr(), |v| {
            auto_bit(v, AGC_MANUAL_ENABLE, auto)
        }),
        Control::ExposureMode(mode) => bus.update_register(Register::AecPkManual.addr(), |v| {
            auto_bit(v, AEC_MANUAL_ENABLE, mode == ExposureMode::Auto)
        }),
        Control::AutoWhiteBalance(auto) => {
            bus.update_register(Register::AwbManualControl.addr(), |v| {
                auto_bit(v, AWB_MANUAL_ENABLE, auto)
            })
        }
        Control::TestPattern(pattern) => bus
            .update_register(Register::PreIspTestSetting1.addr(), |v| {
                test_pattern_bits(v, pattern)
            }),
    }
}
