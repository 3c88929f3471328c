/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Supported sensor modes and pad format negotiation.

use crate::bus::RegisterTable;
use crate::tables::MODE_1080P;

/// 10-bit Bayer, RGGB order: the only code the sensor emits
pub const MEDIA_BUS_FMT_SRGGB10_1X10: u32 = 0x300f;

/// Catalog index of each supported mode, ascending resolution
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeId {
    Mode1080p = 0,
}

impl ModeId {
    pub fn mode(self) -> &'static Mode {
        &MODES[self as usize]
    }
}

/// A capture resolution and the table that configures it
#[derive(Debug)]
pub struct Mode {
    pub id: ModeId,
    pub width: u32,
    pub height: u32,
    pub table: &'static RegisterTable,
}

/// Ordered from lowest to highest resolution
pub static MODES: [Mode; 1] = [Mode {
    id: ModeId::Mode1080p,
    width: 1920,
    height: 1080,
    table: &MODE_1080P,
}];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Any,
    /// Progressive
    None,
    Interlaced,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Colorspace {
    Default,
    Srgb,
    Raw,
}

/// Media bus frame format on a pad
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PadFormat {
    pub width: u32,
    pub height: u32,
    pub code: u32,
    pub field: Field,
    pub colorspace: Colorspace,
}

impl Default for PadFormat {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            code: 0,
            field: Field::Any,
            colorspace: Colorspace::Default,
        }
    }
}

impl PadFormat {
    /// A request for the given size, everything else left to the driver
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Format and crop of the source pad
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PadConfig {
    pub format: PadFormat,
    pub crop: Rect,
}

/// Which configuration a pad call works on: the device's own, or a trial
/// one that belongs to the caller for the duration of a negotiation.
#[derive(Debug)]
pub enum Which<'a> {
    Active,
    Try(&'a mut PadConfig),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionTarget {
    Crop,
    CropDefault,
    CropBounds,
    NativeSize,
    Compose,
}

/// Size range reported when enumerating frame sizes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSizeRange {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl From<&Mode> for FrameSizeRange {
    fn from(mode: &Mode) -> Self {
        Self {
            min_width: mode.width,
            max_width: mode.width,
            min_height: mode.height,
            max_height: mode.height,
        }
    }
}

/// Largest mode that fits within `width` x `height`, or the smallest mode
/// if none does.
pub fn find_nearest_mode(width: u32, height: u32) -> &'static Mode {
    &MODES[nearest_index(&MODES, width, height)]
}

fn nearest_index(catalog: &[Mode], width: u32, height: u32) -> usize {
    catalog
        .iter()
        .rposition(|mode| mode.width <= width && mode.height <= height)
        .unwrap_or(0)
}

/// Write the mode size into crop and format, and force the fixed pixel
/// encoding: the sensor supports exactly one.
pub fn apply_format(target: &mut PadConfig, mode: &Mode) {
    target.crop.width = mode.width;
    target.crop.height = mode.height;

    target.format.width = mode.width;
    target.format.height = mode.height;
    target.format.code = MEDIA_BUS_FMT_SRGGB10_1X10;
    target.format.field = Field::None;
    target.format.colorspace = Colorspace::Srgb;
}
