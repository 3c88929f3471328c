/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Static register tables.
//!
//! Each table is an ordered list of single-byte writes. Order matters: later
//! entries can depend on earlier ones (standby, PLL and clock setup come first).

use crate::bus::{RegisterTable, RegisterWrite};

/// Sensor-wide defaults, optionally applied once after power-up.
pub static GLOBAL_INIT: RegisterTable = RegisterTable::new("global-init", GLOBAL_INIT_WRITES);

/// Full-HD readout: 1920x1080, 10-bit RAW, CSI-2.
pub static MODE_1080P: RegisterTable = RegisterTable::new("1080p", MODE_1080P_WRITES);

const GLOBAL_INIT_WRITES: &[RegisterWrite] = &[
    RegisterWrite::new(0x3103, 0x11),
    RegisterWrite::new(0x3008, 0x82),
    RegisterWrite::new(0x3008, 0x42),
    RegisterWrite::new(0x3103, 0x03),
    RegisterWrite::new(0x3503, 0x07),
    RegisterWrite::new(0x3002, 0x1c),
    RegisterWrite::new(0x3006, 0xc3),
    RegisterWrite::new(0x300e, 0x45),
    RegisterWrite::new(0x3017, 0x00),
    RegisterWrite::new(0x3018, 0x00),
    RegisterWrite::new(0x302e, 0x0b),
    RegisterWrite::new(0x3037, 0x13),
    RegisterWrite::new(0x3108, 0x01),
    RegisterWrite::new(0x3611, 0x06),
    RegisterWrite::new(0x3500, 0x00),
    RegisterWrite::new(0x3501, 0x01),
    RegisterWrite::new(0x3502, 0x00),
    RegisterWrite::new(0x350a, 0x00),
    RegisterWrite::new(0x350b, 0x3f),
    RegisterWrite::new(0x3620, 0x33),
    RegisterWrite::new(0x3621, 0xe0),
    RegisterWrite::new(0x3622, 0x01),
    RegisterWrite::new(0x3630, 0x2e),
    RegisterWrite::new(0x3631, 0x00),
    RegisterWrite::new(0x3632, 0x32),
    RegisterWrite::new(0x3633, 0x52),
    RegisterWrite::new(0x3634, 0x70),
    RegisterWrite::new(0x3635, 0x13),
    RegisterWrite::new(0x3636, 0x03),
    RegisterWrite::new(0x3703, 0x5a),
    RegisterWrite::new(0x3704, 0xa0),
    RegisterWrite::new(0x3705, 0x1a),
    RegisterWrite::new(0x3709, 0x12),
    RegisterWrite::new(0x370b, 0x61),
    RegisterWrite::new(0x370f, 0x10),
    RegisterWrite::new(0x3715, 0x78),
    RegisterWrite::new(0x3717, 0x01),
    RegisterWrite::new(0x371b, 0x20),
    RegisterWrite::new(0x3731, 0x12),
    RegisterWrite::new(0x3901, 0x0a),
    RegisterWrite::new(0x3905, 0x02),
    RegisterWrite::new(0x3906, 0x10),
    RegisterWrite::new(0x3719, 0x86),
    RegisterWrite::new(0x3810, 0x00),
    RegisterWrite::new(0x3811, 0x10),
    RegisterWrite::new(0x3812, 0x00),
    RegisterWrite::new(0x3821, 0x01),
    RegisterWrite::new(0x3824, 0x01),
    RegisterWrite::new(0x3826, 0x03),
    RegisterWrite::new(0x3828, 0x08),
    RegisterWrite::new(0x3a19, 0xf8),
    RegisterWrite::new(0x3c01, 0x34),
    RegisterWrite::new(0x3c04, 0x28),
    RegisterWrite::new(0x3c05, 0x98),
    RegisterWrite::new(0x3c07, 0x07),
    RegisterWrite::new(0x3c09, 0xc2),
    RegisterWrite::new(0x3c0a, 0x9c),
    RegisterWrite::new(0x3c0b, 0x40),
    RegisterWrite::new(0x3c01, 0x34),
    RegisterWrite::new(0x4001, 0x02),
    RegisterWrite::new(0x4514, 0x00),
    RegisterWrite::new(0x4520, 0xb0),
    RegisterWrite::new(0x460b, 0x37),
    RegisterWrite::new(0x460c, 0x20),
    RegisterWrite::new(0x4818, 0x01),
    RegisterWrite::new(0x481d, 0xf0),
    RegisterWrite::new(0x481f, 0x50),
    RegisterWrite::new(0x4823, 0x70),
    RegisterWrite::new(0x4831, 0x14),
    RegisterWrite::new(0x5000, 0xa7),
    RegisterWrite::new(0x5001, 0x83),
    RegisterWrite::new(0x501d, 0x00),
    RegisterWrite::new(0x501f, 0x00),
    RegisterWrite::new(0x503d, 0x00),
    RegisterWrite::new(0x505c, 0x30),
    RegisterWrite::new(0x5181, 0x59),
    RegisterWrite::new(0x5183, 0x00),
    RegisterWrite::new(0x5191, 0xf0),
    RegisterWrite::new(0x5192, 0x03),
    RegisterWrite::new(0x5684, 0x10),
    RegisterWrite::new(0x5685, 0xa0),
    RegisterWrite::new(0x5686, 0x0c),
    RegisterWrite::new(0x5687, 0x78),
    RegisterWrite::new(0x5a00, 0x08),
    RegisterWrite::new(0x5a21, 0x00),
    RegisterWrite::new(0x5a24, 0x00),
    RegisterWrite::new(0x3008, 0x02),
    RegisterWrite::new(0x3503, 0x00),
    RegisterWrite::new(0x5180, 0xff),
    RegisterWrite::new(0x5181, 0xf2),
    RegisterWrite::new(0x5182, 0x00),
    RegisterWrite::new(0x5183, 0x14),
    RegisterWrite::new(0x5184, 0x25),
    RegisterWrite::new(0x5185, 0x24),
    RegisterWrite::new(0x5186, 0x09),
    RegisterWrite::new(0x5187, 0x09),
    RegisterWrite::new(0x5188, 0x0a),
    RegisterWrite::new(0x5189, 0x75),
    RegisterWrite::new(0x518a, 0x52),
    RegisterWrite::new(0x518b, 0xea),
    RegisterWrite::new(0x518c, 0xa8),
    RegisterWrite::new(0x518d, 0x42),
    RegisterWrite::new(0x518e, 0x38),
    RegisterWrite::new(0x518f, 0x56),
    RegisterWrite::new(0x5190, 0x42),
    RegisterWrite::new(0x5191, 0xf8),
    RegisterWrite::new(0x5192, 0x04),
    RegisterWrite::new(0x5193, 0x70),
    RegisterWrite::new(0x5194, 0xf0),
    RegisterWrite::new(0x5195, 0xf0),
    RegisterWrite::new(0x5196, 0x03),
    RegisterWrite::new(0x5197, 0x01),
    RegisterWrite::new(0x5198, 0x04),
    RegisterWrite::new(0x5199, 0x12),
    RegisterWrite::new(0x519a, 0x04),
    RegisterWrite::new(0x519b, 0x00),
    RegisterWrite::new(0x519c, 0x06),
    RegisterWrite::new(0x519d, 0x82),
    RegisterWrite::new(0x519e, 0x38),
    RegisterWrite::new(0x5381, 0x1e),
    RegisterWrite::new(0x5382, 0x5b),
    RegisterWrite::new(0x5383, 0x08),
    RegisterWrite::new(0x5384, 0x0a),
    RegisterWrite::new(0x5385, 0x7e),
    RegisterWrite::new(0x5386, 0x88),
    RegisterWrite::new(0x5387, 0x7c),
    RegisterWrite::new(0x5388, 0x6c),
    RegisterWrite::new(0x5389, 0x10),
    RegisterWrite::new(0x538a, 0x01),
    RegisterWrite::new(0x538b, 0x98),
    RegisterWrite::new(0x5300, 0x08),
    RegisterWrite::new(0x5301, 0x30),
    RegisterWrite::new(0x5302, 0x10),
    RegisterWrite::new(0x5303, 0x00),
    RegisterWrite::new(0x5304, 0x08),
    RegisterWrite::new(0x5305, 0x30),
    RegisterWrite::new(0x5306, 0x08),
    RegisterWrite::new(0x5307, 0x16),
    RegisterWrite::new(0x5309, 0x08),
    RegisterWrite::new(0x530a, 0x30),
    RegisterWrite::new(0x530b, 0x04),
    RegisterWrite::new(0x530c, 0x06),
    RegisterWrite::new(0x5480, 0x01),
    RegisterWrite::new(0x5481, 0x08),
    RegisterWrite::new(0x5482, 0x14),
    RegisterWrite::new(0x5483, 0x28),
    RegisterWrite::new(0x5484, 0x51),
    RegisterWrite::new(0x5485, 0x65),
    RegisterWrite::new(0x5486, 0x71),
    RegisterWrite::new(0x5487, 0x7d),
    RegisterWrite::new(0x5488, 0x87),
    RegisterWrite::new(0x5489, 0x91),
    RegisterWrite::new(0x548a, 0x9a),
    RegisterWrite::new(0x548b, 0xaa),
    RegisterWrite::new(0x548c, 0xb8),
    RegisterWrite::new(0x548d, 0xcd),
    RegisterWrite::new(0x548e, 0xdd),
    RegisterWrite::new(0x548f, 0xea),
    RegisterWrite::new(0x5490, 0x1d),
    RegisterWrite::new(0x5580, 0x02),
    RegisterWrite::new(0x5583, 0x40),
    RegisterWrite::new(0x5584, 0x10),
    RegisterWrite::new(0x5589, 0x10),
    RegisterWrite::new(0x558a, 0x00),
    RegisterWrite::new(0x558b, 0xf8),
    RegisterWrite::new(0x5800, 0x3f),
    RegisterWrite::new(0x5801, 0x16),
    RegisterWrite::new(0x5802, 0x0e),
    RegisterWrite::new(0x5803, 0x0d),
    RegisterWrite::new(0x5804, 0x17),
    RegisterWrite::new(0x5805, 0x3f),
    RegisterWrite::new(0x5806, 0x0b),
    RegisterWrite::new(0x5807, 0x06),
    RegisterWrite::new(0x5808, 0x04),
    RegisterWrite::new(0x5809, 0x04),
    RegisterWrite::new(0x580a, 0x06),
    RegisterWrite::new(0x580b, 0x0b),
    RegisterWrite::new(0x580c, 0x09),
    RegisterWrite::new(0x580d, 0x03),
    RegisterWrite::new(0x580e, 0x00),
    RegisterWrite::new(0x580f, 0x00),
    RegisterWrite::new(0x5810, 0x03),
    RegisterWrite::new(0x5811, 0x08),
    RegisterWrite::new(0x5812, 0x0a),
    RegisterWrite::new(0x5813, 0x03),
    RegisterWrite::new(0x5814, 0x00),
    RegisterWrite::new(0x5815, 0x00),
    RegisterWrite::new(0x5816, 0x04),
    RegisterWrite::new(0x5817, 0x09),
    RegisterWrite::new(0x5818, 0x0f),
    RegisterWrite::new(0x5819, 0x08),
    RegisterWrite::new(0x581a, 0x06),
    RegisterWrite::new(0x581b, 0x06),
    RegisterWrite::new(0x581c, 0x08),
    RegisterWrite::new(0x581d, 0x0c),
    RegisterWrite::new(0x581e, 0x3f),
    RegisterWrite::new(0x581f, 0x1e),
    RegisterWrite::new(0x5820, 0x12),
    RegisterWrite::new(0x5821, 0x13),
    RegisterWrite::new(0x5822, 0x21),
    RegisterWrite::new(0x5823, 0x3f),
    RegisterWrite::new(0x5824, 0x68),
    RegisterWrite::new(0x5825, 0x28),
    RegisterWrite::new(0x5826, 0x2c),
    RegisterWrite::new(0x5827, 0x28),
    RegisterWrite::new(0x5828, 0x08),
    RegisterWrite::new(0x5829, 0x48),
    RegisterWrite::new(0x582a, 0x64),
    RegisterWrite::new(0x582b, 0x62),
    RegisterWrite::new(0x582c, 0x64),
    RegisterWrite::new(0x582d, 0x28),
    RegisterWrite::new(0x582e, 0x46),
    RegisterWrite::new(0x582f, 0x62),
    RegisterWrite::new(0x5830, 0x60),
    RegisterWrite::new(0x5831, 0x62),
    RegisterWrite::new(0x5832, 0x26),
    RegisterWrite::new(0x5833, 0x48),
    RegisterWrite::new(0x5834, 0x66),
    RegisterWrite::new(0x5835, 0x44),
    RegisterWrite::new(0x5836, 0x64),
    RegisterWrite::new(0x5837, 0x28),
    RegisterWrite::new(0x5838, 0x66),
    RegisterWrite::new(0x5839, 0x48),
    RegisterWrite::new(0x583a, 0x2c),
    RegisterWrite::new(0x583b, 0x28),
    RegisterWrite::new(0x583c, 0x26),
    RegisterWrite::new(0x583d, 0xae),
    RegisterWrite::new(0x5025, 0x00),
    RegisterWrite::new(0x3a0f, 0x30),
    RegisterWrite::new(0x3a10, 0x28),
    RegisterWrite::new(0x3a1b, 0x30),
    RegisterWrite::new(0x3a1e, 0x26),
    RegisterWrite::new(0x3a11, 0x60),
    RegisterWrite::new(0x3a1f, 0x14),
    RegisterWrite::new(0x0601, 0x02),
    RegisterWrite::new(0x3008, 0x42),
    RegisterWrite::new(0x3008, 0x02),
];

const MODE_1080P_WRITES: &[RegisterWrite] = &[
    RegisterWrite::new(0x3002, 0x01),
    RegisterWrite::new(0x3005, 0x00),
    RegisterWrite::new(0x3006, 0x00),
    RegisterWrite::new(0x3007, 0x50),
    RegisterWrite::new(0x3009, 0x01),
    RegisterWrite::new(0x300a, 0x3c),
    RegisterWrite::new(0x300f, 0x01),
    RegisterWrite::new(0x3018, 0x65),
    RegisterWrite::new(0x3019, 0x04),
    RegisterWrite::new(0x301b, 0x4c),
    RegisterWrite::new(0x301c, 0x04),
    RegisterWrite::new(0x301d, 0x08),
    RegisterWrite::new(0x301e, 0x02),

    RegisterWrite::new(0x3036, 0x06),
    RegisterWrite::new(0x3038, 0x08),
    RegisterWrite::new(0x3039, 0x00),
    RegisterWrite::new(0x303a, 0x40),
    RegisterWrite::new(0x303b, 0x04),
    RegisterWrite::new(0x303c, 0x0c),
    RegisterWrite::new(0x303d, 0x00),
    RegisterWrite::new(0x303e, 0x7c),
    RegisterWrite::new(0x303f, 0x07),

    RegisterWrite::new(0x3044, 0xe1),
    RegisterWrite::new(0x3048, 0x33),

    RegisterWrite::new(0x305c, 0x20),
    RegisterWrite::new(0x305d, 0x00),
    RegisterWrite::new(0x305e, 0x18),
    RegisterWrite::new(0x305f, 0x00),
    RegisterWrite::new(0x3063, 0x74),

    RegisterWrite::new(0x3084, 0x0f),

    RegisterWrite::new(0x3086, 0x10),
    RegisterWrite::new(0x30a1, 0x44),
    RegisterWrite::new(0x30cf, 0xe1),
    RegisterWrite::new(0x30d0, 0x29),
    RegisterWrite::new(0x30d2, 0x9b),
    RegisterWrite::new(0x30d3, 0x01),

    RegisterWrite::new(0x311d, 0x0a),
    RegisterWrite::new(0x3123, 0x0f),
    RegisterWrite::new(0x3126, 0xdf),
    RegisterWrite::new(0x3147, 0x87),
    RegisterWrite::new(0x31e0, 0x01),
    RegisterWrite::new(0x31e1, 0x9e),
    RegisterWrite::new(0x31e2, 0x01),
    RegisterWrite::new(0x31e5, 0x05),
    RegisterWrite::new(0x31e6, 0x05),
    RegisterWrite::new(0x31e7, 0x3a),
    RegisterWrite::new(0x31e8, 0x3a),

    RegisterWrite::new(0x3203, 0xc8),
    RegisterWrite::new(0x3207, 0x54),
    RegisterWrite::new(0x3213, 0x16),
    RegisterWrite::new(0x3215, 0xf6),
    RegisterWrite::new(0x321a, 0x14),
    RegisterWrite::new(0x321b, 0x51),
    RegisterWrite::new(0x3229, 0xe7),
    RegisterWrite::new(0x322a, 0xf0),
    RegisterWrite::new(0x322b, 0x10),
    RegisterWrite::new(0x3231, 0xe7),
    RegisterWrite::new(0x3232, 0xf0),
    RegisterWrite::new(0x3233, 0x10),
    RegisterWrite::new(0x323c, 0xe8),
    RegisterWrite::new(0x323d, 0x70),
    RegisterWrite::new(0x3243, 0x08),
    RegisterWrite::new(0x3244, 0xe1),
    RegisterWrite::new(0x3245, 0x10),
    RegisterWrite::new(0x3247, 0xe7),
    RegisterWrite::new(0x3248, 0x60),
    RegisterWrite::new(0x3249, 0x1e),
    RegisterWrite::new(0x324b, 0x00),
    RegisterWrite::new(0x324c, 0x41),
    RegisterWrite::new(0x3250, 0x30),
    RegisterWrite::new(0x3251, 0x0a),
    RegisterWrite::new(0x3252, 0xff),
    RegisterWrite::new(0x3253, 0xff),
    RegisterWrite::new(0x3254, 0xff),
    RegisterWrite::new(0x3255, 0x02),
    RegisterWrite::new(0x3257, 0xf0),
    RegisterWrite::new(0x325a, 0xa6),
    RegisterWrite::new(0x325d, 0x14),
    RegisterWrite::new(0x325e, 0x51),
    RegisterWrite::new(0x3260, 0x00),
    RegisterWrite::new(0x3261, 0x61),
    RegisterWrite::new(0x3266, 0x30),
    RegisterWrite::new(0x3267, 0x05),
    RegisterWrite::new(0x3275, 0xe7),
    RegisterWrite::new(0x3281, 0xea),
    RegisterWrite::new(0x3282, 0x70),
    RegisterWrite::new(0x3285, 0xff),
    RegisterWrite::new(0x328a, 0xf0),
    RegisterWrite::new(0x328d, 0xb6),
    RegisterWrite::new(0x328e, 0x40),
    RegisterWrite::new(0x3290, 0x42),
    RegisterWrite::new(0x3291, 0x51),
    RegisterWrite::new(0x3292, 0x1e),
    RegisterWrite::new(0x3294, 0xc4),
    RegisterWrite::new(0x3295, 0x20),
    RegisterWrite::new(0x3297, 0x50),
    RegisterWrite::new(0x3298, 0x31),
    RegisterWrite::new(0x3299, 0x1f),
    RegisterWrite::new(0x329b, 0xc0),
    RegisterWrite::new(0x329c, 0x60),
    RegisterWrite::new(0x329e, 0x4c),
    RegisterWrite::new(0x329f, 0x71),
    RegisterWrite::new(0x32a0, 0x1f),
    RegisterWrite::new(0x32a2, 0xb6),
    RegisterWrite::new(0x32a3, 0xc0),
    RegisterWrite::new(0x32a4, 0x0b),
    RegisterWrite::new(0x32a9, 0x24),
    RegisterWrite::new(0x32aa, 0x41),
    RegisterWrite::new(0x32b0, 0x25),
    RegisterWrite::new(0x32b1, 0x51),
    RegisterWrite::new(0x32b7, 0x1c),
    RegisterWrite::new(0x32b8, 0xc1),
    RegisterWrite::new(0x32b9, 0x12),
    RegisterWrite::new(0x32be, 0x1d),
    RegisterWrite::new(0x32bf, 0xd1),
    RegisterWrite::new(0x32c0, 0x12),
    RegisterWrite::new(0x32c2, 0xa8),
    RegisterWrite::new(0x32c3, 0xc0),
    RegisterWrite::new(0x32c4, 0x0a),
    RegisterWrite::new(0x32c5, 0x1e),
    RegisterWrite::new(0x32c6, 0x21),
    RegisterWrite::new(0x32c9, 0xb0),
    RegisterWrite::new(0x32ca, 0x40),
    RegisterWrite::new(0x32cc, 0x26),
    RegisterWrite::new(0x32cd, 0xa1),
    RegisterWrite::new(0x32d0, 0xb6),
    RegisterWrite::new(0x32d1, 0xc0),
    RegisterWrite::new(0x32d2, 0x0b),
    RegisterWrite::new(0x32d4, 0xe2),
    RegisterWrite::new(0x32d5, 0x40),
    RegisterWrite::new(0x32d8, 0x4e),
    RegisterWrite::new(0x32d9, 0xa1),
    RegisterWrite::new(0x32ec, 0xf0),

    RegisterWrite::new(0x3303, 0x00),
    RegisterWrite::new(0x3305, 0x03),
    RegisterWrite::new(0x3314, 0x04),
    RegisterWrite::new(0x3315, 0x01),
    RegisterWrite::new(0x3316, 0x04),
    RegisterWrite::new(0x3317, 0x04),
    RegisterWrite::new(0x3318, 0x38),
    RegisterWrite::new(0x3319, 0x04),
    RegisterWrite::new(0x332c, 0x40),
    RegisterWrite::new(0x332d, 0x20),
    RegisterWrite::new(0x332e, 0x03),
    RegisterWrite::new(0x333e, 0x0a),
    RegisterWrite::new(0x333f, 0x0a),
    RegisterWrite::new(0x3340, 0x03),
    RegisterWrite::new(0x3341, 0x20),
    RegisterWrite::new(0x3342, 0x25),
    RegisterWrite::new(0x3343, 0x68),
    RegisterWrite::new(0x3344, 0x20),
    RegisterWrite::new(0x3345, 0x40),
    RegisterWrite::new(0x3346, 0x28),
    RegisterWrite::new(0x3347, 0x20),
    RegisterWrite::new(0x3348, 0x18),
    RegisterWrite::new(0x3349, 0x78),
    RegisterWrite::new(0x334a, 0x28),
    RegisterWrite::new(0x334e, 0xb4),
    RegisterWrite::new(0x334f, 0x01),
];
