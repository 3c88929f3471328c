/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

mod common;

use common::{Event, Rig, XCLK};
use imx185_cci::mode::{Colorspace, Field, MEDIA_BUS_FMT_SRGGB10_1X10};
use imx185_cci::{BusType, Error, ModeId, ProtocolError, ResourceError, SensorConfig, Which};

fn released(rig: &Rig) -> Vec<String> {
    let mut names: Vec<String> = rig
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Event::Released(name) => Some(name),
            _ => None,
        })
        .collect();
    names.sort();
    names
}

fn all_resources() -> Vec<String> {
    let mut names: Vec<String> = ["xclk", "vdddo", "vddd", "vdda", "enable", "reset"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn probe_identifies_and_leaves_sensor_off() {
    let mut rig = Rig::new();
    let sensor = rig
        .probe_with(&SensorConfig::new(XCLK))
        .expect("probe should succeed");

    assert_eq!(
        rig.events(),
        vec![
            Event::Voltage("vdddo".into(), 1_800_000),
            Event::Voltage("vddd".into(), 1_500_000),
            Event::Voltage("vdda".into(), 2_800_000),
            Event::BusInit,
            Event::ClockRate(XCLK),
            Event::ClockOn,
            Event::RailOn("vdddo".into()),
            Event::RailOn("vddd".into()),
            Event::RailOn("vdda".into()),
            Event::Delay(5),
            Event::PinLow("enable".into()),
            Event::Delay(1),
            Event::PinLow("reset".into()),
            Event::Delay(20),
            Event::Write {
                addr: 0x34,
                reg: 0x3000,
                val: 0x01
            },
            Event::Read {
                addr: 0x34,
                reg: 0x3385
            },
            Event::Read {
                addr: 0x34,
                reg: 0x3384
            },
            Event::PinHigh("reset".into()),
            Event::PinHigh("enable".into()),
            Event::RailOff("vdda".into()),
            Event::RailOff("vddd".into()),
            Event::RailOff("vdddo".into()),
            Event::ClockOff,
            Event::BusRelease,
        ]
    );
    assert!(!sensor.is_powered());
    assert_eq!(rig.shared.users(), 0);
}

#[test]
fn probe_initialises_active_format() {
    let mut rig = Rig::new();
    let sensor = rig.probe();

    let format = sensor.get_format(Which::Active);
    assert_eq!((format.width, format.height), (1920, 1080));
    assert_eq!(format.code, MEDIA_BUS_FMT_SRGGB10_1X10);
    assert_eq!(format.field, Field::None);
    assert_eq!(format.colorspace, Colorspace::Srgb);
    assert_eq!(sensor.current_mode(), ModeId::Mode1080p);
}

#[test]
fn chip_id_mismatch_fails_and_releases_everything() {
    let mut rig = Rig::new();
    rig.i2c.set(0x3385, 0x02);

    let result = rig.probe_with(&SensorConfig::new(XCLK));
    assert!(matches!(
        result,
        Err(Error::Protocol(ProtocolError::ChipIdMismatch {
            register: 0x3385,
            expected: 0x01,
            found: 0x02
        }))
    ));

    let events = rig.events();
    assert!(events.contains(&Event::ClockOff));
    assert!(events.contains(&Event::BusRelease));
    assert_eq!(released(&rig), all_resources());
    assert_eq!(rig.shared.users(), 0);
}

#[test]
fn high_id_byte_is_checked_too() {
    let mut rig = Rig::new();
    rig.i2c.set(0x3384, 0x86);

    let result = rig.probe_with(&SensorConfig::new(XCLK));
    assert!(matches!(
        result,
        Err(Error::Protocol(ProtocolError::ChipIdMismatch {
            register: 0x3384,
            ..
        }))
    ));
}

#[test]
fn unreadable_chip_id_means_no_device() {
    let mut rig = Rig::new();
    rig.i2c.fail_read_from(Some(0x3385));

    let result = rig.probe_with(&SensorConfig::new(XCLK));
    assert!(matches!(
        result,
        Err(Error::Protocol(ProtocolError::NoResponse(0x3385)))
    ));
    assert_eq!(released(&rig), all_resources());
}

#[test]
fn wrong_bus_type_is_rejected_before_acquiring_anything() {
    let mut rig = Rig::new();
    let config = SensorConfig {
        bus_type: BusType::Parallel,
        ..SensorConfig::new(XCLK)
    };

    let result = rig.probe_with(&config);
    assert!(matches!(
        result,
        Err(Error::Protocol(ProtocolError::BusType(BusType::Parallel)))
    ));
    assert!(rig.events().is_empty());
}

#[test]
fn clock_frequency_is_mandatory() {
    let mut rig = Rig::new();
    let result = rig.probe_with(&SensorConfig::default());
    assert!(matches!(
        result,
        Err(Error::Protocol(ProtocolError::MissingClockFrequency))
    ));
}

#[test]
fn missing_regulator_releases_what_was_acquired() {
    let mut rig = Rig::new();
    rig.faults().missing = Some("vddd".into());

    let result = rig.probe_with(&SensorConfig::new(XCLK));
    assert!(matches!(
        result,
        Err(Error::Resource(ResourceError::Unavailable(ref name))) if name == "vddd"
    ));
    assert_eq!(released(&rig), vec!["vdddo".to_string(), "xclk".to_string()]);
    assert!(!rig.events().contains(&Event::ClockOn));
}

#[test]
fn regulator_voltage_failure_is_fatal() {
    let mut rig = Rig::new();
    rig.faults().voltage = Some("vdda".into());

    let result = rig.probe_with(&SensorConfig::new(XCLK));
    assert!(matches!(
        result,
        Err(Error::Resource(ResourceError::Regulator(ref name))) if name == "vdda"
    ));
}

#[test]
fn failed_power_up_fails_probe() {
    let mut rig = Rig::new();
    rig.faults().clock_enable = true;

    let result = rig.probe_with(&SensorConfig::new(XCLK));
    assert!(matches!(
        result,
        Err(Error::Resource(ResourceError::Clock(_)))
    ));
    assert_eq!(rig.shared.users(), 0);
    assert_eq!(released(&rig), all_resources());
}

#[test]
fn removal_powers_down_a_running_sensor() {
    let mut rig = Rig::new();
    let sensor = rig.probe();
    sensor.set_power(true).unwrap();
    rig.clear();

    sensor.remove();

    let events = rig.events();
    assert_eq!(
        &events[..7],
        &[
            Event::PinHigh("reset".into()),
            Event::PinHigh("enable".into()),
            Event::RailOff("vdda".into()),
            Event::RailOff("vddd".into()),
            Event::RailOff("vdddo".into()),
            Event::ClockOff,
            Event::BusRelease,
        ]
    );
    assert_eq!(released(&rig), all_resources());
}
