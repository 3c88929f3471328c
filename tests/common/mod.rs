/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Recording mocks for the bus and the platform resources.
//!
//! Every mock appends to one shared event log so tests can check the
//! relative order of bus transactions, rail switching, line changes and
//! delays.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use embedded_hal::digital::v2::OutputPin;

use imx185_cci::{
    BusController, Clock, Error, Imx185, Platform, Regulator, ResourceError, SensorConfig,
    SharedBus,
};

pub const XCLK: u32 = 23_880_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write { addr: u8, reg: u16, val: u8 },
    Read { addr: u8, reg: u16 },
    ClockRate(u32),
    ClockOn,
    ClockOff,
    Voltage(String, u32),
    RailOn(String),
    RailOff(String),
    PinLow(String),
    PinHigh(String),
    Delay(u32),
    Released(String),
    BusInit,
    BusRelease,
}

pub type Log = Arc<Mutex<Vec<Event>>>;

fn record(log: &Log, event: Event) {
    log.lock().unwrap().push(event);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

/// Register-file simulation of the sensor
#[derive(Clone)]
pub struct MockI2c {
    log: Log,
    pub registers: Arc<Mutex<HashMap<u16, u8>>>,
    pub fail_write_to: Arc<Mutex<Option<u16>>>,
    pub fail_read_from: Arc<Mutex<Option<u16>>>,
}

impl MockI2c {
    pub fn new(log: &Log) -> Self {
        let mut registers = HashMap::new();
        registers.insert(0x3384, 0x85);
        registers.insert(0x3385, 0x01);
        Self {
            log: log.clone(),
            registers: Arc::new(Mutex::new(registers)),
            fail_write_to: Arc::new(Mutex::new(None)),
            fail_read_from: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set(&self, reg: u16, val: u8) {
        self.registers.lock().unwrap().insert(reg, val);
    }

    pub fn get(&self, reg: u16) -> Option<u8> {
        self.registers.lock().unwrap().get(&reg).copied()
    }

    pub fn fail_write_to(&self, reg: Option<u16>) {
        *self.fail_write_to.lock().unwrap() = reg;
    }

    pub fn fail_read_from(&self, reg: Option<u16>) {
        *self.fail_read_from.lock().unwrap() = reg;
    }
}

impl Write for MockI2c {
    type Error = BusFault;

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), BusFault> {
        assert_eq!(bytes.len(), 3, "register writes are address + one byte");
        let reg = u16::from_be_bytes([bytes[0], bytes[1]]);
        let val = bytes[2];
        record(&self.log, Event::Write { addr, reg, val });
        if *self.fail_write_to.lock().unwrap() == Some(reg) {
            return Err(BusFault);
        }
        self.set(reg, val);
        Ok(())
    }
}

impl WriteRead for MockI2c {
    type Error = BusFault;

    fn write_read(&mut self, addr: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), BusFault> {
        assert_eq!(bytes.len(), 2);
        assert_eq!(buffer.len(), 1);
        let reg = u16::from_be_bytes([bytes[0], bytes[1]]);
        record(&self.log, Event::Read { addr, reg });
        if *self.fail_read_from.lock().unwrap() == Some(reg) {
            return Err(BusFault);
        }
        buffer[0] = self.get(reg).unwrap_or(0);
        Ok(())
    }
}

/// Failures to inject into the platform parts
#[derive(Debug, Default)]
pub struct Faults {
    pub missing: Option<String>,
    pub clock_enable: bool,
    pub rail_enable: Option<String>,
    pub voltage: Option<String>,
    /// Line that refuses to be driven low
    pub pin_low: Option<String>,
    /// Make the delay provider actually sleep
    pub real_delays: bool,
}

pub type SharedFaults = Arc<Mutex<Faults>>;

pub struct MockClock {
    log: Log,
    faults: SharedFaults,
}

impl Clock for MockClock {
    fn set_rate(&mut self, hz: u32) -> Result<(), ResourceError> {
        record(&self.log, Event::ClockRate(hz));
        Ok(())
    }

    fn enable(&mut self) -> Result<(), ResourceError> {
        if self.faults.lock().unwrap().clock_enable {
            return Err(ResourceError::Clock("xclk".into()));
        }
        record(&self.log, Event::ClockOn);
        Ok(())
    }

    fn disable(&mut self) {
        record(&self.log, Event::ClockOff);
    }
}

impl Drop for MockClock {
    fn drop(&mut self) {
        record(&self.log, Event::Released("xclk".into()));
    }
}

pub struct MockRegulator {
    name: String,
    log: Log,
    faults: SharedFaults,
}

impl Regulator for MockRegulator {
    fn set_voltage(&mut self, min_uv: u32, _max_uv: u32) -> Result<(), ResourceError> {
        if self.faults.lock().unwrap().voltage.as_deref() == Some(self.name.as_str()) {
            return Err(ResourceError::Regulator(self.name.clone()));
        }
        record(&self.log, Event::Voltage(self.name.clone(), min_uv));
        Ok(())
    }

    fn enable(&mut self) -> Result<(), ResourceError> {
        if self.faults.lock().unwrap().rail_enable.as_deref() == Some(self.name.as_str()) {
            return Err(ResourceError::Regulator(self.name.clone()));
        }
        record(&self.log, Event::RailOn(self.name.clone()));
        Ok(())
    }

    fn disable(&mut self) -> Result<(), ResourceError> {
        record(&self.log, Event::RailOff(self.name.clone()));
        Ok(())
    }
}

impl Drop for MockRegulator {
    fn drop(&mut self) {
        record(&self.log, Event::Released(self.name.clone()));
    }
}

pub struct MockPin {
    name: String,
    log: Log,
    faults: SharedFaults,
}

impl OutputPin for MockPin {
    type Error = PinFault;

    fn set_low(&mut self) -> Result<(), PinFault> {
        if self.faults.lock().unwrap().pin_low.as_deref() == Some(self.name.as_str()) {
            return Err(PinFault);
        }
        record(&self.log, Event::PinLow(self.name.clone()));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        record(&self.log, Event::PinHigh(self.name.clone()));
        Ok(())
    }
}

impl Drop for MockPin {
    fn drop(&mut self) {
        record(&self.log, Event::Released(self.name.clone()));
    }
}

pub struct MockDelay {
    log: Log,
    faults: SharedFaults,
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        record(&self.log, Event::Delay(ms));
        if self.faults.lock().unwrap().real_delays {
            thread::sleep(Duration::from_millis(ms.into()));
        }
    }
}

pub struct MockPlatform {
    log: Log,
    pub faults: SharedFaults,
}

impl MockPlatform {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            faults: SharedFaults::default(),
        }
    }

    fn check(&self, name: &str) -> Result<(), ResourceError> {
        if self.faults.lock().unwrap().missing.as_deref() == Some(name) {
            return Err(ResourceError::Unavailable(name.into()));
        }
        Ok(())
    }
}

impl Platform for MockPlatform {
    type Clock = MockClock;
    type Regulator = MockRegulator;
    type Pin = MockPin;
    type Delay = MockDelay;

    fn clock(&mut self, name: &str) -> Result<MockClock, ResourceError> {
        self.check(name)?;
        Ok(MockClock {
            log: self.log.clone(),
            faults: self.faults.clone(),
        })
    }

    fn regulator(&mut self, name: &str) -> Result<MockRegulator, ResourceError> {
        self.check(name)?;
        Ok(MockRegulator {
            name: name.into(),
            log: self.log.clone(),
            faults: self.faults.clone(),
        })
    }

    fn gpio(&mut self, name: &str) -> Result<MockPin, ResourceError> {
        self.check(name)?;
        Ok(MockPin {
            name: name.into(),
            log: self.log.clone(),
            faults: self.faults.clone(),
        })
    }

    fn delay(&mut self) -> Result<MockDelay, ResourceError> {
        Ok(MockDelay {
            log: self.log.clone(),
            faults: self.faults.clone(),
        })
    }
}

pub struct MockController {
    log: Log,
    fail_init: bool,
}

impl MockController {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail_init: false,
        }
    }

    /// A controller whose bring-up always fails
    pub fn failing(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail_init: true,
        }
    }
}

impl BusController for MockController {
    fn init(&mut self) -> Result<(), ResourceError> {
        if self.fail_init {
            return Err(ResourceError::BusController("csi".into()));
        }
        record(&self.log, Event::BusInit);
        Ok(())
    }

    fn release(&mut self) {
        record(&self.log, Event::BusRelease);
    }
}

pub type TestSensor = Imx185<MockI2c, MockPlatform, MockController>;

/// A sensor on a bench: the mocks plus handles to inspect them
pub struct Rig {
    pub log: Log,
    pub i2c: MockI2c,
    pub platform: MockPlatform,
    pub shared: Arc<SharedBus<MockController>>,
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}

impl Rig {
    pub fn new() -> Self {
        let log = Log::default();
        Self {
            i2c: MockI2c::new(&log),
            platform: MockPlatform::new(&log),
            shared: Arc::new(SharedBus::new(MockController::new(&log))),
            log,
        }
    }

    pub fn probe_with(&mut self, config: &SensorConfig) -> Result<TestSensor, Error<BusFault>> {
        Imx185::probe(self.i2c.clone(), &mut self.platform, config, self.shared.clone())
    }

    /// Probe with defaults and forget the probe traffic
    pub fn probe(&mut self) -> TestSensor {
        let sensor = self
            .probe_with(&SensorConfig::new(XCLK))
            .expect("probe should succeed");
        self.clear();
        sensor
    }

    pub fn faults(&self) -> std::sync::MutexGuard<'_, Faults> {
        self.platform.faults.lock().unwrap()
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }

    /// (register, value) of every attempted write, in order
    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Write { reg, val, .. } => Some((reg, val)),
                _ => None,
            })
            .collect()
    }

    pub fn bus_traffic(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Write { .. } | Event::Read { .. }))
            .count()
    }
}
