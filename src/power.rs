/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Power sequencing.
//!
//! Power-up order: external clock, then the io, core and analog rails,
//! then release of the enable line and finally of the reset line, with
//! settle delays in between. Power-down runs the reverse and always
//! completes, logging whatever fails along the way.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use log::{debug, error, warn};
use parking_lot::{const_mutex, Mutex};

use crate::ResourceError;

/// Serializes the hardware part of power-up across every sensor in the
/// process: rails and clocks of neighbouring sensors may share supplies.
static SEQUENCING_LOCK: Mutex<()> = const_mutex(());

/// Rail settle time after the regulators come up (5..15 ms window)
pub const RAIL_SETTLE_MS: u32 = 5;
/// Wait after releasing the enable line (1..2 ms window)
pub const ENABLE_SETTLE_MS: u32 = 1;
/// Boot time after releasing reset
pub const BOOT_MS: u32 = 20;

/// External clock feeding the sensor
pub trait Clock {
    fn set_rate(&mut self, hz: u32) -> Result<(), ResourceError>;
    fn enable(&mut self) -> Result<(), ResourceError>;
    fn disable(&mut self);
}

/// A switchable supply rail
pub trait Regulator {
    fn set_voltage(&mut self, min_uv: u32, max_uv: u32) -> Result<(), ResourceError>;
    fn enable(&mut self) -> Result<(), ResourceError>;
    fn disable(&mut self) -> Result<(), ResourceError>;
}

/// Bus infrastructure shared by every sensor on one controller
pub trait BusController {
    fn init(&mut self) -> Result<(), ResourceError>;
    fn release(&mut self);
}

/// For buses that need no bring-up of their own
impl BusController for () {
    fn init(&mut self) -> Result<(), ResourceError> {
        Ok(())
    }

    fn release(&mut self) {}
}

/// Hands out the resources of one sensor at discovery time
pub trait Platform {
    type Clock: Clock;
    type Regulator: Regulator;
    type Pin: OutputPin;
    type Delay: DelayMs<u32>;

    fn clock(&mut self, name: &str) -> Result<Self::Clock, ResourceError>;
    fn regulator(&mut self, name: &str) -> Result<Self::Regulator, ResourceError>;
    /// Lines are handed over driven high, which holds the sensor off.
    fn gpio(&mut self, name: &str) -> Result<Self::Pin, ResourceError>;
    fn delay(&mut self) -> Result<Self::Delay, ResourceError>;
}

/// The three supply rails, in power-up order
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rail {
    Io = 0,
    Core = 1,
    Analog = 2,
}

impl Rail {
    pub const ALL: [Rail; 3] = [Rail::Io, Rail::Core, Rail::Analog];

    pub fn name(self) -> &'static str {
        match self {
            Rail::Io => "io",
            Rail::Core => "core",
            Rail::Analog => "analog",
        }
    }

    pub fn microvolts(self) -> u32 {
        use crate::registers::*;
        match self {
            Rail::Io => VOLTAGE_DIGITAL_IO_UV,
            Rail::Core => VOLTAGE_DIGITAL_CORE_UV,
            Rail::Analog => VOLTAGE_ANALOG_UV,
        }
    }
}

struct SharedBusState<B> {
    controller: B,
    users: usize,
}

/// Reference-counted handle on a [`BusController`]: the first user
/// initialises it, the last one releases it.
pub struct SharedBus<B> {
    state: Mutex<SharedBusState<B>>,
}

impl<B: BusController> SharedBus<B> {
    pub fn new(controller: B) -> Self {
        Self {
            state: Mutex::new(SharedBusState {
                controller,
                users: 0,
            }),
        }
    }

    pub fn acquire(&self) -> Result<(), ResourceError> {
        let mut state = self.state.lock();
        if state.users == 0 {
            state.controller.init().map_err(|e| {
                error!("bus controller init failed: {}", e);
                e
            })?;
        }
        state.users += 1;
        Ok(())
    }

    pub fn release(&self) {
        let mut state = self.state.lock();
        match state.users {
            0 => warn!("bus controller released more often than acquired"),
            1 => {
                state.users = 0;
                state.controller.release();
            }
            _ => state.users -= 1,
        }
    }

    pub fn users(&self) -> usize {
        self.state.lock().users
    }
}

impl Default for SharedBus<()> {
    fn default() -> Self {
        Self::new(())
    }
}

/// Clock, rails and control lines of one sensor, plus its power flag
pub struct PowerSequencer<CLK, REG, PIN, D> {
    clock: CLK,
    clock_frequency: u32,
    rails: [REG; 3],
    enable: PIN,
    reset: PIN,
    delay: D,
    powered: bool,
}

impl<CLK, REG, PIN, D> PowerSequencer<CLK, REG, PIN, D>
where
    CLK: Clock,
    REG: Regulator,
    PIN: OutputPin,
    D: DelayMs<u32>,
{
    /// `rails` are indexed by [`Rail`]. Starts powered off.
    pub fn new(
        clock: CLK,
        clock_frequency: u32,
        rails: [REG; 3],
        enable: PIN,
        reset: PIN,
        delay: D,
    ) -> Self {
        Self {
            clock,
            clock_frequency,
            rails,
            enable,
            reset,
            delay,
            powered: false,
        }
    }

    pub fn is_on(&self) -> bool {
        self.powered
    }

    /// Run the power-up sequence. A no-op if already on.
    ///
    /// On failure everything enabled so far is switched back off and the
    /// sequencer stays off.
    pub fn power_on(&mut self) -> Result<(), ResourceError> {
        if self.powered {
            return Ok(());
        }

        let _guard = SEQUENCING_LOCK.lock();
        debug!("power on, xclk {} Hz", self.clock_frequency);

        self.clock.set_rate(self.clock_frequency).map_err(|e| {
            error!("xclk set rate failed: {}", e);
            e
        })?;
        self.clock.enable().map_err(|e| {
            error!("clk prepare enable failed: {}", e);
            e
        })?;

        if let Err(e) = self.enable_rails() {
            self.clock.disable();
            return Err(e);
        }

        self.delay.delay_ms(RAIL_SETTLE_MS);
        if self.enable.set_low().is_err() {
            error!("could not release enable line");
            self.shut_down();
            return Err(ResourceError::Gpio("enable".into()));
        }

        self.delay.delay_ms(ENABLE_SETTLE_MS);
        if self.reset.set_low().is_err() {
            error!("could not release reset line");
            self.shut_down();
            return Err(ResourceError::Gpio("reset".into()));
        }

        self.delay.delay_ms(BOOT_MS);
        self.powered = true;
        Ok(())
    }

    /// Run the power-down sequence. A no-op if already off.
    pub fn power_off(&mut self) {
        if !self.powered {
            return;
        }
        debug!("power off");
        self.shut_down();
        self.powered = false;
    }

    fn enable_rails(&mut self) -> Result<(), ResourceError> {
        for rail in Rail::ALL {
            if let Err(e) = self.rails[rail as usize].enable() {
                error!("set {} voltage failed: {}", rail.name(), e);
                for enabled in Rail::ALL[..rail as usize].iter().rev() {
                    self.disable_rail(*enabled);
                }
                return Err(e);
            }
        }
        Ok(())
    }

    fn disable_rail(&mut self, rail: Rail) {
        if let Err(e) = self.rails[rail as usize].disable() {
            warn!("{} regulator disable failed: {}", rail.name(), e);
        }
    }

    /// Best-effort teardown, every step runs regardless of earlier failures
    fn shut_down(&mut self) {
        if self.reset.set_high().is_err() {
            warn!("could not assert reset line");
        }
        if self.enable.set_high().is_err() {
            warn!("could not assert enable line");
        }
        for rail in Rail::ALL.iter().rev() {
            self.disable_rail(*rail);
        }
        self.clock.disable();
    }
}
