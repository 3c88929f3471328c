/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! The sensor instance: discovery, power state, streaming, controls and
//! pad negotiation.
//!
//! Two locks guard an instance. The power lock covers the hardware (bus,
//! rails, lines) together with the power and stream state. The format lock
//! covers the active pad configuration and the selected mode. Stream
//! transitions take the format lock first, then the power lock.

use core::fmt::Debug;
use std::sync::Arc;

use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::{debug, error, info, warn};
use parking_lot::Mutex;

use crate::bus::RegisterBus;
use crate::config::SensorConfig;
use crate::controls::{self, Control, ControlId, ControlPolicy};
use crate::mode::{
    apply_format, find_nearest_mode, FrameSizeRange, ModeId, PadConfig, PadFormat, Rect,
    SelectionTarget, Which, MODES,
};
use crate::power::{BusController, Platform, PowerSequencer, Rail, Regulator, SharedBus};
use crate::registers::*;
use crate::{Error, ProtocolError};

type Sequencer<P> = PowerSequencer<
    <P as Platform>::Clock,
    <P as Platform>::Regulator,
    <P as Platform>::Pin,
    <P as Platform>::Delay,
>;

struct Hardware<I2C, P: Platform> {
    bus: RegisterBus<I2C>,
    power: Sequencer<P>,
    streaming: bool,
}

struct ActiveState {
    config: PadConfig,
    mode: ModeId,
}

/// One discovered IMX185
pub struct Imx185<I2C, P: Platform, B: BusController = ()> {
    hw: Mutex<Hardware<I2C, P>>,
    active: Mutex<ActiveState>,
    shared: Arc<SharedBus<B>>,
    control_policy: ControlPolicy,
    load_init_table: bool,
}

impl<I2C, P, B, CommE> Imx185<I2C, P, B>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    P: Platform,
    B: BusController,
    CommE: Debug,
{
    /// Acquire the resources described by `config`, power the sensor up,
    /// check its identity and power it back down.
    ///
    /// On failure nothing is retained: resources acquired so far are
    /// dropped and the sensor is left powered off.
    pub fn probe(
        i2c: I2C,
        platform: &mut P,
        config: &SensorConfig,
        shared: Arc<SharedBus<B>>,
    ) -> Result<Self, Error<CommE>> {
        debug!("probe, i2c addr = {:#04x}", config.read_address());

        let clock_frequency = config.validate().map_err(|e| {
            error!("{}", e);
            e
        })?;
        let clock = platform.clock(&config.clock_name)?;

        let names = [
            &config.io_regulator,
            &config.core_regulator,
            &config.analog_regulator,
        ];
        let io = acquire_rail(platform, Rail::Io, names[Rail::Io as usize])?;
        let core = acquire_rail(platform, Rail::Core, names[Rail::Core as usize])?;
        let analog = acquire_rail(platform, Rail::Analog, names[Rail::Analog as usize])?;

        let enable = platform.gpio(&config.enable_gpio).map_err(|e| {
            error!("cannot get enable gpio");
            e
        })?;
        let reset = platform.gpio(&config.reset_gpio).map_err(|e| {
            error!("cannot get reset gpio");
            e
        })?;
        let delay = platform.delay()?;

        let device = Self {
            hw: Mutex::new(Hardware {
                bus: RegisterBus::new(i2c, config.read_address(), config.write_address()),
                power: PowerSequencer::new(
                    clock,
                    clock_frequency,
                    [io, core, analog],
                    enable,
                    reset,
                    delay,
                ),
                streaming: false,
            }),
            active: Mutex::new(ActiveState {
                config: PadConfig::default(),
                mode: ModeId::Mode1080p,
            }),
            shared,
            control_policy: config.control_policy,
            load_init_table: config.load_init_table,
        };

        device.set_power(true).map_err(|e| {
            error!("could not power up IMX185");
            e
        })?;
        let identified = device.identify();
        device.set_power(false)?;
        identified?;

        device.init_config(Which::Active);
        Ok(device)
    }

    fn identify(&self) -> Result<(), Error<CommE>> {
        let mut hw = self.hw.lock();
        let low = read_id(&mut hw.bus, Register::ChipIdLow, CHIP_ID_LOW_BYTE)?;
        let high = read_id(&mut hw.bus, Register::ChipIdHigh, CHIP_ID_HIGH_BYTE)?;
        info!(
            "Sony IMX185 detected at address {:#04x}, id {:#06x}",
            hw.bus.read_address(),
            u16::from_be_bytes([high, low])
        );
        Ok(())
    }

    /// Power the sensor up or down. Requests for the current state
    /// succeed without touching the hardware.
    pub fn set_power(&self, on: bool) -> Result<(), Error<CommE>> {
        let mut hw = self.hw.lock();
        if hw.power.is_on() == on {
            return Ok(());
        }

        if !on {
            hw.streaming = false;
            hw.power.power_off();
            self.shared.release();
            return Ok(());
        }

        self.shared.acquire()?;
        if let Err(e) = hw.power.power_on() {
            error!("could not set power on: {}", e);
            self.shared.release();
            return Err(e.into());
        }

        if let Err(e) = self.program_after_power_on(&mut hw) {
            hw.power.power_off();
            self.shared.release();
            return Err(e);
        }
        Ok(())
    }

    fn program_after_power_on(&self, hw: &mut Hardware<I2C, P>) -> Result<(), Error<CommE>> {
        if self.load_init_table {
            hw.bus.apply_table(&crate::tables::GLOBAL_INIT).map_err(|e| {
                error!("could not set init registers");
                e
            })?;
        }
        hw.bus.write_register(Register::SystemCtrl0.addr(), SYSTEM_CTRL0_STANDBY)
    }

    /// Start or stop streaming.
    ///
    /// Starting programs the selected mode's table and then leaves standby.
    /// Any failure leaves the sensor stopped.
    pub fn set_stream(&self, enable: bool) -> Result<(), Error<CommE>> {
        let active = self.active.lock();
        let mut hw = self.hw.lock();

        if !hw.power.is_on() {
            warn!("stream {} requested while powered off", enable);
            return Err(Error::PoweredOff);
        }
        if hw.streaming == enable {
            return Ok(());
        }

        if enable {
            let mode = active.mode.mode();
            hw.bus.apply_table(mode.table).map_err(|e| {
                error!("could not set mode {:?}", active.mode);
                e
            })?;
            hw.bus.write_register(Register::SystemCtrl0.addr(), SYSTEM_CTRL0_START)?;
            debug!("streaming {}x{}", mode.width, mode.height);
        } else {
            hw.bus.write_register(Register::SystemCtrl0.addr(), SYSTEM_CTRL0_STANDBY)?;
            debug!("standby");
        }
        hw.streaming = enable;
        Ok(())
    }

    /// Apply a control value.
    ///
    /// Out-of-range values are rejected. With the sensor powered off, or
    /// with [`ControlPolicy::Bypass`], the request succeeds without bus
    /// traffic.
    pub fn set_control(&self, control: Control) -> Result<(), Error<CommE>> {
        if !control.in_range() {
            return Err(Error::InvalidRequest("control value out of range"));
        }
        if self.control_policy == ControlPolicy::Bypass {
            debug!("control {:?} bypassed", control);
            return Ok(());
        }

        let mut hw = self.hw.lock();
        if !hw.power.is_on() {
            return Ok(());
        }
        controls::apply(&mut hw.bus, control)
    }

    /// [`set_control`](Self::set_control) for the host's integer encoding
    pub fn set_control_raw(&self, id: ControlId, value: i32) -> Result<(), Error<CommE>> {
        match Control::from_raw(id, value) {
            Some(control) => self.set_control(control),
            None => Err(Error::InvalidRequest("control value out of range")),
        }
    }

    /// Negotiate a format: the nearest supported mode wins and the pixel
    /// encoding is fixed. Returns the resulting format.
    pub fn set_format(&self, which: Which<'_>, request: &PadFormat) -> PadFormat {
        let mode = find_nearest_mode(request.width, request.height);
        match which {
            Which::Active => {
                let mut active = self.active.lock();
                apply_format(&mut active.config, mode);
                active.mode = mode.id;
                active.config.format
            }
            Which::Try(config) => {
                apply_format(config, mode);
                config.format
            }
        }
    }

    pub fn get_format(&self, which: Which<'_>) -> PadFormat {
        match which {
            Which::Active => self.active.lock().config.format,
            Which::Try(config) => config.format,
        }
    }

    /// Only the crop rectangle is exposed
    pub fn get_selection(
        &self,
        which: Which<'_>,
        target: SelectionTarget,
    ) -> Result<Rect, Error<CommE>> {
        if target != SelectionTarget::Crop {
            return Err(Error::InvalidRequest("unsupported selection target"));
        }
        Ok(match which {
            Which::Active => self.active.lock().config.crop,
            Which::Try(config) => config.crop,
        })
    }

    pub fn enum_mbus_code(&self, index: u32) -> Result<u32, Error<CommE>> {
        if index > 0 {
            return Err(Error::InvalidRequest("mbus code index out of range"));
        }
        Ok(self.active.lock().config.format.code)
    }

    pub fn enum_frame_size(&self, index: u32) -> Result<FrameSizeRange, Error<CommE>> {
        MODES
            .get(index as usize)
            .map(FrameSizeRange::from)
            .ok_or(Error::InvalidRequest("frame size index out of range"))
    }

    /// Reset a configuration to the default full-HD format
    pub fn init_config(&self, which: Which<'_>) {
        self.set_format(which, &PadFormat::sized(1920, 1080));
    }

    pub fn current_mode(&self) -> ModeId {
        self.active.lock().mode
    }

    pub fn is_powered(&self) -> bool {
        self.hw.lock().power.is_on()
    }

    pub fn is_streaming(&self) -> bool {
        self.hw.lock().streaming
    }

    /// Tear the device down, powering it off first if needed
    pub fn remove(self) {
        drop(self)
    }
}

impl<I2C, P: Platform, B: BusController> Drop for Imx185<I2C, P, B> {
    fn drop(&mut self) {
        let hw = self.hw.get_mut();
        if hw.power.is_on() {
            warn!("removed while powered, powering off");
            hw.streaming = false;
            hw.power.power_off();
            self.shared.release();
        }
    }
}

fn acquire_rail<P: Platform>(
    platform: &mut P,
    rail: Rail,
    name: &str,
) -> Result<P::Regulator, crate::ResourceError> {
    let mut regulator = platform.regulator(name).map_err(|e| {
        error!("cannot get {} regulator", rail.name());
        e
    })?;
    let uv = rail.microvolts();
    regulator.set_voltage(uv, uv).map_err(|e| {
        error!("cannot set {} voltage", rail.name());
        e
    })?;
    Ok(regulator)
}

fn read_id<I2C, CommE>(
    bus: &mut RegisterBus<I2C>,
    reg: Register,
    expected: u8,
) -> Result<u8, Error<CommE>>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    CommE: Debug,
{
    let found = bus.read_register(reg.addr()).map_err(|_| {
        error!("could not read chip id register {:#06x}", reg.addr());
        ProtocolError::NoResponse(reg.addr())
    })?;
    if found != expected {
        error!(
            "chip id register {:#06x} reads {:#04x}, expected {:#04x}",
            reg.addr(),
            found,
            expected
        );
        return Err(ProtocolError::ChipIdMismatch {
            register: reg.addr(),
            expected,
            found,
        }
        .into());
    }
    Ok(found)
}
