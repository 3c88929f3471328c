/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Register access over the two-wire bus.
//!
//! Registers have 16-bit addresses and hold one byte. On the wire the
//! address goes out big-endian, followed by the value for a write; a read
//! is a write of the two address bytes followed by a one-byte read.

use core::fmt::Debug;

use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::{debug, error};

use crate::Error;

/// A single register write: one element of a [`RegisterTable`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterWrite {
    pub address: u16,
    pub value: u8,
}

impl RegisterWrite {
    pub const fn new(address: u16, value: u8) -> Self {
        Self { address, value }
    }
}

/// An ordered, named, read-only sequence of register writes
#[derive(Debug)]
pub struct RegisterTable {
    name: &'static str,
    writes: &'static [RegisterWrite],
}

impl RegisterTable {
    pub const fn new(name: &'static str, writes: &'static [RegisterWrite]) -> Self {
        Self { name, writes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn writes(&self) -> &'static [RegisterWrite] {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

/// Register-level access to the sensor
pub struct RegisterBus<I2C> {
    i2c: I2C,
    read_address: u8,
    write_address: u8,
}

impl<I2C, CommE> RegisterBus<I2C>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    CommE: Debug,
{
    /// Reads go to `read_address`, writes to `write_address`.
    /// These are normally the same address.
    pub fn new(i2c: I2C, read_address: u8, write_address: u8) -> Self {
        Self {
            i2c,
            read_address,
            write_address,
        }
    }

    /// Write a u8 to a 16-bit address
    pub fn write_register(&mut self, reg: u16, val: u8) -> Result<(), Error<CommE>> {
        let [hi, lo] = reg.to_be_bytes();
        self.i2c
            .write(self.write_address, &[hi, lo, val])
            .map_err(|e| {
                error!(
                    "write reg error {:?} on addr {:#04x}: reg={:#06x}, val={:#04x}",
                    e, self.write_address, reg, val
                );
                Error::Comm(e)
            })
    }

    /// Read a u8 from a 16-bit address
    pub fn read_register(&mut self, reg: u16) -> Result<u8, Error<CommE>> {
        let mut recv_buf = [0u8];
        self.i2c
            .write_read(self.read_address, &reg.to_be_bytes(), &mut recv_buf)
            .map_err(|e| {
                error!(
                    "read reg error {:?} on addr {:#04x}: reg={:#06x}",
                    e, self.read_address, reg
                );
                Error::Comm(e)
            })?;
        Ok(recv_buf[0])
    }

    /// Read a register, transform its value and write it back.
    /// Nothing is written if the read fails.
    pub fn update_register<F>(&mut self, reg: u16, f: F) -> Result<(), Error<CommE>>
    where
        F: FnOnce(u8) -> u8,
    {
        let current = self.read_register(reg)?;
        self.write_register(reg, f(current))
    }

    /// Apply every write of `table` in order.
    ///
    /// Stops at the first failing write and returns its error. Writes that
    /// already went out stay applied: the sensor has no multi-register
    /// transaction to roll back.
    pub fn apply_table(&mut self, table: &RegisterTable) -> Result<(), Error<CommE>> {
        for (index, write) in table.writes().iter().enumerate() {
            if let Err(e) = self.write_register(write.address, write.value) {
                error!(
                    "table {} aborted at entry {} of {}",
                    table.name(),
                    index,
                    table.len()
                );
                return Err(e);
            }
        }
        debug!("table {} applied ({} writes)", table.name(), table.len());
        Ok(())
    }

    pub fn read_address(&self) -> u8 {
        self.read_address
    }

    pub fn write_address(&self) -> u8 {
        self.write_address
    }
}
