/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Register-file stand-in for the sensor's SCCB port, for unit tests

use std::collections::{HashMap, VecDeque};

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Read, Write};

#[derive(Debug, PartialEq, Eq)]
pub struct BusFault;

/// Behaves like the sensor's register file: a two byte address write
/// loads the address pointer, longer writes store data from there,
/// and reads return data from the pointer onward.
pub struct FakeSccb {
    address: u8,
    regs: Vec<u8>,
    pointer: u16,
    scripted: HashMap<u16, VecDeque<u8>>,
    write_budget: Option<usize>,
    fail_reads: bool,
    /// Successful register writes in bus order
    pub writes: Vec<(u16, u8)>,
    /// Register addresses read, in bus order
    pub reads: Vec<u16>,
    /// Register writes attempted, including failed ones
    pub write_attempts: usize,
}

impl FakeSccb {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            regs: vec![0; 0x1_0000],
            pointer: 0,
            scripted: HashMap::new(),
            write_budget: None,
            fail_reads: false,
            writes: Vec::new(),
            reads: Vec::new(),
            write_attempts: 0,
        }
    }

    /// Preload a register value without logging a write
    pub fn with_reg(mut self, reg: u16, val: u8) -> Self {
        self.regs[reg as usize] = val;
        self
    }

    /// Fail every register write after the first `count`
    pub fn fail_writes_after(mut self, count: usize) -> Self {
        self.write_budget = Some(count);
        self
    }

    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Queue values returned by successive reads of `reg`, ahead of
    /// whatever the register file holds
    pub fn script_reads(&mut self, reg: u16, vals: &[u8]) {
        self.scripted
            .entry(reg)
            .or_insert_with(VecDeque::new)
            .extend(vals.iter().copied());
    }

    pub fn reg(&self, reg: u16) -> u8 {
        self.regs[reg as usize]
    }

    pub fn read_count(&self, reg: u16) -> usize {
        self.reads.iter().filter(|r| **r == reg).count()
    }
}

impl Write for FakeSccb {
    type Error = BusFault;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        assert_eq!(address, self.address);
        assert!(bytes.len() >= 2, "SCCB writes start with a 16-bit address");
        self.pointer = u16::from_be_bytes([bytes[0], bytes[1]]);

        for val in &bytes[2..] {
            self.write_attempts += 1;
            if let Some(budget) = self.write_budget {
                if self.writes.len() >= budget {
                    return Err(BusFault);
                }
            }
            self.regs[self.pointer as usize] = *val;
            self.writes.push((self.pointer, *val));
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }
}

impl Read for FakeSccb {
    type Error = BusFault;

    fn read(
        &mut self,
        address: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, self.address);
        if self.fail_reads {
            return Err(BusFault);
        }

        for slot in buffer.iter_mut() {
            let reg = self.pointer;
            self.reads.push(reg);
            let scripted =
                self.scripted.get_mut(&reg).and_then(|q| q.pop_front());
            *slot = match scripted {
                Some(val) => val,
                None => self.regs[reg as usize],
            };
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }
}

/// Records requested delays without sleeping
#[derive(Default)]
pub struct CountingDelay {
    pub calls: usize,
    pub total_ms: u32,
}

impl DelayMs<u32> for CountingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms;
    }
}
