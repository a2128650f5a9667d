/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Autofocus: firmware upload and the command/status mailbox
//! of the sensor's embedded focus controller

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Read, Write};

use crate::firmware::{AUTOFOCUS_FIRMWARE, FIRMWARE_BASE_ADDRESS};
use crate::{regs, tables, Error, Ov5640};

/// Focus controller state as seen by the driver
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusState {
    /// Firmware not uploaded yet
    Uninitialized,
    Idle,
    /// Single-shot focus command in flight
    SingleShot,
    /// Continuous focus command in flight
    Continuous,
}

/// Status reported by the firmware once it is running
const FW_STATUS_READY: u8 = 0x70;
/// Status reported after a completed single-shot focus
const FW_STATUS_FOCUSED: u8 = 0x10;

const CMD_SINGLE_FOCUS: u8 = 0x03;
const CMD_CONTINUOUS_FOCUS: u8 = 0x04;
const CMD_RELEASE_FOCUS: u8 = 0x08;
const ACK_PENDING: u8 = 0x01;
const ACK_DONE: u8 = 0x00;

/// Hold the focus MCU in reset
const MCU_RESET: u8 = 0x20;

const POLL_INTERVAL_MS: u32 = 5;
/// Status reads allowed while waiting for the firmware to start
pub const FIRMWARE_READY_BUDGET: u32 = 1000;
/// Status reads allowed per focus command
pub const FOCUS_POLL_BUDGET: u32 = 200;

impl<I2C, CommE> Ov5640<I2C>
where
    I2C: Write<Error = CommE> + Read<Error = CommE>,
{
    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    /// Upload the autofocus firmware and wait for it to report ready
    pub fn focus_init(
        &mut self,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::SYSTEM_RESET00, MCU_RESET)?;
        let upload = (FIRMWARE_BASE_ADDRESS..).zip(AUTOFOCUS_FIRMWARE.iter());
        for (reg, byte) in upload {
            self.write_reg_u8(reg, *byte)?;
        }
        self.write_table(tables::FOCUS_MAILBOX_RESET)?;

        self.poll_reg(
            regs::FW_STATUS,
            FW_STATUS_READY,
            FIRMWARE_READY_BUDGET,
            delay,
        )?;
        self.focus = FocusState::Idle;
        Ok(())
    }

    /// Run one focus cycle, blocking until it completes
    pub fn focus_single(
        &mut self,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        self.focus_send_single()?;
        self.poll_reg(
            regs::FW_STATUS,
            FW_STATUS_FOCUSED,
            FOCUS_POLL_BUDGET,
            delay,
        )?;
        self.focus = FocusState::Idle;
        Ok(())
    }

    /// Release the lens, then start continuous focus. Each step
    /// waits for the firmware to acknowledge the command.
    pub fn focus_constant(
        &mut self,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        self.focus_send_constant_idle()?;
        self.poll_reg(regs::FW_CMD_ACK, ACK_DONE, FOCUS_POLL_BUDGET, delay)?;
        self.focus_send_constant_focus()?;
        self.poll_reg(regs::FW_CMD_ACK, ACK_DONE, FOCUS_POLL_BUDGET, delay)?;
        self.focus = FocusState::Idle;
        Ok(())
    }

    pub fn focus_send_single(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::FW_CMD_MAIN, CMD_SINGLE_FOCUS)?;
        self.focus = FocusState::SingleShot;
        Ok(())
    }

    /// Returns true once the single-shot focus has completed
    pub fn focus_read_single(&mut self) -> Result<bool, crate::Error<CommE>> {
        let done = self.read_reg_u8(regs::FW_STATUS)? == FW_STATUS_FOCUSED;
        if done {
            self.focus = FocusState::Idle;
        }
        Ok(done)
    }

    pub fn focus_send_constant_idle(
        &mut self,
    ) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::FW_CMD_ACK, ACK_PENDING)?;
        self.write_reg_u8(regs::FW_CMD_MAIN, CMD_RELEASE_FOCUS)?;
        self.focus = FocusState::Continuous;
        Ok(())
    }

    pub fn focus_send_constant_focus(
        &mut self,
    ) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::FW_CMD_ACK, ACK_PENDING)?;
        self.write_reg_u8(regs::FW_CMD_MAIN, CMD_CONTINUOUS_FOCUS)?;
        self.focus = FocusState::Continuous;
        Ok(())
    }

    /// Returns true once the firmware has acknowledged the last
    /// continuous focus command
    pub fn focus_read_constant(&mut self) -> Result<bool, crate::Error<CommE>> {
        let done = self.read_reg_u8(regs::FW_CMD_ACK)? == ACK_DONE;
        if done {
            self.focus = FocusState::Idle;
        }
        Ok(done)
    }

    /// Read `reg` up to `budget` times, `POLL_INTERVAL_MS` apart,
    /// until it holds `expected`
    fn poll_reg(
        &mut self,
        reg: u16,
        expected: u8,
        budget: u32,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        for attempt in 0..budget {
            if self.read_reg_u8(reg)? == expected {
                return Ok(());
            }
            if attempt + 1 < budget {
                delay.delay_ms(POLL_INTERVAL_MS);
            }
        }

        #[cfg(feature = "rttdebug")]
        rprintln!("ov5640-i2c focus poll timeout reg 0x{:x}", reg);
        Err(Error::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use crate::firmware::{AUTOFOCUS_FIRMWARE, FIRMWARE_BASE_ADDRESS};
    use crate::test_bus::{CountingDelay, FakeSccb};
    use crate::*;
    use crate::{regs, tables};

    use super::{FIRMWARE_READY_BUDGET, FOCUS_POLL_BUDGET};

    fn sensor(bus: FakeSccb) -> Ov5640<FakeSccb> {
        Ov5640::default(bus)
    }

    #[test]
    fn init_uploads_the_whole_firmware() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        bus.script_reads(regs::FW_STATUS, &[0x7F, 0x7F, 0x70]);
        let mut cam = sensor(bus);
        let mut delay = CountingDelay::default();
        assert_eq!(cam.focus_state(), FocusState::Uninitialized);

        cam.focus_init(&mut delay).unwrap();
        assert_eq!(cam.focus_state(), FocusState::Idle);

        let writes = &cam.i2c.writes;
        assert_eq!(writes[0], (regs::SYSTEM_RESET00, 0x20));
        let upload = &writes[1..=AUTOFOCUS_FIRMWARE.len()];
        for (i, (reg, val)) in upload.iter().enumerate() {
            assert_eq!(*reg, FIRMWARE_BASE_ADDRESS + i as u16);
            assert_eq!(*val, AUTOFOCUS_FIRMWARE[i]);
        }
        assert_eq!(
            &writes[AUTOFOCUS_FIRMWARE.len() + 1..],
            tables::FOCUS_MAILBOX_RESET
        );
        assert_eq!(cam.i2c.read_count(regs::FW_STATUS), 3);
        assert_eq!(delay.calls, 2);
        assert_eq!(delay.total_ms, 10);
    }

    #[test]
    fn init_times_out_after_full_budget() {
        // status stays at the 0x7F written by the mailbox reset
        let mut cam = sensor(FakeSccb::new(DEFAULT_I2C_ADDRESS));
        assert!(matches!(
            cam.focus_init(&mut CountingDelay::default()),
            Err(Error::Timeout)
        ));
        assert_eq!(
            cam.i2c.read_count(regs::FW_STATUS),
            FIRMWARE_READY_BUDGET as usize
        );
        assert_eq!(cam.focus_state(), FocusState::Uninitialized);
    }

    #[test]
    fn single_focus_succeeds_on_last_allowed_read() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        let mut status = vec![0x00; FOCUS_POLL_BUDGET as usize - 1];
        status.push(0x10);
        bus.script_reads(regs::FW_STATUS, &status);
        let mut cam = sensor(bus);

        cam.focus_single(&mut CountingDelay::default()).unwrap();
        assert_eq!(cam.i2c.writes, [(regs::FW_CMD_MAIN, 0x03)]);
        assert_eq!(cam.i2c.read_count(regs::FW_STATUS), 200);
        assert_eq!(cam.focus_state(), FocusState::Idle);
    }

    #[test]
    fn single_focus_times_out_after_200_reads() {
        let mut cam = sensor(FakeSccb::new(DEFAULT_I2C_ADDRESS));
        let mut delay = CountingDelay::default();
        assert!(matches!(cam.focus_single(&mut delay), Err(Error::Timeout)));
        assert_eq!(cam.i2c.read_count(regs::FW_STATUS), 200);
        assert_eq!(delay.total_ms, 199 * 5);
        assert_eq!(cam.focus_state(), FocusState::SingleShot);
    }

    #[test]
    fn constant_focus_runs_both_phases() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        bus.script_reads(regs::FW_CMD_ACK, &[0x01, 0x00, 0x01, 0x01, 0x00]);
        let mut cam = sensor(bus);

        cam.focus_constant(&mut CountingDelay::default()).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [
                (regs::FW_CMD_ACK, 0x01),
                (regs::FW_CMD_MAIN, 0x08),
                (regs::FW_CMD_ACK, 0x01),
                (regs::FW_CMD_MAIN, 0x04),
            ]
        );
        assert_eq!(cam.i2c.read_count(regs::FW_CMD_ACK), 5);
        assert_eq!(cam.focus_state(), FocusState::Idle);
    }

    #[test]
    fn constant_focus_stops_when_release_is_never_acked() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        bus.script_reads(regs::FW_CMD_ACK, &[0x01; 200]);
        let mut cam = sensor(bus);

        let mut delay = CountingDelay::default();
        assert!(matches!(
            cam.focus_constant(&mut delay),
            Err(Error::Timeout)
        ));
        assert_eq!(
            cam.i2c.read_count(regs::FW_CMD_ACK),
            FOCUS_POLL_BUDGET as usize
        );
        assert_eq!(delay.total_ms, 199 * 5);
        // phase two never started
        assert_eq!(cam.i2c.writes.len(), 2);
        assert_eq!(cam.focus_state(), FocusState::Continuous);
    }

    #[test]
    fn constant_focus_phase_succeeds_on_last_allowed_read() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        let mut acks = vec![0x01; FOCUS_POLL_BUDGET as usize - 1];
        acks.push(0x00);
        acks.push(0x00);
        bus.script_reads(regs::FW_CMD_ACK, &acks);
        let mut cam = sensor(bus);

        cam.focus_constant(&mut CountingDelay::default()).unwrap();
        // 200 reads for the release phase, 1 for the focus phase
        assert_eq!(cam.i2c.read_count(regs::FW_CMD_ACK), 201);
        assert_eq!(cam.i2c.writes.len(), 4);
        assert_eq!(cam.focus_state(), FocusState::Idle);
    }

    #[test]
    fn constant_focus_times_out_in_second_phase() {
        // release is acked at once, then the pending ack written for
        // the focus command is never cleared
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        bus.script_reads(regs::FW_CMD_ACK, &[0x00]);
        let mut cam = sensor(bus);

        let mut delay = CountingDelay::default();
        assert!(matches!(
            cam.focus_constant(&mut delay),
            Err(Error::Timeout)
        ));
        assert_eq!(
            cam.i2c.writes,
            [
                (regs::FW_CMD_ACK, 0x01),
                (regs::FW_CMD_MAIN, 0x08),
                (regs::FW_CMD_ACK, 0x01),
                (regs::FW_CMD_MAIN, 0x04),
            ]
        );
        assert_eq!(cam.i2c.read_count(regs::FW_CMD_ACK), 1 + 200);
        assert_eq!(delay.total_ms, 199 * 5);
        assert_eq!(cam.focus_state(), FocusState::Continuous);
    }

    #[test]
    fn non_blocking_single() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        bus.script_reads(regs::FW_STATUS, &[0x00, 0x10]);
        let mut cam = sensor(bus);

        cam.focus_send_single().unwrap();
        assert_eq!(cam.focus_state(), FocusState::SingleShot);
        assert!(!cam.focus_read_single().unwrap());
        assert!(cam.focus_read_single().unwrap());
        assert_eq!(cam.focus_state(), FocusState::Idle);
    }

    #[test]
    fn non_blocking_constant() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        bus.script_reads(regs::FW_CMD_ACK, &[0x01, 0x00]);
        let mut cam = sensor(bus);

        cam.focus_send_constant_idle().unwrap();
        assert_eq!(cam.focus_state(), FocusState::Continuous);
        assert!(!cam.focus_read_constant().unwrap());
        assert!(cam.focus_read_constant().unwrap());
        cam.focus_send_constant_focus().unwrap();
        assert_eq!(cam.focus_state(), FocusState::Continuous);
    }

    #[test]
    fn upload_failure_propagates() {
        let mut cam =
            sensor(FakeSccb::new(DEFAULT_I2C_ADDRESS).fail_writes_after(100));
        assert!(matches!(
            cam.focus_init(&mut CountingDelay::default()),
            Err(Error::Comm(_))
        ));
        assert!(cam.i2c.reads.is_empty());
    }

    #[test]
    fn poll_read_failure_propagates() {
        let mut cam = sensor(FakeSccb::new(DEFAULT_I2C_ADDRESS).fail_reads());
        assert!(matches!(
            cam.focus_single(&mut CountingDelay::default()),
            Err(Error::Comm(_))
        ));
    }
}
