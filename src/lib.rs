/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/
#![cfg_attr(not(test), no_std)]

//! Configuration driver for the OmniVision OV5640 image sensor
//! This imaging sensor has multiple interfaces:
//! - Two-wire SCCB (i2c compatible) for configuration registers
//! - parallel pixel data out (DVP) or MIPI CSI-2 serial out
//! - pixel out sync (vsync, href, pix clock)
//! This driver is concerned only with the SCCB interface

#[cfg(feature = "rttdebug")]
use panic_rtt_core::rprintln;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Read, Write};

pub mod config;
pub mod firmware;
mod focus;
pub mod regs;
mod tables;
mod tuning;

#[cfg(test)]
mod test_bus;

pub use config::*;
pub use focus::FocusState;
pub use tuning::TuningCodes;

/// Errors in this crate
#[derive(Debug)]
pub enum Error<CommE> {
    /// Sensor communication error
    Comm(CommE),

    /// The sensor did not respond in a timely manner
    Timeout,

    /// Resolution or pixel format not available on this init path
    UnsupportedConfig,

    /// Argument outside the range the sensor accepts
    InvalidArgument,

    /// Output size registers match none of the known resolutions
    UnknownResolution,

    /// The sensor has no readback for this setting
    NotImplemented,

    /// Unrecognized chip ID
    UnknownChipId,
}

/// 7-bit SCCB address (0x78 >> 1)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Value of the chip ID registers
pub const CHIP_ID: u16 = 0x5640;

// Active array: 2592 H x 1944 V
pub const MAX_FRAME_WIDTH: u16 = 2592;
pub const MAX_FRAME_HEIGHT: u16 = 1944;

/// Last addressable column / row of the array, including dummy pixels
const ARRAY_X_END: u16 = 0x0A3F;
const ARRAY_Y_END: u16 = 0x079F;

/// Settling time after each pixel format register write
const FORMAT_SETTLE_MS: u32 = 1;
/// Settling time after a software reset
const RESET_SETTLE_MS: u32 = 500;

/// Main driver struct
pub struct Ov5640<I2C> {
    base_address: u8,
    i2c: I2C,
    interface: Interface,
    initialized: bool,
    tuning: TuningCodes,
    focus: FocusState,
}

impl<I2C, CommE> Ov5640<I2C>
where
    I2C: Write<Error = CommE> + Read<Error = CommE>,
{
    /// Create a new instance with an i2c address:
    /// May use DEFAULT_I2C_ADDRESS if in doubt.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            base_address: address,
            i2c,
            interface: Interface::Parallel,
            initialized: false,
            tuning: TuningCodes::default(),
            focus: FocusState::Uninitialized,
        }
    }

    pub fn default(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Give back the bus, consuming the driver
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// True once `init` or `init_general` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn interface(&self) -> Interface {
        self.interface
    }

    /// Select the output interface configured by the next `init`.
    pub fn set_interface(
        &mut self,
        interface: Interface,
    ) -> Result<(), crate::Error<CommE>> {
        if let Interface::Serial { virtual_channel } = interface {
            if virtual_channel > MAX_VIRTUAL_CHANNEL {
                return Err(Error::InvalidArgument);
            }
        }
        self.interface = interface;
        Ok(())
    }

    /// Bring up the sensor: common settings, output interface,
    /// resolution, pixel format, and active-high sync polarities.
    /// Does nothing if the sensor is already initialized.
    pub fn init(
        &mut self,
        resolution: Resolution,
        format: PixelFormat,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        if self.initialized {
            return Ok(());
        }

        #[cfg(feature = "rttdebug")]
        rprintln!("ov5640-i2c init start");

        self.write_table(tables::COMMON)?;

        match self.interface {
            Interface::Serial { virtual_channel } => {
                self.enable_mipi_mode()?;
                self.set_mipi_virtual_channel(virtual_channel)?;
            }
            Interface::Parallel => self.enable_dvp_mode()?,
        }

        self.set_resolution(resolution)?;
        self.set_pixel_format(format, delay)?;
        self.set_polarities(
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
        )?;
        self.initialized = true;

        #[cfg(feature = "rttdebug")]
        rprintln!("ov5640-i2c init done");
        Ok(())
    }

    /// Full-array init path, supporting output sizes up to 5MP.
    /// Only RGB565 and JPEG are available here. Also uploads the
    /// autofocus firmware.
    pub fn init_general(
        &mut self,
        size: OutputSize,
        format: PixelFormat,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        if self.initialized {
            return Ok(());
        }
        let mode = match format {
            PixelFormat::Rgb565 => tables::GENERAL_RGB565,
            PixelFormat::Jpeg => tables::GENERAL_JPEG,
            _ => return Err(Error::UnsupportedConfig),
        };

        self.write_table(tables::GENERAL_BASE)?;
        self.write_table(mode)?;
        let (width, height) = size.dimensions();
        self.set_output_size(4, 0, width, height)?;
        self.set_polarities(
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
        )?;
        self.focus_init(delay)?;
        self.initialized = true;
        Ok(())
    }

    /// Marks the sensor uninitialized. The hardware is not reset.
    pub fn de_init(&mut self) {
        self.initialized = false;
    }

    /// Switch the full-array configuration to JPEG output
    pub fn jpeg_mode(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_table(tables::GENERAL_JPEG)
    }

    /// Switch the full-array configuration to RGB565 output
    pub fn rgb565_mode(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_table(tables::GENERAL_RGB565)
    }

    /// Write the window, scaling and timing table for `resolution`
    pub fn set_resolution(
        &mut self,
        resolution: Resolution,
    ) -> Result<(), crate::Error<CommE>> {
        let table = match resolution {
            Resolution::R160x120 => tables::QQVGA_160X120,
            Resolution::R320x240 => tables::QVGA_320X240,
            Resolution::R480x272 => tables::WQVGA_480X272,
            Resolution::R640x480 => tables::VGA_640X480,
            Resolution::R800x480 => tables::WVGA_800X480,
        };
        self.write_table(table)
    }

    /// Read back the DVP output size and match it against the known resolutions
    pub fn get_resolution(
        &mut self,
    ) -> Result<Resolution, crate::Error<CommE>> {
        let width = self.read_reg_u16(regs::TIMING_DVPHO_HIGH)?;
        let height = self.read_reg_u16(regs::TIMING_DVPVO_HIGH)?;
        Resolution::from_dimensions(width, height)
            .ok_or(Error::UnknownResolution)
    }

    pub fn set_pixel_format(
        &mut self,
        format: PixelFormat,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        let table = match format {
            PixelFormat::Rgb565 => tables::PF_RGB565,
            PixelFormat::Yuv422 => tables::PF_YUV422,
            PixelFormat::Rgb888 => tables::PF_RGB888,
            PixelFormat::Y8 => tables::PF_Y8,
            PixelFormat::Jpeg => tables::PF_JPEG,
        };
        for &(reg, val) in table {
            self.write_reg_u8(reg, val)?;
            delay.delay_ms(FORMAT_SETTLE_MS);
        }

        if format == PixelFormat::Jpeg {
            // compression enable
            self.modify_reg(regs::TIMING_TC_REG21, |v| v | (1 << 5))?;
            // take JFIFO, SFIFO and JPG out of reset
            self.modify_reg(regs::SYSTEM_RESET02, |v| {
                v & !((1 << 4) | (1 << 3) | (1 << 2))
            })?;
            // JPEG 2x and JPEG clocks
            self.modify_reg(regs::CLOCK_ENABLE02, |v| v | (1 << 5) | (1 << 3))?;
        }
        Ok(())
    }

    /// The output format cannot be read back from the sensor
    pub fn get_pixel_format(
        &mut self,
    ) -> Result<PixelFormat, crate::Error<CommE>> {
        Err(Error::NotImplemented)
    }

    /// Set the active levels of the sync outputs.
    /// All active high writes 0x22.
    pub fn set_polarities(
        &mut self,
        pclk: Polarity,
        href: Polarity,
        vsync: Polarity,
    ) -> Result<(), crate::Error<CommE>> {
        let val = (pclk.bit() << 5) | (href.bit() << 1) | vsync.vsync_bit();
        self.write_reg_u8(regs::POLARITY_CTRL, val)
    }

    /// Returns (pclk, href, vsync) polarities
    pub fn get_polarities(
        &mut self,
    ) -> Result<(Polarity, Polarity, Polarity), crate::Error<CommE>> {
        let val = self.read_reg_u8(regs::POLARITY_CTRL)?;
        Ok((
            Polarity::from_bit(val, 5),
            Polarity::from_bit(val, 1),
            Polarity::from_vsync_bit(val),
        ))
    }

    /// Soft-reset the sensor and read its 16-bit chip ID
    pub fn read_id(
        &mut self,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<u16, crate::Error<CommE>> {
        self.write_reg_u8(regs::SYSTEM_CTRL0, 0x80)?;
        delay.delay_ms(RESET_SETTLE_MS);
        let id = self.read_reg_u16(regs::CHIP_ID_HIGH_BYTE)?;

        #[cfg(feature = "rttdebug")]
        rprintln!("ov5640-i2c chip id 0x{:x}", id);
        Ok(id)
    }

    /// Verify that an OV5640 answers at the configured address
    pub fn probe(
        &mut self,
        delay: &mut impl DelayMs<u32>,
    ) -> Result<(), crate::Error<CommE>> {
        if self.read_id(delay)? != CHIP_ID {
            return Err(Error::UnknownChipId);
        }
        Ok(())
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::OV5640
    }

    /// Parallel data output on the DVP pads
    pub fn enable_dvp_mode(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_table(tables::DVP_MODE)
    }

    pub fn disable_pad_output(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_table(tables::PAD_OUTPUT_DISABLE)
    }

    /// Serial data output on the MIPI lanes
    pub fn enable_mipi_mode(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_table(tables::MIPI_MODE)
    }

    pub fn set_mipi_virtual_channel(
        &mut self,
        virtual_channel: u8,
    ) -> Result<(), crate::Error<CommE>> {
        if virtual_channel > MAX_VIRTUAL_CHANNEL {
            return Err(Error::InvalidArgument);
        }
        self.modify_reg(regs::MIPI_CTRL14, |v| {
            (v & !(0b11 << 6)) | (virtual_channel << 6)
        })
    }

    /// Wake from software power down and start streaming
    pub fn start(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::SYSTEM_CTRL0, 0x02)
    }

    /// Enter software power down
    pub fn stop(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::SYSTEM_CTRL0, 0x42)
    }

    /// Set the pixel clock PLL, assuming a 24MHz input clock
    pub fn set_pclk(
        &mut self,
        clock: PixelClock,
    ) -> Result<(), crate::Error<CommE>> {
        let (multiplier, dividers) = clock.pll_settings();
        self.write_reg_u8(regs::SC_PLL_CONTRL2, multiplier)?;
        self.write_reg_u8(regs::SC_PLL_CONTRL3, dividers)
    }

    /// Set the scaled output size and the ISP offsets within the input window
    pub fn set_output_size(
        &mut self,
        offset_x: u16,
        offset_y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), crate::Error<CommE>> {
        if width == 0
            || height == 0
            || width > MAX_FRAME_WIDTH
            || height > MAX_FRAME_HEIGHT
        {
            return Err(Error::InvalidArgument);
        }

        self.start_group()?;
        self.write_reg_u16(regs::TIMING_DVPHO_HIGH, width)?;
        self.write_reg_u16(regs::TIMING_DVPVO_HIGH, height)?;
        self.write_reg_u16(regs::TIMING_HOFFSET_HIGH, offset_x)?;
        self.write_reg_u16(regs::TIMING_VOFFSET_HIGH, offset_y)?;
        self.use_group()
    }

    /// Set the input (cropping) window on the pixel array
    pub fn set_image_window(
        &mut self,
        offset_x: u16,
        offset_y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), crate::Error<CommE>> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument);
        }
        let x_end = match offset_x.checked_add(width - 1) {
            Some(end) if end <= ARRAY_X_END => end,
            _ => return Err(Error::InvalidArgument),
        };
        let y_end = match offset_y.checked_add(height - 1) {
            Some(end) if end <= ARRAY_Y_END => end,
            _ => return Err(Error::InvalidArgument),
        };

        self.start_group()?;
        self.write_reg_u16(regs::TIMING_HS_HIGH, offset_x)?;
        self.write_reg_u16(regs::TIMING_VS_HIGH, offset_y)?;
        self.write_reg_u16(regs::TIMING_HW_HIGH, x_end)?;
        self.write_reg_u16(regs::TIMING_VH_HIGH, y_end)?;
        self.use_group()
    }

    /// Begin holding register writes in group 3
    pub fn start_group(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::GROUP_ACCESS, 0x03)
    }

    /// End the group 3 hold and launch it
    pub fn use_group(&mut self) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::GROUP_ACCESS, 0x13)?;
        self.write_reg_u8(regs::GROUP_ACCESS, 0xA3)
    }

    /// Read a u8 from a 16-bit address
    pub fn read_reg_u8(&mut self, reg: u16) -> Result<u8, crate::Error<CommE>> {
        // SCCB has no repeated start: address phase and read are separate
        let cmd_buf = reg.to_be_bytes();
        let mut recv_buf = [0u8];
        self.i2c
            .write(self.base_address, &cmd_buf)
            .map_err(Error::Comm)?;
        self.i2c
            .read(self.base_address, &mut recv_buf)
            .map_err(Error::Comm)?;

        Ok(recv_buf[0])
    }

    /// Read a big-endian u16 spread over `reg` and `reg + 1`
    pub fn read_reg_u16(
        &mut self,
        reg: u16,
    ) -> Result<u16, crate::Error<CommE>> {
        let upper = (self.read_reg_u8(reg)? as u16) << 8;
        let lower = self.read_reg_u8(reg + 1)? as u16;
        Ok(upper | lower)
    }

    /// Write a u8 to a 16-bit address
    pub fn write_reg_u8(
        &mut self,
        reg: u16,
        val: u8,
    ) -> Result<(), crate::Error<CommE>> {
        let [reg_hi, reg_lo] = reg.to_be_bytes();
        let write_buf = [reg_hi, reg_lo, val];
        self.i2c
            .write(self.base_address, &write_buf)
            .map_err(Error::Comm)?;
        Ok(())
    }

    /// Write a u16 to `reg` (upper byte) and `reg + 1` (lower byte)
    pub fn write_reg_u16(
        &mut self,
        reg: u16,
        data: u16,
    ) -> Result<(), crate::Error<CommE>> {
        // write upper u8
        self.write_reg_u8(reg, (data >> 8) as u8)?;
        // write lower u8
        self.write_reg_u8(reg + 1, (data & 0xFF) as u8)?;
        Ok(())
    }

    /// Read, transform and write back a single register
    fn modify_reg<F>(
        &mut self,
        reg: u16,
        f: F,
    ) -> Result<(), crate::Error<CommE>>
    where
        F: FnOnce(u8) -> u8,
    {
        let val = self.read_reg_u8(reg)?;
        self.write_reg_u8(reg, f(val))
    }

    /// Apply a register table in order, stopping at the first failed write
    fn write_table(
        &mut self,
        table: &[(u16, u8)],
    ) -> Result<(), crate::Error<CommE>> {
        for &(reg, val) in table {
            self.write_reg_u8(reg, val)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_bus::{CountingDelay, FakeSccb};

    fn sensor() -> Ov5640<FakeSccb> {
        Ov5640::default(FakeSccb::new(DEFAULT_I2C_ADDRESS))
    }

    #[test]
    fn init_then_get_resolution_round_trips() {
        for format in PixelFormat::ALL.iter() {
            for res in Resolution::ALL.iter() {
                let mut cam = sensor();
                cam.init(*res, *format, &mut CountingDelay::default()).unwrap();
                assert!(cam.is_initialized());
                assert_eq!(cam.get_resolution().unwrap(), *res);
            }
        }
    }

    #[test]
    fn second_init_is_silent() {
        let mut cam = sensor();
        let mut delay = CountingDelay::default();
        cam.init(Resolution::R640x480, PixelFormat::Rgb565, &mut delay)
            .unwrap();
        let first = cam.i2c.writes.len();
        assert!(first > tables::COMMON.len());

        cam.init(Resolution::R160x120, PixelFormat::Jpeg, &mut delay)
            .unwrap();
        assert_eq!(cam.i2c.writes.len(), first);
        assert!(cam.i2c.reads.is_empty());
    }

    #[test]
    fn de_init_allows_reinit() {
        let mut cam = sensor();
        let mut delay = CountingDelay::default();
        cam.init(Resolution::R640x480, PixelFormat::Rgb565, &mut delay)
            .unwrap();
        cam.de_init();
        assert!(!cam.is_initialized());
        let before = cam.i2c.writes.len();
        cam.init(Resolution::R320x240, PixelFormat::Yuv422, &mut delay)
            .unwrap();
        assert!(cam.i2c.writes.len() > before);
        assert_eq!(cam.get_resolution().unwrap(), Resolution::R320x240);
    }

    #[test]
    fn init_applies_common_table_first_and_polarity_last() {
        let mut cam = sensor();
        cam.init(
            Resolution::R800x480,
            PixelFormat::Yuv422,
            &mut CountingDelay::default(),
        )
        .unwrap();
        let writes = &cam.i2c.writes;
        assert_eq!(&writes[..tables::COMMON.len()], tables::COMMON);
        assert_eq!(*writes.last().unwrap(), (regs::POLARITY_CTRL, 0x22));
    }

    #[test]
    fn parallel_init_enables_dvp_pads() {
        let mut cam = sensor();
        cam.init(
            Resolution::R320x240,
            PixelFormat::Rgb565,
            &mut CountingDelay::default(),
        )
        .unwrap();
        let start = tables::COMMON.len();
        let end = start + tables::DVP_MODE.len();
        assert_eq!(&cam.i2c.writes[start..end], tables::DVP_MODE);
        assert_eq!(cam.i2c.reg(regs::PAD_OUTPUT_ENABLE01), 0xFF);
    }

    #[test]
    fn serial_init_sets_virtual_channel() {
        let mut cam = sensor();
        cam.set_interface(Interface::Serial { virtual_channel: 2 })
            .unwrap();
        cam.init(
            Resolution::R640x480,
            PixelFormat::Yuv422,
            &mut CountingDelay::default(),
        )
        .unwrap();
        assert_eq!(cam.i2c.reg(regs::MIPI_CONTROL00), 0x45);
        // 0x2A from the MIPI table with channel bits replaced
        assert_eq!(cam.i2c.reg(regs::MIPI_CTRL14), 0xAA);
    }

    #[test]
    fn invalid_virtual_channel_is_rejected() {
        let mut cam = sensor();
        assert!(matches!(
            cam.set_interface(Interface::Serial { virtual_channel: 4 }),
            Err(Error::InvalidArgument)
        ));
        assert_eq!(cam.interface(), Interface::Parallel);
        assert!(matches!(
            cam.set_mipi_virtual_channel(7),
            Err(Error::InvalidArgument)
        ));
        assert!(cam.i2c.writes.is_empty());
        assert!(cam.i2c.reads.is_empty());
    }

    #[test]
    fn failed_write_aborts_init() {
        let mut cam = Ov5640::default(
            FakeSccb::new(DEFAULT_I2C_ADDRESS).fail_writes_after(10),
        );
        let rc = cam.init(
            Resolution::R640x480,
            PixelFormat::Rgb565,
            &mut CountingDelay::default(),
        );
        assert!(matches!(rc, Err(Error::Comm(_))));
        assert!(!cam.is_initialized());
        assert_eq!(cam.i2c.writes.len(), 10);
    }

    #[test]
    fn jpeg_format_patches_compression_clocks() {
        let mut cam = Ov5640::default(
            FakeSccb::new(DEFAULT_I2C_ADDRESS)
                .with_reg(regs::TIMING_TC_REG21, 0x01)
                .with_reg(regs::SYSTEM_RESET02, 0xFF)
                .with_reg(regs::CLOCK_ENABLE02, 0xC3),
        );
        let mut delay = CountingDelay::default();
        cam.set_pixel_format(PixelFormat::Jpeg, &mut delay).unwrap();
        assert_eq!(cam.i2c.reg(regs::TIMING_TC_REG21), 0x21);
        assert_eq!(cam.i2c.reg(regs::SYSTEM_RESET02), 0xE3);
        assert_eq!(cam.i2c.reg(regs::CLOCK_ENABLE02), 0xEB);
        // one settle delay per table entry
        assert_eq!(delay.calls, tables::PF_JPEG.len());
    }

    #[test]
    fn non_jpeg_format_skips_patches() {
        let mut cam = sensor();
        cam.set_pixel_format(PixelFormat::Y8, &mut CountingDelay::default())
            .unwrap();
        assert_eq!(cam.i2c.writes, tables::PF_Y8);
        assert!(cam.i2c.reads.is_empty());
    }

    #[test]
    fn pixel_format_cannot_be_read_back() {
        let mut cam = sensor();
        assert!(matches!(cam.get_pixel_format(), Err(Error::NotImplemented)));
    }

    #[test]
    fn unknown_output_size_is_reported() {
        let mut cam = sensor();
        cam.write_reg_u16(regs::TIMING_DVPHO_HIGH, 1024).unwrap();
        cam.write_reg_u16(regs::TIMING_DVPVO_HIGH, 768).unwrap();
        assert!(matches!(cam.get_resolution(), Err(Error::UnknownResolution)));
    }

    #[test]
    fn polarities_round_trip() {
        let mut cam = sensor();
        cam.set_polarities(
            Polarity::ActiveHigh,
            Polarity::ActiveLow,
            Polarity::ActiveHigh,
        )
        .unwrap();
        assert_eq!(cam.i2c.reg(regs::POLARITY_CTRL), 0x20);
        assert_eq!(
            cam.get_polarities().unwrap(),
            (Polarity::ActiveHigh, Polarity::ActiveLow, Polarity::ActiveHigh)
        );

        cam.set_polarities(
            Polarity::ActiveLow,
            Polarity::ActiveLow,
            Polarity::ActiveLow,
        )
        .unwrap();
        assert_eq!(cam.i2c.reg(regs::POLARITY_CTRL), 0x01);
        assert_eq!(
            cam.get_polarities().unwrap(),
            (Polarity::ActiveLow, Polarity::ActiveLow, Polarity::ActiveLow)
        );
    }

    #[test]
    fn default_init_keeps_vendor_sync_polarity() {
        let mut cam = sensor();
        cam.init(
            Resolution::R640x480,
            PixelFormat::Rgb565,
            &mut CountingDelay::default(),
        )
        .unwrap();
        let polarity_writes: Vec<_> = cam
            .i2c
            .writes
            .iter()
            .filter(|(reg, _)| *reg == regs::POLARITY_CTRL)
            .collect();
        assert_eq!(
            polarity_writes,
            [&(regs::POLARITY_CTRL, 0x22), &(regs::POLARITY_CTRL, 0x22)]
        );
        assert_eq!(
            cam.get_polarities().unwrap(),
            (Polarity::ActiveHigh, Polarity::ActiveHigh, Polarity::ActiveHigh)
        );
    }

    #[test]
    fn chip_id_concatenates_high_and_low() {
        let mut cam = Ov5640::default(
            FakeSccb::new(DEFAULT_I2C_ADDRESS)
                .with_reg(regs::CHIP_ID_HIGH_BYTE, 0x56)
                .with_reg(regs::CHIP_ID_LOW_BYTE, 0x40),
        );
        let mut delay = CountingDelay::default();
        assert_eq!(cam.read_id(&mut delay).unwrap(), 0x5640);
        assert_eq!(cam.i2c.writes[0], (regs::SYSTEM_CTRL0, 0x80));
        assert_eq!(delay.total_ms, 500);
        cam.probe(&mut delay).unwrap();
    }

    #[test]
    fn chip_check_rejects_other_sensors() {
        let mut cam = Ov5640::default(
            FakeSccb::new(DEFAULT_I2C_ADDRESS)
                .with_reg(regs::CHIP_ID_HIGH_BYTE, 0x26)
                .with_reg(regs::CHIP_ID_LOW_BYTE, 0x42),
        );
        assert!(matches!(
            cam.probe(&mut CountingDelay::default()),
            Err(Error::UnknownChipId)
        ));
    }

    #[test]
    fn chip_id_read_failure_is_a_bus_error() {
        let mut cam =
            Ov5640::default(FakeSccb::new(DEFAULT_I2C_ADDRESS).fail_reads());
        assert!(matches!(
            cam.read_id(&mut CountingDelay::default()),
            Err(Error::Comm(_))
        ));
    }

    #[test]
    fn capabilities_are_all_enabled() {
        let cam = sensor();
        let caps = cam.capabilities();
        assert!(caps.brightness && caps.contrast);
        assert!(caps.saturation && caps.hue_degree);
        assert!(caps.light_mode && caps.special_effect && caps.mirror_flip);
        assert!(caps.zoom && caps.night_mode && caps.resolution);
    }

    #[test]
    fn output_size_is_group_held() {
        let mut cam = sensor();
        cam.set_output_size(4, 0, 1280, 800).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [
                (regs::GROUP_ACCESS, 0x03),
                (regs::TIMING_DVPHO_HIGH, 0x05),
                (regs::TIMING_DVPHO_LOW, 0x00),
                (regs::TIMING_DVPVO_HIGH, 0x03),
                (regs::TIMING_DVPVO_LOW, 0x20),
                (regs::TIMING_HOFFSET_HIGH, 0x00),
                (regs::TIMING_HOFFSET_LOW, 0x04),
                (regs::TIMING_VOFFSET_HIGH, 0x00),
                (regs::TIMING_VOFFSET_LOW, 0x00),
                (regs::GROUP_ACCESS, 0x13),
                (regs::GROUP_ACCESS, 0xA3),
            ]
        );
    }

    #[test]
    fn image_window_writes_inclusive_end() {
        let mut cam = sensor();
        cam.set_image_window(16, 4, 640, 480).unwrap();
        assert_eq!(cam.i2c.reg(regs::TIMING_HW_HIGH), 0x02);
        assert_eq!(cam.i2c.reg(regs::TIMING_HW_LOW), 0x8F);
        assert_eq!(cam.i2c.reg(regs::TIMING_VH_HIGH), 0x01);
        assert_eq!(cam.i2c.reg(regs::TIMING_VH_LOW), 0xE3);
    }

    #[test]
    fn windows_outside_the_array_are_rejected() {
        let mut cam = sensor();
        assert!(matches!(
            cam.set_image_window(100, 0, 2592, 100),
            Err(Error::InvalidArgument)
        ));
        assert!(matches!(
            cam.set_image_window(0, 0, 0, 100),
            Err(Error::InvalidArgument)
        ));
        assert!(matches!(
            cam.set_output_size(0, 0, 3000, 100),
            Err(Error::InvalidArgument)
        ));
        assert!(cam.i2c.writes.is_empty());
    }

    #[test]
    fn general_init_rejects_unsupported_formats() {
        let mut cam = sensor();
        assert!(matches!(
            cam.init_general(
                OutputSize::Uxga,
                PixelFormat::Yuv422,
                &mut CountingDelay::default()
            ),
            Err(Error::UnsupportedConfig)
        ));
        assert!(cam.i2c.writes.is_empty());
    }

    #[test]
    fn general_init_sets_output_size_and_uploads_focus_firmware() {
        let mut bus = FakeSccb::new(DEFAULT_I2C_ADDRESS);
        bus.script_reads(regs::FW_STATUS, &[0x7F, 0x70]);
        let mut cam = Ov5640::default(bus);
        cam.init_general(
            OutputSize::Sxga,
            PixelFormat::Jpeg,
            &mut CountingDelay::default(),
        )
        .unwrap();
        assert!(cam.is_initialized());
        assert_eq!(cam.i2c.reg(regs::JPEG_CTRL07), 0x01);
        assert_eq!(cam.read_reg_u16(regs::TIMING_DVPHO_HIGH).unwrap(), 1280);
        assert_eq!(cam.read_reg_u16(regs::TIMING_DVPVO_HIGH).unwrap(), 1024);
        assert_eq!(cam.focus_state(), FocusState::Idle);
    }

    #[test]
    fn pclk_presets() {
        let mut cam = sensor();
        cam.set_pclk(PixelClock::Mhz48).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [(regs::SC_PLL_CONTRL2, 0x60), (regs::SC_PLL_CONTRL3, 0x03)]
        );
    }

    #[test]
    fn pclk_stops_at_first_failure() {
        let mut cam = Ov5640::default(
            FakeSccb::new(DEFAULT_I2C_ADDRESS).fail_writes_after(0),
        );
        assert!(matches!(cam.set_pclk(PixelClock::Mhz7), Err(Error::Comm(_))));
        assert_eq!(cam.i2c.write_attempts, 1);
    }

    #[test]
    fn start_and_stop_toggle_power_down() {
        let mut cam = sensor();
        cam.stop().unwrap();
        cam.start().unwrap();
        assert_eq!(
            cam.i2c.writes,
            [(regs::SYSTEM_CTRL0, 0x42), (regs::SYSTEM_CTRL0, 0x02)]
        );
    }

    #[test]
    fn release_returns_the_bus() {
        let cam = sensor();
        let bus = cam.release();
        assert!(bus.writes.is_empty());
    }
}
