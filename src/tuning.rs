/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Image tuning through the special digital effects (SDE) block,
//! white balance, scaler, and the procedural preset path.

use embedded_hal::blocking::i2c::{Read, Write};

use crate::config::{
    ColorEffect, ColorbarMode, LightMode, MirrorFlip, Resolution, SyncCodes,
    Zoom,
};
use crate::{regs, tables, Error, Ov5640};

/// Per-axis sign/enable bits OR-ed into `SDE_CTRL8`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TuningCodes {
    pub brightness: u8,
    pub saturation: u8,
    pub contrast: u8,
    pub hue: u8,
}

impl Default for TuningCodes {
    fn default() -> Self {
        Self {
            brightness: 0x01,
            saturation: 0x41,
            contrast: 0x41,
            hue: 0x32,
        }
    }
}

impl TuningCodes {
    fn composite(&self) -> u8 {
        self.contrast | self.brightness | self.hue | self.saturation
    }
}

/// Levels accepted by brightness, saturation and contrast
const LEVEL_MIN: i8 = -4;
const LEVEL_MAX: i8 = 4;
/// Hue steps of 30 degrees
const HUE_MIN: i8 = -6;
const HUE_MAX: i8 = 5;
/// Highest index into the procedural preset tables
const PRESET_MAX: u8 = 6;
/// Sharpness values at or above this select automatic sharpening
const SHARPNESS_AUTO_THRESHOLD: u8 = 33;

/// ISP control 01 with every block enabled, SDE included
const ISP_ALL_ENABLED: u8 = 0xFF;
/// SDE_CTRL0 with hue, saturation and contrast/brightness enabled
const SDE_TUNING_ENABLED: u8 = 0x07;

impl<I2C, CommE> Ov5640<I2C>
where
    I2C: Write<Error = CommE> + Read<Error = CommE>,
{
    pub fn tuning_codes(&self) -> TuningCodes {
        self.tuning
    }

    /// Brightness level in -4..=4
    pub fn set_brightness(
        &mut self,
        level: i8,
    ) -> Result<(), crate::Error<CommE>> {
        let idx = Self::level_index(level, LEVEL_MIN, LEVEL_MAX)?;
        self.write_reg_u8(regs::ISP_CONTROL01, ISP_ALL_ENABLED)?;
        self.write_reg_u8(regs::SDE_CTRL7, tables::BRIGHTNESS_LEVELS[idx])?;
        self.write_reg_u8(regs::SDE_CTRL0, SDE_TUNING_ENABLED)?;
        // bit 3 is the Y offset sign: set for brighter
        self.tuning.brightness = if level < 0 { 0x01 } else { 0x09 };
        self.write_tuning_composite()
    }

    /// Colour saturation level in -4..=4
    pub fn set_saturation(
        &mut self,
        level: i8,
    ) -> Result<(), crate::Error<CommE>> {
        let idx = Self::level_index(level, LEVEL_MIN, LEVEL_MAX)?;
        let val = tables::SATURATION_LEVELS[idx];
        self.write_reg_u8(regs::ISP_CONTROL01, ISP_ALL_ENABLED)?;
        self.write_reg_u8(regs::SDE_CTRL3, val)?;
        self.write_reg_u8(regs::SDE_CTRL4, val)?;
        self.write_reg_u8(regs::SDE_CTRL0, SDE_TUNING_ENABLED)?;
        self.tuning.saturation = 0x41;
        self.write_tuning_composite()
    }

    /// Contrast level in -4..=4
    pub fn set_contrast(
        &mut self,
        level: i8,
    ) -> Result<(), crate::Error<CommE>> {
        let idx = Self::level_index(level, LEVEL_MIN, LEVEL_MAX)?;
        let val = tables::CONTRAST_LEVELS[idx];
        self.write_reg_u8(regs::ISP_CONTROL01, ISP_ALL_ENABLED)?;
        self.write_reg_u8(regs::SDE_CTRL0, SDE_TUNING_ENABLED)?;
        self.write_reg_u8(regs::SDE_CTRL6, val)?;
        self.write_reg_u8(regs::SDE_CTRL5, val)?;
        self.tuning.contrast = 0x41;
        self.write_tuning_composite()
    }

    /// Hue rotation in 30 degree steps, -6..=5 (-180 to +150 degrees)
    pub fn set_hue_degree(
        &mut self,
        degree: i8,
    ) -> Result<(), crate::Error<CommE>> {
        let idx = Self::level_index(degree, HUE_MIN, HUE_MAX)?;
        self.write_reg_u8(regs::ISP_CONTROL01, ISP_ALL_ENABLED)?;
        self.write_reg_u8(regs::SDE_CTRL0, SDE_TUNING_ENABLED)?;
        self.write_reg_u8(regs::SDE_CTRL1, tables::HUE_COS[idx])?;
        self.write_reg_u8(regs::SDE_CTRL2, tables::HUE_SIN[idx])?;
        self.tuning.hue = tables::HUE_SIGNS[idx];
        self.write_tuning_composite()
    }

    /// Map a signed level onto a lookup table index
    fn level_index(
        level: i8,
        min: i8,
        max: i8,
    ) -> Result<usize, crate::Error<CommE>> {
        if level < min || level > max {
            return Err(Error::InvalidArgument);
        }
        Ok((level - min) as usize)
    }

    fn write_tuning_composite(&mut self) -> Result<(), crate::Error<CommE>> {
        let composite = self.tuning.composite();
        self.write_reg_u8(regs::SDE_CTRL8, composite)
    }

    pub fn set_light_mode(
        &mut self,
        mode: LightMode,
    ) -> Result<(), crate::Error<CommE>> {
        self.write_table(tables::AWB_DEFAULTS)?;
        let table = match mode {
            LightMode::Auto => tables::LIGHT_AUTO,
            LightMode::Sunny => tables::LIGHT_SUNNY,
            LightMode::Office => tables::LIGHT_OFFICE,
            LightMode::Cloudy => tables::LIGHT_CLOUDY,
            LightMode::Home => tables::LIGHT_HOME,
        };
        self.write_table(table)
    }

    pub fn set_color_effect(
        &mut self,
        effect: ColorEffect,
    ) -> Result<(), crate::Error<CommE>> {
        // (SDE_CTRL0, fixed U, fixed V)
        let (sde, fixed_uv) = match effect {
            ColorEffect::None => {
                self.write_reg_u8(regs::ISP_CONTROL01, 0x7F)?;
                return self.write_reg_u8(regs::SDE_CTRL0, 0x07);
            }
            ColorEffect::Negative => (0x47, None),
            ColorEffect::Blue => (0x1F, Some((0xA0, 0x40))),
            ColorEffect::Red => (0x1F, Some((0x80, 0xC0))),
            ColorEffect::Green => (0x18, Some((0x60, 0x60))),
            ColorEffect::BlackWhite => (0x1F, Some((0x80, 0x80))),
            ColorEffect::Sepia => (0x1F, Some((0x40, 0xA0))),
        };

        self.write_reg_u8(regs::ISP_CONTROL01, ISP_ALL_ENABLED)?;
        self.write_reg_u8(regs::SDE_CTRL0, sde)?;
        if let Some((u, v)) = fixed_uv {
            self.write_reg_u8(regs::SDE_CTRL3, u)?;
            self.write_reg_u8(regs::SDE_CTRL4, v)?;
        }
        Ok(())
    }

    /// Set vertical flip and horizontal mirror. Only bits 1-2 of each
    /// timing control register are touched.
    pub fn mirror_flip(
        &mut self,
        config: MirrorFlip,
    ) -> Result<(), crate::Error<CommE>> {
        const MASK: u8 = 0xF9;
        const ENABLE: u8 = 0x06;

        let mut reg20 = self.read_reg_u8(regs::TIMING_TC_REG20)? & MASK;
        let mut reg21 = self.read_reg_u8(regs::TIMING_TC_REG21)? & MASK;
        if config.flips() {
            reg20 |= ENABLE;
        }
        if config.mirrors() {
            reg21 |= ENABLE;
        }
        self.write_reg_u8(regs::TIMING_TC_REG20, reg20)?;
        self.write_reg_u8(regs::TIMING_TC_REG21, reg21)
    }

    /// Digital zoom, relative to the current output resolution
    pub fn zoom(&mut self, zoom: Zoom) -> Result<(), crate::Error<CommE>> {
        let resolution = self.get_resolution()?;
        if zoom == Zoom::X1 {
            return self.write_reg_u8(regs::SCALE_CTRL0, 0x10);
        }

        // the scaler works from a fixed base size
        let code = match resolution {
            Resolution::R320x240 | Resolution::R480x272 => (zoom as u8) >> 1,
            Resolution::R640x480 => (zoom as u8) >> 2,
            Resolution::R160x120 | Resolution::R800x480 => zoom as u8,
        };
        self.write_reg_u8(regs::SCALE_CTRL0, 0x00)?;
        self.write_reg_u8(regs::SCALE_CTRL1, code)
    }

    /// Widen the auto exposure range for low light
    pub fn night_mode(
        &mut self,
        enable: bool,
    ) -> Result<(), crate::Error<CommE>> {
        if enable {
            self.write_table(tables::NIGHT_MODE)
        } else {
            // night mode bit
            self.modify_reg(regs::AEC_CTRL00, |v| v & !(1 << 2))
        }
    }

    pub fn colorbar(
        &mut self,
        mode: ColorbarMode,
    ) -> Result<(), crate::Error<CommE>> {
        let (sde4, pattern) = match mode {
            ColorbarMode::Disabled => (0x10, 0x00),
            ColorbarMode::Enabled => (0x40, 0x80),
            ColorbarMode::GradualVertical => (0x40, 0x8C),
        };
        self.write_reg_u8(regs::SDE_CTRL4, sde4)?;
        self.write_reg_u8(regs::PRE_ISP_TEST_SETTING1, pattern)
    }

    /// Enable CCIR-656 output with custom sync codes
    pub fn embedded_sync(
        &mut self,
        codes: SyncCodes,
    ) -> Result<(), crate::Error<CommE>> {
        self.write_reg_u8(regs::CCIR656_CTRL00, 0x83)?;
        self.write_reg_u8(regs::CCIR656_FS, codes.frame_start)?;
        self.write_reg_u8(regs::CCIR656_FE, codes.frame_end)?;
        self.write_reg_u8(regs::CCIR656_LS, codes.line_start)?;
        self.write_reg_u8(regs::CCIR656_LE, codes.line_end)?;
        self.write_reg_u8(regs::CCIR656_DUMMY_LINE, 0x01)?;

        // keep data bytes clear of the sync code values
        self.write_reg_u8(regs::FORMAT_MAX_CLIP_0, 0x02)?;
        self.write_reg_u8(regs::FORMAT_MAX_CLIP_1, 0x02)?;
        self.write_reg_u8(regs::FORMAT_MAX_CLIP_2, 0x02)
    }

    /// Colour matrix saturation preset 0..=6, 3 being neutral
    pub fn color_saturation_preset(
        &mut self,
        level: u8,
    ) -> Result<(), crate::Error<CommE>> {
        if level > PRESET_MAX {
            return Err(Error::InvalidArgument);
        }
        self.start_group()?;
        self.write_reg_u8(regs::CMX1, 0x1C)?;
        self.write_reg_u8(regs::CMX2, 0x5A)?;
        self.write_reg_u8(regs::CMX3, 0x06)?;
        let matrix = &tables::SATURATION_MATRIX[level as usize];
        for (reg, val) in (regs::CMX4..).zip(matrix.iter()) {
            self.write_reg_u8(reg, *val)?;
        }
        self.write_reg_u8(regs::CMXSIGN_LOW, 0x98)?;
        self.write_reg_u8(regs::CMXSIGN_HIGH, 0x01)?;
        self.use_group()
    }

    /// Y offset/gain contrast preset 0..=6, 3 being neutral
    pub fn contrast_preset(
        &mut self,
        level: u8,
    ) -> Result<(), crate::Error<CommE>> {
        if level > PRESET_MAX {
            return Err(Error::InvalidArgument);
        }
        let (offset, gain) = tables::CONTRAST_PRESETS[level as usize];
        self.start_group()?;
        self.write_reg_u8(regs::SDE_CTRL5, offset)?;
        self.write_reg_u8(regs::SDE_CTRL6, gain)?;
        self.use_group()
    }

    /// Manual sharpening below 33, automatic otherwise
    pub fn sharpness(&mut self, value: u8) -> Result<(), crate::Error<CommE>> {
        if value < SHARPNESS_AUTO_THRESHOLD {
            self.write_reg_u8(regs::CIP_CTRL, 0x65)?;
            self.write_reg_u8(regs::CIP_SHARPENMT_OFFSET1, value)
        } else {
            self.write_table(tables::SHARPNESS_AUTO)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_bus::FakeSccb;
    use crate::*;
    use crate::{regs, tables};

    fn sensor() -> Ov5640<FakeSccb> {
        Ov5640::default(FakeSccb::new(DEFAULT_I2C_ADDRESS))
    }

    #[test]
    fn defaults_seed_the_composite() {
        let mut cam = sensor();
        assert_eq!(cam.tuning_codes(), TuningCodes::default());
        cam.set_saturation(0).unwrap();
        // 0x41 | 0x01 | 0x32 | 0x41
        assert_eq!(cam.i2c.reg(regs::SDE_CTRL8), 0x73);
    }

    #[test]
    fn composite_keeps_other_axes() {
        let mut cam = sensor();
        cam.set_brightness(2).unwrap();
        cam.set_saturation(1).unwrap();
        assert_eq!(*cam.i2c.writes.last().unwrap(), (regs::SDE_CTRL8, 0x7B));

        let mut cam = sensor();
        cam.set_brightness(-2).unwrap();
        cam.set_saturation(1).unwrap();
        assert_eq!(*cam.i2c.writes.last().unwrap(), (regs::SDE_CTRL8, 0x73));
    }

    #[test]
    fn composite_includes_the_current_call() {
        let mut cam = sensor();
        cam.set_brightness(3).unwrap();
        assert_eq!(cam.i2c.reg(regs::SDE_CTRL8), 0x7B);
        assert_eq!(cam.tuning_codes().brightness, 0x09);

        cam.set_hue_degree(-3).unwrap();
        // sign bits 0x02 replace the default hue 0x32
        assert_eq!(cam.i2c.reg(regs::SDE_CTRL8), 0x4B);
    }

    #[test]
    fn brightness_write_order() {
        let mut cam = sensor();
        cam.set_brightness(-4).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [
                (regs::ISP_CONTROL01, 0xFF),
                (regs::SDE_CTRL7, 0x40),
                (regs::SDE_CTRL0, 0x07),
                (regs::SDE_CTRL8, 0x73),
            ]
        );
    }

    #[test]
    fn contrast_and_hue_write_order() {
        let mut cam = sensor();
        cam.set_contrast(4).unwrap();
        assert_eq!(
            &cam.i2c.writes[1..4],
            [
                (regs::SDE_CTRL0, 0x07),
                (regs::SDE_CTRL6, 0x30),
                (regs::SDE_CTRL5, 0x30),
            ]
        );

        let mut cam = sensor();
        cam.set_hue_degree(5).unwrap();
        assert_eq!(
            &cam.i2c.writes[2..4],
            [(regs::SDE_CTRL1, 0x6F), (regs::SDE_CTRL2, 0x40)]
        );
        assert_eq!(cam.tuning_codes().hue, 0x31);
    }

    #[test]
    fn out_of_range_levels_touch_nothing() {
        let mut cam = sensor();
        assert!(matches!(cam.set_brightness(5), Err(Error::InvalidArgument)));
        assert!(matches!(cam.set_brightness(-5), Err(Error::InvalidArgument)));
        assert!(matches!(cam.set_saturation(9), Err(Error::InvalidArgument)));
        assert!(matches!(cam.set_contrast(-100), Err(Error::InvalidArgument)));
        assert!(matches!(cam.set_hue_degree(6), Err(Error::InvalidArgument)));
        assert!(matches!(cam.set_hue_degree(-7), Err(Error::InvalidArgument)));
        assert!(matches!(
            cam.color_saturation_preset(7),
            Err(Error::InvalidArgument)
        ));
        assert!(matches!(cam.contrast_preset(7), Err(Error::InvalidArgument)));
        assert!(cam.i2c.writes.is_empty());
        assert!(cam.i2c.reads.is_empty());
        assert_eq!(cam.tuning_codes(), TuningCodes::default());
    }

    #[test]
    fn light_mode_applies_awb_defaults_then_preset() {
        let mut cam = sensor();
        cam.set_light_mode(LightMode::Office).unwrap();
        let n = tables::AWB_DEFAULTS.len();
        assert_eq!(&cam.i2c.writes[..n], tables::AWB_DEFAULTS);
        assert_eq!(&cam.i2c.writes[n..], tables::LIGHT_OFFICE);
    }

    #[test]
    fn color_effects() {
        let mut cam = sensor();
        cam.set_color_effect(ColorEffect::Sepia).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [
                (regs::ISP_CONTROL01, 0xFF),
                (regs::SDE_CTRL0, 0x1F),
                (regs::SDE_CTRL3, 0x40),
                (regs::SDE_CTRL4, 0xA0),
            ]
        );

        let mut cam = sensor();
        cam.set_color_effect(ColorEffect::Negative).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [(regs::ISP_CONTROL01, 0xFF), (regs::SDE_CTRL0, 0x47)]
        );

        let mut cam = sensor();
        cam.set_color_effect(ColorEffect::None).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [(regs::ISP_CONTROL01, 0x7F), (regs::SDE_CTRL0, 0x07)]
        );
    }

    #[test]
    fn mirror_flip_preserves_other_bits() {
        let mut cam = Ov5640::default(
            FakeSccb::new(DEFAULT_I2C_ADDRESS)
                .with_reg(regs::TIMING_TC_REG20, 0x41)
                .with_reg(regs::TIMING_TC_REG21, 0x27),
        );
        cam.mirror_flip(MirrorFlip::Flip).unwrap();
        assert_eq!(cam.i2c.reg(regs::TIMING_TC_REG20), 0x47);
        assert_eq!(cam.i2c.reg(regs::TIMING_TC_REG21), 0x21);

        cam.mirror_flip(MirrorFlip::MirrorFlip).unwrap();
        assert_eq!(cam.i2c.reg(regs::TIMING_TC_REG20), 0x47);
        assert_eq!(cam.i2c.reg(regs::TIMING_TC_REG21), 0x27);

        cam.mirror_flip(MirrorFlip::None).unwrap();
        assert_eq!(cam.i2c.reg(regs::TIMING_TC_REG20), 0x41);
        assert_eq!(cam.i2c.reg(regs::TIMING_TC_REG21), 0x21);
    }

    #[test]
    fn mirror_flip_is_idempotent() {
        for config in [
            MirrorFlip::None,
            MirrorFlip::Flip,
            MirrorFlip::Mirror,
            MirrorFlip::MirrorFlip,
        ]
        .iter()
        {
            let mut cam = sensor();
            cam.mirror_flip(*config).unwrap();
            let once = (
                cam.i2c.reg(regs::TIMING_TC_REG20),
                cam.i2c.reg(regs::TIMING_TC_REG21),
            );
            cam.mirror_flip(*config).unwrap();
            let twice = (
                cam.i2c.reg(regs::TIMING_TC_REG20),
                cam.i2c.reg(regs::TIMING_TC_REG21),
            );
            assert_eq!(once, twice);
        }
    }

    fn sensor_at(resolution: Resolution) -> Ov5640<FakeSccb> {
        let mut cam = sensor();
        cam.set_resolution(resolution).unwrap();
        cam.i2c.writes.clear();
        cam
    }

    #[test]
    fn zoom_scales_by_resolution() {
        let mut cam = sensor_at(Resolution::R640x480);
        cam.zoom(Zoom::X2).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [(regs::SCALE_CTRL0, 0x00), (regs::SCALE_CTRL1, 0x08)]
        );

        let mut cam = sensor_at(Resolution::R320x240);
        cam.zoom(Zoom::X4).unwrap();
        assert_eq!(cam.i2c.reg(regs::SCALE_CTRL1), 0x08);

        let mut cam = sensor_at(Resolution::R800x480);
        cam.zoom(Zoom::X4).unwrap();
        assert_eq!(cam.i2c.reg(regs::SCALE_CTRL1), 0x11);
    }

    #[test]
    fn zoom_x1_disables_scaling() {
        let mut cam = sensor_at(Resolution::R480x272);
        cam.zoom(Zoom::X1).unwrap();
        assert_eq!(cam.i2c.writes, [(regs::SCALE_CTRL0, 0x10)]);
    }

    #[test]
    fn zoom_needs_a_known_resolution() {
        let mut cam = sensor();
        assert!(matches!(cam.zoom(Zoom::X2), Err(Error::UnknownResolution)));
        assert!(cam.i2c.writes.is_empty());
    }

    #[test]
    fn night_mode_toggle() {
        let mut cam = sensor();
        cam.night_mode(true).unwrap();
        assert_eq!(cam.i2c.writes, tables::NIGHT_MODE);
        assert_eq!(cam.i2c.reg(regs::AEC_CTRL00), 0x7C);

        cam.night_mode(false).unwrap();
        assert_eq!(cam.i2c.reg(regs::AEC_CTRL00), 0x78);
    }

    #[test]
    fn colorbar_modes() {
        let mut cam = sensor();
        cam.colorbar(ColorbarMode::GradualVertical).unwrap();
        assert_eq!(cam.i2c.reg(regs::PRE_ISP_TEST_SETTING1), 0x8C);
        cam.colorbar(ColorbarMode::Disabled).unwrap();
        assert_eq!(cam.i2c.reg(regs::SDE_CTRL4), 0x10);
        assert_eq!(cam.i2c.reg(regs::PRE_ISP_TEST_SETTING1), 0x00);
    }

    #[test]
    fn embedded_sync_codes() {
        let mut cam = sensor();
        cam.embedded_sync(SyncCodes {
            frame_start: 0xFF,
            line_start: 0xAB,
            line_end: 0xB6,
            frame_end: 0x9D,
        })
        .unwrap();
        assert_eq!(
            &cam.i2c.writes[..6],
            [
                (regs::CCIR656_CTRL00, 0x83),
                (regs::CCIR656_FS, 0xFF),
                (regs::CCIR656_FE, 0x9D),
                (regs::CCIR656_LS, 0xAB),
                (regs::CCIR656_LE, 0xB6),
                (regs::CCIR656_DUMMY_LINE, 0x01),
            ]
        );
        assert_eq!(cam.i2c.reg(regs::FORMAT_MAX_CLIP_2), 0x02);
    }

    #[test]
    fn saturation_preset_fills_the_matrix() {
        let mut cam = sensor();
        cam.color_saturation_preset(6).unwrap();
        let expected = tables::SATURATION_MATRIX[6];
        for (i, val) in expected.iter().enumerate() {
            assert_eq!(cam.i2c.reg(regs::CMX4 + i as u16), *val);
        }
        assert_eq!(cam.i2c.writes[0], (regs::GROUP_ACCESS, 0x03));
        assert_eq!(*cam.i2c.writes.last().unwrap(), (regs::GROUP_ACCESS, 0xA3));
    }

    #[test]
    fn neutral_contrast_preset() {
        let mut cam = sensor();
        cam.contrast_preset(3).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [
                (regs::GROUP_ACCESS, 0x03),
                (regs::SDE_CTRL5, 0x00),
                (regs::SDE_CTRL6, 0x20),
                (regs::GROUP_ACCESS, 0x13),
                (regs::GROUP_ACCESS, 0xA3),
            ]
        );
    }

    #[test]
    fn sharpness_manual_and_auto() {
        let mut cam = sensor();
        cam.sharpness(8).unwrap();
        assert_eq!(
            cam.i2c.writes,
            [(regs::CIP_CTRL, 0x65), (regs::CIP_SHARPENMT_OFFSET1, 8)]
        );

        let mut cam = sensor();
        cam.sharpness(33).unwrap();
        assert_eq!(cam.i2c.writes, tables::SHARPNESS_AUTO);
    }

    #[test]
    fn tuning_bus_error_keeps_codes() {
        let mut cam = Ov5640::default(
            FakeSccb::new(DEFAULT_I2C_ADDRESS).fail_writes_after(1),
        );
        assert!(matches!(cam.set_brightness(2), Err(Error::Comm(_))));
        assert_eq!(cam.tuning_codes(), TuningCodes::default());
    }
}
