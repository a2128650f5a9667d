/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Vendor-tuned register presets, applied in order one write per entry.

use crate::regs::*;

/// Common settings for every resolution and pixel format.
/// Timing defaults to 800x480 (HTS 0x790, VTS 0x440).
pub const COMMON: &[(u16, u8)] = &[
    (SCCB_SYSTEM_CTRL1, 0x11),
    (SYSTEM_CTRL0, 0x82),
    (SCCB_SYSTEM_CTRL1, 0x03),
    (0x3630, 0x36),
    (0x3631, 0x0E),
    (0x3632, 0xE2),
    (0x3633, 0x12),
    (0x3621, 0xE0),
    (0x3704, 0xA0),
    (0x3703, 0x5A),
    (0x3715, 0x78),
    (0x3717, 0x01),
    (0x370B, 0x60),
    (0x3705, 0x1A),
    (0x3905, 0x02),
    (0x3906, 0x10),
    (0x3901, 0x0A),
    (0x3731, 0x12),
    (0x3600, 0x08),
    (0x3601, 0x33),
    (0x302D, 0x60),
    (0x3620, 0x52),
    (0x371B, 0x20),
    (0x471C, 0x50),
    (AEC_CTRL13, 0x43),
    (AEC_GAIN_CEILING_HIGH, 0x00),
    (AEC_GAIN_CEILING_LOW, 0xF8),
    (0x3635, 0x13),
    (0x3636, 0x03),
    (0x3634, 0x40),
    (0x3622, 0x01),
    (HZ5060_CTRL01, 0x34),
    (HZ5060_CTRL04, 0x28),
    (HZ5060_CTRL05, 0x98),
    (LIGHTMETER1_TH_HIGH, 0x00),
    (LIGHTMETER1_TH_LOW, 0x00),
    (LIGHTMETER2_TH_HIGH, 0x01),
    (LIGHTMETER2_TH_LOW, 0x2C),
    (SAMPLE_NUMBER_HIGH, 0x9C),
    (SAMPLE_NUMBER_LOW, 0x40),
    (TIMING_TC_REG20, 0x06),
    (TIMING_TC_REG21, 0x00),
    (TIMING_X_INC, 0x31),
    (TIMING_Y_INC, 0x31),
    (TIMING_HS_HIGH, 0x00),
    (TIMING_HS_LOW, 0x00),
    (TIMING_VS_HIGH, 0x00),
    (TIMING_VS_LOW, 0x04),
    (TIMING_HW_HIGH, 0x0A),
    (TIMING_HW_LOW, 0x3F),
    (TIMING_VH_HIGH, 0x07),
    (TIMING_VH_LOW, 0x9B),
    (TIMING_DVPHO_HIGH, 0x03),
    (TIMING_DVPHO_LOW, 0x20),
    (TIMING_DVPVO_HIGH, 0x02),
    (TIMING_DVPVO_LOW, 0x58),
    (TIMING_HTS_HIGH, 0x07),
    (TIMING_HTS_LOW, 0x90),
    (TIMING_VTS_HIGH, 0x04),
    (TIMING_VTS_LOW, 0x40),
    (TIMING_HOFFSET_HIGH, 0x00),
    (TIMING_HOFFSET_LOW, 0x10),
    (TIMING_VOFFSET_HIGH, 0x00),
    (TIMING_VOFFSET_LOW, 0x06),
    (0x3618, 0x00),
    (0x3612, 0x29),
    (0x3708, 0x64),
    (0x3709, 0x52),
    (0x370C, 0x03),
    (AEC_CTRL02, 0x03),
    (AEC_CTRL03, 0xD8),
    (AEC_B50_STEP_HIGH, 0x01),
    (AEC_B50_STEP_LOW, 0x27),
    (AEC_B60_STEP_HIGH, 0x00),
    (AEC_B60_STEP_LOW, 0xF6),
    (AEC_CTRL0E, 0x03),
    (AEC_CTRL0D, 0x04),
    (AEC_MAX_EXPO_HIGH, 0x03),
    (AEC_MAX_EXPO_LOW, 0xD8),
    (BLC_CTRL01, 0x02),
    (BLC_CTRL04, 0x02),
    (SYSTEM_RESET00, 0x00),
    (SYSTEM_RESET02, 0x1C),
    (CLOCK_ENABLE00, 0xFF),
    (CLOCK_ENABLE02, 0xC3),
    (MIPI_CONTROL00, 0x58),
    (0x302E, 0x00),
    (POLARITY_CTRL, 0x22),
    (FORMAT_CTRL00, 0x6F),
    (FORMAT_MUX_CTRL, 0x01),
    (JPG_MODE_SELECT, 0x03),
    (JPEG_CTRL07, 0x04),
    (0x440E, 0x00),
    (0x460B, 0x35),
    (0x460C, 0x23),
    (PCLK_PERIOD, 0x22),
    (0x3824, 0x02),
    (ISP_CONTROL00, 0xA7),
    (ISP_CONTROL01, 0xA3),
    (AWB_CTRL00, 0xFF),
    (AWB_CTRL01, 0xF2),
    (AWB_CTRL02, 0x00),
    (AWB_CTRL03, 0x14),
    (AWB_CTRL04, 0x25),
    (AWB_CTRL05, 0x24),
    (AWB_CTRL06, 0x09),
    (AWB_CTRL07, 0x09),
    (AWB_CTRL08, 0x09),
    (AWB_CTRL09, 0x75),
    (AWB_CTRL10, 0x54),
    (AWB_CTRL11, 0xE0),
    (AWB_CTRL12, 0xB2),
    (AWB_CTRL13, 0x42),
    (AWB_CTRL14, 0x3D),
    (AWB_CTRL15, 0x56),
    (AWB_CTRL16, 0x46),
    (AWB_CTRL17, 0xF8),
    (AWB_CTRL18, 0x04),
    (AWB_CTRL19, 0x70),
    (AWB_CTRL20, 0xF0),
    (AWB_CTRL21, 0xF0),
    (AWB_CTRL22, 0x03),
    (AWB_CTRL23, 0x01),
    (AWB_CTRL24, 0x04),
    (AWB_CTRL25, 0x12),
    (AWB_CTRL26, 0x04),
    (AWB_CTRL27, 0x00),
    (AWB_CTRL28, 0x06),
    (AWB_CTRL29, 0x82),
    (AWB_CTRL30, 0x38),
    (CMX1, 0x1E),
    (CMX2, 0x5B),
    (CMX3, 0x08),
    (CMX4, 0x0A),
    (CMX5, 0x7E),
    (CMX6, 0x88),
    (CMX7, 0x7C),
    (CMX8, 0x6C),
    (CMX9, 0x10),
    (CMXSIGN_HIGH, 0x01),
    (CMXSIGN_LOW, 0x98),
    (CIP_SHARPENMT_TH1, 0x08),
    (CIP_SHARPENMT_TH2, 0x30),
    (CIP_SHARPENMT_OFFSET1, 0x10),
    (CIP_SHARPENMT_OFFSET2, 0x00),
    (CIP_DNS_TH1, 0x08),
    (CIP_DNS_TH2, 0x30),
    (CIP_DNS_OFFSET1, 0x08),
    (CIP_DNS_OFFSET2, 0x16),
    (CIP_CTRL, 0x08),
    (CIP_SHARPENTH_TH1, 0x30),
    (CIP_SHARPENTH_TH2, 0x04),
    (CIP_SHARPENTH_OFFSET1, 0x06),
    (GAMMA_CTRL00, 0x01),
    (GAMMA_YST00, 0x08),
    (GAMMA_YST01, 0x14),
    (GAMMA_YST02, 0x28),
    (GAMMA_YST03, 0x51),
    (GAMMA_YST04, 0x65),
    (GAMMA_YST05, 0x71),
    (GAMMA_YST06, 0x7D),
    (GAMMA_YST07, 0x87),
    (GAMMA_YST08, 0x91),
    (GAMMA_YST09, 0x9A),
    (GAMMA_YST0A, 0xAA),
    (GAMMA_YST0B, 0xB8),
    (GAMMA_YST0C, 0xCD),
    (GAMMA_YST0D, 0xDD),
    (GAMMA_YST0E, 0xEA),
    (GAMMA_YST0F, 0x1D),
    (SDE_CTRL0, 0x02),
    (SDE_CTRL3, 0x40),
    (SDE_CTRL4, 0x10),
    (SDE_CTRL9, 0x10),
    (SDE_CTRL10, 0x00),
    (SDE_CTRL11, 0xF8),
    (GMTRX00, 0x23),
    (GMTRX01, 0x14),
    (GMTRX02, 0x0F),
    (GMTRX03, 0x0F),
    (GMTRX04, 0x12),
    (GMTRX05, 0x26),
    (GMTRX10, 0x0C),
    (GMTRX11, 0x08),
    (GMTRX12, 0x05),
    (GMTRX13, 0x05),
    (GMTRX14, 0x08),
    (GMTRX15, 0x0D),
    (GMTRX20, 0x08),
    (GMTRX21, 0x03),
    (GMTRX22, 0x00),
    (GMTRX23, 0x00),
    (GMTRX24, 0x03),
    (GMTRX25, 0x09),
    (GMTRX30, 0x07),
    (GMTRX31, 0x03),
    (GMTRX32, 0x00),
    (GMTRX33, 0x01),
    (GMTRX34, 0x03),
    (GMTRX35, 0x08),
    (GMTRX40, 0x0D),
    (GMTRX41, 0x08),
    (GMTRX42, 0x05),
    (GMTRX43, 0x06),
    (GMTRX44, 0x08),
    (GMTRX45, 0x0E),
    (GMTRX50, 0x29),
    (GMTRX51, 0x17),
    (GMTRX52, 0x11),
    (GMTRX53, 0x11),
    (GMTRX54, 0x15),
    (GMTRX55, 0x28),
    (BRMATRX00, 0x46),
    (BRMATRX01, 0x26),
    (BRMATRX02, 0x08),
    (BRMATRX03, 0x26),
    (BRMATRX04, 0x64),
    (BRMATRX05, 0x26),
    (BRMATRX06, 0x24),
    (BRMATRX07, 0x22),
    (BRMATRX08, 0x24),
    (BRMATRX09, 0x24),
    (BRMATRX20, 0x06),
    (BRMATRX21, 0x22),
    (BRMATRX22, 0x40),
    (BRMATRX23, 0x42),
    (BRMATRX24, 0x24),
    (BRMATRX30, 0x26),
    (BRMATRX31, 0x24),
    (BRMATRX32, 0x22),
    (BRMATRX33, 0x22),
    (BRMATRX34, 0x26),
    (BRMATRX40, 0x44),
    (BRMATRX41, 0x24),
    (BRMATRX42, 0x26),
    (BRMATRX43, 0x28),
    (BRMATRX44, 0x42),
    (LENC_BR_OFFSET, 0xCE),
    (0x5025, 0x00),
    (AEC_CTRL0F, 0x30),
    (AEC_CTRL10, 0x28),
    (AEC_CTRL1B, 0x30),
    (AEC_CTRL1E, 0x26),
    (AEC_CTRL11, 0x60),
    (AEC_CTRL1F, 0x14),
    (SYSTEM_CTRL0, 0x02),
];

/// Parallel (DVP) output: pads, PLL and root divider
pub const DVP_MODE: &[(u16, u8)] = &[
    (PAD_OUTPUT_ENABLE01, 0xFF),
    (PAD_OUTPUT_ENABLE02, 0xF3),
    (0x302E, 0x00),
    (DVP_CTRL1C, 0x50),
    (MIPI_CONTROL00, 0x58),
    (SC_PLL_CONTRL0, 0x18),
    (SC_PLL_CONTRL1, 0x41),
    (SC_PLL_CONTRL2, 0x60),
    (SC_PLL_CONTRL3, 0x13),
    (SYSTEM_ROOT_DIVIDER, 0x01),
];

/// Tri-state the parallel pads
pub const PAD_OUTPUT_DISABLE: &[(u16, u8)] = &[
    (PAD_OUTPUT_ENABLE01, 0x00),
    (PAD_OUTPUT_ENABLE02, 0x00),
    (PAD_SELECT01, 0x00),
    (PAD_SELECT02, 0x00),
];

/// Serial (MIPI CSI-2) output
pub const MIPI_MODE: &[(u16, u8)] = &[
    (PAD_OUTPUT_ENABLE01, 0x00),
    (PAD_OUTPUT_ENABLE02, 0x00),
    (0x302E, 0x08),
    (PCLK_PERIOD, 0x23),
    (SC_PLL_CONTRL0, 0x18),
    (SC_PLL_CONTRL1, 0x12),
    (SC_PLL_CONTRL2, 0x1C),
    (SC_PLL_CONTRL3, 0x13),
    (SYSTEM_ROOT_DIVIDER, 0x01),
    (MIPI_CTRL14, 0x2A),
    (MIPI_CTRL00, 0x24),
    (PAD_OUTPUT_VALUE00, 0x70),
    (MIPI_CONTROL00, 0x45),
    (FRAME_CTRL02, 0x00),
];

// Output size presets

pub const QQVGA_160X120: &[(u16, u8)] = &[
    (TIMING_DVPHO_HIGH, 0x00),
    (TIMING_DVPHO_LOW, 0xA0),
    (TIMING_DVPVO_HIGH, 0x00),
    (TIMING_DVPVO_LOW, 0x78),
];

pub const QVGA_320X240: &[(u16, u8)] = &[
    (TIMING_DVPHO_HIGH, 0x01),
    (TIMING_DVPHO_LOW, 0x40),
    (TIMING_DVPVO_HIGH, 0x00),
    (TIMING_DVPVO_LOW, 0xF0),
];

pub const WQVGA_480X272: &[(u16, u8)] = &[
    (TIMING_DVPHO_HIGH, 0x01),
    (TIMING_DVPHO_LOW, 0xE0),
    (TIMING_DVPVO_HIGH, 0x01),
    (TIMING_DVPVO_LOW, 0x10),
];

pub const VGA_640X480: &[(u16, u8)] = &[
    (TIMING_DVPHO_HIGH, 0x02),
    (TIMING_DVPHO_LOW, 0x80),
    (TIMING_DVPVO_HIGH, 0x01),
    (TIMING_DVPVO_LOW, 0xE0),
];

pub const WVGA_800X480: &[(u16, u8)] = &[
    (TIMING_DVPHO_HIGH, 0x03),
    (TIMING_DVPHO_LOW, 0x20),
    (TIMING_DVPVO_HIGH, 0x01),
    (TIMING_DVPVO_LOW, 0xE0),
];

// Pixel format presets

pub const PF_RGB565: &[(u16, u8)] = &[
    (FORMAT_CTRL00, 0x6F),
    (FORMAT_MUX_CTRL, 0x01),
];
pub const PF_YUV422: &[(u16, u8)] = &[
    (FORMAT_CTRL00, 0x30),
    (FORMAT_MUX_CTRL, 0x00),
];
/// RGBRGB ordering
pub const PF_RGB888: &[(u16, u8)] = &[
    (FORMAT_CTRL00, 0x23),
    (FORMAT_MUX_CTRL, 0x01),
];
pub const PF_Y8: &[(u16, u8)] = &[
    (FORMAT_CTRL00, 0x10),
    (FORMAT_MUX_CTRL, 0x00),
];
/// JPEG is fed from the YUV422 path
pub const PF_JPEG: &[(u16, u8)] = &[
    (FORMAT_CTRL00, 0x30),
    (FORMAT_MUX_CTRL, 0x00),
];

// White balance presets, written after the AWB defaults in `AWB_DEFAULTS`

pub const AWB_DEFAULTS: &[(u16, u8)] = &[
    (AWB_MANUAL_CONTROL, 0x00),
    (AWB_CTRL16, 0x46),
    (AWB_CTRL17, 0xF8),
    (AWB_CTRL18, 0x04),
];

pub const LIGHT_AUTO: &[(u16, u8)] = &[
    (AWB_MANUAL_CONTROL, 0x00),
    (AWB_R_GAIN_MSB, 0x04),
    (AWB_R_GAIN_LSB, 0x00),
    (AWB_G_GAIN_MSB, 0x04),
    (AWB_G_GAIN_LSB, 0x00),
    (AWB_B_GAIN_MSB, 0x04),
    (AWB_B_GAIN_LSB, 0x00),
];

pub const LIGHT_SUNNY: &[(u16, u8)] = &[
    (AWB_MANUAL_CONTROL, 0x01),
    (AWB_R_GAIN_MSB, 0x06),
    (AWB_R_GAIN_LSB, 0x1C),
    (AWB_G_GAIN_MSB, 0x04),
    (AWB_G_GAIN_LSB, 0x00),
    (AWB_B_GAIN_MSB, 0x04),
    (AWB_B_GAIN_LSB, 0xF3),
];

pub const LIGHT_OFFICE: &[(u16, u8)] = &[
    (AWB_MANUAL_CONTROL, 0x01),
    (AWB_R_GAIN_MSB, 0x05),
    (AWB_R_GAIN_LSB, 0x48),
    (AWB_G_GAIN_MSB, 0x04),
    (AWB_G_GAIN_LSB, 0x00),
    (AWB_B_GAIN_MSB, 0x07),
    (AWB_B_GAIN_LSB, 0xCF),
];

pub const LIGHT_CLOUDY: &[(u16, u8)] = &[
    (AWB_MANUAL_CONTROL, 0x01),
    (AWB_R_GAIN_MSB, 0x06),
    (AWB_R_GAIN_LSB, 0x48),
    (AWB_G_GAIN_MSB, 0x04),
    (AWB_G_GAIN_LSB, 0x00),
    (AWB_B_GAIN_MSB, 0x04),
    (AWB_B_GAIN_LSB, 0xD3),
];

pub const LIGHT_HOME: &[(u16, u8)] = &[
    (AWB_MANUAL_CONTROL, 0x01),
    (AWB_R_GAIN_MSB, 0x04),
    (AWB_R_GAIN_LSB, 0x10),
    (AWB_G_GAIN_MSB, 0x04),
    (AWB_G_GAIN_LSB, 0x00),
    (AWB_B_GAIN_MSB, 0x08),
    (AWB_B_GAIN_LSB, 0xB6),
];

/// Auto frame rate 15fps down to 3.75fps for 50/60Hz light,
/// 24MHz input clock and 24MHz PCLK
pub const NIGHT_MODE: &[(u16, u8)] = &[
    (SC_PLL_CONTRL4, 0x00),
    (SC_PLL_CONTRL5, 0x00),
    (AEC_CTRL00, 0x7C),
    (AEC_B50_STEP_HIGH, 0x01),
    (AEC_B50_STEP_LOW, 0x27),
    (AEC_B60_STEP_HIGH, 0x00),
    (AEC_B60_STEP_LOW, 0xF6),
    (AEC_CTRL0D, 0x04),
    (AEC_CTRL0E, 0x04),
    (AEC_CTRL02, 0x0B),
    (AEC_CTRL03, 0x88),
    (AEC_MAX_EXPO_HIGH, 0x0B),
    (AEC_MAX_EXPO_LOW, 0x88),
];

// Special digital effect lookups, indexed by level + offset

/// Y offset, brightness -4..=4
pub const BRIGHTNESS_LEVELS: [u8; 9] = [
    0x40, 0x30, 0x20, 0x10, 0x00, 0x10, 0x20, 0x30, 0x40,
];
/// U/V saturation, -4..=4
pub const SATURATION_LEVELS: [u8; 9] = [
    0x00, 0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80,
];
/// Y gain and offset, contrast -4..=4
pub const CONTRAST_LEVELS: [u8; 9] = [
    0x10, 0x14, 0x18, 0x1C, 0x20, 0x24, 0x28, 0x2C, 0x30,
];
/// Hue cos/sin coefficients and sign bits, 30 degree steps from -180
pub const HUE_COS: [u8; 12] = [
    0x80, 0x6F, 0x40, 0x00, 0x40, 0x6F, 0x80, 0x6F, 0x40, 0x00, 0x40, 0x6F,
];
pub const HUE_SIN: [u8; 12] = [
    0x00, 0x40, 0x6F, 0x80, 0x6F, 0x40, 0x00, 0x40, 0x6F, 0x80, 0x6F, 0x40,
];
pub const HUE_SIGNS: [u8; 12] = [
    0x32, 0x32, 0x32, 0x02, 0x02, 0x02, 0x01, 0x01, 0x01, 0x31, 0x31, 0x31,
];

/// Colour matrix CMX4..CMX9 for the procedural saturation presets -3..=3
pub const SATURATION_MATRIX: [[u8; 6]; 7] = [
    [0x0C, 0x30, 0x3D, 0x3E, 0x3D, 0x01],
    [0x10, 0x3D, 0x4D, 0x4E, 0x4D, 0x01],
    [0x15, 0x52, 0x66, 0x68, 0x66, 0x02],
    [0x1A, 0x66, 0x80, 0x82, 0x80, 0x02],
    [0x1F, 0x7A, 0x9A, 0x9C, 0x9A, 0x02],
    [0x24, 0x8F, 0xB3, 0xB6, 0xB3, 0x03],
    [0x2B, 0xAB, 0xD6, 0xDA, 0xD6, 0x04],
];

/// Y offset and gain (SDE_CTRL5, SDE_CTRL6) for the procedural
/// contrast presets -3..=3
pub const CONTRAST_PRESETS: [(u8, u8); 7] = [
    (0x14, 0x14),
    (0x18, 0x18),
    (0x1C, 0x1C),
    (0x00, 0x20),
    (0x10, 0x24),
    (0x18, 0x28),
    (0x1C, 0x2C),
];

/// Automatic sharpening thresholds
pub const SHARPNESS_AUTO: &[(u16, u8)] = &[
    (CIP_CTRL, 0x25),
    (CIP_SHARPENMT_TH1, 0x08),
    (CIP_SHARPENMT_TH2, 0x30),
    (CIP_SHARPENMT_OFFSET1, 0x10),
    (CIP_SHARPENMT_OFFSET2, 0x00),
    (CIP_SHARPENTH_TH1, 0x08),
    (CIP_SHARPENTH_TH2, 0x30),
    (CIP_SHARPENTH_OFFSET1, 0x04),
    (CIP_SHARPENTH_OFFSET2, 0x06),
];

/// Clears the autofocus mailbox and releases the MCU from reset
pub const FOCUS_MAILBOX_RESET: &[(u16, u8)] = &[
    (FW_CMD_MAIN, 0x00),
    (FW_CMD_ACK, 0x00),
    (FW_CMD_PARA0, 0x00),
    (FW_CMD_PARA1, 0x00),
    (FW_CMD_PARA2, 0x00),
    (FW_CMD_PARA3, 0x00),
    (FW_CMD_PARA4, 0x00),
    (FW_STATUS, 0x7F),
    (SYSTEM_RESET00, 0x00),
];

/// Base settings for the full-array (general) init path:
/// 24MHz input clock, 24MHz PCLK, YUV422 out of reset.
pub const GENERAL_BASE: &[(u16, u8)] = &[
    (0x3008, 0x42),
    (0x3103, 0x03),
    (0x3017, 0xFF),
    (0x3018, 0xFF),
    (0x3034, 0x1A),
    (0x3037, 0x13),
    (0x3108, 0x01),
    (0x3630, 0x36),
    (0x3631, 0x0E),
    (0x3632, 0xE2),
    (0x3633, 0x12),
    (0x3621, 0xE0),
    (0x3704, 0xA0),
    (0x3703, 0x5A),
    (0x3715, 0x78),
    (0x3717, 0x01),
    (0x370B, 0x60),
    (0x3705, 0x1A),
    (0x3905, 0x02),
    (0x3906, 0x10),
    (0x3901, 0x0A),
    (0x3731, 0x12),
    (0x3600, 0x08),
    (0x3601, 0x33),
    (0x302D, 0x60),
    (0x3620, 0x52),
    (0x371B, 0x20),
    (0x471C, 0x50),
    (0x3A13, 0x43),
    (0x3A18, 0x00),
    (0x3A19, 0xF8),
    (0x3635, 0x13),
    (0x3636, 0x03),
    (0x3634, 0x40),
    (0x3622, 0x01),
    (0x3C01, 0x34),
    (0x3C04, 0x28),
    (0x3C05, 0x98),
    (0x3C06, 0x00),
    (0x3C07, 0x08),
    (0x3C08, 0x00),
    (0x3C09, 0x1C),
    (0x3C0A, 0x9C),
    (0x3C0B, 0x40),
    (0x3810, 0x00),
    (0x3811, 0x10),
    (0x3812, 0x00),
    (0x3708, 0x64),
    (0x4001, 0x02),
    (0x4005, 0x1A),
    (0x3000, 0x00),
    (0x3004, 0xFF),
    (0x300E, 0x58),
    (0x302E, 0x00),
    (0x4300, 0x30),
    (0x501F, 0x00),
    (0x440E, 0x00),
    (0x5000, 0xA7),
    (0x3A0F, 0x30),
    (0x3A10, 0x28),
    (0x3A1B, 0x30),
    (0x3A1E, 0x26),
    (0x3A11, 0x60),
    (0x3A1F, 0x14),
    (0x5800, 0x23),
    (0x5801, 0x14),
    (0x5802, 0x0F),
    (0x5803, 0x0F),
    (0x5804, 0x12),
    (0x5805, 0x26),
    (0x5806, 0x0C),
    (0x5807, 0x08),
    (0x5808, 0x05),
    (0x5809, 0x05),
    (0x580A, 0x08),
    (0x580B, 0x0D),
    (0x580C, 0x08),
    (0x580D, 0x03),
    (0x580E, 0x00),
    (0x580F, 0x00),
    (0x5810, 0x03),
    (0x5811, 0x09),
    (0x5812, 0x07),
    (0x5813, 0x03),
    (0x5814, 0x00),
    (0x5815, 0x01),
    (0x5816, 0x03),
    (0x5817, 0x08),
    (0x5818, 0x0D),
    (0x5819, 0x08),
    (0x581A, 0x05),
    (0x581B, 0x06),
    (0x581C, 0x08),
    (0x581D, 0x0E),
    (0x581E, 0x29),
    (0x581F, 0x17),
    (0x5820, 0x11),
    (0x5821, 0x11),
    (0x5822, 0x15),
    (0x5823, 0x28),
    (0x5824, 0x46),
    (0x5825, 0x26),
    (0x5826, 0x08),
    (0x5827, 0x26),
    (0x5828, 0x64),
    (0x5829, 0x26),
    (0x582A, 0x24),
    (0x582B, 0x22),
    (0x582C, 0x24),
    (0x582D, 0x24),
    (0x582E, 0x06),
    (0x582F, 0x22),
    (0x5830, 0x40),
    (0x5831, 0x42),
    (0x5832, 0x24),
    (0x5833, 0x26),
    (0x5834, 0x24),
    (0x5835, 0x22),
    (0x5836, 0x22),
    (0x5837, 0x26),
    (0x5838, 0x44),
    (0x5839, 0x24),
    (0x583A, 0x26),
    (0x583B, 0x28),
    (0x583C, 0x42),
    (0x583D, 0xCE),
    (0x5180, 0xFF),
    (0x5181, 0xF2),
    (0x5182, 0x00),
    (0x5183, 0x14),
    (0x5184, 0x25),
    (0x5185, 0x24),
    (0x5186, 0x09),
    (0x5187, 0x09),
    (0x5188, 0x09),
    (0x5189, 0x75),
    (0x518A, 0x54),
    (0x518B, 0xE0),
    (0x518C, 0xB2),
    (0x518D, 0x42),
    (0x518E, 0x3D),
    (0x518F, 0x56),
    (0x5190, 0x46),
    (0x5191, 0xF8),
    (0x5192, 0x04),
    (0x5193, 0x70),
    (0x5194, 0xF0),
    (0x5195, 0xF0),
    (0x5196, 0x03),
    (0x5197, 0x01),
    (0x5198, 0x04),
    (0x5199, 0x12),
    (0x519A, 0x04),
    (0x519B, 0x00),
    (0x519C, 0x06),
    (0x519D, 0x82),
    (0x519E, 0x38),
    (0x5480, 0x01),
    (0x5481, 0x08),
    (0x5482, 0x14),
    (0x5483, 0x28),
    (0x5484, 0x51),
    (0x5485, 0x65),
    (0x5486, 0x71),
    (0x5487, 0x7D),
    (0x5488, 0x87),
    (0x5489, 0x91),
    (0x548A, 0x9A),
    (0x548B, 0xAA),
    (0x548C, 0xB8),
    (0x548D, 0xCD),
    (0x548E, 0xDD),
    (0x548F, 0xEA),
    (0x5490, 0x1D),
    (0x5381, 0x1E),
    (0x5382, 0x5B),
    (0x5383, 0x08),
    (0x5384, 0x0A),
    (0x5385, 0x7E),
    (0x5386, 0x88),
    (0x5387, 0x7C),
    (0x5388, 0x6C),
    (0x5389, 0x10),
    (0x538A, 0x01),
    (0x538B, 0x98),
    (0x5580, 0x06),
    (0x5583, 0x40),
    (0x5584, 0x10),
    (0x5589, 0x10),
    (0x558A, 0x00),
    (0x558B, 0xF8),
    (0x501D, 0x40),
    (0x5300, 0x08),
    (0x5301, 0x30),
    (0x5302, 0x10),
    (0x5303, 0x00),
    (0x5304, 0x08),
    (0x5305, 0x30),
    (0x5306, 0x08),
    (0x5307, 0x16),
    (0x5309, 0x08),
    (0x530A, 0x30),
    (0x530B, 0x04),
    (0x530C, 0x06),
    (0x5025, 0x00),
    (0x3008, 0x02),
    (0x4740, 0x21),
];

/// JPEG mode 3 over the full array, 24MHz input clock
pub const GENERAL_JPEG: &[(u16, u8)] = &[
    (0x4300, 0x30),
    (0x501F, 0x00),
    (0x3035, 0x21),
    (0x3036, 0x69),
    (0x3C07, 0x07),
    (0x3820, 0x46),
    (0x3821, 0x20),
    (0x3814, 0x11),
    (0x3815, 0x11),
    (0x3800, 0x00),
    (0x3801, 0x00),
    (0x3802, 0x00),
    (0x3803, 0x00),
    (0x3804, 0x0A),
    (0x3805, 0x3F),
    (0x3806, 0x07),
    (0x3807, 0x9F),
    (0x3808, 0x02),
    (0x3809, 0x80),
    (0x380A, 0x01),
    (0x380B, 0xE0),
    (0x380C, 0x0B),
    (0x380D, 0x1C),
    (0x380E, 0x07),
    (0x380F, 0xB0),
    (0x3813, 0x04),
    (0x3618, 0x04),
    (0x3612, 0x2B),
    (0x3709, 0x12),
    (0x370C, 0x00),
    (0x4004, 0x06),
    (0x3002, 0x00),
    (0x3006, 0xFF),
    (0x4713, 0x03),
    (0x4407, 0x01),
    (0x460B, 0x35),
    (0x460C, 0x22),
    (0x4837, 0x16),
    (0x3824, 0x02),
    (0x5001, 0xA3),
    (0x3503, 0x00),
];

/// RGB565 1280x800 at 15fps, 24MHz input clock, 42MHz PCLK
pub const GENERAL_RGB565: &[(u16, u8)] = &[
    (0x4300, 0x6F),
    (0x501F, 0x01),
    (0x3035, 0x41),
    (0x3036, 0x69),
    (0x3C07, 0x07),
    (0x3820, 0x46),
    (0x3821, 0x00),
    (0x3814, 0x31),
    (0x3815, 0x31),
    (0x3800, 0x00),
    (0x3801, 0x00),
    (0x3802, 0x00),
    (0x3803, 0x00),
    (0x3804, 0x0A),
    (0x3805, 0x3F),
    (0x3806, 0x06),
    (0x3807, 0xA9),
    (0x3808, 0x05),
    (0x3809, 0x00),
    (0x380A, 0x02),
    (0x380B, 0xD0),
    (0x380C, 0x05),
    (0x380D, 0xF8),
    (0x380E, 0x03),
    (0x380F, 0x84),
    (0x3813, 0x04),
    (0x3618, 0x00),
    (0x3612, 0x29),
    (0x3709, 0x52),
    (0x370C, 0x03),
    (0x3A02, 0x02),
    (0x3A03, 0xE0),
    (0x3A14, 0x02),
    (0x3A15, 0xE0),
    (0x4004, 0x02),
    (0x3002, 0x1C),
    (0x3006, 0xC3),
    (0x4713, 0x03),
    (0x4407, 0x04),
    (0x460B, 0x37),
    (0x460C, 0x20),
    (0x4837, 0x16),
    (0x3824, 0x04),
    (0x5001, 0xA3),
    (0x3503, 0x00),
];
