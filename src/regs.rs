/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! OV5640 register addresses

// System control
/// Bit[5]: MCU reset
pub const SYSTEM_RESET00: u16 = 0x3000;
/// Bit[4:2]: JFIFO, SFIFO, JPG reset
pub const SYSTEM_RESET02: u16 = 0x3002;
pub const CLOCK_ENABLE00: u16 = 0x3004;
/// Bit[5]: JPEG 2x clock, Bit[3]: JPEG clock
pub const CLOCK_ENABLE02: u16 = 0x3006;
/// Bit[7]: software reset, Bit[6]: software power down
pub const SYSTEM_CTRL0: u16 = 0x3008;
pub const CHIP_ID_HIGH_BYTE: u16 = 0x300A;
pub const CHIP_ID_LOW_BYTE: u16 = 0x300B;
pub const MIPI_CONTROL00: u16 = 0x300E;
pub const PAD_OUTPUT_ENABLE01: u16 = 0x3017;
pub const PAD_OUTPUT_ENABLE02: u16 = 0x3018;
pub const PAD_OUTPUT_VALUE00: u16 = 0x3019;
pub const PAD_SELECT01: u16 = 0x301D;
pub const PAD_SELECT02: u16 = 0x301E;
pub const SC_PLL_CONTRL0: u16 = 0x3034;
pub const SC_PLL_CONTRL1: u16 = 0x3035;
/// PLL multiplier
pub const SC_PLL_CONTRL2: u16 = 0x3036;
/// Bit[4]: PLL root divider, Bit[3:0]: PLL pre-divider
pub const SC_PLL_CONTRL3: u16 = 0x3037;
pub const SC_PLL_CONTRL4: u16 = 0x3038;
pub const SC_PLL_CONTRL5: u16 = 0x3039;
pub const SCCB_SYSTEM_CTRL1: u16 = 0x3103;
pub const SYSTEM_ROOT_DIVIDER: u16 = 0x3108;

// Autofocus MCU mailbox
pub const FW_CMD_MAIN: u16 = 0x3022;
pub const FW_CMD_ACK: u16 = 0x3023;
pub const FW_CMD_PARA0: u16 = 0x3024;
pub const FW_CMD_PARA1: u16 = 0x3025;
pub const FW_CMD_PARA2: u16 = 0x3026;
pub const FW_CMD_PARA3: u16 = 0x3027;
pub const FW_CMD_PARA4: u16 = 0x3028;
pub const FW_STATUS: u16 = 0x3029;

// Group hold
pub const GROUP_ACCESS: u16 = 0x3212;

// AWB gain control
pub const AWB_R_GAIN_MSB: u16 = 0x3400;
pub const AWB_R_GAIN_LSB: u16 = 0x3401;
pub const AWB_G_GAIN_MSB: u16 = 0x3402;
pub const AWB_G_GAIN_LSB: u16 = 0x3403;
pub const AWB_B_GAIN_MSB: u16 = 0x3404;
pub const AWB_B_GAIN_LSB: u16 = 0x3405;
/// Bit[0]: manual white balance
pub const AWB_MANUAL_CONTROL: u16 = 0x3406;

// AEC/AGC
pub const AEC_PK_MANUAL: u16 = 0x3503;

// Timing control
/// X address start[11:8]
pub const TIMING_HS_HIGH: u16 = 0x3800;
pub const TIMING_HS_LOW: u16 = 0x3801;
/// Y address start[10:8]
pub const TIMING_VS_HIGH: u16 = 0x3802;
pub const TIMING_VS_LOW: u16 = 0x3803;
/// X address end[11:8]
pub const TIMING_HW_HIGH: u16 = 0x3804;
pub const TIMING_HW_LOW: u16 = 0x3805;
/// Y address end[10:8]
pub const TIMING_VH_HIGH: u16 = 0x3806;
pub const TIMING_VH_LOW: u16 = 0x3807;
/// DVP output width[11:8]
pub const TIMING_DVPHO_HIGH: u16 = 0x3808;
pub const TIMING_DVPHO_LOW: u16 = 0x3809;
/// DVP output height[10:8]
pub const TIMING_DVPVO_HIGH: u16 = 0x380A;
pub const TIMING_DVPVO_LOW: u16 = 0x380B;
pub const TIMING_HTS_HIGH: u16 = 0x380C;
pub const TIMING_HTS_LOW: u16 = 0x380D;
pub const TIMING_VTS_HIGH: u16 = 0x380E;
pub const TIMING_VTS_LOW: u16 = 0x380F;
pub const TIMING_HOFFSET_HIGH: u16 = 0x3810;
pub const TIMING_HOFFSET_LOW: u16 = 0x3811;
pub const TIMING_VOFFSET_HIGH: u16 = 0x3812;
pub const TIMING_VOFFSET_LOW: u16 = 0x3813;
pub const TIMING_X_INC: u16 = 0x3814;
pub const TIMING_Y_INC: u16 = 0x3815;
/// Bit[2:1]: vertical flip
pub const TIMING_TC_REG20: u16 = 0x3820;
/// Bit[5]: JPEG enable, Bit[2:1]: horizontal mirror
pub const TIMING_TC_REG21: u16 = 0x3821;

// AEC control
/// Bit[2]: night mode
pub const AEC_CTRL00: u16 = 0x3A00;
pub const AEC_CTRL02: u16 = 0x3A02;
pub const AEC_CTRL03: u16 = 0x3A03;
pub const AEC_B50_STEP_HIGH: u16 = 0x3A08;
pub const AEC_B50_STEP_LOW: u16 = 0x3A09;
pub const AEC_B60_STEP_HIGH: u16 = 0x3A0A;
pub const AEC_B60_STEP_LOW: u16 = 0x3A0B;
pub const AEC_CTRL0D: u16 = 0x3A0D;
pub const AEC_CTRL0E: u16 = 0x3A0E;
pub const AEC_CTRL0F: u16 = 0x3A0F;
pub const AEC_CTRL10: u16 = 0x3A10;
pub const AEC_CTRL11: u16 = 0x3A11;
pub const AEC_CTRL13: u16 = 0x3A13;
pub const AEC_MAX_EXPO_HIGH: u16 = 0x3A14;
pub const AEC_MAX_EXPO_LOW: u16 = 0x3A15;
pub const AEC_GAIN_CEILING_HIGH: u16 = 0x3A18;
pub const AEC_GAIN_CEILING_LOW: u16 = 0x3A19;
pub const AEC_CTRL1B: u16 = 0x3A1B;
pub const AEC_CTRL1E: u16 = 0x3A1E;
pub const AEC_CTRL1F: u16 = 0x3A1F;

// 50/60Hz detection
pub const HZ5060_CTRL01: u16 = 0x3C01;
pub const HZ5060_CTRL04: u16 = 0x3C04;
pub const HZ5060_CTRL05: u16 = 0x3C05;
pub const LIGHTMETER1_TH_HIGH: u16 = 0x3C06;
pub const LIGHTMETER1_TH_LOW: u16 = 0x3C07;
pub const LIGHTMETER2_TH_HIGH: u16 = 0x3C08;
pub const LIGHTMETER2_TH_LOW: u16 = 0x3C09;
pub const SAMPLE_NUMBER_HIGH: u16 = 0x3C0A;
pub const SAMPLE_NUMBER_LOW: u16 = 0x3C0B;

// BLC
pub const BLC_CTRL01: u16 = 0x4001;
pub const BLC_CTRL04: u16 = 0x4004;
pub const BLC_CTRL05: u16 = 0x4005;

// Frame / format control
pub const FRAME_CTRL02: u16 = 0x4202;
pub const FORMAT_CTRL00: u16 = 0x4300;
pub const FORMAT_MAX_CLIP_0: u16 = 0x4302;
pub const FORMAT_MAX_CLIP_1: u16 = 0x4306;
pub const FORMAT_MAX_CLIP_2: u16 = 0x430A;
/// Bit[5:0]: quantization scale
pub const JPEG_CTRL07: u16 = 0x4407;
pub const VFIFO_CTRL0B: u16 = 0x460B;
pub const VFIFO_CTRL0C: u16 = 0x460C;
pub const JPG_MODE_SELECT: u16 = 0x4713;
pub const DVP_CTRL1C: u16 = 0x471C;
/// Bit[7]: sync codes from registers, Bit[1]: clip, Bit[0]: CCIR656 enable
pub const CCIR656_CTRL00: u16 = 0x4730;
pub const CCIR656_FS: u16 = 0x4732;
pub const CCIR656_FE: u16 = 0x4733;
pub const CCIR656_LS: u16 = 0x4734;
pub const CCIR656_LE: u16 = 0x4735;
/// Bit[5]: PCLK, Bit[1]: HREF, Bit[0]: VSYNC (1 = active high)
pub const POLARITY_CTRL: u16 = 0x4740;
pub const CCIR656_DUMMY_LINE: u16 = 0x4745;
pub const MIPI_CTRL00: u16 = 0x4800;
/// Bit[7:6]: virtual channel
pub const MIPI_CTRL14: u16 = 0x4814;
pub const PCLK_PERIOD: u16 = 0x4837;

// ISP top
pub const ISP_CONTROL00: u16 = 0x5000;
/// Bit[7]: special digital effects, Bit[5]: scaling
pub const ISP_CONTROL01: u16 = 0x5001;
pub const ISP_MISC1D: u16 = 0x501D;
pub const FORMAT_MUX_CTRL: u16 = 0x501F;
pub const LENC_CTRL25: u16 = 0x5025;
/// Bit[7]: test pattern enable, Bit[3:2]: colour bar style
pub const PRE_ISP_TEST_SETTING1: u16 = 0x503D;

// AWB control
pub const AWB_CTRL00: u16 = 0x5180;
pub const AWB_CTRL01: u16 = 0x5181;
pub const AWB_CTRL02: u16 = 0x5182;
pub const AWB_CTRL03: u16 = 0x5183;
pub const AWB_CTRL04: u16 = 0x5184;
pub const AWB_CTRL05: u16 = 0x5185;
pub const AWB_CTRL06: u16 = 0x5186;
pub const AWB_CTRL07: u16 = 0x5187;
pub const AWB_CTRL08: u16 = 0x5188;
pub const AWB_CTRL09: u16 = 0x5189;
pub const AWB_CTRL10: u16 = 0x518A;
pub const AWB_CTRL11: u16 = 0x518B;
pub const AWB_CTRL12: u16 = 0x518C;
pub const AWB_CTRL13: u16 = 0x518D;
pub const AWB_CTRL14: u16 = 0x518E;
pub const AWB_CTRL15: u16 = 0x518F;
pub const AWB_CTRL16: u16 = 0x5190;
pub const AWB_CTRL17: u16 = 0x5191;
pub const AWB_CTRL18: u16 = 0x5192;
pub const AWB_CTRL19: u16 = 0x5193;
pub const AWB_CTRL20: u16 = 0x5194;
pub const AWB_CTRL21: u16 = 0x5195;
pub const AWB_CTRL22: u16 = 0x5196;
pub const AWB_CTRL23: u16 = 0x5197;
pub const AWB_CTRL24: u16 = 0x5198;
pub const AWB_CTRL25: u16 = 0x5199;
pub const AWB_CTRL26: u16 = 0x519A;
pub const AWB_CTRL27: u16 = 0x519B;
pub const AWB_CTRL28: u16 = 0x519C;
pub const AWB_CTRL29: u16 = 0x519D;
pub const AWB_CTRL30: u16 = 0x519E;

// CIP
pub const CIP_SHARPENMT_TH1: u16 = 0x5300;
pub const CIP_SHARPENMT_TH2: u16 = 0x5301;
pub const CIP_SHARPENMT_OFFSET1: u16 = 0x5302;
pub const CIP_SHARPENMT_OFFSET2: u16 = 0x5303;
pub const CIP_DNS_TH1: u16 = 0x5304;
pub const CIP_DNS_TH2: u16 = 0x5305;
pub const CIP_DNS_OFFSET1: u16 = 0x5306;
pub const CIP_DNS_OFFSET2: u16 = 0x5307;
pub const CIP_CTRL: u16 = 0x5308;
pub const CIP_SHARPENTH_TH1: u16 = 0x5309;
pub const CIP_SHARPENTH_TH2: u16 = 0x530A;
pub const CIP_SHARPENTH_OFFSET1: u16 = 0x530B;
pub const CIP_SHARPENTH_OFFSET2: u16 = 0x530C;

// Colour matrix
pub const CMX1: u16 = 0x5381;
pub const CMX2: u16 = 0x5382;
pub const CMX3: u16 = 0x5383;
pub const CMX4: u16 = 0x5384;
pub const CMX5: u16 = 0x5385;
pub const CMX6: u16 = 0x5386;
pub const CMX7: u16 = 0x5387;
pub const CMX8: u16 = 0x5388;
pub const CMX9: u16 = 0x5389;
pub const CMXSIGN_HIGH: u16 = 0x538A;
pub const CMXSIGN_LOW: u16 = 0x538B;

// Gamma
pub const GAMMA_CTRL00: u16 = 0x5480;
pub const GAMMA_YST00: u16 = 0x5481;
pub const GAMMA_YST01: u16 = 0x5482;
pub const GAMMA_YST02: u16 = 0x5483;
pub const GAMMA_YST03: u16 = 0x5484;
pub const GAMMA_YST04: u16 = 0x5485;
pub const GAMMA_YST05: u16 = 0x5486;
pub const GAMMA_YST06: u16 = 0x5487;
pub const GAMMA_YST07: u16 = 0x5488;
pub const GAMMA_YST08: u16 = 0x5489;
pub const GAMMA_YST09: u16 = 0x548A;
pub const GAMMA_YST0A: u16 = 0x548B;
pub const GAMMA_YST0B: u16 = 0x548C;
pub const GAMMA_YST0C: u16 = 0x548D;
pub const GAMMA_YST0D: u16 = 0x548E;
pub const GAMMA_YST0E: u16 = 0x548F;
pub const GAMMA_YST0F: u16 = 0x5490;

// Special digital effects
/// Bit[7]: fixed Y, Bit[6]: negative, Bit[4:3]: fixed U/V, Bit[2:0]: enable
pub const SDE_CTRL0: u16 = 0x5580;
pub const SDE_CTRL1: u16 = 0x5581;
pub const SDE_CTRL2: u16 = 0x5582;
pub const SDE_CTRL3: u16 = 0x5583;
pub const SDE_CTRL4: u16 = 0x5584;
pub const SDE_CTRL5: u16 = 0x5585;
pub const SDE_CTRL6: u16 = 0x5586;
/// Y offset (brightness)
pub const SDE_CTRL7: u16 = 0x5587;
/// Sign bits for hue, contrast, brightness
pub const SDE_CTRL8: u16 = 0x5588;
pub const SDE_CTRL9: u16 = 0x5589;
pub const SDE_CTRL10: u16 = 0x558A;
pub const SDE_CTRL11: u16 = 0x558B;

// Scaling
pub const SCALE_CTRL0: u16 = 0x5600;
pub const SCALE_CTRL1: u16 = 0x5601;

// Lens correction
pub const GMTRX00: u16 = 0x5800;
pub const GMTRX01: u16 = 0x5801;
pub const GMTRX02: u16 = 0x5802;
pub const GMTRX03: u16 = 0x5803;
pub const GMTRX04: u16 = 0x5804;
pub const GMTRX05: u16 = 0x5805;
pub const GMTRX10: u16 = 0x5806;
pub const GMTRX11: u16 = 0x5807;
pub const GMTRX12: u16 = 0x5808;
pub const GMTRX13: u16 = 0x5809;
pub const GMTRX14: u16 = 0x580A;
pub const GMTRX15: u16 = 0x580B;
pub const GMTRX20: u16 = 0x580C;
pub const GMTRX21: u16 = 0x580D;
pub const GMTRX22: u16 = 0x580E;
pub const GMTRX23: u16 = 0x580F;
pub const GMTRX24: u16 = 0x5810;
pub const GMTRX25: u16 = 0x5811;
pub const GMTRX30: u16 = 0x5812;
pub const GMTRX31: u16 = 0x5813;
pub const GMTRX32: u16 = 0x5814;
pub const GMTRX33: u16 = 0x5815;
pub const GMTRX34: u16 = 0x5816;
pub const GMTRX35: u16 = 0x5817;
pub const GMTRX40: u16 = 0x5818;
pub const GMTRX41: u16 = 0x5819;
pub const GMTRX42: u16 = 0x581A;
pub const GMTRX43: u16 = 0x581B;
pub const GMTRX44: u16 = 0x581C;
pub const GMTRX45: u16 = 0x581D;
pub const GMTRX50: u16 = 0x581E;
pub const GMTRX51: u16 = 0x581F;
pub const GMTRX52: u16 = 0x5820;
pub const GMTRX53: u16 = 0x5821;
pub const GMTRX54: u16 = 0x5822;
pub const GMTRX55: u16 = 0x5823;
pub const BRMATRX00: u16 = 0x5824;
pub const BRMATRX01: u16 = 0x5825;
pub const BRMATRX02: u16 = 0x5826;
pub const BRMATRX03: u16 = 0x5827;
pub const BRMATRX04: u16 = 0x5828;
pub const BRMATRX05: u16 = 0x5829;
pub const BRMATRX06: u16 = 0x582A;
pub const BRMATRX07: u16 = 0x582B;
pub const BRMATRX08: u16 = 0x582C;
pub const BRMATRX09: u16 = 0x582D;
pub const BRMATRX20: u16 = 0x582E;
pub const BRMATRX21: u16 = 0x582F;
pub const BRMATRX22: u16 = 0x5830;
pub const BRMATRX23: u16 = 0x5831;
pub const BRMATRX24: u16 = 0x5832;
pub const BRMATRX30: u16 = 0x5833;
pub const BRMATRX31: u16 = 0x5834;
pub const BRMATRX32: u16 = 0x5835;
pub const BRMATRX33: u16 = 0x5836;
pub const BRMATRX34: u16 = 0x5837;
pub const BRMATRX40: u16 = 0x5838;
pub const BRMATRX41: u16 = 0x5839;
pub const BRMATRX42: u16 = 0x583A;
pub const BRMATRX43: u16 = 0x583B;
pub const BRMATRX44: u16 = 0x583C;
pub const LENC_BR_OFFSET: u16 = 0x583D;
