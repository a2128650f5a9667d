/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Output and image tuning selections accepted by the driver

/// Output resolutions supported by the common init path
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// QQVGA
    R160x120 = 0,
    /// QVGA
    R320x240 = 1,
    R480x272 = 2,
    /// VGA
    R640x480 = 3,
    /// WVGA
    R800x480 = 4,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::R160x120,
        Resolution::R320x240,
        Resolution::R480x272,
        Resolution::R640x480,
        Resolution::R800x480,
    ];

    /// Output (width, height) in pixels
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            Resolution::R160x120 => (160, 120),
            Resolution::R320x240 => (320, 240),
            Resolution::R480x272 => (480, 272),
            Resolution::R640x480 => (640, 480),
            Resolution::R800x480 => (800, 480),
        }
    }

    /// Reverse lookup: only exact matches are recognized
    pub fn from_dimensions(width: u16, height: u16) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|res| res.dimensions() == (width, height))
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|res| *res as u8 == code)
    }
}

/// Output sizes available on the full-array (general) init path
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputSize {
    Qqvga = 0,
    Qvga,
    Psp,
    Vga,
    Wvga,
    Svga,
    Xga,
    Wxga,
    WxgaPlus,
    Sxga,
    Uxga,
    Fhd1080p,
    Qxga,
    FiveMp,
}

impl OutputSize {
    /// Output (width, height) in pixels
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            OutputSize::Qqvga => (160, 120),
            OutputSize::Qvga => (320, 240),
            OutputSize::Psp => (480, 272),
            OutputSize::Vga => (640, 480),
            OutputSize::Wvga => (800, 480),
            OutputSize::Svga => (800, 600),
            OutputSize::Xga => (1024, 768),
            OutputSize::Wxga => (1280, 800),
            OutputSize::WxgaPlus => (1440, 900),
            OutputSize::Sxga => (1280, 1024),
            OutputSize::Uxga => (1600, 1200),
            OutputSize::Fhd1080p => (1920, 1080),
            OutputSize::Qxga => (2048, 1536),
            OutputSize::FiveMp => (2100, 1575),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565 = 0,
    Rgb888 = 1,
    Yuv422 = 2,
    /// 8-bit monochrome
    Y8 = 7,
    Jpeg = 8,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 5] = [
        PixelFormat::Rgb565,
        PixelFormat::Rgb888,
        PixelFormat::Yuv422,
        PixelFormat::Y8,
        PixelFormat::Jpeg,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|pf| *pf as u8 == code)
    }
}

/// Active level of the PCLK, HREF and VSYNC sync signals.
/// The VSYNC bit of `POLARITY_CTRL` has the inverted sense.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

impl Polarity {
    /// Only 0 and 1 are meaningful polarity bits
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Polarity::ActiveLow),
            1 => Some(Polarity::ActiveHigh),
            _ => None,
        }
    }

    /// PCLK and HREF: bit set when active high
    pub(crate) fn bit(self) -> u8 {
        self as u8
    }

    /// VSYNC: bit clear when active high
    pub(crate) fn vsync_bit(self) -> u8 {
        match self {
            Polarity::ActiveHigh => 0,
            Polarity::ActiveLow => 1,
        }
    }

    pub(crate) fn from_bit(reg: u8, bit: u8) -> Self {
        if reg & (1 << bit) != 0 {
            Polarity::ActiveHigh
        } else {
            Polarity::ActiveLow
        }
    }

    pub(crate) fn from_vsync_bit(reg: u8) -> Self {
        if reg & 1 != 0 {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }
}

/// Video output interface
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interface {
    /// Parallel DVP port
    Parallel,
    /// MIPI CSI-2, with a virtual channel in 0..=3
    Serial { virtual_channel: u8 },
}

/// Max MIPI virtual channel ID
pub const MAX_VIRTUAL_CHANNEL: u8 = 3;

/// White balance presets
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightMode {
    Auto = 0x00,
    Sunny = 0x01,
    Office = 0x02,
    Cloudy = 0x04,
    Home = 0x08,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorEffect {
    None = 0x00,
    Blue = 0x01,
    Red = 0x02,
    Green = 0x04,
    BlackWhite = 0x08,
    Sepia = 0x10,
    Negative = 0x20,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MirrorFlip {
    None = 0,
    /// Vertical flip
    Flip = 1,
    /// Horizontal mirror
    Mirror = 2,
    MirrorFlip = 3,
}

impl MirrorFlip {
    pub(crate) fn flips(self) -> bool {
        matches!(self, MirrorFlip::Flip | MirrorFlip::MirrorFlip)
    }

    pub(crate) fn mirrors(self) -> bool {
        matches!(self, MirrorFlip::Mirror | MirrorFlip::MirrorFlip)
    }
}

/// Digital zoom factors. The discriminant is the raw scale-control code
/// for the 160x120 and 800x480 outputs.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Zoom {
    X8 = 0x00,
    X4 = 0x11,
    X2 = 0x22,
    X1 = 0x44,
}

/// Pixel clock presets, assuming a 24MHz input clock
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PixelClock {
    Mhz7,
    Mhz8,
    Mhz9,
    Mhz12,
    Mhz24,
    Mhz48,
}

impl PixelClock {
    /// PLL multiplier and root/pre-divider register values
    pub(crate) fn pll_settings(self) -> (u8, u8) {
        match self {
            PixelClock::Mhz7 => (0x38, 0x16),
            PixelClock::Mhz8 => (0x40, 0x16),
            PixelClock::Mhz9 => (0x60, 0x18),
            PixelClock::Mhz12 => (0x60, 0x16),
            PixelClock::Mhz24 => (0x60, 0x13),
            PixelClock::Mhz48 => (0x60, 0x03),
        }
    }
}

/// Test pattern selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorbarMode {
    Disabled,
    /// Standard eight colour bars
    Enabled,
    /// Bars with a vertical gradient
    GradualVertical,
}

/// CCIR-656 embedded synchronization codes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SyncCodes {
    pub frame_start: u8,
    pub line_start: u8,
    pub line_end: u8,
    pub frame_end: u8,
}

/// Tuning axes supported by the sensor
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub resolution: bool,
    pub light_mode: bool,
    pub special_effect: bool,
    pub brightness: bool,
    pub saturation: bool,
    pub contrast: bool,
    pub hue_degree: bool,
    pub mirror_flip: bool,
    pub zoom: bool,
    pub night_mode: bool,
}

impl Capabilities {
    /// Every axis is tunable on the OV5640
    pub const OV5640: Capabilities = Capabilities {
        resolution: true,
        light_mode: true,
        special_effect: true,
        brightness: true,
        saturation: true,
        contrast: true,
        hue_degree: true,
        mirror_flip: true,
        zoom: true,
        night_mode: true,
    };
}
