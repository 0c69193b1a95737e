//! LIS2DH12 register map and the hardware codes stored in it.

use num_derive::FromPrimitive;

#[allow(unsafe_code)]
#[allow(missing_docs)]
mod generated {
    device_driver::create_device!(
        device_name: Lis2dh12Registers,
        dsl: {
            config {
                type RegisterAddressType = u8;
                type DefaultByteOrder = LE;
                type DefmtFeature = "defmt-03";
            }

            /// STATUS_REG_AUX - Temperature data status (0x07)
            register StatusRegAux {
                type Access = RO;
                const ADDRESS = 0x07;
                const SIZE_BITS = 8;

                /// New temperature data available
                tda: bool = 2,
                /// Temperature data overrun
                tor: bool = 6,
            },

            /// WHO_AM_I - Device identification (0x0F), reads 0x33
            register WhoAmI {
                type Access = RO;
                const ADDRESS = 0x0F;
                const SIZE_BITS = 8;

                id: uint = 0..8,
            },

            /// TEMP_CFG_REG - Temperature sensor enable (0x1F)
            register TempCfgReg {
                const ADDRESS = 0x1F;
                const SIZE_BITS = 8;

                /// 0b11 enables the temperature sensor
                temp_en: uint = 6..8,
            },

            /// CTRL_REG1 - Data rate, low-power mode and axis enables (0x20)
            register CtrlReg1 {
                const ADDRESS = 0x20;
                const SIZE_BITS = 8;
                const RESET_VALUE = 0x07;

                xen: bool = 0,
                yen: bool = 1,
                zen: bool = 2,
                /// Low-power (8-bit) mode
                lpen: bool = 3,
                /// Output data rate code, see `Odr`
                odr: uint = 4..8,
            },

            /// CTRL_REG2 - High-pass filter (0x21)
            register CtrlReg2 {
                const ADDRESS = 0x21;
                const SIZE_BITS = 8;

                /// High-pass filter on interrupt generator 1
                hp_ia_one: bool = 0,
                /// High-pass filter on interrupt generator 2
                hp_ia_two: bool = 1,
                /// High-pass filter on click detection
                hp_click: bool = 2,
                /// Filtered data selection for the output registers and FIFO
                fds: bool = 3,
                /// Cutoff code, see `HighPassCutoff`
                hpcf: uint = 4..6,
                /// Filter mode
                hpm: uint = 6..8,
            },

            /// CTRL_REG3 - Interrupt routing to INT1 (0x22)
            register CtrlReg3 {
                const ADDRESS = 0x22;
                const SIZE_BITS = 8;

                overrun: bool = 1,
                /// FIFO watermark
                wtm: bool = 2,
                zyxda: bool = 4,
                ia_two: bool = 5,
                ia_one: bool = 6,
                click: bool = 7,
            },

            /// CTRL_REG4 - Scale, resolution and self-test (0x23)
            register CtrlReg4 {
                const ADDRESS = 0x23;
                const SIZE_BITS = 8;

                /// 3-wire SPI
                sim: bool = 0,
                /// Self-test code, see `SelfTest`
                st: uint = 1..3,
                /// High-resolution (12-bit) mode
                hr: bool = 3,
                /// Full scale code, see `Scale`
                fs: uint = 4..6,
                /// Big-endian output
                ble: bool = 6,
                /// Block data update
                bdu: bool = 7,
            },

            /// CTRL_REG5 - FIFO enable, memory reboot and latching (0x24)
            register CtrlReg5 {
                const ADDRESS = 0x24;
                const SIZE_BITS = 8;

                d_four_d_int_two: bool = 0,
                lir_int_two: bool = 1,
                d_four_d_int_one: bool = 2,
                lir_int_one: bool = 3,
                fifo_en: bool = 6,
                boot: bool = 7,
            },

            /// CTRL_REG6 - Interrupt routing to INT2 (0x25)
            register CtrlReg6 {
                const ADDRESS = 0x25;
                const SIZE_BITS = 8;

                /// Interrupt pin polarity, active low when set
                int_polarity: bool = 1,
                act_pin_two: bool = 3,
                boot_pin_two: bool = 4,
                ia_two_pin_two: bool = 5,
                /// Interrupt generator 1 on INT2
                ia_one_pin_two: bool = 6,
                click_pin_two: bool = 7,
            },

            /// REFERENCE - High-pass filter reference (0x26)
            register Reference {
                const ADDRESS = 0x26;
                const SIZE_BITS = 8;

                reference: uint = 0..8,
            },

            /// STATUS_REG - Acceleration data status (0x27)
            register StatusReg {
                type Access = RO;
                const ADDRESS = 0x27;
                const SIZE_BITS = 8;

                xda: bool = 0,
                yda: bool = 1,
                zda: bool = 2,
                zyxda: bool = 3,
                zyxor: bool = 7,
            },

            /// FIFO_CTRL_REG - FIFO mode and watermark (0x2E)
            register FifoCtrlReg {
                const ADDRESS = 0x2E;
                const SIZE_BITS = 8;

                /// Watermark level
                fth: uint = 0..5,
                /// Trigger routed to INT2 when set
                tr: bool = 5,
                /// FIFO mode code, see `FifoMode`
                fm: uint = 6..8,
            },

            /// FIFO_SRC_REG - FIFO status (0x2F)
            register FifoSrcReg {
                type Access = RO;
                const ADDRESS = 0x2F;
                const SIZE_BITS = 8;

                /// Unread samples minus one
                fss: uint = 0..5,
                fifo_empty: bool = 5,
                ovrn_fifo: bool = 6,
                wtm: bool = 7,
            },

            /// INT1_CFG - Interrupt generator 1 configuration (0x30)
            register IntOneCfg {
                const ADDRESS = 0x30;
                const SIZE_BITS = 8;

                xlie: bool = 0,
                xhie: bool = 1,
                ylie: bool = 2,
                yhie: bool = 3,
                zlie: bool = 4,
                zhie: bool = 5,
                /// 6-direction detection
                six_d: bool = 6,
                /// AND combination of events
                aoi: bool = 7,
            },

            /// INT1_SRC - Interrupt generator 1 source (0x31)
            register IntOneSrc {
                type Access = RO;
                const ADDRESS = 0x31;
                const SIZE_BITS = 8;

                xl: bool = 0,
                xh: bool = 1,
                yl: bool = 2,
                yh: bool = 3,
                zl: bool = 4,
                zh: bool = 5,
                ia: bool = 6,
            },

            /// INT1_THS - Interrupt generator 1 threshold (0x32)
            register IntOneThs {
                const ADDRESS = 0x32;
                const SIZE_BITS = 8;

                ths: uint = 0..7,
            },

            /// INT1_DURATION - Interrupt generator 1 minimum duration (0x33)
            register IntOneDuration {
                const ADDRESS = 0x33;
                const SIZE_BITS = 8;

                d: uint = 0..7,
            },
        }
    );
}

pub use generated::*;

/// WHO_AM_I contents of a genuine LIS2DH12.
pub const WHO_AM_I_VALUE: u8 = 0x33;
/// First byte of the temperature output, 16 bits little-endian.
pub const OUT_TEMP_L: u8 = 0x0C;
/// First byte of the acceleration output, 3 x 16 bits little-endian.
pub const OUT_X_L: u8 = 0x28;
/// `TEMP_EN` value that turns the temperature sensor on.
pub const TEMP_EN_ON: u8 = 0b11;
/// Normal high-pass filter mode for `HPM`.
pub const HPM_NORMAL: u8 = 0b10;
/// FIFO watermark used for the FIFO interrupt, the last slot of the 32 sample FIFO.
pub const FIFO_LATEST_SAMPLE: u8 = 31;

/// Output data rate codes of `CTRL_REG1.ODR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Odr {
    /// Sampling stopped.
    PowerDown = 0,
    /// 1 Hz.
    Hz1 = 1,
    /// 10 Hz.
    Hz10 = 2,
    /// 25 Hz.
    Hz25 = 3,
    /// 50 Hz.
    Hz50 = 4,
    /// 100 Hz.
    Hz100 = 5,
    /// 200 Hz.
    Hz200 = 6,
    /// 400 Hz.
    Hz400 = 7,
    /// 1.620 kHz, low-power mode only.
    Khz1620LowPower = 8,
    /// 1.344 kHz in normal and high-resolution mode, 5.376 kHz in low-power mode.
    Khz1344 = 9,
}

impl Odr {
    /// Rate in Hz at the given resolution.
    #[must_use]
    pub fn hz(self, resolution: Resolution) -> f32 {
        match (self, resolution) {
            (Odr::PowerDown, _) => 0.0,
            (Odr::Hz1, _) => 1.0,
            (Odr::Hz10, _) => 10.0,
            (Odr::Hz25, _) => 25.0,
            (Odr::Hz50, _) => 50.0,
            (Odr::Hz100, _) => 100.0,
            (Odr::Hz200, _) => 200.0,
            (Odr::Hz400, _) => 400.0,
            (Odr::Khz1620LowPower, _) => 1620.0,
            (Odr::Khz1344, Resolution::LowPower8Bit) => 5376.0,
            (Odr::Khz1344, _) => 1344.0,
        }
    }
}

/// Full scale codes of `CTRL_REG4.FS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Scale {
    /// ±2 g.
    G2 = 0,
    /// ±4 g.
    G4 = 1,
    /// ±8 g.
    G8 = 2,
    /// ±16 g.
    G16 = 3,
}

impl Scale {
    /// Full scale in g.
    #[must_use]
    pub fn g(self) -> u8 {
        match self {
            Scale::G2 => 2,
            Scale::G4 => 4,
            Scale::G8 => 8,
            Scale::G16 => 16,
        }
    }
}

/// Operating mode selected by `CTRL_REG1.LPen` and `CTRL_REG4.HR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Resolution {
    /// Low-power mode, 8 bits.
    LowPower8Bit,
    /// Normal mode, 10 bits.
    Normal10Bit,
    /// High-resolution mode, 12 bits.
    HighRes12Bit,
}

impl Resolution {
    /// Resolution in bits.
    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            Resolution::LowPower8Bit => 8,
            Resolution::Normal10Bit => 10,
            Resolution::HighRes12Bit => 12,
        }
    }

    /// `(LPen, HR)` pair for this mode.
    #[must_use]
    pub fn flags(self) -> (bool, bool) {
        match self {
            Resolution::LowPower8Bit => (true, false),
            Resolution::Normal10Bit => (false, false),
            Resolution::HighRes12Bit => (false, true),
        }
    }

    /// Mode selected by an `(LPen, HR)` pair, `None` for the forbidden combination.
    #[must_use]
    pub fn from_flags(lpen: bool, hr: bool) -> Option<Self> {
        match (lpen, hr) {
            (true, false) => Some(Resolution::LowPower8Bit),
            (false, false) => Some(Resolution::Normal10Bit),
            (false, true) => Some(Resolution::HighRes12Bit),
            (true, true) => None,
        }
    }
}

/// Self-test codes of `CTRL_REG4.ST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum SelfTest {
    /// Normal operation.
    #[default]
    Off = 0,
    /// Positive electrostatic stimulus.
    Positive = 1,
    /// Negative electrostatic stimulus.
    Negative = 2,
}

/// High-pass cutoff codes of `CTRL_REG2.HPCF`. Higher codes filter less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum HighPassCutoff {
    /// Highest cutoff frequency.
    Aggressive = 0,
    /// Second highest cutoff frequency.
    Strong = 1,
    /// Second lowest cutoff frequency.
    Medium = 2,
    /// Lowest cutoff frequency.
    Light = 3,
}

/// FIFO mode codes of `FIFO_CTRL_REG.FM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum FifoMode {
    /// FIFO disabled.
    Bypass = 0,
    /// Stops collecting when full.
    Fifo = 1,
    /// Discards the oldest sample when full.
    DynamicStream = 2,
    /// Stream until triggered, then FIFO.
    StreamToFifo = 3,
}
