//! Typed configuration values.

/// Configuration value requested from or reported by a sensor.
///
/// Numeric requests are rounded up to the nearest supported hardware value. The
/// sentinels select a device-specific setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Setting {
    /// Device default.
    #[default]
    Default,
    /// Smallest supported value.
    Min,
    /// Largest supported value.
    Max,
    /// Keep the current value and read it back.
    NoChange,
    /// First device-specific setting.
    Custom1,
    /// Second device-specific setting.
    Custom2,
    /// Third device-specific setting.
    Custom3,
    /// Plain numeric value.
    Value(u8),
    /// Request exceeds what the device can do.
    NotSupported,
    /// Device reported an impossible setting.
    Invalid,
}

impl Setting {
    /// One-byte encoding of [`Setting::Default`].
    pub const DEFAULT_CODE: u8 = 0x00;
    /// One-byte encoding of [`Setting::Custom1`].
    pub const CUSTOM_1_CODE: u8 = 0xC9;
    /// One-byte encoding of [`Setting::Custom2`].
    pub const CUSTOM_2_CODE: u8 = 0xCA;
    /// One-byte encoding of [`Setting::Custom3`].
    pub const CUSTOM_3_CODE: u8 = 0xCB;
    /// One-byte encoding of [`Setting::Invalid`].
    pub const INVALID_CODE: u8 = 0xE0;
    /// One-byte encoding of [`Setting::NotSupported`].
    pub const NOT_SUPPORTED_CODE: u8 = 0xE2;
    /// One-byte encoding of [`Setting::Min`].
    pub const MIN_CODE: u8 = 0xF0;
    /// One-byte encoding of [`Setting::Max`].
    pub const MAX_CODE: u8 = 0xF1;
    /// One-byte encoding of [`Setting::NoChange`].
    pub const NO_CHANGE_CODE: u8 = 0xFF;
}

impl From<u8> for Setting {
    fn from(code: u8) -> Self {
        match code {
            Self::DEFAULT_CODE => Self::Default,
            Self::CUSTOM_1_CODE => Self::Custom1,
            Self::CUSTOM_2_CODE => Self::Custom2,
            Self::CUSTOM_3_CODE => Self::Custom3,
            Self::INVALID_CODE => Self::Invalid,
            Self::NOT_SUPPORTED_CODE => Self::NotSupported,
            Self::MIN_CODE => Self::Min,
            Self::MAX_CODE => Self::Max,
            Self::NO_CHANGE_CODE => Self::NoChange,
            value => Self::Value(value),
        }
    }
}

impl From<Setting> for u8 {
    fn from(setting: Setting) -> Self {
        match setting {
            Setting::Default => Setting::DEFAULT_CODE,
            Setting::Custom1 => Setting::CUSTOM_1_CODE,
            Setting::Custom2 => Setting::CUSTOM_2_CODE,
            Setting::Custom3 => Setting::CUSTOM_3_CODE,
            Setting::Invalid => Setting::INVALID_CODE,
            Setting::NotSupported => Setting::NOT_SUPPORTED_CODE,
            Setting::Min => Setting::MIN_CODE,
            Setting::Max => Setting::MAX_CODE,
            Setting::NoChange => Setting::NO_CHANGE_CODE,
            Setting::Value(value) => value,
        }
    }
}

/// Operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Mode {
    /// Powered down, configuration allowed.
    #[default]
    Sleep,
    /// Take one sample and return to sleep.
    Single,
    /// Sample at the configured rate.
    Continuous,
}

impl Mode {
    /// One-byte encoding of [`Mode::Sleep`].
    pub const SLEEP_CODE: u8 = 0xF2;
    /// One-byte encoding of [`Mode::Single`].
    pub const SINGLE_CODE: u8 = 0xF3;
    /// One-byte encoding of [`Mode::Continuous`].
    pub const CONTINUOUS_CODE: u8 = 0xF4;
}

impl TryFrom<u8> for Mode {
    type Error = crate::Status;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            Self::SLEEP_CODE => Ok(Self::Sleep),
            Self::SINGLE_CODE => Ok(Self::Single),
            Self::CONTINUOUS_CODE => Ok(Self::Continuous),
            _ => Err(crate::Status::INVALID_PARAM),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sleep => Mode::SLEEP_CODE,
            Mode::Single => Mode::SINGLE_CODE,
            Mode::Continuous => Mode::CONTINUOUS_CODE,
        }
    }
}

/// Signal processing applied by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DspFunction {
    /// No processing, latest sample.
    Last,
    /// Low-pass filter.
    LowPass,
    /// High-pass filter.
    HighPass,
    /// Infinite impulse response filter.
    Iir,
    /// Averaging of several samples.
    Oversampling,
    /// Device default, which resolves to [`DspFunction::Last`].
    #[default]
    Default,
    /// Keep the current function.
    NoChange,
}

/// Full sensor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SensorConfig {
    /// Sample rate in Hz, or a sentinel.
    pub samplerate: Setting,
    /// Resolution in bits, or a sentinel.
    pub resolution: Setting,
    /// Full scale in native units, or a sentinel.
    pub scale: Setting,
    /// Signal processing function.
    pub dsp_function: DspFunction,
    /// Parameter of the signal processing function.
    pub dsp_parameter: Setting,
    /// Mode entered after configuration.
    pub mode: Mode,
}

impl SensorConfig {
    /// Configuration that leaves every setting untouched and ends asleep.
    #[must_use]
    pub const fn unchanged() -> Self {
        Self {
            samplerate: Setting::NoChange,
            resolution: Setting::NoChange,
            scale: Setting::NoChange,
            dsp_function: DspFunction::NoChange,
            dsp_parameter: Setting::NoChange,
            mode: Mode::Sleep,
        }
    }
}
