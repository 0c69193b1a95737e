use super::registers::{Odr, Resolution, Scale, SelfTest};
use crate::sensor::Mode;

/// Cached configuration of one LIS2DH12.
///
/// `None` means the value has not been read yet or the register held an impossible
/// combination. The zeroed `Default` is the state before `init` and after `uninit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct DeviceState {
    /// Operating mode, which sets the output resolution.
    pub resolution: Option<Resolution>,
    /// Full scale.
    pub scale: Option<Scale>,
    /// Sample rate applied when sampling starts.
    pub rate: Option<Odr>,
    /// Self-test stimulus last written.
    pub selftest: SelfTest,
    /// Mode last entered.
    pub mode: Mode,
    /// Capture time of the last single sample.
    pub tsample: u64,
}
