use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

use super::Lis2dh12;
use super::registers::{Odr, Resolution, Scale, SelfTest};
use crate::Status;
use crate::log::{debug, warn};
use crate::timestamp::Clock;

impl<I, D, C> Lis2dh12<I, D, C>
where
    I: RegisterInterface<AddressType = u8, Error = Status>,
    D: DelayNs,
    C: Clock,
{
    /// Smallest accepted self-test response in counts after dropping the justification.
    pub const SELFTEST_DIFF_MIN: i32 = 17;
    /// Largest accepted self-test response in counts after dropping the justification.
    pub const SELFTEST_DIFF_MAX: i32 = 360;
    /// Time for the output to settle after a stimulus change. Three samples at 400 Hz
    /// take 7.5 ms.
    pub const SELFTEST_SETTLE_MS: u32 = 9;

    /// Runs the electrostatic self-test in both directions.
    ///
    /// Expects the reference configuration written by `init`: 400 Hz, ±2 g, 10 bits.
    /// Every step runs even after a failure and the stimulus is always switched off at
    /// the end.
    pub(super) fn selftest(&mut self) -> Result<(), Status> {
        let mut status = Status::SUCCESS;

        for stimulus in [SelfTest::Positive, SelfTest::Negative] {
            status.merge(self.selftest_set(SelfTest::Off));
            self.delay.delay_ms(Self::SELFTEST_SETTLE_MS);
            let baseline = status.merge(self.read_raw_acceleration());

            status.merge(self.selftest_set(stimulus));
            self.delay.delay_ms(Self::SELFTEST_SETTLE_MS);
            let stimulated = status.merge(self.read_raw_acceleration());

            if let (Some(stimulated), Some(baseline)) = (stimulated, baseline) {
                status.merge(self.verify_selftest_difference(stimulated, baseline));
            }
        }

        status.merge(self.selftest_set(SelfTest::Off));
        if !status.is_empty() {
            warn!("LIS2DH12 self-test failed: {}", status);
        }
        status.into_result()
    }

    fn selftest_set(&mut self, selftest: SelfTest) -> Result<(), Status> {
        self.state.selftest = selftest;
        self.device
            .ctrl_reg_4()
            .modify(|r| r.set_st(selftest as u8))
    }

    /// Checks that every axis moved by a plausible amount between two samples.
    pub(super) fn verify_selftest_difference(
        &self,
        new: [i16; 3],
        old: [i16; 3],
    ) -> Result<(), Status> {
        if self.state.scale != Some(Scale::G2)
            || self.state.resolution != Some(Resolution::Normal10Bit)
            || self.state.rate != Some(Odr::Hz400)
        {
            return Err(Status::INVALID_STATE);
        }

        for (new, old) in new.into_iter().zip(old) {
            let diff = ((i32::from(new) - i32::from(old)) >> 6).abs();
            debug!("LIS2DH12 self-test difference {=i32}", diff);
            if !(Self::SELFTEST_DIFF_MIN..=Self::SELFTEST_DIFF_MAX).contains(&diff) {
                return Err(Status::SELFTEST);
            }
        }
        Ok(())
    }
}
