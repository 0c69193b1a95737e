//! Regulator setup, reset and bootloader entry for nRF5-class SoCs.
//!
//! The register-level work is left to a [`PowerPeripheral`] implementation so that the
//! sequencing in [`PowerManager`] is independent of the HAL in use.

use bitflags::bitflags;

use crate::Status;
use crate::log::{info, warn};

/// `GPREGRET` value that makes the bootloader stay in DFU mode.
pub const BOOTLOADER_DFU_START: u8 = 0xB1;

bitflags! {
    /// DC/DC regulators to enable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Regulators: u8 {
        /// Main DC/DC converter (REG1).
        const DCDC_INTERNAL = 1 << 0;
        /// High voltage DC/DC converter (REG0), only on parts with VDDH.
        const DCDC_HV = 1 << 1;
    }
}

/// Regulator configuration handed to the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RegulatorConfig {
    /// Enable the main DC/DC converter.
    pub dcdc_enable: bool,
    /// Enable the high voltage DC/DC converter.
    pub dcdc_hv_enable: bool,
}

/// Platform power block.
pub trait PowerPeripheral {
    /// Whether the SoC has a VDDH supply and thus the high voltage regulator.
    fn has_vddh(&self) -> bool;

    /// Configures the regulators.
    ///
    /// # Errors
    ///
    /// Platform specific.
    fn power_init(&mut self, config: RegulatorConfig) -> Result<(), Status>;

    /// Releases the regulator configuration.
    fn power_uninit(&mut self);

    /// Writes the retained register read by the bootloader after reset.
    fn retention_write(&mut self, value: u8);

    /// Resets the SoC. Real implementations do not return.
    fn system_reset(&mut self);
}

/// Sequencing of the power operations over a [`PowerPeripheral`].
pub struct PowerManager<P> {
    peripheral: P,
    initialized: bool,
}

impl<P: PowerPeripheral> PowerManager<P> {
    /// Wraps a power peripheral that has not been configured yet.
    pub fn new(peripheral: P) -> Self {
        Self {
            peripheral,
            initialized: false,
        }
    }

    /// Returns the peripheral.
    pub fn release(self) -> P {
        self.peripheral
    }

    /// Whether [`PowerManager::regulators_enable`] has configured the peripheral.
    pub fn is_init(&self) -> bool {
        self.initialized
    }

    /// Enables the requested regulators, reconfiguring if already set up.
    ///
    /// Requesting the high voltage regulator on a part without VDDH is reported but
    /// does not stop the main regulator from being configured.
    ///
    /// # Errors
    ///
    /// `NOT_SUPPORTED` for `DCDC_HV` without VDDH, plus whatever the peripheral reports.
    pub fn regulators_enable(&mut self, regulators: Regulators) -> Result<(), Status> {
        let mut status = Status::SUCCESS;
        let mut config = RegulatorConfig {
            dcdc_enable: regulators.contains(Regulators::DCDC_INTERNAL),
            dcdc_hv_enable: false,
        };

        if regulators.contains(Regulators::DCDC_HV) {
            if self.peripheral.has_vddh() {
                config.dcdc_hv_enable = true;
            } else {
                warn!("DCDC_HV requested without VDDH");
                status |= Status::NOT_SUPPORTED;
            }
        }

        if self.initialized {
            self.peripheral.power_uninit();
            self.initialized = false;
        }

        status.merge(self.peripheral.power_init(config));
        self.initialized = true;
        info!("Regulators configured: {}", config);
        status.into_result()
    }

    /// Resets the SoC.
    pub fn reset(&mut self) {
        self.peripheral.system_reset();
    }

    /// Resets into the DFU bootloader.
    pub fn enter_bootloader(&mut self) {
        self.peripheral.retention_write(BOOTLOADER_DFU_START);
        self.peripheral.system_reset();
    }
}
