//! Generic sensor interface.
//!
//! Every driver in this crate implements [`Sensor`]. Setters take their argument by
//! mutable reference: the request goes in, the value actually applied by the hardware
//! comes back out. This lets a caller ask for e.g. 5 Hz and learn that 10 Hz was used.

mod data;
mod setting;

pub use data::{DataFields, FLOAT_INVALID, SensorData};
pub use setting::{DspFunction, Mode, SensorConfig, Setting};

use crate::Status;

/// Name reported by a sensor that has not been initialized.
pub const NOT_INIT_NAME: &str = "NOTINIT";

/// Configurable, readable sensor.
///
/// The trait is object safe so heterogeneous sensors can be driven through
/// `&mut dyn Sensor`.
pub trait Sensor {
    /// Short human readable name, [`NOT_INIT_NAME`] until initialized.
    fn name(&self) -> &'static str;

    /// Quantities this sensor can fill in.
    fn provides(&self) -> DataFields;

    /// Whether [`Sensor::init`] has succeeded.
    fn is_init(&self) -> bool {
        self.name() != NOT_INIT_NAME
    }

    /// Probes, configures and self-tests the device, leaving it asleep.
    ///
    /// # Errors
    ///
    /// `INVALID_STATE` when already initialized, `NOT_FOUND` for a wrong device and
    /// `SELFTEST` when the self-test fails.
    fn init(&mut self) -> Result<(), Status>;

    /// Powers the device down and forgets its state.
    ///
    /// # Errors
    ///
    /// Bus errors.
    fn uninit(&mut self) -> Result<(), Status>;

    /// Requests a sample rate in Hz and writes back the rate applied.
    ///
    /// # Errors
    ///
    /// `INVALID_STATE` unless asleep, `NOT_SUPPORTED` for too high a rate.
    fn samplerate_set(&mut self, samplerate: &mut Setting) -> Result<(), Status>;

    /// Current sample rate.
    ///
    /// # Errors
    ///
    /// `INTERNAL` when the stored rate is not a known value.
    fn samplerate_get(&mut self) -> Result<Setting, Status>;

    /// Requests a resolution in bits and writes back the resolution applied.
    ///
    /// # Errors
    ///
    /// `INVALID_STATE` unless asleep, `NOT_SUPPORTED` for too fine a resolution.
    fn resolution_set(&mut self, resolution: &mut Setting) -> Result<(), Status>;

    /// Current resolution.
    ///
    /// # Errors
    ///
    /// Bus errors, `INTERNAL` for an impossible register combination.
    fn resolution_get(&mut self) -> Result<Setting, Status>;

    /// Requests a full scale and writes back the scale applied.
    ///
    /// # Errors
    ///
    /// `INVALID_STATE` unless asleep, `NOT_SUPPORTED` for too large a scale.
    fn scale_set(&mut self, scale: &mut Setting) -> Result<(), Status>;

    /// Current full scale.
    ///
    /// # Errors
    ///
    /// Bus errors.
    fn scale_get(&mut self) -> Result<Setting, Status>;

    /// Requests signal processing and writes back what was applied.
    ///
    /// # Errors
    ///
    /// `INVALID_STATE` unless asleep, `NOT_SUPPORTED` for unknown combinations.
    fn dsp_set(&mut self, function: &mut DspFunction, parameter: &mut Setting)
    -> Result<(), Status>;

    /// Current signal processing function and parameter.
    ///
    /// # Errors
    ///
    /// Bus errors.
    fn dsp_get(&mut self) -> Result<(DspFunction, Setting), Status>;

    /// Requests an operating mode and writes back the mode the sensor is in.
    ///
    /// # Errors
    ///
    /// `INVALID_STATE` for a single sample while sampling continuously.
    fn mode_set(&mut self, mode: &mut Mode) -> Result<(), Status>;

    /// Current operating mode.
    ///
    /// # Errors
    ///
    /// `NOT_INITIALIZED` on a placeholder.
    fn mode_get(&mut self) -> Result<Mode, Status>;

    /// Fills the requested fields of `data` with the latest sample.
    ///
    /// # Errors
    ///
    /// Bus errors, `INTERNAL` when the conversion state is unknown.
    fn data_get(&mut self, data: &mut SensorData) -> Result<(), Status>;

    /// Enables or disables the hardware FIFO.
    ///
    /// # Errors
    ///
    /// `NOT_IMPLEMENTED` when the sensor has no FIFO.
    fn fifo_enable(&mut self, _enable: bool) -> Result<(), Status> {
        Err(Status::NOT_IMPLEMENTED)
    }

    /// Enables or disables the FIFO watermark interrupt.
    ///
    /// # Errors
    ///
    /// `NOT_IMPLEMENTED` when the sensor has no FIFO.
    fn fifo_interrupt_enable(&mut self, _enable: bool) -> Result<(), Status> {
        Err(Status::NOT_IMPLEMENTED)
    }

    /// Drains the FIFO into `data` and returns the number of records written.
    ///
    /// # Errors
    ///
    /// `NOT_IMPLEMENTED` when the sensor has no FIFO, `NULL` for an empty slice.
    fn fifo_read(&mut self, _data: &mut [SensorData]) -> Result<usize, Status> {
        Err(Status::NOT_IMPLEMENTED)
    }

    /// Arms or disarms the level interrupt at `limit_g` and writes back the limit used.
    ///
    /// # Errors
    ///
    /// `NOT_IMPLEMENTED` when the sensor has no level interrupt, `INVALID_PARAM` for
    /// limits the hardware cannot express.
    fn level_interrupt_set(&mut self, _enable: bool, _limit_g: &mut f32) -> Result<(), Status> {
        Err(Status::NOT_IMPLEMENTED)
    }

    /// Applies a whole configuration.
    ///
    /// The sensor is put to sleep first, then rate, resolution, scale and DSP are set
    /// in that order and finally the requested mode is entered. Every step runs even if
    /// an earlier one failed; the applied values are written back into `config`.
    ///
    /// # Errors
    ///
    /// Union of the errors of every step.
    fn configuration_set(&mut self, config: &mut SensorConfig) -> Result<(), Status> {
        let mut status = Status::SUCCESS;
        let mut sleep = Mode::Sleep;
        status.merge(self.mode_set(&mut sleep));
        status.merge(self.samplerate_set(&mut config.samplerate));
        status.merge(self.resolution_set(&mut config.resolution));
        status.merge(self.scale_set(&mut config.scale));
        status.merge(self.dsp_set(&mut config.dsp_function, &mut config.dsp_parameter));
        status.merge(self.mode_set(&mut config.mode));
        status.into_result()
    }

    /// Reads back the whole configuration.
    ///
    /// Settings whose getter fails are reported as [`Setting::Invalid`].
    ///
    /// # Errors
    ///
    /// Union of the errors of every getter.
    fn configuration_get(&mut self) -> Result<SensorConfig, Status> {
        let mut status = Status::SUCCESS;
        let mut config = SensorConfig::default();
        config.samplerate = status.merge(self.samplerate_get()).unwrap_or(Setting::Invalid);
        config.resolution = status.merge(self.resolution_get()).unwrap_or(Setting::Invalid);
        config.scale = status.merge(self.scale_get()).unwrap_or(Setting::Invalid);
        if let Some((function, parameter)) = status.merge(self.dsp_get()) {
            config.dsp_function = function;
            config.dsp_parameter = parameter;
        } else {
            config.dsp_parameter = Setting::Invalid;
        }
        if let Some(mode) = status.merge(self.mode_get()) {
            config.mode = mode;
        }
        status.into_result().map(|()| config)
    }
}

/// Placeholder for a sensor slot that has no initialized driver.
///
/// Every operation fails with `NOT_INITIALIZED`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotInitialized;

impl Sensor for NotInitialized {
    fn name(&self) -> &'static str {
        NOT_INIT_NAME
    }

    fn provides(&self) -> DataFields {
        DataFields::empty()
    }

    fn init(&mut self) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn uninit(&mut self) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn samplerate_set(&mut self, _samplerate: &mut Setting) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn samplerate_get(&mut self) -> Result<Setting, Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn resolution_set(&mut self, _resolution: &mut Setting) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn resolution_get(&mut self) -> Result<Setting, Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn scale_set(&mut self, _scale: &mut Setting) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn scale_get(&mut self) -> Result<Setting, Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn dsp_set(
        &mut self,
        _function: &mut DspFunction,
        _parameter: &mut Setting,
    ) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn dsp_get(&mut self) -> Result<(DspFunction, Setting), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn mode_set(&mut self, _mode: &mut Mode) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn mode_get(&mut self) -> Result<Mode, Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn data_get(&mut self, _data: &mut SensorData) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn fifo_enable(&mut self, _enable: bool) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn fifo_interrupt_enable(&mut self, _enable: bool) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn fifo_read(&mut self, _data: &mut [SensorData]) -> Result<usize, Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn level_interrupt_set(&mut self, _enable: bool, _limit_g: &mut f32) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn configuration_set(&mut self, _config: &mut SensorConfig) -> Result<(), Status> {
        Err(Status::NOT_INITIALIZED)
    }

    fn configuration_get(&mut self) -> Result<SensorConfig, Status> {
        Err(Status::NOT_INITIALIZED)
    }
}
