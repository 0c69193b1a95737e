//! STMicroelectronics LIS2DH12 3-axis accelerometer.
//!
//! [`Lis2dh12`] owns a register transport, a delay and a clock. It starts out
//! uninitialized; [`Sensor::init`] probes the chip, runs the self-test and leaves it
//! powered down. Configuration is only accepted while the sensor sleeps and the sample
//! rate is written to the chip when sampling starts, since writing the rate register
//! is what starts the conversion.
//!
//! ```no_run
//! # fn run<SPI: embedded_hal::spi::SpiDevice, D: embedded_hal::delay::DelayNs>(spi: SPI, delay: D) {
//! use sensor_hal::lis2dh12::{Lis2dh12, SpiInterface};
//! use sensor_hal::sensor::{DataFields, Mode, Sensor, SensorData, Setting};
//!
//! let mut accel = Lis2dh12::new(SpiInterface::new(spi), delay);
//! accel.init().unwrap();
//!
//! let mut rate = Setting::Value(10);
//! accel.samplerate_set(&mut rate).unwrap();
//! accel.mode_set(&mut Mode::Continuous).unwrap();
//!
//! let mut data = SensorData::new(DataFields::ACCELERATION);
//! accel.data_get(&mut data).unwrap();
//! # }
//! ```

pub mod codec;
mod interface;
mod registers;
mod selftest;
mod state;

use accelerometer::vector::{F32x3, I16x3};
use accelerometer::{Accelerometer, Error as AccelError, ErrorKind, RawAccelerometer};
use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;
use num_traits::FromPrimitive;

#[cfg(feature = "async")]
pub use interface::{I2cInterfaceAsync, SpiInterfaceAsync};
pub use interface::{I2cInterface, SlaveAddr, SpiInterface};
pub use registers::{
    FIFO_LATEST_SAMPLE, FifoMode, HighPassCutoff, Lis2dh12Registers, Odr, Resolution, Scale,
    SelfTest, WHO_AM_I_VALUE,
};
pub use state::DeviceState;

use crate::Status;
use crate::log::{debug, info, trace, warn};
use crate::sensor::{
    DataFields, DspFunction, Mode, NOT_INIT_NAME, Sensor, SensorData, Setting,
};
use crate::timestamp::{Clock, SystemClock, TIMESTAMP_INVALID};
use registers::{HPM_NORMAL, OUT_TEMP_L, OUT_X_L, TEMP_EN_ON};

/// Name reported once initialized.
pub const NAME: &str = "LIS2DH12";

/// Turn-on time of a single sample: 7 samples at 400 Hz, rounded up.
const SINGLE_SAMPLE_DELAY_MS: u32 = 7000 / 400 + 1;

/// LIS2DH12 driver.
pub struct Lis2dh12<I, D, C = SystemClock> {
    device: Lis2dh12Registers<I>,
    delay: D,
    clock: C,
    state: DeviceState,
    name: &'static str,
    provides: DataFields,
}

impl<I, D> Lis2dh12<I, D, SystemClock>
where
    I: RegisterInterface<AddressType = u8, Error = Status>,
    D: DelayNs,
{
    /// Creates an uninitialized driver timestamping with [`SystemClock`].
    ///
    /// No bus traffic happens until [`Sensor::init`].
    pub fn new(interface: I, delay: D) -> Self {
        Self::with_clock(interface, delay, SystemClock)
    }
}

impl<I, D, C> Lis2dh12<I, D, C>
where
    I: RegisterInterface<AddressType = u8, Error = Status>,
    D: DelayNs,
    C: Clock,
{
    /// Creates an uninitialized driver with its own clock.
    pub fn with_clock(interface: I, delay: D, clock: C) -> Self {
        Self {
            device: Lis2dh12Registers::new(interface),
            delay,
            clock,
            state: DeviceState::default(),
            name: NOT_INIT_NAME,
            provides: DataFields::empty(),
        }
    }

    /// Consumes the driver and returns the transport and the delay.
    pub fn destroy(self) -> (I, D) {
        let Lis2dh12Registers { interface, .. } = self.device;
        (interface, self.delay)
    }

    /// Cached device configuration.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Access the generated device API for advanced register operations.
    pub fn device(&mut self) -> &mut Lis2dh12Registers<I> {
        &mut self.device
    }

    fn verify_initialized(&self) -> Result<(), Status> {
        if self.is_init() {
            Ok(())
        } else {
            Err(Status::NOT_INITIALIZED)
        }
    }

    fn verify_sleeping(&self) -> Result<(), Status> {
        self.verify_initialized()?;
        if self.state.mode == Mode::Sleep {
            Ok(())
        } else {
            Err(Status::INVALID_STATE)
        }
    }

    fn read_raw_acceleration(&mut self) -> Result<[i16; 3], Status> {
        let mut buf = [0u8; 6];
        self.device.interface.read_register(OUT_X_L, 48, &mut buf)?;

        let x = i16::from_le_bytes([buf[0], buf[1]]);
        let y = i16::from_le_bytes([buf[2], buf[3]]);
        let z = i16::from_le_bytes([buf[4], buf[5]]);

        Ok([x, y, z])
    }

    fn read_raw_temperature(&mut self) -> Result<i16, Status> {
        let mut buf = [0u8; 2];
        self.device
            .interface
            .read_register(OUT_TEMP_L, 16, &mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    /// Converts a raw sample with the cached resolution and scale.
    fn acceleration_g(&self, raw: [i16; 3]) -> Result<[f32; 3], Status> {
        let mut g = [0.0; 3];
        for (out, lsb) in g.iter_mut().zip(raw) {
            *out = codec::acceleration_mg(lsb, self.state.resolution, self.state.scale)? / 1000.0;
        }
        Ok(g)
    }

    fn odr_write(&mut self, odr: Odr) -> Result<(), Status> {
        trace!("LIS2DH12 ODR {}", odr);
        self.device.ctrl_reg_1().modify(|r| r.set_odr(odr as u8))
    }

    fn resolution_write(&mut self, resolution: Resolution) -> Result<(), Status> {
        let (lpen, hr) = resolution.flags();
        self.device.ctrl_reg_1().modify(|r| r.set_lpen(lpen))?;
        self.device.ctrl_reg_4().modify(|r| r.set_hr(hr))
    }

    fn fifo_use(&mut self, enable: bool) -> Result<(), Status> {
        let mode = if enable {
            FifoMode::DynamicStream
        } else {
            FifoMode::Bypass
        };
        let mut status = Status::SUCCESS;
        status.merge(self.device.ctrl_reg_5().modify(|r| r.set_fifo_en(enable)));
        status.merge(self.device.fifo_ctrl_reg().modify(|r| r.set_fm(mode as u8)));
        status.into_result()
    }

    fn fifo_interrupt_use(&mut self, enable: bool) -> Result<(), Status> {
        let mut status = Status::SUCCESS;
        if enable {
            status.merge(
                self.device
                    .fifo_ctrl_reg()
                    .modify(|r| r.set_fth(FIFO_LATEST_SAMPLE)),
            );
        }
        status.merge(self.device.ctrl_reg_3().write(|r| r.set_wtm(enable)));
        status.into_result()
    }

    /// Arms interrupt generator 1 on high events of any axis and routes it to INT2.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn activity_interrupt_use(&mut self, enable: bool, limit_g: &mut f32) -> Result<(), Status> {
        if !(*limit_g >= 0.0) {
            return Err(Status::INVALID_PARAM);
        }

        let mut status = Status::SUCCESS;
        // g per threshold LSB
        let lsb = match status.merge(self.scale_read()) {
            Some(Scale::G4) => 0.032,
            Some(Scale::G8) => 0.062,
            Some(Scale::G16) => 0.186,
            Some(Scale::G2) | None => 0.016,
        };

        // INT1_THS holds 7 bits
        let steps = *limit_g / lsb;
        if !steps.is_finite() || steps >= 127.0 {
            return Err(Status::INVALID_PARAM);
        }
        let threshold = steps as u32 + 1;
        *limit_g = threshold as f32 * lsb;
        debug!("LIS2DH12 activity threshold {=u32}", threshold);

        status.merge(self.device.ctrl_reg_2().modify(|r| {
            r.set_hp_ia_one(true);
            r.set_hp_ia_two(false);
            r.set_hp_click(false);
        }));
        status.merge(
            self.device
                .int_one_ths()
                .modify(|r| r.set_ths(threshold as u8)),
        );
        // Low events would turn this into inactivity detection.
        status.merge(self.device.int_one_cfg().write(|r| {
            r.set_xhie(enable);
            r.set_yhie(enable);
            r.set_zhie(enable);
        }));
        status.merge(self.device.ctrl_reg_6().write(|r| r.set_ia_one_pin_two(true)));
        status.into_result()
    }

    fn resolution_read(&mut self) -> Result<Resolution, Status> {
        let lpen = self.device.ctrl_reg_1().read()?.lpen();
        let hr = self.device.ctrl_reg_4().read()?.hr();
        self.state.resolution = Resolution::from_flags(lpen, hr);
        self.state.resolution.ok_or(Status::INTERNAL)
    }

    fn scale_read(&mut self) -> Result<Scale, Status> {
        let fs = self.device.ctrl_reg_4().read()?.fs();
        self.state.scale = Scale::from_u8(fs);
        self.state.scale.ok_or(Status::INTERNAL)
    }

    fn configure(&mut self) -> Result<(), Status> {
        let mut status = Status::SUCCESS;
        let mut ths = 0.0;

        status.merge(self.fifo_use(false));
        status.merge(self.fifo_interrupt_use(false));
        status.merge(self.activity_interrupt_use(false, &mut ths));
        status.merge(self.device.ctrl_reg_1().write(|r| {
            r.set_xen(true);
            r.set_yen(true);
            r.set_zen(true);
        }));
        status.merge(self.device.ctrl_reg_4().modify(|r| r.set_bdu(true)));
        status.merge(self.device.ctrl_reg_2().modify(|r| r.set_fds(false)));

        self.state.rate = Some(Odr::Hz400);
        status.merge(self.odr_write(Odr::Hz400));
        self.state.scale = Some(Scale::G2);
        status.merge(self.device.ctrl_reg_4().modify(|r| r.set_fs(Scale::G2 as u8)));
        status.merge(self.device.temp_cfg_reg().modify(|r| r.set_temp_en(TEMP_EN_ON)));
        self.state.resolution = Some(Resolution::Normal10Bit);
        status.merge(self.resolution_write(Resolution::Normal10Bit));

        status.merge(self.selftest());

        self.state.rate = Some(Odr::PowerDown);
        status.merge(self.odr_write(Odr::PowerDown));
        status.into_result()
    }
}

/// Rate applied for a request, `None` when the request is above what the chip does.
fn odr_for(samplerate: Setting) -> Option<Odr> {
    match samplerate {
        Setting::Default | Setting::Min | Setting::Value(0 | 1) => Some(Odr::Hz1),
        Setting::Value(2..=10) => Some(Odr::Hz10),
        Setting::Value(11..=25) => Some(Odr::Hz25),
        Setting::Value(26..=50) => Some(Odr::Hz50),
        Setting::Value(51..=100) => Some(Odr::Hz100),
        Setting::Value(101..=200) => Some(Odr::Hz200),
        Setting::Custom1 => Some(Odr::Hz400),
        Setting::Custom2 => Some(Odr::Khz1620LowPower),
        Setting::Custom3 | Setting::Max => Some(Odr::Khz1344),
        Setting::Value(_) | Setting::NoChange | Setting::NotSupported | Setting::Invalid => None,
    }
}

fn resolution_for(resolution: Setting) -> Option<Resolution> {
    match resolution {
        Setting::Min | Setting::Value(0..=8) => Some(Resolution::LowPower8Bit),
        Setting::Default | Setting::Value(9..=10) => Some(Resolution::Normal10Bit),
        Setting::Max | Setting::Value(11..=12) => Some(Resolution::HighRes12Bit),
        _ => None,
    }
}

fn scale_for(scale: Setting) -> Option<Scale> {
    match scale {
        Setting::Default | Setting::Min | Setting::Value(0..=2) => Some(Scale::G2),
        Setting::Value(3..=4) => Some(Scale::G4),
        Setting::Value(5..=8) => Some(Scale::G8),
        Setting::Max | Setting::Value(9..=16) => Some(Scale::G16),
        _ => None,
    }
}

/// High-pass intensity `0..=3` for a request, `None` when out of range.
fn highpass_parameter_for(parameter: Setting) -> Option<u8> {
    match parameter {
        Setting::Default | Setting::Min | Setting::Value(0) => Some(0),
        Setting::Value(p @ 1..=2) => Some(p),
        Setting::Max | Setting::Value(3) => Some(3),
        _ => None,
    }
}

/// Writes the outcome of a getter into an in/out parameter.
fn report<T: Copy>(out: &mut T, result: Result<T, Status>, on_error: T) -> Result<(), Status> {
    match result {
        Ok(value) => {
            *out = value;
            Ok(())
        }
        Err(status) => {
            *out = on_error;
            Err(status)
        }
    }
}

impl<I, D, C> Sensor for Lis2dh12<I, D, C>
where
    I: RegisterInterface<AddressType = u8, Error = Status>,
    D: DelayNs,
    C: Clock,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn provides(&self) -> DataFields {
        self.provides
    }

    fn init(&mut self) -> Result<(), Status> {
        if self.is_init() {
            return Err(Status::INVALID_STATE);
        }
        self.state = DeviceState::default();

        let id = self.device.who_am_i().read()?.id();
        if id != WHO_AM_I_VALUE {
            warn!("LIS2DH12 not found, WHO_AM_I {=u8:#x}", id);
            return Err(Status::NOT_FOUND);
        }

        if let Err(status) = self.configure() {
            self.state = DeviceState::default();
            return Err(status);
        }

        self.name = NAME;
        self.provides = DataFields::ACCELERATION | DataFields::TEMPERATURE_C;
        self.state.rate = Some(Odr::Hz1);
        self.state.mode = Mode::Sleep;
        self.state.tsample = TIMESTAMP_INVALID;
        info!("LIS2DH12 initialized");
        Ok(())
    }

    fn uninit(&mut self) -> Result<(), Status> {
        self.name = NOT_INIT_NAME;
        self.provides = DataFields::empty();
        let result = self.odr_write(Odr::PowerDown);
        self.state = DeviceState::default();
        result
    }

    fn samplerate_set(&mut self, samplerate: &mut Setting) -> Result<(), Status> {
        self.verify_sleeping()?;
        if *samplerate != Setting::NoChange {
            let Some(rate) = odr_for(*samplerate) else {
                *samplerate = Setting::NotSupported;
                return Err(Status::NOT_SUPPORTED);
            };
            self.state.rate = Some(rate);
        }
        let current = self.samplerate_get();
        report(samplerate, current, Setting::NotSupported)
    }

    fn samplerate_get(&mut self) -> Result<Setting, Status> {
        self.verify_initialized()?;
        match self.state.rate {
            Some(Odr::Hz1) => Ok(Setting::Value(1)),
            Some(Odr::Hz10) => Ok(Setting::Value(10)),
            Some(Odr::Hz25) => Ok(Setting::Value(25)),
            Some(Odr::Hz50) => Ok(Setting::Value(50)),
            Some(Odr::Hz100) => Ok(Setting::Value(100)),
            Some(Odr::Hz200) => Ok(Setting::Value(200)),
            Some(Odr::Hz400) => Ok(Setting::Custom1),
            Some(Odr::Khz1620LowPower) => Ok(Setting::Custom2),
            Some(Odr::Khz1344) => Ok(Setting::Max),
            Some(Odr::PowerDown) | None => Err(Status::INTERNAL),
        }
    }

    fn resolution_set(&mut self, resolution: &mut Setting) -> Result<(), Status> {
        self.verify_sleeping()?;
        if *resolution != Setting::NoChange {
            let Some(mode) = resolution_for(*resolution) else {
                *resolution = Setting::NotSupported;
                return Err(Status::NOT_SUPPORTED);
            };
            self.state.resolution = Some(mode);
            self.resolution_write(mode)?;
        }
        let current = self.resolution_get();
        report(resolution, current, Setting::Invalid)
    }

    fn resolution_get(&mut self) -> Result<Setting, Status> {
        self.verify_initialized()?;
        self.resolution_read()
            .map(|resolution| Setting::Value(resolution.bits()))
    }

    fn scale_set(&mut self, scale: &mut Setting) -> Result<(), Status> {
        self.verify_sleeping()?;
        if *scale != Setting::NoChange {
            let Some(fs) = scale_for(*scale) else {
                *scale = Setting::NotSupported;
                return Err(Status::NOT_SUPPORTED);
            };
            self.state.scale = Some(fs);
            self.device.ctrl_reg_4().modify(|r| r.set_fs(fs as u8))?;
        }
        let current = self.scale_get();
        report(scale, current, Setting::NotSupported)
    }

    fn scale_get(&mut self) -> Result<Setting, Status> {
        self.verify_initialized()?;
        self.scale_read().map(|scale| Setting::Value(scale.g()))
    }

    fn dsp_set(
        &mut self,
        function: &mut DspFunction,
        parameter: &mut Setting,
    ) -> Result<(), Status> {
        self.verify_sleeping()?;
        // Resolve against the live register so toggling one half keeps the other.
        let (current_function, current_parameter) = self.dsp_get()?;
        if *function == DspFunction::NoChange {
            *function = current_function;
        }
        if *parameter == Setting::NoChange {
            *parameter = current_parameter;
        }

        match *function {
            DspFunction::HighPass => {
                let Some(p) = highpass_parameter_for(*parameter) else {
                    *parameter = Setting::NotSupported;
                    return Err(Status::NOT_SUPPORTED);
                };
                *parameter = Setting::Value(p);
                self.device.ctrl_reg_2().modify(|r| {
                    r.set_hpcf(3 - p);
                    r.set_hpm(HPM_NORMAL);
                    r.set_fds(true);
                })
            }
            DspFunction::Last | DspFunction::Default => {
                *function = DspFunction::Last;
                self.device.ctrl_reg_2().modify(|r| r.set_fds(false))
            }
            _ => Err(Status::NOT_SUPPORTED),
        }
    }

    fn dsp_get(&mut self) -> Result<(DspFunction, Setting), Status> {
        self.verify_initialized()?;
        let reg = self.device.ctrl_reg_2().read()?;
        let function = if reg.fds() {
            DspFunction::HighPass
        } else {
            DspFunction::Last
        };
        let parameter = match HighPassCutoff::from_u8(reg.hpcf()) {
            Some(HighPassCutoff::Light) => 0,
            Some(HighPassCutoff::Medium) => 1,
            Some(HighPassCutoff::Strong) => 2,
            Some(HighPassCutoff::Aggressive) => 3,
            None => return Err(Status::INTERNAL),
        };
        Ok((function, Setting::Value(parameter)))
    }

    fn mode_set(&mut self, mode: &mut Mode) -> Result<(), Status> {
        self.verify_initialized()?;
        match *mode {
            Mode::Single => {
                if self.state.mode == Mode::Continuous {
                    *mode = Mode::Continuous;
                    return Err(Status::INVALID_STATE);
                }
                let mut status = Status::SUCCESS;
                status.merge(self.odr_write(Odr::Hz400));
                self.delay.delay_ms(SINGLE_SAMPLE_DELAY_MS);
                self.state.tsample = self.clock.now_ms();
                status.merge(self.odr_write(Odr::PowerDown));
                self.state.mode = Mode::Sleep;
                *mode = Mode::Sleep;
                status.into_result()
            }
            Mode::Sleep => {
                self.state.mode = Mode::Sleep;
                self.odr_write(Odr::PowerDown)
            }
            Mode::Continuous => {
                let rate = self.state.rate.ok_or(Status::INTERNAL)?;
                self.state.mode = Mode::Continuous;
                debug!("LIS2DH12 continuous at {}", rate);
                self.odr_write(rate)
            }
        }
    }

    fn mode_get(&mut self) -> Result<Mode, Status> {
        self.verify_initialized()?;
        Ok(self.state.mode)
    }

    fn data_get(&mut self, data: &mut SensorData) -> Result<(), Status> {
        self.verify_initialized()?;
        let mut status = Status::SUCCESS;

        let raw_acceleration = status.merge(self.read_raw_acceleration());
        let raw_temperature = status.merge(self.read_raw_temperature());
        let acceleration = raw_acceleration.and_then(|raw| status.merge(self.acceleration_g(raw)));
        let temperature = raw_temperature.and_then(|raw| {
            status.merge(codec::temperature_celsius(raw, self.state.resolution))
        });

        data.timestamp_ms = match self.state.mode {
            Mode::Sleep => self.state.tsample,
            Mode::Continuous => self.clock.now_ms(),
            Mode::Single => {
                status |= Status::INTERNAL;
                TIMESTAMP_INVALID
            }
        };

        if data.timestamp_ms == TIMESTAMP_INVALID || !status.is_empty() {
            return status.into_result();
        }
        if let (Some([x, y, z]), Some(temperature)) = (acceleration, temperature) {
            let mut sample = SensorData::new(self.provides);
            sample.timestamp_ms = data.timestamp_ms;
            sample.set(DataFields::ACCELERATION_X_G, x);
            sample.set(DataFields::ACCELERATION_Y_G, y);
            sample.set(DataFields::ACCELERATION_Z_G, z);
            sample.set(DataFields::TEMPERATURE_C, temperature);
            data.populate(&sample);
        }

        status.into_result()
    }

    fn fifo_enable(&mut self, enable: bool) -> Result<(), Status> {
        self.verify_initialized()?;
        self.fifo_use(enable)
    }

    fn fifo_interrupt_enable(&mut self, enable: bool) -> Result<(), Status> {
        self.verify_initialized()?;
        self.fifo_interrupt_use(enable)
    }

    fn fifo_read(&mut self, data: &mut [SensorData]) -> Result<usize, Status> {
        self.verify_initialized()?;
        if data.is_empty() {
            return Err(Status::NULL);
        }

        let level = self.device.fifo_src_reg().read()?.fss();
        if level == 0 {
            return Ok(0);
        }
        // FSS counts the stored samples, the output registers hold one more.
        let count = usize::from(level + 1).min(data.len());

        let timestamp = self.clock.now_ms();
        let mut status = Status::SUCCESS;
        for record in &mut data[..count] {
            let Some(raw) = status.merge(self.read_raw_acceleration()) else {
                continue;
            };
            let Some([x, y, z]) = status.merge(self.acceleration_g(raw)) else {
                continue;
            };
            let mut sample = SensorData::new(DataFields::ACCELERATION);
            sample.timestamp_ms = timestamp;
            sample.set(DataFields::ACCELERATION_X_G, x);
            sample.set(DataFields::ACCELERATION_Y_G, y);
            sample.set(DataFields::ACCELERATION_Z_G, z);
            record.populate(&sample);
        }

        status.into_result().map(|()| count)
    }

    fn level_interrupt_set(&mut self, enable: bool, limit_g: &mut f32) -> Result<(), Status> {
        self.verify_initialized()?;
        self.activity_interrupt_use(enable, limit_g)
    }
}

fn accel_error(status: Status) -> AccelError<Status> {
    let kind = if status.intersects(Status::NOT_INITIALIZED | Status::INVALID_STATE) {
        ErrorKind::Mode
    } else if status.intersects(Status::INVALID_PARAM | Status::NOT_SUPPORTED) {
        ErrorKind::Param
    } else if status.contains(Status::INTERNAL) {
        ErrorKind::Bus
    } else {
        ErrorKind::Device
    };
    AccelError::new_with_cause(kind, status)
}

impl<I, D, C> RawAccelerometer<I16x3> for Lis2dh12<I, D, C>
where
    I: RegisterInterface<AddressType = u8, Error = Status>,
    D: DelayNs,
    C: Clock,
{
    type Error = Status;

    fn accel_raw(&mut self) -> Result<I16x3, AccelError<Status>> {
        let [x, y, z] = self.read_raw_acceleration().map_err(accel_error)?;
        Ok(I16x3::new(x, y, z))
    }
}

impl<I, D, C> Accelerometer for Lis2dh12<I, D, C>
where
    I: RegisterInterface<AddressType = u8, Error = Status>,
    D: DelayNs,
    C: Clock,
{
    type Error = Status;

    fn accel_norm(&mut self) -> Result<F32x3, AccelError<Status>> {
        let raw = self.read_raw_acceleration().map_err(accel_error)?;
        let [x, y, z] = self.acceleration_g(raw).map_err(accel_error)?;
        Ok(F32x3::new(x, y, z))
    }

    fn sample_rate(&mut self) -> Result<f32, AccelError<Status>> {
        let rate = self.state.rate.ok_or(Status::INTERNAL).map_err(accel_error)?;
        let resolution = self.state.resolution.unwrap_or(Resolution::Normal10Bit);
        Ok(rate.hz(resolution))
    }
}

/// Reads `WHO_AM_I` over an asynchronous transport.
///
/// # Errors
///
/// Bus errors, `NOT_FOUND` when the chip does not identify as a LIS2DH12.
#[cfg(feature = "async")]
pub async fn probe_async<I>(interface: I) -> Result<I, Status>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8, Error = Status>,
{
    let mut device = Lis2dh12Registers::new(interface);
    let id = device.who_am_i().read_async().await?.id();
    if id != WHO_AM_I_VALUE {
        warn!("LIS2DH12 not found, WHO_AM_I {=u8:#x}", id);
        return Err(Status::NOT_FOUND);
    }
    let Lis2dh12Registers { interface, .. } = device;
    Ok(interface)
}
