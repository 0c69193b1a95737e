//! Sensor readings.

use bitflags::bitflags;

use crate::timestamp::TIMESTAMP_INVALID;

/// Value of a reading that could not be taken.
pub const FLOAT_INVALID: f32 = f32::NAN;

bitflags! {
    /// Physical quantities a sensor can provide.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DataFields: u32 {
        /// Acceleration along X in g.
        const ACCELERATION_X_G = 1 << 0;
        /// Acceleration along Y in g.
        const ACCELERATION_Y_G = 1 << 1;
        /// Acceleration along Z in g.
        const ACCELERATION_Z_G = 1 << 2;
        /// Angular rate around X in degrees per second.
        const GYRO_X_DPS = 1 << 3;
        /// Angular rate around Y in degrees per second.
        const GYRO_Y_DPS = 1 << 4;
        /// Angular rate around Z in degrees per second.
        const GYRO_Z_DPS = 1 << 5;
        /// Relative humidity in percent.
        const HUMIDITY_RH = 1 << 6;
        /// Pressure in pascal.
        const PRESSURE_PA = 1 << 7;
        /// Temperature in degrees Celsius.
        const TEMPERATURE_C = 1 << 8;
        /// Supply voltage in volts.
        const VOLTAGE_V = 1 << 9;
    }
}

impl DataFields {
    /// All three acceleration axes.
    pub const ACCELERATION: Self = Self::ACCELERATION_X_G
        .union(Self::ACCELERATION_Y_G)
        .union(Self::ACCELERATION_Z_G);

    /// Number of distinct quantities.
    pub const COUNT: usize = 10;

    /// Slot of a single field in [`SensorData::values`].
    fn index(self) -> Option<usize> {
        if self.bits().count_ones() == 1 && Self::all().contains(self) {
            Some(self.bits().trailing_zeros() as usize)
        } else {
            None
        }
    }
}

#[cfg(feature = "defmt-03")]
impl defmt::Format for DataFields {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DataFields({=u32:#x})", self.bits());
    }
}

/// One timestamped set of readings.
///
/// `fields` lists what the caller asked for, `valid` what has actually been filled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SensorData {
    /// Capture time in milliseconds, [`TIMESTAMP_INVALID`] when unknown.
    pub timestamp_ms: u64,
    /// Requested quantities.
    pub fields: DataFields,
    /// Quantities holding a valid reading.
    pub valid: DataFields,
    values: [f32; DataFields::COUNT],
}

impl SensorData {
    /// Empty record requesting `fields`.
    #[must_use]
    pub const fn new(fields: DataFields) -> Self {
        Self {
            timestamp_ms: TIMESTAMP_INVALID,
            fields,
            valid: DataFields::empty(),
            values: [FLOAT_INVALID; DataFields::COUNT],
        }
    }

    /// Valid reading of a single field.
    #[must_use]
    pub fn value(&self, field: DataFields) -> Option<f32> {
        let index = field.index()?;
        self.valid.contains(field).then(|| self.values[index])
    }

    /// Stores a reading and marks it valid. Multi-bit or unknown fields are ignored.
    pub fn set(&mut self, field: DataFields, value: f32) {
        if let Some(index) = field.index() {
            self.values[index] = value;
            self.valid |= field;
        }
    }

    /// Copies every reading of `source` that is valid there and requested here.
    pub fn populate(&mut self, source: &SensorData) {
        let wanted = self.fields & source.valid;
        for field in wanted.iter() {
            if let Some(value) = source.value(field) {
                self.set(field, value);
            }
        }
        if !wanted.is_empty() {
            self.timestamp_ms = source.timestamp_ms;
        }
    }

    /// Drops every reading and the timestamp, keeping the request.
    pub fn clear(&mut self) {
        *self = Self::new(self.fields);
    }
}

impl Default for SensorData {
    fn default() -> Self {
        Self::new(DataFields::empty())
    }
}
