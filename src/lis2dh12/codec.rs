//! Raw output to physical units.
//!
//! Outputs are left-justified 16-bit two's complement. Each mode first drops the unused
//! low bits with an integer division and then applies the sensitivity of the selected
//! full scale in mg/digit.

use super::registers::{Resolution, Scale};
use crate::Status;

/// ±2 g, low-power mode.
#[must_use]
pub fn from_fs2_lp_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 256) * 16.0
}

/// ±4 g, low-power mode.
#[must_use]
pub fn from_fs4_lp_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 256) * 32.0
}

/// ±8 g, low-power mode.
#[must_use]
pub fn from_fs8_lp_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 256) * 64.0
}

/// ±16 g, low-power mode.
#[must_use]
pub fn from_fs16_lp_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 256) * 192.0
}

/// ±2 g, normal mode.
#[must_use]
pub fn from_fs2_nm_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 64) * 4.0
}

/// ±4 g, normal mode.
#[must_use]
pub fn from_fs4_nm_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 64) * 8.0
}

/// ±8 g, normal mode.
#[must_use]
pub fn from_fs8_nm_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 64) * 16.0
}

/// ±16 g, normal mode.
#[must_use]
pub fn from_fs16_nm_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 64) * 48.0
}

/// ±2 g, high-resolution mode.
#[must_use]
pub fn from_fs2_hr_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 16)
}

/// ±4 g, high-resolution mode.
#[must_use]
pub fn from_fs4_hr_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 16) * 2.0
}

/// ±8 g, high-resolution mode.
#[must_use]
pub fn from_fs8_hr_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 16) * 4.0
}

/// ±16 g, high-resolution mode.
#[must_use]
pub fn from_fs16_hr_to_mg(lsb: i16) -> f32 {
    f32::from(lsb / 16) * 12.0
}

/// Temperature in low-power mode, 1 digit/°C around 25 °C.
#[must_use]
pub fn from_lsb_lp_to_celsius(lsb: i16) -> f32 {
    f32::from(lsb / 256) + 25.0
}

/// Temperature in normal mode, 4 digit/°C around 25 °C.
#[must_use]
pub fn from_lsb_nm_to_celsius(lsb: i16) -> f32 {
    f32::from(lsb / 64) / 4.0 + 25.0
}

/// Temperature in high-resolution mode, 16 digit/°C around 25 °C.
#[must_use]
pub fn from_lsb_hr_to_celsius(lsb: i16) -> f32 {
    f32::from(lsb / 16) / 16.0 + 25.0
}

/// Acceleration in mg for the given mode and scale.
///
/// # Errors
///
/// `INTERNAL` when either setting is unknown.
pub fn acceleration_mg(
    lsb: i16,
    resolution: Option<Resolution>,
    scale: Option<Scale>,
) -> Result<f32, Status> {
    let convert = match (resolution, scale) {
        (Some(Resolution::LowPower8Bit), Some(Scale::G2)) => from_fs2_lp_to_mg,
        (Some(Resolution::LowPower8Bit), Some(Scale::G4)) => from_fs4_lp_to_mg,
        (Some(Resolution::LowPower8Bit), Some(Scale::G8)) => from_fs8_lp_to_mg,
        (Some(Resolution::LowPower8Bit), Some(Scale::G16)) => from_fs16_lp_to_mg,
        (Some(Resolution::Normal10Bit), Some(Scale::G2)) => from_fs2_nm_to_mg,
        (Some(Resolution::Normal10Bit), Some(Scale::G4)) => from_fs4_nm_to_mg,
        (Some(Resolution::Normal10Bit), Some(Scale::G8)) => from_fs8_nm_to_mg,
        (Some(Resolution::Normal10Bit), Some(Scale::G16)) => from_fs16_nm_to_mg,
        (Some(Resolution::HighRes12Bit), Some(Scale::G2)) => from_fs2_hr_to_mg,
        (Some(Resolution::HighRes12Bit), Some(Scale::G4)) => from_fs4_hr_to_mg,
        (Some(Resolution::HighRes12Bit), Some(Scale::G8)) => from_fs8_hr_to_mg,
        (Some(Resolution::HighRes12Bit), Some(Scale::G16)) => from_fs16_hr_to_mg,
        _ => return Err(Status::INTERNAL),
    };
    Ok(convert(lsb))
}

/// Temperature in °C for the given mode.
///
/// # Errors
///
/// `INTERNAL` when the mode is unknown.
pub fn temperature_celsius(lsb: i16, resolution: Option<Resolution>) -> Result<f32, Status> {
    match resolution {
        Some(Resolution::LowPower8Bit) => Ok(from_lsb_lp_to_celsius(lsb)),
        Some(Resolution::Normal10Bit) => Ok(from_lsb_nm_to_celsius(lsb)),
        Some(Resolution::HighRes12Bit) => Ok(from_lsb_hr_to_celsius(lsb)),
        None => Err(Status::INTERNAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [Resolution; 3] = [
        Resolution::LowPower8Bit,
        Resolution::Normal10Bit,
        Resolution::HighRes12Bit,
    ];
    const SCALES: [Scale; 4] = [Scale::G2, Scale::G4, Scale::G8, Scale::G16];

    #[test]
    fn zero_is_zero_g() {
        for mode in MODES {
            for scale in SCALES {
                assert_eq!(acceleration_mg(0, Some(mode), Some(scale)), Ok(0.0));
            }
        }
    }

    #[test]
    fn zero_is_twenty_five_degrees() {
        for mode in MODES {
            assert_eq!(temperature_celsius(0, Some(mode)), Ok(25.0));
        }
    }

    #[test]
    fn conversion_is_monotonic() {
        let samples = [i16::MIN, -16_384, -256, -1, 0, 1, 255, 256, 16_384, i16::MAX];
        for mode in MODES {
            for scale in SCALES {
                let mut previous = f32::MIN;
                for lsb in samples {
                    let mg = acceleration_mg(lsb, Some(mode), Some(scale)).unwrap();
                    assert!(mg >= previous, "{mode:?} {scale:?} {lsb}");
                    previous = mg;
                }
            }
        }
    }

    #[test]
    fn one_g_at_two_g_scale() {
        // 1 g is 0x4000 left-justified at ±2 g.
        assert_eq!(from_fs2_hr_to_mg(0x4000), 1024.0);
        assert_eq!(from_fs2_nm_to_mg(0x4000), 1024.0);
        assert_eq!(from_fs2_lp_to_mg(0x4000), 1024.0);
    }

    #[test]
    fn sixteen_g_multipliers() {
        assert_eq!(from_fs16_hr_to_mg(16), 12.0);
        assert_eq!(from_fs16_nm_to_mg(64), 48.0);
        assert_eq!(from_fs16_lp_to_mg(256), 192.0);
    }

    #[test]
    fn integer_division_truncates_first() {
        assert_eq!(from_fs2_hr_to_mg(15), 0.0);
        assert_eq!(from_fs2_hr_to_mg(-15), 0.0);
        assert_eq!(from_fs4_nm_to_mg(127), 8.0);
    }

    #[test]
    fn temperature_steps() {
        assert_eq!(from_lsb_lp_to_celsius(256), 26.0);
        assert_eq!(from_lsb_nm_to_celsius(256), 26.0);
        assert_eq!(from_lsb_hr_to_celsius(256), 26.0);
        assert_eq!(from_lsb_hr_to_celsius(-256), 24.0);
    }

    #[test]
    fn unknown_settings_are_internal() {
        assert_eq!(acceleration_mg(1, None, Some(Scale::G2)), Err(Status::INTERNAL));
        assert_eq!(
            acceleration_mg(1, Some(Resolution::Normal10Bit), None),
            Err(Status::INTERNAL)
        );
        assert_eq!(temperature_celsius(1, None), Err(Status::INTERNAL));
    }
}
