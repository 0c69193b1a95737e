//! FIFO configuration and bulk reads.

mod common;

use common::*;
use embedded_hal_mock::eh1::delay::NoopDelay;
use sensor_hal::lis2dh12::{FifoMode, Lis2dh12};
use sensor_hal::{DataFields, Mode, Sensor, SensorData, Status};

#[test]
fn stream_mode_on_and_off() {
    let (mut driver, fake) = initialized(0);

    driver.fifo_enable(true).unwrap();
    assert_ne!(fake.reg(CTRL_REG5) & 0x40, 0);
    assert_eq!(fake.reg(FIFO_CTRL_REG) >> 6, FifoMode::DynamicStream as u8);

    driver.fifo_enable(false).unwrap();
    assert_eq!(fake.reg(CTRL_REG5) & 0x40, 0);
    assert_eq!(fake.reg(FIFO_CTRL_REG) >> 6, FifoMode::Bypass as u8);
}

#[test]
fn watermark_interrupt_at_last_slot() {
    let (mut driver, fake) = initialized(0);

    driver.fifo_interrupt_enable(true).unwrap();
    assert_eq!(fake.reg(FIFO_CTRL_REG) & 0x1F, 31);
    assert_eq!(fake.reg(CTRL_REG3), 0x04);

    driver.fifo_interrupt_enable(false).unwrap();
    assert_eq!(fake.reg(CTRL_REG3), 0);
}

#[test]
fn read_is_capped_by_capacity() {
    let (mut driver, fake) = initialized(1000);
    driver.fifo_enable(true).unwrap();
    driver.mode_set(&mut Mode::Continuous).unwrap();
    fake.set_reg(FIFO_SRC_REG, 9);

    let mut records = [SensorData::new(DataFields::ACCELERATION); 5];
    assert_eq!(driver.fifo_read(&mut records), Ok(5));

    for record in &records {
        assert_eq!(record.timestamp_ms, 1001);
        assert_eq!(record.valid, DataFields::ACCELERATION);
        assert_eq!(record.value(DataFields::ACCELERATION_Z_G), Some(1.024));
    }
}

#[test]
fn read_includes_output_register_sample() {
    let (mut driver, fake) = initialized(0);
    fake.set_reg(FIFO_SRC_REG, 2);

    let mut records = [SensorData::new(DataFields::ACCELERATION); 8];
    assert_eq!(driver.fifo_read(&mut records), Ok(3));
    assert!(records[..3].iter().all(|r| r.valid == DataFields::ACCELERATION));
    assert!(records[3..].iter().all(|r| r.valid.is_empty()));
}

#[test]
fn read_fills_only_requested_fields() {
    let (mut driver, fake) = initialized(0);
    fake.set_reg(FIFO_SRC_REG, 1);

    let mut records = [SensorData::new(DataFields::ACCELERATION_X_G | DataFields::TEMPERATURE_C); 2];
    assert_eq!(driver.fifo_read(&mut records), Ok(2));
    assert_eq!(records[0].valid, DataFields::ACCELERATION_X_G);
    assert_eq!(records[0].value(DataFields::TEMPERATURE_C), None);
}

#[test]
fn empty_fifo_reads_nothing() {
    let (mut driver, fake) = initialized(0);
    fake.set_reg(FIFO_SRC_REG, 0x20);

    let mut records = [SensorData::new(DataFields::ACCELERATION); 3];
    assert_eq!(driver.fifo_read(&mut records), Ok(0));
    assert!(records.iter().all(|r| r.timestamp_ms == u64::MAX));
}

#[test]
fn read_needs_somewhere_to_write() {
    let (mut driver, _fake) = initialized(0);
    assert_eq!(driver.fifo_read(&mut []), Err(Status::NULL));
}

#[test]
fn fifo_needs_init() {
    let fake = FakeLis2dh12::new();
    let mut driver = Lis2dh12::with_clock(fake.clone(), NoopDelay::new(), ticking_clock(0));
    let mut records = [SensorData::default(); 1];

    assert_eq!(driver.fifo_enable(true), Err(Status::NOT_INITIALIZED));
    assert_eq!(driver.fifo_interrupt_enable(true), Err(Status::NOT_INITIALIZED));
    assert_eq!(driver.fifo_read(&mut records), Err(Status::NOT_INITIALIZED));
    let mut limit = 0.1;
    assert_eq!(
        driver.level_interrupt_set(true, &mut limit),
        Err(Status::NOT_INITIALIZED)
    );
    assert!(fake.writes().is_empty());
}

#[test]
fn bus_error_during_read_is_reported() {
    let (mut driver, fake) = initialized(0);
    fake.set_reg(FIFO_SRC_REG, 4);
    driver.mode_set(&mut Mode::Continuous).unwrap();
    fake.set_fail(true);

    let mut records = [SensorData::new(DataFields::ACCELERATION); 5];
    assert_eq!(driver.fifo_read(&mut records), Err(Status::INTERNAL));
}
