/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

use embedded_hal_mock::delay::MockNoop;
use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

use ov5640_i2c::{Error, MirrorFlip, Ov5640, Polarity, DEFAULT_I2C_ADDRESS};

const ADDR: u8 = DEFAULT_I2C_ADDRESS;

/// Address phase and data phase of a single register read
fn reg_read(reg: u16, val: u8) -> [I2cTransaction; 2] {
    [
        I2cTransaction::write(ADDR, reg.to_be_bytes().to_vec()),
        I2cTransaction::read(ADDR, vec![val]),
    ]
}

fn reg_write(reg: u16, val: u8) -> I2cTransaction {
    let [hi, lo] = reg.to_be_bytes();
    I2cTransaction::write(ADDR, vec![hi, lo, val])
}

#[test]
fn read_id_resets_then_reads_both_id_bytes() {
    let mut expectations = vec![reg_write(0x3008, 0x80)];
    expectations.extend_from_slice(&reg_read(0x300A, 0x56));
    expectations.extend_from_slice(&reg_read(0x300B, 0x40));

    let mut sensor = Ov5640::default(I2cMock::new(&expectations));
    let id = sensor.read_id(&mut MockNoop::new()).unwrap();
    assert_eq!(id, 0x5640);

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn chip_check_rejects_unexpected_id() {
    let mut expectations = vec![reg_write(0x3008, 0x80)];
    expectations.extend_from_slice(&reg_read(0x300A, 0x76));
    expectations.extend_from_slice(&reg_read(0x300B, 0x73));

    let mut sensor = Ov5640::default(I2cMock::new(&expectations));
    assert!(matches!(
        sensor.probe(&mut MockNoop::new()),
        Err(Error::UnknownChipId)
    ));

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn polarity_register_layout() {
    let mut expectations = vec![reg_write(0x4740, 0x21)];
    expectations.extend_from_slice(&reg_read(0x4740, 0x22));

    let mut sensor = Ov5640::default(I2cMock::new(&expectations));
    sensor
        .set_polarities(
            Polarity::ActiveHigh,
            Polarity::ActiveLow,
            Polarity::ActiveLow,
        )
        .unwrap();
    assert_eq!(
        sensor.get_polarities().unwrap(),
        (Polarity::ActiveHigh, Polarity::ActiveHigh, Polarity::ActiveHigh)
    );

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn stream_start_and_stop() {
    let expectations = [reg_write(0x3008, 0x02), reg_write(0x3008, 0x42)];
    let mut sensor = Ov5640::default(I2cMock::new(&expectations));
    sensor.start().unwrap();
    sensor.stop().unwrap();

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn mirror_reads_both_timing_registers_before_writing() {
    let mut expectations = Vec::new();
    expectations.extend_from_slice(&reg_read(0x3820, 0x40));
    expectations.extend_from_slice(&reg_read(0x3821, 0x01));
    expectations.push(reg_write(0x3820, 0x40));
    expectations.push(reg_write(0x3821, 0x07));

    let mut sensor = Ov5640::default(I2cMock::new(&expectations));
    sensor.mirror_flip(MirrorFlip::Mirror).unwrap();

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn virtual_channel_keeps_low_bits() {
    let mut expectations = Vec::new();
    expectations.extend_from_slice(&reg_read(0x4814, 0x2A));
    expectations.push(reg_write(0x4814, 0x6A));

    let mut sensor = Ov5640::default(I2cMock::new(&expectations));
    sensor.set_mipi_virtual_channel(1).unwrap();

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn custom_address_is_used() {
    let expectations = [I2cTransaction::write(0x3D, vec![0x30, 0x08, 0x02])];
    let mut sensor = Ov5640::new(I2cMock::new(&expectations), 0x3D);
    sensor.start().unwrap();

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn brightness_out_of_range_issues_no_transactions() {
    let mut sensor = Ov5640::default(I2cMock::new(&[]));
    assert!(matches!(sensor.set_brightness(9), Err(Error::InvalidArgument)));
    assert!(matches!(sensor.set_hue_degree(-7), Err(Error::InvalidArgument)));

    let mut i2c = sensor.release();
    i2c.done();
}
