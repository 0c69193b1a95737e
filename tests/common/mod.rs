//! In-memory LIS2DH12 register file shared by the driver tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use device_driver::RegisterInterface;
use embedded_hal_mock::eh1::delay::NoopDelay;
use sensor_hal::Status;
use sensor_hal::lis2dh12::Lis2dh12;

pub const WHO_AM_I: u8 = 0x0F;
pub const TEMP_CFG_REG: u8 = 0x1F;
pub const CTRL_REG1: u8 = 0x20;
pub const CTRL_REG2: u8 = 0x21;
pub const CTRL_REG3: u8 = 0x22;
pub const CTRL_REG4: u8 = 0x23;
pub const CTRL_REG5: u8 = 0x24;
pub const CTRL_REG6: u8 = 0x25;
pub const OUT_TEMP_L: u8 = 0x0C;
pub const OUT_X_L: u8 = 0x28;
pub const FIFO_CTRL_REG: u8 = 0x2E;
pub const FIFO_SRC_REG: u8 = 0x2F;
pub const INT1_CFG: u8 = 0x30;
pub const INT1_THS: u8 = 0x32;

/// Baseline output, 1 g on Z at ±2 g.
pub const BASELINE: [i16; 3] = [0, 0, 0x4000];
/// Self-test response of 100 counts after the 10-bit justification.
pub const STIMULUS: i16 = 100 << 6;

pub struct Registers {
    pub regs: [u8; 0x40],
    /// Every register write as `(address, value)`, bursts split per byte.
    pub writes: Vec<(u8, u8)>,
    pub baseline: [i16; 3],
    pub positive: [i16; 3],
    pub negative: [i16; 3],
    pub fail: bool,
}

impl Registers {
    fn output(&self) -> [i16; 3] {
        match (self.regs[usize::from(CTRL_REG4)] >> 1) & 0b11 {
            1 => self.positive,
            2 => self.negative,
            _ => self.baseline,
        }
    }

    pub fn odr(&self) -> u8 {
        self.regs[usize::from(CTRL_REG1)] >> 4
    }

    pub fn last_write(&self, address: u8) -> Option<u8> {
        self.writes
            .iter()
            .rev()
            .find(|(a, _)| *a == address)
            .map(|(_, v)| *v)
    }
}

/// Cloneable handle: the driver owns one clone, the test keeps another.
#[derive(Clone)]
pub struct FakeLis2dh12(pub Rc<RefCell<Registers>>);

impl FakeLis2dh12 {
    /// Healthy chip whose self-test response is well inside the accepted band.
    pub fn new() -> Self {
        let mut regs = [0u8; 0x40];
        regs[usize::from(WHO_AM_I)] = 0x33;
        regs[usize::from(CTRL_REG1)] = 0x07;
        let [x, y, z] = BASELINE;
        Self(Rc::new(RefCell::new(Registers {
            regs,
            writes: Vec::new(),
            baseline: BASELINE,
            positive: [x + STIMULUS, y + STIMULUS, z + STIMULUS],
            negative: [x - STIMULUS, y - STIMULUS, z - STIMULUS],
            fail: false,
        })))
    }

    pub fn with_who_am_i(self, id: u8) -> Self {
        self.0.borrow_mut().regs[usize::from(WHO_AM_I)] = id;
        self
    }

    /// Chip whose stimulus does not move the output.
    pub fn with_dead_selftest(self) -> Self {
        {
            let mut inner = self.0.borrow_mut();
            inner.positive = inner.baseline;
            inner.negative = inner.baseline;
        }
        self
    }

    pub fn reg(&self, address: u8) -> u8 {
        self.0.borrow().regs[usize::from(address)]
    }

    pub fn set_reg(&self, address: u8, value: u8) {
        self.0.borrow_mut().regs[usize::from(address)] = value;
    }

    pub fn set_output(&self, output: [i16; 3]) {
        self.0.borrow_mut().baseline = output;
    }

    pub fn set_temperature(&self, lsb: i16) {
        let [l, h] = lsb.to_le_bytes();
        self.set_reg(OUT_TEMP_L, l);
        self.set_reg(OUT_TEMP_L + 1, h);
    }

    pub fn odr(&self) -> u8 {
        self.0.borrow().odr()
    }

    pub fn clear_writes(&self) {
        self.0.borrow_mut().writes.clear();
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.0.borrow().writes.clone()
    }

    pub fn last_write(&self, address: u8) -> Option<u8> {
        self.0.borrow().last_write(address)
    }

    pub fn set_fail(&self, fail: bool) {
        self.0.borrow_mut().fail = fail;
    }
}

impl RegisterInterface for FakeLis2dh12 {
    type Error = Status;
    type AddressType = u8;

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut inner = self.0.borrow_mut();
        if inner.fail {
            return Err(Status::INTERNAL);
        }
        for (offset, value) in data.iter().enumerate() {
            let address = address + u8::try_from(offset).unwrap();
            inner.regs[usize::from(address)] = *value;
            inner.writes.push((address, *value));
        }
        Ok(())
    }

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let inner = self.0.borrow();
        if inner.fail {
            return Err(Status::INTERNAL);
        }
        if address == OUT_X_L {
            let bytes: Vec<u8> = inner.output().iter().flat_map(|v| v.to_le_bytes()).collect();
            data.copy_from_slice(&bytes[..data.len()]);
        } else {
            let start = usize::from(address);
            data.copy_from_slice(&inner.regs[start..start + data.len()]);
        }
        Ok(())
    }
}

pub type Driver<C> = Lis2dh12<FakeLis2dh12, NoopDelay, C>;

/// Millisecond clock advancing by one on every read.
pub fn ticking_clock(start: u64) -> impl FnMut() -> u64 {
    let mut now = start;
    move || {
        now += 1;
        now
    }
}

/// Initialized driver on a healthy fake, with its register handle.
pub fn initialized(start: u64) -> (Driver<impl FnMut() -> u64>, FakeLis2dh12) {
    use sensor_hal::Sensor;

    let fake = FakeLis2dh12::new();
    let mut driver = Lis2dh12::with_clock(fake.clone(), NoopDelay::new(), ticking_clock(start));
    driver.init().unwrap();
    fake.clear_writes();
    (driver, fake)
}
