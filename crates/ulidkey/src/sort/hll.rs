//! A HyperLogLog distinct-count sketch over 32-bit hashes.
//!
//! Registers keep the largest rho seen per bucket, where the bucket is the
//! top `precision` bits of the hash and rho is the 1-based position of the
//! first set bit in the rest. Estimates use small-range linear counting and
//! the 32-bit large-range correction.

pub(crate) const MIN_PRECISION: u8 = 4;
pub(crate) const MAX_PRECISION: u8 = 16;

const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HyperLogLog {
    precision: u8,
    registers: Vec<u8>,
}

impl Default for HyperLogLog {
    fn default() -> Self {
        Self::new(10)
    }
}

impl HyperLogLog {
    /// Creates an empty sketch with `2^precision` registers. `precision` is
    /// clamped to `4..=16`.
    pub fn new(precision: u8) -> Self {
        let precision = precision.clamp(MIN_PRECISION, MAX_PRECISION);
        Self {
            precision,
            registers: vec![0; 1 << precision],
        }
    }

    /// Adds a pre-hashed value.
    #[inline]
    pub fn insert_hash(&mut self, hash: u32) {
        let p = u32::from(self.precision);
        let index = (hash >> (32 - p)) as usize;
        let remaining = 32 - p;
        let w = hash << p;
        // An all-zero remainder caps rho at remaining + 1.
        let rho = if w == 0 {
            remaining + 1
        } else {
            w.leading_zeros() + 1
        };
        let rho = rho as u8;
        if let Some(reg) = self.registers.get_mut(index) {
            if rho > *reg {
                *reg = rho;
            }
        }
    }

    /// Estimates the number of distinct hashes inserted so far.
    pub fn estimate(&self) -> f64 {
        let m = self.registers.len() as f64;
        let mut sum = 0.0_f64;
        let mut zeros = 0_u32;
        for &reg in &self.registers {
            sum += 2.0_f64.powi(-i32::from(reg));
            if reg == 0 {
                zeros += 1;
            }
        }

        let raw = alpha(self.registers.len()) * m * m / sum;

        if raw <= 2.5 * m {
            if zeros > 0 {
                return m * (m / f64::from(zeros)).ln();
            }
        } else if raw > TWO_POW_32 / 30.0 {
            return -TWO_POW_32 * (1.0 - raw / TWO_POW_32).ln();
        }
        raw
    }
}

fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / m as f64),
    }
}
