use std::collections::HashMap;

use tracing::debug;

use super::{RecoveryError, RecoveryParams};
use crate::curve::{BASE8, Point};

/// Precomputed baby steps for recovering `m` from `m · BASE8`.
#[derive(Clone, Debug)]
pub struct BabyStepGiantStep {
    params: RecoveryParams,
    baby_steps: HashMap<Point, u64>,
    /// `-(n · BASE8)` where `n` is the number of baby steps.
    giant_stride: Point,
}

impl BabyStepGiantStep {
    /// Builds the baby-step table for `params`.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::InvalidParams`] if `params` fails validation.
    pub fn new(params: RecoveryParams) -> Result<Self, RecoveryError> {
        params.validate()?;

        let n = params.baby_steps();
        let mut baby_steps = HashMap::with_capacity(n as usize);

        let mut current = Point::IDENTITY;
        for j in 0..n {
            baby_steps.insert(current, j);
            current = current + BASE8;
        }

        // `current` is now n · BASE8.
        let giant_stride = -current;

        debug!(max_bits = params.max_bits, baby_steps = n, "built recovery table");

        Ok(Self {
            params,
            baby_steps,
            giant_stride,
        })
    }

    pub fn params(&self) -> RecoveryParams {
        self.params
    }

    /// Returns `m < 2^max_bits` with `m · BASE8 = point`.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::OutOfRange`] if there is no such `m`.
    pub fn recover(&self, point: &Point) -> Result<u64, RecoveryError> {
        let n = self.params.baby_steps();
        let mut gamma = *point;

        for i in 0..self.params.giant_steps() {
            if let Some(&j) = self.baby_steps.get(&gamma) {
                return Ok(i * n + j);
            }

            gamma = gamma + self.giant_stride;
        }

        debug!(max_bits = self.params.max_bits, "plaintext not found in search range");

        Err(RecoveryError::OutOfRange {
            bits: self.params.max_bits,
        })
    }
}
