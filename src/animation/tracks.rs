use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
}

/// A time-sampled channel for one property of one node.
///
/// `times` is non-decreasing (seconds) and parallel to `values`: one typed
/// value per keyframe. Mismatched lengths are a programming-contract
/// violation, not a runtime condition.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        debug_assert_eq!(
            times.len(),
            values.len(),
            "keyframe times and values must be parallel"
        );
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Time stamp of the last keyframe, or 0.0 for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples the track at `time`, clamping outside the keyframe range.
    ///
    /// Returns `None` only for an empty track.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.times.is_empty() {
            return None;
        }
        let len = self.times.len();

        // partition_point finds the first index where t > time, i.e. next_index
        let next_idx = self.times.partition_point(|&t| t <= time);
        if next_idx == 0 {
            return Some(self.values[0]);
        }
        let index = next_idx - 1;
        if next_idx >= len {
            return Some(self.values[len - 1]);
        }

        match self.interpolation {
            InterpolationMode::Step => Some(self.values[index]),
            InterpolationMode::Linear => {
                let t0 = self.times[index];
                let t1 = self.times[next_idx];
                let dt = t1 - t0;
                // Prevent division by zero on duplicated time stamps
                let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
                Some(T::interpolate_linear(
                    self.values[index],
                    self.values[next_idx],
                    t.clamp(0.0, 1.0),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_linear() {
        let track = KeyframeTrack::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0_f32, 10.0, 20.0],
            InterpolationMode::Linear,
        );

        assert_eq!(track.sample(0.0), Some(0.0));
        assert_eq!(track.sample(0.5), Some(5.0));
        assert_eq!(track.sample(1.5), Some(15.0));
        // Clamped outside the range
        assert_eq!(track.sample(-1.0), Some(0.0));
        assert_eq!(track.sample(3.0), Some(20.0));
    }

    #[test]
    fn test_sample_step() {
        let track = KeyframeTrack::new(
            vec![0.0, 1.0],
            vec![1.0_f32, 2.0],
            InterpolationMode::Step,
        );

        assert_eq!(track.sample(0.99), Some(1.0));
        assert_eq!(track.sample(1.0), Some(2.0));
    }

    #[test]
    fn test_sample_empty() {
        let track: KeyframeTrack<f32> = KeyframeTrack::new(vec![], vec![], InterpolationMode::Linear);
        assert_eq!(track.sample(0.0), None);
    }

    #[test]
    fn test_end_time() {
        let track = KeyframeTrack::new(
            vec![0.0, 0.5, 2.5],
            vec![0.0_f32, 1.0, 2.0],
            InterpolationMode::Linear,
        );
        assert!((track.end_time() - 2.5).abs() < 1e-5);
    }
}
