/// Tuning knobs for [`super::VersionTree`]'s order-maintenance label space.
///
/// `overflow_constant` (`T` in the literature) governs how aggressively the
/// relabeling procedure tolerates dense windows before giving up and trying
/// a larger one: a window of size `s` is redistributed once its occupancy
/// density drops below `T.powi(-s)`. Implementers are free to pick any value
/// strictly between 1 and 2; 1.3 is the textbook choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionTreeConfig {
    /// Density threshold constant, must lie in `(1.0, 2.0)`.
    pub overflow_constant: f64,
    /// Initial label-space capacity. Must be a power of two `>= 2`.
    pub initial_capacity: usize,
}

impl Default for VersionTreeConfig {
    fn default() -> Self {
        Self {
            overflow_constant: 1.3,
            initial_capacity: 2,
        }
    }
}

impl VersionTreeConfig {
    pub(crate) fn validate(&self) {
        debug_assert!(
            self.overflow_constant > 1.0 && self.overflow_constant < 2.0,
            "overflow_constant must lie in (1.0, 2.0)"
        );
        debug_assert!(
            self.initial_capacity >= 2 && self.initial_capacity.is_power_of_two(),
            "initial_capacity must be a power of two >= 2"
        );
    }
}
