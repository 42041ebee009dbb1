//! Statistical flagging of deformation candidates.
//!
//! A point is flagged when its distance from the centroid falls outside a
//! band of a configurable number of standard deviations around the mean
//! distance. This is a plain statistical outlier check, not a verified
//! physical defect detection.

use crate::math;

/// The result of the deformation check over a distance vector.
#[derive(Clone, Debug)]
pub struct DeformationReport {
    /// One flag per point, index-aligned with the distance vector it was
    /// computed from: `true` marks a deformation candidate.
    pub mask: Vec<bool>,
    /// The arithmetic mean of the distances.
    pub mean: f32,
    /// The population standard deviation of the distances.
    pub std: f32,
    /// Distances strictly above this value are flagged.
    pub outer_threshold: f32,
    /// Distances strictly below this value are flagged.
    ///
    /// For tight distance distributions this may be negative; distances are
    /// always non-negative, so the lower check then never fires. That is the
    /// intended behavior of the band, not a special case.
    pub inner_threshold: f32,
}

impl DeformationReport {
    /// Flags every distance lying outside `mean ± band * std`.
    ///
    /// `band` is the width of the acceptance band in standard deviations;
    /// the conventional choice is `2.0`. The standard deviation is the
    /// population standard deviation, dividing by `N` rather than `N - 1`.
    ///
    /// Returns `None` if the input slice is empty.
    pub fn detect(distances: &[f32], band: f32) -> Option<Self> {
        if distances.is_empty() {
            return None;
        }

        let mean = math::mean(distances);
        let std = math::population_std(distances, mean);
        let outer_threshold = mean + band * std;
        let inner_threshold = mean - band * std;

        let mask = distances
            .iter()
            .map(|&distance| distance > outer_threshold || distance < inner_threshold)
            .collect();

        Some(Self {
            mask,
            mean,
            std,
            outer_threshold,
            inner_threshold,
        })
    }

    /// Returns the number of flagged points.
    #[inline]
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&flagged| flagged).count()
    }

    /// Returns the flagged fraction of the point cloud, in `0.0..=1.0`.
    #[inline]
    pub fn fraction(&self) -> f32 {
        self.count() as f32 / self.mask.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_all_within_band() {
        // Every distance within two standard deviations of the mean.
        let distances = [1.0, 1.1, 0.9, 1.05, 0.95, 1.0];
        let report = DeformationReport::detect(&distances, 2.0).unwrap();

        assert_eq!(report.count(), 0);
        assert!(report.mask.iter().all(|&flagged| !flagged));
    }

    #[test]
    fn test_single_outlier() {
        let distances = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 100.0];
        let report = DeformationReport::detect(&distances, 2.0).unwrap();

        // Only the far point exceeds the outer threshold.
        assert_eq!(report.count(), 1);
        assert!(report.mask[9]);
        assert_relative_eq!(report.fraction(), 0.1);
    }

    #[test]
    fn test_mask_matches_thresholds() {
        let distances = [0.1, 0.5, 1.0, 2.0, 5.0, 0.2, 0.3];
        let report = DeformationReport::detect(&distances, 2.0).unwrap();

        for (&distance, &flagged) in distances.iter().zip(report.mask.iter()) {
            let outside =
                distance > report.outer_threshold || distance < report.inner_threshold;
            assert_eq!(flagged, outside);
        }
    }

    #[test]
    fn test_negative_inner_threshold_never_fires() {
        // A wide band around a small mean pushes the inner threshold below
        // zero; no non-negative distance can fall below it.
        let distances = [0.0, 0.1, 0.2, 0.1, 0.0];
        let report = DeformationReport::detect(&distances, 2.0).unwrap();

        assert!(report.inner_threshold < 0.0);
        assert!(distances
            .iter()
            .all(|&distance| distance >= report.inner_threshold));
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn test_coincident_distances() {
        // All distances equal: mean == distance, std == 0, and both
        // thresholds collapse onto the mean. Nothing strictly exceeds the
        // thresholds, so the mask is all-false.
        let distances = [0.0; 10];
        let report = DeformationReport::detect(&distances, 2.0).unwrap();

        assert_eq!(report.mean, 0.0);
        assert_eq!(report.std, 0.0);
        assert_eq!(report.outer_threshold, 0.0);
        assert_eq!(report.inner_threshold, 0.0);
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn test_empty() {
        assert!(DeformationReport::detect(&[], 2.0).is_none());
    }
}
