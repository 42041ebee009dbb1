//! Parameters for the shape analysis.

/// Parameters for the shape analysis and its scatter-plot output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisParameters {
    /// The width of the deformation acceptance band, in standard deviations
    /// around the mean distance from the centroid.
    pub deviation_band: f32,
    /// The maximum spread between explained-variance ratios for a shape to
    /// still be considered relatively symmetric.
    pub symmetry_spread: f32,
    /// The file name of the rendered scatter-plot image.
    pub output_image: &'static str,
    /// The width of the rendered image in pixels.
    pub image_width: u32,
    /// The height of the rendered image in pixels.
    pub image_height: u32,
    /// The radius of each scatter marker in pixels.
    pub marker_size: u32,
}

impl Default for AnalysisParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisParameters {
    /// Creates a new set of parameters with default values.
    #[inline]
    pub const fn new() -> Self {
        Self {
            deviation_band: 2.0,
            symmetry_spread: 0.2,
            output_image: "shape_analysis.png",
            image_width: 2400,
            image_height: 600,
            marker_size: 2,
        }
    }
}
