//! [Principal Component Analysis (PCA)] on a set of 3D points,
//! used to characterize the symmetry of a shape.
//!
//! [Principal Component Analysis (PCA)]: https://en.wikipedia.org/wiki/Principal_component_analysis

use glam::{Mat3A, Vec3A};

use crate::math;

/// [Principal Component Analysis (PCA)] on a set of 3D points.
///
/// The result contains the eigenvectors and eigenvalues of the covariance matrix,
/// sorted by descending eigenvalue, as well as the centroid of the input points.
///
/// The explained-variance ratios derived with [`Pca::explained_variance_ratio`]
/// describe how the spread of the points is distributed over the principal axes,
/// and [`Pca::symmetry`] turns their spread into a coarse symmetry verdict.
///
/// [Principal Component Analysis (PCA)]: https://en.wikipedia.org/wiki/Principal_component_analysis
///
/// # Example
///
/// ```
/// use deformscan::pca::{Pca, Symmetry};
/// use glam::Vec3A;
///
/// // The six vertices of an octahedron spread variance evenly over all axes.
/// let points = vec![
///     Vec3A::new(1.0, 0.0, 0.0),
///     Vec3A::new(-1.0, 0.0, 0.0),
///     Vec3A::new(0.0, 1.0, 0.0),
///     Vec3A::new(0.0, -1.0, 0.0),
///     Vec3A::new(0.0, 0.0, 1.0),
///     Vec3A::new(0.0, 0.0, -1.0),
/// ];
///
/// let pca = Pca::from_points(&points).unwrap();
/// assert_eq!(pca.symmetry(0.2), Symmetry::RelativelySymmetric);
/// ```
#[derive(Clone, Debug)]
pub struct Pca {
    /// The eigenvectors of the covariance matrix, representing the principal axes.
    eigenvectors: Mat3A,
    /// The eigenvalues of the covariance matrix, representing the variance along each principal axis.
    eigenvalues: Vec3A,
    /// The centroid computed from the input points.
    centroid: Vec3A,
}

/// A coarse symmetry verdict derived from the spread of explained-variance ratios.
///
/// This is a heuristic classification, not a statistical test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symmetry {
    /// The variance is distributed roughly evenly over the principal axes.
    RelativelySymmetric,
    /// The variance is concentrated along some principal axes.
    SignificantAsymmetry,
}

impl Pca {
    /// Performs [Principal Component Analysis (PCA)] on a set of 3D points.
    ///
    /// Returns `None` if the input slice is empty. The PCA is always computed,
    /// even if the points are degenerate (for example, all points are coincident
    /// or coplanar); degenerate directions simply come out with near-zero
    /// eigenvalues.
    ///
    /// [Principal Component Analysis (PCA)]: https://en.wikipedia.org/wiki/Principal_component_analysis
    pub fn from_points(points: &[Vec3A]) -> Option<Pca> {
        if points.is_empty() {
            return None;
        }

        let centroid = math::centroid(points);
        let covariance = math::covariance(points, centroid);
        let (eigenvectors, eigenvalues) = math::eigen_descending(covariance);

        Some(Pca {
            eigenvectors,
            eigenvalues,
            centroid,
        })
    }

    /// Creates a PCA instance from its eigenvectors, eigenvalues, and centroid.
    ///
    /// This can be used to create a PCA instance from precomputed values.
    /// No validation is performed on the input values.
    ///
    /// In most cases, you should use [`Pca::from_points`] instead.
    #[inline]
    pub fn from_raw(eigenvectors: Mat3A, eigenvalues: Vec3A, centroid: Vec3A) -> Pca {
        Pca {
            eigenvectors,
            eigenvalues,
            centroid,
        }
    }

    /// Returns the eigenvectors (principal axes) of the PCA,
    /// as columns sorted by descending eigenvalue.
    #[inline]
    pub fn eigenvectors(&self) -> Mat3A {
        self.eigenvectors
    }

    /// Returns the eigenvalues (variances along principal axes) of the PCA,
    /// sorted descending.
    #[inline]
    pub fn eigenvalues(&self) -> Vec3A {
        self.eigenvalues
    }

    /// Returns the centroid computed from the input points.
    #[inline]
    pub fn centroid(&self) -> Vec3A {
        self.centroid
    }

    /// Returns the fraction of the total variance explained by each principal
    /// axis, sorted descending. The ratios sum to one for non-degenerate input.
    ///
    /// If the total variance is (near) zero, for example because all points are
    /// coincident, all ratios are reported as zero rather than failing.
    pub fn explained_variance_ratio(&self) -> Vec3A {
        let total = self.eigenvalues.element_sum();
        if total <= f32::EPSILON {
            return Vec3A::ZERO;
        }
        self.eigenvalues / total
    }

    /// Classifies the shape as relatively symmetric if the spread between the
    /// largest and smallest explained-variance ratio is strictly below the
    /// given threshold, and as significantly asymmetric otherwise.
    pub fn symmetry(&self, spread_threshold: f32) -> Symmetry {
        let ratios = self.explained_variance_ratio();
        if ratios.max_element() - ratios.min_element() < spread_threshold {
            Symmetry::RelativelySymmetric
        } else {
            Symmetry::SignificantAsymmetry
        }
    }
}
