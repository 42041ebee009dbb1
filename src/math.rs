use glam::{Mat3A, Vec3, Vec3A};
use glam_matrix_extras::{SymmetricEigen3, SymmetricMat3};

/// Computes the arithmetic mean of a scalar slice.
///
/// The slice must be non-empty.
#[inline]
pub fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

/// Computes the population standard deviation of a scalar slice,
/// dividing by `N` rather than `N - 1`.
///
/// The slice must be non-empty.
#[inline]
pub fn population_std(values: &[f32], mean: f32) -> f32 {
    let variance = values
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f32>()
        / values.len() as f32;
    variance.sqrt()
}

/// Computes the centroid (elementwise arithmetic mean) of a point set.
///
/// The slice must be non-empty.
#[inline]
pub fn centroid(points: &[Vec3A]) -> Vec3A {
    points.iter().sum::<Vec3A>() / points.len() as f32
}

/// Computes the covariance matrix of the points around the given centroid,
/// dividing by `N` rather than `N - 1`.
///
/// The slice must be non-empty.
pub fn covariance(points: &[Vec3A], centroid: Vec3A) -> SymmetricMat3 {
    let mut cov = SymmetricMat3::ZERO;
    for point in points {
        cov += SymmetricMat3::from_outer_product(Vec3::from(*point - centroid));
    }
    cov / points.len() as f32
}

/// Computes the eigendecomposition of a symmetric 3x3 matrix,
/// returning the eigenvectors and eigenvalues sorted by descending eigenvalue.
pub fn eigen_descending(matrix: SymmetricMat3) -> (Mat3A, Vec3A) {
    // `glam_matrix_extras` uses the robust non-iterative eigensolver described in
    // "A Robust Eigensolver for 3 x 3 Symmetric Matrices" by David Eberly.
    // https://www.geometrictools.com/Documentation/RobustEigenSymmetric3x3.pdf
    let eigen = SymmetricEigen3::new(matrix);

    let mut pairs = [
        (eigen.eigenvalues.x, eigen.eigenvectors.col(0)),
        (eigen.eigenvalues.y, eigen.eigenvectors.col(1)),
        (eigen.eigenvalues.z, eigen.eigenvectors.col(2)),
    ];
    pairs.sort_by(|a, b| b.0.total_cmp(&a.0));

    let eigenvectors = Mat3A::from_cols(
        Vec3A::from(pairs[0].1),
        Vec3A::from(pairs[1].1),
        Vec3A::from(pairs[2].1),
    );
    let eigenvalues = Vec3A::new(pairs[0].0, pairs[1].0, pairs[2].0);

    (eigenvectors, eigenvalues)
}
