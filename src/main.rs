//! Analyzes a 3D point cloud archive and renders a scatter-plot overview.

use anyhow::Result;
use deformscan::{
    load::load_point_cloud, render::save_scatter_panels, Analysis, AnalysisParameters,
    ShapeAnalyzer, Symmetry,
};

/// The archive holding the point cloud to inspect.
const INPUT_PATH: &str = "3d_shape_points_data.npz";

fn main() -> Result<()> {
    let points = match load_point_cloud(INPUT_PATH) {
        Ok(points) => points,
        Err(error) => {
            eprintln!("Error loading data: {error}");
            return Ok(());
        }
    };
    println!("Loaded {} points from the data file", points.len());
    println!("Point cloud shape: ({}, 3)", points.len());

    let analyzer = ShapeAnalyzer::new(AnalysisParameters::new());
    let analysis = analyzer.analyze(&points)?;

    print_shape_characteristics(&analysis);
    print_pca(&analysis, &analyzer.parameters);
    print_deformations(&analysis);

    save_scatter_panels(
        &points,
        &analysis.deformation.mask,
        analyzer.parameters.output_image,
        &analyzer.parameters,
    )?;
    println!("\nVisualization saved as {}", analyzer.parameters.output_image);

    Ok(())
}

fn print_shape_characteristics(analysis: &Analysis) {
    let dimensions = analysis.stats.dimensions;
    let center = analysis.stats.centroid;
    let ratios = analysis.aspect_ratios;

    println!("\nShape Characteristics:");
    println!(
        "Dimensions (x,y,z): [{:.3}, {:.3}, {:.3}]",
        dimensions.x, dimensions.y, dimensions.z
    );
    println!(
        "Center point: [{:.3}, {:.3}, {:.3}]",
        center.x, center.y, center.z
    );
    println!(
        "Average distance from center: {:.3}",
        analysis.deformation.mean
    );
    println!(
        "Standard deviation of distances: {:.3}",
        analysis.deformation.std
    );
    println!(
        "Aspect ratios (x:y:z): {:.3}:{:.3}:{:.3}",
        ratios.x, ratios.y, ratios.z
    );
}

fn print_pca(analysis: &Analysis, parameters: &AnalysisParameters) {
    println!("\nPrincipal Component Analysis:");
    let ratios = analysis.pca.explained_variance_ratio();
    for (index, ratio) in ratios.to_array().iter().enumerate() {
        println!("PC{} explains {:.2}% of variance", index + 1, ratio * 100.0);
    }
    match analysis.pca.symmetry(parameters.symmetry_spread) {
        Symmetry::RelativelySymmetric => {
            println!("Shape appears to be relatively symmetric");
        }
        Symmetry::SignificantAsymmetry => {
            println!("Shape shows significant asymmetry along principal components");
        }
    }
}

fn print_deformations(analysis: &Analysis) {
    let deformation = &analysis.deformation;

    println!("\nDeformation Analysis:");
    println!("Mean distance from center: {:.3}", deformation.mean);
    println!("Distance standard deviation: {:.3}", deformation.std);
    println!("Outer threshold: {:.3}", deformation.outer_threshold);
    println!("Inner threshold: {:.3}", deformation.inner_threshold);
    println!(
        "Potential deformation points: {} ({:.2}%)",
        deformation.count(),
        deformation.fraction() * 100.0
    );
}
