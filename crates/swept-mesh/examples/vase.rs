//! Revolve a B-spline silhouette into a vase and write it as a Wavefront
//! OBJ file.
//!
//! # Usage
//!
//! ```bash
//! # Write the mesh to stdout
//! cargo run --example vase
//!
//! # Write the mesh to a file
//! cargo run --example vase -- vase.obj
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::process;

use swept_geometry::{sample_bspline, UniformBSpline};
use swept_math::DVec3;
use swept_mesh::{make_surf_rev, write_obj};

const PROFILE_STEPS: usize = 16;
const REVOLUTION_STEPS: usize = 48;

fn print_usage() {
    eprintln!(
        r#"vase: revolve a B-spline silhouette into an OBJ mesh

USAGE:
    vase [output.obj]

ARGS:
    [output.obj]    Optional output path (defaults to stdout)
"#
    );
}

/// Vase silhouette in the xy plane: x is the radius, y the height.
fn silhouette() -> Vec<DVec3> {
    vec![
        DVec3::new(1.2, 0.0, 0.0),
        DVec3::new(1.4, 0.4, 0.0),
        DVec3::new(0.9, 1.2, 0.0),
        DVec3::new(0.4, 2.0, 0.0),
        DVec3::new(0.7, 2.8, 0.0),
        DVec3::new(1.1, 3.2, 0.0),
        DVec3::new(0.9, 3.6, 0.0),
    ]
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 1 || args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(if args.iter().any(|a| a == "--help") { 0 } else { 1 });
    }

    let spline = match UniformBSpline::new(silhouette()) {
        Ok(spline) => spline,
        Err(e) => {
            eprintln!("vase: {}", e);
            process::exit(1);
        }
    };
    let profile = sample_bspline(&spline, PROFILE_STEPS);

    let mesh = match make_surf_rev(&profile, REVOLUTION_STEPS) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("vase: {}", e);
            process::exit(1);
        }
    };
    let extents = mesh.bounding_box().extents();
    eprintln!(
        "vase: {} vertices, {} triangles, extents {:.2} x {:.2} x {:.2}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        extents.x,
        extents.y,
        extents.z
    );

    let result = match args.first() {
        Some(path) => match File::create(path) {
            Ok(file) => write_obj(&mut BufWriter::new(file), &mesh),
            Err(e) => {
                eprintln!("vase: cannot create {}: {}", path, e);
                process::exit(1);
            }
        },
        None => write_obj(&mut io::stdout().lock(), &mesh),
    };

    if let Err(e) = result {
        eprintln!("vase: {}", e);
        process::exit(1);
    }
}
