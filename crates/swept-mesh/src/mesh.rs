use swept_math::{Aabb3, Point3, Vector3};

/// Triangle mesh produced by a sweep.
///
/// `positions` and `normals` are index-aligned; `triangles` holds index
/// triples with counterclockwise winding seen from the outward side.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub triangles: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Axis-aligned bounds of all positions; degenerate at the origin for
    /// an empty mesh.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}
