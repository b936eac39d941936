pub mod mesh;
pub mod obj;
pub mod sweep;

pub use mesh::SurfaceMesh;
pub use obj::write_obj;
pub use sweep::{make_gen_cyl, make_surf_rev};
