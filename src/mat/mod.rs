/// Matrix indexing and bounds
mod index;
mod mat22;
mod mat33;

pub use index::{MatDims, MatIndex, OutOfBoundsError};
pub use mat22::Mat22;
pub use mat33::Mat33;
