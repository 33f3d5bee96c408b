//! Fixed-size linear algebra primitives.
//!
//! - [`Vec2`], [`Vec3`]: 2 and 3 element `f32` vectors
//! - [`Mat22`], [`Mat33`]: 2x2 and 3x3 row-major `f32` matrices
//!
//! All types are `Copy` values. Fallible operations return [`MathError`].

mod error;
pub mod mat;
mod vec2;
mod vec3;

pub use error::{MathError, Operation};
pub use mat::{Mat22, Mat33, MatDims, MatIndex, OutOfBoundsError};
pub use vec2::Vec2;
pub use vec3::{AngleType, Vec3};
