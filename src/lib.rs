pub mod numerics;

pub use numerics::types::traits::Scalar;
pub use numerics::types::vector::{IntVector3, Vector3, Vector3D};
pub use numerics::types::vector2::Vector2;
