pub mod render;
pub mod rules;
pub mod stagnation;

pub use render::*;
pub use rules::*;
pub use stagnation::*;
