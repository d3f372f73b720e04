pub mod countdown;
pub mod field;
pub mod gesture;
pub mod morph;
pub mod orbs;
pub mod star;
pub mod state;

pub use countdown::*;
pub use field::*;
pub use gesture::*;
pub use morph::*;
pub use orbs::*;
pub use star::*;
pub use state::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static STAR_WGSL: &str = include_str!("../../shaders/star.wgsl");
