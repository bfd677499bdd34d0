//! Filter state and the parameters derived from it for the rendering layer.

pub mod layer;
pub mod spec;
pub mod state;

pub use layer::{LayerSpec, PointInstance};
pub use spec::FilterSpec;
pub use state::FilterState;
