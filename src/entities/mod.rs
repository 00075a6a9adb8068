mod category;
mod grounding;
mod location;
mod place;

pub use category::Category;
pub use grounding::{GroundingChunk, MapsSource};
pub use location::Coordinates;
pub use place::{image_url, Place};
