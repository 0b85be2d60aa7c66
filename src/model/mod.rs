/// Analysis result contract consumed from the external analysis service.
pub mod analysis;
/// CSS-like color strings attached to annotations.
pub mod color;
