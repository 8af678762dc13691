pub mod generator;
mod parser;
mod store;
pub mod template;
pub mod theme;

pub use parser::{parse_slides, serialize_slides, Slide};
pub use store::{CreateOutcome, Document, SlideStore};
