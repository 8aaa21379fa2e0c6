pub use engine::*;
pub use modifier::*;

mod engine;
mod modifier;
