use crate::*;

pub use dice::*;
pub use frequency::*;

mod dice;
mod frequency;

/// Generation strategy for letter grids. Generators are consumed on use and
/// seeded explicitly so a session can reproduce its board.
pub trait GridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid>;
}
