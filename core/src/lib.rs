use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use grid::*;
pub use path::*;
pub use score::*;
pub use session::*;
pub use solver::*;
pub use tile::*;
pub use types::*;

mod error;
mod generator;
mod grid;
mod path;
mod score;
mod session;
mod solver;
mod tile;
mod types;

/// Parameters for grid generation. `level` biases the letter distribution;
/// the exact bias curve is a tunable, not a contract.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord,
    pub level: u32,
}

impl GridConfig {
    pub const DEFAULT_SIZE: Coord = 4;

    pub const fn new_unchecked(size: Coord, level: u32) -> Self {
        Self { size, level }
    }

    pub fn new(size: Coord, level: u32) -> Result<Self> {
        if size < 2 {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self::new_unchecked(size, level))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.size < 2 {
            Err(GameError::InvalidConfiguration)
        } else {
            Ok(())
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_degenerate_sizes() {
        assert_eq!(GridConfig::new(0, 1), Err(GameError::InvalidConfiguration));
        assert_eq!(GridConfig::new(1, 1), Err(GameError::InvalidConfiguration));
        assert!(GridConfig::new(2, 1).is_ok());
    }

    #[test]
    fn default_config_is_the_classic_board() {
        let config = GridConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.total_cells(), 16);
    }
}
