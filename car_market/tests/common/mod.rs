pub mod fixtures;
pub mod mock_oracle;

pub use fixtures::*;
pub use mock_oracle::MockOracle;
