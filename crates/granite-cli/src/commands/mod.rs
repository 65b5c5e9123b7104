pub mod energy;
pub mod generate;
