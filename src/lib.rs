pub mod domain;
pub mod encoding;
pub mod error;
pub mod ing;
pub mod normalize;
pub mod quicken;
