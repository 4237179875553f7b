pub mod dictionary;
pub mod difficulty;
pub mod normalize;
