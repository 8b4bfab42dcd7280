pub mod progress;
pub mod resolver;
pub mod seek;
pub mod volume;
