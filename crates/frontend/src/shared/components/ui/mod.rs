pub mod pill;

pub use pill::Pill;
