pub mod body;
pub mod clock;
pub mod math;
pub mod nanotime;
pub mod prelude;
pub mod render;
pub mod system;
pub mod transforms;

#[cfg(test)]
mod tests;
