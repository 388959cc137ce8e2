//! Built-in enemy variants.

mod goblin;
mod shaman;
mod skeleton;

pub use goblin::Goblin;
pub use shaman::Shaman;
pub use skeleton::Skeleton;
