//! Built-in spell variants.

mod fireball;
mod lightning_strike;
mod shadow_bolt;

pub use fireball::Fireball;
pub use lightning_strike::LightningStrike;
pub use shadow_bolt::ShadowBolt;
