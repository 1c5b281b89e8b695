//! Passive listeners on page-changed notifications. None of them can reach
//! back into navigation state.

mod dots;
mod style;

pub use dots::{Dot, ScrollDots};
pub use style::{EffectSet, ParticleShape, ParticleStyler, StyleProfile};
