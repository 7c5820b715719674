//! Smooth scrolling for the page viewport
//!
//! Anchor navigation and manual scrolling both go through `ScrollAnimator`,
//! which eases the viewport toward its target over a short animation.
//! `easing` holds the pure curves, `timing` the progress and interpolation
//! helpers, `animation` the controller that combines them.

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use easing::EasingTypeExt;
