#![no_std]

pub mod reward_math;
pub mod round_math;

pub use reward_math::*;
pub use round_math::*;
