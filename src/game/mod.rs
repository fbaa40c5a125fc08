pub mod clock;
pub mod components;
pub mod input;
pub mod intent;
pub mod motion;
pub mod pipeline;
pub mod viewport;
