//! Dual-view frame pipeline
//!
//! A single keyboard-driven entity: key state becomes a movement intent, the
//! intent a velocity, the velocity a new position. Each frame the world is
//! drawn twice, through a full-surface camera and a corner overview camera
//! that both follow the entity, with a diagnostic overlay on top.

pub mod config;
pub mod game;
pub mod plugins;
