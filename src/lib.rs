#![warn(clippy::all)]

pub mod config;
mod driver;
mod engine;
mod error;
mod grid;
pub mod rule;
mod source;
mod utils;

pub use driver::{render, simulate, Glyphs};
pub use engine::{Engine, ParallelEngine, SequentialEngine};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use source::{CellSource, RandomSource};
pub use utils::NiceInt;

pub type DefaultEngine = ParallelEngine;
