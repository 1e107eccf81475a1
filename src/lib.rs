pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::OutputArgs;
pub use config::Roster;

pub use app::demos::{CalculatorDemo, ClassroomDemo, RectangleDemo, ValueDemo};
pub use crate::core::{calculator::Calculator, runner::DemoRunner, runner::OutputFormat};
pub use domain::model::{Classroom, Point, Rectangle, Student, ValueHolder};
pub use utils::error::{DemoError, Result};
