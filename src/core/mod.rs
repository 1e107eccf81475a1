pub mod calculator;
pub mod runner;

pub use crate::domain::model::{Classroom, Point, Rectangle, Student, ValueHolder};
pub use crate::domain::ports::Demo;
pub use crate::utils::error::Result;
