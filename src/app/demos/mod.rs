pub mod calculator_demo;
pub mod classroom_demo;
pub mod rectangle_demo;
pub mod value_demo;

pub use calculator_demo::{CalculatorDemo, CalculatorReport, DivisionOutcome};
pub use classroom_demo::{ClassroomDemo, ClassroomReport};
pub use rectangle_demo::{RectangleDemo, RectangleReport};
pub use value_demo::{ValueDemo, ValueReport};
