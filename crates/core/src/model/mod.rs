mod problem;

pub use problem::{ItemType, LessonType, Problem, ProblemError, SubType};
