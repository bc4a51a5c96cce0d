#![forbid(unsafe_code)]

pub mod generator;
pub mod model;
pub mod session;
pub mod validator;

pub use generator::{GROUP_SIZES, MAX_TOTAL_ITEMS, generate};
pub use model::{ItemType, LessonType, Problem, ProblemError, SubType};
pub use session::{AnswerCheck, Discovery, Phase, PracticeSession, SegmentPaint};
pub use validator::{check_representation, check_value, parse_answer};
