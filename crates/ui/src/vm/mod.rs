mod practice_vm;

pub use practice_vm::{PendingExplanation, PracticeVm};
