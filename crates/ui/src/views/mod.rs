mod home;
mod practice;
mod visualizer;

pub use home::HomeView;
pub use practice::PracticeView;
pub use visualizer::Visualizer;
