pub mod renderer;
pub mod style;
pub mod view_models;
pub mod views;

pub use renderer::{ConsoleRenderer, CreateView};
pub use style::Style;
pub use view_models::{CommandResultViewModel, ConfigViewModel, Guidance};
