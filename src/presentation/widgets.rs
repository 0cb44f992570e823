pub mod stage;
pub mod status_bar;
pub mod trail;

pub use stage::StageWidget;
pub use status_bar::StatusBarWidget;
pub use trail::TrailWidget;
