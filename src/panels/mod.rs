mod status_panel;

pub use status_panel::status_panel;
