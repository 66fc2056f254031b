pub mod app;
pub mod canvas_view;
pub mod scene;
pub mod view_controls;
