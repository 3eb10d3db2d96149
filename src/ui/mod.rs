mod main_view;
mod source_panel;

pub use main_view::draw_main_view;
