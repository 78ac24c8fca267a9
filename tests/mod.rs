mod common;
mod render_tests;
mod roster_tests;
mod template_tests;
