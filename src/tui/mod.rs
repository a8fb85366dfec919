//! Interactive password form.

mod input;
mod screen;
mod text;

pub use screen::run_form as run;
