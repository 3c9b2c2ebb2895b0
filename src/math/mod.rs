pub mod checker;
pub mod color_parse;
pub mod hex;
pub mod hsl;
pub mod suggest;
pub mod wcag;
