pub mod color_parse;
pub mod composite;
pub mod gradient;
pub mod hex;
pub mod number;
pub mod opacity;
pub mod palette;
