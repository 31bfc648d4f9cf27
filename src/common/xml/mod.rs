//! XML helpers shared by the part emitters.

mod escape;

pub use escape::{escape_text_content, escape_xml};
