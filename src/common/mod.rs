mod fs;
mod html;
mod number;

pub(crate) use fs::*;
pub(crate) use html::*;
pub(crate) use number::*;
