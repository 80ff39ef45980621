//! Rendering primitives shared by the console and file outputs: ANSI colours,
//! category tags, the space-joined line layout, and the UTC timestamp prefix.

mod color;
mod line;
mod tag;
mod timestamp;

pub use color::{Color, colorize};
pub use line::Line;
pub use tag::{colored_tag, plain_tag};
pub use timestamp::{TIMESTAMP_FORMAT, timestamp};
