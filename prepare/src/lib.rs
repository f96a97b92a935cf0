pub mod classification;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod ranges;
pub mod tables;

pub use classification::Classification;
pub use error::{Error, ParseError};
pub use generator::{Generator, Report};
pub use output::OutputFormat;
pub use ranges::{parse, parse_line, render_listing, RangeToken};
pub use tables::{pack, CodepointSet, PackedTable, GROUP_COUNT};

/// последний кодпоинт, покрываемый таблицами XID_Start / XID_Continue
pub const DOMAIN_MAX: u32 = 0x3134A;
