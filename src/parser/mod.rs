//! Record parsers: one strategy per source layout, selected by the source's
//! declared [`SourceFormat`].

pub mod header;
pub mod positional;

pub use header::HeaderParser;
pub use positional::PositionalParser;

use crate::types::{NormalizedItem, SourceFormat};

/// Turns the full text of one source file into normalized items.
///
/// Parsing is total: malformed rows are dropped and unparseable numbers fall
/// back to defaults, so there is no error path.
pub trait RecordParser {
    fn format(&self) -> SourceFormat;
    fn parse(&self, content: &str) -> Vec<NormalizedItem>;
}

/// Select the parser for a declared source format.
pub fn parser_for(format: SourceFormat) -> Box<dyn RecordParser> {
    match format {
        SourceFormat::Positional => Box::new(PositionalParser::new()),
        SourceFormat::Header => Box::new(HeaderParser::new()),
    }
}
