pub mod category;
pub mod config;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod idempotency;
pub mod logging;
pub mod numeric;
pub mod parser;
pub mod pipeline;
pub mod sanitize;
pub mod types;

pub use category::{classify, ItemCategory};
pub use emitter::render_registry;
pub use error::{GeneratorError, Result};
pub use parser::{parser_for, HeaderParser, PositionalParser, RecordParser};
pub use pipeline::{Pipeline, PipelineResult};
pub use sanitize::sanitize_name;
pub use types::{NormalizedItem, SourceFormat};
