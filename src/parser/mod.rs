pub mod tei_parser;
pub mod text_processor;
pub mod tree_query;

pub use tei_parser::{
    TeiParser,
    TeiDocument,
    DialogueElement,
    ParseOutput,
    TeiError,
    TeiResult,
    parse,
    strip_stage_directions,
    extract_table
};
pub use text_processor::{linearize, split_speaker_content};
pub use tree_query::TreeQuery;
