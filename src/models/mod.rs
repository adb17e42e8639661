pub mod conf;
pub mod dialogue_record;
pub mod result_table;
pub mod cast_member;

pub use conf::{Conf, TeiNamespaces, QualifiedName};
pub use dialogue_record::DialogueRecord;
pub use result_table::ResultTable;
pub use cast_member::CastMember;
