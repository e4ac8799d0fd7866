pub mod encoder;
pub mod entity_tagger;
pub mod replay;
pub mod vocabulary;

pub use encoder::IStateEncoder;
pub use entity_tagger::IEntityTagger;
pub use replay::IEventReplay;
pub use vocabulary::IVocabulary;
