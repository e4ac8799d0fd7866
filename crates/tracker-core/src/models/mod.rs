pub mod dialogue;
pub mod event;
pub mod feature;
pub mod state;
pub mod turn;
pub mod window;

pub use dialogue::Dialogue;
pub use event::{ActionExecution, EntitySpan, Event, UserUtterance};
pub use feature::{EncodedState, EntityTags, Feature, FeatureType, FeatureValues};
pub use state::{AttributeValue, State, SubState, SubStateKind};
pub use turn::Turn;
pub use window::HistoryWindow;
