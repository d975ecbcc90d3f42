mod intent;
mod reducer;
mod state;

pub use intent::AnalysisIntent;
pub use reducer::AnalysisReducer;
pub use state::{AnalysisState, Phase, View};
