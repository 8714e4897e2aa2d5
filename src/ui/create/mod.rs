mod intent;
mod reducer;
mod state;

pub use intent::CreateIntent;
pub use reducer::CreateReducer;
pub use state::{CreateForm, CreateFormState, FormField};
