//! Unidirectional state primitives for the terminal UI.
//!
//! ```text
//! key / background result ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                      │
//!        └──────────────────────────────────────────────────────┘
//! ```
//!
//! Navigation, the list filter, the detail pane and the create form each
//! own one state type and one reducer. Side effects (network calls, the
//! clipboard, timers) live in `App` and feed their outcomes back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
