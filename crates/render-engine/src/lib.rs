//! Standcard Render Engine
//!
//! Draws selected standings rows onto a card template and writes the
//! result to disk.
//!
//! # Pipeline Architecture
//!
//! ```text
//! card_template.png ──┐
//!                     ├── Copy to owned RGB surface
//! layout ─────────────┘         │
//!                               ├── Title / Subtitle
//! title, subtitle ──────────────┘         │
//!                                         ├── Rows (paginated, max 20)
//! records ────────────────────────────────┘         │
//!                                                   ▼
//!                                         Encode (temp file + rename)
//!                                                   │
//!                                                   ▼
//!                                         output/generated_card.png
//! ```

pub mod compositor;
pub mod delivery;
pub mod painter;
pub mod render;

pub use render::*;
