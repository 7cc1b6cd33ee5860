//! Render geometry
//!
//! Turns a [`SceneSnapshot`](crate::sim::SceneSnapshot) into plain line and
//! point vertex lists. No GPU or window code lives here; a platform backend
//! uploads the vertices with [`vertex::as_bytes`].

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use hud::{HudLabel, format_score, hud_labels};
pub use shapes::{SceneGeometry, scene_geometry};
pub use vertex::{LineVertex, colors};
