//! Platform-free core of smokefield: particle pools, the pointer motion
//! field, a surface-agnostic renderer and the loan calculator model.
//!
//! Nothing in here touches the browser; the web front-end owns a
//! [`Simulation`] per canvas and implements [`Surface`] for it.

pub mod color;
pub mod constants;
pub mod field;
pub mod format;
pub mod loan;
pub mod params;
pub mod particle;
pub mod pool;
pub mod render;
pub mod sim;

pub use color::Color;
pub use field::{surface_local, Interaction, Pointer};
pub use format::NumberFormat;
pub use loan::{parse_principal, FormattedQuote, LoanError, LoanTerms, Quote, Term};
pub use params::{SceneConfig, Span, Variant, VariantParams};
pub use particle::Particle;
pub use pool::{FixedPool, Overflow, TrailPool, TrailSpawn};
pub use render::{ColorStop, Disc, Renderer, Surface};
pub use sim::Simulation;
