//! `pt-output` — what the presentation layer consumes.
//!
//! The simulation never renders anything itself.  After every frame tick it
//! publishes a [`TrailState`][pt_sim::TrailState]; this crate projects that
//! state into a flat, read-only [`RenderFrame`] and offers two ways to show
//! it:
//!
//! | Item             | Purpose                                                   |
//! |------------------|-----------------------------------------------------------|
//! | [`RenderFrame`]  | Ordered [`PrintView`]s plus the active dog count          |
//! | [`PawGlyph`]     | Icon geometry for front and back paws (24×24 view box)    |
//! | [`svg`]          | Writes a frame as a standalone SVG document               |
//! | [`FrameRecorder`]| `SimObserver` that keeps the latest frame and counters    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pt_output::FrameRecorder;
//!
//! let mut recorder = FrameRecorder::new(&sim.config);
//! sim.run_for(5_000, &mut recorder);
//! if let Some(frame) = recorder.last_frame() {
//!     for line in frame.hud_lines() {
//!         println!("{line}");
//!     }
//! }
//! ```

pub mod frame;
pub mod glyph;
pub mod recorder;
pub mod svg;

#[cfg(test)]
mod tests;

pub use frame::{PrintView, RenderFrame};
pub use glyph::{Circle, Ellipse, PawGlyph};
pub use recorder::FrameRecorder;
