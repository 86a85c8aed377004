mod ignore;
pub mod render;
pub mod size;
pub mod walk;

pub use render::{Charset, DepthState};
pub use size::{SIZE_FIELD_WIDTH, SizeReading, format_size_field};
pub use walk::{RenderOptions, RenderSummary, render_tree};
