pub mod buffer;
pub mod color;
pub mod convolution;
pub mod engine;
pub mod error;
pub mod filter;
pub mod geometric;
pub mod io;
pub mod logging;
pub mod session;
pub mod settings;

pub use buffer::{Color, PixelBuffer};
pub use engine::{apply, apply_chain, apply_filter};
pub use error::{Result, SnapshopError};
pub use filter::{Filter, FilterCategory};
pub use session::{Action, Session};
pub use settings::Settings;
