pub mod constants;
pub mod cue;
pub mod dial;
pub mod draw;
pub mod panel;
pub mod switches;
pub mod ticks;
pub mod wave;

pub use cue::*;
pub use dial::*;
pub use draw::*;
pub use panel::*;
pub use switches::*;
pub use ticks::*;
pub use wave::*;
