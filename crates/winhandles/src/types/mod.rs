/*! Value types exchanged with the native layer and returned to callers. */

#![allow(missing_docs)]

mod error;
mod flags;
mod geometry;
mod handle;
mod ids;
mod info;
mod placement;

pub use error::{WinHandlesError, WinResult};
pub use flags::{ProcessAccessRights, WindowPositionFlags};
pub use geometry::{Point, Rect};
pub use handle::{WindowHandle, ZPosition};
pub use ids::{ProcessId, RawProcessHandle, ThreadId};
pub use info::WindowInfo;
pub use placement::{ShowState, WindowPlacement};
