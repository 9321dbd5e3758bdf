/*! Owned snapshot of one window's identity and state. */

use super::{ProcessId, ShowState, WindowHandle, WindowPlacement};
use serde::{Deserialize, Serialize};

/// Everything the query layer can say about a window at one instant.
///
/// Fields are read one native call at a time, so a window that changes or
/// dies mid-snapshot yields a mix of old and empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
  pub handle: WindowHandle,
  pub title: String,
  pub class_name: String,
  pub process_id: ProcessId,
  /// Empty when the owning process could not be opened.
  pub executable_path: String,
  pub visible: bool,
  /// `None` when the placement query failed.
  pub placement: Option<WindowPlacement>,
}

impl WindowInfo {
  pub fn show_state(&self) -> Option<ShowState> {
    self.placement.as_ref().and_then(WindowPlacement::show_state)
  }
}
