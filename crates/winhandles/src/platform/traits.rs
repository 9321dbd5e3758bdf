/*!
Native call boundary.

Everything above this trait is platform independent. A backend implements the
OS entry points one-to-one and reports failure the way the OS does: a null
handle, a zero length or `false`. Interpreting those results belongs to the
core, not to the backend.

Buffer-filling calls share one convention: copy at most `buf.len() - 1`
UTF-16 units, write a terminating zero, and return the number of units
copied (zero on failure or for an empty buffer).
*/

use crate::types::{
  ProcessAccessRights, ProcessId, RawProcessHandle, ShowState, ThreadId, WinResult,
  WindowHandle, WindowPlacement, WindowPositionFlags,
};

/// The OS entry points the window layer is built on.
///
/// Methods take `&self` so a backend may carry state; the real backends are
/// zero-sized.
pub trait NativeApi: Send + Sync {
  /// Walk every top-level window, front to back.
  ///
  /// `visit` returns `true` to continue and `false` to stop. Stopping early
  /// is not an error.
  fn enum_windows(&self, visit: &mut dyn FnMut(WindowHandle) -> bool) -> WinResult<()>;

  /// First top-level window, in z-order, whose class name and title match.
  ///
  /// Matching compares whole strings and ignores case, as `FindWindowW`
  /// does. `None` for a criterion matches anything. Null when nothing
  /// matches.
  fn find_window(&self, class_name: Option<&str>, title: Option<&str>) -> WindowHandle;

  fn is_window_visible(&self, hwnd: WindowHandle) -> bool;

  /// Null when no window is active.
  fn foreground_window(&self) -> WindowHandle;

  /// Creating thread and owning process. Zeros for a stale handle.
  fn window_thread_process_id(&self, hwnd: WindowHandle) -> (ThreadId, ProcessId);

  /// Title length in UTF-16 units, without terminator.
  fn window_text_length(&self, hwnd: WindowHandle) -> usize;

  fn window_text(&self, hwnd: WindowHandle, buf: &mut [u16]) -> usize;

  fn class_name(&self, hwnd: WindowHandle, buf: &mut [u16]) -> usize;

  /// Fill `placement`. Fails unless `placement.length` is
  /// [`WindowPlacement::SIZE`]; on failure the record is unspecified.
  fn window_placement(&self, hwnd: WindowHandle, placement: &mut WindowPlacement) -> bool;

  /// Change position, size and z-order. `flags` masks out the parts that
  /// must not change.
  #[allow(clippy::too_many_arguments)]
  fn set_window_pos(
    &self,
    hwnd: WindowHandle,
    insert_after: WindowHandle,
    x: i32,
    y: i32,
    cx: i32,
    cy: i32,
    flags: WindowPositionFlags,
  ) -> bool;

  /// Request a show-state transition. Returns `true` if the window was
  /// visible before the call (the OS contract), not whether it changed.
  fn show_window(&self, hwnd: WindowHandle, state: ShowState) -> bool;

  /// `None` for a dead pid or insufficient privilege. The handle is not
  /// inheritable. Every `Some` must be passed to
  /// [`NativeApi::close_process`] exactly once.
  fn open_process(&self, pid: ProcessId, access: ProcessAccessRights)
    -> Option<RawProcessHandle>;

  /// Full path of the process's main module.
  fn module_file_name(&self, process: RawProcessHandle, buf: &mut [u16]) -> usize;

  fn close_process(&self, process: RawProcessHandle) -> bool;
}
