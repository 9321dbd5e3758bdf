/*! Read-only window queries. Each degrades to an empty value on failure. */

use super::process::ProcessGuard;
use super::Desktop;
use crate::platform::NativeApi;
use crate::types::{
  ProcessAccessRights, ProcessId, ThreadId, WindowHandle, WindowInfo, WindowPlacement,
};

impl<A: NativeApi> Desktop<A> {
  /// Whether the window has the visible style. False for a stale handle.
  pub fn is_visible(&self, hwnd: WindowHandle) -> bool {
    self.api.is_window_visible(hwnd)
  }

  /// Window class name, or empty if the handle is stale.
  ///
  /// Starts from the configured capacity and doubles while the OS fills the
  /// buffer to the brim, since a full buffer may mean a truncated name.
  pub fn class_name(&self, hwnd: WindowHandle) -> String {
    let max = self.config.max_class_name_capacity;
    let mut capacity = self.config.class_name_capacity.min(max);
    loop {
      let mut buf = vec![0u16; capacity];
      let len = self.api.class_name(hwnd, &mut buf);
      if len + 1 < capacity || capacity >= max {
        buf.truncate(len);
        return String::from_utf16_lossy(&buf);
      }
      log::trace!("Class name of {hwnd} filled {capacity} units, growing");
      capacity = capacity.saturating_mul(2).min(max);
    }
  }

  /// Window title, or empty if the window has none or the handle is stale.
  pub fn window_text(&self, hwnd: WindowHandle) -> String {
    let len = self.api.window_text_length(hwnd);
    if len == 0 {
      return String::new();
    }
    let mut buf = vec![0u16; len + 1];
    let copied = self.api.window_text(hwnd, &mut buf);
    // The title can shrink between the two calls.
    buf.truncate(copied.min(len));
    String::from_utf16_lossy(&buf)
  }

  /// Owning process, or [`ProcessId::NONE`].
  pub fn process_id(&self, hwnd: WindowHandle) -> ProcessId {
    self.api.window_thread_process_id(hwnd).1
  }

  /// Creating thread, or zero.
  pub fn thread_id(&self, hwnd: WindowHandle) -> ThreadId {
    self.api.window_thread_process_id(hwnd).0
  }

  /// Full path of the executable that owns the window.
  ///
  /// Opens the owning process with [`ProcessAccessRights::MODULE_QUERY`] only
  /// and closes it before returning. Empty if the window is stale or the
  /// process cannot be opened (exited, elevated, protected).
  pub fn executable_path(&self, hwnd: WindowHandle) -> String {
    let pid = self.process_id(hwnd);
    ProcessGuard::open(&*self.api, pid, ProcessAccessRights::MODULE_QUERY).map_or_else(
      String::new,
      |process| process.module_file_name(self.config.executable_path_capacity),
    )
  }

  /// Fill `placement` from the OS, setting its `length` first.
  ///
  /// On `false` the record's contents are unspecified and must not be read.
  pub fn fill_window_placement(&self, hwnd: WindowHandle, placement: &mut WindowPlacement) -> bool {
    placement.length = WindowPlacement::SIZE;
    self.api.window_placement(hwnd, placement)
  }

  /// Current placement, or `None` if the query failed.
  pub fn window_placement(&self, hwnd: WindowHandle) -> Option<WindowPlacement> {
    let mut placement = WindowPlacement::new();
    self
      .fill_window_placement(hwnd, &mut placement)
      .then_some(placement)
  }

  /// Snapshot of everything the query layer knows about `hwnd`.
  pub fn describe(&self, hwnd: WindowHandle) -> WindowInfo {
    WindowInfo {
      handle: hwnd,
      title: self.window_text(hwnd),
      class_name: self.class_name(hwnd),
      process_id: self.process_id(hwnd),
      executable_path: self.executable_path(hwnd),
      visible: self.is_visible(hwnd),
      placement: self.window_placement(hwnd),
    }
  }
}
