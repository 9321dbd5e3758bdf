/*! Backend for targets without a Win32 window manager.

Enumeration reports [`WinHandlesError::UnsupportedPlatform`] so callers can
tell "no windows" from "no window system". Every other call answers with the
neutral value a stale handle would produce.
*/

use super::NativeApi;
use crate::types::{
  ProcessAccessRights, ProcessId, RawProcessHandle, ShowState, ThreadId, WinHandlesError,
  WinResult, WindowHandle, WindowPlacement, WindowPositionFlags,
};

/// [`NativeApi`] that knows no windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedApi;

impl NativeApi for UnsupportedApi {
  fn enum_windows(&self, _visit: &mut dyn FnMut(WindowHandle) -> bool) -> WinResult<()> {
    Err(WinHandlesError::UnsupportedPlatform)
  }

  fn find_window(&self, _class_name: Option<&str>, _title: Option<&str>) -> WindowHandle {
    WindowHandle::NULL
  }

  fn is_window_visible(&self, _hwnd: WindowHandle) -> bool {
    false
  }

  fn foreground_window(&self) -> WindowHandle {
    WindowHandle::NULL
  }

  fn window_thread_process_id(&self, _hwnd: WindowHandle) -> (ThreadId, ProcessId) {
    (ThreadId::default(), ProcessId::NONE)
  }

  fn window_text_length(&self, _hwnd: WindowHandle) -> usize {
    0
  }

  fn window_text(&self, _hwnd: WindowHandle, _buf: &mut [u16]) -> usize {
    0
  }

  fn class_name(&self, _hwnd: WindowHandle, _buf: &mut [u16]) -> usize {
    0
  }

  fn window_placement(&self, _hwnd: WindowHandle, _placement: &mut WindowPlacement) -> bool {
    false
  }

  fn set_window_pos(
    &self,
    _hwnd: WindowHandle,
    _insert_after: WindowHandle,
    _x: i32,
    _y: i32,
    _cx: i32,
    _cy: i32,
    _flags: WindowPositionFlags,
  ) -> bool {
    false
  }

  fn show_window(&self, _hwnd: WindowHandle, _state: ShowState) -> bool {
    false
  }

  fn open_process(
    &self,
    _pid: ProcessId,
    _access: ProcessAccessRights,
  ) -> Option<RawProcessHandle> {
    None
  }

  fn module_file_name(&self, _process: RawProcessHandle, _buf: &mut [u16]) -> usize {
    0
  }

  fn close_process(&self, _process: RawProcessHandle) -> bool {
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn enumeration_reports_unsupported() {
    let result = UnsupportedApi.enum_windows(&mut |_| true);
    assert!(matches!(result, Err(WinHandlesError::UnsupportedPlatform)));
  }

  #[test]
  fn queries_are_neutral() {
    let api = UnsupportedApi;
    let hwnd = WindowHandle::from_raw(0x10);
    let mut buf = [0u16; 8];
    assert!(api.find_window(None, Some("x")).is_null());
    assert!(api.foreground_window().is_null());
    assert!(!api.is_window_visible(hwnd));
    assert_eq!(api.class_name(hwnd, &mut buf), 0);
    assert!(api.open_process(ProcessId(4), ProcessAccessRights::MODULE_QUERY).is_none());
  }
}
