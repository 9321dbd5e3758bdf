/*! Moving, resizing, restacking and showing windows. */

use super::Desktop;
use crate::platform::NativeApi;
use crate::types::{
  Rect, ShowState, WinHandlesError, WinResult, WindowHandle, WindowPositionFlags, ZPosition,
};

impl<A: NativeApi> Desktop<A> {
  /// Move the window's top-left corner, keeping its size and z-order.
  /// The window is activated.
  pub fn set_window_xy(&self, hwnd: WindowHandle, x: i32, y: i32) -> WinResult<()> {
    self.set_window_pos(
      hwnd,
      WindowHandle::NULL,
      Rect::from_origin_size(x, y, 0, 0),
      WindowPositionFlags::NO_Z_ORDER | WindowPositionFlags::NO_SIZE,
    )
  }

  /// Resize the window, keeping its position and z-order. The window is
  /// activated.
  pub fn set_window_size(&self, hwnd: WindowHandle, width: i32, height: i32) -> WinResult<()> {
    self.set_window_pos(
      hwnd,
      WindowHandle::NULL,
      Rect::from_origin_size(0, 0, width, height),
      WindowPositionFlags::NO_Z_ORDER | WindowPositionFlags::NO_MOVE,
    )
  }

  /// Restack the window without moving, resizing or activating it.
  pub fn set_z_position(&self, hwnd: WindowHandle, position: ZPosition) -> WinResult<()> {
    self.set_window_pos(
      hwnd,
      position.insert_after(),
      Rect::default(),
      WindowPositionFlags::NO_ACTIVATE | WindowPositionFlags::NO_SIZE | WindowPositionFlags::NO_MOVE,
    )
  }

  /// Move and resize in one call, keeping z-order. The window is activated.
  pub fn set_window_bounds(&self, hwnd: WindowHandle, bounds: Rect) -> WinResult<()> {
    self.set_window_pos(
      hwnd,
      WindowHandle::NULL,
      bounds,
      WindowPositionFlags::NO_Z_ORDER,
    )
  }

  fn set_window_pos(
    &self,
    hwnd: WindowHandle,
    insert_after: WindowHandle,
    rect: Rect,
    flags: WindowPositionFlags,
  ) -> WinResult<()> {
    if hwnd.is_null() {
      return Err(WinHandlesError::NullHandle);
    }
    let (width, height) = rect.size();
    if self
      .api
      .set_window_pos(hwnd, insert_after, rect.left, rect.top, width, height, flags)
    {
      Ok(())
    } else {
      log::debug!("SetWindowPos failed for {hwnd} (flags {:#x})", flags.bits());
      Err(WinHandlesError::SetWindowPosFailed { handle: hwnd })
    }
  }

  /// Request a show state. Returns whether the window was visible before
  /// the call, which is also `false` for a stale handle.
  pub fn set_show_state(&self, hwnd: WindowHandle, state: ShowState) -> bool {
    self.api.show_window(hwnd, state)
  }

  /// Activate and show maximized.
  pub fn maximize_window(&self, hwnd: WindowHandle) -> bool {
    self.set_show_state(hwnd, ShowState::ShowMaximized)
  }

  /// Activate and show minimized.
  pub fn minimize_window(&self, hwnd: WindowHandle) -> bool {
    self.set_show_state(hwnd, ShowState::ShowMinimized)
  }

  /// Activate and show at normal size.
  pub fn show_window(&self, hwnd: WindowHandle) -> bool {
    self.set_show_state(hwnd, ShowState::ShowNormal)
  }

  /// Undo minimize or maximize. A window minimized from maximized comes back
  /// maximized.
  pub fn restore_window(&self, hwnd: WindowHandle) -> bool {
    self.set_show_state(hwnd, ShowState::Restore)
  }
}
