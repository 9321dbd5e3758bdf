/*! Walking the top-level window list. */

use super::Desktop;
use crate::platform::{names_match, NativeApi};
use crate::types::{WinResult, WindowHandle};

impl<A: NativeApi> Desktop<A> {
  /// Visit every top-level window front to back until `visit` returns false.
  ///
  /// The visitor runs synchronously on this thread. Windows may be created or
  /// destroyed mid-walk; handles already visited can go stale. A panic in
  /// the visitor ends the walk and resumes on the caller's side once the OS
  /// callback has returned.
  pub fn for_each_window<F>(&self, mut visit: F) -> WinResult<()>
  where
    F: FnMut(WindowHandle) -> bool,
  {
    self.api.enum_windows(&mut visit)
  }

  /// All top-level windows in z-order, including hidden and zero-sized ones.
  ///
  /// Empty when the OS walk fails; partial results are never returned. Use
  /// [`Desktop::try_windows`] to see the failure.
  pub fn windows(&self) -> Vec<WindowHandle> {
    self.try_windows().unwrap_or_else(|e| {
      log::warn!("Window enumeration failed: {e}");
      Vec::new()
    })
  }

  /// Like [`Desktop::windows`], surfacing enumeration failure.
  pub fn try_windows(&self) -> WinResult<Vec<WindowHandle>> {
    let mut handles = Vec::new();
    self.for_each_window(|hwnd| {
      handles.push(hwnd);
      true
    })?;
    Ok(handles)
  }

  /// [`Desktop::windows`] filtered to visible windows.
  pub fn visible_windows(&self) -> Vec<WindowHandle> {
    let mut handles = self.windows();
    handles.retain(|hwnd| self.api.is_window_visible(*hwnd));
    handles
  }

  /// The active window, or null when nothing has focus.
  pub fn foreground_window(&self) -> WindowHandle {
    self.api.foreground_window()
  }

  /// First window whose class name and title match.
  ///
  /// Whole strings are compared, ignoring case. An empty criterion is not
  /// filtered on. Null when nothing matches.
  pub fn find_window(&self, class_name: &str, title: &str) -> WindowHandle {
    self
      .api
      .find_window(non_empty(class_name), non_empty(title))
  }

  /// Every window matching [`Desktop::find_window`]'s criteria, in z-order.
  /// Empty if enumeration fails.
  pub fn find_windows(&self, class_name: &str, title: &str) -> Vec<WindowHandle> {
    let (class_name, title) = (non_empty(class_name), non_empty(title));
    let mut matches = Vec::new();
    let walked = self.for_each_window(|hwnd| {
      let class_ok = class_name.is_none_or(|c| names_match(&self.class_name(hwnd), c));
      if class_ok && title.is_none_or(|t| names_match(&self.window_text(hwnd), t)) {
        matches.push(hwnd);
      }
      true
    });
    if let Err(e) = walked {
      log::warn!("Window enumeration failed: {e}");
      matches.clear();
    }
    matches
  }
}

fn non_empty(s: &str) -> Option<&str> {
  if s.is_empty() {
    None
  } else {
    Some(s)
  }
}
