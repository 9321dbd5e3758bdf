/*! The window handle value type. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Identifies one top-level window by its native handle (`HWND`).
///
/// A plain value: copying it is free, comparing compares the raw handle, and
/// dropping it does nothing. The OS owns the window; the handle can go stale
/// the moment another process destroys it, and every operation taking a
/// handle degrades to an empty result when that happens.
#[derive(
  Debug,
  Default,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  From,
  Into,
)]
#[display("{_0:#x}")]
#[serde(transparent)]
pub struct WindowHandle(isize);

impl WindowHandle {
  /// "No window".
  pub const NULL: Self = Self(0);

  pub const fn from_raw(raw: isize) -> Self {
    Self(raw)
  }

  pub const fn as_raw(self) -> isize {
    self.0
  }

  pub const fn is_null(self) -> bool {
    self.0 == 0
  }

  /// `None` for the null handle.
  pub const fn non_null(self) -> Option<Self> {
    if self.is_null() {
      None
    } else {
      Some(self)
    }
  }
}

/// Where a window goes in the z-order.
///
/// The sentinels map to the OS `HWND_TOP`, `HWND_BOTTOM`, `HWND_TOPMOST` and
/// `HWND_NOTOPMOST` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZPosition {
  /// Front of the non-topmost band.
  Top,
  /// Back of the stack.
  Bottom,
  /// Above all non-topmost windows, staying there when deactivated.
  Topmost,
  /// Behind all topmost windows.
  NoTopmost,
  /// Directly behind the given window.
  After(WindowHandle),
}

impl ZPosition {
  /// The insert-after handle passed to the native geometry call.
  pub const fn insert_after(self) -> WindowHandle {
    match self {
      Self::Top => WindowHandle(0),
      Self::Bottom => WindowHandle(1),
      Self::Topmost => WindowHandle(-1),
      Self::NoTopmost => WindowHandle(-2),
      Self::After(handle) => handle,
    }
  }

  /// Inverse of [`ZPosition::insert_after`].
  pub const fn from_insert_after(handle: WindowHandle) -> Self {
    match handle.0 {
      0 => Self::Top,
      1 => Self::Bottom,
      -1 => Self::Topmost,
      -2 => Self::NoTopmost,
      _ => Self::After(handle),
    }
  }
}

impl From<WindowHandle> for ZPosition {
  fn from(handle: WindowHandle) -> Self {
    Self::After(handle)
  }
}
