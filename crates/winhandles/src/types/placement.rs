/*! Show states and the window-placement record. */

use super::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::mem::{align_of, offset_of, size_of};

/// How a window is shown. Values are the OS `SW_*` constants.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShowState {
  /// Hides the window and activates another window.
  Hide = 0,
  /// Activates and displays the window, restoring it from minimized or maximized.
  ShowNormal = 1,
  /// Activates the window and displays it minimized.
  ShowMinimized = 2,
  /// Activates the window and displays it maximized. Same value as `MAXIMIZE`.
  ShowMaximized = 3,
  /// Displays the window in its most recent size and position without activating it.
  ShowNormalNoActivate = 4,
  /// Activates the window in its current size and position.
  Show = 5,
  /// Minimizes the window and activates the next top-level window in z-order.
  Minimize = 6,
  /// Displays the window minimized without activating it.
  ShowMinNoActivate = 7,
  /// Displays the window in its current size and position without activating it.
  ShowNoActivate = 8,
  /// Activates and displays the window, restoring it to its original size and position.
  Restore = 9,
  /// Uses the show state the launching process asked for.
  ShowDefault = 10,
  /// Minimizes the window even if its owning thread is hung.
  ForceMinimized = 11,
}

impl ShowState {
  /// `SW_MAXIMIZE` shares its value with `SW_SHOWMAXIMIZED`.
  pub const MAXIMIZE: Self = Self::ShowMaximized;

  pub const fn as_raw(self) -> u32 {
    self as u32
  }

  /// Decode a raw `SW_*` value. `None` for values outside the OS contract.
  pub const fn from_raw(raw: u32) -> Option<Self> {
    Some(match raw {
      0 => Self::Hide,
      1 => Self::ShowNormal,
      2 => Self::ShowMinimized,
      3 => Self::ShowMaximized,
      4 => Self::ShowNormalNoActivate,
      5 => Self::Show,
      6 => Self::Minimize,
      7 => Self::ShowMinNoActivate,
      8 => Self::ShowNoActivate,
      9 => Self::Restore,
      10 => Self::ShowDefault,
      11 => Self::ForceMinimized,
      _ => return None,
    })
  }

  /// States that leave the window minimized.
  pub const fn is_minimized(self) -> bool {
    matches!(
      self,
      Self::ShowMinimized | Self::Minimize | Self::ShowMinNoActivate | Self::ForceMinimized
    )
  }
}

impl TryFrom<u32> for ShowState {
  type Error = u32;

  fn try_from(raw: u32) -> Result<Self, Self::Error> {
    Self::from_raw(raw).ok_or(raw)
  }
}

impl From<ShowState> for u32 {
  fn from(state: ShowState) -> Self {
    state.as_raw()
  }
}

/// Snapshot of a window's show state and its minimized, maximized and
/// restored geometry. Layout matches Win32 `WINDOWPLACEMENT` (44 bytes).
///
/// `length` must hold [`WindowPlacement::SIZE`] before the record is passed
/// to the OS, otherwise the query fails. After a failed query every other
/// field is unspecified: do not read it.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowPlacement {
  pub length: u32,
  pub flags: u32,
  /// Raw `SW_*` value as written by the OS. See [`WindowPlacement::show_state`].
  pub show_cmd: u32,
  pub min_position: Point,
  pub max_position: Point,
  pub normal_position: Rect,
}

impl WindowPlacement {
  /// Byte size the OS expects in `length`.
  #[allow(clippy::cast_possible_truncation)]
  pub const SIZE: u32 = size_of::<Self>() as u32;

  /// `WPF_SETMINPOSITION`
  pub const SET_MIN_POSITION: u32 = 0x1;
  /// `WPF_RESTORETOMAXIMIZED`: restoring from minimized goes back to maximized.
  pub const RESTORE_TO_MAXIMIZED: u32 = 0x2;
  /// `WPF_ASYNCWINDOWPLACEMENT`
  pub const ASYNC_WINDOW_PLACEMENT: u32 = 0x4;

  /// Zeroed record with `length` already set.
  pub const fn new() -> Self {
    Self {
      length: Self::SIZE,
      flags: 0,
      show_cmd: 0,
      min_position: Point::new(0, 0),
      max_position: Point::new(0, 0),
      normal_position: Rect::new(0, 0, 0, 0),
    }
  }

  pub const fn has_valid_length(&self) -> bool {
    self.length == Self::SIZE
  }

  pub const fn show_state(&self) -> Option<ShowState> {
    ShowState::from_raw(self.show_cmd)
  }

  pub fn set_show_state(&mut self, state: ShowState) {
    self.show_cmd = state.as_raw();
  }

  pub const fn restores_to_maximized(&self) -> bool {
    self.flags & Self::RESTORE_TO_MAXIMIZED != 0
  }
}

const _: () = assert!(size_of::<WindowPlacement>() == 44);
const _: () = assert!(align_of::<WindowPlacement>() == 4);
const _: () = assert!(offset_of!(WindowPlacement, length) == 0);
const _: () = assert!(offset_of!(WindowPlacement, flags) == 4);
const _: () = assert!(offset_of!(WindowPlacement, show_cmd) == 8);
const _: () = assert!(offset_of!(WindowPlacement, min_position) == 12);
const _: () = assert!(offset_of!(WindowPlacement, max_position) == 20);
const _: () = assert!(offset_of!(WindowPlacement, normal_position) == 28);
