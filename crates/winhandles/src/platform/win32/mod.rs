/*!
Win32 backend.

All `unsafe` in the crate lives under this module. The value types cross the
boundary by pointer cast, so their layout is checked against the `windows`
crate's definitions here at compile time.
*/

#![allow(unsafe_code)]

mod api;

use crate::types::{Point, RawProcessHandle, Rect, WindowHandle, WindowPlacement};
use std::ffi::c_void;
use std::mem::{align_of, size_of};
use windows::Win32::Foundation::{HANDLE, HWND, POINT, RECT};
use windows::Win32::UI::WindowsAndMessaging::WINDOWPLACEMENT;

/// [`NativeApi`](crate::NativeApi) over user32, kernel32 and psapi.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Api;

const _: () = assert!(size_of::<Point>() == size_of::<POINT>());
const _: () = assert!(align_of::<Point>() == align_of::<POINT>());
const _: () = assert!(size_of::<Rect>() == size_of::<RECT>());
const _: () = assert!(align_of::<Rect>() == align_of::<RECT>());
const _: () = assert!(size_of::<WindowPlacement>() == size_of::<WINDOWPLACEMENT>());
const _: () = assert!(align_of::<WindowPlacement>() == align_of::<WINDOWPLACEMENT>());

fn hwnd(handle: WindowHandle) -> HWND {
  HWND(handle.as_raw() as *mut c_void)
}

fn window_handle(hwnd: HWND) -> WindowHandle {
  WindowHandle::from_raw(hwnd.0 as isize)
}

fn process_handle(process: RawProcessHandle) -> HANDLE {
  HANDLE(process.0 as *mut c_void)
}

/// NUL-terminated UTF-16 copy of `s`.
fn wide_nul(s: &str) -> Vec<u16> {
  s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Win32 length results are `i32`; negative means failure.
fn unit_count(len: i32) -> usize {
  usize::try_from(len).unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wide_nul_terminates() {
    assert_eq!(wide_nul("ab"), vec![u16::from(b'a'), u16::from(b'b'), 0]);
    assert_eq!(wide_nul(""), vec![0]);
  }

  #[test]
  fn handle_conversion_round_trips() {
    let handle = WindowHandle::from_raw(0x0003_04a2);
    assert_eq!(window_handle(hwnd(handle)), handle);
  }

  #[test]
  fn visitor_panic_unwinds_to_the_caller() {
    use crate::platform::NativeApi;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let mut visits = 0;
    let outcome = catch_unwind(AssertUnwindSafe(|| {
      Win32Api.enum_windows(&mut |_| {
        visits += 1;
        panic!("visitor failed");
      })
    }));
    assert!(outcome.is_err(), "panic surfaced instead of aborting");
    assert!(visits <= 1, "walk stopped at the panic");
    assert!(Win32Api.enum_windows(&mut |_| false).is_ok(), "still usable");
  }

  #[test]
  fn negative_lengths_are_zero() {
    assert_eq!(unit_count(-1), 0);
    assert_eq!(unit_count(12), 12);
  }
}
