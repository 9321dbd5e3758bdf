/*! [`NativeApi`] implementation over the `windows` crate. */

use super::{hwnd, process_handle, unit_count, wide_nul, window_handle, Win32Api};
use crate::platform::NativeApi;
use crate::types::{
  ProcessAccessRights, ProcessId, RawProcessHandle, ShowState, ThreadId, WinHandlesError,
  WinResult, WindowHandle, WindowPlacement, WindowPositionFlags,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use windows::core::{BOOL, PCWSTR};
use windows::Win32::Foundation::{CloseHandle, HWND, LPARAM};
use windows::Win32::System::ProcessStatus::GetModuleFileNameExW;
use windows::Win32::System::Threading::{OpenProcess, PROCESS_ACCESS_RIGHTS};
use windows::Win32::UI::WindowsAndMessaging::{
  EnumWindows, FindWindowW, GetClassNameW, GetForegroundWindow, GetWindowPlacement,
  GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible, SetWindowPos,
  ShowWindow, SET_WINDOW_POS_FLAGS, SHOW_WINDOW_CMD, WINDOWPLACEMENT,
};

/// Passed through `EnumWindows`' `LPARAM`.
struct EnumState<'a, 'f> {
  visit: &'a mut (dyn FnMut(WindowHandle) -> bool + 'f),
  stopped: bool,
  /// A visitor panic, held until `EnumWindows` has returned. Unwinding
  /// through the `extern "system"` callback would abort.
  panic: Option<Box<dyn Any + Send>>,
}

unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
  // SAFETY: lparam is the `EnumState` borrowed by `enum_windows`, which
  // outlives the synchronous `EnumWindows` call that invokes us.
  let state = unsafe { &mut *(lparam.0 as *mut EnumState<'_, '_>) };
  let visit = &mut *state.visit;
  let keep_going = match panic::catch_unwind(AssertUnwindSafe(|| visit(window_handle(hwnd)))) {
    Ok(keep_going) => keep_going,
    Err(payload) => {
      state.panic = Some(payload);
      false
    }
  };
  state.stopped = !keep_going;
  BOOL::from(keep_going)
}

impl NativeApi for Win32Api {
  fn enum_windows(&self, visit: &mut dyn FnMut(WindowHandle) -> bool) -> WinResult<()> {
    let mut state = EnumState {
      visit,
      stopped: false,
      panic: None,
    };
    let lparam = LPARAM(std::ptr::from_mut(&mut state) as isize);
    // SAFETY: `enum_proc` only dereferences lparam during this call.
    let result = unsafe { EnumWindows(Some(enum_proc), lparam) };
    if let Some(payload) = state.panic.take() {
      panic::resume_unwind(payload);
    }
    match result {
      Ok(()) => Ok(()),
      // A visitor returning false makes EnumWindows report failure.
      Err(_) if state.stopped => Ok(()),
      Err(e) => Err(WinHandlesError::EnumerationFailed {
        reason: e.to_string(),
      }),
    }
  }

  fn find_window(&self, class_name: Option<&str>, title: Option<&str>) -> WindowHandle {
    let class_name = class_name.map(wide_nul);
    let title = title.map(wide_nul);
    let class_ptr = class_name
      .as_ref()
      .map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr()));
    let title_ptr = title.as_ref().map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr()));
    // SAFETY: both pointers are null or point at live NUL-terminated buffers.
    unsafe { FindWindowW(class_ptr, title_ptr) }.map_or(WindowHandle::NULL, window_handle)
  }

  fn is_window_visible(&self, handle: WindowHandle) -> bool {
    unsafe { IsWindowVisible(hwnd(handle)) }.as_bool()
  }

  fn foreground_window(&self) -> WindowHandle {
    window_handle(unsafe { GetForegroundWindow() })
  }

  fn window_thread_process_id(&self, handle: WindowHandle) -> (ThreadId, ProcessId) {
    let mut pid = 0u32;
    let tid = unsafe { GetWindowThreadProcessId(hwnd(handle), Some(&raw mut pid)) };
    if tid == 0 {
      return (ThreadId::default(), ProcessId::NONE);
    }
    (ThreadId(tid), ProcessId(pid))
  }

  fn window_text_length(&self, handle: WindowHandle) -> usize {
    unit_count(unsafe { GetWindowTextLengthW(hwnd(handle)) })
  }

  fn window_text(&self, handle: WindowHandle, buf: &mut [u16]) -> usize {
    if buf.is_empty() {
      return 0;
    }
    unit_count(unsafe { GetWindowTextW(hwnd(handle), buf) })
  }

  fn class_name(&self, handle: WindowHandle, buf: &mut [u16]) -> usize {
    if buf.is_empty() {
      return 0;
    }
    unit_count(unsafe { GetClassNameW(hwnd(handle), buf) })
  }

  fn window_placement(&self, handle: WindowHandle, placement: &mut WindowPlacement) -> bool {
    // Not every Windows build enforces the length contract; enforce it here.
    if !placement.has_valid_length() {
      return false;
    }
    let ptr = std::ptr::from_mut(placement).cast::<WINDOWPLACEMENT>();
    // SAFETY: layouts are asserted equal in the parent module.
    unsafe { GetWindowPlacement(hwnd(handle), ptr) }.is_ok()
  }

  fn set_window_pos(
    &self,
    handle: WindowHandle,
    insert_after: WindowHandle,
    x: i32,
    y: i32,
    cx: i32,
    cy: i32,
    flags: WindowPositionFlags,
  ) -> bool {
    unsafe {
      SetWindowPos(
        hwnd(handle),
        Some(hwnd(insert_after)),
        x,
        y,
        cx,
        cy,
        SET_WINDOW_POS_FLAGS(flags.bits()),
      )
    }
    .is_ok()
  }

  #[allow(clippy::cast_possible_wrap)]
  fn show_window(&self, handle: WindowHandle, state: ShowState) -> bool {
    unsafe { ShowWindow(hwnd(handle), SHOW_WINDOW_CMD(state.as_raw() as i32)) }.as_bool()
  }

  fn open_process(
    &self,
    pid: ProcessId,
    access: ProcessAccessRights,
  ) -> Option<RawProcessHandle> {
    match unsafe { OpenProcess(PROCESS_ACCESS_RIGHTS(access.bits()), false, pid.0) } {
      Ok(handle) if !handle.is_invalid() => Some(RawProcessHandle(handle.0 as isize)),
      Ok(_) => None,
      Err(e) => {
        log::debug!("OpenProcess({pid}) failed: {e}");
        None
      }
    }
  }

  fn module_file_name(&self, process: RawProcessHandle, buf: &mut [u16]) -> usize {
    if buf.is_empty() {
      return 0;
    }
    let copied = unsafe { GetModuleFileNameExW(Some(process_handle(process)), None, buf) };
    usize::try_from(copied).unwrap_or(0)
  }

  fn close_process(&self, process: RawProcessHandle) -> bool {
    unsafe { CloseHandle(process_handle(process)) }.is_ok()
  }
}
