/*!
In-memory desktop implementing [`NativeApi`].

Lets code built on [`Desktop`](crate::Desktop) be tested without a window
system: windows live in a z-ordered list, show-state requests move them
between normal, minimized and maximized the way the OS does, and process
opens are counted so leaks show up in assertions.

```
use winhandles::fake::{FakeApi, FakeWindow};
use winhandles::Desktop;

let api = FakeApi::new();
let hwnd = api.add_window(FakeWindow::new("Inbox").class_name("MailWnd"));
let desktop = Desktop::with_api(api);
assert_eq!(desktop.find_window("MailWnd", ""), hwnd);
```
*/

use super::{names_match, NativeApi};
use crate::types::{
  Point, ProcessAccessRights, ProcessId, RawProcessHandle, Rect, ShowState, ThreadId,
  WinHandlesError, WinResult, WindowHandle, WindowPlacement, WindowPositionFlags,
};
use parking_lot::Mutex;
use std::collections::HashMap;

const FIRST_WINDOW_HANDLE: isize = 0x0001_0010;
const WINDOW_HANDLE_STEP: isize = 0x10;
const FIRST_PROCESS_HANDLE: isize = 0x204;
const PROCESS_HANDLE_STEP: isize = 4;

/// A window to place on the fake desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeWindow {
  pub title: String,
  pub class_name: String,
  pub process_id: ProcessId,
  pub thread_id: ThreadId,
  pub visible: bool,
  /// `length` is kept at [`WindowPlacement::SIZE`].
  pub placement: WindowPlacement,
}

impl FakeWindow {
  /// Visible, normal 800x600 window at the origin.
  pub fn new(title: impl Into<String>) -> Self {
    let mut placement = WindowPlacement::new();
    placement.set_show_state(ShowState::ShowNormal);
    placement.normal_position = Rect::from_origin_size(0, 0, 800, 600);
    placement.min_position = Point::new(-1, -1);
    placement.max_position = Point::new(-1, -1);
    Self {
      title: title.into(),
      class_name: "FakeWindowClass".to_string(),
      process_id: ProcessId::NONE,
      thread_id: ThreadId::default(),
      visible: true,
      placement,
    }
  }

  #[must_use]
  pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
    self.class_name = class_name.into();
    self
  }

  /// Owning process; the thread id is derived from it.
  #[must_use]
  pub fn process(mut self, pid: ProcessId) -> Self {
    self.process_id = pid;
    self.thread_id = ThreadId(pid.0.wrapping_add(4));
    self
  }

  #[must_use]
  pub fn bounds(mut self, rect: Rect) -> Self {
    self.placement.normal_position = rect;
    self
  }

  #[must_use]
  pub fn hidden(mut self) -> Self {
    self.visible = false;
    self
  }

  #[must_use]
  pub fn show_state(mut self, state: ShowState) -> Self {
    self.placement.set_show_state(state);
    self
  }
}

#[derive(Debug, Clone)]
struct FakeProcess {
  executable_path: String,
  denied: bool,
}

#[derive(Debug)]
struct FakeState {
  /// Front to back.
  windows: Vec<(WindowHandle, FakeWindow)>,
  next_window: isize,
  foreground: WindowHandle,
  processes: HashMap<ProcessId, FakeProcess>,
  open_processes: HashMap<RawProcessHandle, ProcessId>,
  next_process: isize,
  total_opened: usize,
  last_access: Option<ProcessAccessRights>,
  fail_enumeration: bool,
}

impl Default for FakeState {
  fn default() -> Self {
    Self {
      windows: Vec::new(),
      next_window: FIRST_WINDOW_HANDLE,
      foreground: WindowHandle::NULL,
      processes: HashMap::new(),
      open_processes: HashMap::new(),
      next_process: FIRST_PROCESS_HANDLE,
      total_opened: 0,
      last_access: None,
      fail_enumeration: false,
    }
  }
}

impl FakeState {
  fn position(&self, hwnd: WindowHandle) -> Option<usize> {
    self.windows.iter().position(|(h, _)| *h == hwnd)
  }

  fn window(&self, hwnd: WindowHandle) -> Option<&FakeWindow> {
    self.windows.iter().find(|(h, _)| *h == hwnd).map(|(_, w)| w)
  }

  fn window_mut(&mut self, hwnd: WindowHandle) -> Option<&mut FakeWindow> {
    self
      .windows
      .iter_mut()
      .find(|(h, _)| *h == hwnd)
      .map(|(_, w)| w)
  }
}

/// Fake [`NativeApi`]. State sits behind a mutex, so one instance can serve
/// several threads.
#[derive(Debug, Default)]
pub struct FakeApi {
  state: Mutex<FakeState>,
}

impl FakeApi {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a window at the back of the z-order and return its handle.
  pub fn add_window(&self, window: FakeWindow) -> WindowHandle {
    let mut state = self.state.lock();
    let handle = WindowHandle::from_raw(state.next_window);
    state.next_window += WINDOW_HANDLE_STEP;
    state.windows.push((handle, window));
    handle
  }

  /// Destroy a window. Its handle goes stale; returns false if it already was.
  pub fn destroy_window(&self, hwnd: WindowHandle) -> bool {
    let mut state = self.state.lock();
    let Some(index) = state.position(hwnd) else {
      return false;
    };
    state.windows.remove(index);
    if state.foreground == hwnd {
      state.foreground = WindowHandle::NULL;
    }
    true
  }

  pub fn set_title(&self, hwnd: WindowHandle, title: impl Into<String>) {
    if let Some(window) = self.state.lock().window_mut(hwnd) {
      window.title = title.into();
    }
  }

  /// Make `hwnd` the active window. Pass the null handle to clear focus.
  pub fn set_foreground(&self, hwnd: WindowHandle) {
    self.state.lock().foreground = hwnd;
  }

  /// Register a process whose main module lives at `executable_path`.
  pub fn add_process(&self, pid: ProcessId, executable_path: impl Into<String>) {
    self.state.lock().processes.insert(
      pid,
      FakeProcess {
        executable_path: executable_path.into(),
        denied: false,
      },
    );
  }

  /// Make opens of `pid` fail as if the caller lacked privilege.
  pub fn deny_process(&self, pid: ProcessId) {
    if let Some(process) = self.state.lock().processes.get_mut(&pid) {
      process.denied = true;
    }
  }

  /// Make every enumeration fail until switched off.
  pub fn fail_enumeration(&self, fail: bool) {
    self.state.lock().fail_enumeration = fail;
  }

  /// Current z-order, front to back.
  pub fn z_order(&self) -> Vec<WindowHandle> {
    self.state.lock().windows.iter().map(|(h, _)| *h).collect()
  }

  pub fn window(&self, hwnd: WindowHandle) -> Option<FakeWindow> {
    self.state.lock().window(hwnd).cloned()
  }

  /// Process handles opened and not yet closed.
  pub fn open_process_handles(&self) -> usize {
    self.state.lock().open_processes.len()
  }

  /// Successful opens since creation.
  pub fn total_process_opens(&self) -> usize {
    self.state.lock().total_opened
  }

  /// Rights asked for by the most recent open attempt.
  pub fn last_access_rights(&self) -> Option<ProcessAccessRights> {
    self.state.lock().last_access
  }
}

/// Copy with the native truncation rule: at most `buf.len() - 1` units plus a
/// terminator.
fn copy_units(src: &str, buf: &mut [u16]) -> usize {
  let Some(room) = buf.len().checked_sub(1) else {
    return 0;
  };
  let mut copied = 0;
  for (dst, unit) in buf.iter_mut().zip(src.encode_utf16().take(room)) {
    *dst = unit;
    copied += 1;
  }
  if let Some(terminator) = buf.get_mut(copied) {
    *terminator = 0;
  }
  copied
}

fn restore(window: &mut FakeWindow) {
  let placement = &mut window.placement;
  let minimized = placement.show_state().is_some_and(ShowState::is_minimized);
  if minimized && placement.restores_to_maximized() {
    placement.set_show_state(ShowState::ShowMaximized);
  } else {
    placement.set_show_state(ShowState::ShowNormal);
  }
  placement.flags &= !WindowPlacement::RESTORE_TO_MAXIMIZED;
}

fn minimize(window: &mut FakeWindow) {
  let placement = &mut window.placement;
  match placement.show_state() {
    Some(ShowState::ShowMaximized) => placement.flags |= WindowPlacement::RESTORE_TO_MAXIMIZED,
    Some(state) if state.is_minimized() => {}
    _ => placement.flags &= !WindowPlacement::RESTORE_TO_MAXIMIZED,
  }
  placement.set_show_state(ShowState::ShowMinimized);
}

impl NativeApi for FakeApi {
  fn enum_windows(&self, visit: &mut dyn FnMut(WindowHandle) -> bool) -> WinResult<()> {
    let handles = {
      let state = self.state.lock();
      if state.fail_enumeration {
        return Err(WinHandlesError::EnumerationFailed {
          reason: "injected failure".to_string(),
        });
      }
      state.windows.iter().map(|(h, _)| *h).collect::<Vec<_>>()
    };
    for handle in handles {
      if !visit(handle) {
        break;
      }
    }
    Ok(())
  }

  fn find_window(&self, class_name: Option<&str>, title: Option<&str>) -> WindowHandle {
    let state = self.state.lock();
    state
      .windows
      .iter()
      .find(|(_, w)| {
        class_name.is_none_or(|c| names_match(&w.class_name, c))
          && title.is_none_or(|t| names_match(&w.title, t))
      })
      .map_or(WindowHandle::NULL, |(h, _)| *h)
  }

  fn is_window_visible(&self, hwnd: WindowHandle) -> bool {
    self.state.lock().window(hwnd).is_some_and(|w| w.visible)
  }

  fn foreground_window(&self) -> WindowHandle {
    let state = self.state.lock();
    if state.window(state.foreground).is_some() {
      state.foreground
    } else {
      WindowHandle::NULL
    }
  }

  fn window_thread_process_id(&self, hwnd: WindowHandle) -> (ThreadId, ProcessId) {
    self
      .state
      .lock()
      .window(hwnd)
      .map_or((ThreadId::default(), ProcessId::NONE), |w| {
        (w.thread_id, w.process_id)
      })
  }

  fn window_text_length(&self, hwnd: WindowHandle) -> usize {
    self
      .state
      .lock()
      .window(hwnd)
      .map_or(0, |w| w.title.encode_utf16().count())
  }

  fn window_text(&self, hwnd: WindowHandle, buf: &mut [u16]) -> usize {
    self
      .state
      .lock()
      .window(hwnd)
      .map_or(0, |w| copy_units(&w.title, buf))
  }

  fn class_name(&self, hwnd: WindowHandle, buf: &mut [u16]) -> usize {
    self
      .state
      .lock()
      .window(hwnd)
      .map_or(0, |w| copy_units(&w.class_name, buf))
  }

  fn window_placement(&self, hwnd: WindowHandle, placement: &mut WindowPlacement) -> bool {
    if !placement.has_valid_length() {
      return false;
    }
    let state = self.state.lock();
    let Some(window) = state.window(hwnd) else {
      return false;
    };
    *placement = window.placement;
    placement.length = WindowPlacement::SIZE;
    true
  }

  fn set_window_pos(
    &self,
    hwnd: WindowHandle,
    insert_after: WindowHandle,
    x: i32,
    y: i32,
    cx: i32,
    cy: i32,
    flags: WindowPositionFlags,
  ) -> bool {
    let mut state = self.state.lock();
    let Some(index) = state.position(hwnd) else {
      return false;
    };

    let reorder = !flags.contains(WindowPositionFlags::NO_Z_ORDER);
    // Anchors must exist before anything changes.
    let anchor = match insert_after.as_raw() {
      -2..=1 => None,
      _ if insert_after == hwnd => None,
      _ if reorder => match state.position(insert_after) {
        Some(_) => Some(insert_after),
        None => return false,
      },
      _ => None,
    };

    if let Some(window) = state.window_mut(hwnd) {
      let rect = &mut window.placement.normal_position;
      let (width, height) = rect.size();
      if !flags.contains(WindowPositionFlags::NO_MOVE) {
        *rect = Rect::from_origin_size(x, y, width, height);
      }
      if !flags.contains(WindowPositionFlags::NO_SIZE) {
        *rect = Rect::from_origin_size(rect.left, rect.top, cx, cy);
      }
    }

    if reorder && insert_after != hwnd {
      let entry = state.windows.remove(index);
      let target = match (insert_after.as_raw(), anchor) {
        (1, _) => state.windows.len(),
        (_, Some(anchor)) => state.position(anchor).map_or(0, |i| i + 1),
        _ => 0,
      };
      state.windows.insert(target, entry);
    }
    if !flags.contains(WindowPositionFlags::NO_ACTIVATE) {
      state.foreground = hwnd;
    }
    true
  }

  fn show_window(&self, hwnd: WindowHandle, show: ShowState) -> bool {
    let mut state = self.state.lock();
    let Some(window) = state.window_mut(hwnd) else {
      return false;
    };
    let was_visible = window.visible;
    match show {
      ShowState::Hide => window.visible = false,
      ShowState::ShowNormal | ShowState::ShowNormalNoActivate | ShowState::Restore => {
        restore(window);
        window.visible = true;
      }
      ShowState::ShowMinimized
      | ShowState::Minimize
      | ShowState::ShowMinNoActivate
      | ShowState::ForceMinimized => {
        minimize(window);
        window.visible = true;
      }
      ShowState::ShowMaximized => {
        window.placement.set_show_state(ShowState::ShowMaximized);
        window.placement.flags &= !WindowPlacement::RESTORE_TO_MAXIMIZED;
        window.visible = true;
      }
      ShowState::Show | ShowState::ShowNoActivate | ShowState::ShowDefault => {
        window.visible = true;
      }
    }
    was_visible
  }

  fn open_process(
    &self,
    pid: ProcessId,
    access: ProcessAccessRights,
  ) -> Option<RawProcessHandle> {
    let mut state = self.state.lock();
    state.last_access = Some(access);
    let process = state.processes.get(&pid)?;
    if process.denied {
      return None;
    }
    let handle = RawProcessHandle(state.next_process);
    state.next_process += PROCESS_HANDLE_STEP;
    state.open_processes.insert(handle, pid);
    state.total_opened += 1;
    Some(handle)
  }

  fn module_file_name(&self, process: RawProcessHandle, buf: &mut [u16]) -> usize {
    let state = self.state.lock();
    state
      .open_processes
      .get(&process)
      .and_then(|pid| state.processes.get(pid))
      .map_or(0, |p| copy_units(&p.executable_path, buf))
  }

  fn close_process(&self, process: RawProcessHandle) -> bool {
    self.state.lock().open_processes.remove(&process).is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn desktop_of(titles: &[&str]) -> (FakeApi, Vec<WindowHandle>) {
    let api = FakeApi::new();
    let handles = titles
      .iter()
      .map(|t| api.add_window(FakeWindow::new(*t)))
      .collect();
    (api, handles)
  }

  mod copy_units {
    use super::*;

    #[test]
    fn truncates_to_capacity_minus_one() {
      let mut buf = [0xFFFFu16; 4];
      assert_eq!(copy_units("abcdef", &mut buf), 3);
      assert_eq!(buf, [97, 98, 99, 0]);
    }

    #[test]
    fn empty_buffer_copies_nothing() {
      assert_eq!(copy_units("abc", &mut []), 0);
    }
  }

  mod enumeration {
    use super::*;

    #[test]
    fn visits_in_insertion_order() {
      let (api, handles) = desktop_of(&["a", "b", "c"]);
      let mut seen = Vec::new();
      api
        .enum_windows(&mut |h| {
          seen.push(h);
          true
        })
        .unwrap();
      assert_eq!(seen, handles);
    }

    #[test]
    fn visitor_can_reenter_the_api() {
      let (api, _) = desktop_of(&["a", "b"]);
      let mut lengths = Vec::new();
      api
        .enum_windows(&mut |h| {
          lengths.push(api.window_text_length(h));
          true
        })
        .unwrap();
      assert_eq!(lengths, vec![1, 1]);
    }

    #[test]
    fn injected_failure() {
      let (api, _) = desktop_of(&["a"]);
      api.fail_enumeration(true);
      assert!(api.enum_windows(&mut |_| true).is_err());
    }
  }

  mod z_order {
    use super::*;

    #[test]
    fn top_bottom_and_after() {
      let (api, h) = desktop_of(&["a", "b", "c"]);
      let keep = WindowPositionFlags::NO_MOVE | WindowPositionFlags::NO_SIZE;

      assert!(api.set_window_pos(h[2], WindowHandle::NULL, 0, 0, 0, 0, keep));
      assert_eq!(api.z_order(), vec![h[2], h[0], h[1]], "to top");

      assert!(api.set_window_pos(h[2], WindowHandle::from_raw(1), 0, 0, 0, 0, keep));
      assert_eq!(api.z_order(), vec![h[0], h[1], h[2]], "to bottom");

      assert!(api.set_window_pos(h[0], h[1], 0, 0, 0, 0, keep));
      assert_eq!(api.z_order(), vec![h[1], h[0], h[2]], "behind b");
    }

    #[test]
    fn activates_unless_told_not_to() {
      let (api, h) = desktop_of(&["a", "b"]);
      api.set_foreground(h[0]);
      let keep = WindowPositionFlags::NO_MOVE | WindowPositionFlags::NO_SIZE;

      let quiet = keep | WindowPositionFlags::NO_ACTIVATE;
      assert!(api.set_window_pos(h[1], WindowHandle::NULL, 0, 0, 0, 0, quiet));
      assert_eq!(api.foreground_window(), h[0], "NO_ACTIVATE keeps focus");

      assert!(api.set_window_pos(h[1], WindowHandle::NULL, 0, 0, 0, 0, keep));
      assert_eq!(api.foreground_window(), h[1]);
    }

    #[test]
    fn unknown_anchor_fails_without_changes() {
      let (api, h) = desktop_of(&["a", "b"]);
      let before = api.window(h[0]).unwrap();
      let ok = api.set_window_pos(
        h[0],
        WindowHandle::from_raw(0x9999),
        50,
        50,
        0,
        0,
        WindowPositionFlags::NO_SIZE,
      );
      assert!(!ok);
      assert_eq!(api.z_order(), h);
      assert_eq!(api.window(h[0]).unwrap(), before);
    }
  }

  mod show_window {
    use super::*;

    fn state_of(api: &FakeApi, hwnd: WindowHandle) -> Option<ShowState> {
      api.window(hwnd).and_then(|w| w.placement.show_state())
    }

    #[test]
    fn returns_previous_visibility() {
      let (api, h) = desktop_of(&["a"]);
      assert!(api.show_window(h[0], ShowState::Hide), "was visible");
      assert!(!api.show_window(h[0], ShowState::Show), "was hidden");
      assert!(api.is_window_visible(h[0]));
    }

    #[test]
    fn restore_of_minimized_maximized_window_maximizes() {
      let (api, h) = desktop_of(&["a"]);
      api.show_window(h[0], ShowState::ShowMaximized);
      api.show_window(h[0], ShowState::Minimize);
      assert_eq!(state_of(&api, h[0]), Some(ShowState::ShowMinimized));
      api.show_window(h[0], ShowState::Restore);
      assert_eq!(state_of(&api, h[0]), Some(ShowState::ShowMaximized));
      api.show_window(h[0], ShowState::Restore);
      assert_eq!(state_of(&api, h[0]), Some(ShowState::ShowNormal));
    }

    #[test]
    fn stale_handle_is_false() {
      let (api, h) = desktop_of(&["a"]);
      api.destroy_window(h[0]);
      assert!(!api.show_window(h[0], ShowState::Show));
    }
  }

  mod processes {
    use super::*;

    #[test]
    fn open_read_close() {
      let api = FakeApi::new();
      api.add_process(ProcessId(42), r"C:\app.exe");
      let handle = api
        .open_process(ProcessId(42), ProcessAccessRights::MODULE_QUERY)
        .unwrap();
      assert_eq!(api.open_process_handles(), 1);

      let mut buf = [0u16; 64];
      let len = api.module_file_name(handle, &mut buf);
      assert_eq!(String::from_utf16_lossy(&buf[..len]), r"C:\app.exe");

      assert!(api.close_process(handle));
      assert!(!api.close_process(handle), "double close");
      assert_eq!(api.open_process_handles(), 0);
    }

    #[test]
    fn denied_and_unknown_processes_do_not_open() {
      let api = FakeApi::new();
      api.add_process(ProcessId(7), "x");
      api.deny_process(ProcessId(7));
      assert!(api
        .open_process(ProcessId(7), ProcessAccessRights::ALL)
        .is_none());
      assert!(api
        .open_process(ProcessId(8), ProcessAccessRights::VM_READ)
        .is_none());
      assert_eq!(api.total_process_opens(), 0);
      assert_eq!(api.last_access_rights(), Some(ProcessAccessRights::VM_READ));
    }
  }
}
