/*! Scoped process handle. */

use crate::platform::NativeApi;
use crate::types::{ProcessAccessRights, ProcessId, RawProcessHandle};

/// An open process handle that is closed when the guard drops.
///
/// Never stored past the operation that opened it: pids are recycled, so a
/// cached handle could end up describing a different program.
pub(crate) struct ProcessGuard<'a, A: NativeApi + ?Sized> {
  api: &'a A,
  handle: RawProcessHandle,
}

impl<'a, A: NativeApi + ?Sized> ProcessGuard<'a, A> {
  /// `None` for pid 0, a dead process or a denied open.
  pub(crate) fn open(api: &'a A, pid: ProcessId, access: ProcessAccessRights) -> Option<Self> {
    if pid.is_none() {
      return None;
    }
    let Some(handle) = api.open_process(pid, access) else {
      log::debug!("Could not open process {pid} with access {:#x}", access.bits());
      return None;
    };
    Some(Self { api, handle })
  }

  /// Main module path, truncated to `capacity - 1` units. Empty on failure.
  pub(crate) fn module_file_name(&self, capacity: usize) -> String {
    let mut buf = vec![0u16; capacity];
    let len = self.api.module_file_name(self.handle, &mut buf);
    buf.truncate(len);
    String::from_utf16_lossy(&buf)
  }
}

impl<A: NativeApi + ?Sized> Drop for ProcessGuard<'_, A> {
  fn drop(&mut self) {
    if !self.api.close_process(self.handle) {
      log::warn!("Failed to close process handle {}", self.handle);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fake::FakeApi;

  #[test]
  fn closes_on_drop() {
    let api = FakeApi::new();
    api.add_process(ProcessId(10), r"C:\Windows\explorer.exe");
    {
      let guard = ProcessGuard::open(&api, ProcessId(10), ProcessAccessRights::MODULE_QUERY)
        .unwrap();
      assert_eq!(api.open_process_handles(), 1);
      assert_eq!(guard.module_file_name(1024), r"C:\Windows\explorer.exe");
    }
    assert_eq!(api.open_process_handles(), 0, "guard released the handle");
  }

  #[test]
  fn pid_zero_never_opens() {
    let api = FakeApi::new();
    assert!(ProcessGuard::open(&api, ProcessId::NONE, ProcessAccessRights::ALL).is_none());
    assert_eq!(api.last_access_rights(), None, "no native call was made");
  }

  #[test]
  fn short_buffer_truncates() {
    let api = FakeApi::new();
    api.add_process(ProcessId(3), "abcdef");
    let guard = ProcessGuard::open(&api, ProcessId(3), ProcessAccessRights::MODULE_QUERY).unwrap();
    assert_eq!(guard.module_file_name(4), "abc");
  }
}
