/*! Error types for winhandles operations. */

use super::WindowHandle;

/// Failures that are surfaced to the caller.
///
/// Most queries never produce these: a stale handle, a denied process open or
/// a short buffer all turn into an empty result instead.
#[derive(Debug, thiserror::Error)]
pub enum WinHandlesError {
  #[error("Window enumeration failed: {reason}")]
  EnumerationFailed { reason: String },

  #[error("Window handles are not supported on this platform")]
  UnsupportedPlatform,

  #[error("Null window handle")]
  NullHandle,

  #[error("Failed to set position of window {handle}")]
  SetWindowPosFailed { handle: WindowHandle },
}

/// Result type for winhandles operations.
pub type WinResult<T> = Result<T, WinHandlesError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_the_window() {
    let error = WinHandlesError::SetWindowPosFailed {
      handle: WindowHandle::from_raw(0xbeef),
    };
    assert_eq!(error.to_string(), "Failed to set position of window 0xbeef");
  }

  #[test]
  fn enumeration_reason_is_included() {
    let error = WinHandlesError::EnumerationFailed {
      reason: "desktop heap exhausted".to_string(),
    };
    assert_eq!(
      error.to_string(),
      "Window enumeration failed: desktop heap exhausted"
    );
  }

  #[test]
  fn error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<WinHandlesError>();
  }
}
