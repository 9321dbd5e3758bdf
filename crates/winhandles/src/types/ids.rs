/*! Branded id types for processes and threads. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Process ID. `0` is never a real user process and means "unknown".
#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct ProcessId(pub u32);

impl ProcessId {
  pub const NONE: Self = Self(0);

  pub const fn is_none(self) -> bool {
    self.0 == 0
  }
}

/// Thread ID of the thread that created a window.
#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct ThreadId(pub u32);

/// Opaque process handle value handed out by [`NativeApi::open_process`].
///
/// Carries no ownership. Inside this crate it is only ever held by a guard
/// that closes it before the operation returns.
///
/// [`NativeApi::open_process`]: crate::NativeApi::open_process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0:#x}")]
pub struct RawProcessHandle(pub isize);
