/*! Bit-flag sets passed to native calls. */

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

macro_rules! flag_set_ops {
  ($name:ident) => {
    impl $name {
      pub const fn empty() -> Self {
        Self(0)
      }

      pub const fn bits(self) -> u32 {
        self.0
      }

      pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
      }

      /// True if every bit of `other` is set in `self`.
      pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
      }

      pub const fn is_empty(self) -> bool {
        self.0 == 0
      }
    }

    impl BitOr for $name {
      type Output = Self;

      fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
      }
    }

    impl BitOrAssign for $name {
      fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
      }
    }
  };
}

/// Access rights requested when opening another process (`PROCESS_*`).
///
/// Ask for the least that works: an open with fewer rights is more likely to
/// succeed against elevated or protected processes.
#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into,
)]
pub struct ProcessAccessRights(u32);

impl ProcessAccessRights {
  pub const TERMINATE: Self = Self(0x0000_0001);
  pub const CREATE_THREAD: Self = Self(0x0000_0002);
  pub const VM_OPERATION: Self = Self(0x0000_0008);
  pub const VM_READ: Self = Self(0x0000_0010);
  pub const VM_WRITE: Self = Self(0x0000_0020);
  pub const DUP_HANDLE: Self = Self(0x0000_0040);
  pub const SET_INFORMATION: Self = Self(0x0000_0200);
  pub const QUERY_INFORMATION: Self = Self(0x0000_0400);
  pub const SYNCHRONIZE: Self = Self(0x0010_0000);
  pub const ALL: Self = Self(0x001F_0FFF);

  /// What resolving a process's main module path needs.
  pub const MODULE_QUERY: Self = Self::VM_READ.union(Self::QUERY_INFORMATION);
}

flag_set_ops!(ProcessAccessRights);

/// Modifiers for a geometry change (`SWP_*`). Each flag suppresses one part
/// of the update.
#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, From, Into,
)]
pub struct WindowPositionFlags(u32);

impl WindowPositionFlags {
  /// Keep the current size; `cx`/`cy` are ignored.
  pub const NO_SIZE: Self = Self(0x0001);
  /// Keep the current position; `x`/`y` are ignored.
  pub const NO_MOVE: Self = Self(0x0002);
  /// Keep the current z-order; the insert-after handle is ignored.
  pub const NO_Z_ORDER: Self = Self(0x0004);
  /// Do not activate the window.
  pub const NO_ACTIVATE: Self = Self(0x0010);
}

flag_set_ops!(WindowPositionFlags);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn access_right_values() {
    assert_eq!(ProcessAccessRights::TERMINATE.bits(), 0x1);
    assert_eq!(ProcessAccessRights::CREATE_THREAD.bits(), 0x2);
    assert_eq!(ProcessAccessRights::VM_OPERATION.bits(), 0x8);
    assert_eq!(ProcessAccessRights::VM_READ.bits(), 0x10);
    assert_eq!(ProcessAccessRights::VM_WRITE.bits(), 0x20);
    assert_eq!(ProcessAccessRights::DUP_HANDLE.bits(), 0x40);
    assert_eq!(ProcessAccessRights::SET_INFORMATION.bits(), 0x200);
    assert_eq!(ProcessAccessRights::QUERY_INFORMATION.bits(), 0x400);
    assert_eq!(ProcessAccessRights::SYNCHRONIZE.bits(), 0x10_0000);
    assert_eq!(ProcessAccessRights::ALL.bits(), 0x1F_0FFF);
  }

  #[test]
  fn module_query_is_read_plus_query_information() {
    assert_eq!(ProcessAccessRights::MODULE_QUERY.bits(), 0x410);
    assert!(!ProcessAccessRights::MODULE_QUERY.contains(ProcessAccessRights::VM_WRITE));
  }

  #[test]
  fn all_contains_every_specific_right() {
    for right in [
      ProcessAccessRights::TERMINATE,
      ProcessAccessRights::CREATE_THREAD,
      ProcessAccessRights::VM_OPERATION,
      ProcessAccessRights::VM_READ,
      ProcessAccessRights::VM_WRITE,
      ProcessAccessRights::DUP_HANDLE,
      ProcessAccessRights::SET_INFORMATION,
      ProcessAccessRights::QUERY_INFORMATION,
      ProcessAccessRights::SYNCHRONIZE,
    ] {
      assert!(ProcessAccessRights::ALL.contains(right), "{right:?}");
    }
  }

  #[test]
  fn position_flag_values() {
    assert_eq!(WindowPositionFlags::NO_SIZE.bits(), 0x1);
    assert_eq!(WindowPositionFlags::NO_MOVE.bits(), 0x2);
    assert_eq!(WindowPositionFlags::NO_Z_ORDER.bits(), 0x4);
    assert_eq!(WindowPositionFlags::NO_ACTIVATE.bits(), 0x10);
  }

  #[test]
  fn bitor_assign_accumulates() {
    let mut flags = WindowPositionFlags::empty();
    assert!(flags.is_empty());
    flags |= WindowPositionFlags::NO_MOVE;
    flags |= WindowPositionFlags::NO_SIZE;
    assert_eq!(flags, WindowPositionFlags::NO_MOVE | WindowPositionFlags::NO_SIZE);
    assert!(!flags.contains(WindowPositionFlags::NO_Z_ORDER));
  }
}

#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  proptest! {
    /// A union contains both of its operands
    #[test]
    fn union_contains_operands(a in any::<u32>(), b in any::<u32>()) {
      let (a, b) = (WindowPositionFlags::from(a), WindowPositionFlags::from(b));
      prop_assert!((a | b).contains(a));
      prop_assert!((a | b).contains(b));
    }

    /// Union is commutative
    #[test]
    fn union_commutative(a in any::<u32>(), b in any::<u32>()) {
      let (a, b) = (ProcessAccessRights::from(a), ProcessAccessRights::from(b));
      prop_assert_eq!(a | b, b | a);
    }

    /// Everything contains the empty set
    #[test]
    fn contains_empty(a in any::<u32>()) {
      prop_assert!(ProcessAccessRights::from(a).contains(ProcessAccessRights::empty()));
    }
  }
}
