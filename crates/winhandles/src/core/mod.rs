/*!
The `Desktop` instance: window operations over an injected [`NativeApi`].

# Module Structure

- `mod.rs` - `Desktop`, construction, configuration
- `enumeration.rs` - walking the window list, foreground and lookup
- `queries.rs` - title, class name, process, executable path, placement
- `mutations.rs` - position, size, z-order, show state
- `process.rs` - scoped process handle used by the executable-path query

# Example

```no_run
use winhandles::{Desktop, ZPosition};

let desktop = Desktop::new();
for hwnd in desktop.visible_windows() {
    println!("{hwnd}: {} ({})", desktop.window_text(hwnd), desktop.class_name(hwnd));
}

let notepad = desktop.find_window("Notepad", "");
if !notepad.is_null() {
    desktop.set_window_size(notepad, 400, 300)?;
    desktop.set_z_position(notepad, ZPosition::Top)?;
}
# Ok::<(), winhandles::WinHandlesError>(())
```
*/

mod enumeration;
mod mutations;
mod process;
mod queries;

use crate::platform::{CurrentPlatform, NativeApi};
use std::sync::Arc;

const DEFAULT_CLASS_NAME_CAPACITY: usize = 255;
const DEFAULT_MAX_CLASS_NAME_CAPACITY: usize = 32_768;
const DEFAULT_EXECUTABLE_PATH_CAPACITY: usize = 1024;
/// One unit of text plus the terminator.
const MIN_BUFFER_CAPACITY: usize = 2;

/// Buffer sizes used by the text queries, in UTF-16 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DesktopConfig {
  pub(crate) class_name_capacity: usize,
  pub(crate) max_class_name_capacity: usize,
  pub(crate) executable_path_capacity: usize,
}

impl Default for DesktopConfig {
  fn default() -> Self {
    Self {
      class_name_capacity: DEFAULT_CLASS_NAME_CAPACITY,
      max_class_name_capacity: DEFAULT_MAX_CLASS_NAME_CAPACITY,
      executable_path_capacity: DEFAULT_EXECUTABLE_PATH_CAPACITY,
    }
  }
}

/// Window operations against one [`NativeApi`].
///
/// Every call goes straight to the OS; nothing is cached and no lock is
/// taken. Clone is cheap (Arc bump).
pub struct Desktop<A = CurrentPlatform> {
  api: Arc<A>,
  config: DesktopConfig,
}

impl<A> Clone for Desktop<A> {
  fn clone(&self) -> Self {
    Self {
      api: Arc::clone(&self.api),
      config: self.config,
    }
  }
}

impl<A> std::fmt::Debug for Desktop<A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Desktop")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

impl Desktop<CurrentPlatform> {
  /// Desktop over the platform's own backend with default buffer sizes.
  pub fn new() -> Self {
    Self::builder().build()
  }

  /// Start configuring a desktop. See [`DesktopBuilder`].
  pub const fn builder() -> DesktopBuilder {
    DesktopBuilder::new()
  }
}

impl Default for Desktop<CurrentPlatform> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: NativeApi> Desktop<A> {
  /// Desktop over an injected backend, e.g. [`FakeApi`](crate::fake::FakeApi).
  pub fn with_api(api: A) -> Self {
    Self::with_shared_api(Arc::new(api))
  }

  /// Like [`Desktop::with_api`], keeping a handle on the backend.
  pub fn with_shared_api(api: Arc<A>) -> Self {
    Self {
      api,
      config: DesktopConfig::default(),
    }
  }

  /// The backend this desktop calls into.
  pub fn api(&self) -> &A {
    &self.api
  }
}

/// Builder for a [`Desktop`].
///
/// # Example
///
/// ```
/// use winhandles::Desktop;
///
/// let desktop = Desktop::builder()
///     .class_name_capacity(64)
///     .executable_path_capacity(32_768)
///     .build();
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct DesktopBuilder {
  config: DesktopConfig,
}

impl DesktopBuilder {
  /// Builder with default buffer sizes.
  pub const fn new() -> Self {
    Self {
      config: DesktopConfig {
        class_name_capacity: DEFAULT_CLASS_NAME_CAPACITY,
        max_class_name_capacity: DEFAULT_MAX_CLASS_NAME_CAPACITY,
        executable_path_capacity: DEFAULT_EXECUTABLE_PATH_CAPACITY,
      },
    }
  }

  /// First buffer size tried for class names. Default: 255.
  ///
  /// The buffer doubles while the OS fills it completely.
  pub const fn class_name_capacity(mut self, units: usize) -> Self {
    self.config.class_name_capacity = clamp_capacity(units);
    self
  }

  /// Largest class-name buffer the growth loop will try. Default: 32768.
  pub const fn max_class_name_capacity(mut self, units: usize) -> Self {
    self.config.max_class_name_capacity = clamp_capacity(units);
    self
  }

  /// Buffer size for executable paths. Default: 1024.
  ///
  /// Paths longer than this come back truncated.
  pub const fn executable_path_capacity(mut self, units: usize) -> Self {
    self.config.executable_path_capacity = clamp_capacity(units);
    self
  }

  /// Build over the platform's own backend.
  pub fn build(self) -> Desktop<CurrentPlatform> {
    self.build_with(CurrentPlatform::default())
  }

  /// Build over an injected backend.
  pub fn build_with<A: NativeApi>(self, api: A) -> Desktop<A> {
    self.build_shared(Arc::new(api))
  }

  /// Build over a backend the caller keeps a handle on.
  pub fn build_shared<A: NativeApi>(self, api: Arc<A>) -> Desktop<A> {
    Desktop {
      api,
      config: self.config,
    }
  }
}

const fn clamp_capacity(units: usize) -> usize {
  if units < MIN_BUFFER_CAPACITY {
    MIN_BUFFER_CAPACITY
  } else {
    units
  }
}
