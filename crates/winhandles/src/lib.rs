/*!
Winhandles - typed access to native top-level windows

```no_run
use winhandles::{Desktop, Rect, ShowState};

let desktop = Desktop::new();

// Enumerate in z-order, front to back
for hwnd in desktop.windows() {
    let info = desktop.describe(hwnd);
    println!("{hwnd} {:?} [{}] {}", info.title, info.class_name, info.executable_path);
}

// Look up and manipulate
let hwnd = desktop.find_window("Notepad", "");
desktop.set_window_bounds(hwnd, Rect::from_origin_size(0, 0, 800, 600))?;
desktop.set_show_state(hwnd, ShowState::ShowMaximized);
# Ok::<(), winhandles::WinHandlesError>(())
```

Queries never fail loudly: a stale handle, a denied process or a failed
placement read yields an empty string, zero id or `None`. Geometry changes
return [`WinResult`]. Tests can swap the OS for [`fake::FakeApi`].
*/

mod core;
mod platform;

mod types;
pub use types::*;

pub use crate::core::{Desktop, DesktopBuilder};
pub use crate::platform::{fake, CurrentPlatform, NativeApi, UnsupportedApi};

#[cfg(target_os = "windows")]
pub use crate::platform::Win32Api;
