/*! Platform backends behind the [`NativeApi`] boundary. */

mod traits;
mod unsupported;

#[cfg(target_os = "windows")]
mod win32;

pub mod fake;

pub use traits::NativeApi;
pub use unsupported::UnsupportedApi;

#[cfg(target_os = "windows")]
pub use win32::Win32Api;

/// Name comparison used by window lookup: whole-string and case-insensitive,
/// the way the OS matches class names and titles.
pub(crate) fn names_match(name: &str, wanted: &str) -> bool {
  name
    .chars()
    .flat_map(char::to_lowercase)
    .eq(wanted.chars().flat_map(char::to_lowercase))
}

/// Backend for the compilation target.
#[cfg(target_os = "windows")]
pub type CurrentPlatform = Win32Api;

/// Backend for the compilation target.
#[cfg(not(target_os = "windows"))]
pub type CurrentPlatform = UnsupportedApi;
