/*! Geometry records shared with the OS.

Both types are `#[repr(C)]` and laid out exactly like Win32 `POINT` and `RECT`,
so a pointer to them can be handed straight to a native call.
*/

use serde::{Deserialize, Serialize};
use std::mem::{align_of, offset_of, size_of};

/// A 2D point in screen coordinates.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

impl Point {
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }
}

/// Rectangle in screen coordinates, stored as edges.
///
/// `left <= right` and `top <= bottom` are expected but not enforced.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
  pub left: i32,
  pub top: i32,
  pub right: i32,
  pub bottom: i32,
}

impl Rect {
  pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
    Self {
      left,
      top,
      right,
      bottom,
    }
  }

  /// Build a rectangle from its top-left corner and size.
  pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
    Self {
      left: x,
      top: y,
      right: x.saturating_add(width),
      bottom: y.saturating_add(height),
    }
  }

  pub const fn width(&self) -> i32 {
    self.right.saturating_sub(self.left)
  }

  pub const fn height(&self) -> i32 {
    self.bottom.saturating_sub(self.top)
  }

  /// `(width, height)`.
  pub const fn size(&self) -> (i32, i32) {
    (self.width(), self.height())
  }

  pub const fn origin(&self) -> Point {
    Point::new(self.left, self.top)
  }

  /// True for zero-area or inverted rectangles.
  pub const fn is_empty(&self) -> bool {
    self.right <= self.left || self.bottom <= self.top
  }

  /// Half-open containment: the right and bottom edges are outside.
  pub const fn contains(&self, point: Point) -> bool {
    point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
  }
}

const _: () = assert!(size_of::<Point>() == 8);
const _: () = assert!(align_of::<Point>() == 4);
const _: () = assert!(offset_of!(Point, x) == 0);
const _: () = assert!(offset_of!(Point, y) == 4);

const _: () = assert!(size_of::<Rect>() == 16);
const _: () = assert!(align_of::<Rect>() == 4);
const _: () = assert!(offset_of!(Rect, left) == 0);
const _: () = assert!(offset_of!(Rect, top) == 4);
const _: () = assert!(offset_of!(Rect, right) == 8);
const _: () = assert!(offset_of!(Rect, bottom) == 12);
