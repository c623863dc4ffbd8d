//! Matrix interop at the public API boundary
//!
//! Every transform handed to gizmo-kit is column-major and applied as `M * v`.
//! [`Mat4Like`] lets callers pass whatever their engine stores without a
//! manual conversion, as long as it follows that layout.

use crate::types::Mat4;

/// Trait to abstract over 4x4 column-major matrices.
pub trait Mat4Like {
    /// Column-major array `[c0.x, c0.y, c0.z, c0.w, c1.x, ...]`.
    fn to_cols_array(&self) -> [f32; 16];

    /// Convert to the glam matrix used internally.
    fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.to_cols_array())
    }
}

impl Mat4Like for [f32; 16] {
    fn to_cols_array(&self) -> [f32; 16] {
        *self
    }
}

impl Mat4Like for Mat4 {
    fn to_cols_array(&self) -> [f32; 16] {
        Mat4::to_cols_array(self)
    }

    fn to_mat4(&self) -> Mat4 {
        *self
    }
}

impl<T: Mat4Like + ?Sized> Mat4Like for &T {
    fn to_cols_array(&self) -> [f32; 16] {
        (**self).to_cols_array()
    }
}

#[cfg(feature = "mint")]
impl Mat4Like for mint::ColumnMatrix4<f32> {
    fn to_cols_array(&self) -> [f32; 16] {
        [
            self.x.x, self.x.y, self.x.z, self.x.w,
            self.y.x, self.y.y, self.y.z, self.y.w,
            self.z.x, self.z.y, self.z.z, self.z.w,
            self.w.x, self.w.y, self.w.z, self.w.w,
        ]
    }
}
