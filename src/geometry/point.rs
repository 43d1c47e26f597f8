// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The quadloops developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::{Add, Sub};

use crate::geometry::vector::Vector3;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn vector_to(&self, other: Self) -> Vector3<T> {
        other - *self
    }

    /// `self + t * (other - self)`; `t = 0` is `self`, `t = 1` is `other`.
    ///
    /// Scale-about-pivot is `pivot.lerp(p, factor)`.
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, T::from_f64(0.5))
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Self) -> Vector3<T> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    fn add(self, rhs: Vector3<T>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_to_and_back() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        let v = a.vector_to(b);
        assert_eq!(v, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(a + v, b);
        assert_eq!(b - a, v);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, -4.0, 6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.midpoint(b), Point3::new(1.0, -2.0, 3.0));
        // Extrapolation past the far endpoint.
        assert_eq!(a.lerp(b, 2.0), Point3::new(4.0, -8.0, 12.0));
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(Point3::<f64>::origin(), Point3::new(0.0, 0.0, 0.0));
    }
}
