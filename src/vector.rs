use std::{fmt::Display, ops};

/// Represents a vector in three-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
    /// The z component.
    pub z: f64,
}

/// The zero vector.
pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

impl Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vec3 {
    /// Constructs a new vector from its components.
    ///
    /// # Example
    /// ```
    /// use calcline::vector::Vec3;
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.y, 2.0);
    /// ```
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the dot product of `self` and `rhs`.
    ///
    /// # Example
    /// ```
    /// use calcline::vector::Vec3;
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// let b = Vec3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(b), 32.0);
    /// ```
    #[must_use]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x.mul_add(rhs.x, self.y.mul_add(rhs.y, self.z * rhs.z))
    }

    /// Returns the cross product `self × rhs`.
    ///
    /// # Example
    /// ```
    /// use calcline::vector::Vec3;
    /// let x = Vec3::new(1.0, 0.0, 0.0);
    /// let y = Vec3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self { x: self.y.mul_add(rhs.z, -(self.z * rhs.y)),
               y: self.z.mul_add(rhs.x, -(self.x * rhs.z)),
               z: self.x.mul_add(rhs.y, -(self.y * rhs.x)), }
    }

    /// Returns the squared Euclidean length.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Returns the unit vector pointing the same way, or `None` for the zero
    /// vector.
    ///
    /// # Example
    /// ```
    /// use calcline::vector::{Vec3, ZERO};
    /// let n = Vec3::new(3.0, 0.0, 4.0).normalized().unwrap();
    /// assert!((n.length() - 1.0).abs() < 1e-10);
    /// assert!(ZERO.normalized().is_none());
    /// ```
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(self / length)
    }
}

impl ops::Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { x: -self.x,
               y: -self.y,
               z: -self.z, }
    }
}

impl ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x,
               y: self.y + rhs.y,
               z: self.z + rhs.z, }
    }
}

impl ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x,
               y: self.y - rhs.y,
               z: self.z - rhs.z, }
    }
}

impl ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl ops::Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self { x: self.x * rhs,
               y: self.y * rhs,
               z: self.z * rhs, }
    }
}

impl ops::Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl ops::Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self { x: self.x / rhs,
               y: self.y / rhs,
               z: self.z / rhs, }
    }
}
