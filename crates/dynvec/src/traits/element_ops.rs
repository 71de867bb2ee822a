/// Element-level addition of a `Self` and an `Rhs`.
///
/// Implemented only for the pairs that make sense, so
/// [`DynamicArray::add`](crate::DynamicArray::add) between unsupported element
/// types does not compile.
pub trait ElementAdd<Rhs = Self> {
    type Output;

    fn element_add(&self, rhs: &Rhs) -> Self::Output;
}

/// Element-level multiplication of a `Self` and an `Rhs`.
pub trait ElementMul<Rhs = Self> {
    type Output;

    fn element_mul(&self, rhs: &Rhs) -> Self::Output;
}

// Integers wrap on overflow
macro_rules! impl_element_ops_integer {
    ($($t:ty),*) => {
        $(
            impl ElementAdd for $t {
                type Output = $t;

                #[inline]
                fn element_add(&self, rhs: &$t) -> $t {
                    self.wrapping_add(*rhs)
                }
            }

            impl ElementMul for $t {
                type Output = $t;

                #[inline]
                fn element_mul(&self, rhs: &$t) -> $t {
                    self.wrapping_mul(*rhs)
                }
            }
        )*
    };
}

macro_rules! impl_element_ops_float {
    ($($t:ty),*) => {
        $(
            impl ElementAdd for $t {
                type Output = $t;

                #[inline]
                fn element_add(&self, rhs: &$t) -> $t {
                    self + rhs
                }
            }

            impl ElementMul for $t {
                type Output = $t;

                #[inline]
                fn element_mul(&self, rhs: &$t) -> $t {
                    self * rhs
                }
            }
        )*
    };
}

/// Mixed pairs, both operands converted to the wider type first.
macro_rules! impl_element_ops_widening {
    (@apply wrapping, add, $a:expr, $b:expr) => { ($a).wrapping_add($b) };
    (@apply wrapping, mul, $a:expr, $b:expr) => { ($a).wrapping_mul($b) };
    (@apply float, add, $a:expr, $b:expr) => { ($a) + ($b) };
    (@apply float, mul, $a:expr, $b:expr) => { ($a) * ($b) };
    ($op:ident, $($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {
        $(
            impl ElementAdd<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn element_add(&self, rhs: &$rhs) -> $out {
                    impl_element_ops_widening!(@apply $op, add, *self as $out, *rhs as $out)
                }
            }

            impl ElementMul<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn element_mul(&self, rhs: &$rhs) -> $out {
                    impl_element_ops_widening!(@apply $op, mul, *self as $out, *rhs as $out)
                }
            }
        )*
    };
}

impl_element_ops_integer!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

impl_element_ops_float!(f32, f64);

impl_element_ops_widening!(wrapping,
    i32, i64 => i64;
    i64, i32 => i64;
);

impl_element_ops_widening!(float,
    f32, f64 => f64;
    f64, f32 => f64;
    i32, f64 => f64;
    f64, i32 => f64;
    i64, f64 => f64;
    f64, i64 => f64;
    i32, f32 => f32;
    f32, i32 => f32;
);

/// Code points are combined as `u32`.
impl ElementAdd for char {
    type Output = u32;

    #[inline]
    fn element_add(&self, rhs: &char) -> u32 {
        u32::from(*self).wrapping_add(u32::from(*rhs))
    }
}

impl ElementMul for char {
    type Output = u32;

    #[inline]
    fn element_mul(&self, rhs: &char) -> u32 {
        u32::from(*self).wrapping_mul(u32::from(*rhs))
    }
}

/// Concatenation. There is no `ElementMul` for strings.
impl ElementAdd for String {
    type Output = String;

    fn element_add(&self, rhs: &String) -> String {
        let mut out = String::with_capacity(self.len() + rhs.len());
        out.push_str(self);
        out.push_str(rhs);
        out
    }
}
