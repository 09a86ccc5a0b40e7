use num_traits::Float;

pub trait Element:  // Avoid repeating all the traits
    Float
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Below this magnitude a value counts as zero for pivoting and singularity checks
    fn tolerance() -> Self;

    #[inline(always)]
    fn is_negligible(self, tolerance: Self) -> bool {
        self.abs() < tolerance
    }
}

macro_rules! impl_element {
    ($t:ty, $tolerance:expr) => {
        impl Element for $t {
            #[inline(always)]
            fn tolerance() -> $t {
                $tolerance
            }
        }
    };
}

impl_element!(f64, 1e-7);
impl_element!(f32, 1e-5);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negligible() {
        assert!(0.0f64.is_negligible(f64::tolerance()));
        assert!((-5e-8f64).is_negligible(f64::tolerance()));
        assert!(!1e-6f64.is_negligible(f64::tolerance()));
        assert!(!1e-4f32.is_negligible(f32::tolerance()));
        assert!(1e-6f32.is_negligible(f32::tolerance()));
    }
}
