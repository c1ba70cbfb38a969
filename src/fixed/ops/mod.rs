use super::*;

use crate::Shape;
use crate::underlying::cast;

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Accumulation in place and shifts, which keep the shape of their left operand.
mod assign;

/// Fail to compile, with `$msg`, unless the result type `$r` has the shape that rule `$rule`
/// of [`Shape`] gives for its operand types.
macro_rules! check_shape {
  ($rule:ident($($operand:ty),+) == $r:ty, $msg:literal $(,)?) => {
    const {
      assert!(Shape::$rule($(<$operand>::SHAPE),+).same_as(<$r>::SHAPE), $msg)
    }
  }
}

pub(crate) use check_shape;

/// Macro for instantiating the suite of tests for a binary operation on fixed-point numbers,
/// whose result is computed by `$op` from `$a` and `$b` (as an `Option`, `None` meaning the
/// operation is not defined) and checked by `$check` on the exact rational values of the
/// operands and the result, and the result's shape.
#[cfg(test)]
macro_rules! mk_tests {
  (|$a:ident, $b:ident| $op:expr, $check:path) => {
    use crate::Fixed;
    use proptest::prelude::*;

    fn check<
      const B1: u32, const E1: i32, N1: crate::Int,
      const B2: u32, const E2: i32, N2: crate::Int,
      const B3: u32, const E3: i32, N3: crate::Int,
    >(
      a: &Fixed<B1, E1, N1>,
      b: &Fixed<B2, E2, N2>,
      r: &Fixed<B3, E3, N3>,
    ) -> bool {
      $check(a.to_rational(), b.to_rational(), r.to_rational(), Fixed::<B3, E3, N3>::SHAPE)
    }

    macro_rules! test_exhaustive {
      ($name:ident, $ta:ty, $tb:ty, $tr:ty) => {
        #[test]
        fn $name() {
          for a in <$ta>::cases_exhaustive() {
            for b in <$tb>::cases_exhaustive() {
              let r: Option<$tr> = { let $a = &a; let $b = &b; $op };
              if let Some(r) = r {
                assert!(check(&a, &b, &r), "{:?}, {:?} ↦ {:?}", a, b, r)
              }
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $ta:ty, $tb:ty, $tr:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$ta>::cases_proptest(),
            b in <$tb>::cases_proptest(),
          ) {
            let r: Option<$tr> = { let $a = &a; let $b = &b; $op };
            if let Some(r) = r {
              prop_assert!(check(&a, &b, &r), "{:?}, {:?} ↦ {:?}", a, b, r)
            }
          }
        }
      };
    }
  }
}

#[cfg(test)]
pub(crate) use mk_tests;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn check_shape_forms() {
    check_shape!(mul(Fixed<3, 0, i8>, Fixed<3, 1, u8>) == Fixed<6, 1, i8>, "mul");
    check_shape!(
      add_sub(Fixed<3, 2, i8>, Fixed<3, 1, i8>) == Fixed<5, 1, i8>,
      "add_sub",
    );
  }
}
