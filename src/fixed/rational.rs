use super::*;

use malachite::base::num::arithmetic::traits::PowerOf2;
use malachite::rational::Rational;

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// The exact value, `num * 2^E`, which is what the optimised arithmetic is checked against.
  pub(crate) fn to_rational(&self) -> Rational {
    Rational::from(self.0.to_integer()) * Rational::power_of_2(i64::from(E))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Big;

  #[test]
  fn exact_values() {
    assert_eq!(Fixed::<3, 2, i8>::from(12).to_rational(), Rational::from(12));
    assert_eq!(Fixed::<6, -3, i8>::from_num(-20).to_rational(), Rational::from_signeds(-5, 2));
    assert_eq!(Fixed::<8, -8, u8>::epsilon().to_rational(), Rational::from_unsigneds(1u32, 256));
    assert_eq!(
      Fixed::<200, -100, Big>::epsilon().to_rational(),
      Rational::power_of_2(-100_i64),
    );
  }
}
