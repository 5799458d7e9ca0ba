//! Legendre polynomials
use super::Polynomial;
use num::{BigInt, BigRational};

/// Legendre polynomials `P_0(t), ..., P_max_degree(t)` of an arbitrary argument `t`
///
/// Uses Bonnet's recursion `(n + 1) P_{n+1} = (2n + 1) t P_n - n P_{n-1}`.
pub fn legendre_table(max_degree: usize, arg: &Polynomial) -> Vec<Polynomial> {
    let mut table = Vec::with_capacity(max_degree + 1);
    table.push(Polynomial::from_integer(1));
    if max_degree == 0 {
        return table;
    }
    table.push(arg.clone());
    for n in 1..max_degree {
        let a = BigRational::new(BigInt::from(2 * n + 1), BigInt::from(n + 1));
        let b = BigRational::new(BigInt::from(n), BigInt::from(n + 1));
        let next = &(arg * &table[n]).scale(&a) - &table[n - 1].scale(&b);
        table.push(next);
    }
    table
}

/// The Legendre polynomial `P_n(t)`
pub fn legendre(n: usize, arg: &Polynomial) -> Polynomial {
    let mut table = legendre_table(n, arg);
    table.swap_remove(n)
}
