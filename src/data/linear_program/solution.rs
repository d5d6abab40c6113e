//! # Checking solutions and certificates
//!
//! Every outcome of the solver comes with vectors that prove it. The functions in this module
//! check those proofs against the original problem, independent of how they were computed.
use crate::data::linear_program::Problem;
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

fn inner_product<F: Scalar>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).fold(F::zero(), |total, (&l, &r)| total + l * r)
}

/// `y^T A` as a dense vector of length `m`.
fn left_multiply<F: Scalar>(problem: &Problem<F>, y: &[F]) -> Vec<F> {
    debug_assert_eq!(y.len(), problem.nr_constraints());

    (0..problem.nr_variables())
        .map(|j| {
            problem.constraints().column(j).zip(y)
                .fold(F::zero(), |total, (a, &multiplier)| total + a * multiplier)
        })
        .collect()
}

/// Value `c^T x` of the objective function.
pub fn objective_value<F: Scalar>(problem: &Problem<F>, x: &[F]) -> F {
    inner_product(problem.c(), x)
}

/// Whether `x >= 0` and `A x <= b`.
pub fn is_feasible<F: Scalar>(problem: &Problem<F>, x: &[F], tolerance: &Tolerance<F>) -> bool {
    x.len() == problem.nr_variables()
        && x.iter().all(|&value| !tolerance.is_negative(value))
        && (0..problem.nr_constraints()).all(|i| {
            !tolerance.is_positive(inner_product(problem.constraint(i), x) - problem.b()[i])
        })
}

/// Whether `y` proves that no feasible solution has a value larger than `value`.
///
/// That is, `y >= 0`, `y^T A >= c` and `y^T b = value`.
pub fn is_optimality_certificate<F: Scalar>(
    problem: &Problem<F>,
    y: &[F],
    value: F,
    tolerance: &Tolerance<F>,
) -> bool {
    y.len() == problem.nr_constraints()
        && y.iter().all(|&multiplier| !tolerance.is_negative(multiplier))
        && left_multiply(problem, y).into_iter().zip(problem.c())
            .all(|(combined, &cost)| !tolerance.is_negative(combined - cost))
        && tolerance.is_equal(inner_product(y, problem.b()), value)
}

/// Whether `d` is a direction in which the objective function grows without bound.
///
/// That is, `d >= 0`, `A d <= 0` and `c^T d > 0`.
pub fn is_unbounded_ray<F: Scalar>(problem: &Problem<F>, d: &[F], tolerance: &Tolerance<F>) -> bool {
    d.len() == problem.nr_variables()
        && d.iter().all(|&value| !tolerance.is_negative(value))
        && (0..problem.nr_constraints())
            .all(|i| !tolerance.is_positive(inner_product(problem.constraint(i), d)))
        && tolerance.is_positive(objective_value(problem, d))
}

/// Whether `y` proves, through Farkas' lemma, that the problem has no feasible solution.
///
/// That is, `y >= 0`, `y^T A >= 0` and `y^T b < 0`.
pub fn is_farkas_certificate<F: Scalar>(problem: &Problem<F>, y: &[F], tolerance: &Tolerance<F>) -> bool {
    y.len() == problem.nr_constraints()
        && y.iter().all(|&multiplier| !tolerance.is_negative(multiplier))
        && left_multiply(problem, y).into_iter().all(|combined| !tolerance.is_negative(combined))
        && tolerance.is_negative(inner_product(y, problem.b()))
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::Problem;
    use crate::data::linear_program::solution::{
        is_farkas_certificate, is_feasible, is_optimality_certificate, is_unbounded_ray,
        objective_value,
    };
    use crate::data::number_types::tolerance::Tolerance;

    fn problem() -> Problem<f64> {
        Problem::new(
            2, 2,
            vec![vec![1f64, 0f64], vec![0f64, 2f64]],
            vec![4f64, 12f64],
            vec![3f64, 5f64],
        ).unwrap()
    }

    #[test]
    fn feasibility() {
        let tolerance = Tolerance::default();
        assert!(is_feasible(&problem(), &[4f64, 6f64], &tolerance));
        assert!(is_feasible(&problem(), &[0f64, 0f64], &tolerance));
        assert!(!is_feasible(&problem(), &[4.5f64, 0f64], &tolerance));
        assert!(!is_feasible(&problem(), &[-1f64, 0f64], &tolerance));
        assert!(!is_feasible(&problem(), &[1f64], &tolerance));
        assert_eq!(objective_value(&problem(), &[4f64, 6f64]), 42f64);
    }

    #[test]
    fn optimality() {
        let tolerance = Tolerance::default();
        assert!(is_optimality_certificate(&problem(), &[3f64, 2.5f64], 42f64, &tolerance));
        // Dual feasible, but not tight
        assert!(!is_optimality_certificate(&problem(), &[3f64, 3f64], 42f64, &tolerance));
        // Tight, but not dual feasible
        assert!(!is_optimality_certificate(&problem(), &[2f64, 2.5f64], 38f64, &tolerance));
    }

    #[test]
    fn unbounded() {
        let tolerance = Tolerance::default();
        let problem = Problem::new(1, 2, vec![vec![1f64, -1f64]], vec![0f64], vec![1f64, 1f64]).unwrap();
        assert!(is_unbounded_ray(&problem, &[1f64, 1f64], &tolerance));
        assert!(is_unbounded_ray(&problem, &[0f64, 1f64], &tolerance));
        assert!(!is_unbounded_ray(&problem, &[1f64, 0f64], &tolerance));
    }

    #[test]
    fn farkas() {
        let tolerance = Tolerance::default();
        let problem = Problem::new(
            2, 1,
            vec![vec![1f64], vec![-1f64]],
            vec![-1f64, -1f64],
            vec![1f64],
        ).unwrap();
        assert!(is_farkas_certificate(&problem, &[1f64, 1f64], &tolerance));
        assert!(is_farkas_certificate(&problem, &[1f64, 0f64], &tolerance));
        assert!(!is_farkas_certificate(&problem, &[0f64, 1f64], &tolerance));
        assert!(!is_farkas_certificate(&problem, &[-1f64, -1f64], &tolerance));
    }
}
