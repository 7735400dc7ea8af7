use crate::error::{DcgpError, Result};
use crate::types::FitnessType;

/// Score predictions against desired outputs over a whole example set.
///
/// `predict` maps one example input to the predicted outputs. Every
/// example is shape-checked before anything is evaluated, so a malformed
/// set fails without partial work.
pub fn score<F>(
    in_des: &[Vec<f64>],
    out_des: &[Vec<f64>],
    inputs: usize,
    outputs: usize,
    fitness_type: FitnessType,
    tol: f64,
    predict: F,
) -> Result<f64>
where
    F: Fn(&[f64]) -> Result<Vec<f64>>,
{
    if in_des.len() != out_des.len() {
        return Err(DcgpError::InputSize(format!(
            "{} example inputs but {} example outputs",
            in_des.len(),
            out_des.len()
        )));
    }
    for (i, (input, output)) in in_des.iter().zip(out_des).enumerate() {
        if input.len() != inputs {
            return Err(DcgpError::InputSize(format!(
                "example {}: expected {} inputs, got {}",
                i,
                inputs,
                input.len()
            )));
        }
        if output.len() != outputs {
            return Err(DcgpError::InputSize(format!(
                "example {}: expected {} outputs, got {}",
                i,
                outputs,
                output.len()
            )));
        }
    }

    let mut total = 0.0;
    for (input, desired) in in_des.iter().zip(out_des) {
        let predicted = predict(input)?;
        for (p, d) in predicted.iter().zip(desired) {
            total += point_score(p - d, fitness_type, tol);
        }
    }
    Ok(total)
}

/// Contribution of a single output component.
///
/// A NaN error (e.g. from `0/0` in the graph) never scores.
pub fn point_score(err: f64, fitness_type: FitnessType, tol: f64) -> f64 {
    if err.is_nan() {
        return 0.0;
    }
    match fitness_type {
        FitnessType::ErrorBased => 1.0 / (1.0 + err.abs()),
        FitnessType::HitsBased => {
            if err.abs() <= tol {
                1.0
            } else {
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(x: &[f64]) -> Result<Vec<f64>> {
        Ok(x.to_vec())
    }

    #[test]
    fn test_error_based_perfect_fit() {
        let ins = vec![vec![1.0], vec![2.0], vec![3.0]];
        let score = score(&ins, &ins, 1, 1, FitnessType::ErrorBased, 0.0, identity).unwrap();
        assert_eq!(score, 3.0);
    }

    #[test]
    fn test_error_based_decays_with_error() {
        assert_eq!(point_score(1.0, FitnessType::ErrorBased, 0.0), 0.5);
        assert_eq!(point_score(-3.0, FitnessType::ErrorBased, 0.0), 0.25);
        assert_eq!(point_score(f64::INFINITY, FitnessType::ErrorBased, 0.0), 0.0);
    }

    #[test]
    fn test_hits_boundary() {
        assert_eq!(point_score(0.0, FitnessType::HitsBased, 0.0), 1.0);
        assert_eq!(point_score(1e-300, FitnessType::HitsBased, 0.0), 0.0);
        assert_eq!(point_score(0.1, FitnessType::HitsBased, 0.1), 1.0);
    }

    #[test]
    fn test_nan_never_scores() {
        assert_eq!(point_score(f64::NAN, FitnessType::ErrorBased, 1.0), 0.0);
        assert_eq!(point_score(f64::NAN, FitnessType::HitsBased, 1.0), 0.0);
    }

    #[test]
    fn test_shape_errors() {
        let ins = vec![vec![1.0], vec![2.0]];
        let outs = vec![vec![1.0]];
        let result = score(&ins, &outs, 1, 1, FitnessType::HitsBased, 0.0, identity);
        assert!(matches!(result, Err(DcgpError::InputSize(_))));

        let outs = vec![vec![1.0], vec![2.0, 3.0]];
        let result = score(&ins, &outs, 1, 1, FitnessType::HitsBased, 0.0, identity);
        assert!(matches!(result, Err(DcgpError::InputSize(_))));
    }
}
