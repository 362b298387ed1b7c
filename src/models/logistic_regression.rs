use crate::constants::{FEATURE_COLUMNS, FEATURE_COUNT, INTERCEPT_TERM};
use crate::types::{FeatureName, SpamProbability};
use crate::utils::{invert_matrix, normal_two_sided_p_value, sigmoid};
use crate::{Error, FeatureRow, FeatureTable};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Added (relative plus absolute) to the information matrix diagonal before inverting,
/// so collinear columns still produce a Newton step. The fixed point is unaffected
/// because the gradient vanishes there.
const RIDGE_JITTER: f64 = 1e-10;

const MAX_STEP_HALVINGS: usize = 30;

/// Every fitted probability lies within this distance of its label.
const SEPARATION_TOLERANCE: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticRegressionConfig {
    pub max_iterations: usize,
    /// Convergence when `|dev - dev_prev| / (|dev| + 0.1)` drops below this.
    pub tolerance: f64,
}

/// Inference statistics for one model term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientSummary {
    pub term: FeatureName,
    pub estimate: f64,
    pub std_error: Option<f64>,
    pub z_value: Option<f64>,
    pub p_value: Option<f64>,
    pub odds_ratio: f64,
    /// The column was zero in every training row and could not be estimated.
    pub aliased: bool,
}

/// A logistic model fitted on a TRAIN feature table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedModel {
    pub intercept: f64,
    /// Aligned with `FEATURE_COLUMNS`.
    pub coefficients: Vec<f64>,
    /// Intercept first, then every feature column in order.
    pub summary: Vec<CoefficientSummary>,
    pub iterations: usize,
    pub deviance: f64,
    pub null_deviance: f64,
    pub aic: f64,
    pub train_rows: usize,
    pub perfectly_separated: bool,
}

impl FittedModel {
    pub fn coefficient(&self, feature_name: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|column| *column == feature_name)
            .and_then(|index| self.coefficients.get(index).copied())
    }

    pub fn coefficient_map(&self) -> BTreeMap<FeatureName, f64> {
        FEATURE_COLUMNS
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
            .collect()
    }

    pub fn linear_predictor(&self, row: &FeatureRow) -> f64 {
        row.values()
            .iter()
            .zip(&self.coefficients)
            .fold(self.intercept, |eta, (value, coefficient)| {
                eta + value * coefficient
            })
    }

    pub fn predict_probability(&self, row: &FeatureRow) -> SpamProbability {
        sigmoid(self.linear_predictor(row))
    }

    /// The probability for a row whose features are all zero.
    pub fn baseline_probability(&self) -> SpamProbability {
        sigmoid(self.intercept)
    }

    /// Scores every row of `table`, in row order.
    pub fn score(&self, table: &FeatureTable) -> Vec<SpamProbability> {
        table
            .rows
            .iter()
            .map(|row| self.predict_probability(row))
            .collect()
    }
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<18} {:>12} {:>12} {:>9} {:>10} {:>12}",
            "term", "estimate", "std_error", "z", "p", "odds_ratio"
        )?;

        let optional = |value: Option<f64>, precision: usize| {
            value.map_or_else(|| "NA".to_string(), |v| format!("{:.*}", precision, v))
        };

        for term in &self.summary {
            writeln!(
                f,
                "{:<18} {:>12.6} {:>12} {:>9} {:>10} {:>12.4}",
                term.term,
                term.estimate,
                optional(term.std_error, 6),
                optional(term.z_value, 3),
                optional(term.p_value, 4),
                term.odds_ratio
            )?;
        }

        write!(
            f,
            "null deviance {:.3}, residual deviance {:.3}, AIC {:.3}, {} iterations",
            self.null_deviance, self.deviance, self.aic, self.iterations
        )
    }
}

/// Unregularized binary logistic regression fitted by Newton-Raphson (iteratively
/// reweighted least squares) with step halving.
pub struct LogisticRegression {
    config: LogisticRegressionConfig,
}

impl LogisticRegression {
    pub fn new(config: LogisticRegressionConfig) -> Self {
        Self { config }
    }

    /// Fits every feature column plus an intercept on `table`.
    ///
    /// # Errors
    /// * `Error::DataInsufficiency` for an empty table.
    /// * `Error::FitDivergence` when the deviance does not settle within
    ///   `max_iterations`, becomes non-finite, or the information matrix cannot be
    ///   inverted.
    ///
    /// Perfect separation is not an error: fitting stops once every probability is
    /// within `1e-8` of its label and the model is flagged `perfectly_separated`.
    pub fn fit(&self, table: &FeatureTable) -> Result<FittedModel, Error> {
        if table.is_empty() {
            return Err(Error::DataInsufficiency(
                "Cannot fit a classifier on zero training rows".to_string(),
            ));
        }

        let features = table.design_matrix();
        let responses = table.responses();

        // All-zero columns carry no information and are left out of the solve.
        let active_columns: Vec<usize> = (0..FEATURE_COUNT)
            .filter(|&column| features.iter().any(|row| row[column] != 0.0))
            .collect();

        let design: Vec<Vec<f64>> = features
            .iter()
            .map(|row| {
                std::iter::once(1.0)
                    .chain(active_columns.iter().map(|&column| row[column]))
                    .collect()
            })
            .collect();

        info!(
            "Fitting logistic regression on {} rows, {} active columns",
            design.len(),
            active_columns.len()
        );

        let mut beta = vec![0.0; active_columns.len() + 1];
        let mut deviance = binomial_deviance(&responses, &fitted_probabilities(&design, &beta));
        let mut iterations = 0;
        let mut converged = false;
        let mut perfectly_separated = false;

        while iterations < self.config.max_iterations {
            iterations += 1;

            let probabilities = fitted_probabilities(&design, &beta);
            let (gradient, information) = score_and_information(&design, &responses, &probabilities);

            let inverse = invert_matrix(&with_ridge(information)).ok_or_else(|| {
                Error::FitDivergence(format!(
                    "Information matrix could not be inverted at iteration {}",
                    iterations
                ))
            })?;

            let step = multiply(&inverse, &gradient);

            let mut candidate: Vec<f64> = beta.iter().zip(&step).map(|(b, s)| b + s).collect();
            let mut candidate_deviance =
                binomial_deviance(&responses, &fitted_probabilities(&design, &candidate));
            let mut halvings = 0;

            while (!candidate_deviance.is_finite() || candidate_deviance > deviance)
                && halvings < MAX_STEP_HALVINGS
            {
                halvings += 1;
                candidate = beta
                    .iter()
                    .zip(&candidate)
                    .map(|(previous, next)| (previous + next) / 2.0)
                    .collect();
                candidate_deviance =
                    binomial_deviance(&responses, &fitted_probabilities(&design, &candidate));
            }

            if !candidate_deviance.is_finite() {
                return Err(Error::FitDivergence(format!(
                    "Deviance became non-finite at iteration {}",
                    iterations
                )));
            }

            let change = (deviance - candidate_deviance).abs() / (candidate_deviance.abs() + 0.1);

            debug!(
                "Iteration {}: deviance {:.8} (change {:.3e}, {} halvings)",
                iterations, candidate_deviance, change, halvings
            );

            beta = candidate;
            deviance = candidate_deviance;

            if change < self.config.tolerance {
                converged = true;
                break;
            }

            if is_separated(&responses, &fitted_probabilities(&design, &beta)) {
                warn!("Fitted probabilities numerically 0 or 1 occurred; training data is perfectly separated");
                converged = true;
                perfectly_separated = true;
                break;
            }
        }

        if !converged {
            return Err(Error::FitDivergence(format!(
                "Did not converge after {} iterations (deviance {:.6})",
                iterations, deviance
            )));
        }

        let probabilities = fitted_probabilities(&design, &beta);
        let (_, information) = score_and_information(&design, &responses, &probabilities);
        let covariance = invert_matrix(&with_ridge(information)).ok_or_else(|| {
            Error::FitDivergence("Information matrix could not be inverted at the optimum".to_string())
        })?;

        let null_deviance = null_deviance(&responses);
        let aic = deviance + 2.0 * beta.len() as f64;

        let mut coefficients = vec![0.0; FEATURE_COUNT];
        for (position, &column) in active_columns.iter().enumerate() {
            coefficients[column] = beta[position + 1];
        }

        let mut summary = vec![estimated_term(INTERCEPT_TERM, beta[0], covariance[0][0])];
        for (column, feature_name) in FEATURE_COLUMNS.iter().enumerate() {
            match active_columns.iter().position(|&active| active == column) {
                Some(position) => summary.push(estimated_term(
                    *feature_name,
                    beta[position + 1],
                    covariance[position + 1][position + 1],
                )),
                None => summary.push(aliased_term(*feature_name)),
            }
        }

        info!(
            "Converged in {} iterations: deviance {:.4} (null {:.4}), AIC {:.4}",
            iterations, deviance, null_deviance, aic
        );

        Ok(FittedModel {
            intercept: beta[0],
            coefficients,
            summary,
            iterations,
            deviance,
            null_deviance,
            aic,
            train_rows: design.len(),
            perfectly_separated,
        })
    }
}

fn estimated_term(term: FeatureName, estimate: f64, variance: f64) -> CoefficientSummary {
    let std_error = (variance.is_finite() && variance > 0.0).then(|| variance.sqrt());
    let z_value = std_error.map(|se| estimate / se);

    CoefficientSummary {
        term,
        estimate,
        std_error,
        z_value,
        p_value: z_value.map(normal_two_sided_p_value),
        odds_ratio: estimate.exp(),
        aliased: false,
    }
}

fn aliased_term(term: FeatureName) -> CoefficientSummary {
    CoefficientSummary {
        term,
        estimate: 0.0,
        std_error: None,
        z_value: None,
        p_value: None,
        odds_ratio: 1.0,
        aliased: true,
    }
}

fn fitted_probabilities(design: &[Vec<f64>], beta: &[f64]) -> Vec<f64> {
    design
        .iter()
        .map(|row| sigmoid(row.iter().zip(beta).map(|(x, b)| x * b).sum()))
        .collect()
}

/// Gradient `X'(y - p)` and Fisher information `X'WX` with `W = diag(p(1 - p))`.
fn score_and_information(
    design: &[Vec<f64>],
    responses: &[f64],
    probabilities: &[f64],
) -> (Vec<f64>, Vec<Vec<f64>>) {
    let width = design.first().map_or(0, Vec::len);
    let mut gradient = vec![0.0; width];
    let mut information = vec![vec![0.0; width]; width];

    for ((row, &y), &p) in design.iter().zip(responses).zip(probabilities) {
        let residual = y - p;
        let weight = p * (1.0 - p);

        for i in 0..width {
            gradient[i] += row[i] * residual;
            for j in i..width {
                information[i][j] += weight * row[i] * row[j];
            }
        }
    }

    for i in 0..width {
        for j in 0..i {
            information[i][j] = information[j][i];
        }
    }

    (gradient, information)
}

fn with_ridge(mut information: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    for (i, row) in information.iter_mut().enumerate() {
        row[i] += RIDGE_JITTER * (1.0 + row[i].abs());
    }
    information
}

fn multiply(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum())
        .collect()
}

fn binomial_deviance(responses: &[f64], probabilities: &[f64]) -> f64 {
    -2.0 * responses
        .iter()
        .zip(probabilities)
        .map(|(&y, &p)| y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        .sum::<f64>()
}

fn null_deviance(responses: &[f64]) -> f64 {
    let mean = responses.iter().sum::<f64>() / responses.len() as f64;
    let mean = mean.clamp(f64::EPSILON, 1.0 - f64::EPSILON);

    binomial_deviance(responses, &vec![mean; responses.len()])
}

fn is_separated(responses: &[f64], probabilities: &[f64]) -> bool {
    responses
        .iter()
        .zip(probabilities)
        .all(|(y, p)| (y - p).abs() < SEPARATION_TOLERANCE)
}
