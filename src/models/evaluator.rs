use crate::types::SpamProbability;
use crate::utils::average_ranks;
use crate::{Error, Label};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Spam, Label::Spam) => self.true_positives += 1,
            (Label::Ham, Label::Spam) => self.false_positives += 1,
            (Label::Ham, Label::Ham) => self.true_negatives += 1,
            (Label::Spam, Label::Ham) => self.false_negatives += 1,
        }
    }
}

/// One operating point of the ROC curve. `threshold` is `None` for the origin, where
/// nothing is classified as spam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub threshold: Option<f64>,
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub threshold: f64,
    pub confusion_matrix: ConfusionMatrix,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub specificity: f64,
    pub f1: f64,
    /// `None` when the evaluated rows contain only one class.
    pub auc: Option<f64>,
    pub roc_curve: Vec<RocPoint>,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cm = &self.confusion_matrix;

        writeln!(
            f,
            "TP {} | FP {} | TN {} | FN {} (threshold {})",
            cm.true_positives, cm.false_positives, cm.true_negatives, cm.false_negatives, self.threshold
        )?;
        write!(
            f,
            "accuracy {:.4}, precision {:.4}, recall {:.4}, specificity {:.4}, F1 {:.4}, AUC {}",
            self.accuracy,
            self.precision,
            self.recall,
            self.specificity,
            self.f1,
            self.auc.map_or_else(|| "NA".to_string(), |auc| format!("{:.4}", auc))
        )
    }
}

/// Threshold-based and rank-based metrics over scored rows.
///
/// A row is classified SPAM only when its probability is strictly greater than the
/// threshold; a probability equal to the threshold is HAM.
pub struct Evaluator {
    threshold: f64,
}

impl Evaluator {
    pub fn new(threshold: f64) -> Result<Self, Error> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(Error::Config(format!(
                "decision_threshold must be in (0, 1), got {}",
                threshold
            )));
        }

        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn classify(&self, probability: SpamProbability) -> Label {
        Label::from_is_spam(probability > self.threshold)
    }

    /// # Errors
    /// `Error::Schema` if `labels` and `probabilities` differ in length.
    pub fn evaluate(
        &self,
        labels: &[Label],
        probabilities: &[SpamProbability],
    ) -> Result<Evaluation, Error> {
        if labels.len() != probabilities.len() {
            return Err(Error::Schema(format!(
                "Cannot evaluate {} labels against {} probabilities",
                labels.len(),
                probabilities.len()
            )));
        }

        let mut confusion_matrix = ConfusionMatrix::default();
        for (&label, &probability) in labels.iter().zip(probabilities) {
            confusion_matrix.record(label, self.classify(probability));
        }

        let ratio = |numerator: usize, denominator: usize| {
            if denominator == 0 {
                0.0
            } else {
                numerator as f64 / denominator as f64
            }
        };

        let cm = confusion_matrix;
        let precision = ratio(cm.true_positives, cm.true_positives + cm.false_positives);
        let recall = ratio(cm.true_positives, cm.true_positives + cm.false_negatives);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Ok(Evaluation {
            threshold: self.threshold,
            confusion_matrix,
            accuracy: ratio(cm.true_positives + cm.true_negatives, cm.total()),
            precision,
            recall,
            specificity: ratio(cm.true_negatives, cm.true_negatives + cm.false_positives),
            f1,
            auc: Self::auc(labels, probabilities),
            roc_curve: Self::roc_curve(labels, probabilities),
        })
    }

    /// Probability that a random spam row outranks a random ham row, ties counting
    /// one half (the normalized Mann-Whitney U statistic).
    pub fn auc(labels: &[Label], probabilities: &[SpamProbability]) -> Option<f64> {
        let spam_count = labels.iter().filter(|label| label.is_spam()).count();
        let ham_count = labels.len() - spam_count;

        if spam_count == 0 || ham_count == 0 {
            return None;
        }

        let ranks = average_ranks(probabilities);
        let spam_rank_sum: f64 = labels
            .iter()
            .zip(&ranks)
            .filter(|(label, _)| label.is_spam())
            .map(|(_, rank)| rank)
            .sum();

        let spam_count = spam_count as f64;
        let u = spam_rank_sum - spam_count * (spam_count + 1.0) / 2.0;

        Some(u / (spam_count * ham_count as f64))
    }

    /// ROC operating points from the strictest threshold to the most lenient, one per
    /// distinct probability. Empty when either class is absent.
    pub fn roc_curve(labels: &[Label], probabilities: &[SpamProbability]) -> Vec<RocPoint> {
        let spam_count = labels.iter().filter(|label| label.is_spam()).count();
        let ham_count = labels.len() - spam_count;

        if spam_count == 0 || ham_count == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(SpamProbability, Label)> = probabilities
            .iter()
            .copied()
            .zip(labels.iter().copied())
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut points = vec![RocPoint {
            threshold: None,
            false_positive_rate: 0.0,
            true_positive_rate: 0.0,
        }];

        let (mut true_positives, mut false_positives) = (0usize, 0usize);
        let mut index = 0;

        while index < scored.len() {
            let threshold = scored[index].0;

            while index < scored.len() && scored[index].0 == threshold {
                match scored[index].1 {
                    Label::Spam => true_positives += 1,
                    Label::Ham => false_positives += 1,
                }
                index += 1;
            }

            points.push(RocPoint {
                threshold: Some(threshold),
                false_positive_rate: false_positives as f64 / ham_count as f64,
                true_positive_rate: true_positives as f64 / spam_count as f64,
            });
        }

        points
    }
}
