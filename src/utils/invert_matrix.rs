/// Inverts a square matrix with Gauss-Jordan elimination and partial pivoting.
///
/// # Returns
/// * `None` if the matrix is not square, is singular, or contains non-finite values.
pub fn invert_matrix(matrix: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let size = matrix.len();

    if matrix.iter().any(|row| row.len() != size) {
        return None;
    }

    // Augment with the identity: [A | I]
    let mut augmented: Vec<Vec<f64>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut augmented_row = row.clone();
            augmented_row.extend((0..size).map(|j| if i == j { 1.0 } else { 0.0 }));
            augmented_row
        })
        .collect();

    for column in 0..size {
        let pivot_row = (column..size).max_by(|&a, &b| {
            augmented[a][column]
                .abs()
                .partial_cmp(&augmented[b][column].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

        let pivot = augmented[pivot_row][column];
        if !pivot.is_finite() || pivot.abs() < f64::MIN_POSITIVE {
            return None;
        }

        augmented.swap(column, pivot_row);

        for value in augmented[column].iter_mut() {
            *value /= pivot;
        }

        let pivot_values = augmented[column].clone();

        for (row_index, row) in augmented.iter_mut().enumerate() {
            if row_index == column {
                continue;
            }

            let factor = row[column];
            if factor == 0.0 {
                continue;
            }

            for (value, pivot_value) in row.iter_mut().zip(&pivot_values) {
                *value -= factor * pivot_value;
            }
        }
    }

    let inverse: Vec<Vec<f64>> = augmented
        .into_iter()
        .map(|row| row[size..].to_vec())
        .collect();

    if inverse.iter().flatten().all(|value| value.is_finite()) {
        Some(inverse)
    } else {
        None
    }
}
