//! Role-dependent weighting of the five bucket totals into the final score.

use serde::{Deserialize, Serialize};

use super::document::{writer, ReportDocument};
use super::domain::{render_number, Designation};
use super::layout::weight_table;

/// Weight vectors in bucket order: Academics, Research, SelfDevelopment,
/// Mentoring, Leadership.
const ASSISTANT_PROFESSOR: [f64; 5] = [0.3, 0.3, 0.15, 0.15, 0.1];
const ASSOCIATE_PROFESSOR: [f64; 5] = [0.2, 0.4, 0.15, 0.15, 0.1];
const PROFESSOR: [f64; 5] = [0.1, 0.4, 0.2, 0.2, 0.1];
const UNRECOGNIZED: [f64; 5] = [0.0; 5];

pub fn weight_vector(designation: Designation) -> [f64; 5] {
    match designation {
        Designation::AssistantProfessor => ASSISTANT_PROFESSOR,
        Designation::AssociateProfessor => ASSOCIATE_PROFESSOR,
        Designation::Professor => PROFESSOR,
        Designation::Other => UNRECOGNIZED,
    }
}

/// Elementwise products of bucket scores and the designation's weight
/// vector, plus their sum. No normalization: if the weights do not sum to 1
/// the total reflects that directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedBreakdown {
    pub scores: [f64; 5],
    pub weights: [f64; 5],
    pub products: [f64; 5],
    pub total: f64,
}

pub fn weighted_breakdown(designation: Designation, scores: [f64; 5]) -> WeightedBreakdown {
    let weights = weight_vector(designation);
    let mut products = [0.0; 5];
    for i in 0..5 {
        products[i] = scores[i] * weights[i];
    }
    let total = products.iter().sum();

    WeightedBreakdown {
        scores,
        weights,
        products,
        total,
    }
}

/// Writes the breakdown into the corrective document's weight table: raw
/// scores, weights, and products on consecutive rows, with the total in the
/// last cell of the products row. A template without the table (or with
/// fewer rows/columns) degrades to skipped writes.
pub(crate) fn populate_weight_table(document: &mut ReportDocument, breakdown: &WeightedBreakdown) {
    let Some(table) = document.table_mut(weight_table::TABLE) else {
        tracing::warn!(
            table = weight_table::TABLE,
            "weight table missing from corrective template"
        );
        return;
    };

    let rows = [
        (weight_table::SCORES_ROW, &breakdown.scores),
        (weight_table::WEIGHTS_ROW, &breakdown.weights),
        (weight_table::PRODUCTS_ROW, &breakdown.products),
    ];
    for (row, values) in rows {
        for (offset, value) in values.iter().enumerate() {
            writer::write_cell(
                table,
                row,
                weight_table::FIRST_VALUE_COL + offset,
                &render_number(*value),
            );
        }
    }

    if let Some(cell) = table
        .rows
        .get_mut(weight_table::PRODUCTS_ROW)
        .and_then(|row| row.cells.last_mut())
    {
        cell.set_text(render_number(breakdown.total));
    }
}
