use super::sheet::ScoreSheet;
use super::CategoryScore;
use crate::appraisal::catalog::Category;

/// Mean of the touched criteria in the category, `None` when none are touched.
pub(crate) fn category_mean(sheet: &ScoreSheet, category: Category) -> Option<f64> {
    let (sum, count) = sheet
        .touched_in(category)
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

pub(crate) fn score_categories(sheet: &ScoreSheet) -> Vec<CategoryScore> {
    Category::ordered()
        .into_iter()
        .map(|category| {
            let mean = category_mean(sheet, category);
            let weight = category.weight();
            CategoryScore {
                category,
                label: category.label(),
                rated: sheet.touched_in(category).count(),
                total: category.criteria().count(),
                mean,
                weight,
                max_contribution: category.max_contribution(),
                contribution: mean.unwrap_or(0.0) * weight,
            }
        })
        .collect()
}
