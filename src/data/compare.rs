use super::groups::MeasurementGroup;
use super::stats::{self, BoxSummary};

// ---------------------------------------------------------------------------
// Long-format comparison table
// ---------------------------------------------------------------------------

/// One row of the `(Part Condition, Measurement Value)` table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub condition: MeasurementGroup,
    pub value: f64,
}

/// All cleaned groups concatenated in [`MeasurementGroup::ALL`] order.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    /// Box summary per category; `None` for categories without rows.
    pub boxes: Vec<(MeasurementGroup, Option<BoxSummary>)>,
}

impl Comparison {
    /// Concatenate the groups in the order given. Empty groups add no rows.
    pub fn build<'a>(groups: impl IntoIterator<Item = (MeasurementGroup, &'a [f64])>) -> Self {
        let rows = groups
            .into_iter()
            .flat_map(|(condition, values)| {
                values
                    .iter()
                    .map(move |&value| ComparisonRow { condition, value })
            })
            .collect();
        let mut cmp = Self {
            rows,
            boxes: Vec::new(),
        };
        cmp.boxes = MeasurementGroup::ALL
            .iter()
            .map(|&g| (g, stats::box_summary(&cmp.values_for(g))))
            .collect();
        cmp
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one category, in table order.
    pub fn values_for(&self, condition: MeasurementGroup) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|r| r.condition == condition)
            .map(|r| r.value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_in_group_order_with_labels() {
        let molding = [81.0, 81.5];
        let painting = [82.0];
        let cmp = Comparison::build([
            (MeasurementGroup::Molding, &molding[..]),
            (MeasurementGroup::Painting, &painting[..]),
            (MeasurementGroup::PaintingWithoutOven, &[][..]),
            (MeasurementGroup::MoldingPlusOven, &[81.9][..]),
        ]);

        assert_eq!(cmp.len(), 4);
        let labels: Vec<_> = cmp.rows.iter().map(|r| r.condition).collect();
        assert_eq!(
            labels,
            vec![
                MeasurementGroup::Molding,
                MeasurementGroup::Molding,
                MeasurementGroup::Painting,
                MeasurementGroup::MoldingPlusOven,
            ]
        );
        assert_eq!(cmp.values_for(MeasurementGroup::Molding), vec![81.0, 81.5]);
    }

    #[test]
    fn all_empty_groups_build_an_empty_table() {
        let cmp = Comparison::build(MeasurementGroup::ALL.map(|g| (g, &[][..])));
        assert!(cmp.is_empty());
        for group in MeasurementGroup::ALL {
            assert!(cmp.values_for(group).is_empty());
        }
        assert!(cmp.boxes.iter().all(|(_, b)| b.is_none()));
    }

    #[test]
    fn boxes_follow_group_order() {
        let cmp = Comparison::build([(MeasurementGroup::Painting, &[81.0, 82.0, 83.0][..])]);
        let boxes = &cmp.boxes;
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[1].0, MeasurementGroup::Painting);
        assert_eq!(boxes[1].1.as_ref().map(|b| b.median), Some(82.0));
        assert!(boxes[0].1.is_none());
    }
}
