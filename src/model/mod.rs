//! Processing pipeline: filter -> sort -> group, plus the render-ready view.

use crate::item::Record;
use crate::palette::{Color, color_for_group};
use serde::Serialize;
use std::collections::BTreeMap;

/// Records keyed by `listId`. BTreeMap so iteration is ascending by list.
pub type GroupedResult = BTreeMap<i64, Vec<Record>>;

/// Filter, sort, and group a raw fetch result.
///
/// - drop records whose name is missing or exactly `""` (no trimming)
/// - sort by listId, then name (ordinal `str` order), then id
/// - group by listId; groups are never empty
///
/// Filtering happens first so the comparator only ever sees named records.
pub fn process(records: Vec<Record>) -> GroupedResult {
    let mut named: Vec<Record> = records
        .into_iter()
        .filter(|r| r.display_name().is_some())
        .collect();

    named.sort_by(|a, b| {
        a.list_id
            .cmp(&b.list_id)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut grouped = GroupedResult::new();
    for record in named {
        grouped.entry(record.list_id).or_default().push(record);
    }
    grouped
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RowView {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupView {
    pub list_id: i64,
    pub color: Color,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportData {
    pub groups: Vec<GroupView>,
    pub totals: TotalsView,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TotalsView {
    pub groups: usize,
    pub items: usize,
}

/// Flatten a grouped result into what the renderers consume. Each group
/// carries its accent color so renderers don't need the palette.
pub fn build_report_data(grouped: &GroupedResult) -> ReportData {
    let groups: Vec<GroupView> = grouped
        .iter()
        .map(|(&list_id, records)| GroupView {
            list_id,
            color: color_for_group(list_id),
            rows: records
                .iter()
                .filter_map(|r| {
                    r.display_name().map(|name| RowView {
                        id: r.id,
                        name: name.to_string(),
                    })
                })
                .collect(),
        })
        .collect();

    let items = groups.iter().map(|g| g.rows.len()).sum();

    ReportData {
        totals: TotalsView {
            groups: groups.len(),
            items,
        },
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(group: &[Record]) -> Vec<&str> {
        group.iter().filter_map(Record::display_name).collect()
    }

    #[test]
    fn two_lists_two_items_each() {
        let grouped = process(vec![
            Record::new(1, 1, Some("Item 1")),
            Record::new(2, 1, Some("Item 2")),
            Record::new(3, 2, Some("Item 3")),
            Record::new(4, 2, Some("Item 4")),
        ]);

        assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(grouped[&1].len(), 2);
        assert_eq!(grouped[&2].len(), 2);
    }

    #[test]
    fn drops_blank_and_null_then_sorts() {
        let grouped = process(vec![
            Record::new(1, 2, Some("Item 1")),
            Record::new(2, 1, Some("Item 2")),
            Record::new(3, 2, Some("Item 3")),
            Record::new(4, 1, Some("")),
            Record::new(5, 3, None),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(names(&grouped[&1]), vec!["Item 2"]);
        assert_eq!(names(&grouped[&2]), vec!["Item 1", "Item 3"]);
        assert!(!grouped.contains_key(&3));
    }

    #[test]
    fn empty_and_all_filtered_inputs_yield_nothing() {
        assert!(process(vec![]).is_empty());
        assert!(process(vec![Record::new(1, 1, None), Record::new(2, 2, Some(""))]).is_empty());
    }

    #[test]
    fn whitespace_names_are_kept() {
        let grouped = process(vec![Record::new(1, 1, Some(" "))]);
        assert_eq!(names(&grouped[&1]), vec![" "]);
    }

    #[test]
    fn name_order_is_ordinal_not_numeric() {
        // "Item 10" < "Item 2" under plain string order.
        let grouped = process(vec![
            Record::new(2, 1, Some("Item 2")),
            Record::new(10, 1, Some("Item 10")),
            Record::new(1, 1, Some("item 1")),
        ]);
        assert_eq!(names(&grouped[&1]), vec!["Item 10", "Item 2", "item 1"]);
    }

    #[test]
    fn equal_names_fall_back_to_id() {
        let grouped = process(vec![
            Record::new(9, 1, Some("dup")),
            Record::new(3, 1, Some("dup")),
        ]);
        let ids: Vec<i64> = grouped[&1].iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn same_input_same_output() {
        let input = vec![
            Record::new(3, 2, Some("b")),
            Record::new(1, 1, Some("a")),
            Record::new(2, 2, Some("a")),
        ];
        assert_eq!(process(input.clone()), process(input));
    }

    #[test]
    fn report_data_carries_colors_and_totals() {
        let grouped = process(vec![
            Record::new(1, 1, Some("a")),
            Record::new(2, 5, Some("b")),
            Record::new(3, 5, Some("c")),
        ]);
        let data = build_report_data(&grouped);

        assert_eq!(data.totals, TotalsView { groups: 2, items: 3 });
        assert_eq!(data.groups[0].list_id, 1);
        assert_eq!(data.groups[1].list_id, 5);
        // 1 and 5 share a palette slot.
        assert_eq!(data.groups[0].color, data.groups[1].color);
        assert_eq!(
            data.groups[1].rows,
            vec![
                RowView {
                    id: 2,
                    name: "b".to_string()
                },
                RowView {
                    id: 3,
                    name: "c".to_string()
                },
            ]
        );
    }
}
