use crate::model::ReportData;

/// Plain-text listing:
///
/// ```text
/// List ID 1
/// Name	ID
/// Item 2	2
///
/// List ID 2
/// ...
/// ```
pub fn render_text_report(data: &ReportData) -> String {
    let mut out = String::new();
    for (i, group) in data.groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("List ID {}\n", group.list_id));
        out.push_str("Name\tID\n");
        for row in &group.rows {
            out.push_str(&format!("{}\t{}\n", row.name, row.id));
        }
    }
    out
}
