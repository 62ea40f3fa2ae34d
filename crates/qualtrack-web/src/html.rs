//! HTML rendering of the dashboard page
//!
//! Plain string building; every piece of record text goes through
//! `escape_html`.

use std::fmt::Write;

use qualtrack_engine::{DashboardView, Notice, StyledRow, ViewMode};

const PAGE_TITLE: &str = "Qualification Approval Tracker";

const STYLESHEET: &str = "
body { font-family: system-ui, sans-serif; margin: 2rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
th { background: #f4f4f4; }
td input { width: 100%; box-sizing: border-box; }
.notice { background: #e6f4ea; border: 1px solid #2E8B57; padding: 0.6rem; margin: 1rem 0; }
.toolbar { display: flex; gap: 1rem; align-items: center; margin: 1rem 0; }
";

/// Render the full page for a view, with an optional acknowledgement
pub fn render_page(view: &DashboardView, notice: Option<&Notice>) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", PAGE_TITLE);
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLESHEET);
    let _ = writeln!(out, "<h1>🎓 {}</h1>", PAGE_TITLE);
    out.push_str("<h3>Welcome!</h3>\n");

    let toggled = view.mode.toggled();
    let _ = writeln!(
        out,
        "<p><a id=\"mode-toggle\" href=\"/?mode={}\">🔀 Toggle View Mode</a></p>",
        toggled.as_str()
    );

    if let Some(notice) = notice {
        let _ = writeln!(
            out,
            "<div class=\"notice\" role=\"status\">✅ {}</div>",
            escape_html(&notice.message)
        );
    }

    match view.mode {
        ViewMode::View => render_view_mode(&mut out, view),
        ViewMode::Edit => render_edit_mode(&mut out, view),
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_view_mode(out: &mut String, view: &DashboardView) {
    out.push_str("<h2>View Qualifications</h2>\n");

    out.push_str("<form class=\"toolbar\" method=\"get\" action=\"/\">\n");
    out.push_str("<input type=\"hidden\" name=\"mode\" value=\"view\">\n");
    out.push_str("<label for=\"status\">Filter by Status</label>\n");
    out.push_str("<select id=\"status\" name=\"status\">\n");
    for option in &view.status_options {
        let selected = if *option == view.filter { " selected" } else { "" };
        let _ = writeln!(
            out,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape_html(option),
            selected
        );
    }
    out.push_str("</select>\n<button type=\"submit\">Apply</button>\n</form>\n");

    out.push_str("<table id=\"records\">\n");
    render_header(out);
    out.push_str("<tbody>\n");
    for row in &view.rows {
        render_styled_row(out, row);
    }
    out.push_str("</tbody>\n</table>\n");

    let _ = writeln!(
        out,
        "<p><a id=\"download-csv\" href=\"/export.csv?status={}\" download=\"qualifications.csv\">⬇️ Download as CSV</a></p>",
        urlencoding::encode(&view.filter)
    );
}

fn render_header(out: &mut String) {
    out.push_str("<thead><tr>");
    for column in qualtrack_core::render::CSV_HEADER {
        let _ = write!(out, "<th>{}</th>", column);
    }
    out.push_str("</tr></thead>\n");
}

fn render_styled_row(out: &mut String, row: &StyledRow) {
    let record = &row.record;
    match row.style {
        Some(style) => {
            let _ = write!(
                out,
                "<tr class=\"{}\" style=\"{}\">",
                style.class_name(),
                style.css()
            );
        }
        None => out.push_str("<tr>"),
    }
    let _ = writeln!(
        out,
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        record.id,
        escape_html(&record.faculty),
        escape_html(&record.qualification),
        escape_html(&record.status),
        escape_html(&record.date)
    );
}

fn render_edit_mode(out: &mut String, view: &DashboardView) {
    out.push_str("<h2>✏️ Edit Qualifications</h2>\n");

    out.push_str("<form id=\"save-form\" method=\"post\" action=\"/records/save\">\n");
    out.push_str("<table id=\"records\">\n");
    render_header(out);
    out.push_str("<tbody>\n");
    for row in &view.rows {
        let r = &row.record;
        let _ = write!(out, "<tr><td>{}</td>", r.id);
        for (field, value) in [
            ("faculty", &r.faculty),
            ("qualification", &r.qualification),
            ("status", &r.status),
            ("date", &r.date),
        ] {
            let _ = write!(
                out,
                "<td><input name=\"row-{}-{}\" value=\"{}\"></td>",
                r.id,
                field,
                escape_html(value)
            );
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out.push_str("<p><button type=\"submit\">💾 Save Changes</button></p>\n</form>\n");

    out.push_str("<h3>➕ Add a Qualification</h3>\n");
    out.push_str("<form id=\"add-form\" class=\"toolbar\" method=\"post\" action=\"/records/add\">\n");
    for (field, label) in [
        ("faculty", "Faculty"),
        ("qualification", "Qualification"),
        ("status", "Status"),
        ("date", "Date"),
    ] {
        let _ = writeln!(
            out,
            "<input name=\"{}\" placeholder=\"{}\">",
            field, label
        );
    }
    out.push_str("<button type=\"submit\">Add Record</button>\n</form>\n");

    out.push_str("<h3>🗑️ Delete a Qualification</h3>\n");
    out.push_str("<form id=\"delete-form\" class=\"toolbar\" method=\"post\" action=\"/records/delete\">\n");
    out.push_str("<label for=\"delete-id\">Enter the ID of the record to delete:</label>\n");
    out.push_str(
        "<input id=\"delete-id\" name=\"id\" type=\"number\" min=\"1\" step=\"1\" value=\"1\">\n",
    );
    out.push_str("<button type=\"submit\">Delete Record</button>\n</form>\n");
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualtrack_core::{QualificationRecord, RecordFields, StatusFilter};

    fn view(mode: ViewMode) -> DashboardView {
        let rows = vec![
            QualificationRecord::new(1, RecordFields::new("EMS", "BCom <Hons>", "DHET Approved", "")),
            QualificationRecord::new(2, RecordFields::new("Arts", "MA", "CHE Recommendation Approval", "")),
        ];
        DashboardView::build(&rows, mode, &StatusFilter::All)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_view_mode_styles_rows() {
        let html = render_page(&view(ViewMode::View), None);
        assert!(html.contains("<tr class=\"row-success\" style=\"color: white; font-weight: bold; background-color: #2E8B57\">"));
        assert!(html.contains("BCom &lt;Hons&gt;"));
        assert!(html.contains("<option value=\"All\" selected>All</option>"));
        assert!(html.contains("href=\"/export.csv?status=All\""));
        assert!(html.contains("href=\"/?mode=edit\""));
    }

    #[test]
    fn test_edit_mode_has_forms() {
        let html = render_page(&view(ViewMode::Edit), Some(&Notice::new("Changes saved successfully!")));
        assert!(html.contains("name=\"row-2-status\" value=\"CHE Recommendation Approval\""));
        assert!(html.contains("action=\"/records/save\""));
        assert!(html.contains("action=\"/records/delete\""));
        assert!(html.contains("✅ Changes saved successfully!"));
        assert!(!html.contains("Download as CSV"));
    }
}
