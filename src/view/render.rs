use super::ViewState;
use crate::model::EmployeeRecord;
use chrono::NaiveDate;

/// Renders the page as a pure function of the view state.
///
/// Exactly one branch is taken: loading, then error, then the empty state,
/// then the table. Absent optional fields become empty cells, never the
/// text "null" or "None".
pub fn render_page(state: &ViewState) -> String {
    let body = if state.loading {
        "<p>Loading…</p>".to_string()
    } else if let Some(msg) = &state.error_message {
        format!("<p class=\"error\">Error: {}</p>", escape_html(msg))
    } else if state.rows.is_empty() {
        "<p>No employees found.</p>".to_string()
    } else {
        render_table(&state.rows)
    };

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Employees</title></head>\n\
         <body>\n\
         <h1>Employees</h1>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

fn render_table(rows: &[EmployeeRecord]) -> String {
    let mut out = String::from(
        "<table>\n<thead>\n<tr>\
         <th>ID</th>\
         <th>First name</th>\
         <th>Last name</th>\
         <th>Email</th>\
         <th>Mobile</th>\
         <th>Status</th>\
         <th>Date of Joining</th>\
         </tr>\n</thead>\n<tbody>\n",
    );

    for rec in rows {
        out.push_str("<tr>");
        out.push_str(&format!("<td>{}</td>", rec.id));
        push_cell(&mut out, rec.first_name.as_deref());
        push_cell(&mut out, rec.last_name.as_deref());
        push_cell(&mut out, rec.email.as_deref());
        push_cell(&mut out, rec.mobile.as_deref());
        push_cell(&mut out, rec.status.as_deref());
        let date = rec.date_of_joining.map(format_join_date);
        push_cell(&mut out, date.as_deref());
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>");
    out
}

fn push_cell(out: &mut String, value: Option<&str>) {
    out.push_str("<td>");
    if let Some(v) = value {
        out.push_str(&escape_html(v));
    }
    out.push_str("</td>");
}

/// Month/day/year without zero padding, the en-US calendar-date form the
/// original page produced in the browser.
fn format_join_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_record() -> EmployeeRecord {
        EmployeeRecord {
            id: 1,
            created_at: None,
            first_name: Some("Ana".to_string()),
            last_name: Some("Lee".to_string()),
            email: Some("a@x.com".to_string()),
            date_of_joining: NaiveDate::from_ymd_opt(2023, 1, 5),
            status: Some("Active".to_string()),
            mobile: Some("555".to_string()),
        }
    }

    fn state_with(rows: Vec<EmployeeRecord>) -> ViewState {
        ViewState {
            rows,
            loading: false,
            error_message: None,
        }
    }

    #[test]
    fn test_loading_shows_indicator_only() {
        let state = ViewState {
            loading: true,
            ..ViewState::default()
        };
        let html = render_page(&state);
        assert!(html.contains("Loading…"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("No employees found."));
        assert!(!html.contains("Error:"));
    }

    #[test]
    fn test_error_shows_verbatim_message() {
        let state = ViewState {
            error_message: Some("permission denied".to_string()),
            ..ViewState::default()
        };
        let html = render_page(&state);
        assert!(html.contains("Error: permission denied"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("No employees found."));
    }

    // Loading wins over a set error message; the error is only shown once
    // the fetch has settled.
    #[test]
    fn test_loading_checked_before_error() {
        let state = ViewState {
            loading: true,
            error_message: Some("permission denied".to_string()),
            ..ViewState::default()
        };
        let html = render_page(&state);
        assert!(html.contains("Loading…"));
        assert!(!html.contains("Error:"));
    }

    #[test]
    fn test_empty_result_shows_empty_state() {
        let html = render_page(&state_with(Vec::new()));
        assert!(html.contains("No employees found."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_full_row_renders_every_cell() {
        let html = render_page(&state_with(vec![full_record()]));
        assert!(html.contains(
            "<tr><td>1</td><td>Ana</td><td>Lee</td><td>a@x.com</td>\
             <td>555</td><td>Active</td><td>1/5/2023</td></tr>"
        ));
    }

    #[test]
    fn test_rows_render_in_received_order() {
        let mut second = full_record();
        second.id = 2;
        second.first_name = Some("Bo".to_string());
        let html = render_page(&state_with(vec![full_record(), second]));

        let first_pos = html.find("<td>Ana</td>").unwrap();
        let second_pos = html.find("<td>Bo</td>").unwrap();
        assert!(first_pos < second_pos);
        assert_eq!(html.matches("<tr><td>").count(), 2);
    }

    #[test]
    fn test_absent_fields_render_as_empty_cells() {
        let rec = EmployeeRecord {
            id: 4,
            created_at: None,
            first_name: None,
            last_name: Some("Lee".to_string()),
            email: None,
            date_of_joining: None,
            status: None,
            mobile: None,
        };
        let html = render_page(&state_with(vec![rec]));
        assert!(html.contains(
            "<tr><td>4</td><td></td><td>Lee</td><td></td>\
             <td></td><td></td><td></td></tr>"
        ));
        assert!(!html.contains("null"));
        assert!(!html.contains("None"));
    }

    #[test]
    fn test_created_at_is_never_rendered() {
        let mut rec = full_record();
        rec.created_at = "2021-07-01T00:00:00Z".parse().ok();
        let html = render_page(&state_with(vec![rec]));
        assert!(!html.contains("2021"));
    }

    #[test]
    fn test_join_date_format_is_unpadded() {
        assert_eq!(
            format_join_date(NaiveDate::from_ymd_opt(2023, 1, 5).unwrap()),
            "1/5/2023"
        );
        assert_eq!(
            format_join_date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()),
            "12/31/1999"
        );
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let mut rec = full_record();
        rec.first_name = Some("<script>alert(1)</script>".to_string());
        let html = render_page(&state_with(vec![rec]));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a&b<c>"d"'e'"#), "a&amp;b&lt;c&gt;&quot;d&quot;&#39;e&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
