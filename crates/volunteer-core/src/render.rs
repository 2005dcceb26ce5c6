use std::io::{IsTerminal, Write};

use unicode_width::UnicodeWidthStr;
use volunteer_model::community::{CommunityEvent, HowItWorksStep, LandingHighlight};
use volunteer_model::session::HeaderAction;
use volunteer_model::{FilterField, Session, TaskView, VolunteerTask};

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> Self {
        let color = cfg.get_bool("color").unwrap_or(true) && std::io::stdout().is_terminal();
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn print_header<W: Write>(&self, out: &mut W, session: &Session) -> anyhow::Result<()> {
        let parts: Vec<String> = session
            .header_actions()
            .into_iter()
            .map(|action| match action {
                HeaderAction::Greeting(text) => text,
                HeaderAction::Link { label, route } => format!("[{label}]({route})"),
                HeaderAction::Logout => "[LOGOUT]".to_string(),
            })
            .collect();
        writeln!(out, "{}", parts.join("  "))?;
        writeln!(out)?;
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    pub fn print_landing<W: Write>(
        &self,
        out: &mut W,
        steps: &[HowItWorksStep],
        highlights: &[LandingHighlight],
    ) -> anyhow::Result<()> {
        writeln!(
            out,
            "{}",
            self.paint("Welcome to Our Mosque Volunteer Platform", "1")
        )?;
        writeln!(
            out,
            "An app dedicated to organizing volunteer tasks and helping the mosque \
             community flourish through service."
        )?;
        writeln!(out)?;

        writeln!(out, "{}", self.paint("How It Works", "1"))?;
        for (idx, step) in steps.iter().enumerate() {
            writeln!(out, "  {}. {} - {}", idx + 1, step.step, step.description)?;
        }
        writeln!(out)?;

        writeln!(out, "{}", self.paint("Upcoming Events & Tasks", "1"))?;
        let rows = highlights
            .iter()
            .map(|h| vec![h.title.clone(), h.when.clone(), self.paint(&h.points.to_string(), "36")])
            .collect();
        write_table(
            &mut *out,
            vec!["Task".to_string(), "When".to_string(), "Points".to_string()],
            rows,
        )?;
        writeln!(out)?;
        writeln!(out, "Join our community of dedicated volunteers! See `volunteer tasks`.")?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(count = events.len()))]
    pub fn print_events<W: Write>(&self, out: &mut W, events: &[CommunityEvent]) -> anyhow::Result<()> {
        writeln!(out, "{}", self.paint("UPCOMING EVENTS", "1"))?;
        let rows = events
            .iter()
            .map(|event| {
                vec![
                    self.paint(&event.id.to_string(), "33"),
                    event.name.clone(),
                    event.when.clone(),
                    event.location.clone(),
                    event.description.clone(),
                ]
            })
            .collect();
        write_table(
            out,
            vec![
                "ID".to_string(),
                "Event".to_string(),
                "Date".to_string(),
                "Location".to_string(),
                "Description".to_string(),
            ],
            rows,
        )
    }

    /// Prints the filter line, the padded grid, the pagination bar and, when a
    /// delete is pending, the confirmation dialog.
    #[tracing::instrument(skip_all, fields(page = view.current_page))]
    pub fn print_task_page<W: Write>(&self, out: &mut W, view: &TaskView) -> anyhow::Result<()> {
        writeln!(out, "{}", self.paint("Task Management", "1"))?;
        let filters: Vec<String> = FilterField::ALL
            .iter()
            .map(|field| {
                let value = view.criteria.form_value(*field);
                let shown = if value.is_empty() { "any".to_string() } else { value };
                format!("{field}={shown}")
            })
            .collect();
        writeln!(out, "filters: {}  ({} matching)", filters.join(" "), view.match_count)?;
        writeln!(out)?;

        let headers = vec![
            "ID".to_string(),
            "Name".to_string(),
            "Type".to_string(),
            "Date".to_string(),
            "Time".to_string(),
            "Volunteers".to_string(),
            "Points".to_string(),
        ];

        let rows = view
            .slots()
            .into_iter()
            .map(|slot| match slot {
                Some(task) => self.task_row(task),
                None => vec![String::new(); 7],
            })
            .collect();
        write_table(&mut *out, headers, rows)?;
        writeln!(out)?;

        writeln!(out, "{}", self.pagination_bar(view))?;

        if let Some(task) = view.pending_delete.as_ref() {
            writeln!(out)?;
            self.print_confirmation(out, task)?;
        }
        Ok(())
    }

    pub fn print_confirmation<W: Write>(&self, out: &mut W, task: &VolunteerTask) -> anyhow::Result<()> {
        writeln!(out, "{}", self.paint("Confirm Deletion", "31"))?;
        writeln!(out, "Are you sure you want to delete \"{}\"?", task.name)?;
        writeln!(out, "[confirm] Delete   [cancel] Cancel")?;
        Ok(())
    }

    fn task_row(&self, task: &VolunteerTask) -> Vec<String> {
        vec![
            self.paint(&task.id.to_string(), "33"),
            task.name.clone(),
            task.kind.clone(),
            task.date.format("%Y-%m-%d").to_string(),
            task.time.clone(),
            task.volunteers_needed.to_string(),
            task.points.to_string(),
        ]
    }

    fn pagination_bar(&self, view: &TaskView) -> String {
        let mut parts = Vec::with_capacity(view.total_pages + 2);
        parts.push(if view.has_previous() {
            "< Previous".to_string()
        } else {
            self.paint("< Previous", "2")
        });

        for page in 1..=view.total_pages {
            if page == view.current_page {
                parts.push(self.paint(&format!("[{page}]"), "34"));
            } else {
                parts.push(page.to_string());
            }
        }

        parts.push(if view.has_next() {
            "Next >".to_string()
        } else {
            self.paint("Next >", "2")
        });
        parts.join("  ")
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for (header, width) in headers.iter().zip(&widths) {
        write!(writer, "{header:width$} ", width = *width)?;
    }
    writeln!(writer)?;

    for width in &widths {
        write!(writer, "{:-<width$} ", "", width = *width)?;
    }
    writeln!(writer)?;

    for row in rows {
        for (idx, width) in widths.iter().enumerate() {
            let cell = row.get(idx).map(String::as_str).unwrap_or_default();
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = width.saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use volunteer_model::sample::{sample_events, sample_tasks};
    use volunteer_model::{TaskViewModel, ViewModelPolicy};

    use super::{Renderer, strip_ansi};
    use crate::config::Config;

    fn render_page(vm: &TaskViewModel) -> String {
        let mut buf = Vec::new();
        Renderer::plain()
            .print_task_page(&mut buf, &vm.snapshot())
            .expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn color_setting_uses_config_booleans() {
        let mut cfg = Config::default();
        cfg.apply_overrides(vec![("color".to_string(), "n".to_string())]);
        assert!(!Renderer::new(&cfg).color);

        cfg.apply_overrides(vec![("color".to_string(), "y".to_string())]);
        assert_eq!(Renderer::new(&cfg).color, std::io::IsTerminal::is_terminal(&std::io::stdout()));
    }

    #[test]
    fn last_page_is_padded_to_six_rows() {
        let mut vm = TaskViewModel::new(sample_tasks(), ViewModelPolicy::default());
        vm.set_page(2);
        let text = render_page(&vm);

        let lines: Vec<&str> = text.lines().collect();
        let header_idx = lines
            .iter()
            .position(|l| l.starts_with("ID"))
            .expect("table header");
        // header, rule, then six slots
        let body = &lines[header_idx + 2..header_idx + 8];
        assert_eq!(body.len(), 6);
        assert!(text.contains("< Previous  1  [2]  Next >"));
        assert!(!text.contains("Confirm Deletion"));
    }

    #[test]
    fn empty_filter_result_still_shows_one_page() {
        let mut vm = TaskViewModel::new(sample_tasks(), ViewModelPolicy::default());
        vm.update_filter(volunteer_model::FilterField::MinPoints, "1000")
            .expect("filter");
        let text = render_page(&vm);
        assert!(text.contains("(0 matching)"));
        assert!(text.contains("points=1000"));
        assert!(text.contains("< Previous  [1]  Next >"));
    }

    #[test]
    fn pending_delete_shows_dialog() {
        let mut vm = TaskViewModel::new(sample_tasks(), ViewModelPolicy::default());
        vm.request_delete_by_id(3).expect("request");
        let text = render_page(&vm);
        assert!(text.contains("Confirm Deletion"));
        assert!(text.contains("delete \"Community Iftar Tables\"?"));
    }

    #[test]
    fn events_table_lists_every_event() {
        let mut buf = Vec::new();
        Renderer::plain()
            .print_events(&mut buf, &sample_events())
            .expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        for event in sample_events() {
            assert!(text.contains(&event.name));
        }
    }

    #[test]
    fn strip_ansi_removes_escape_codes() {
        assert_eq!(strip_ansi("\x1b[33m12\x1b[0m"), "12");
    }
}
