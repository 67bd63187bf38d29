use winstash_core::WindowRecord;

/// Box-drawn table of live windows.
pub struct WindowTable {
    id_width: usize,
    class_width: usize,
    pid_width: usize,
    title_width: usize,
}

impl WindowTable {
    pub fn new(windows: &[WindowRecord]) -> Self {
        let class_width = windows
            .iter()
            .map(|w| w.wm_class.chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 30);

        Self {
            id_width: 10,
            class_width,
            pid_width: 7,
            title_width: 50,
        }
    }

    pub fn print_table(&self, windows: &[WindowRecord]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!(
            "{}",
            self.row(["Id", "Class", "PID", "Title"].map(String::from))
        );
        println!("{}", self.border('├', '┼', '┤'));
        for window in windows {
            let focus = if window.focused { "* " } else { "" };
            println!(
                "{}",
                self.row([
                    window.id.to_string(),
                    window.wm_class.clone(),
                    window.pid.map_or("-".to_string(), |pid| pid.to_string()),
                    format!("{}{}", focus, window.title),
                ])
            );
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn widths(&self) -> [usize; 4] {
        [
            self.id_width,
            self.class_width,
            self.pid_width,
            self.title_width,
        ]
    }

    fn row(&self, cells: [String; 4]) -> String {
        let cells: Vec<String> = cells
            .iter()
            .zip(self.widths())
            .map(|(cell, width)| truncate(cell, width))
            .collect();
        format!("│ {} │", cells.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self
            .widths()
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte titles are cut safely.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
