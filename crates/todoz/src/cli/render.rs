use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use timeago::Formatter;
use todozapp::model::{Priority, TodoItem};
use todozapp::session::{Notice, NoticeLevel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;

pub(super) fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.content.dimmed()),
            NoticeLevel::Success => println!("{}", notice.content.green()),
            NoticeLevel::Warning => println!("{}", notice.content.yellow()),
            NoticeLevel::Error => println!("{}", notice.content.red()),
        }
    }
}

pub(super) fn print_success(content: &str) {
    println!("{}", content.green());
}

pub(super) fn print_noop(content: &str) {
    println!("{}", content.dimmed());
}

pub(super) fn print_items(items: &[TodoItem]) {
    if items.is_empty() {
        println!("No items yet. Add one with: todoz add <text>");
        return;
    }

    for item in items {
        let marker = priority_marker(item.priority);
        let id_str = format!("{:>3}.", item.id);
        let checkbox = if item.completed { "[x]" } else { "[ ]" };

        let time_ago = format_time_ago(item.created_at);

        // marker(1) + spaces(3) + id + checkbox + right-aligned age
        let fixed_width = 4 + id_str.width() + checkbox.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let text_display = truncate_to_width(&item.text, available);
        let padding = available.saturating_sub(text_display.width());

        let text_colored = if item.completed {
            text_display.as_str().strikethrough().dimmed()
        } else {
            text_display.as_str().normal()
        };

        println!(
            "{} {} {} {}{}{}",
            marker,
            id_str,
            checkbox,
            text_colored,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn priority_marker(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "●".red(),
        Priority::Medium => "●".yellow(),
        Priority::None => " ".normal(),
    }
}

fn format_time_ago(created_at: DateTime<Utc>) -> String {
    let elapsed = Utc::now()
        .signed_duration_since(created_at)
        .to_std()
        .unwrap_or_default();
    Formatter::new().convert(elapsed)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
