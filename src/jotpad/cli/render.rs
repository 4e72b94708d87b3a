use super::styles::JOTPAD_STYLES;
use chrono::{DateTime, Utc};
use colored::Colorize;
use jotpad::api::{CmdMessage, MessageLevel};
use jotpad::index::DisplayNote;
use jotpad::model::truncate_chars;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const PREVIEW_INDENT: &str = "      ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_full_notes(notes: &[DisplayNote]) {
    let styles = &*JOTPAD_STYLES;
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            styles.index.apply_to(dn.index.to_string()),
            styles.title.apply_to(title_or_untitled(&dn.note.title))
        );
        println!("{}", styles.date.apply_to(&dn.note.edited_at));
        println!("--------------------------------");
        println!("{}", dn.note.body);
    }
}

pub(super) fn print_notes(notes: &[DisplayNote], preview_chars: usize, now: DateTime<Utc>) {
    if notes.is_empty() {
        println!("No notes yet.");
        return;
    }

    let styles = &*JOTPAD_STYLES;
    for dn in notes {
        let idx_str = format!("{:>4}. ", dn.index.to_string());
        let date = format!("  {}", dn.note.edited_at);
        let time_ago = format_time_ago(dn.note.sort_key, now);

        let fixed_width = idx_str.width() + date.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(title_or_untitled(&dn.note.title), available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}{}{}",
            styles.index.apply_to(idx_str),
            styles.title.apply_to(&title),
            " ".repeat(padding),
            styles.date.apply_to(date),
            styles.time.apply_to(time_ago)
        );

        let preview = preview_line(&dn.note.body, preview_chars);
        if !preview.is_empty() {
            println!("{}{}", PREVIEW_INDENT, styles.preview.apply_to(preview));
        }
    }
}

fn title_or_untitled(title: &str) -> &str {
    if title.trim().is_empty() {
        "(untitled)"
    } else {
        title
    }
}

/// Single-line body preview with markup tags dropped.
pub(super) fn preview_line(body: &str, max_chars: usize) -> String {
    let text = strip_tags(body);
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&flat, max_chars)
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
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

fn format_time_ago(sort_key: i64, now: DateTime<Utc>) -> String {
    let time_str = match DateTime::<Utc>::from_timestamp_millis(sort_key) {
        Some(then) => {
            let duration = now.signed_duration_since(then);
            Formatter::new().convert(duration.to_std().unwrap_or_default())
        }
        None => String::new(),
    };
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
