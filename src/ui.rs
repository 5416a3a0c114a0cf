//! Plain terminal front end: a stdin yes/no prompt and a line renderer.

use crate::consent::Prompt;
use crate::navigator::ListRenderer;
use crate::tree::MediaKind;
use crate::types::{ItemEntry, NodeEntry};
use std::io::{self, BufRead, Write};

/// Asks on stdout and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, heading: &str, body: &str) -> bool {
        println!("{}\n\n{}", heading, body);
        print!("[y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "j" | "ja")
}

/// Writes one line per entry.
///
/// Broadcast entries are numbered from 0 within each listing; the number is
/// what `--entry` selects.
pub struct LineRenderer<W: Write> {
    out: W,
    listed: usize,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, listed: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn kind_tag(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "video",
        MediaKind::Audio => "audio",
    }
}

/// Format a duration in seconds as `m:ss` or `h:mm:ss`.
fn format_duration(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

impl<W: Write> ListRenderer for LineRenderer<W> {
    fn add_node(&mut self, entry: &NodeEntry) {
        let action = if entry.playable { "play" } else { "open" };
        let _ = writeln!(
            self.out,
            "{:>2}  {:<10} [{}] {} ({})",
            self.listed,
            entry.url,
            kind_tag(entry.media_kind),
            entry.name,
            action
        );
        self.listed += 1;
    }

    fn add_item(&mut self, entry: &ItemEntry) {
        let duration = entry.duration.map(format_duration).unwrap_or_default();
        let _ = writeln!(
            self.out,
            "[{}] {} {}\n    {}",
            kind_tag(entry.media_kind),
            entry.label,
            duration,
            entry.stream_url
        );
    }

    fn end_of_listing(&mut self, _update_listing: bool) {
        self.listed = 0;
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" Ja "));
        assert!(!is_yes(""));
        assert!(!is_yes("nein"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(900), "15:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    fn node(name: &str, url: &str, playable: bool) -> NodeEntry {
        NodeEntry {
            name: name.to_string(),
            icon: "tt.jpg".to_string(),
            media_kind: MediaKind::Video,
            url: url.to_string(),
            playable,
            params: None,
        }
    }

    #[test]
    fn test_line_renderer_node() {
        let mut renderer = LineRenderer::new(Vec::new());
        renderer.add_node(&node("Tagesthemen", "/3", false));

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with(" 0  /3"));
        assert!(out.contains("[video] Tagesthemen (open)"));
    }

    #[test]
    fn test_line_renderer_numbers_entries_per_listing() {
        let mut renderer = LineRenderer::new(Vec::new());
        renderer.add_node(&node("Tagesschau", "/latest", true));
        renderer.add_node(&node("Tagesthemen", "/latest", true));
        renderer.end_of_listing(false);
        renderer.add_node(&node("Ideenimport", "/latest", true));

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with(" 0  /latest"));
        assert!(lines[1].starts_with(" 1  /latest"));
        assert!(lines[2].starts_with(" 0  /latest"));
        assert!(lines[2].contains("Ideenimport (play)"));
    }

    #[test]
    fn test_line_renderer_item() {
        let mut renderer = LineRenderer::new(Vec::new());
        renderer.add_item(&ItemEntry {
            label: "tagesschau (01.03.2024)".to_string(),
            plot: String::new(),
            stream_url: "https://example.com/ts.webm.mp4".to_string(),
            icon: String::new(),
            media_kind: MediaKind::Audio,
            duration: Some(900),
        });

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains("[audio] tagesschau (01.03.2024) 15:00"));
        assert!(out.contains("    https://example.com/ts.webm.mp4"));
    }
}
