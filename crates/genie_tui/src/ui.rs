//! UI rendering for TUI.

use crate::app::{App, AppMode, EditField};
use genie_core::{MediaRef, VOICES};
use genie_wizard::{
    ActivePanel, EXAMPLE_TEXTS, ImagePanel, IndicatorEntry, MusicPanel, Notice, Phase, PhaseStatus, PreviewPanel,
    Severity, StepMarker, TextInputPanel, VoicePanel, Wizard,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Draw the wizard while idle.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App, wizard: &Wizard) {
    let chunks = frame_layout(f.area());

    draw_header(f, app, chunks[0]);
    draw_indicator(f, app.snapshot.indicator(), chunks[1]);

    match wizard.active_panel() {
        ActivePanel::TextInput(panel) => draw_text_input(f, app, panel, chunks[2]),
        ActivePanel::Processing(panel) => draw_phases(f, "Processing", panel.tracker().phases(), chunks[2]),
        ActivePanel::Voice(panel) => draw_voice(f, app, wizard, panel, chunks[2]),
        ActivePanel::Image(panel) => draw_image(f, app, wizard, panel, chunks[2]),
        ActivePanel::Music(panel) => draw_music(f, app, wizard, panel, chunks[2]),
        ActivePanel::Video(panel) => draw_phases(f, "Video Generation", panel.tracker().phases(), chunks[2]),
        ActivePanel::Preview(panel) => draw_preview(f, wizard, panel, chunks[2]),
        ActivePanel::NotFound(cursor) => {
            let missing = Paragraph::new(format!("Step {} not found", cursor))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center);
            f.render_widget(missing, chunks[2]);
        }
    }

    draw_notice(f, app.latest_notice(), chunks[3]);
    draw_status_bar(f, app, chunks[4]);
}

/// Draw the progress view while a task runs.
#[tracing::instrument(skip_all)]
pub fn draw_busy(f: &mut Frame, app: &App) {
    let chunks = frame_layout(f.area());

    draw_header(f, app, chunks[0]);
    draw_indicator(f, app.snapshot.indicator(), chunks[1]);

    let label = app.busy_label.as_deref().unwrap_or("Working");
    if app.progress.phases().is_empty() {
        let waiting = Paragraph::new(format!("{}...", label))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(waiting, chunks[2]);
    } else {
        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(chunks[2]);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(label.to_string()))
            .gauge_style(Style::default().fg(Color::Yellow))
            .percent(u16::from(*app.progress.overall()));
        f.render_widget(gauge, inner[0]);
        draw_phases(f, "Phases", app.progress.phases(), inner[1]);
    }

    draw_notice(f, app.latest_notice(), chunks[3]);
    draw_status_bar(f, app, chunks[4]);
}

fn frame_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Step indicator
            Constraint::Min(0),    // Active panel
            Constraint::Length(3), // Notice
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Video Narrative Genie - {}", app.snapshot.status());
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_indicator(f: &mut Frame, entries: &[IndicatorEntry], area: Rect) {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }
        let (symbol, style) = match entry.marker {
            StepMarker::Completed => ("✓", Style::default().fg(Color::Green)),
            StepMarker::Current => ("●", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            StepMarker::Pending => ("○", Style::default().fg(Color::Gray)),
        };
        spans.push(Span::styled(format!("{} {}", symbol, entry.descriptor.title), style));
    }
    let indicator = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(indicator, area);
}

fn field_block(app: &App, field: EditField) -> Block<'static> {
    let editing = app.mode == AppMode::Edit(field);
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = if editing {
        format!("{} (editing, Esc to finish)", field.label())
    } else {
        field.label().to_string()
    };
    Block::default().borders(Borders::ALL).title(title).border_style(style)
}

fn draw_text_input(f: &mut Frame, app: &App, panel: &TextInputPanel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3), Constraint::Length(6)])
        .split(area);

    let text = Paragraph::new(panel.text())
        .block(field_block(app, EditField::Text).title_bottom(format!("{} characters", panel.char_count())))
        .wrap(Wrap { trim: false });
    f.render_widget(text, chunks[0]);

    let settings = format!(
        "Duration: {}s (input '{}')  |  Aspect: {}  |  Generate image: {}",
        panel.duration().seconds(),
        panel.duration_input(),
        panel.aspect_ratio(),
        if panel.generate_image() { "yes" } else { "no" },
    );
    let settings = Paragraph::new(settings).block(field_block(app, EditField::Duration));
    f.render_widget(settings, chunks[1]);

    let examples: Vec<Line> = EXAMPLE_TEXTS
        .iter()
        .enumerate()
        .map(|(i, text)| Line::from(format!("{}: {}", i + 1, truncate(text, 90))))
        .collect();
    let examples = Paragraph::new(examples).block(Block::default().borders(Borders::ALL).title("Examples"));
    f.render_widget(examples, chunks[2]);
}

fn draw_voice(f: &mut Frame, app: &App, wizard: &Wizard, panel: &VoicePanel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(VOICES.len() as u16 + 2), Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let voices: Vec<Line> = VOICES
        .iter()
        .map(|voice| {
            let selected = voice.id == panel.voice().id;
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::styled(
                format!("{} {} ({}, {})", if selected { ">" } else { " " }, voice.name, voice.language, voice.accent),
                style,
            )
        })
        .collect();
    f.render_widget(
        Paragraph::new(voices).block(Block::default().borders(Borders::ALL).title("Voice")),
        chunks[0],
    );

    let narration = Paragraph::new(panel.text())
        .block(field_block(app, EditField::Narration))
        .wrap(Wrap { trim: false });
    f.render_widget(narration, chunks[1]);

    f.render_widget(asset_line("Voiceover", wizard.project().audio().as_ref()), chunks[2]);
}

fn draw_image(f: &mut Frame, app: &App, wizard: &Wizard, panel: &ImagePanel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(3), Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let settings = vec![
        Line::from(format!("Style: {}", panel.style())),
        Line::from(format!(
            "Color scheme: {} ({})",
            panel.scheme().name,
            panel.scheme().colors.join(", ")
        )),
        Line::from(format!("Quality: {}%", panel.quality().percent())),
        Line::from(format!(
            "Title space: {}  |  Text overlay: {}",
            yes_no(panel.include_text()),
            yes_no(panel.text_overlay())
        )),
    ];
    f.render_widget(
        Paragraph::new(settings).block(Block::default().borders(Borders::ALL).title("Image settings")),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(panel.embellishment()).block(field_block(app, EditField::Embellishment)),
        chunks[1],
    );

    let prompt = Paragraph::new(panel.prompt(wizard.project()))
        .block(Block::default().borders(Borders::ALL).title("Prompt"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(prompt, chunks[2]);

    f.render_widget(asset_line("Background image", wizard.project().image().as_ref()), chunks[3]);
}

fn draw_music(f: &mut Frame, app: &App, wizard: &Wizard, panel: &MusicPanel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    f.render_widget(
        Paragraph::new(app.music_path.as_str()).block(field_block(app, EditField::MusicPath)),
        chunks[0],
    );

    let state = match (wizard.project().music(), panel.skipped()) {
        (Some(music), _) => format!("Music: {}", music),
        (None, true) => "Music: skipped".to_string(),
        (None, false) => "Music: not chosen".to_string(),
    };
    let policy = panel.policy();
    let lines = vec![
        Line::from(state),
        Line::from(format!(
            "Accepted: {} up to {}",
            policy.allowed_types.join(", "),
            genie_core::format_file_size(policy.max_bytes)
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Background music")),
        chunks[1],
    );

    draw_phases(f, "Upload", panel.tracker().phases(), chunks[2]);
}

fn draw_preview(f: &mut Frame, wizard: &Wizard, panel: &PreviewPanel, area: Rect) {
    let summary = wizard.preview_summary();
    let mut lines = vec![
        Line::from(format!("Duration: {}", summary.duration())),
        Line::from(format!("Resolution: {}", summary.resolution())),
        Line::from(format!("Size: {}", summary.size())),
        Line::from(format!("Format: {}", summary.format())),
        Line::from(format!("Voice: {}", summary.voice())),
        Line::from(format!("Created: {}", summary.created())),
        Line::from(format!("Share: {}", wizard.share_link())),
    ];
    if !panel.downloads().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from("Downloaded:"));
        lines.extend(panel.downloads().iter().map(|p| Line::from(format!("  {}", p.display()))));
    }
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Your video is ready"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_phases(f: &mut Frame, title: &str, phases: &[Phase], area: Rect) {
    let lines: Vec<Line> = phases.iter().flat_map(phase_lines).collect();
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
}

fn phase_lines(phase: &Phase) -> Vec<Line<'static>> {
    let (symbol, color) = match phase.status() {
        PhaseStatus::Pending => ("○", Color::Gray),
        PhaseStatus::Processing => ("●", Color::Yellow),
        PhaseStatus::Completed => ("✓", Color::Green),
        PhaseStatus::Error => ("✗", Color::Red),
    };
    let filled = usize::from(*phase.progress()) / 5;
    let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(20 - filled));
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} {:<24}", symbol, phase.title()), Style::default().fg(color)),
        Span::raw(format!(" {} {:>3}%", bar, phase.progress())),
    ])];
    let detail = match phase.error() {
        Some(error) => Span::styled(format!("    {}", error), Style::default().fg(Color::Red)),
        None => Span::styled(format!("    {}", phase.description()), Style::default().fg(Color::DarkGray)),
    };
    lines.push(Line::from(detail));
    lines
}

fn asset_line(label: &str, media: Option<&MediaRef>) -> Paragraph<'static> {
    let text = match media {
        Some(media) => format!("{}: {}", label, media),
        None => format!("{}: not generated yet", label),
    };
    Paragraph::new(text).block(Block::default().borders(Borders::ALL))
}

fn draw_notice(f: &mut Frame, notice: Option<&Notice>, area: Rect) {
    let (text, color) = match notice {
        Some(notice) => {
            let color = match notice.severity() {
                Severity::Info => Color::Blue,
                Severity::Success => Color::Green,
                Severity::Error => Color::Red,
            };
            (format!("{}: {}", notice.title(), notice.description()), color)
        }
        None => (String::new(), Color::Gray),
    };
    let notice = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(color));
    f.render_widget(notice, area);
}

/// Draw the status bar with help text.
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.mode, app.snapshot.step()) {
        (AppMode::Busy, _) => "Esc: Cancel | Ctrl+C: Quit",
        (AppMode::Edit(_), _) => "Type to edit | Backspace: Delete | Esc: Done",
        (AppMode::Navigate, Some(genie_core::StepId::TextInput)) => {
            "E: Edit text | D: Duration | A: Aspect | I: Image on/off | 1-3: Example | →: Next | Q: Quit"
        }
        (AppMode::Navigate, Some(genie_core::StepId::Processing)) => "R: Retry analysis | ←: Back | Q: Quit",
        (AppMode::Navigate, Some(genie_core::StepId::Voice)) => {
            "V: Voice | P: Preview | E: Edit | G: Generate | L: Listen | ←→: Navigate | Q: Quit"
        }
        (AppMode::Navigate, Some(genie_core::StepId::Image)) => {
            "S: Style | C: Colors | +/-: Quality | T: Title space | O: Overlay | E: Extras | G: Generate | ←→ | Q"
        }
        (AppMode::Navigate, Some(genie_core::StepId::Music)) => {
            "U: Upload | S: Skip | X: Remove | L: Listen | ←→: Navigate | Q: Quit"
        }
        (AppMode::Navigate, Some(genie_core::StepId::Video)) => "G: Generate video | ←→: Navigate | Q: Quit",
        (AppMode::Navigate, Some(genie_core::StepId::Preview)) => {
            "P: Play | D: Download all | S: Share link | N: New project | ←: Back | Q: Quit"
        }
        (AppMode::Navigate, None) => "←: Back | Q: Quit",
    };

    let next = if *app.snapshot.can_advance() { "Next ready" } else { "Next blocked" };
    let status = Paragraph::new(format!("{} | {}", next, help_text))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(max).collect();
        short.push_str("...");
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("नमस्ते", 10), "नमस्ते");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
