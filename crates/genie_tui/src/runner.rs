//! TUI runner - main loop and wizard integration.
//!
//! Quick actions run inline between frames. Tasks that await a service are
//! raced against progress updates and key events, so the progress view keeps
//! redrawing and Esc drops the task future.

use crate::{App, AppMode, EditField, Event, EventHandler, Task};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use genie_core::{AssetKind, StepId};
use genie_error::{GenieError, GenieResult, TuiError, TuiErrorKind, TuiResult};
use genie_wizard::{Notice, ProgressSnapshot, Wizard};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the wizard in the terminal until the user quits.
///
/// # Arguments
///
/// * `wizard` - Wizard to drive
/// * `download_dir` - Directory used by the preview step's download action
pub async fn run_tui(wizard: Wizard, download_dir: PathBuf) -> TuiResult<()> {
    enable_raw_mode()
        .map_err(|e| TuiError::new(TuiErrorKind::TerminalSetup(format!("Failed to enable raw mode: {}", e))))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| TuiError::new(TuiErrorKind::TerminalSetup(format!("Failed to setup terminal: {}", e))))?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| TuiError::new(TuiErrorKind::TerminalSetup(format!("Failed to create terminal: {}", e))))?;

    let result = main_loop(&mut terminal, wizard, download_dir).await;

    disable_raw_mode()
        .map_err(|e| TuiError::new(TuiErrorKind::TerminalRestore(format!("Failed to disable raw mode: {}", e))))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        .map_err(|e| TuiError::new(TuiErrorKind::TerminalRestore(format!("Failed to cleanup terminal: {}", e))))?;
    terminal
        .show_cursor()
        .map_err(|e| TuiError::new(TuiErrorKind::TerminalRestore(format!("Failed to show cursor: {}", e))))?;

    result
}

async fn main_loop(terminal: &mut Term, mut wizard: Wizard, download_dir: PathBuf) -> TuiResult<()> {
    let mut app = App::new(wizard.snapshot(), download_dir);
    let mut events = EventHandler::new(250).spawn();
    let mut progress = wizard.subscribe();

    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app, &wizard))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        let Some(event) = events.recv().await else {
            break;
        };
        if let Event::Key(key) = event
            && let Some(task) = handle_key(&mut app, &mut wizard, key)
        {
            run_task(terminal, &mut app, &mut wizard, &mut events, &mut progress, task).await?;
        }
    }

    info!("Wizard closed");
    Ok(())
}

/// Drive one task to completion, cancellation or quit.
#[instrument(skip_all, fields(task = %task.label()))]
async fn run_task(
    terminal: &mut Term,
    app: &mut App,
    wizard: &mut Wizard,
    events: &mut mpsc::UnboundedReceiver<Event>,
    progress: &mut watch::Receiver<ProgressSnapshot>,
    task: Task,
) -> TuiResult<()> {
    app.start_busy(task.label());
    app.progress = progress.borrow_and_update().clone();

    let outcome: Option<GenieResult<Notice>> = {
        let work = task.execute(wizard);
        tokio::pin!(work);
        let mut progress_open = true;
        loop {
            terminal
                .draw(|f| crate::ui::draw_busy(f, app))
                .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

            tokio::select! {
                outcome = &mut work => break Some(outcome),
                changed = progress.changed(), if progress_open => match changed {
                    Ok(()) => app.progress = progress.borrow_and_update().clone(),
                    Err(_) => progress_open = false,
                },
                event = events.recv() => match event {
                    Some(Event::Key(key)) if is_quit(&key) => {
                        app.quit();
                        break None;
                    }
                    Some(Event::Key(key)) if key.code == KeyCode::Esc => break None,
                    Some(_) => {}
                    None => break None,
                },
            }
        }
    };

    app.finish_busy();
    match outcome {
        Some(Ok(notice)) => app.notify(notice),
        Some(Err(err)) => app.notify(Notice::from_error(&err)),
        None => {
            debug!("Task abandoned");
            app.notify(Notice::info("Cancelled", "The step was left unchanged."));
        }
    }
    app.refresh(wizard.snapshot());
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply a key press. Returns a task when the key starts long-running work.
pub(crate) fn handle_key(app: &mut App, wizard: &mut Wizard, key: KeyEvent) -> Option<Task> {
    if is_quit(&key) {
        app.quit();
        return None;
    }
    let task = match app.mode {
        AppMode::Edit(field) => handle_edit_key(app, wizard, field, key),
        AppMode::Navigate => handle_navigate_key(app, wizard, key),
        AppMode::Busy => None,
    };
    app.refresh(wizard.snapshot());
    task
}

fn handle_edit_key(app: &mut App, wizard: &mut Wizard, field: EditField, key: KeyEvent) -> Option<Task> {
    match key.code {
        KeyCode::Esc => app.leave_edit(),
        KeyCode::Enter if field == EditField::Text || field == EditField::Narration => push(app, wizard, field, "\n"),
        KeyCode::Enter => {
            app.leave_edit();
            if field == EditField::MusicPath && !app.music_path.trim().is_empty() {
                return Some(Task::UploadMusic(PathBuf::from(app.music_path.trim())));
            }
        }
        KeyCode::Backspace => match field {
            EditField::Text => wizard.text_input_mut().pop_char(),
            EditField::Duration => {
                let mut input = wizard.text_input().duration_input().to_string();
                input.pop();
                wizard.text_input_mut().set_duration_input(input);
            }
            EditField::Narration => wizard.voice_mut().pop_char(),
            EditField::Embellishment => wizard.image_mut().pop_char(),
            EditField::MusicPath => {
                app.music_path.pop();
            }
        },
        KeyCode::Char(c) => push(app, wizard, field, c.encode_utf8(&mut [0; 4])),
        _ => {}
    }
    None
}

fn push(app: &mut App, wizard: &mut Wizard, field: EditField, input: &str) {
    match field {
        EditField::Text => wizard.text_input_mut().push_str(input),
        EditField::Duration => {
            let value = format!("{}{}", wizard.text_input().duration_input(), input);
            wizard.text_input_mut().set_duration_input(value);
        }
        EditField::Narration => wizard.voice_mut().push_str(input),
        EditField::Embellishment => wizard.image_mut().push_str(input),
        EditField::MusicPath => app.music_path.push_str(input),
    }
}

fn handle_navigate_key(app: &mut App, wizard: &mut Wizard, key: KeyEvent) -> Option<Task> {
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return None;
        }
        KeyCode::Right | KeyCode::Tab => {
            return match wizard.commit_and_advance() {
                Ok(_) if wizard.current_step() == Some(StepId::Processing) => Some(Task::Analyze),
                Ok(_) => None,
                Err(err) => {
                    app.notify(Notice::from_error(&err));
                    None
                }
            };
        }
        KeyCode::Left | KeyCode::BackTab => {
            wizard.retreat();
            return None;
        }
        _ => {}
    }

    match wizard.current_step() {
        Some(StepId::TextInput) => match key.code {
            KeyCode::Char('e') | KeyCode::Enter => app.enter_edit(EditField::Text),
            KeyCode::Char('d') => app.enter_edit(EditField::Duration),
            KeyCode::Char('a') => wizard.text_input_mut().toggle_aspect_ratio(),
            KeyCode::Char('i') => {
                let generate = !wizard.text_input().generate_image();
                wizard.text_input_mut().set_generate_image(generate);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Err(err) = wizard.text_input_mut().load_example(index) {
                    app.notify(Notice::from_error(&GenieError::from(err)));
                }
            }
            _ => {}
        },
        Some(StepId::Processing) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                return Some(Task::Analyze);
            }
        }
        Some(StepId::Voice) => match key.code {
            KeyCode::Char('e') => app.enter_edit(EditField::Narration),
            KeyCode::Char('v') => wizard.voice_mut().cycle_voice(),
            KeyCode::Char('p') => return Some(Task::PreviewVoice(wizard.voice().voice().id.to_string())),
            KeyCode::Char('g') | KeyCode::Enter => return Some(Task::GenerateVoice),
            KeyCode::Char('l') => return Some(Task::Play(AssetKind::Audio)),
            _ => {}
        },
        Some(StepId::Image) => match key.code {
            KeyCode::Char('e') => app.enter_edit(EditField::Embellishment),
            KeyCode::Char('s') => wizard.image_mut().cycle_style(),
            KeyCode::Char('c') => wizard.image_mut().cycle_scheme(),
            KeyCode::Char('+') | KeyCode::Up => wizard.image_mut().quality_up(),
            KeyCode::Char('-') | KeyCode::Down => wizard.image_mut().quality_down(),
            KeyCode::Char('t') => {
                let include = !wizard.image().include_text();
                wizard.image_mut().set_include_text(include);
            }
            KeyCode::Char('o') => {
                let overlay = !wizard.image().text_overlay();
                wizard.image_mut().set_text_overlay(overlay);
            }
            KeyCode::Char('g') | KeyCode::Enter => return Some(Task::GenerateImage),
            KeyCode::Char('l') => return Some(Task::Play(AssetKind::Image)),
            _ => {}
        },
        Some(StepId::Music) => match key.code {
            KeyCode::Char('u') | KeyCode::Char('e') | KeyCode::Enter => app.enter_edit(EditField::MusicPath),
            KeyCode::Char('s') => notify_err(app, wizard.skip_music()),
            KeyCode::Char('x') => {
                app.music_path.clear();
                notify_err(app, wizard.remove_music());
            }
            KeyCode::Char('l') => return Some(Task::Play(AssetKind::Music)),
            _ => {}
        },
        Some(StepId::Video) => {
            if matches!(key.code, KeyCode::Char('g') | KeyCode::Enter) {
                return Some(Task::GenerateVideo);
            }
        }
        Some(StepId::Preview) => match key.code {
            KeyCode::Char('p') | KeyCode::Enter => return Some(Task::Play(AssetKind::Video)),
            KeyCode::Char('d') => return Some(Task::DownloadAll(app.download_dir.clone())),
            KeyCode::Char('s') => app.notify(Notice::info("Share Link", wizard.share_link())),
            KeyCode::Char('n') => {
                wizard.create_new();
                app.music_path.clear();
                app.notify(Notice::success("New Project", "Started a fresh project."));
            }
            _ => {}
        },
        None => {}
    }
    None
}

fn notify_err<T>(app: &mut App, result: GenieResult<T>) {
    if let Err(err) = result {
        app.notify(Notice::from_error(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::tests::idle_wizard;
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_for(wizard: &Wizard) -> App {
        App::new(wizard.snapshot(), PathBuf::from("/tmp"))
    }

    #[test]
    fn typing_edits_the_source_text() {
        let mut wizard = idle_wizard();
        let mut app = app_for(&wizard);

        handle_key(&mut app, &mut wizard, key(KeyCode::Char('e')));
        assert_eq!(app.mode, AppMode::Edit(EditField::Text));
        for c in "Om Shanti".chars() {
            handle_key(&mut app, &mut wizard, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, &mut wizard, key(KeyCode::Backspace));
        handle_key(&mut app, &mut wizard, key(KeyCode::Esc));

        assert_eq!(wizard.text_input().text(), "Om Shant");
        assert_eq!(app.mode, AppMode::Navigate);
    }

    #[test]
    fn blocked_advance_shows_a_notice() {
        let mut wizard = idle_wizard();
        let mut app = app_for(&wizard);

        let task = handle_key(&mut app, &mut wizard, key(KeyCode::Right));
        assert!(task.is_none());
        assert_eq!(wizard.cursor(), 0);
        assert_eq!(app.latest_notice().map(|n| n.title().as_str()), Some("Text Required"));
    }

    #[test]
    fn entering_processing_starts_analysis() {
        let mut wizard = idle_wizard();
        let mut app = app_for(&wizard);
        wizard.text_input_mut().set_text("Jai Shri Ram, Jai Hanuman");

        let task = handle_key(&mut app, &mut wizard, key(KeyCode::Right));
        assert_eq!(task, Some(Task::Analyze));
        assert_eq!(*app.snapshot.cursor(), 1);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut wizard = idle_wizard();
        let mut app = app_for(&wizard);
        app.enter_edit(EditField::Text);
        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;

        handle_key(&mut app, &mut wizard, ctrl_c);
        assert!(app.should_quit);
        assert!(wizard.text_input().text().is_empty());
    }
}
