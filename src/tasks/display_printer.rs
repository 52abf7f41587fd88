//! Terminal display background task

use std::io::Write;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    state::DisplayState,
    stopwatch::ToggleLabel,
};

/// Render the labels as one terminal line
pub fn render_line(display: &DisplayState) -> String {
    let marker = match display.controls.toggle {
        ToggleLabel::Pause => ">",
        ToggleLabel::Start => "=",
    };
    format!("{} {}  {}", marker, display.time, display.sets)
}

/// Background task that redraws the stopwatch line on stdout whenever a label changes
pub async fn display_printer_task(mut display_rx: watch::Receiver<DisplayState>) {
    info!("Starting terminal display");

    loop {
        let line = render_line(&display_rx.borrow_and_update());
        if let Err(e) = draw(&line) {
            warn!("Failed to draw stopwatch line: {}", e);
        }

        if display_rx.changed().await.is_err() {
            debug!("Display channel closed, stopping terminal display");
            break;
        }
    }

    println!();
}

fn draw(line: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    // Clear the current line and redraw in place
    write!(stdout, "\r\x1b[2K{}", line)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::Controls;

    #[test]
    fn render_marks_running_state() {
        let mut display = DisplayState::default();
        assert_eq!(render_line(&display), "= 00:00.0  Sets: 0");

        display.time = "01:01.2".to_string();
        display.sets = "Sets: 3".to_string();
        display.controls = Controls::for_running(true);
        assert_eq!(render_line(&display), "> 01:01.2  Sets: 3");
    }
}
