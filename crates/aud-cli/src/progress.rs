use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Await `request` behind a stderr spinner when the terminal allows one.
///
/// The spinner is cleared on success and left with `"<message> failed"` on error.
pub async fn track<T, E>(message: &str, request: impl Future<Output = Result<T, E>>) -> Result<T, E> {
    let Some(bar) = ui::prefs().spinner.then(|| spinner(message)) else {
        return request.await;
    };
    let result = request.await;
    match &result {
        Ok(_) => bar.finish_and_clear(),
        Err(_) => bar.abandon_with_message(format!("{message} failed")),
    }
    result
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message.to_string());
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
