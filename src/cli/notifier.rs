use console::style;
use promptcraft_core::generation::{Notice, NoticeSeverity, Notifier};

/// Renders notices as styled lines on stderr, keeping stdout for the prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.severity {
            NoticeSeverity::Success => eprintln!(
                "{} {}",
                style(&notice.title).green().bold(),
                style(&notice.description).dim()
            ),
            NoticeSeverity::Destructive => eprintln!(
                "{} {}",
                style(&notice.title).red().bold(),
                style(&notice.description).dim()
            ),
        }
    }
}
