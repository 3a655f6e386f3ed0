use console::style;
use promptcraft_core::prompts::catalog;
use promptcraft_core::{DefaultsConfig, Platform};
use std::fmt::Write as _;

/// Handle the options command
pub fn handle_options_command(defaults: &DefaultsConfig, platform: Option<Platform>) {
    let platforms: Vec<Platform> = match platform {
        Some(platform) => vec![platform],
        None => Platform::ALL.to_vec(),
    };

    for (index, platform) in platforms.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!(
            "{} {}",
            style(platform.as_str()).cyan().bold(),
            style(format!("({})", platform.display_name())).dim()
        );
        print!("{}", render_platform(defaults, platform));
    }
}

/// Plain-text listing for one platform
pub fn render_platform(defaults: &DefaultsConfig, platform: Platform) -> String {
    let mut out = String::new();
    let selected = defaults.option_for(platform);

    for option in catalog::options_for(platform) {
        let marker = if option.value == selected { " (default)" } else { "" };
        let _ = writeln!(out, "  {:<16} {}{marker}", option.value, option.label);
    }
    if !catalog::is_known_option(platform, selected) {
        let _ = writeln!(out, "  {selected:<16} configured default (custom)");
    }

    if let Some(sample) = catalog::sample_input(platform) {
        let _ = writeln!(out, "  sample: {sample}");
    }

    let actions = catalog::quick_actions(platform);
    if !actions.is_empty() {
        let _ = writeln!(out, "  quick actions:");
        for (i, action) in actions.iter().enumerate() {
            let _ = writeln!(out, "    {:>2}. {action}", i + 1);
        }
    }
    out
}
