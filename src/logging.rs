use crate::config::Config;
use crate::error::ParseError;
use crate::parse::Command;

/// Install a file logger writing to `<log_dir>/mmsh.log`.
/// Best-effort: failures are silently ignored (logging must never block the shell).
pub fn init(config: &Config) {
    let level = config.log_level();
    if level == log::LevelFilter::Off {
        return;
    }

    let log_dir = config.log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("mmsh.log"))
    else {
        return;
    };

    let log_config = simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let _ = simplelog::WriteLogger::init(level, log_config, file);
}

/// Record the outcome of one parse.
pub fn log_parse(input: &str, result: &Result<Vec<Command>, ParseError>) {
    let input: String = input.chars().take(200).collect();
    match result {
        Ok(commands) => {
            let real = commands.iter().filter(|c| c.is_real()).count();
            log::info!(
                "parsed\t{input}\t{} entities, {real} commands",
                commands.len()
            );
        }
        Err(e) => log::warn!("rejected\t{input}\t{e}"),
    }
}
