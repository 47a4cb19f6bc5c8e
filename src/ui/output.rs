use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::STAR, text.style(theme().header.clone()));
}

/// "Querying ..." line printed before each archive request.
pub fn querying(text: &str) {
    println!("{} {}", Icons::TELESCOPE, text.style(theme().query.clone()));
}

pub fn found(text: &str) {
    println!("{} {}", Icons::CHECK, text.style(theme().success.clone()));
}

pub fn no_results(text: &str) {
    println!("{} {}", Icons::SEARCH, text.style(theme().warn.clone()));
}

pub fn saved(text: &str) {
    println!("{} {}", Icons::SAVE, text.style(theme().success.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn timing(elapsed: &str) {
    println!("{} {}", Icons::CLOCK.style(theme().dim.clone()), elapsed);
}
