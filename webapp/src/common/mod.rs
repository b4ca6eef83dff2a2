pub mod preference;
pub mod scroll;
pub mod style;

use chrono::{Datelike, Local};

// for the copyright line in the footer
pub fn current_year() -> i32 {
    Local::now().year()
}
