//! Domain reducers called from the root `update.rs`.
//!
//! Each page owns one module; navigation and mutation outcomes are shared
//! across pages and live in their own modules.

pub mod course_detail;
pub mod courses;
pub mod mutations;
pub mod navigation;
pub mod students;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::messages::Command;

    pub fn names(commands: &[Command]) -> Vec<&'static str> {
        commands.iter().map(Command::name).collect()
    }
}
