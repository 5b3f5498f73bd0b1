// src/update.rs
//
// Root reducer. Domain reducers get the first look at every message; the
// first one that consumes it wins.
//
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if crate::reducers::navigation::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::students::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::courses::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::course_detail::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::mutations::update(state, &msg, &mut commands) {
        return commands;
    }

    debug_log!("Unhandled message: {:?}", msg);
    commands
}
