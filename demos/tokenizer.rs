//! Identifier tokenizer
//!
//! Splits a string into identifiers and numbers with two small machines.
//! Each machine consumes characters until it refuses one, then the token
//! is emitted and the machine restarts.
//!
//! Run with: RUST_LOG=trace cargo run --example tokenizer

use fsm_engine::builder::guarded_transition;
use fsm_engine::{Machine, MachineOptions, State};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn word_machine(
    kind: char,
    first: fn(&char) -> bool,
    rest: fn(&char) -> bool,
) -> Machine<char, String> {
    // the literal targets name the states; input chars are what gets committed
    Machine::with_options(
        [
            State::anonymous()
                .transition(guarded_transition(kind, move |c: &char| first(c)))
                .initial(),
            State::new(kind).transition(guarded_transition('+', move |c: &char| rest(c))),
            State::new('+').transition(guarded_transition('+', move |c: &char| rest(c))),
        ],
        MachineOptions::new()
            .init_result(String::new())
            .calculate_result(|memo: &String, c: &char| format!("{memo}{c}")),
    )
    .expect("tokenizer machine is well formed")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fsm_engine=info".parse().expect("valid directive")),
        )
        .init();

    let mut identifiers = word_machine('i', char::is_ascii_alphabetic, char::is_ascii_alphanumeric);
    let mut numbers = word_machine('n', char::is_ascii_digit, char::is_ascii_digit);

    let source = "var123 = 42 + count7";
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(&c) = chars.peek() {
        let machine = if identifiers.can_transite(&c) {
            &mut identifiers
        } else if numbers.can_transite(&c) {
            &mut numbers
        } else {
            chars.next();
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
            continue;
        };

        while let Some(&next) = chars.peek() {
            if !machine.go(next) {
                break;
            }
            chars.next();
        }
        tokens.push(machine.result().clone());
        machine.restart();
    }

    info!(count = tokens.len(), "tokenized");
    println!("{tokens:?}");
}
